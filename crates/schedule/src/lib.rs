//! Schedule-generation engine
//!
//! Turns a tenant's human-specified local schedule (off/on times, weekday
//! expressions) into the UTC-and-weekday representation the kube-green
//! reconciler consumes, and decides the object layout per namespace group:
//! one combined SleepInfo when sleep and wake weekdays agree, or a
//! correlated sleep/wake pair when they differ. Wake-up of the datastores
//! group is staggered so dependencies come back in order.
//!
//! The engine is a pure synchronous computation: no clock access (the
//! caller anchors conversions to an explicit reference date), no cluster
//! access, no shared state between runs.

pub mod assembler;
pub mod builder;
pub mod error;
pub mod policy;
pub mod timeconv;
pub mod weekdays;

pub use assembler::{
    ResourceToggles, ScheduleAssembler, ScheduleIntent, ScheduleRequest, WakePhase,
};
pub use builder::render;
pub use error::ScheduleError;
pub use policy::{NamespaceGroup, SchedulePolicy, StaggerOffsets};
pub use timeconv::{DayShift, TimeConverter, TimeOfDay};
pub use weekdays::WeekdaySpec;

#[cfg(test)]
mod builder_test;
#[cfg(test)]
mod timeconv_test;
#[cfg(test)]
mod weekdays_test;
