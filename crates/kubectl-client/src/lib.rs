//! kubectl subprocess client
//!
//! All cluster access goes through the external `kubectl` binary, one
//! blocking invocation at a time: `get -o json` for reads, `apply -f -`
//! for writes, `delete --ignore-not-found` for pruning. No retries; a
//! failed apply surfaces kubectl's stderr verbatim and aborts the run.
//!
//! # Example
//!
//! ```no_run
//! use kubectl_client::{ClusterClient, KubectlClient};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = KubectlClient::new();
//!
//! // List the SleepInfos of one namespace
//! let sleep_infos = client.get_sleep_infos("acme-apps")?;
//! for info in &sleep_infos {
//!     println!("{:?}", info.metadata.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod cluster_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::KubectlClient;
pub use cluster_trait::ClusterClient;
pub use error::KubectlError;
pub use models::*;
#[cfg(feature = "test-util")]
pub use mock::MockKubectlClient;
