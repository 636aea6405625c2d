//! Unit tests for SleepInfo rendering

#[cfg(test)]
mod tests {
    use crate::assembler::{ScheduleAssembler, ScheduleRequest};
    use crate::builder::render;
    use crate::policy::{NamespaceGroup, SchedulePolicy};
    use crate::timeconv::TimeOfDay;
    use chrono::NaiveDate;
    use crds::{SleepInfo, PAIR_ID_ANNOTATION, PAIR_ROLE_ANNOTATION};

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn time(input: &str) -> TimeOfDay {
        input.parse().unwrap()
    }

    fn rendered(weekdays: &str, sleepdays: Option<&str>, wakedays: Option<&str>) -> Vec<SleepInfo> {
        let request = ScheduleRequest {
            tenant: "acme".to_string(),
            off_local: time("22:00"),
            on_local: time("06:00"),
            weekdays: Some(weekdays.to_string()),
            sleepdays: sleepdays.map(str::to_string),
            wakedays: wakedays.map(str::to_string),
            groups: Vec::new(),
        };
        let intents = ScheduleAssembler::new(SchedulePolicy::default())
            .assemble(&request, reference())
            .unwrap();
        render(&intents)
    }

    fn by_name<'a>(objects: &'a [SleepInfo], name: &str) -> &'a SleepInfo {
        objects
            .iter()
            .find(|o| o.metadata.name.as_deref() == Some(name))
            .unwrap_or_else(|| panic!("no object named {name}"))
    }

    fn annotation<'a>(object: &'a SleepInfo, key: &str) -> Option<&'a str> {
        object
            .metadata
            .annotations
            .as_ref()
            .and_then(|a| a.get(key))
            .map(String::as_str)
    }

    #[test]
    fn test_equal_weekdays_render_one_object_per_simple_group_and_four_for_datastores() {
        let objects = rendered("lunes-viernes", None, None);
        // 4 simple groups x 1 combined + datastores x (1 sleep + 3 wake)
        assert_eq!(objects.len(), 8);

        let apps = by_name(&objects, "acme-apps");
        assert_eq!(apps.metadata.namespace.as_deref(), Some("acme-apps"));
        assert_eq!(apps.spec.sleep_at, "03:00");
        assert_eq!(apps.spec.wake_up_at.as_deref(), Some("11:07"));
        assert!(apps.metadata.annotations.is_none());
    }

    #[test]
    fn test_datastores_objects_are_correlated_and_staggered() {
        let objects = rendered("lunes-viernes", None, None);

        let sleep = by_name(&objects, "sleep-acme-datastores");
        assert_eq!(sleep.spec.sleep_at, "03:00");
        assert_eq!(sleep.spec.wake_up_at, None);
        assert_eq!(sleep.spec.weekdays, "2,3,4,5,6");
        assert!(sleep.spec.suspend_deployments);
        assert!(sleep.spec.suspend_stateful_sets_hdfs);
        assert_eq!(annotation(sleep, PAIR_ROLE_ANNOTATION), Some("sleep"));

        for (name, at) in [
            ("wake-acme-datastores-pg-hdfs", "11:00"),
            ("wake-acme-datastores-pgbouncer", "11:05"),
            ("wake-acme-datastores", "11:07"),
        ] {
            let wake = by_name(&objects, name);
            // Wake-only objects carry the trigger time in sleepAt
            assert_eq!(wake.spec.sleep_at, at, "{name}");
            assert_eq!(wake.spec.wake_up_at, None, "{name}");
            assert_eq!(wake.spec.weekdays, "1,2,3,4,5", "{name}");
            assert_eq!(annotation(wake, PAIR_ROLE_ANNOTATION), Some("wake"));
            assert_eq!(
                annotation(wake, PAIR_ID_ANNOTATION),
                annotation(sleep, PAIR_ID_ANNOTATION),
                "{name}"
            );
        }
    }

    #[test]
    fn test_unequal_weekdays_render_correlated_pairs() {
        let objects = rendered("0-6", Some("viernes"), Some("lunes"));

        let sleep = by_name(&objects, "sleep-acme-apps");
        assert_eq!(sleep.spec.wake_up_at, None);
        assert_eq!(sleep.spec.weekdays, "6"); // Friday local, +1 shift
        let wake = by_name(&objects, "wake-acme-apps");
        assert_eq!(wake.spec.sleep_at, "11:07");
        assert_eq!(wake.spec.weekdays, "1");

        assert_eq!(annotation(sleep, PAIR_ID_ANNOTATION), Some("acme-apps"));
        assert_eq!(
            annotation(sleep, PAIR_ID_ANNOTATION),
            annotation(wake, PAIR_ID_ANNOTATION)
        );
        assert_eq!(annotation(sleep, PAIR_ROLE_ANNOTATION), Some("sleep"));
        assert_eq!(annotation(wake, PAIR_ROLE_ANNOTATION), Some("wake"));
    }

    #[test]
    fn test_repeated_generation_yields_identical_names() {
        let first: Vec<_> = rendered("lunes-viernes", None, None)
            .into_iter()
            .map(|o| o.metadata.name)
            .collect();
        let second: Vec<_> = rendered("lunes-viernes", None, None)
            .into_iter()
            .map(|o| o.metadata.name)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_yaml_rendering_matches_the_wire_contract() {
        let objects = rendered("lunes-viernes", None, None);

        let apps = serde_yaml::to_string(by_name(&objects, "acme-apps")).unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&apps).unwrap();
        assert_eq!(doc["apiVersion"], "kube-green.com/v1alpha1");
        assert_eq!(doc["kind"], "SleepInfo");
        assert_eq!(doc["spec"]["timeZone"], "UTC");
        assert_eq!(doc["spec"]["sleepAt"], "03:00");
        assert_eq!(doc["spec"]["wakeUpAt"], "11:07");
        assert_eq!(doc["spec"]["suspendDeployments"], true);
        assert_eq!(doc["spec"]["suspendStatefulSets"], false);
        // Dependent-class toggles are omitted when false
        assert!(doc["spec"].get("suspendStatefulSetsHdfs").is_none(), "{apps}");
        assert_eq!(
            doc["spec"]["excludeRef"][0]["matchLabels"]["cct.stratio.com/application_id"],
            "virtualizer.acme-apps"
        );

        let sleep = serde_yaml::to_string(by_name(&objects, "sleep-acme-datastores")).unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&sleep).unwrap();
        assert!(doc["spec"].get("wakeUpAt").is_none(), "{sleep}");
        assert_eq!(doc["spec"]["suspendStatefulSetsHdfs"], true);
        assert_eq!(
            doc["metadata"]["annotations"]["kube-green.stratio.com/pair-id"],
            "acme-datastores"
        );
    }
}
