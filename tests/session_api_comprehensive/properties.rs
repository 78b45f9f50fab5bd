//! Property Tests
//!
//! Randomized checks of normalization, overwrite and namespace precedence.

use crate::*;
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,11}"
}

proptest! {
    #[test]
    fn prop_contains_after_set_and_not_after_clear(key in key_strategy(), v in any::<i64>()) {
        let session = Session::new();

        session.set(&key, v);
        prop_assert!(session.contains(&key));

        session.clear();
        prop_assert!(!session.contains(&key));
    }

    #[test]
    fn prop_lookup_ignores_case(key in key_strategy(), v in any::<i32>()) {
        let session = Session::new();

        session.set(&key, v);

        prop_assert_eq!(session.get_as::<i32>(&key.to_uppercase()), Some(v));
        prop_assert_eq!(session.get_as::<i32>(&key.to_lowercase()), Some(v));
    }

    #[test]
    fn prop_overwrite_keeps_count(key in key_strategy(), a in any::<i32>(), b in any::<i32>()) {
        let session = Session::new();

        session.set(&key, a);
        let count = session.count();
        session.set(&key, b);

        prop_assert_eq!(session.get_as::<i32>(&key), Some(b));
        prop_assert_eq!(session.count(), count);
    }

    #[test]
    fn prop_last_kind_wins(
        name in key_strategy(),
        members in prop::collection::btree_set("[a-z]{1,6}", 1..5),
        scalar_last in any::<bool>(),
    ) {
        let session = Session::new();

        let write_group = |s: &Session| {
            for (i, m) in members.iter().enumerate() {
                s.set_in(&name, m, i);
            }
        };

        if scalar_last {
            write_group(&session);
            session.set(&name, "scalar".to_string());
        } else {
            session.set(&name, "scalar".to_string());
            write_group(&session);
        }

        prop_assert_eq!(session.count(), 1);
        let entry = session.get(&name).unwrap();
        if scalar_last {
            prop_assert!(!entry.is_group());
            prop_assert!(session.groups().is_empty());
            prop_assert_eq!(session.records().len(), 1);
        } else {
            prop_assert_eq!(entry.as_group().map(|g| g.len()), Some(members.len()));
            prop_assert_eq!(session.groups().len(), 1);
            prop_assert_eq!(session.records().len(), members.len());
        }
    }

    #[test]
    fn prop_pop_returns_prior_value(key in key_strategy(), v in any::<u32>()) {
        let session = Session::new();

        session.set(&key, v);

        prop_assert_eq!(session.pop_as::<u32>(&key), Some(v));
        prop_assert!(!session.contains(&key));
    }

    #[test]
    fn prop_double_delete_of_absent_key(present in key_strategy(), absent in key_strategy()) {
        prop_assume!(present.to_lowercase() != absent.to_lowercase());
        let session = Session::new();

        session.set(&present, 1u8);

        session.delete(&absent);
        prop_assert_eq!(session.count(), 1);
        session.delete(&absent);
        prop_assert_eq!(session.count(), 1);
    }

    #[test]
    fn prop_group_count_is_one_per_group(
        groups in prop::collection::btree_map("[a-z]{1,6}", 1usize..6, 1..6),
    ) {
        let session = Session::new();

        for (group, size) in &groups {
            for i in 0..*size {
                session.set_in(group, &format!("m{}", i), i);
            }
        }

        prop_assert_eq!(session.count(), groups.len());
        let victim = groups.keys().next().unwrap();
        session.delete(victim);
        prop_assert_eq!(session.count(), groups.len() - 1);
    }
}
