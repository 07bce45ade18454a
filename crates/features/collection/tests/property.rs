mod fixtures;

use fixtures::into_record;
use proptest::prelude::*;
use roster_collection::*;
use serde_json::json;

fn valid_record(id: u32) -> Record {
    into_record(json!({ "id": id, "name": format!("Item {id}"), "value": id }))
}

proptest! {
    #[test]
    fn size_tracks_successful_appends(max_items in 1usize..32, attempts in 0usize..64) {
        let config = CollectionConfig::new("prop", max_items).unwrap();
        let mut items = BoundedCollection::new(config);

        let mut accepted = Vec::new();
        for id in 0..attempts {
            let record = valid_record(u32::try_from(id).unwrap());
            let before = items.len();
            match items.append(record.clone()) {
                Ok(()) => accepted.push(record),
                Err(CollectionError::Capacity { .. }) => prop_assert_eq!(items.len(), before),
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
            prop_assert!(items.len() <= max_items);
        }

        prop_assert_eq!(items.len(), attempts.min(max_items));
        prop_assert_eq!(items.query(None, None), accepted);
    }

    #[test]
    fn records_missing_required_keys_are_rejected(
        keep_id in any::<bool>(),
        keep_name in any::<bool>(),
        keep_value in any::<bool>(),
    ) {
        prop_assume!(!(keep_id && keep_name && keep_value));

        let mut record = valid_record(1);
        for (keep, key) in [(keep_id, "id"), (keep_name, "name"), (keep_value, "value")] {
            if !keep {
                record.remove(key);
            }
        }

        let err = validate_record(&record).expect_err("incomplete record must fail");
        let is_validation = matches!(err, CollectionError::Validation { .. });
        prop_assert!(is_validation);
    }
}
