use proptest::prelude::*;
use roster_kernel::utils::{chunk, flatten, flatten_with};
use serde_json::{Map, Value, json};

proptest! {
    #[test]
    fn chunk_covers_every_element_in_order(
        items in proptest::collection::vec(any::<i32>(), 0..256),
        size in 1usize..32,
    ) {
        let chunks = chunk(&items, size).unwrap();

        prop_assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= size));
        if let Some((last, init)) = chunks.split_last() {
            prop_assert!(init.iter().all(|c| c.len() == size));
            prop_assert!(last.len() <= size);
        }
        prop_assert_eq!(chunks.len(), items.len().div_ceil(size));
        prop_assert_eq!(chunks.concat(), items);
    }

    #[test]
    fn flatten_is_identity_on_flat_objects(
        entries in proptest::collection::btree_map("[a-z]{1,8}", any::<i64>(), 0..16),
    ) {
        let input: Map<String, Value> =
            entries.into_iter().map(|(k, v)| (k, Value::from(v))).collect();
        prop_assert_eq!(flatten(&input), input);
    }
}

#[test]
fn flatten_then_chunk_keys() {
    let nested = json!({
        "server": { "host": "0.0.0.0", "port": 8080 },
        "tags": ["a", "b"],
    });
    let flat = flatten_with(nested.as_object().unwrap(), ".", "");
    let keys: Vec<&String> = flat.keys().collect();

    let batches = chunk(&keys, 2).unwrap();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0], vec!["server.host", "server.port"]);
    assert_eq!(batches[1], vec!["tags"]);
}
