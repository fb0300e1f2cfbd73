//! Integration tests for sortedslice
//!
//! End-to-end scenarios across map operations and snapshots.

use sortedslice::{SortedMap, VERSION};
use tempfile::TempDir;

// =============================================================================
// Map Scenarios
// =============================================================================

#[test]
fn test_insert_out_of_order_then_delete() {
    let map = SortedMap::new();
    map.add(3, "three".to_string());
    map.add(1, "one".to_string());
    map.add(2, "two".to_string());

    assert_eq!(
        map.to_vec(),
        vec![
            (1, "one".to_string()),
            (2, "two".to_string()),
            (3, "three".to_string()),
        ]
    );
    assert_eq!(map.first_key(), Some(1));
    assert_eq!(map.last_key(), Some(3));

    map.delete(&2);
    assert!(!map.exist(&2));
    assert_eq!(map.len(), 2);

    let mut backward = Vec::new();
    map.range_backward(|k, v| {
        backward.push((*k, v.clone()));
        true
    });
    assert_eq!(
        backward,
        vec![(3, "three".to_string()), (1, "one".to_string())]
    );
}

#[test]
fn test_lookup_on_empty_map_returns_default() {
    let map: SortedMap<i32, String> = SortedMap::new();
    assert_eq!(map.get_or_default(&123), (String::new(), false));
}

// =============================================================================
// Persistence Scenarios
// =============================================================================

#[test]
fn test_mutate_save_load_continue() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("inventory.snapshot");

    let inventory = SortedMap::new();
    inventory.add("widget".to_string(), 10u32);
    inventory.add("gadget".to_string(), 4);
    inventory.add("doohickey".to_string(), 7);
    inventory.delete("gadget");
    inventory.save(&path).unwrap();

    let restored: SortedMap<String, u32> = SortedMap::new();
    restored.load(&path).unwrap();
    assert_eq!(restored.to_vec(), inventory.to_vec());

    // the restored map keeps working as a normal map
    restored.add("gizmo".to_string(), 1);
    assert_eq!(restored.len(), 3);
    assert_eq!(restored.first_key(), Some("doohickey".to_string()));
    assert_eq!(restored.last_key(), Some("widget".to_string()));
}

#[test]
fn test_version_is_set() {
    assert!(!VERSION.is_empty());
}
