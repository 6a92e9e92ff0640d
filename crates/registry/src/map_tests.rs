use super::*;

#[test]
fn put_then_get_round_trips() {
    let map: ConcurrentMap<String, i32> = ConcurrentMap::new();
    map.put("a".to_string(), 1);
    assert_eq!(map.get(&"a".to_string()), Some(1));
    assert_eq!(map.size(), 1);
}

#[test]
fn pop_removes_and_returns() {
    let map: ConcurrentMap<String, i32> = ConcurrentMap::new();
    map.put("a".to_string(), 1);
    assert_eq!(map.pop(&"a".to_string()), Some(1));
    assert_eq!(map.get(&"a".to_string()), None);
    assert_eq!(map.size(), 0);
}

#[test]
fn keys_is_a_snapshot() {
    let map: ConcurrentMap<String, i32> = ConcurrentMap::new();
    map.put("a".to_string(), 1);
    map.put("b".to_string(), 2);
    let mut keys = map.keys();
    keys.sort();
    assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);

    map.pop(&"a".to_string());
    // snapshot already taken, unaffected by the subsequent pop
    assert_eq!(keys.len(), 2);
}

#[test]
fn clear_empties_the_map() {
    let map: ConcurrentMap<String, i32> = ConcurrentMap::new();
    map.put("a".to_string(), 1);
    map.clear();
    assert_eq!(map.size(), 0);
    assert!(!map.contains(&"a".to_string()));
}
