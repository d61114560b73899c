//! Duplicate tests: cycles, sharing and object categories

use pretty_assertions::assert_eq;
use sapling::*;

/// Collect the identities of every container reachable from `value`.
fn container_ids(value: &Value, out: &mut Vec<ContainerId>) {
    let Some(id) = value.container_id() else {
        return;
    };
    if out.contains(&id) {
        return;
    }
    out.push(id);
    match value {
        Value::Array(a) => a.to_vec().iter().for_each(|v| container_ids(v, out)),
        Value::Object(o) => o.entries().iter().for_each(|(_, v)| container_ids(v, out)),
        _ => {}
    }
}

fn shares_nothing(a: &Value, b: &Value) -> bool {
    let (mut left, mut right) = (Vec::new(), Vec::new());
    container_ids(a, &mut left);
    container_ids(b, &mut right);
    left.iter().all(|id| !right.contains(id))
}

// ═══════════════════════════════════════════════════════════════════════
// Acyclic Values
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_duplicate_nested_structure() {
    let original = Value::from(
        Object::new()
            .with_field("name", "tree")
            .with_field("height", 12.5)
            .with_field("tags", vec!["oak", "old"])
            .with_field("meta", Object::new().with_field("planted", Value::Null)),
    );

    let copy = duplicate(&original);

    assert_eq!(copy, original);
    assert!(shares_nothing(&copy, &original));
}

#[test]
fn test_duplicate_is_independent() {
    let original = Value::from(Object::new().with_field("list", vec![1, 2]));
    let copy = duplicate(&original);

    set_by_path(&copy, "list.2", Value::from(3));
    assert_eq!(get_by_path(&original, "list.2"), Value::Undefined);
    assert_eq!(get_by_path(&copy, "list.2"), Value::from(3));
}

#[test]
fn test_duplicate_scalars() {
    for value in [
        Value::Undefined,
        Value::Null,
        Value::Bool(true),
        Value::from(3),
        Value::string("text"),
    ] {
        assert_eq!(duplicate(&value), value);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Cycles
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_duplicate_direct_cycle() {
    let node = Object::new().with_field("id", 1);
    node.insert("self", Value::from(node.clone()));
    let original = Value::from(node);

    let copy = duplicate(&original);

    let copied = copy.as_object().unwrap();
    assert!(copied.get("self").unwrap().ptr_eq(&copy));
    assert_eq!(copied.get("id"), Some(Value::from(1)));
    assert_eq!(copy, original);
    assert!(shares_nothing(&copy, &original));
}

#[test]
fn test_duplicate_cycle_through_descendant() {
    // parent -> children[0] -> parent
    let parent = Object::new().with_field("name", "parent");
    let child = Object::new().with_field("name", "child");
    child.insert("parent", Value::from(parent.clone()));
    parent.insert("children", Value::array(vec![Value::from(child)]));
    let original = Value::from(parent);

    let copy = duplicate(&original);

    let back = get_by_path(&copy, "children.0.parent");
    assert!(back.ptr_eq(&copy));
    assert!(!back.ptr_eq(&original));
    assert_eq!(
        get_by_path(&copy, "children.0.parent.children.0.name"),
        Value::from("child")
    );
    assert!(shares_nothing(&copy, &original));
}

#[test]
fn test_duplicate_mutual_cycle_between_arrays() {
    let a = Array::new();
    let b = Array::new();
    a.push(Value::from(b.clone()));
    b.push(Value::from(a.clone()));

    let copy = duplicate(&Value::from(a.clone()));

    let copied_b = get_by_path(&copy, "0");
    assert!(!copied_b.ptr_eq(&Value::from(b)));
    assert!(get_by_path(&copied_b, "0").ptr_eq(&copy));
}

// ═══════════════════════════════════════════════════════════════════════
// Sharing
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_duplicate_preserves_sharing() {
    let shared = Value::from(vec![1, 2, 3]);
    let original = Value::from(
        Object::new()
            .with_field("left", shared.clone())
            .with_field("right", shared.clone()),
    );

    let copy = duplicate(&original);

    let left = get_by_path(&copy, "left");
    let right = get_by_path(&copy, "right");
    assert!(left.ptr_eq(&right));
    assert!(!left.ptr_eq(&shared));
    assert_eq!(left, shared);
}

#[test]
fn test_duplicate_with_shared_map_across_roots() {
    let shared = Value::from(Object::new().with_field("n", 1));
    let first = Value::array(vec![shared.clone()]);
    let second = Value::array(vec![shared.clone()]);

    let mut copies = IdentityMap::new();
    let first_copy = duplicate_with(&first, &mut copies);
    let second_copy = duplicate_with(&second, &mut copies);

    assert!(get_by_path(&first_copy, "0").ptr_eq(&get_by_path(&second_copy, "0")));
    assert!(copies.contains(&shared));
    assert!(copies.get(&shared).unwrap().ptr_eq(&get_by_path(&first_copy, "0")));
}

#[test]
fn test_duplicate_same_root_twice_with_one_map() {
    let root = Value::from(vec![1]);
    let mut copies = IdentityMap::new();
    let a = duplicate_with(&root, &mut copies);
    let b = duplicate_with(&root, &mut copies);
    assert!(a.ptr_eq(&b));
    assert_eq!(copies.len(), 1);
}

#[test]
fn test_structurally_equal_containers_stay_distinct() {
    let original = Value::array(vec![Value::from(vec![1]), Value::from(vec![1])]);
    let copy = duplicate(&original);
    assert!(!get_by_path(&copy, "0").ptr_eq(&get_by_path(&copy, "1")));
}

// ═══════════════════════════════════════════════════════════════════════
// Object Categories
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_duplicate_keeps_bare_kind() {
    let original = Value::from(Object::bare().with_field("x", 1));
    let copy = duplicate(&original);
    assert_eq!(copy.as_object().unwrap().kind(), ObjectKind::Bare);
    assert_eq!(copy, original);
}

#[test]
fn test_duplicate_keeps_date_and_pattern() {
    let original = Value::array(vec![
        Value::from(Object::date(1_700_000_000_000.0)),
        Value::from(Object::pattern("^[a-z]+$")),
    ]);
    let copy = duplicate(&original);

    assert_eq!(
        get_by_path(&copy, "0").as_object().unwrap().kind(),
        ObjectKind::Date(1_700_000_000_000.0)
    );
    assert_eq!(
        get_by_path(&copy, "1").as_object().unwrap().kind(),
        ObjectKind::Pattern("^[a-z]+$".into())
    );
    assert!(shares_nothing(&copy, &original));
}

#[test]
fn test_duplicate_named_kind_becomes_plain() {
    let original = Value::from(Object::named("Point").with_field("x", 1).with_field("y", 2));
    let copy = duplicate(&original);

    let copied = copy.as_object().unwrap();
    assert_eq!(copied.kind(), ObjectKind::Plain);
    assert_eq!(copied.keys(), vec!["x", "y"]);
    // Categories differ, so the values are no longer deep-equal
    assert_ne!(copy, original);
}

#[test]
fn test_duplicate_keeps_field_order() {
    let original = Value::from(
        Object::new()
            .with_field("z", 1)
            .with_field("a", 2)
            .with_field("m", 3),
    );
    let copy = duplicate(&original);
    assert_eq!(copy.as_object().unwrap().keys(), vec!["z", "a", "m"]);
}
