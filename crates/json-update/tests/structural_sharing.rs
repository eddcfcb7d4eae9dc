//! Identity sharing between source and result: untouched subtrees must come
//! out of `run` as the same `Arc` handles that went in.

use json_update::{invoke, run, set, CommandNode, Value};
use serde_json::json;
use std::sync::Arc;

fn arc(value: serde_json::Value) -> Arc<Value> {
    Arc::new(Value::from(value))
}

#[test]
fn untouched_sibling_subtree_is_shared() {
    let source = arc(json!({"a": {"b": {"big": [1, 2, 3]}}, "c": 1}));
    let next = run(&source, &CommandNode::from(json!({"c": {"set": 2}}))).unwrap();
    assert!(Arc::ptr_eq(source.get("a").unwrap(), next.get("a").unwrap()));
}

#[test]
fn deep_update_shares_every_untouched_branch() {
    let source = arc(json!({
        "left": {"x": 1},
        "right": {"kept": {"y": 2}, "changed": {"z": 3}},
    }));
    let next = run(
        &source,
        &CommandNode::from(json!({"right": {"changed": {"z": {"set": 30}}}})),
    )
    .unwrap();

    // sibling of the touched top-level property
    assert!(Arc::ptr_eq(source.get("left").unwrap(), next.get("left").unwrap()));
    // rebuilt along the path
    let source_right = source.get("right").unwrap();
    let next_right = next.get("right").unwrap();
    assert!(!Arc::ptr_eq(source_right, next_right));
    // sibling inside the rebuilt level
    assert!(Arc::ptr_eq(
        source_right.get("kept").unwrap(),
        next_right.get("kept").unwrap()
    ));
}

#[test]
fn array_elements_off_the_touched_index_are_shared() {
    let source = arc(json!([{"n": 1}, {"n": 2}, {"n": 3}]));
    let next = run(&source, &CommandNode::from(json!({"1": {"n": {"set": 20}}}))).unwrap();
    assert!(Arc::ptr_eq(source.get_index(0).unwrap(), next.get_index(0).unwrap()));
    assert!(!Arc::ptr_eq(source.get_index(1).unwrap(), next.get_index(1).unwrap()));
    assert!(Arc::ptr_eq(source.get_index(2).unwrap(), next.get_index(2).unwrap()));
}

#[test]
fn pushed_array_shares_existing_elements() {
    let source = arc(json!({"xs": [{"a": 1}, {"b": 2}]}));
    let next = run(&source, &CommandNode::from(json!({"xs": {"push": 3}}))).unwrap();
    let source_xs = source.get("xs").unwrap();
    let next_xs = next.get("xs").unwrap();
    assert!(Arc::ptr_eq(source_xs.get_index(0).unwrap(), next_xs.get_index(0).unwrap()));
    assert!(Arc::ptr_eq(source_xs.get_index(1).unwrap(), next_xs.get_index(1).unwrap()));
}

#[test]
fn merge_shares_both_kept_and_incoming_values() {
    let source = arc(json!({"o": {"kept": {"deep": 1}}}));
    let next = run(
        &source,
        &CommandNode::from(json!({"o": {"merge": {"added": {"deep": 2}}}})),
    )
    .unwrap();
    assert!(Arc::ptr_eq(
        source.get("o").unwrap().get("kept").unwrap(),
        next.get("o").unwrap().get("kept").unwrap()
    ));
}

#[test]
fn factory_may_keep_the_old_handle() {
    let source = arc(json!({"n": 5, "other": {}}));
    let next = invoke(&source, "n", |old: &Arc<Value>| Arc::clone(old)).unwrap();
    assert!(Arc::ptr_eq(source.get("n").unwrap(), next.get("n").unwrap()));
}

#[test]
fn shortcut_update_shares_siblings() {
    let source = arc(json!({"a": {"b": 1}, "c": {"d": 2}}));
    let next = set(&source, ["a", "b"], 10).unwrap();
    assert!(Arc::ptr_eq(source.get("c").unwrap(), next.get("c").unwrap()));
}

#[test]
fn result_root_is_always_fresh() {
    let source = arc(json!({"a": 1}));
    let next = run(&source, &CommandNode::from(json!({}))).unwrap();
    assert!(!Arc::ptr_eq(&source, &next));
    assert_eq!(next.to_json(), source.to_json());
}
