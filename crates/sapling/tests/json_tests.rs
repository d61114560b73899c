//! serde_json interop tests

use pretty_assertions::assert_eq;
use sapling::*;
use serde_json::json;

#[test]
fn test_json_roundtrip_document() -> anyhow::Result<()> {
    let document = json!({
        "name": "sapling",
        "tags": ["tree", "copy"],
        "meta": {"stars": 3, "ratio": 0.5, "archived": false, "owner": null}
    });

    let value = Value::from_json(document.clone());
    let copy = duplicate(&value);

    assert_eq!(copy.to_json()?, document);
    Ok(())
}

#[test]
fn test_json_edits_through_paths() -> anyhow::Result<()> {
    let value = Value::from(json!({"server": {"port": 80}}));
    set_by_path(&value, "server.port", Value::from(8080));
    set_by_path(&value, "server.tls.enabled", Value::from(true));
    delete_by_path(&value, "server.port");

    let out: serde_json::Value = (&value).try_into()?;
    assert_eq!(out, json!({"server": {"tls": {"enabled": true}}}));
    Ok(())
}

#[test]
fn test_json_rejects_cycles_but_accepts_sharing() {
    let shared = Value::from(vec![1]);
    let value = Value::array(vec![shared.clone(), shared]);
    assert_eq!(value.to_json(), Ok(json!([[1], [1]])));

    let cyclic = Object::new();
    cyclic.insert("me", Value::from(cyclic.clone()));
    let err = Value::from(cyclic).to_json().unwrap_err();
    assert_eq!(
        err,
        SaplingError::CyclicValue {
            path: "me".to_string()
        }
    );
}

#[test]
fn test_json_duplicate_then_break_cycle() -> anyhow::Result<()> {
    let node = Object::new().with_field("id", 1);
    node.insert("self", Value::from(node.clone()));

    let copy = duplicate(&Value::from(node));
    delete_by_path(&copy, "self");
    assert_eq!(serde_json::Value::try_from(copy)?, json!({"id": 1}));
    Ok(())
}
