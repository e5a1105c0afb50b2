use serde_json::{json, Map, Value};
use siren_adapter::framework::{from_fn, Context};
use siren_adapter::siren::{Action, Document};
use std::convert::Infallible;

fn doc(collapse: bool) -> Document {
    Document::new(Context::new().with(Context::COLLAPSE_OPTIONAL_ATTRIBUTES, collapse))
}

#[test]
fn test_order_scenario_collapsed_and_full() {
    let mut doc = doc(true);
    doc.r#type(["order"]).property("orderNumber", 42);

    assert_eq!(
        Value::Object(doc.finalize(true)),
        json!({"class": ["order"], "properties": {"orderNumber": 42}})
    );
    assert_eq!(
        Value::Object(doc.finalize(false)),
        json!({
            "class": ["order"],
            "properties": {"orderNumber": 42},
            "links": [],
            "entities": [],
            "actions": []
        })
    );
}

#[test]
fn test_only_last_type_call_counts() {
    let mut doc = doc(false);
    for labels in [vec!["a", "b"], vec!["c"], vec!["d", "e", "f"]] {
        doc.r#type(labels);
    }
    assert_eq!(doc.classes(), ["d", "e", "f"]);
}

#[test]
fn test_link_count_matches_calls() {
    let mut doc = doc(false);
    for i in 0..5 {
        doc.link("item", [("href", format!("/items/{i}"))]);
    }

    assert_eq!(doc.links().len(), 5);
    for (i, link) in doc.links().iter().enumerate() {
        assert_eq!(link["rel"], json!(["item"]));
        assert_eq!(link["href"], json!(format!("/items/{i}")));
    }
}

#[test]
fn test_link_without_attributes() {
    let mut doc = doc(false);
    doc.link("self", Map::new()).link_rel("up");
    assert_eq!(Value::Object(doc.links()[0].clone()), json!({"rel": ["self"]}));
    assert_eq!(Value::Object(doc.links()[1].clone()), json!({"rel": ["up"]}));
}

#[test]
fn test_add_item_action_scenario() {
    let mut doc = doc(true);
    doc.action("add-item", |cfg| {
        cfg.method("POST");
        cfg.field("quantity", |f| {
            f.r#type("number");
        });
    });

    let action: &Action = &doc.actions()[0];
    assert_eq!(action.name(), "add-item");
    assert_eq!(action.method(), Some("POST"));
    assert!(action.classes().is_empty());
    assert_eq!(action.fields()[0].kind(), Some("number"));
    assert_eq!(
        doc.to_value()["actions"],
        json!([{"name": "add-item", "method": "POST", "class": [], "fields": [{"name": "quantity", "type": "number"}]}])
    );
}

#[test]
fn test_absent_entity_scenario() {
    let noop = from_fn(|_: &u32, _: &mut Document| Ok::<(), Infallible>(()));
    let mut doc = doc(false);
    doc.entity_with("order", None::<&u32>, &noop, &Context::new()).unwrap();
    doc.entities_with("items", &Vec::<u32>::new(), &noop, &Context::new())
        .unwrap();

    assert_eq!(doc.entity_count(), 0);
    assert_eq!(doc.to_value()["entities"], json!([]));
}

#[test]
fn test_embedded_entities_are_independent_of_later_changes() {
    let tag = from_fn(|name: &str, doc: &mut Document| {
        doc.property("name", name);
        Ok::<(), Infallible>(())
    });

    let mut doc = doc(true);
    doc.entity_with("tag", Some("first"), &tag, &Context::new()).unwrap();
    let before = doc.to_value();
    doc.property("extra", true);

    assert_eq!(doc.embedded(), before["entities"].as_array().unwrap().as_slice());
    assert_eq!(doc.to_value()["entities"], before["entities"]);
}
