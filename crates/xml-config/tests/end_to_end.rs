use std::collections::HashMap;
use std::sync::Arc;

use xml_config::{
    AttrType, Element, IdentityInfo, IdentityRegistry, ObjectRef, ScalarKind, Value,
    build_strategies, decode_attributes,
};

fn text_el(name: &str, text: &str) -> Element {
    Element::named(name).with_text(text)
}

fn server_attrs() -> HashMap<String, AttrType> {
    let mut attrs = HashMap::new();
    attrs.insert(
        "port".to_string(),
        AttrType::Simple {
            kind: ScalarKind::Int,
            default: Some(Value::Int(0)),
        },
    );
    attrs.insert(
        "tags".to_string(),
        AttrType::List {
            inner: Box::new(AttrType::Simple {
                kind: ScalarKind::Text,
                default: Some(Value::Text(String::new())),
            }),
            default: None,
        },
    );
    attrs
}

#[test]
fn decodes_a_full_module_element() {
    let table =
        build_strategies(&server_attrs(), &Arc::new(IdentityRegistry::new())).expect("build table");
    let module = Element::named("module")
        .with_child(text_el("port", "8080"))
        .with_child(text_el("tags", "a"))
        .with_child(text_el("tags", "b"));

    let values = decode_attributes(&table, &module).expect("decode module");
    assert_eq!(values["port"], Value::Int(8080));
    assert_eq!(
        values["tags"],
        Value::List(vec![
            Value::Text("a".to_string()),
            Value::Text("b".to_string()),
        ])
    );
}

#[test]
fn missing_attribute_falls_back_to_its_default() {
    let table =
        build_strategies(&server_attrs(), &Arc::new(IdentityRegistry::new())).expect("build table");
    let module = Element::named("module")
        .with_child(text_el("tags", "a"))
        .with_child(text_el("tags", "b"));

    let values = decode_attributes(&table, &module).expect("decode module");
    assert_eq!(values["port"], Value::Int(0));
    assert_eq!(
        values["tags"],
        Value::List(vec![
            Value::Text("a".to_string()),
            Value::Text("b".to_string()),
        ])
    );
}

#[test]
fn decode_failure_names_the_offending_attribute() {
    let table =
        build_strategies(&server_attrs(), &Arc::new(IdentityRegistry::new())).expect("build table");
    let module = Element::named("module").with_child(text_el("port", "eighty"));

    let err = decode_attributes(&table, &module).unwrap_err();
    assert_eq!(err.attr, "port");
}

#[test]
fn decodes_mixed_attribute_kinds_in_one_pass() {
    let mut registry = IdentityRegistry::new();
    registry.add(None, IdentityInfo::new("eth-type"));
    let registry = Arc::new(registry);

    let mut attrs = HashMap::new();
    attrs.insert(
        "link-type".to_string(),
        AttrType::IdentityRef {
            value_keys: vec!["identity".to_string()],
            default: None,
        },
    );
    attrs.insert(
        "workers".to_string(),
        AttrType::ListOfDependencies {
            inner: Box::new(AttrType::Simple {
                kind: ScalarKind::Text,
                default: None,
            }),
            default: None,
        },
    );
    attrs.insert("checksum".to_string(), AttrType::Binary { default: None });

    let table = build_strategies(&attrs, &registry).expect("build table");
    let module = Element::named("module")
        .with_child(
            Element::named("link-type").with_child(Element::named("identity").with_text("eth-type")),
        )
        .with_child(
            Element::named("workers")
                .with_child(text_el("type", "threadpool"))
                .with_child(text_el("name", "primary")),
        )
        .with_child(
            Element::named("workers")
                .with_child(text_el("type", "threadpool"))
                .with_child(text_el("name", "backup")),
        )
        .with_child(text_el("checksum", "222 173 190 239"));

    let values = decode_attributes(&table, &module).expect("decode module");
    assert_eq!(
        values["link-type"].as_identity().expect("identity").name,
        "eth-type"
    );
    assert_eq!(
        values["workers"],
        Value::List(vec![
            Value::Ref(ObjectRef::new("threadpool", "primary")),
            Value::Ref(ObjectRef::new("threadpool", "backup")),
        ])
    );
    assert_eq!(values["checksum"], Value::Bytes(vec![222, 173, 190, 239]));
}
