//! End-to-end behaviour of `Field` through the public API.

use friedrichdb_core::{FArray, FObject, Field, FieldError, FieldKind, format_field};
use friedrichdb_testhelpers::{IPanic, setup};

#[test]
fn builds_a_document_by_promotion() -> Result<(), IPanic> {
    setup();

    let mut person = Field::new();
    person.emplace("name", "Alice")?;
    person.emplace("age", 30)?;

    let mut tags = Field::new();
    tags.emplace_back("admin")?;
    tags.emplace_back("ops")?;
    person.emplace("tags", tags)?;

    assert_eq!(person.kind(), FieldKind::Object);
    assert_eq!(person.len(), 3);
    assert_eq!(person.at("tags")?.at(1)?.as_str(), Some("ops"));

    insta::assert_snapshot!(format_field(&person), @r#"
    {
      "age": 30,
      "name": "Alice",
      "tags": [
        "admin",
        "ops"
      ]
    }
    "#);
    Ok(())
}

#[test]
fn move_out_leaves_source_null() {
    setup();

    let mut source: Field = [("k", 1)].into_iter().collect();
    let moved = source.take();
    assert!(source.is_null());
    assert!(source.is_empty());
    assert_eq!(moved.at("k").unwrap(), &Field::from(1));

    // The emptied source is reusable and promotes again.
    source.emplace_back(true).unwrap();
    assert!(source.is_array());
}

#[test]
fn mutation_through_at_mut() {
    setup();

    let mut root = Field::new();
    root.emplace("list", FArray::new()).unwrap();
    root.at_mut("list").unwrap().emplace_back(1).unwrap();
    root.at_mut("list").unwrap().emplace_back(2).unwrap();
    *root.at_mut("list").unwrap().at_mut(0).unwrap() = Field::from("first");

    assert_eq!(root.to_string(), r#"{"list":["first",2]}"#);
}

#[test]
fn kind_mismatch_leaves_field_intact() {
    setup();

    let mut list: Field = [1, 2, 3].into_iter().collect();
    let err = list.emplace("k", 1).unwrap_err();
    assert_eq!(err.to_string(), "emplace requires null or object, found array");
    assert_eq!(list.len(), 3);

    let mut number = Field::from(4);
    assert!(matches!(
        number.emplace_back(5),
        Err(FieldError::InvariantViolation { found: FieldKind::Number, .. })
    ));
    assert_eq!(number, Field::from(4));
}

#[test]
fn error_messages() {
    let obj = Field::from(FObject::new());
    assert_eq!(
        obj.at("missing").unwrap_err().to_string(),
        r#"key not found: "missing""#
    );

    let list: Field = ["a"].into_iter().collect();
    assert_eq!(
        list.at(3).unwrap_err().to_string(),
        "index 3 out of range for array of length 1"
    );
    assert_eq!(
        list.compare(&list).unwrap_err().to_string(),
        "no ordering defined between array and array"
    );
}

#[test]
fn sorting_scalars_of_mixed_kinds() {
    let mut fields = vec![
        Field::from("b"),
        Field::from(2),
        Field::new(),
        Field::from(true),
        Field::from("a"),
        Field::from(-1.5),
    ];
    fields.sort_by(|a, b| a.compare(b).unwrap());
    let rendered: Vec<String> = fields.iter().map(Field::to_string).collect();
    assert_eq!(rendered, ["null", "true", "-1.5", "2", "\"a\"", "\"b\""]);
}

#[test]
fn json_round_trip_preserves_structure() {
    setup();

    let mut root = Field::new();
    root.emplace("id", 7u64).unwrap();
    root.emplace("ratio", 0.5).unwrap();
    root.emplace("missing", ()).unwrap();
    let nested: Field = [("deep", [1, 2].into_iter().collect::<Field>())]
        .into_iter()
        .collect();
    root.emplace("nested", nested).unwrap();

    let text = root.to_json().unwrap();
    assert_eq!(
        text,
        r#"{"id":7,"missing":null,"nested":{"deep":[1,2]},"ratio":0.5}"#
    );
    let back = Field::from_json(&text).unwrap();
    assert_eq!(back, root);
}

#[test]
fn deep_trees_drop_without_overflow() {
    setup();

    let mut root = Field::new();
    for _ in 0..500_000 {
        let mut outer = Field::new();
        outer.emplace("c", root).unwrap();
        root = outer;
    }
    drop(root);
}
