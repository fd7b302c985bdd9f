use value_pointer::{
    check, resolve, resolve_batch, ErrorKind, Field, Resolver, Value, ValueType,
};

fn line() -> Value {
    Value::from(5)
}

fn data() -> Value {
    Value::record([
        Field::new("Message", "hi").with_name("message"),
        Field::new(
            "Labels",
            Value::mapping(ValueType::String, [("a/b", Value::from("x"))]),
        )
        .with_name("labels"),
        Field::new("Line", line()).with_name("line"),
    ])
}

fn child() -> Value {
    Value::record([
        Field::new("Name", "Ann").with_name("name"),
        Field::new("Age", 20).with_name("age"),
        Field::new("Data", Value::indirect(data())).with_name("data"),
    ])
}

fn doc() -> Value {
    Value::record([
        Field::new("Name", "Joe").with_name("name"),
        Field::new("Children", Value::sequence([child()])).with_name("children"),
    ])
}

#[test]
fn lookup_success_matrix() {
    let root = doc();

    assert_eq!(resolve(&root, "/name").unwrap(), &Value::from("Joe"));
    assert_eq!(resolve(&root, "/children/0").unwrap(), &child());
    assert_eq!(resolve(&root, "/children/0/age").unwrap(), &Value::from(20));
    assert_eq!(
        resolve(&root, "/children/0/data").unwrap(),
        &Value::indirect(data())
    );
    assert_eq!(
        resolve(&root, "/children/0/data/labels/a~1b").unwrap(),
        &Value::from("x")
    );
    assert_eq!(
        resolve(&root, "/children/0/data/message").unwrap(),
        &Value::from("hi")
    );
    assert_eq!(
        resolve(&root, "/children/0/data/line").unwrap(),
        &Value::from(5)
    );
}

#[test]
fn lookup_through_pointer_field() {
    let root = Value::record([Field::new(
        "Line",
        Value::indirect(Value::indirect(5)),
    )
    .with_name("line")]);

    // a terminal indirection is returned as-is, not dereferenced
    assert_eq!(
        resolve(&root, "/line").unwrap(),
        &Value::indirect(Value::indirect(5))
    );
    assert_eq!(
        resolve(&root, "/line/0").unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn lookup_error_matrix() {
    let root = doc();

    let err = resolve(&root, "/children/9").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(err.path(), "/children/9");
    assert!(err.fallback().is_none());

    let err = resolve(&root, "/children/0/data/labels/missing").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingKey);
    assert_eq!(err.path(), "/children/0/data/labels/missing");
    assert_eq!(err.fallback(), Some(&Value::from("")));

    let err = resolve(&root, "/children/0/data/missing").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldMismatch);
    assert_eq!(err.path(), "/children/0/data/missing");

    let err = resolve(&root, "/children/first").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidIndex);

    let err = resolve(&root, "/name/first").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.to_string(), "path: /name/first, error: type mismatch");
}

#[test]
fn missing_key_in_mapping_root() {
    let root = Value::mapping(ValueType::String, [("message", Value::from("hi"))]);
    let err = resolve(&root, "/missing").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingKey);
    assert_eq!(err.path(), "/missing");
    assert_eq!(err.fallback(), Some(&Value::from("")));
}

#[test]
fn check_matrix() {
    let root = doc();
    assert!(check(&root, ""));
    assert!(check(&root, "/children/0/data"));
    assert!(check(&root, "/children/0/data/line"));
    assert!(!check(&root, "/children/1"));
    assert!(!check(&root, "/children/0/data/labels/zzz"));
    assert!(!check(&Value::from(1), "/"));
}

#[test]
fn batch_matrix() {
    let root = doc();
    let pointers = [
        "/name",
        "/children/0",
        "/children/0/age",
        "/children/0/data",
        "/children/0/data/line",
        "/children/0/data/labels/a~1b",
    ];
    let result = resolve_batch(&root, pointers).unwrap();

    assert_eq!(result.len(), pointers.len());
    assert_eq!(result["/name"], &Value::from("Joe"));
    assert_eq!(result["/children/0"], &child());
    assert_eq!(result["/children/0/age"], &Value::from(20));
    assert_eq!(result["/children/0/data"], &Value::indirect(data()));
    assert_eq!(result["/children/0/data/line"], &line());
    assert_eq!(result["/children/0/data/labels/a~1b"], &Value::from("x"));
}

#[test]
fn batch_is_fail_fast() {
    let root = doc();
    let err = resolve_batch(&root, ["/name", "/children/9"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(err.path(), "/children/9");

    // the first failure wins even when later pointers fail differently
    let err = resolve_batch(&root, ["/children/x", "/children/9"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidIndex);
    assert_eq!(err.path(), "/children/x");
}

#[test]
fn resolver_reuse() {
    let root = doc();
    let resolver = Resolver::new(&root).expect("record root");
    assert!(std::ptr::eq(resolver.root(), &root));
    assert!(std::ptr::eq(resolver.get("").unwrap(), &root));
    assert_eq!(resolver.get("/children/0/name").unwrap(), &Value::from("Ann"));
    assert!(resolver.check("/children/0/data/message"));
}
