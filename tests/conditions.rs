use article_template as at;
use at::FieldMap;

#[test]
fn test_absent_condition_holds() {
    let fields = FieldMap::new();
    assert!(at::evaluate_condition(None, &fields));
    assert!(at::evaluate_condition(Some(""), &fields));
}

#[test]
fn test_falsy_values() {
    let fields = FieldMap::from([("A", "0"), ("B", "False"), ("C", " "), ("D", "no")]);
    assert!(!at::evaluate_condition(Some("A"), &fields));
    assert!(!at::evaluate_condition(Some("B"), &fields));
    assert!(!at::evaluate_condition(Some("C"), &fields));
    // only blank, "0" and "false" are falsy
    assert!(at::evaluate_condition(Some("D"), &fields));
    assert!(at::evaluate_condition(Some("!A"), &fields));
}

#[test]
fn test_case_insensitive_condition_lookup() {
    let fields = FieldMap::from([("hasspouse", "1")]);
    assert!(at::evaluate_condition(Some("HasSpouse"), &fields));
    assert!(!at::evaluate_condition(Some("!HASSPOUSE"), &fields));
}
