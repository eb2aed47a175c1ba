use article_template as at;
use at::{ArticleRecord, FieldMap};
use pretty_assertions::assert_eq;

#[test]
fn test_custody_block_kept() {
    let fields = FieldMap::from([("HasChildren", "true")]);
    let out = at::resolve_blocks(
        "[[IF:HasChildren]]Custody applies.[[ENDIF:HasChildren]]",
        &fields,
    );
    assert_eq!(out, "Custody applies.");
}

#[test]
fn test_negated_custody_block_dropped() {
    let fields = FieldMap::from([("HasChildren", "true")]);
    let out = at::resolve_blocks(
        "[[IF:!HasChildren]]No custody.[[ENDIF:!HasChildren]]",
        &fields,
    );
    assert_eq!(out, "");
}

#[test]
fn test_unknown_placeholder_left_visible() {
    let fields = FieldMap::from([("Name", "Alice")]);
    let out = at::substitute_placeholders("Hello [[Name]], [[Unknown]]", &fields);
    assert_eq!(out, "Hello Alice, [[Unknown]]");
}

#[test]
fn test_case_insensitive_placeholder() {
    let fields = FieldMap::from([("name", "Bob")]);
    assert_eq!(at::substitute_placeholders("[[NAME]]", &fields), "Bob");
}

#[test]
fn test_blank_lines_collapse_after_resolution() {
    let fields = FieldMap::new();
    let text = "First.\n\n\n\n\nSecond.\r\n\r\n\r\n[[IF:X]]gone[[ENDIF:X]]\n\n\nThird.";
    assert_eq!(
        at::resolve_blocks(text, &fields),
        "First.\n\nSecond.\n\nThird."
    );
}

#[test]
fn test_full_article_pipeline() {
    let fields = FieldMap::from_json(
        r#"{"Spouse":"Jordan","HasChildren":"yes","ChildCount":2,"Prenup":false}"#,
    )
    .unwrap();
    let article = ArticleRecord::new(
        "art-7",
        "Between [[spouse]] and [[Client]].\n\n\
         [[IF:HasChildren]]\n  The parties have [[ChildCount]] children.\n[[ENDIF:HasChildren]]\n\n\
         [[IF:Prenup]]A prenuptial agreement applies.[[ENDIF:Prenup]]\n\n\
         [[IF:!Prenup]]No prenuptial agreement exists.[[ENDIF:!Prenup]]\n",
    );
    assert_eq!(
        at::process_article_text(&article, &fields),
        "Between Jordan and [[Client]].\n\n\
         The parties have 2 children.\n\n\
         No prenuptial agreement exists."
    );
}

#[test]
fn test_placeholder_named_like_condition() {
    let fields = FieldMap::from([("Employer", "Acme")]);
    let article = ArticleRecord::new("a", "[[IF:Employer]]Works at [[Employer]].[[ENDIF:Employer]]");
    assert_eq!(at::process_article_text(&article, &fields), "Works at Acme.");
}

#[test]
fn test_deeply_nested_blocks_resolve_in_linear_time() {
    use std::time::{Duration, Instant};

    let depth = 10_000;
    let text = format!(
        "{}x{}",
        "[[IF:A]]".repeat(depth),
        "[[ENDIF:A]]".repeat(depth)
    );
    let started = Instant::now();
    assert_eq!(at::resolve_blocks(&text, &FieldMap::from([("A", "1")])), "x");
    assert_eq!(at::resolve_blocks(&text, &FieldMap::new()), "");
    assert!(started.elapsed() < Duration::from_secs(5));
}
