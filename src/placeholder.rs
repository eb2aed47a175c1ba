use itertools::Itertools;

use crate::fields::FieldMap;
use crate::report::{Diagnostic, Reporter};
use crate::scanner::{Scanner, Tag, TAG_OPEN};

/// Replace `[[Field]]` tokens with their values. Unknown tokens are kept
/// verbatim and reported. Substituted values are not rescanned.
pub fn substitute(text: &str, fields: &FieldMap, reporter: &dyn Reporter) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    for_each_placeholder(text, |start, end, name| {
        match fields.get(name) {
            Some(value) => {
                out.push_str(&text[copied..start]);
                out.push_str(value);
                copied = end;
            }
            None => reporter.report(&Diagnostic::MissingPlaceholder {
                placeholder: name.to_string(),
            }),
        }
    });
    out.push_str(&text[copied..]);
    out
}

/// Distinct placeholder names with no value, in order of first appearance.
pub fn missing(text: &str, fields: &FieldMap) -> Vec<String> {
    let mut names = Vec::new();
    for_each_placeholder(text, |_, _, name| {
        if !fields.contains(name) {
            names.push(name);
        }
    });
    names.into_iter().unique().map(str::to_string).collect()
}

fn for_each_placeholder<'a>(text: &'a str, mut f: impl FnMut(usize, usize, &'a str)) {
    let mut sc = Scanner::new(text);
    while sc.skip_to(TAG_OPEN) {
        let start = sc.pos();
        match sc.read_tag() {
            Some(Tag::Placeholder(name)) => f(start, sc.pos(), name),
            Some(_) => {}
            None => sc.bump(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{CollectingReporter, NullReporter};
    use pretty_assertions::assert_eq;

    #[test]
    fn known_and_unknown() {
        let f = FieldMap::from([("Name", "Alice")]);
        let r = CollectingReporter::new();
        assert_eq!(
            substitute("Hello [[Name]], [[Unknown]]", &f, &r),
            "Hello Alice, [[Unknown]]"
        );
        assert_eq!(
            r.take(),
            vec![Diagnostic::MissingPlaceholder { placeholder: "Unknown".into() }]
        );
    }

    #[test]
    fn block_tags_are_not_placeholders() {
        let f = FieldMap::from([("IF", "x"), ("A", "y")]);
        assert_eq!(
            substitute("[[IF:A]][[A]][[ENDIF:A]]", &f, &NullReporter),
            "[[IF:A]]y[[ENDIF:A]]"
        );
    }

    #[test]
    fn values_are_not_rescanned() {
        let f = FieldMap::from([("A", "[[B]]"), ("B", "b")]);
        assert_eq!(substitute("[[A]]", &f, &NullReporter), "[[B]]");
    }

    #[test]
    fn stray_brackets_are_skipped() {
        let f = FieldMap::from([("A", "a")]);
        assert_eq!(substitute("[[[A]]]", &f, &NullReporter), "[a]");
        assert_eq!(substitute("[[ A ]]", &f, &NullReporter), "[[ A ]]");
    }

    #[test]
    fn missing_lists_each_name_once() {
        let f = FieldMap::from([("A", "a")]);
        assert_eq!(
            missing("[[X]] [[A]] [[Y]] [[X]] [[a]]", &f),
            vec!["X".to_string(), "Y".to_string()]
        );
    }
}
