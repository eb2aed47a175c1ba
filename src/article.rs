use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::condition;
use crate::errors::Result;
use crate::fields::FieldMap;
use crate::report::{Diagnostic, Reporter};

/// Read-only view of a document article.
pub trait Article {
    /// Identifier used in diagnostics.
    fn id(&self) -> Cow<'_, str>;
    fn is_conditional(&self) -> bool;
    /// Field name deciding inclusion, optionally prefixed with `!`.
    fn condition_field(&self) -> Option<&str>;
    fn effective_text(&self) -> &str;
}

/// Plain article record, convenient for callers without their own type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleRecord {
    pub id: String,
    pub is_conditional: bool,
    pub condition_field: Option<String>,
    pub effective_text: String,
}

impl ArticleRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            effective_text: text.into(),
            ..Self::default()
        }
    }

    /// Mark the article as included only when `condition` holds.
    pub fn when(mut self, condition: impl Into<String>) -> Self {
        self.is_conditional = true;
        self.condition_field = Some(condition.into());
        self
    }

    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Article for ArticleRecord {
    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn is_conditional(&self) -> bool {
        self.is_conditional
    }

    fn condition_field(&self) -> Option<&str> {
        self.condition_field.as_deref()
    }

    fn effective_text(&self) -> &str {
        &self.effective_text
    }
}

/// Keep the articles whose condition holds, in their original order.
pub fn filter<'a, A: Article>(
    articles: &'a [A],
    fields: &FieldMap,
    reporter: &dyn Reporter,
) -> Vec<&'a A> {
    articles
        .iter()
        .filter(|article| {
            let condition = article
                .condition_field()
                .filter(|c| article.is_conditional() && !c.trim().is_empty());
            let keep = condition::evaluate(condition, fields);
            let article = article.id().into_owned();
            let condition = condition.map(str::to_string);
            reporter.report(&if keep {
                Diagnostic::ArticleIncluded { article, condition }
            } else {
                Diagnostic::ArticleExcluded { article, condition }
            });
            keep
        })
        .collect()
}
