pub mod article;
pub mod context;
pub mod errors;
pub mod fields;
pub mod report;
mod blocks;
mod condition;
mod placeholder;
mod scanner;

use std::sync::Arc;

pub use article::{Article, ArticleRecord};
pub use blocks::collapse_blank_lines;
pub use condition::is_truthy;
pub use context::Context;
pub use errors::{Result, TemplateError};
pub use fields::FieldMap;
pub use report::{CollectingReporter, Diagnostic, NullReporter, Reporter, TracingReporter};

/// Evaluates `[[IF:x]]` blocks and `[[x]]` placeholders against a [`FieldMap`].
/// Holds only options and a reporter, so one instance can be shared freely.
#[derive(Clone)]
pub struct Evaluator {
    ctx: Context,
    reporter: Arc<dyn Reporter>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Context::default(), Arc::new(TracingReporter))
    }
}

impl Evaluator {
    pub fn new(ctx: Context, reporter: Arc<dyn Reporter>) -> Self {
        Self { ctx, reporter }
    }

    pub fn with_reporter(reporter: Arc<dyn Reporter>) -> Self {
        Self::new(Context::default(), reporter)
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// `Field`, `!Field`, or nothing (always true).
    pub fn evaluate(&self, condition: Option<&str>, fields: &FieldMap) -> bool {
        condition::evaluate(condition, fields)
    }

    pub fn filter_articles<'a, A: Article>(
        &self,
        articles: &'a [A],
        fields: &FieldMap,
    ) -> Vec<&'a A> {
        article::filter(articles, fields, self.reporter.as_ref())
    }

    pub fn resolve_blocks(&self, text: &str, fields: &FieldMap) -> String {
        blocks::resolve(text, fields, &self.ctx, self.reporter.as_ref())
    }

    pub fn substitute_placeholders(&self, text: &str, fields: &FieldMap) -> String {
        placeholder::substitute(text, fields, self.reporter.as_ref())
    }

    /// Blocks first, then placeholders, so nothing inside a dropped block is
    /// ever substituted or reported.
    pub fn process_article_text<A: Article + ?Sized>(
        &self,
        article: &A,
        fields: &FieldMap,
    ) -> String {
        let resolved = self.resolve_blocks(article.effective_text(), fields);
        self.substitute_placeholders(&resolved, fields)
    }

    /// Placeholders that would stay unresolved, without reporting them.
    pub fn missing_placeholders(&self, text: &str, fields: &FieldMap) -> Vec<String> {
        placeholder::missing(text, fields)
    }
}

/// Convenience: evaluate a condition.
pub fn evaluate_condition(condition: Option<&str>, fields: &FieldMap) -> bool {
    condition::evaluate(condition, fields)
}

/// Convenience: filter articles with the default evaluator.
pub fn filter_articles<'a, A: Article>(articles: &'a [A], fields: &FieldMap) -> Vec<&'a A> {
    Evaluator::default().filter_articles(articles, fields)
}

pub fn resolve_blocks(text: &str, fields: &FieldMap) -> String {
    Evaluator::default().resolve_blocks(text, fields)
}

pub fn substitute_placeholders(text: &str, fields: &FieldMap) -> String {
    Evaluator::default().substitute_placeholders(text, fields)
}

pub fn process_article_text<A: Article + ?Sized>(article: &A, fields: &FieldMap) -> String {
    Evaluator::default().process_article_text(article, fields)
}
