use serde::Serialize;
use std::sync::Mutex;

/// Events raised during evaluation. None of them changes the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    ArticleIncluded {
        article: String,
        condition: Option<String>,
    },
    ArticleExcluded {
        article: String,
        condition: Option<String>,
    },
    MissingPlaceholder {
        placeholder: String,
    },
    PassLimitReached {
        passes: usize,
    },
}

/// Pluggable sink for diagnostics.
pub trait Reporter: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::ArticleIncluded { article, condition } => {
                tracing::debug!(%article, condition = condition.as_deref(), "article included");
            }
            Diagnostic::ArticleExcluded { article, condition } => {
                tracing::info!(%article, condition = condition.as_deref(), "article excluded");
            }
            Diagnostic::MissingPlaceholder { placeholder } => {
                tracing::warn!(%placeholder, "no value for placeholder");
            }
            Diagnostic::PassLimitReached { passes } => {
                tracing::warn!(passes, "block resolution stopped before converging");
            }
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Keeps diagnostics in memory so callers can inspect them afterwards.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    seen: Mutex<Vec<Diagnostic>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything collected so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        let mut seen = self.seen.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *seen)
    }

    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, diagnostic: &Diagnostic) {
        self.seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(diagnostic.clone());
    }
}
