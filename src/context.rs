use serde::{Deserialize, Serialize};

use crate::errors::{Result, TemplateError};

/// Upper bound on full-text block resolution passes.
pub const DEFAULT_MAX_PASSES: usize = 10;

/// Evaluation options shared by every operation of an [`crate::Evaluator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    /// How many times block resolution may rescan the text before giving up
    /// and returning what it has.
    pub max_passes: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self { max_passes: DEFAULT_MAX_PASSES }
    }
}

impl Context {
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Parse options from JSON; missing keys fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let ctx: Context = serde_json::from_str(json)?;
        ctx.validate()?;
        Ok(ctx)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_passes == 0 {
            return Err(TemplateError::InvalidOption(
                "max_passes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
