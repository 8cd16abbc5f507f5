//! Configuration for hydration.

use serde::{Deserialize, Serialize};

/// Configuration for the `Hydrator`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrationConfig {
    /// Fail when a declared field holds a value of the wrong shape
    /// (an array under a typed field, an object under a list field).
    /// When disabled the value is hydrated as untyped data instead.
    pub strict_shapes: bool,
    /// Maximum nesting depth of records and lists
    pub max_depth: usize,
    /// Log every fallback to untyped hydration
    pub log_fallbacks: bool,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            strict_shapes: true,
            max_depth: 64,
            log_fallbacks: true,
        }
    }
}

impl HydrationConfig {
    /// Configuration that never fails on shape mismatches
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            strict_shapes: false,
            ..Self::default()
        }
    }

    /// Override the maximum nesting depth
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
