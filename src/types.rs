//! Core record types published by the application index.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Icon reference attached to an application record.
///
/// Records are built with the configured `Default` handle and rewritten to
/// `Url` only after the entire batch was successfully enriched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "parameter", rename_all = "lowercase")]
pub enum Icon {
    /// Opaque handle to the configured default icon.
    Default(String),
    /// Path to a generated icon asset, resolvable by the consumer.
    Url(String),
}

impl Icon {
    pub fn is_default(&self) -> bool {
        matches!(self, Icon::Default(_))
    }
}

/// One installed application as served by the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Absolute path of the discovered entry, unique within one index
    /// generation.
    pub file_path: PathBuf,
    /// Display name, never empty for a successfully built record.
    pub name: String,
    pub icon: Icon,
}
