//! Desktop-entry launcher shortcut parsing.
//!
//! Sectioned key/value text following the freedesktop convention. Only the
//! `Name` key of the `Desktop Entry` group feeds the index, but the parser
//! keeps every group so callers can inspect other fields. Malformed content
//! is an error, never silently skipped: a half-parsed shortcut must fail the
//! refresh, not publish a bogus record.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{IndexError, Result};

pub const DESKTOP_ENTRY_GROUP: &str = "Desktop Entry";
pub const NAME_KEY: &str = "Name";

/// A parsed desktop-entry file.
#[derive(Debug, Clone, Default)]
pub struct DesktopEntry {
    groups: HashMap<String, HashMap<String, String>>,
}

impl DesktopEntry {
    pub fn parse(content: &str) -> Result<Self> {
        let mut groups: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current: Option<String> = None;

        for (number, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') {
                let group = line
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| {
                        IndexError::DesktopEntry(format!(
                            "line {}: malformed group header {line:?}",
                            number + 1
                        ))
                    })?;
                groups.entry(group.to_string()).or_default();
                current = Some(group.to_string());
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(IndexError::DesktopEntry(format!(
                    "line {}: expected key=value, got {line:?}",
                    number + 1
                )));
            };
            let Some(group) = &current else {
                return Err(IndexError::DesktopEntry(format!(
                    "line {}: entry before any group header",
                    number + 1
                )));
            };
            groups
                .entry(group.clone())
                .or_default()
                .insert(key.trim().to_string(), value.trim().to_string());
        }

        Ok(Self { groups })
    }

    /// Value of `key` inside `group`.
    pub fn get(&self, group: &str, key: &str) -> Option<&str> {
        self.groups
            .get(group)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Display name of the shortcut: the `Name` key of the `Desktop Entry`
    /// group. A missing group or key is an error, never a placeholder.
    pub fn display_name(&self) -> Result<&str> {
        let group = self.groups.get(DESKTOP_ENTRY_GROUP).ok_or_else(|| {
            IndexError::DesktopEntry(format!("missing [{DESKTOP_ENTRY_GROUP}] group"))
        })?;
        group.get(NAME_KEY).map(String::as_str).ok_or_else(|| {
            IndexError::DesktopEntry(format!(
                "missing {NAME_KEY} key in [{DESKTOP_ENTRY_GROUP}] group"
            ))
        })
    }
}

/// Read a desktop-entry file and extract its display name.
pub async fn read_display_name(path: &Path) -> Result<String> {
    let content = tokio::fs::read_to_string(path).await.map_err(|error| {
        IndexError::DesktopEntry(format!("failed to read {}: {error}", path.display()))
    })?;
    let entry = DesktopEntry::parse(&content).map_err(|error| with_path(path, error))?;
    let name = entry.display_name().map_err(|error| with_path(path, error))?;
    Ok(name.to_string())
}

fn with_path(path: &Path, error: IndexError) -> IndexError {
    match error {
        IndexError::DesktopEntry(reason) => {
            IndexError::DesktopEntry(format!("{}: {reason}", path.display()))
        }
        other => other,
    }
}
