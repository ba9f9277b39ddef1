//! Search configuration for the application index.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::os::OperatingSystem;

/// Controls the discovery scope and the icon enrichment stage.
///
/// Owned by the caller; the index holds a private copy replaced through
/// `ApplicationIndex::update_config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    /// Folders scanned for installed applications.
    pub application_folders: Vec<PathBuf>,
    /// File extensions (without the leading dot) treated as applications.
    /// Matched case-insensitively.
    pub application_file_extensions: Vec<String>,
    /// Whether a refresh runs the native icon enrichment stage.
    pub use_native_icons: bool,
}

impl SearchOptions {
    /// Default discovery scope for the given operating system.
    pub fn default_for(os: OperatingSystem) -> Self {
        match os {
            OperatingSystem::Windows => Self {
                application_folders: windows_application_folders(),
                application_file_extensions: vec![
                    "lnk".to_string(),
                    "appref-ms".to_string(),
                    "url".to_string(),
                ],
                use_native_icons: true,
            },
            OperatingSystem::MacOs => Self {
                application_folders: vec![
                    PathBuf::from("/Applications"),
                    PathBuf::from("/System/Applications"),
                ],
                application_file_extensions: vec!["app".to_string()],
                use_native_icons: true,
            },
            OperatingSystem::Linux => Self {
                application_folders: linux_application_folders(),
                application_file_extensions: vec!["desktop".to_string()],
                use_native_icons: false,
            },
        }
    }
}

fn windows_application_folders() -> Vec<PathBuf> {
    let mut folders = vec![PathBuf::from(
        r"C:\ProgramData\Microsoft\Windows\Start Menu\Programs",
    )];
    if let Some(home) = dirs::home_dir() {
        folders.push(home.join(r"AppData\Roaming\Microsoft\Windows\Start Menu\Programs"));
    }
    folders
}

fn linux_application_folders() -> Vec<PathBuf> {
    let mut folders = vec![
        PathBuf::from("/usr/share/applications"),
        PathBuf::from("/usr/local/share/applications"),
    ];
    if let Some(home) = dirs::home_dir() {
        folders.push(home.join(".local/share/applications"));
    }
    folders
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_defaults_target_desktop_shortcuts() {
        let options = SearchOptions::default_for(OperatingSystem::Linux);
        assert_eq!(options.application_file_extensions, vec!["desktop"]);
        assert!(options
            .application_folders
            .contains(&PathBuf::from("/usr/share/applications")));
        assert!(!options.use_native_icons);
    }

    #[test]
    fn macos_defaults_target_app_bundles() {
        let options = SearchOptions::default_for(OperatingSystem::MacOs);
        assert_eq!(options.application_file_extensions, vec!["app"]);
        assert!(options
            .application_folders
            .contains(&PathBuf::from("/Applications")));
    }
}
