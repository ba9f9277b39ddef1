//! Per-path application record construction.

use std::path::Path;

use crate::desktop_entry;
use crate::error::{IndexError, Result};
use crate::os::OperatingSystem;
use crate::types::{Application, Icon};

/// How a display name is derived from a discovered path.
///
/// Selected once per refresh from the resolved operating system, keeping the
/// builder itself free of platform queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameResolver {
    /// Parse the file as a desktop-entry shortcut and take its `Name` field.
    DesktopEntry,
    /// Use the file's base name with the extension suffix stripped; the file
    /// contents are never read.
    FileStem,
}

impl NameResolver {
    pub fn for_operating_system(os: OperatingSystem) -> Self {
        match os {
            OperatingSystem::Linux => Self::DesktopEntry,
            OperatingSystem::Windows | OperatingSystem::MacOs => Self::FileStem,
        }
    }

    /// Derive the display name for one path. Failures propagate; no
    /// placeholder name is ever substituted.
    pub async fn resolve(self, file_path: &Path) -> Result<String> {
        match self {
            Self::DesktopEntry => desktop_entry::read_display_name(file_path).await,
            Self::FileStem => file_path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .filter(|stem| !stem.is_empty())
                .map(str::to_string)
                .ok_or_else(|| IndexError::InvalidPath(file_path.to_path_buf())),
        }
    }
}

/// Build one application record. The icon starts as the configured default
/// on both branches; enrichment may rewrite it after the batch completes.
pub async fn build_application(
    file_path: &Path,
    resolver: NameResolver,
    default_icon: &Icon,
) -> Result<Application> {
    let name = resolver.resolve(file_path).await?;
    Ok(Application {
        file_path: file_path.to_path_buf(),
        name,
        icon: default_icon.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_icon() -> Icon {
        Icon::Default("default.svg".to_string())
    }

    #[tokio::test]
    async fn file_stem_strips_the_extension_and_keeps_the_rest() {
        let application = build_application(
            Path::new("/apps/Calculator.app"),
            NameResolver::FileStem,
            &default_icon(),
        )
        .await
        .expect("build");

        assert_eq!(application.name, "Calculator");
        assert_eq!(application.file_path, Path::new("/apps/Calculator.app"));
        assert!(application.icon.is_default());
    }

    #[tokio::test]
    async fn file_stem_keeps_names_without_an_extension() {
        let name = NameResolver::FileStem
            .resolve(Path::new("/apps/Terminal"))
            .await
            .expect("resolve");
        assert_eq!(name, "Terminal");
    }

    #[tokio::test]
    async fn path_without_a_file_name_is_invalid() {
        let error = NameResolver::FileStem
            .resolve(Path::new("/"))
            .await
            .expect_err("invalid path");
        match error {
            IndexError::InvalidPath(path) => assert_eq!(path, Path::new("/")),
            other => panic!("expected invalid path, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn desktop_entry_branch_reads_the_name_from_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("editor.desktop");
        tokio::fs::write(&path, "[Desktop Entry]\nName=Text Editor\n")
            .await
            .expect("write");

        let application =
            build_application(&path, NameResolver::DesktopEntry, &default_icon())
                .await
                .expect("build");

        assert_eq!(application.name, "Text Editor");
        assert!(application.icon.is_default());
    }

    #[tokio::test]
    async fn desktop_entry_without_a_name_fails_the_build() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("editor.desktop");
        tokio::fs::write(&path, "[Desktop Entry]\nExec=gedit\n")
            .await
            .expect("write");

        let error = build_application(&path, NameResolver::DesktopEntry, &default_icon())
            .await
            .expect_err("missing name");
        assert!(
            error.to_string().contains("missing Name key"),
            "unexpected message: {error}"
        );
    }

    #[test]
    fn resolver_selection_branches_on_the_operating_system() {
        assert_eq!(
            NameResolver::for_operating_system(OperatingSystem::Linux),
            NameResolver::DesktopEntry
        );
        assert_eq!(
            NameResolver::for_operating_system(OperatingSystem::MacOs),
            NameResolver::FileStem
        );
        assert_eq!(
            NameResolver::for_operating_system(OperatingSystem::Windows),
            NameResolver::FileStem
        );
    }
}
