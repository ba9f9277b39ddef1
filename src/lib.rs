//! In-memory application index for a desktop launcher.
//!
//! This crate turns raw file-system paths produced by an injected discovery
//! routine into a consistent, queryable collection of application records:
//! - Per-OS display-name derivation (desktop-entry parsing on Linux, lexical
//!   file-stem naming elsewhere)
//! - Optional batch icon enrichment through an adapter seam
//! - An all-or-nothing refresh cycle that never publishes a partial index

pub mod builder;
pub mod config;
pub mod desktop_entry;
pub mod discovery;
pub mod error;
pub mod icon;
pub mod index;
pub mod os;
pub mod types;

// Re-export main types
pub use builder::NameResolver;
pub use config::SearchOptions;
pub use desktop_entry::DesktopEntry;
pub use discovery::{Discoverer, FileSystemDiscoverer, SharedDiscoverer};
pub use error::{IndexError, Result};
pub use icon::{DiskIconStore, IconGenerator, SharedIconGenerator};
pub use index::ApplicationIndex;
pub use os::{OperatingSystem, OperatingSystemVersion};
pub use types::{Application, Icon};
