//! The application index: published snapshot plus the refresh protocol.

use std::sync::Arc;

use futures_util::future::try_join_all;
use parking_lot::RwLock;

use crate::builder::{build_application, NameResolver};
use crate::config::SearchOptions;
use crate::discovery::SharedDiscoverer;
use crate::error::Result;
use crate::icon::{DiskIconStore, SharedIconGenerator};
use crate::os::{OperatingSystem, OperatingSystemVersion};
use crate::types::{Application, Icon};

/// In-memory index of installed applications.
///
/// The published collection is an immutable snapshot replaced wholesale by a
/// successful refresh; a failed refresh leaves it untouched, so readers never
/// observe a partially built or partially enriched collection.
pub struct ApplicationIndex {
    applications: RwLock<Arc<Vec<Application>>>,
    config: RwLock<SearchOptions>,
    default_icon: Icon,
    icon_generator: SharedIconGenerator,
    icon_store: DiskIconStore,
    discoverer: SharedDiscoverer,
    operating_system: OperatingSystem,
    operating_system_version: OperatingSystemVersion,
}

impl ApplicationIndex {
    pub fn new(
        config: SearchOptions,
        default_icon: Icon,
        icon_generator: SharedIconGenerator,
        icon_store: DiskIconStore,
        discoverer: SharedDiscoverer,
        operating_system: OperatingSystem,
        operating_system_version: OperatingSystemVersion,
    ) -> Self {
        Self {
            applications: RwLock::new(Arc::new(Vec::new())),
            config: RwLock::new(config),
            default_icon,
            icon_generator,
            icon_store,
            discoverer,
            operating_system,
            operating_system_version,
        }
    }

    /// Current published snapshot. Empty before the first successful
    /// refresh; never blocks on I/O.
    pub fn get_all(&self) -> Arc<Vec<Application>> {
        self.applications.read().clone()
    }

    /// Replace the held configuration. Always succeeds and takes effect on
    /// the next `refresh_index` call; a refresh already in flight keeps the
    /// configuration it captured when it started.
    pub fn update_config(&self, config: SearchOptions) {
        *self.config.write() = config;
    }

    /// Run one full refresh cycle: discover, build, optionally enrich,
    /// publish. Each step only starts after its predecessor's entire batch
    /// completed; any failure leaves the published snapshot unchanged.
    pub async fn refresh_index(&self) -> Result<()> {
        let options = self.config.read().clone();

        log::info!("refreshing application index");
        let file_paths = self
            .discoverer
            .search(&options, &self.operating_system_version)
            .await?;
        log::debug!("discovered {} candidate paths", file_paths.len());

        let resolver = NameResolver::for_operating_system(self.operating_system);
        let mut applications = try_join_all(
            file_paths
                .iter()
                .map(|path| build_application(path, resolver, &self.default_icon)),
        )
        .await?;

        if options.use_native_icons {
            self.icon_generator.generate_icons(&applications).await?;
            for application in &mut applications {
                let asset = self.icon_store.icon_file_path(&application.file_path);
                application.icon = Icon::Url(asset.to_string_lossy().into_owned());
            }
        }

        log::info!("publishing {} applications", applications.len());
        *self.applications.write() = Arc::new(applications);
        Ok(())
    }

    /// Invalidate generated icon assets through the enrichment adapter.
    /// Independent of the index state.
    pub async fn clear_cache(&self) -> Result<()> {
        self.icon_generator.clear_cache().await
    }
}
