// src/pipeline/builder.rs
use super::config::{DEFAULT_ASSET_ROOT, default_temp_dir};
use super::orchestrator::Planner;
use crate::error::PipelineError;
use lootpixel_resource::FilesystemAssetResolver;
use lootpixel_traits::{
    AnchorSizer, AssetResolver, InMemoryLinkGeometry, LinkGeometryProvider, NameLengthSizer,
};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// A builder for creating a [`Planner`].
///
/// # Example
///
/// ```ignore
/// use lootpixel::{PlannerBuilder, JsonLinkStore};
/// use std::sync::Arc;
///
/// let planner = PlannerBuilder::new()
///     .with_asset_root("static/assets")
///     .with_link_geometry(Arc::new(JsonLinkStore::open("links.json")?))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct PlannerBuilder {
    asset_root: PathBuf,
    asset_resolver: Option<Arc<dyn AssetResolver>>,
    link_geometry: Arc<dyn LinkGeometryProvider>,
    anchor_sizer: Arc<dyn AnchorSizer>,
    temp_dir: PathBuf,
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            asset_resolver: None,
            link_geometry: Arc::new(InMemoryLinkGeometry::new()),
            anchor_sizer: Arc::new(NameLengthSizer::default()),
            temp_dir: default_temp_dir(),
        }
    }
}

impl PlannerBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Root of the `<product>/<orientation>/...` asset tree.
    ///
    /// Ignored when a custom resolver is set with [`Self::with_asset_resolver`].
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    pub fn with_asset_resolver(mut self, resolver: Arc<dyn AssetResolver>) -> Self {
        self.asset_resolver = Some(resolver);
        self
    }

    pub fn with_link_geometry(mut self, provider: Arc<dyn LinkGeometryProvider>) -> Self {
        self.link_geometry = provider;
        self
    }

    /// Strategy for sizing anchor links. Defaults to [`NameLengthSizer`].
    pub fn with_anchor_sizer(mut self, sizer: Arc<dyn AnchorSizer>) -> Self {
        self.anchor_sizer = sizer;
        self
    }

    /// Directory for intermediate page files. Shared between builds; every
    /// build names its files uniquely.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    pub fn build(self) -> Result<Planner, PipelineError> {
        if self.temp_dir.is_file() {
            return Err(PipelineError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Temp dir '{}' is a file", self.temp_dir.display()),
            )));
        }
        let assets = self
            .asset_resolver
            .unwrap_or_else(|| Arc::new(FilesystemAssetResolver::new(&self.asset_root)));
        log::debug!(
            "[PLANNER] Using {} assets, {} link geometry, temp dir {}",
            assets.name(),
            self.link_geometry.name(),
            self.temp_dir.display()
        );
        Ok(Planner {
            assets,
            links: self.link_geometry,
            sizer: self.anchor_sizer,
            temp_dir: self.temp_dir,
        })
    }
}
