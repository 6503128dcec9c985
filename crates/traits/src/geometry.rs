//! LinkGeometryProvider trait for reading persisted link rectangles.
//!
//! Both record kinds are created when an admin uploads layout artwork and
//! are only ever read by planner builds.

use lootpixel_types::{PdfHyperlink, SvgAnchor};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for link geometry lookups.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("Link store not found: {0}")]
    NotFound(String),

    #[error("Failed to load link store '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Invalid link store format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ProviderError {
    fn from(err: std::io::Error) -> Self {
        ProviderError::Io(err.to_string())
    }
}

/// Read-only access to the two sources of clickable-link geometry.
pub trait LinkGeometryProvider: Send + Sync + Debug {
    /// Admin template links for a `(layout_type, layout_name)` pair.
    fn pdf_links_for(
        &self,
        layout_type: &str,
        layout_name: &str,
    ) -> Result<Vec<PdfHyperlink>, ProviderError>;

    /// Every SVG anchor recorded for a product, across all layouts.
    fn svg_anchors_for(&self, product_id: u32) -> Result<Vec<SvgAnchor>, ProviderError>;

    /// Anchors for a single layout option of a product.
    fn svg_anchors_for_layout(
        &self,
        product_id: u32,
        layout_type: &str,
        option_name: &str,
    ) -> Result<Vec<SvgAnchor>, ProviderError> {
        Ok(self
            .svg_anchors_for(product_id)?
            .into_iter()
            .filter(|a| a.belongs_to(layout_type, option_name))
            .collect())
    }

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory link geometry provider.
///
/// Records are kept in insertion order, which is the iteration order builds see.
#[derive(Debug, Default)]
pub struct InMemoryLinkGeometry {
    pdf_links: RwLock<Vec<PdfHyperlink>>,
    svg_anchors: RwLock<HashMap<u32, Vec<SvgAnchor>>>,
}

impl InMemoryLinkGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template hyperlink.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::LoadFailed` if the internal lock is poisoned.
    pub fn add_pdf_link(&self, link: PdfHyperlink) -> Result<(), ProviderError> {
        let mut links = self.pdf_links.write().map_err(|_| poisoned("pdf_links"))?;
        links.push(link);
        Ok(())
    }

    /// Add an SVG anchor under its product.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::LoadFailed` if the internal lock is poisoned.
    pub fn add_svg_anchor(&self, anchor: SvgAnchor) -> Result<(), ProviderError> {
        let mut anchors = self.svg_anchors.write().map_err(|_| poisoned("svg_anchors"))?;
        anchors.entry(anchor.product_id).or_default().push(anchor);
        Ok(())
    }

    /// Total number of stored records of both kinds.
    ///
    /// Returns 0 if a lock is poisoned.
    pub fn len(&self) -> usize {
        let links = self.pdf_links.read().map(|l| l.len()).unwrap_or(0);
        let anchors = self
            .svg_anchors
            .read()
            .map(|a| a.values().map(Vec::len).sum())
            .unwrap_or(0);
        links + anchors
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(store: &str) -> ProviderError {
    ProviderError::LoadFailed {
        path: store.to_string(),
        message: "link store lock poisoned".to_string(),
    }
}

impl LinkGeometryProvider for InMemoryLinkGeometry {
    fn pdf_links_for(
        &self,
        layout_type: &str,
        layout_name: &str,
    ) -> Result<Vec<PdfHyperlink>, ProviderError> {
        let links = self.pdf_links.read().map_err(|_| poisoned("pdf_links"))?;
        Ok(links
            .iter()
            .filter(|l| l.layout_type == layout_type && l.layout_name == layout_name)
            .cloned()
            .collect())
    }

    fn svg_anchors_for(&self, product_id: u32) -> Result<Vec<SvgAnchor>, ProviderError> {
        let anchors = self.svg_anchors.read().map_err(|_| poisoned("svg_anchors"))?;
        Ok(anchors.get(&product_id).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "InMemoryLinkGeometry"
    }
}
