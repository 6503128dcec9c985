//! A JSON-file-backed link geometry store.
//!
//! The admin upload flow records SVG anchors and template hyperlinks here;
//! planner builds read them back through [`LinkGeometryProvider`].

use lootpixel_traits::{LinkGeometryProvider, ProviderError};
use lootpixel_types::{PdfHyperlink, SvgAnchor};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// On-disk layout of the link store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkStoreData {
    #[serde(default)]
    pub svg_anchors: Vec<SvgAnchor>,
    #[serde(default)]
    pub pdf_links: Vec<PdfHyperlink>,
}

#[derive(Debug)]
pub struct JsonLinkStore {
    path: PathBuf,
    data: LinkStoreData,
}

impl JsonLinkStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ProviderError> {
        let path = path.as_ref().to_path_buf();
        let data = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| ProviderError::LoadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("[LINKSTORE] Link store {} does not exist yet, starting empty", path.display());
                LinkStoreData::default()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &LinkStoreData {
        &self.data
    }

    /// Replaces the anchors recorded for `(product, layout_type, option_name)`.
    ///
    /// Re-uploading a layout's SVG supersedes the previous import.
    pub fn record_svg_anchors(
        &mut self,
        product_id: u32,
        layout_type: &str,
        option_name: &str,
        anchors: Vec<SvgAnchor>,
    ) {
        self.data
            .svg_anchors
            .retain(|a| !(a.product_id == product_id && a.belongs_to(layout_type, option_name)));
        log::info!(
            "[LINKSTORE] Recording {} SVG anchors for product {} ({}/{})",
            anchors.len(),
            product_id,
            layout_type,
            option_name
        );
        self.data.svg_anchors.extend(anchors);
    }

    /// Replaces the template hyperlinks recorded for `(layout_type, layout_name)`.
    pub fn record_pdf_links(
        &mut self,
        layout_type: &str,
        layout_name: &str,
        links: Vec<PdfHyperlink>,
    ) {
        self.data
            .pdf_links
            .retain(|l| !(l.layout_type == layout_type && l.layout_name == layout_name));
        log::info!(
            "[LINKSTORE] Recording {} template hyperlinks for {}/{}",
            links.len(),
            layout_type,
            layout_name
        );
        self.data.pdf_links.extend(links);
    }

    /// Writes the store back to disk.
    ///
    /// The file is replaced atomically so concurrent readers never see a
    /// half-written store.
    pub fn save(&self) -> Result<(), ProviderError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;
        let json = serde_json::to_vec_pretty(&self.data)
            .map_err(|e| ProviderError::InvalidFormat(e.to_string()))?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(&json)?;
        tmp.persist(&self.path).map_err(|e| ProviderError::Io(e.error.to_string()))?;
        Ok(())
    }
}

impl LinkGeometryProvider for JsonLinkStore {
    fn pdf_links_for(
        &self,
        layout_type: &str,
        layout_name: &str,
    ) -> Result<Vec<PdfHyperlink>, ProviderError> {
        Ok(self
            .data
            .pdf_links
            .iter()
            .filter(|l| l.layout_type == layout_type && l.layout_name == layout_name)
            .cloned()
            .collect())
    }

    fn svg_anchors_for(&self, product_id: u32) -> Result<Vec<SvgAnchor>, ProviderError> {
        Ok(self
            .data
            .svg_anchors
            .iter()
            .filter(|a| a.product_id == product_id)
            .cloned()
            .collect())
    }

    fn name(&self) -> &'static str {
        "JsonLinkStore"
    }
}
