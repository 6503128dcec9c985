//! Asset trees and link geometry for planner builds.

use image::{Rgb, RgbImage};
use lootpixel::resource::asset_relative_path;
use lootpixel::types::{AnchorElement, AnchorKind, PdfHyperlink, SvgAnchor};
use lootpixel::{
    InMemoryLinkGeometry, LinkGeometryProvider, Orientation, PageCategory, Planner,
    PlannerBuilder, PlannerConfig,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub const PAGE_HEIGHT: u32 = 80;

/// Distinct page widths so the page order of an output can be read back
/// from its MediaBoxes.
pub const COVER_W: u32 = 60;
pub const RING_W: u32 = 61;
pub const TAB_W: u32 = 62;
pub const WEEKLY_W: u32 = 63;
pub const DAILY_W: u32 = 64;
pub const ICONS_W: u32 = 65;
pub const STICKERS_W: u32 = 66;

/// A scratch `static/assets`-style tree plus temp and output directories.
pub struct AssetTree {
    pub dir: TempDir,
}

impl AssetTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn assets(&self) -> PathBuf {
        self.dir.path().join("assets")
    }

    pub fn temp(&self) -> PathBuf {
        self.dir.path().join("tmp")
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.dir.path().join("out").join(name)
    }

    fn asset_path(
        &self,
        product_id: u32,
        orientation: Orientation,
        category: PageCategory,
        option: Option<&str>,
    ) -> PathBuf {
        let rel = asset_relative_path(category, option).unwrap();
        self.assets()
            .join(product_id.to_string())
            .join(orientation.as_str())
            .join(rel)
    }

    /// Writes a solid PNG page asset.
    pub fn add(
        &self,
        product_id: u32,
        orientation: Orientation,
        category: PageCategory,
        option: Option<&str>,
        width: u32,
    ) -> PathBuf {
        let path = self.asset_path(product_id, orientation, category, option);
        write_png(&path, width, PAGE_HEIGHT);
        path
    }

    /// Writes a file with a `.png` name that is not an image.
    pub fn add_corrupt(
        &self,
        product_id: u32,
        orientation: Orientation,
        category: PageCategory,
        option: Option<&str>,
    ) -> PathBuf {
        let path = self.asset_path(product_id, orientation, category, option);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"not an image").unwrap();
        path
    }

    /// Every page kind for `product_id` in `orientation`, using `minimal` tab,
    /// `boxed` weekly, `hourly` daily and `gold` ring.
    pub fn add_full_set(&self, product_id: u32, orientation: Orientation) {
        self.add(product_id, orientation, PageCategory::Cover, None, COVER_W);
        self.add(product_id, orientation, PageCategory::Ring, Some("gold"), RING_W);
        self.add(product_id, orientation, PageCategory::Tab, Some("minimal"), TAB_W);
        self.add(product_id, orientation, PageCategory::Weekly, Some("boxed"), WEEKLY_W);
        self.add(product_id, orientation, PageCategory::Daily, Some("hourly"), DAILY_W);
        self.add(product_id, orientation, PageCategory::Extra, Some("icons"), ICONS_W);
        self.add(product_id, orientation, PageCategory::Extra, Some("stickers"), STICKERS_W);
    }

    pub fn planner(&self, links: Arc<dyn LinkGeometryProvider>) -> Planner {
        PlannerBuilder::new()
            .with_asset_root(self.assets())
            .with_temp_dir(self.temp())
            .with_link_geometry(links)
            .build()
            .unwrap()
    }

    pub fn planner_without_links(&self) -> Planner {
        self.planner(Arc::new(InMemoryLinkGeometry::new()))
    }
}

pub fn write_png(path: &Path, width: u32, height: u32) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    RgbImage::from_pixel(width, height, Rgb([240, 230, 220]))
        .save(path)
        .unwrap();
}

pub fn portrait_config(product_id: u32) -> PlannerConfig {
    PlannerConfig::new(product_id, Orientation::Portrait, "minimal", "boxed")
}

pub fn template_link(page: u32, destination: &str) -> PdfHyperlink {
    PdfHyperlink {
        layout_type: "weekly".to_string(),
        layout_name: "boxed".to_string(),
        page,
        x: 4.0,
        y: 4.0,
        width: 20.0,
        height: 10.0,
        destination: destination.to_string(),
    }
}

pub fn text_anchor(product_id: u32, layout_type: &str, option: &str, name: &str) -> SvgAnchor {
    SvgAnchor::new(
        product_id,
        layout_type,
        option,
        AnchorElement {
            name: name.to_string(),
            x: 2.0,
            y: 30.0,
            width: 20.0,
            height: 14.0,
            kind: AnchorKind::Text,
        },
    )
}
