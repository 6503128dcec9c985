//! Loot Pixel planner builder.
//!
//! Assembles a printable planner PDF from per-page artwork chosen by the
//! customer, then overlays navigation links: links captured from admin PDF
//! templates, and links derived from named anchors in the layout SVGs.
//!
//! The workspace is layered:
//!
//! - `lootpixel-types`: planner configuration, page slots, link geometry
//! - `lootpixel-traits`: asset, link-geometry and anchor-sizing seams
//! - `lootpixel-resource`: filesystem asset resolver and JSON link store
//! - `lootpixel-svg`: anchor extraction from SVG layouts
//! - `lootpixel-render-lopdf`: image to single-page PDF
//! - `lootpixel-pdf-composer`: assembly, link annotations, link extraction
//!
//! This crate wires them into the build [`pipeline`].

pub mod access;
pub mod error;
pub mod import;
pub mod pipeline;

pub use lootpixel_pdf_composer as composer;
pub use lootpixel_render_lopdf as render;
pub use lootpixel_resource as resource;
pub use lootpixel_svg as svg;
pub use lootpixel_traits as traits;
pub use lootpixel_types as types;

pub use access::{generate_access_code, product_id_from_code};
pub use error::PipelineError;
pub use import::{import_svg_anchors, import_template_links};
pub use lootpixel_pdf_composer::LinkTarget;
pub use lootpixel_resource::{FilesystemAssetResolver, JsonLinkStore};
pub use lootpixel_traits::{
    AnchorSizer, AssetResolver, InMemoryLinkGeometry, LinkGeometryProvider, NameLengthSizer,
    StoredExtentSizer,
};
pub use lootpixel_types::{Orientation, PageCategory, PageSlot, PlannerConfig};
pub use pipeline::{
    BuildReport, BuildRequest, InjectedLink, LinkOrigin, Planner, PlannerBuilder, SkipReason,
    SkippedLink,
};
