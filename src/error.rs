// src/error.rs
use lootpixel_pdf_composer::ComposerError;
use lootpixel_render_lopdf::RenderError;
use lootpixel_svg::SvgError;
use lootpixel_traits::ProviderError;
use lootpixel_types::Orientation;
use thiserror::Error;

/// A comprehensive error type for the planner build pipeline.
///
/// Every variant is fatal for the build that raised it. Recoverable
/// conditions (missing assets, bad link records) never surface here.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid planner configuration: {0}")]
    InvalidConfig(String),

    #[error("No page assets found for product {product_id} ({orientation})")]
    NoPages {
        product_id: u32,
        orientation: Orientation,
    },

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Composition failed: {0}")]
    Compose(#[from] ComposerError),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Link geometry lookup failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("SVG import failed: {0}")]
    Svg(#[from] SvgError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
