//! Page compositor for planner builds.
//!
//! Every planner page is a single raster image. This crate turns one image
//! into one PDF page sized 1 px = 1 pt, so link rectangles measured on the
//! artwork apply to the page unchanged.

mod error;
mod renderer;

pub use error::RenderError;
pub use renderer::{
    ANCHOR_NAME_KEY, AnchorPlacement, PageImage, render_image_page, render_page, save_document,
};
