// src/pipeline/config.rs
use std::path::PathBuf;

/// Asset root used when none is configured.
pub const DEFAULT_ASSET_ROOT: &str = "static/assets";

/// Layout type whose admin template links are replayed onto every build.
pub const TEMPLATE_LINK_LAYOUT_TYPE: &str = "weekly";

/// Extra pages appended after the layouts, in output order.
pub const EXTRA_PAGES: [&str; 2] = ["icons", "stickers"];

/// Scratch directory for intermediate single-page documents.
pub fn default_temp_dir() -> PathBuf {
    std::env::temp_dir().join("lootpixel")
}
