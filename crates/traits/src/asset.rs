//! AssetResolver trait for locating page artwork.

use lootpixel_types::{Orientation, PageCategory};
use std::fmt::Debug;
use std::path::PathBuf;

/// Locates the raster image for one page of a planner.
///
/// Absence is an expected outcome meaning "skip this page", so the lookup
/// returns `Option` rather than an error.
pub trait AssetResolver: Send + Sync + Debug {
    /// Resolve the image for `(product, orientation, category, option)`.
    ///
    /// `option` is the chosen variant (tab style, layout name, extra kind);
    /// categories without variants (the cover) pass `None`.
    fn resolve(
        &self,
        product_id: u32,
        orientation: Orientation,
        category: PageCategory,
        option: Option<&str>,
    ) -> Option<PathBuf>;

    /// Returns a human-readable name for this resolver (for logging/debugging).
    fn name(&self) -> &'static str;
}
