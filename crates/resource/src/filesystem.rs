//! Filesystem-based asset resolver.
//!
//! Artwork lives under `<root>/<product_id>/<orientation>/...` following the
//! upload convention:
//!
//! | Category | Path                       |
//! |----------|----------------------------|
//! | cover    | `cover/cover.png`          |
//! | ring     | `rings/<ring>.png`         |
//! | tab      | `tabs/<tab>.png`           |
//! | weekly   | `layouts/weekly_<opt>.png` |
//! | daily    | `layouts/daily_<opt>.png`  |
//! | extra    | `<extra>/<extra>.png`      |
//!
//! # Security
//!
//! Option names come from customer input, so resolved paths are validated to
//! stay within the asset root (e.g. a tab named `../../secret`).

use lootpixel_traits::AssetResolver;
use lootpixel_types::{Orientation, PageCategory, slot_name};
use std::path::{Component, Path, PathBuf};

/// Path of an asset relative to `<root>/<product_id>/<orientation>`.
///
/// Returns `None` when the category needs an option and none was given, or
/// when the option contains a path separator.
pub fn asset_relative_path(category: PageCategory, option: Option<&str>) -> Option<String> {
    if let Some(opt) = option
        && (opt.is_empty() || opt.contains(['/', '\\']))
    {
        return None;
    }
    let path = match (category, option) {
        (PageCategory::Cover, _) => "cover/cover.png".to_string(),
        (PageCategory::Ring, Some(ring)) => format!("rings/{}.png", ring),
        (PageCategory::Tab, Some(tab)) => format!("tabs/{}.png", tab),
        (PageCategory::Weekly | PageCategory::Daily, Some(opt)) => {
            format!("layouts/{}.png", slot_name(category.as_str(), opt))
        }
        (PageCategory::Extra, Some(extra)) => format!("{}/{}.png", extra, extra),
        (_, None) => return None,
    };
    Some(path)
}

/// Resolves planner artwork from the local filesystem.
#[derive(Debug)]
pub struct FilesystemAssetResolver {
    base_path: PathBuf,
    /// Canonicalized base path for security checks
    canonical_base: Option<PathBuf>,
}

impl FilesystemAssetResolver {
    /// Creates a resolver rooted at `base_path` (typically `static/assets`).
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        // May fail if the root doesn't exist yet
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves and validates a path relative to the asset root.
    ///
    /// Returns `None` if the path would escape the root directory.
    fn resolve_path_safe(&self, path: &str) -> Option<PathBuf> {
        if Path::new(path).is_absolute() {
            return None;
        }
        if Path::new(path)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }

        let full_path = self.base_path.join(path);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            if canonical.starts_with(base) {
                return Some(canonical);
            }
            // Symlink out of the root
            return None;
        }

        Some(full_path)
    }
}

impl AssetResolver for FilesystemAssetResolver {
    fn resolve(
        &self,
        product_id: u32,
        orientation: Orientation,
        category: PageCategory,
        option: Option<&str>,
    ) -> Option<PathBuf> {
        let relative = asset_relative_path(category, option)?;
        let path = format!("{}/{}/{}", product_id, orientation, relative);
        let resolved = self.resolve_path_safe(&path)?;
        if resolved.is_file() {
            Some(resolved)
        } else {
            log::debug!("[ASSETS] Asset not found, page will be skipped: {}", path);
            None
        }
    }

    fn name(&self) -> &'static str {
        "FilesystemAssetResolver"
    }
}
