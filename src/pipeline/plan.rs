//! The canonical page order of a planner.

use super::config::EXTRA_PAGES;
use lootpixel_types::{PageCategory, PlannerConfig, slot_name};

/// A page the build will try to emit, before its asset is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPage {
    /// Name the page is registered under once emitted.
    pub name: String,
    pub category: PageCategory,
    /// Variant passed to the asset resolver.
    pub option: Option<String>,
    /// `(layout_type, option_name)` for pages that carry SVG anchors.
    pub layout: Option<(String, String)>,
}

impl PlannedPage {
    fn fixed(name: &str, category: PageCategory, option: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            category,
            option: option.map(str::to_string),
            layout: None,
        }
    }

    fn layout(category: PageCategory, option: &str) -> Self {
        let layout_type = category.as_str();
        Self {
            name: slot_name(layout_type, option),
            category,
            option: Some(option.to_string()),
            layout: Some((layout_type.to_string(), option.to_string())),
        }
    }

    fn extra(kind: &str) -> Self {
        Self {
            name: slot_name(PageCategory::Extra.as_str(), kind),
            category: PageCategory::Extra,
            option: Some(kind.to_string()),
            layout: None,
        }
    }
}

/// Every page `config` asks for, in output order:
/// cover, ring, tab, weekly, daily, then the extras.
///
/// The ring only appears for landscape planners and the daily page only when
/// one was chosen. Pages whose asset turns out to be missing are dropped later
/// without disturbing the relative order of the rest.
pub fn canonical_pages(config: &PlannerConfig) -> Vec<PlannedPage> {
    let mut pages = vec![PlannedPage::fixed("cover", PageCategory::Cover, None)];
    if let Some(ring) = config.ring() {
        pages.push(PlannedPage::fixed("ring", PageCategory::Ring, Some(ring)));
    }
    pages.push(PlannedPage::fixed("tab", PageCategory::Tab, Some(&config.tab)));
    pages.push(PlannedPage::layout(PageCategory::Weekly, &config.weekly_layout));
    if let Some(daily) = config.daily() {
        pages.push(PlannedPage::layout(PageCategory::Daily, daily));
    }
    pages.extend(EXTRA_PAGES.iter().map(|kind| PlannedPage::extra(kind)));
    pages
}
