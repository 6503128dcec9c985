use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a page plays in the assembled planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageCategory {
    Cover,
    Ring,
    Tab,
    Weekly,
    Daily,
    Extra,
}

impl PageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageCategory::Cover => "cover",
            PageCategory::Ring => "ring",
            PageCategory::Tab => "tab",
            PageCategory::Weekly => "weekly",
            PageCategory::Daily => "daily",
            PageCategory::Extra => "extra",
        }
    }
}

impl fmt::Display for PageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of an assembled planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSlot {
    /// Symbolic name, e.g. `cover`, `weekly_boxed`, `extra_icons`.
    pub name: String,
    pub category: PageCategory,
    /// 0-based position in the merged document.
    pub index: usize,
}

/// Page name for a layout page: `<layout_type>_<option>`.
///
/// Option identifiers keep their case.
pub fn slot_name(layout_type: &str, option: &str) -> String {
    format!("{}_{}", layout_type, option)
}
