use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel value for `daily_layout` meaning "no daily page".
pub const NO_DAILY_LAYOUT: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            other => Err(format!("unknown orientation '{}'", other)),
        }
    }
}

/// The options a customer picked in the builder for one planner build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub product_id: u32,
    pub orientation: Orientation,
    /// Ring style; only meaningful for landscape planners.
    #[serde(default)]
    pub ring: Option<String>,
    pub tab: String,
    pub weekly_layout: String,
    /// `None` or [`NO_DAILY_LAYOUT`] omits the daily page.
    #[serde(default)]
    pub daily_layout: Option<String>,
    /// Carried through for upstream asset selection; the build ignores it.
    #[serde(default)]
    pub start_day: Option<String>,
}

impl PlannerConfig {
    pub fn new(
        product_id: u32,
        orientation: Orientation,
        tab: impl Into<String>,
        weekly_layout: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            orientation,
            ring: None,
            tab: tab.into(),
            weekly_layout: weekly_layout.into(),
            daily_layout: None,
            start_day: None,
        }
    }

    pub fn with_ring(mut self, ring: impl Into<String>) -> Self {
        self.ring = Some(ring.into());
        self
    }

    pub fn with_daily_layout(mut self, daily: impl Into<String>) -> Self {
        self.daily_layout = Some(daily.into());
        self
    }

    pub fn with_start_day(mut self, start_day: impl Into<String>) -> Self {
        self.start_day = Some(start_day.into());
        self
    }

    /// The ring option, if this build should include a ring page at all.
    pub fn ring(&self) -> Option<&str> {
        match self.orientation {
            Orientation::Landscape => self.ring.as_deref().filter(|r| !r.is_empty()),
            Orientation::Portrait => None,
        }
    }

    /// The daily layout option with the `none` sentinel filtered out.
    pub fn daily(&self) -> Option<&str> {
        self.daily_layout
            .as_deref()
            .filter(|d| !d.is_empty() && *d != NO_DAILY_LAYOUT)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.product_id == 0 {
            return Err("product_id must be a positive integer".to_string());
        }
        if self.tab.trim().is_empty() {
            return Err("tab option is required".to_string());
        }
        if self.weekly_layout.trim().is_empty() {
            return Err("weekly_layout option is required".to_string());
        }
        Ok(())
    }
}
