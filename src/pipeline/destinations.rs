//! Symbolic link destinations.
//!
//! Anchor names in layout artwork (`home`, `January`, `stickers`, ...) are
//! resolved against a table built fresh for each build from the pages that
//! were actually emitted.

use super::context::BuildContext;
use lootpixel_types::{PageCategory, PlannerConfig, slot_name};
use std::collections::BTreeMap;

pub const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const MONTHLY: &str = "monthly";

/// Page index every dangling destination falls back to (the cover).
pub const FALLBACK_PAGE: usize = 0;

/// Where a symbolic name points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub index: usize,
    /// `false` when the target page was not emitted and `index` is the fallback.
    pub resolved: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DestinationMap {
    entries: BTreeMap<String, Destination>,
}

impl DestinationMap {
    /// Builds the table for one build.
    ///
    /// Keys whose target page is missing still resolve, to [`FALLBACK_PAGE`],
    /// so no injected link ever dangles.
    pub fn build(ctx: &BuildContext, config: &PlannerConfig) -> Self {
        let extra = PageCategory::Extra.as_str();
        let mut targets: Vec<(String, Option<String>)> = vec![
            ("cover".into(), Some("cover".into())),
            ("home".into(), Some("cover".into())),
            (MONTHLY.into(), Some(slot_name(MONTHLY, MONTHS[0]))),
        ];
        targets.extend(
            MONTHS
                .iter()
                .map(|m| (m.to_string(), Some(slot_name(MONTHLY, m)))),
        );
        targets.push((
            "weekly".into(),
            Some(slot_name(PageCategory::Weekly.as_str(), &config.weekly_layout)),
        ));
        targets.push((
            "daily".into(),
            config
                .daily()
                .map(|d| slot_name(PageCategory::Daily.as_str(), d)),
        ));
        targets.push(("icons".into(), Some(slot_name(extra, "icons"))));
        targets.push(("stickers".into(), Some(slot_name(extra, "stickers"))));

        let entries = targets
            .into_iter()
            .map(|(key, target)| {
                let index = target.as_deref().and_then(|name| ctx.index_of(name));
                let destination = match index {
                    Some(index) => Destination {
                        index,
                        resolved: true,
                    },
                    None => Destination {
                        index: FALLBACK_PAGE,
                        resolved: false,
                    },
                };
                (key, destination)
            })
            .collect();
        Self { entries }
    }

    /// Looks up an anchor name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<Destination> {
        self.entries.get(&name.trim().to_lowercase()).copied()
    }

    /// Keys currently pointing at the fallback page, in key order.
    pub fn fallbacks(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, d)| !d.resolved)
            .map(|(k, _)| k.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
