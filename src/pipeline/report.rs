//! What a build produced.

use lootpixel_pdf_composer::LinkTarget;
use lootpixel_types::{PageSlot, Rect};
use std::path::PathBuf;

/// Which pass injected a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOrigin {
    /// Replayed from an admin-uploaded PDF template.
    Template,
    /// Derived from a named anchor in SVG artwork.
    Anchor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InjectedLink {
    /// 0-based page the link sits on.
    pub page_index: usize,
    /// Top-left-origin rectangle.
    pub rect: Rect,
    pub target: LinkTarget,
    pub origin: LinkOrigin,
}

/// Why a template link was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `page:` followed by something that is not a page number.
    MalformedDestination,
    /// The link sits on a page the build did not emit.
    PageOutOfRange,
    /// The link points at a page the build did not emit.
    TargetOutOfRange,
    EmptyDestination,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLink {
    /// 1-based page recorded on the template link.
    pub page: u32,
    pub destination: String,
    pub reason: SkipReason,
}

/// Link bookkeeping accumulated while resolving.
#[derive(Debug, Clone, Default)]
pub struct LinkReport {
    pub links: Vec<InjectedLink>,
    pub unresolved_destinations: Vec<String>,
    pub skipped_links: Vec<SkippedLink>,
}

impl LinkReport {
    pub(crate) fn note_unresolved(&mut self, name: &str) {
        let name = name.trim().to_lowercase();
        if !self.unresolved_destinations.contains(&name) {
            self.unresolved_destinations.push(name);
        }
    }
}

/// The result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Final PDF location.
    pub output: PathBuf,
    pub build_id: String,
    /// Emitted pages, in document order.
    pub pages: Vec<PageSlot>,
    /// Links injected, template links first.
    pub links: Vec<InjectedLink>,
    /// Symbolic destinations that were linked to but fell back to the cover
    /// because their page was not part of this build.
    pub unresolved_destinations: Vec<String>,
    pub skipped_links: Vec<SkippedLink>,
}

impl BuildReport {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_names(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.name.as_str()).collect()
    }

    /// 0-based targets of every internal link, in injection order.
    pub fn internal_targets(&self) -> Vec<usize> {
        self.links
            .iter()
            .filter_map(|l| match l.target {
                LinkTarget::Page(index) => Some(index),
                LinkTarget::Uri(_) => None,
            })
            .collect()
    }
}
