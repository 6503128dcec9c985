//! Hyperlink resolution over an assembled planner.
//!
//! Runs once per build, after assembly: template links first, then links
//! derived from SVG anchors. Only `/Annots` entries change; page count, order
//! and content are left alone.

use super::context::BuildContext;
use super::destinations::DestinationMap;
use super::report::{InjectedLink, LinkOrigin, LinkReport, SkipReason, SkippedLink};
use crate::error::PipelineError;
use log::{debug, warn};
use lootpixel_pdf_composer::{
    LinkTarget, add_link_annotation, find_named_annotation, page_ids, set_link_target,
};
use lootpixel_render_lopdf::ANCHOR_NAME_KEY;
use lootpixel_traits::AnchorSizer;
use lootpixel_types::{LinkDestination, PdfHyperlink, Rect, SvgAnchor, slot_name};
use lopdf::Document;

/// Layout types an anchor can be authored against.
const ANCHOR_LAYOUT_TYPES: [&str; 4] = ["weekly", "daily", "monthly", "extra"];

pub struct HyperlinkResolver<'a> {
    ctx: &'a BuildContext,
    destinations: &'a DestinationMap,
    sizer: &'a dyn AnchorSizer,
}

impl<'a> HyperlinkResolver<'a> {
    pub fn new(
        ctx: &'a BuildContext,
        destinations: &'a DestinationMap,
        sizer: &'a dyn AnchorSizer,
    ) -> Self {
        Self {
            ctx,
            destinations,
            sizer,
        }
    }

    /// Runs both passes in order.
    pub fn resolve(
        &self,
        doc: &mut Document,
        template_links: &[PdfHyperlink],
        anchors: &[SvgAnchor],
    ) -> Result<LinkReport, PipelineError> {
        let mut report = LinkReport::default();
        self.apply_template_links(doc, template_links, &mut report)?;
        self.apply_anchor_links(doc, anchors, &mut report)?;
        Ok(report)
    }

    /// Replays admin template links.
    ///
    /// Links on pages the build did not emit, links into such pages, and
    /// links with unusable destinations are skipped and recorded.
    pub fn apply_template_links(
        &self,
        doc: &mut Document,
        links: &[PdfHyperlink],
        report: &mut LinkReport,
    ) -> Result<(), PipelineError> {
        let page_count = page_ids(doc).len();
        for link in links {
            let skip = |reason: SkipReason| SkippedLink {
                page: link.page,
                destination: link.destination.clone(),
                reason,
            };
            if link.page == 0 || link.page as usize > page_count {
                debug!(
                    "[RESOLVER] Dropping template link on page {} of {}",
                    link.page, page_count
                );
                report.skipped_links.push(skip(SkipReason::PageOutOfRange));
                continue;
            }
            let target = match link.destination() {
                LinkDestination::Page(n) if n == 0 || n as usize > page_count => {
                    debug!(
                        "[RESOLVER] Dropping template link to page {} of {}",
                        n, page_count
                    );
                    report.skipped_links.push(skip(SkipReason::TargetOutOfRange));
                    continue;
                }
                LinkDestination::Page(n) => LinkTarget::Page(n as usize - 1),
                LinkDestination::Uri(uri) => LinkTarget::Uri(uri),
                LinkDestination::Malformed(raw) => {
                    warn!("[RESOLVER] Skipping template link with malformed destination '{}'", raw);
                    report.skipped_links.push(skip(SkipReason::MalformedDestination));
                    continue;
                }
                LinkDestination::Empty => {
                    debug!("[RESOLVER] Skipping template link without destination on page {}", link.page);
                    report.skipped_links.push(skip(SkipReason::EmptyDestination));
                    continue;
                }
            };
            let page_index = link.page as usize - 1;
            let rect = link.rect();
            add_link_annotation(doc, page_index, rect, &target)?;
            report.links.push(InjectedLink {
                page_index,
                rect,
                target,
                origin: LinkOrigin::Template,
            });
        }
        Ok(())
    }

    /// Turns SVG anchors into internal links.
    ///
    /// An anchor whose page is not in this build, or whose name is not a
    /// known destination, yields nothing.
    pub fn apply_anchor_links(
        &self,
        doc: &mut Document,
        anchors: &[SvgAnchor],
        report: &mut LinkReport,
    ) -> Result<(), PipelineError> {
        for anchor in anchors {
            let Some(owner) = self.owning_page(anchor) else {
                debug!(
                    "[RESOLVER] Anchor '{}' belongs to {}/{} which is not in this build",
                    anchor.name(),
                    anchor.layout_type,
                    anchor.option_name
                );
                continue;
            };
            let Some(destination) = self.destinations.lookup(anchor.name()) else {
                debug!("[RESOLVER] Anchor '{}' names no destination", anchor.name());
                continue;
            };
            if !destination.resolved {
                debug!(
                    "[RESOLVER] Destination '{}' is not in this build; linking to page {}",
                    anchor.name(),
                    destination.index
                );
                report.note_unresolved(anchor.name());
            }

            let target = LinkTarget::Page(destination.index);
            let rect = self.sizer.clickable_rect(anchor);
            self.link_anchor(doc, owner, anchor.name(), rect, &target)?;
            report.links.push(InjectedLink {
                page_index: owner,
                rect,
                target,
                origin: LinkOrigin::Anchor,
            });
        }
        Ok(())
    }

    fn owning_page(&self, anchor: &SvgAnchor) -> Option<usize> {
        if !ANCHOR_LAYOUT_TYPES.contains(&anchor.layout_type.as_str()) {
            return None;
        }
        self.ctx
            .index_of(&slot_name(&anchor.layout_type, &anchor.option_name))
    }

    /// Targets the placeholder the compositor left for this anchor, or adds a
    /// new annotation when the page has none.
    fn link_anchor(
        &self,
        doc: &mut Document,
        page_index: usize,
        name: &str,
        rect: Rect,
        target: &LinkTarget,
    ) -> Result<(), PipelineError> {
        match find_named_annotation(doc, page_index, ANCHOR_NAME_KEY, name) {
            Some(annot_id) => set_link_target(doc, annot_id, target)?,
            None => {
                add_link_annotation(doc, page_index, rect, target)?;
            }
        }
        Ok(())
    }
}
