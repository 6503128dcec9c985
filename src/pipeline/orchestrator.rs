// src/pipeline/orchestrator.rs
use super::config::TEMPLATE_LINK_LAYOUT_TYPE;
use super::context::BuildContext;
use super::destinations::DestinationMap;
use super::plan::{PlannedPage, canonical_pages};
use super::report::BuildReport;
use super::resolver::HyperlinkResolver;
use crate::error::PipelineError;
use log::{debug, info};
use lootpixel_pdf_composer::assemble;
use lootpixel_render_lopdf::{AnchorPlacement, render_page, save_document};
use lootpixel_traits::{AnchorSizer, AssetResolver, LinkGeometryProvider};
use lootpixel_types::PlannerConfig;
use lopdf::Document;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tempfile::NamedTempFile;

/// Builds planner PDFs.
///
/// A `Planner` holds only read-only collaborators, so one instance can serve
/// any number of builds, including concurrent ones. All per-build state lives
/// in a [`BuildContext`] created by [`Planner::build`].
#[derive(Debug, Clone)]
pub struct Planner {
    pub(super) assets: Arc<dyn AssetResolver>,
    pub(super) links: Arc<dyn LinkGeometryProvider>,
    pub(super) sizer: Arc<dyn AnchorSizer>,
    pub(super) temp_dir: PathBuf,
}

impl Planner {
    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// Builds one planner and writes it to `output`.
    ///
    /// The output file appears only once the whole document is written; on
    /// any error it is left untouched and intermediate files are removed.
    pub fn build(&self, config: &PlannerConfig, output: &Path) -> Result<BuildReport, PipelineError> {
        config.validate().map_err(PipelineError::InvalidConfig)?;
        let start = Instant::now();
        let mut ctx = BuildContext::new(config.product_id);
        info!(
            "[PLANNER] Build {} for product {} ({}, tab={}, weekly={}, daily={})",
            ctx.build_id(),
            config.product_id,
            config.orientation,
            config.tab,
            config.weekly_layout,
            config.daily().unwrap_or("none")
        );

        let intermediates = self.composite_pages(config, &mut ctx)?;
        if intermediates.is_empty() {
            return Err(PipelineError::NoPages {
                product_id: config.product_id,
                orientation: config.orientation,
            });
        }

        let pages = intermediates
            .iter()
            .map(|tmp| Document::load(tmp.path()))
            .collect::<Result<Vec<_>, _>>()?;
        let mut merged = assemble(pages)?;
        for tmp in intermediates {
            tmp.close()?;
        }
        debug!("[PLANNER] Assembled {} pages", ctx.page_count());

        let destinations = DestinationMap::build(&ctx, config);
        let template_links = self
            .links
            .pdf_links_for(TEMPLATE_LINK_LAYOUT_TYPE, &config.weekly_layout)?;
        let anchors = self.links.svg_anchors_for(config.product_id)?;
        let link_report = HyperlinkResolver::new(&ctx, &destinations, self.sizer.as_ref())
            .resolve(&mut merged, &template_links, &anchors)?;

        write_atomically(&mut merged, output, ctx.build_id())?;
        info!(
            "[PLANNER] Build {} wrote {} ({} pages, {} links, {} skipped) in {:.2?}",
            ctx.build_id(),
            output.display(),
            ctx.page_count(),
            link_report.links.len(),
            link_report.skipped_links.len(),
            start.elapsed()
        );

        Ok(BuildReport {
            output: output.to_path_buf(),
            build_id: ctx.build_id().to_string(),
            pages: ctx.into_slots(),
            links: link_report.links,
            unresolved_destinations: link_report.unresolved_destinations,
            skipped_links: link_report.skipped_links,
        })
    }

    /// Renders every page whose asset exists into its own temporary PDF, in
    /// canonical order, registering each emitted page in `ctx`.
    fn composite_pages(
        &self,
        config: &PlannerConfig,
        ctx: &mut BuildContext,
    ) -> Result<Vec<NamedTempFile>, PipelineError> {
        fs::create_dir_all(&self.temp_dir)?;
        let mut intermediates = Vec::new();
        for planned in canonical_pages(config) {
            let Some(asset) = self.assets.resolve(
                config.product_id,
                config.orientation,
                planned.category,
                planned.option.as_deref(),
            ) else {
                debug!(
                    "[PLANNER] No asset for '{}' via {}; skipping page",
                    planned.name,
                    self.assets.name()
                );
                continue;
            };

            let placements = self.anchor_placements(config.product_id, &planned)?;
            let mut page = render_page(&asset, &placements)?;

            let mut tmp = tempfile::Builder::new()
                .prefix(&format!("{}-{:02}-", ctx.build_id(), ctx.page_count()))
                .suffix(".pdf")
                .tempfile_in(&self.temp_dir)?;
            {
                let mut writer = BufWriter::new(tmp.as_file_mut());
                save_document(&mut page, &mut writer)?;
                writer.flush()?;
            }

            let index = ctx.push_slot(planned.name.clone(), planned.category);
            debug!("[PLANNER] Page {} = '{}' from {}", index, planned.name, asset.display());
            intermediates.push(tmp);
        }
        Ok(intermediates)
    }

    fn anchor_placements(
        &self,
        product_id: u32,
        planned: &PlannedPage,
    ) -> Result<Vec<AnchorPlacement>, PipelineError> {
        let Some((layout_type, option)) = &planned.layout else {
            return Ok(Vec::new());
        };
        Ok(self
            .links
            .svg_anchors_for_layout(product_id, layout_type, option)?
            .iter()
            .map(|anchor| AnchorPlacement {
                name: anchor.name().to_string(),
                rect: self.sizer.clickable_rect(anchor),
            })
            .collect())
    }
}

/// Writes `doc` next to `output` under a unique temporary name, then renames
/// it into place.
fn write_atomically(doc: &mut Document, output: &Path, build_id: &str) -> Result<(), PipelineError> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let mut tmp = tempfile::Builder::new()
        .prefix(&format!(".{}-", build_id))
        .suffix(".pdf.part")
        .tempfile_in(&dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        doc.save_to(&mut writer)?;
        writer.flush()?;
    }
    tmp.persist(output).map_err(|e| e.error)?;
    Ok(())
}
