//! Upload-time imports into a [`JsonLinkStore`].
//!
//! When an admin uploads layout artwork, anchors in its SVG and links in its
//! PDF template are captured once and replayed by every later build.

use crate::error::PipelineError;
use log::info;
use lootpixel_pdf_composer::extract_links;
use lootpixel_resource::JsonLinkStore;
use lootpixel_svg::{load_svg_anchors, to_svg_anchors};
use lootpixel_types::PdfHyperlink;
use lopdf::Document;
use std::path::Path;

/// Records the anchors found in `svg_path` for one layout option of a
/// product, replacing any earlier import for the same scope.
///
/// Returns the number of anchors recorded. The store is not saved.
pub fn import_svg_anchors(
    store: &mut JsonLinkStore,
    product_id: u32,
    layout_type: &str,
    option_name: &str,
    svg_path: &Path,
) -> Result<usize, PipelineError> {
    let elements = load_svg_anchors(svg_path)?;
    let anchors = to_svg_anchors(product_id, layout_type, option_name, elements);
    let count = anchors.len();
    info!(
        "[IMPORT] {} anchors from {} for product {} ({}/{})",
        count,
        svg_path.display(),
        product_id,
        layout_type,
        option_name
    );
    store.record_svg_anchors(product_id, layout_type, option_name, anchors);
    Ok(count)
}

/// Records the internal links of the PDF template at `pdf_path` for a
/// `(layout_type, layout_name)` pair, replacing any earlier import.
///
/// Returns the number of links recorded. The store is not saved.
pub fn import_template_links(
    store: &mut JsonLinkStore,
    layout_type: &str,
    layout_name: &str,
    pdf_path: &Path,
) -> Result<usize, PipelineError> {
    let doc = Document::load(pdf_path)?;
    let links: Vec<PdfHyperlink> = extract_links(&doc)?
        .into_iter()
        .map(|link| PdfHyperlink {
            layout_type: layout_type.to_string(),
            layout_name: layout_name.to_string(),
            page: link.page,
            x: link.rect.x,
            y: link.rect.y,
            width: link.rect.width,
            height: link.rect.height,
            destination: link.destination,
        })
        .collect();
    let count = links.len();
    info!(
        "[IMPORT] {} template links from {} for {}/{}",
        count,
        pdf_path.display(),
        layout_type,
        layout_name
    );
    store.record_pdf_links(layout_type, layout_name, links);
    Ok(count)
}
