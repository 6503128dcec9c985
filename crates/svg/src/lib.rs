//! Extracts named anchor rectangles from SVG layout files.
//!
//! Admins upload an SVG next to each layout's artwork. Two kinds of element
//! become anchors:
//!
//! - `<text>`: named by its text content. The box is estimated from the
//!   character count and font size since no glyph metrics are available.
//! - `<rect id="...">`: named by its id, with its exact geometry.

mod error;

pub use error::SvgError;

use lootpixel_types::{AnchorElement, AnchorKind, SvgAnchor};
use roxmltree::{Document, Node, ParsingOptions};
use std::path::Path;

/// Font size assumed when a `<text>` element has none, or an unreadable one.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;
/// Average glyph advance as a fraction of the font size.
const GLYPH_ADVANCE: f32 = 0.6;
const LINE_HEIGHT: f32 = 1.2;
const UNNAMED: &str = "unnamed";

/// Parses anchors out of SVG source, text anchors first, then rect anchors,
/// each in document order.
pub fn parse_svg_anchors(source: &str) -> Result<Vec<AnchorElement>, SvgError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(source, options)?;

    let mut anchors: Vec<AnchorElement> = elements_named(&doc, "text")
        .filter_map(text_anchor)
        .collect();
    anchors.extend(elements_named(&doc, "rect").filter_map(rect_anchor));

    log::debug!("[SVG] Extracted {} anchors from SVG", anchors.len());
    Ok(anchors)
}

/// Reads and parses an SVG file.
pub fn load_svg_anchors<P: AsRef<Path>>(path: P) -> Result<Vec<AnchorElement>, SvgError> {
    let source = std::fs::read_to_string(path.as_ref())?;
    parse_svg_anchors(&source)
}

/// Ties parsed anchors to the product layout they were uploaded for.
pub fn to_svg_anchors(
    product_id: u32,
    layout_type: &str,
    option_name: &str,
    elements: Vec<AnchorElement>,
) -> Vec<SvgAnchor> {
    elements
        .into_iter()
        .map(|el| SvgAnchor::new(product_id, layout_type, option_name, el))
        .collect()
}

fn elements_named<'a, 'input>(
    doc: &'a Document<'input>,
    local_name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    doc.descendants()
        .filter(move |n| n.is_element() && n.tag_name().name() == local_name)
}

fn text_anchor(node: Node<'_, '_>) -> Option<AnchorElement> {
    let content: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    let name = match content.trim() {
        "" => UNNAMED.to_string(),
        trimmed => trimmed.to_string(),
    };

    let (x, y) = match (number_attr(node, "x"), number_attr(node, "y")) {
        (Ok(x), Ok(y)) => (x, y),
        _ => {
            log::warn!("[SVG] Skipping <text> anchor '{}' with non-numeric position", name);
            return None;
        }
    };

    let font_size = node
        .attribute("font-size")
        .map(|raw| {
            parse_font_size(raw).unwrap_or_else(|| {
                log::warn!(
                    "[SVG] Unreadable font-size '{}' on anchor '{}', assuming {}",
                    raw,
                    name,
                    DEFAULT_FONT_SIZE
                );
                DEFAULT_FONT_SIZE
            })
        })
        .unwrap_or(DEFAULT_FONT_SIZE);

    let width = name.chars().count() as f32 * font_size * GLYPH_ADVANCE;
    let height = font_size * LINE_HEIGHT;

    Some(AnchorElement {
        name,
        x,
        // SVG text y is the baseline; move the box up to cover the glyphs
        y: y - height,
        width,
        height,
        kind: AnchorKind::Text,
    })
}

fn rect_anchor(node: Node<'_, '_>) -> Option<AnchorElement> {
    let id = node.attribute("id").filter(|id| !id.is_empty())?;
    let geometry = (
        number_attr(node, "x"),
        number_attr(node, "y"),
        number_attr(node, "width"),
        number_attr(node, "height"),
    );
    match geometry {
        (Ok(x), Ok(y), Ok(width), Ok(height)) => Some(AnchorElement {
            name: id.to_string(),
            x,
            y,
            width,
            height,
            kind: AnchorKind::Rect,
        }),
        _ => {
            log::warn!("[SVG] Skipping <rect id=\"{}\"> with non-numeric geometry", id);
            None
        }
    }
}

/// Reads a numeric attribute, defaulting to 0 when absent.
fn number_attr(node: Node<'_, '_>, name: &str) -> Result<f32, ()> {
    match node.attribute(name) {
        None => Ok(0.0),
        Some(raw) => raw.trim().parse::<f32>().map_err(|_| ()),
    }
}

/// Parses `14`, `14px` or `14pt`. Returns `None` for anything else,
/// including non-positive sizes.
pub fn parse_font_size(raw: &str) -> Option<f32> {
    let trimmed = raw.trim();
    let number = trimmed
        .strip_suffix("px")
        .or_else(|| trimmed.strip_suffix("pt"))
        .unwrap_or(trimmed)
        .trim();
    number
        .parse::<f32>()
        .ok()
        .filter(|size| size.is_finite() && *size > 0.0)
}
