//! Link extraction from admin-uploaded PDF templates.
//!
//! Designers author navigation links in a template PDF; the link rectangles
//! and their page destinations are captured once at upload time and replayed
//! onto every planner built with that layout.

use crate::error::ComposerError;
use crate::links::page_size;
use lootpixel_types::{LinkDestination, Rect};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashMap;

/// A link found on a template page.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedLink {
    /// 1-based page the link sits on.
    pub page: u32,
    /// Top-left-origin rectangle.
    pub rect: Rect,
    /// `page:<n>` for links into the same document, empty otherwise.
    pub destination: String,
}

/// Extracts every non-URI link annotation from `doc`, in page order.
pub fn extract_links(doc: &Document) -> Result<Vec<ExtractedLink>, ComposerError> {
    let pages = doc.get_pages();
    let page_numbers: HashMap<ObjectId, u32> = pages.iter().map(|(num, id)| (*id, *num)).collect();

    let mut links = Vec::new();
    for (page_num, page_id) in &pages {
        let (_, page_height) = page_size(doc, *page_id)?;
        for annot in link_annotations(doc, *page_id) {
            if is_uri_action(doc, annot) {
                continue;
            }
            let Some(rect) = annotation_rect(doc, annot, page_height) else {
                log::warn!("[COMPOSER] Skipping link with unreadable /Rect on template page {}", page_num);
                continue;
            };
            let destination = destination_page(doc, annot, &page_numbers)
                .map(LinkDestination::page)
                .unwrap_or_default();
            links.push(ExtractedLink {
                page: *page_num,
                rect,
                destination,
            });
        }
    }

    log::info!("[COMPOSER] Extracted {} template links from {} pages", links.len(), pages.len());
    Ok(links)
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

fn link_annotations(doc: &Document, page_id: ObjectId) -> Vec<&Dictionary> {
    let Some(annots) = doc
        .get_dictionary(page_id)
        .ok()
        .and_then(|page| page.get(b"Annots").ok())
        .and_then(|obj| resolve(doc, obj))
        .and_then(|obj| obj.as_array().ok())
    else {
        return Vec::new();
    };

    annots
        .iter()
        .filter_map(|entry| resolve(doc, entry)?.as_dict().ok())
        .filter(|annot| {
            annot
                .get(b"Subtype")
                .and_then(Object::as_name)
                .map(|name| name == b"Link")
                .unwrap_or(false)
        })
        .collect()
}

fn action<'a>(doc: &'a Document, annot: &'a Dictionary) -> Option<&'a Dictionary> {
    annot
        .get(b"A")
        .ok()
        .and_then(|obj| resolve(doc, obj))
        .and_then(|obj| obj.as_dict().ok())
}

fn is_uri_action(doc: &Document, annot: &Dictionary) -> bool {
    action(doc, annot)
        .and_then(|a| a.get(b"S").and_then(Object::as_name).ok())
        .map(|s| s == b"URI")
        .unwrap_or(false)
}

fn annotation_rect(doc: &Document, annot: &Dictionary, page_height: f32) -> Option<Rect> {
    let arr = resolve(doc, annot.get(b"Rect").ok()?)?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let mut coords = [0.0f32; 4];
    for (slot, obj) in coords.iter_mut().zip(arr) {
        *slot = obj.as_float().ok()?;
    }
    Some(Rect::from_pdf_rect(coords, page_height))
}

/// The 1-based page an explicit destination points at, from `/Dest` or a
/// GoTo action's `/D`. Named destinations are not followed.
fn destination_page(
    doc: &Document,
    annot: &Dictionary,
    page_numbers: &HashMap<ObjectId, u32>,
) -> Option<u32> {
    let dest = match annot.get(b"Dest") {
        Ok(dest) => dest,
        Err(_) => {
            let goto = action(doc, annot)?;
            if goto.get(b"S").and_then(Object::as_name).ok()? != b"GoTo" {
                return None;
            }
            goto.get(b"D").ok()?
        }
    };
    let array = resolve(doc, dest)?.as_array().ok()?;
    let page_ref = array.first()?.as_reference().ok()?;
    page_numbers.get(&page_ref).copied()
}
