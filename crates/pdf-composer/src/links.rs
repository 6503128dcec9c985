//! Link annotations on assembled documents.
//!
//! Rectangles passed in here are in top-left-origin page space; they are
//! flipped against the page's MediaBox height when written.

use crate::error::ComposerError;
use lootpixel_types::Rect;
use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat, dictionary};

/// Where a link annotation sends the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// 0-based page index within the same document.
    Page(usize),
    Uri(String),
}

/// Page object ids in page order.
pub fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().into_values().collect()
}

/// `(width, height)` of a page from its MediaBox.
pub fn page_size(doc: &Document, page_id: ObjectId) -> Result<(f32, f32), ComposerError> {
    let media_box = doc.get_dictionary(page_id)?.get(b"MediaBox")?.as_array()?;
    if media_box.len() < 4 {
        return Err(ComposerError::Other(format!(
            "Page {:?} has a malformed MediaBox",
            page_id
        )));
    }
    let coords = media_box
        .iter()
        .take(4)
        .map(Object::as_float)
        .collect::<Result<Vec<f32>, _>>()?;
    Ok((coords[2] - coords[0], coords[3] - coords[1]))
}

fn action_for(
    target: &LinkTarget,
    page_ids: &[ObjectId],
) -> Result<Dictionary, ComposerError> {
    match target {
        LinkTarget::Page(index) => {
            let target_page = page_ids.get(*index).ok_or(ComposerError::PageOutOfRange {
                index: *index,
                page_count: page_ids.len(),
            })?;
            let dest = vec![Object::Reference(*target_page), "Fit".into()];
            Ok(dictionary! { "Type" => "Action", "S" => "GoTo", "D" => dest })
        }
        LinkTarget::Uri(uri) => Ok(dictionary! {
            "Type" => "Action",
            "S" => "URI",
            "URI" => Object::String(uri.as_bytes().to_vec(), StringFormat::Literal),
        }),
    }
}

/// Adds a link annotation to `page_index` covering `rect`.
///
/// Only the page's `/Annots` array changes; content streams and page order
/// are untouched.
pub fn add_link_annotation(
    doc: &mut Document,
    page_index: usize,
    rect: Rect,
    target: &LinkTarget,
) -> Result<ObjectId, ComposerError> {
    let page_ids = page_ids(doc);
    let page_id = *page_ids.get(page_index).ok_or(ComposerError::PageOutOfRange {
        index: page_index,
        page_count: page_ids.len(),
    })?;
    let (_, page_height) = page_size(doc, page_id)?;

    let action_id = doc.add_object(action_for(target, &page_ids)?);
    let [llx, lly, urx, ury] = rect.to_pdf_rect(page_height);
    let annot_id = doc.add_object(dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => vec![llx.into(), lly.into(), urx.into(), ury.into()],
        "Border" => vec![0.into(), 0.into(), 0.into()],
        "A" => action_id,
    });
    push_annotation(doc, page_id, annot_id)?;
    Ok(annot_id)
}

/// Finds an untargeted annotation on `page_index` whose `name_key` entry
/// equals `name`.
pub fn find_named_annotation(
    doc: &Document,
    page_index: usize,
    name_key: &[u8],
    name: &str,
) -> Option<ObjectId> {
    let page_id = *page_ids(doc).get(page_index)?;
    let annots = annotation_refs(doc, page_id);
    annots.into_iter().find(|annot_id| {
        doc.get_dictionary(*annot_id)
            .map(|annot| {
                !annot.has(b"A")
                    && !annot.has(b"Dest")
                    && annot.get(name_key).and_then(Object::as_str).ok() == Some(name.as_bytes())
            })
            .unwrap_or(false)
    })
}

/// Points an existing link annotation at `target`.
pub fn set_link_target(
    doc: &mut Document,
    annot_id: ObjectId,
    target: &LinkTarget,
) -> Result<(), ComposerError> {
    let page_ids = page_ids(doc);
    let action_id = doc.add_object(action_for(target, &page_ids)?);
    let annot = doc.get_object_mut(annot_id)?.as_dict_mut()?;
    annot.set("A", action_id);
    Ok(())
}

fn annotation_refs(doc: &Document, page_id: ObjectId) -> Vec<ObjectId> {
    let Ok(page) = doc.get_dictionary(page_id) else {
        return Vec::new();
    };
    let annots = match page.get(b"Annots") {
        Ok(Object::Reference(id)) => doc.get_object(*id).and_then(Object::as_array).ok(),
        Ok(obj) => obj.as_array().ok(),
        Err(_) => None,
    };
    annots
        .map(|arr| arr.iter().filter_map(|o| o.as_reference().ok()).collect())
        .unwrap_or_default()
}

fn push_annotation(
    doc: &mut Document,
    page_id: ObjectId,
    annot_id: ObjectId,
) -> Result<(), ComposerError> {
    // An indirect /Annots array is updated where it lives.
    let indirect = match doc.get_dictionary(page_id)?.get(b"Annots") {
        Ok(Object::Reference(id)) => Some(*id),
        _ => None,
    };
    if let Some(array_id) = indirect {
        doc.get_object_mut(array_id)?
            .as_array_mut()?
            .push(Object::Reference(annot_id));
        return Ok(());
    }

    let page = doc.get_object_mut(page_id)?.as_dict_mut()?;
    let mut annots = page
        .get(b"Annots")
        .and_then(Object::as_array)
        .cloned()
        .unwrap_or_default();
    annots.push(Object::Reference(annot_id));
    page.set("Annots", Object::Array(annots));
    Ok(())
}
