use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId};
use std::collections::HashMap;

/// `(width, height)` of every page, in page order.
pub fn page_sizes(doc: &LopdfDocument) -> Vec<(f32, f32)> {
    doc.get_pages()
        .values()
        .map(|page_id| {
            let media_box = doc
                .get_dictionary(*page_id)
                .unwrap()
                .get(b"MediaBox")
                .unwrap()
                .as_array()
                .unwrap();
            let c: Vec<f32> = media_box.iter().map(|o| o.as_float().unwrap()).collect();
            (c[2] - c[0], c[3] - c[1])
        })
        .collect()
}

/// Where a link annotation points.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkKind {
    /// 0-based page index.
    Page(usize),
    Uri(String),
    /// A link annotation without an action.
    Untargeted,
}

/// Information about a link annotation
#[derive(Debug, Clone)]
pub struct LinkAnnotation {
    /// 0-based page the annotation sits on.
    pub page_index: usize,
    pub rect: [f32; 4],
    pub kind: LinkKind,
}

fn resolve_dict<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn resolve_array<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Option<&'a Vec<Object>> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).and_then(Object::as_array).ok(),
        Object::Array(arr) => Some(arr),
        _ => None,
    }
}

/// Extract link annotations from every page, in page order.
pub fn link_annotations(doc: &LopdfDocument) -> Vec<LinkAnnotation> {
    let pages = doc.get_pages();
    let index_of: HashMap<ObjectId, usize> = pages
        .values()
        .enumerate()
        .map(|(i, id)| (*id, i))
        .collect();

    let mut links = Vec::new();
    for (page_index, page_id) in pages.values().enumerate() {
        let Ok(page) = doc.get_dictionary(*page_id) else {
            continue;
        };
        let Some(annots) = page.get(b"Annots").ok().and_then(|a| resolve_array(doc, a)) else {
            continue;
        };
        for annot in annots {
            let Some(annot) = resolve_dict(doc, annot) else {
                continue;
            };
            if annot.get(b"Subtype").and_then(Object::as_name).ok() != Some(b"Link".as_slice()) {
                continue;
            }
            let rect: Vec<f32> = annot
                .get(b"Rect")
                .and_then(Object::as_array)
                .map(|r| r.iter().filter_map(|o| o.as_float().ok()).collect())
                .unwrap_or_default();
            let rect = [rect[0], rect[1], rect[2], rect[3]];

            let kind = match annot.get(b"A").ok().and_then(|a| resolve_dict(doc, a)) {
                None => LinkKind::Untargeted,
                Some(action) => match action.get(b"S").and_then(Object::as_name).ok() {
                    Some(b"URI") => {
                        let uri = action.get(b"URI").and_then(Object::as_str).unwrap();
                        LinkKind::Uri(String::from_utf8_lossy(uri).to_string())
                    }
                    Some(b"GoTo") => {
                        let dest = action.get(b"D").and_then(Object::as_array).unwrap();
                        let target = dest[0].as_reference().unwrap();
                        LinkKind::Page(index_of[&target])
                    }
                    other => panic!("unexpected link action {:?}", other),
                },
            };
            links.push(LinkAnnotation {
                page_index,
                rect,
                kind,
            });
        }
    }
    links
}

/// Targets of every internal link, in page order.
pub fn internal_targets(doc: &LopdfDocument) -> Vec<usize> {
    link_annotations(doc)
        .into_iter()
        .filter_map(|l| match l.kind {
            LinkKind::Page(index) => Some(index),
            _ => None,
        })
        .collect()
}
