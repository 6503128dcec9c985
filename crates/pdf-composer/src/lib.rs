//! PDF composition utilities for assembling planners.
//!
//! This crate provides low-level PDF manipulation using lopdf:
//! - Deep object copying with cycle detection
//! - Document assembly (appending single-page documents in order)
//! - Link annotations (internal GoTo and external URI)
//! - Link extraction from uploaded PDF templates

mod error;
mod extract;
mod links;

pub use error::ComposerError;
pub use extract::{ExtractedLink, extract_links};
pub use links::{
    LinkTarget, add_link_annotation, find_named_annotation, page_ids, page_size, set_link_target,
};

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use std::collections::HashMap;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// A helper struct to manage the state of copying objects between documents.
struct ObjectCopier<'a> {
    source_doc: &'a Document,
    target_doc: &'a mut Document,
    id_map: HashMap<ObjectId, ObjectId>,
}

impl<'a> ObjectCopier<'a> {
    fn new(source_doc: &'a Document, target_doc: &'a mut Document) -> Self {
        Self { source_doc, target_doc, id_map: HashMap::new() }
    }

    /// Deep copies an object from the source document to the target document,
    /// copying each referenced object once.
    fn copy_object(&mut self, source_id: ObjectId) -> Result<ObjectId, lopdf::Error> {
        if let Some(target_id) = self.id_map.get(&source_id) {
            return Ok(*target_id);
        }

        // Reserve the new id before recursing so reference cycles terminate.
        let new_id = self.target_doc.add_object(Object::Null);
        self.id_map.insert(source_id, new_id);

        let obj = self.source_doc.get_object(source_id)?.clone();
        let new_obj = self.remap_references(obj)?;
        self.replace(new_id, new_obj)?;

        Ok(new_id)
    }

    /// Copies a page without its `/Parent` link, folding inherited attributes
    /// into the page so it stands alone in the target's page tree.
    fn copy_page(
        &mut self,
        source_id: ObjectId,
        target_parent: ObjectId,
    ) -> Result<ObjectId, lopdf::Error> {
        if let Some(target_id) = self.id_map.get(&source_id) {
            return Ok(*target_id);
        }

        let new_id = self.target_doc.add_object(Object::Null);
        self.id_map.insert(source_id, new_id);

        let mut page = self.source_doc.get_dictionary(source_id)?.clone();
        for key in INHERITABLE {
            if !page.has(key)
                && let Some(value) = self.inherited(&page, key)
            {
                page.set(key, value);
            }
        }
        page.remove(b"Parent");

        let mut new_page = match self.remap_references(Object::Dictionary(page))? {
            Object::Dictionary(dict) => dict,
            _ => Dictionary::new(),
        };
        new_page.set("Parent", Object::Reference(target_parent));
        self.replace(new_id, Object::Dictionary(new_page))?;

        Ok(new_id)
    }

    fn inherited(&self, page: &Dictionary, key: &[u8]) -> Option<Object> {
        let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
        while let Some(parent_id) = parent {
            let node = self.source_doc.get_dictionary(parent_id).ok()?;
            if let Ok(value) = node.get(key) {
                return Some(value.clone());
            }
            parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        }
        None
    }

    fn replace(&mut self, id: ObjectId, obj: Object) -> Result<(), lopdf::Error> {
        match self.target_doc.objects.get_mut(&id) {
            Some(target_obj) => {
                *target_obj = obj;
                Ok(())
            }
            None => Err(lopdf::Error::ObjectNotFound(id)),
        }
    }

    /// Traverses an object and replaces any `Object::Reference` with a new ID
    /// from the target document by recursively calling `copy_object`.
    fn remap_references(&mut self, obj: Object) -> Result<Object, lopdf::Error> {
        match obj {
            Object::Reference(id) => {
                let new_id = self.copy_object(id)?;
                Ok(Object::Reference(new_id))
            }
            Object::Array(arr) => {
                let new_arr = arr
                    .into_iter()
                    .map(|o| self.remap_references(o))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Object::Array(new_arr))
            }
            Object::Dictionary(mut dict) => {
                for (_, value) in dict.iter_mut() {
                    *value = self.remap_references(value.clone())?;
                }
                Ok(Object::Dictionary(dict))
            }
            Object::Stream(mut stream) => {
                for (_, value) in stream.dict.iter_mut() {
                    *value = self.remap_references(value.clone())?;
                }
                Ok(Object::Stream(stream))
            }
            _ => Ok(obj),
        }
    }
}

/// Creates a document with an empty page tree, ready to receive pages.
pub fn empty_document() -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => Vec::<Object>::new(),
        "Count" => 0,
    });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Appends all pages of `source` to the end of `target`, in page order.
///
/// Pages and everything they reference (content streams, images, annotations)
/// are copied under fresh object ids, so page geometry is preserved exactly.
pub fn merge_documents(target: &mut Document, source: Document) -> Result<(), ComposerError> {
    let source_pages = source.get_pages();
    if source_pages.is_empty() {
        return Ok(());
    }

    let root_id = target.trailer.get(b"Root")?.as_reference()?;
    let pages_id = target.get_dictionary(root_id)?.get(b"Pages")?.as_reference()?;

    // `get_pages` is keyed by page number, so iteration is already in order.
    let mut copier = ObjectCopier::new(&source, target);
    let mut new_page_refs = Vec::with_capacity(source_pages.len());
    for page_id in source_pages.values() {
        let new_page_id = copier.copy_page(*page_id, pages_id)?;
        new_page_refs.push(Object::Reference(new_page_id));
    }

    let pages_dict = target.get_object_mut(pages_id)?.as_dict_mut()?;
    let mut kids = pages_dict.get(b"Kids")?.as_array()?.clone();
    let original_count = pages_dict.get(b"Count")?.as_i64()?;
    let added = new_page_refs.len() as i64;
    kids.extend(new_page_refs);

    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", original_count + added);

    Ok(())
}

/// Concatenates documents into one, preserving input order.
pub fn assemble<I>(documents: I) -> Result<Document, ComposerError>
where
    I: IntoIterator<Item = Document>,
{
    let mut merged = empty_document();
    for doc in documents {
        merge_documents(&mut merged, doc)?;
    }
    log::debug!("[COMPOSER] Assembled {} pages", merged.get_pages().len());
    Ok(merged)
}
