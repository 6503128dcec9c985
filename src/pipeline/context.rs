// src/pipeline/context.rs
use lootpixel_types::{PageCategory, PageSlot};
use std::collections::HashMap;

/// State owned by a single build invocation.
///
/// A fresh context is created for every build and dropped once the output is
/// written; nothing here is shared between builds.
#[derive(Debug)]
pub struct BuildContext {
    build_id: String,
    slots: Vec<PageSlot>,
    by_name: HashMap<String, usize>,
}

impl BuildContext {
    pub fn new(product_id: u32) -> Self {
        Self::with_build_id(format!("p{}-{:016x}", product_id, rand::random::<u64>()))
    }

    pub fn with_build_id(build_id: impl Into<String>) -> Self {
        Self {
            build_id: build_id.into(),
            slots: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Identifier that scopes this build's intermediate files.
    pub fn build_id(&self) -> &str {
        &self.build_id
    }

    /// Registers the next emitted page and returns its 0-based index.
    pub fn push_slot(&mut self, name: impl Into<String>, category: PageCategory) -> usize {
        let name = name.into();
        let index = self.slots.len();
        self.by_name.insert(name.clone(), index);
        self.slots.push(PageSlot {
            name,
            category,
            index,
        });
        index
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn slots(&self) -> &[PageSlot] {
        &self.slots
    }

    pub fn page_count(&self) -> usize {
        self.slots.len()
    }

    pub fn into_slots(self) -> Vec<PageSlot> {
        self.slots
    }
}
