use crate::types::ItemDesc;

/// A participating item, in arrangement order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatalogEntry {
    pub index: usize,
    pub source_index: usize,
    pub extent: f32,
}

/// The ordered, filtered list of items taking part in a layout pass.
///
/// Rebuilt from scratch on every pass; the backing buffer is reused.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    entries: Vec<CatalogEntry>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps active, non-ignored items and assigns them consecutive indexes, optionally in
    /// reverse source order.
    pub fn rebuild(&mut self, source: impl IntoIterator<Item = ItemDesc>, reverse: bool) {
        self.entries.clear();
        for (source_index, item) in source.into_iter().enumerate() {
            if !item.participates() {
                continue;
            }
            self.entries.push(CatalogEntry {
                index: 0,
                source_index,
                extent: item.extent,
            });
        }
        if reverse {
            self.entries.reverse();
        }
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.index = index;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}
