use crate::sort::SortState;

/// One sortable column header. The key is the stable column identifier
/// carried in the query string, the title is what gets rendered.
#[derive(Debug, Clone)]
pub struct Header {
    pub key: String,
    pub title: String,
    pub state: SortState,
}

impl Header {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Header {
            key: key.into(),
            title: title.into(),
            state: SortState::Unsorted,
        }
    }
}

/// The ordered set of sortable headers on a page. At most one header is in a
/// non unsorted state, which the controller enforces by clearing before
/// marking.
#[derive(Debug, Clone, Default)]
pub struct HeaderSet {
    headers: Vec<Header>,
}

impl HeaderSet {
    pub fn new(headers: Vec<Header>) -> Self {
        HeaderSet { headers }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.headers.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&Header> {
        self.headers.get(idx)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn clear_states(&mut self) {
        for header in self.headers.iter_mut() {
            header.state = SortState::Unsorted;
        }
    }

    /// State of the header with the given key, unknown keys read as unsorted.
    pub fn state_of(&self, key: &str) -> SortState {
        self.headers
            .iter()
            .find(|h| h.key == key)
            .map(|h| h.state)
            .unwrap_or_default()
    }

    /// Marks the header with the given key. Unknown keys are silently
    /// ignored.
    pub fn mark(&mut self, key: &str, state: SortState) {
        if let Some(header) = self.headers.iter_mut().find(|h| h.key == key) {
            header.state = state;
        }
    }

    pub fn active(&self) -> Option<&Header> {
        self.headers.iter().find(|h| h.state != SortState::Unsorted)
    }
}
