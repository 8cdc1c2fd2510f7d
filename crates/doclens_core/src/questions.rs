/// Ordered question slots edited by the user.
///
/// Never empty: a fresh list holds one blank slot and removal refuses to
/// drop the last one. Blank slots are kept and filtered out only when a
/// request is prepared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionList {
    items: Vec<String>,
}

impl Default for QuestionList {
    fn default() -> Self {
        Self {
            items: vec![String::new()],
        }
    }
}

impl QuestionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Appends a blank slot and returns its index.
    pub fn add(&mut self) -> usize {
        self.items.push(String::new());
        self.items.len() - 1
    }

    /// Removes the slot at `index`. Returns false (and changes nothing) when
    /// only one slot is left or the index is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.items.len() <= 1 || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    /// Replaces the text of one slot. Returns false for an out-of-range index.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    /// Trimmed, non-blank questions in their original order.
    pub fn submittable(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|question| question.trim())
            .filter(|question| !question.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for QuestionList {
    /// Builds a list from the given texts; an empty input yields one blank slot.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let items: Vec<String> = iter.into_iter().map(Into::into).collect();
        if items.is_empty() {
            Self::default()
        } else {
            Self { items }
        }
    }
}
