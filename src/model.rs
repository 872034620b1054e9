use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnippetError {
    #[error("snippet index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered list of snippets, as persisted: `{"strings": [...]}`.
///
/// A snippet has no identity beyond its position. Duplicates and empty
/// strings are valid entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetList {
    pub strings: Vec<String>,
}

impl SnippetList {
    pub fn new(strings: Vec<String>) -> Self {
        Self { strings }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(|s| s.as_str())
    }

    /// Adds `value` at the end and returns its index.
    pub fn append(&mut self, value: impl Into<String>) -> usize {
        self.strings.push(value.into());
        self.strings.len() - 1
    }

    /// Replaces the element at `index`, returning the previous value.
    pub fn update(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<String, SnippetError> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.strings[index], value.into()))
    }

    /// Removes the element at `index`; later elements shift left by one.
    pub fn remove(&mut self, index: usize) -> Result<String, SnippetError> {
        self.check_index(index)?;
        Ok(self.strings.remove(index))
    }

    fn check_index(&self, index: usize) -> Result<(), SnippetError> {
        if index >= self.strings.len() {
            return Err(SnippetError::IndexOutOfRange {
                index,
                len: self.strings.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<String>> for SnippetList {
    fn from(strings: Vec<String>) -> Self {
        Self { strings }
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
