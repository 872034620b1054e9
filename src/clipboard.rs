//! Write-only access to the system clipboard.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, anyhow};

use crate::model::SnippetError;
use crate::store::SnippetStore;

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;

    /// Like `set_text`, but keeps serving the text after the caller is gone.
    /// Used by short-lived processes; may block until another program takes
    /// the selection.
    fn set_text_and_wait(&mut self, text: &str) -> Result<()> {
        self.set_text(text)
    }
}

/// Plain-text writes to the general system clipboard via arboard.
///
/// The platform handle is opened lazily so that starting the TUI does not
/// fail on machines without a clipboard.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let cb = arboard::Clipboard::new()
                .map_err(|e| anyhow!("clipboard init failed: {}", e))?;
            self.inner = Some(cb);
        }
        self.inner.as_mut().ok_or_else(|| anyhow!("clipboard unavailable"))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let cb = self.handle()?;
        cb.set_text(text).map_err(|e| anyhow!("clipboard set failed: {}", e))
    }

    // X11 and Wayland drop the selection with its owner process.
    #[cfg(target_os = "linux")]
    fn set_text_and_wait(&mut self, text: &str) -> Result<()> {
        use arboard::SetExtLinux;

        let cb = self.handle()?;
        cb.set()
            .wait()
            .text(text)
            .map_err(|e| anyhow!("clipboard set failed: {}", e))
    }
}

/// Copies the row at `index`, holding the clipboard until it is taken over.
pub fn copy_snippet(
    sink: &mut dyn ClipboardSink,
    store: &SnippetStore,
    index: usize,
) -> Result<()> {
    let text = store.get(index).ok_or(SnippetError::IndexOutOfRange {
        index,
        len: store.len(),
    })?;
    sink.set_text_and_wait(text)
}

/// Keeps every copied string in memory. Clones share the same record.
#[derive(Clone, Debug, Default)]
pub struct RecordingClipboard {
    copied: Rc<RefCell<Vec<String>>>,
    held: Rc<RefCell<Vec<String>>>,
}

impl RecordingClipboard {
    pub fn copied(&self) -> Vec<String> {
        self.copied.borrow().clone()
    }

    /// Texts written through `set_text_and_wait`.
    pub fn held(&self) -> Vec<String> {
        self.held.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.copied.borrow().last().cloned()
    }
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }

    fn set_text_and_wait(&mut self, text: &str) -> Result<()> {
        self.held.borrow_mut().push(text.to_string());
        self.set_text(text)
    }
}

#[cfg(test)]
#[path = "tests/clipboard_tests.rs"]
mod tests;
