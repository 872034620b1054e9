use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result, anyhow};

use crate::model::{SnippetError, SnippetList};

/// Where the serialized snippet list lives.
///
/// `read` returns `Ok(None)` when nothing has been persisted yet.
pub trait SnippetBackend {
    fn describe(&self) -> String;
    fn read(&self) -> Result<Option<Vec<u8>>>;
    fn write(&self, bytes: &[u8]) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnippetBackend for FileBackend {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("read {}", self.path.display())),
        }
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        write_atomic(&self.path, bytes)
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    bytes: Option<Vec<u8>>,
    fail_writes: bool,
    writes: usize,
}

/// In-memory backend. Clones share the same buffer, so a test can keep a
/// handle and inspect what the store persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        let backend = Self::default();
        backend.state.borrow_mut().bytes = Some(bytes.into());
        backend
    }

    pub fn contents(&self) -> Option<Vec<u8>> {
        self.state.borrow().bytes.clone()
    }

    pub fn contents_str(&self) -> Option<String> {
        self.contents().map(|b| String::from_utf8_lossy(&b).into_owned())
    }

    pub fn write_count(&self) -> usize {
        self.state.borrow().writes
    }

    /// Makes subsequent writes fail, leaving the stored bytes untouched.
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl SnippetBackend for MemoryBackend {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    fn read(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.contents())
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        let mut st = self.state.borrow_mut();
        if st.fail_writes {
            return Err(anyhow!("simulated write failure"));
        }
        st.bytes = Some(bytes.to_vec());
        st.writes += 1;
        Ok(())
    }
}

/// Canonical snippet list plus the backend it is persisted to.
///
/// Every mutation rewrites the whole list. A failed write is logged and
/// otherwise ignored; the in-memory list stays authoritative.
pub struct SnippetStore {
    list: SnippetList,
    backend: Box<dyn SnippetBackend>,
}

impl SnippetStore {
    pub fn open(backend: impl SnippetBackend + 'static) -> Self {
        let list = load_list(&backend);
        Self {
            list,
            backend: Box::new(backend),
        }
    }

    pub fn list(&self) -> &SnippetList {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.list.get(index)
    }

    pub fn location(&self) -> String {
        self.backend.describe()
    }

    pub fn add(&mut self, value: impl Into<String>) -> usize {
        let idx = self.list.append(value);
        self.persist();
        idx
    }

    pub fn edit(&mut self, index: usize, value: impl Into<String>) -> Result<(), SnippetError> {
        self.list.update(index, value)?;
        self.persist();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<String, SnippetError> {
        let removed = self.list.remove(index)?;
        self.persist();
        Ok(removed)
    }

    /// `add` that reports the write instead of logging it.
    pub fn try_add(&mut self, value: impl Into<String>) -> Result<usize> {
        let idx = self.list.append(value);
        self.save()?;
        Ok(idx)
    }

    pub fn try_edit(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.list.update(index, value)?;
        self.save()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<String> {
        let removed = self.list.remove(index)?;
        self.save()?;
        Ok(removed)
    }

    pub fn save(&self) -> Result<()> {
        save_list(self.backend.as_ref(), &self.list)
    }

    fn persist(&self) {
        if let Err(err) = self.save() {
            log::warn!(
                "persist snippets to {} failed: {:#}",
                self.backend.describe(),
                err
            );
        }
    }
}

/// Reads the persisted list; any failure yields an empty list.
pub fn load_list(backend: &dyn SnippetBackend) -> SnippetList {
    let bytes = match backend.read() {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            log::debug!("no snippet file at {}; starting empty", backend.describe());
            return SnippetList::default();
        }
        Err(err) => {
            log::warn!("{:#}; starting empty", err);
            return SnippetList::default();
        }
    };

    match serde_json::from_slice::<SnippetList>(&bytes) {
        Ok(list) => list,
        Err(err) => {
            log::warn!(
                "parse snippet file {}: {}; starting empty",
                backend.describe(),
                err
            );
            SnippetList::default()
        }
    }
}

pub fn save_list(backend: &dyn SnippetBackend, list: &SnippetList) -> Result<()> {
    let bytes = serde_json::to_vec(list).context("serialize snippets")?;
    backend
        .write(&bytes)
        .with_context(|| format!("write {}", backend.describe()))
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err)
            .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
