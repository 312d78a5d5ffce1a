//! Raw file intake contracts shared by browser adapters and the file registry.
//!
//! A [`RawFile`] is whatever the host hands over when the user drops or picks a file. The registry
//! only reads its metadata and asks it once for a [`ContentRef`], which it then owns until the
//! file is removed.

use std::{cell::Cell, fmt, rc::Rc};

/// Host-provided handle for one user-supplied file.
pub trait RawFile: fmt::Debug {
    /// Original file name.
    fn name(&self) -> String;

    /// Byte count reported by the host.
    fn size(&self) -> u64;

    /// MIME type reported by the host (may be empty when the host cannot tell).
    fn mime_type(&self) -> String;

    /// Registers the file content with the host and returns an owned reference to it.
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot expose the content (unreadable handle, missing
    /// browser API, revoked permission).
    fn open_content(&self) -> Result<ContentRef, String>;
}

type ReleaseHook = Box<dyn FnOnce(&str)>;

/// Owned reference to file bytes held by the host.
///
/// Dropping the reference runs its release hook exactly once. In the browser this revokes the
/// object URL backing `href`.
pub struct ContentRef {
    href: String,
    release: Option<ReleaseHook>,
}

impl ContentRef {
    /// Builds a content reference that runs `release` with its href when dropped.
    pub fn new(href: impl Into<String>, release: impl FnOnce(&str) + 'static) -> Self {
        Self {
            href: href.into(),
            release: Some(Box::new(release)),
        }
    }

    /// Builds a content reference with nothing to release.
    pub fn detached(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            release: None,
        }
    }

    /// URL usable for previews and downloads while the reference is alive.
    pub fn href(&self) -> &str {
        &self.href
    }
}

impl fmt::Debug for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentRef")
            .field("href", &self.href)
            .field("releases", &self.release.is_some())
            .finish()
    }
}

impl Drop for ContentRef {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(&self.href);
        }
    }
}

#[derive(Debug, Clone)]
/// In-memory raw file for non-browser targets and tests.
pub struct MemoryRawFile {
    name: String,
    mime_type: String,
    bytes: Rc<[u8]>,
    unreadable: bool,
    releases: Option<Rc<Cell<usize>>>,
}

impl MemoryRawFile {
    /// Creates a readable in-memory file.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
            unreadable: false,
            releases: None,
        }
    }

    /// Creates a file of `size` zero bytes.
    pub fn zeroed(name: impl Into<String>, mime_type: impl Into<String>, size: usize) -> Self {
        Self::new(name, mime_type, vec![0; size])
    }

    /// Creates a file whose content can never be opened.
    pub fn unreadable(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            unreadable: true,
            ..Self::new(name, mime_type, Vec::new())
        }
    }

    /// Counts content releases into `counter` (incremented once per dropped [`ContentRef`]).
    pub fn with_release_probe(mut self, counter: Rc<Cell<usize>>) -> Self {
        self.releases = Some(counter);
        self
    }
}

impl RawFile for MemoryRawFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn open_content(&self) -> Result<ContentRef, String> {
        if self.unreadable {
            return Err(format!("content of `{}` is not readable", self.name));
        }
        let href = format!("memory://{}", self.name);
        match self.releases.clone() {
            Some(counter) => Ok(ContentRef::new(href, move |_| {
                counter.set(counter.get() + 1);
            })),
            None => Ok(ContentRef::detached(href)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_content_ref_runs_release_once_with_href() {
        let released = Rc::new(std::cell::RefCell::new(Vec::<String>::new()));
        let sink = released.clone();
        let content = ContentRef::new("blob:abc", move |href| {
            sink.borrow_mut().push(href.to_string());
        });
        assert_eq!(content.href(), "blob:abc");
        drop(content);
        assert_eq!(released.borrow().as_slice(), ["blob:abc".to_string()]);
    }

    #[test]
    fn memory_file_reports_metadata_and_counts_releases() {
        let counter = Rc::new(Cell::new(0));
        let file = MemoryRawFile::new("notes.txt", "text/plain", b"hello".to_vec())
            .with_release_probe(counter.clone());
        assert_eq!(file.size(), 5);
        assert_eq!(file.mime_type(), "text/plain");

        let content = file.open_content().expect("open");
        assert_eq!(content.href(), "memory://notes.txt");
        assert_eq!(counter.get(), 0);
        drop(content);
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn unreadable_memory_file_fails_to_open() {
        let file = MemoryRawFile::unreadable("broken.bin", "");
        let err = file.open_content().expect_err("must fail");
        assert!(err.contains("broken.bin"));
    }
}
