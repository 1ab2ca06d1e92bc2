//! File trees the loader reads `.env` files from.
//!
//! Responsibilities:
//! - Define the `FileTree` trait used to open files relative to a base directory.
//! - Provide the real filesystem (`OsFileTree`) and an in-memory tree (`MemoryFileTree`).
//!
//! Invariants:
//! - A missing file is reported as `io::ErrorKind::NotFound` by every implementation.
//! - `MemoryFileTree` keys are compared with `.` components removed, so `./conf/a.env`
//!   and `conf/a.env` name the same file, as they do on disk.
//! - Returned readers own their handle; dropping the reader closes it.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Component, Path, PathBuf};

/// A tree of files that can be opened for reading.
pub trait FileTree {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>>;

    /// Whether `path` can be opened.
    fn exists(&self, path: &Path) -> bool {
        self.open(path).is_ok()
    }
}

impl<T: FileTree + ?Sized> FileTree for &T {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

impl<T: FileTree + ?Sized> FileTree for Box<T> {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// The host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileTree;

impl FileTree for OsFileTree {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(path)?))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// An in-memory file tree keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileTree {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryFileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, builder style.
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Add or replace a file.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.insert(normalize(&path.into()), contents.into());
    }

    /// Remove a file, returning its contents.
    pub fn remove(&mut self, path: &Path) -> Option<Vec<u8>> {
        self.files.remove(&normalize(path))
    }
}

/// Lexically drop `.` components. `..` is kept as is.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

impl FileTree for MemoryFileTree {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        match self.files.get(&normalize(path)) {
            Some(contents) => Ok(Box::new(Cursor::new(contents.as_slice()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(&normalize(path))
    }
}
