use crate::domain::ports::Storage;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub(crate) struct MockStorage {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    read_error: Arc<Mutex<Option<io::ErrorKind>>>,
    write_error: Arc<Mutex<Option<io::ErrorKind>>>,
}

impl MockStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn put(&self, path: &str, content: &str) {
        let mut files = self.files.lock().unwrap();
        files.insert(PathBuf::from(path), content.as_bytes().to_vec());
    }

    pub(crate) fn get(&self, path: &str) -> Option<String> {
        let files = self.files.lock().unwrap();
        files
            .get(Path::new(path))
            .map(|data| String::from_utf8(data.clone()).unwrap())
    }

    pub(crate) fn fail_reads_with(&self, kind: io::ErrorKind) {
        *self.read_error.lock().unwrap() = Some(kind);
    }

    pub(crate) fn fail_writes_with(&self, kind: io::ErrorKind) {
        *self.write_error.lock().unwrap() = Some(kind);
    }
}

impl Storage for MockStorage {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        if let Some(kind) = *self.read_error.lock().unwrap() {
            return Err(io::Error::new(kind, "injected read failure"));
        }
        let files = self.files.lock().unwrap();
        files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        if let Some(kind) = *self.write_error.lock().unwrap() {
            return Err(io::Error::new(kind, "injected write failure"));
        }
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
