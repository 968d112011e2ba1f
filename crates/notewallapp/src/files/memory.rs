use std::collections::HashMap;

use super::BlobStore;
use crate::error::{NotewallError, Result};

/// Map-backed blob store for tests.
#[derive(Debug, Default)]
pub struct MemBlobs {
    blobs: HashMap<String, Vec<u8>>,
}

impl MemBlobs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl BlobStore for MemBlobs {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.blobs.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        self.blobs
            .get(name)
            .cloned()
            .ok_or_else(|| NotewallError::Store(format!("no blob named {}", name)))
    }

    fn exists(&self, name: &str) -> bool {
        self.blobs.contains_key(name)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        self.blobs.remove(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_roundtrip() {
        let mut blobs = MemBlobs::new();
        blobs.write("a.pdf", b"content").unwrap();
        assert!(blobs.exists("a.pdf"));
        assert_eq!(blobs.read("a.pdf").unwrap(), b"content");
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut blobs = MemBlobs::new();
        blobs.write("a.pdf", b"x").unwrap();
        blobs.delete("a.pdf").unwrap();
        blobs.delete("a.pdf").unwrap();
        assert!(!blobs.exists("a.pdf"));
    }

    #[test]
    fn test_read_missing_fails() {
        let blobs = MemBlobs::new();
        assert!(blobs.read("ghost.pdf").is_err());
    }
}
