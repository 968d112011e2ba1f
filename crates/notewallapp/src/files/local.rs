use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::BlobStore;
use crate::error::{NotewallError, Result};

/// Filesystem blob store rooted at the upload directory, created on first
/// write.
pub struct LocalBlobs {
    root: PathBuf,
}

impl LocalBlobs {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl BlobStore for LocalBlobs {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        if !self.root.exists() {
            debug!("creating upload directory {}", self.root.display());
            fs::create_dir_all(&self.root).map_err(NotewallError::Io)?;
        }
        fs::write(self.path_for(name), bytes).map_err(NotewallError::Io)
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        fs::read(self.path_for(name)).map_err(NotewallError::Io)
    }

    fn exists(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let path = self.path_for(name);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(path).map_err(NotewallError::Io)
    }
}
