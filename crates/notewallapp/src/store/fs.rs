use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::NoteStore;
use crate::error::{NotewallError, Result};
use crate::model::Note;

/// File-backed store: the whole collection lives in one `notes.json` map
/// under the data directory. Every mutation is a load-modify-write cycle;
/// the file is rewritten in full, so readers never observe a partial
/// mutation.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn data_file(&self) -> PathBuf {
        self.root.join("notes.json")
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            debug!("creating data directory {}", self.root.display());
            fs::create_dir_all(&self.root).map_err(NotewallError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<BTreeMap<u64, Note>> {
        let path = self.data_file();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(NotewallError::Io)?;
        let notes: BTreeMap<u64, Note> =
            serde_json::from_str(&content).map_err(NotewallError::Serialization)?;
        Ok(notes)
    }

    fn save(&self, notes: &BTreeMap<u64, Note>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(notes).map_err(NotewallError::Serialization)?;
        fs::write(self.data_file(), content).map_err(NotewallError::Io)?;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl NoteStore for FileStore {
    fn insert(&mut self, mut note: Note) -> Result<Note> {
        let mut notes = self.load()?;
        let id = notes.keys().next_back().copied().unwrap_or(0) + 1;
        note.id = id;
        for attachment in &mut note.attachments {
            attachment.note_id = id;
        }
        notes.insert(id, note.clone());
        self.save(&notes)?;
        Ok(note)
    }

    fn get(&self, id: u64) -> Result<Note> {
        self.load()?
            .remove(&id)
            .ok_or(NotewallError::NoteNotFound(id))
    }

    fn list(&self) -> Result<Vec<Note>> {
        Ok(self.load()?.into_values().collect())
    }

    fn update(&mut self, note: &Note) -> Result<()> {
        let mut notes = self.load()?;
        if !notes.contains_key(&note.id) {
            return Err(NotewallError::NoteNotFound(note.id));
        }
        notes.insert(note.id, note.clone());
        self.save(&notes)
    }

    fn remove(&mut self, id: u64) -> Result<()> {
        let mut notes = self.load()?;
        if notes.remove(&id).is_none() {
            return Err(NotewallError::NoteNotFound(id));
        }
        self.save(&notes)
    }
}
