//! Single-slot scratch buffer persistence

use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// File holding the scratch buffer text
const SCRATCH_FILE: &str = "content.txt";

/// One unnamed plain-text slot next to the page collection.
///
/// Saving propagates failures so the caller knows the text did not land on
/// disk. Loading never fails: a missing or unreadable file reads as the
/// empty string, the same blank slate a first launch sees.
#[derive(Debug, Clone)]
pub struct ScratchSlot {
    data_dir: PathBuf,
}

impl ScratchSlot {
    /// Create a slot rooted at the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        ScratchSlot { data_dir }
    }

    /// Path of the backing file
    pub fn scratch_path(&self) -> PathBuf {
        self.data_dir.join(SCRATCH_FILE)
    }

    /// Overwrite the slot with the given text, creating the data directory
    /// first if needed
    pub fn save(&self, content: &str) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        fs::write(self.scratch_path(), content)?;
        Ok(())
    }

    /// Read the slot, treating any failure as empty
    pub fn load(&self) -> String {
        fs::read_to_string(self.scratch_path()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NonepadError;
    use tempfile::TempDir;

    #[test]
    fn test_load_without_backing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let slot = ScratchSlot::new(temp.path().to_path_buf());

        assert_eq!(slot.load(), "");
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let slot = ScratchSlot::new(temp.path().to_path_buf());

        slot.save("quick thought\nsecond line").unwrap();

        assert_eq!(slot.load(), "quick thought\nsecond line");
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let temp = TempDir::new().unwrap();
        let slot = ScratchSlot::new(temp.path().to_path_buf());

        slot.save("first draft").unwrap();
        slot.save("new").unwrap();

        assert_eq!(slot.load(), "new");
    }

    #[test]
    fn test_save_empty_string_clears_the_slot() {
        let temp = TempDir::new().unwrap();
        let slot = ScratchSlot::new(temp.path().to_path_buf());

        slot.save("something").unwrap();
        slot.save("").unwrap();

        assert_eq!(slot.load(), "");
        assert!(temp.path().join("content.txt").exists());
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let slot = ScratchSlot::new(temp.path().join("nested").join("dir"));

        slot.save("deep").unwrap();

        assert_eq!(slot.load(), "deep");
    }

    #[test]
    fn test_load_swallows_read_failures() {
        let temp = TempDir::new().unwrap();
        let slot = ScratchSlot::new(temp.path().to_path_buf());

        // A directory at the file path makes the read itself fail.
        fs::create_dir(temp.path().join("content.txt")).unwrap();

        assert_eq!(slot.load(), "");
    }

    #[test]
    fn test_save_surfaces_write_failures() {
        let temp = TempDir::new().unwrap();

        // A file where the data directory should be makes create_dir_all fail.
        let blocked = temp.path().join("blocked");
        fs::write(&blocked, "in the way").unwrap();
        let slot = ScratchSlot::new(blocked);

        let result = slot.save("will not land");
        assert!(matches!(result, Err(NonepadError::Io(_))));
    }
}
