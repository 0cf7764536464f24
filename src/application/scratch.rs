//! Scratch buffer use cases

use crate::error::Result;
use crate::infrastructure::ScratchSlot;

/// Persist the scratch buffer
pub fn save_scratch(slot: &ScratchSlot, content: &str) -> Result<()> {
    slot.save(content)
}

/// Read the scratch buffer, empty when nothing was ever saved
pub fn load_scratch(slot: &ScratchSlot) -> String {
    slot.load()
}
