//! Reorder Gesture
//!
//! Turns a drag-and-drop result into a single validated move.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the drag layer reports on drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragResult {
    pub source_index: usize,
    /// None when the item was released outside any drop target
    pub destination_index: Option<usize>,
}

impl DragResult {
    pub fn new(source_index: usize, destination_index: Option<usize>) -> Self {
        Self {
            source_index,
            destination_index,
        }
    }
}

/// A validated move within a list of known length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

impl Reorder {
    /// Dropped back where it started
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Gestures that never reach the store. Not shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GestureError {
    #[error("dropped outside a drop target")]
    NoDestination,
    #[error("index {index} out of range for a list of {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Validate a drag result against the current list length
pub fn resolve(drag: DragResult, len: usize) -> Result<Reorder, GestureError> {
    let to = drag.destination_index.ok_or(GestureError::NoDestination)?;
    for index in [drag.source_index, to] {
        if index >= len {
            return Err(GestureError::OutOfRange { index, len });
        }
    }
    Ok(Reorder {
        from: drag.source_index,
        to,
    })
}
