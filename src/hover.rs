use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoverError {
    #[error("project index {index} out of range for {count} projects")]
    OutOfRange { index: usize, count: usize },
}

/// Which project card, if any, the pointer is over.
///
/// Starts out with nothing hovered. `index()` is always a valid index into the
/// project list it was entered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoveredProject {
    index: Option<usize>,
}

impl HoveredProject {
    pub fn enter(&mut self, index: usize, project_count: usize) -> Result<(), HoverError> {
        if index >= project_count {
            return Err(HoverError::OutOfRange {
                index,
                count: project_count,
            });
        }
        self.index = Some(index);
        Ok(())
    }

    pub fn leave(&mut self) {
        self.index = None;
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_active(&self) -> bool {
        self.index.is_some()
    }

    /// Cards share a single emphasis value, so every card is emphasized while
    /// any card is hovered.
    pub fn emphasizes(&self, _card: usize) -> bool {
        self.is_active()
    }
}
