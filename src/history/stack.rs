use crate::surface::{RasterSurface, Result};

/// Ordered snapshots with a cursor. Entry 0 is the pristine state and is
/// never evicted; `index` always points at a valid entry.
#[derive(Debug, Clone)]
pub struct HistoryStack<S> {
    entries: Vec<S>,
    index: usize,
}

impl<S: Clone> HistoryStack<S> {
    pub fn new(initial: S) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &S {
        &self.entries[self.index]
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Drops any redo entries, then appends `snapshot` as the new current entry.
    pub fn commit(&mut self, snapshot: S) {
        self.entries.truncate(self.index + 1);
        self.entries.push(snapshot);
        self.index = self.entries.len() - 1;
        log::debug!("history commit: {} entries", self.entries.len());
    }

    pub fn undo(&mut self) -> Option<&S> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        log::debug!("history undo: at {} of {}", self.index, self.entries.len());
        Some(&self.entries[self.index])
    }

    pub fn redo(&mut self) -> Option<&S> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        log::debug!("history redo: at {} of {}", self.index, self.entries.len());
        Some(&self.entries[self.index])
    }

    /// Collapses to the pristine entry.
    pub fn reset(&mut self) -> &S {
        self.entries.truncate(1);
        self.index = 0;
        &self.entries[0]
    }
}

impl<S: Clone> HistoryStack<S> {
    pub fn commit_from<R>(&mut self, surface: &R)
    where
        R: RasterSurface<Snapshot = S>,
    {
        self.commit(surface.snapshot());
    }

    /// Steps back and writes the entry into `surface`. Returns whether anything changed.
    pub fn undo_into<R>(&mut self, surface: &mut R) -> Result<bool>
    where
        R: RasterSurface<Snapshot = S>,
    {
        match self.undo() {
            Some(snapshot) => {
                surface.restore(snapshot)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn redo_into<R>(&mut self, surface: &mut R) -> Result<bool>
    where
        R: RasterSurface<Snapshot = S>,
    {
        match self.redo() {
            Some(snapshot) => {
                surface.restore(snapshot)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn reset_into<R>(&mut self, surface: &mut R) -> Result<()>
    where
        R: RasterSurface<Snapshot = S>,
    {
        let pristine = self.reset();
        surface.restore(pristine)
    }
}
