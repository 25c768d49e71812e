//! In-memory session state.
//!
//! A [`Session`] owns the ordered list of ingested entries and the
//! current [`Activity`]. Insertion order is significant: it is the order
//! previews are shown in and the order rows are exported in.
//!
//! While an activity is outstanding, removal is refused so that the
//! asynchronous operation sees a stable list.

use std::fmt;

use crate::types::{ImageEntry, PreviewHandle};

/// What the session is currently busy with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    /// Nothing outstanding.
    #[default]
    Idle,
    /// A batch of files is being read and probed.
    Ingesting,
    /// A workbook is being built.
    Exporting,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Ingesting => "ingesting",
            Self::Exporting => "exporting",
        };
        f.write_str(label)
    }
}

/// Errors returned by session mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Another operation is in progress.
    #[error("session is busy {0}")]
    Busy(Activity),

    /// No entry exists at the requested position.
    #[error("no entry at index {index} (session holds {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of entries at the time of the request.
        len: usize,
    },
}

/// Ordered collection of ingested images plus the busy state.
#[derive(Debug)]
pub struct Session<P> {
    entries: Vec<ImageEntry<P>>,
    activity: Activity,
}

impl<P> Default for Session<P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            activity: Activity::Idle,
        }
    }
}

impl<P: PreviewHandle> Session<P> {
    /// Create an empty, idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[ImageEntry<P>] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the session holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The current activity.
    #[must_use]
    pub const fn activity(&self) -> Activity {
        self.activity
    }

    /// Returns `true` while ingesting or exporting.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.activity != Activity::Idle
    }

    /// Mark the start of an asynchronous operation.
    ///
    /// Passing [`Activity::Idle`] is equivalent to [`finish`](Self::finish).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Busy`] if another activity is outstanding.
    pub fn begin(&mut self, activity: Activity) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.activity = activity;
        Ok(())
    }

    /// Mark the end of the outstanding operation, whatever its outcome.
    pub fn finish(&mut self) {
        self.activity = Activity::Idle;
    }

    /// Append a fully assembled batch after all existing entries.
    pub fn commit(&mut self, batch: Vec<ImageEntry<P>>) {
        tracing::info!(added = batch.len(), total = self.entries.len() + batch.len(), "committed batch");
        self.entries.extend(batch);
    }

    /// Release the preview at `index` and remove the entry.
    ///
    /// Later entries shift down by one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Busy`] while an activity is outstanding, or
    /// [`SessionError::IndexOutOfRange`] if `index` is past the end.
    pub fn remove(&mut self, index: usize) -> Result<(), SessionError> {
        self.ensure_idle()?;
        if index >= self.entries.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let entry = self.entries.remove(index);
        tracing::debug!(index, name = entry.name(), "removed entry");
        entry.release();
        Ok(())
    }

    /// Release every preview and empty the session.
    ///
    /// Clearing an empty session succeeds and does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Busy`] while an activity is outstanding.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.ensure_idle()?;
        for entry in self.entries.drain(..) {
            entry.release();
        }
        Ok(())
    }

    fn ensure_idle(&self) -> Result<(), SessionError> {
        if self.is_busy() {
            Err(SessionError::Busy(self.activity))
        } else {
            Ok(())
        }
    }
}
