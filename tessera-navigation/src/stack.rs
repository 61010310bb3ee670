//! Ordered, never-empty stack of screen identifiers.
//!
//! # Responsibilities
//!
//! - Keep the navigation history in push order, root at index 0.
//! - Refuse to drop the root: `pop` on a single-entry stack is a no-op.
//! - Apply [`NavigationEvent`]s sent by views and platform hosts.
//! - Bump a monotonic `version` on every effective mutation so hosts can
//!   skip re-folding an unchanged stack.

use tracing::debug;

use crate::{NavigationError, NavigationEvent};

/// Navigation state owned by a coordinator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationStack<S> {
    root: S,
    entries: Vec<S>,
    version: u64,
}

impl<S: Clone> NavigationStack<S> {
    /// Create a stack holding only `root`.
    pub fn new(root: S) -> Self {
        Self {
            entries: vec![root.clone()],
            root,
            version: 0,
        }
    }

    /// Create a stack from existing history. The first entry becomes the root.
    pub fn from_entries(entries: Vec<S>) -> Result<Self, NavigationError> {
        let root = entries.first().cloned().ok_or(NavigationError::EmptyStack)?;
        Ok(Self {
            root,
            entries,
            version: 0,
        })
    }

    /// Push a screen on top of the stack.
    pub fn push(&mut self, screen: S) {
        self.entries.push(screen);
        self.bump_version();
        debug!(len = self.entries.len(), "pushed screen");
    }

    /// Pop the top screen.
    ///
    /// Returns `None` and leaves the stack untouched when only the root is left.
    pub fn pop(&mut self) -> Option<S> {
        if self.entries.len() <= 1 {
            debug!("ignored pop on root screen");
            return None;
        }
        let removed = self.entries.pop();
        self.bump_version();
        debug!(len = self.entries.len(), "popped screen");
        removed
    }

    /// Discard all history and keep only the root screen.
    ///
    /// Returns `false` when only the root was left already.
    pub fn reset_to_root(&mut self) -> bool {
        // Entry 0 is always the root.
        if self.entries.len() == 1 {
            return false;
        }
        self.entries.truncate(1);
        self.bump_version();
        debug!("reset to root screen");
        true
    }

    /// Keep the first `index + 1` screens, discarding everything pushed after
    /// the screen at `index`.
    ///
    /// Returns `false` when nothing was pushed after `index`.
    pub fn truncate(&mut self, index: usize) -> bool {
        let keep = index.saturating_add(1);
        if self.entries.len() <= keep {
            return false;
        }
        self.entries.truncate(keep);
        self.bump_version();
        debug!(len = keep, "truncated stack");
        true
    }

    /// Apply one navigation event. Returns whether the stack changed.
    pub fn apply(&mut self, event: NavigationEvent<S>) -> bool {
        match event {
            NavigationEvent::Push(screen) => {
                self.push(screen);
                true
            }
            NavigationEvent::Pop => self.pop().is_some(),
            NavigationEvent::ResetToRoot => self.reset_to_root(),
            NavigationEvent::Deactivated { index } => self.truncate(index),
        }
    }
}

#[allow(clippy::len_without_is_empty)]
impl<S> NavigationStack<S> {
    /// Number of screens, root included. Never zero.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The screen restored by [`Self::reset_to_root`].
    pub fn root(&self) -> &S {
        &self.root
    }

    /// Top screen.
    pub fn last(&self) -> &S {
        // `entries` always holds at least the root.
        &self.entries[self.entries.len() - 1]
    }

    /// Screen at `index`, root first.
    pub fn get(&self, index: usize) -> Option<&S> {
        self.entries.get(index)
    }

    /// Iterate screens in push order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.entries.iter()
    }

    /// Screens in push order.
    pub fn as_slice(&self) -> &[S] {
        &self.entries
    }

    /// Monotonic mutation counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}
