//! Message passing between views, platform hosts and the stack owner.
//!
//! Views and hosts never touch the [`NavigationStack`](crate::NavigationStack)
//! directly. They hold a cheap [`Navigator`] and send [`NavigationEvent`]s;
//! the owner drains its [`NavigationQueue`] between frames and applies them
//! in send order.

use std::{collections::VecDeque, fmt, sync::Arc};

use parking_lot::Mutex;
use tracing::trace;

/// A request to change the navigation stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationEvent<S> {
    /// Append a screen.
    Push(S),
    /// Remove the top screen, keeping the root.
    Pop,
    /// Drop all history except the root.
    ResetToRoot,
    /// The platform dismissed everything pushed after the screen at `index`.
    Deactivated {
        /// Forward index of the screen that is now on top.
        index: usize,
    },
}

type SharedQueue<S> = Arc<Mutex<VecDeque<NavigationEvent<S>>>>;

/// Receiving end owned by the stack owner.
pub struct NavigationQueue<S> {
    pending: SharedQueue<S>,
}

impl<S> Default for NavigationQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> NavigationQueue<S> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            pending: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Create a sender feeding this queue.
    pub fn navigator(&self) -> Navigator<S> {
        Navigator {
            pending: Arc::clone(&self.pending),
        }
    }

    /// Take all pending events, oldest first.
    pub fn drain(&self) -> Vec<NavigationEvent<S>> {
        self.pending.lock().drain(..).collect()
    }

    /// Whether no events are waiting.
    pub fn is_idle(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

/// Cloneable sender of [`NavigationEvent`]s.
pub struct Navigator<S> {
    pending: SharedQueue<S>,
}

impl<S> Clone for Navigator<S> {
    fn clone(&self) -> Self {
        Self {
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<S> PartialEq for Navigator<S> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pending, &other.pending)
    }
}

impl<S> Eq for Navigator<S> {}

impl<S> fmt::Debug for Navigator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("pending", &self.pending.lock().len())
            .finish()
    }
}

impl<S> Navigator<S> {
    /// Queue an event for the stack owner.
    pub fn send(&self, event: NavigationEvent<S>) {
        let mut pending = self.pending.lock();
        pending.push_back(event);
        trace!(pending = pending.len(), "queued navigation event");
    }

    /// Request a push of `screen`.
    pub fn push(&self, screen: S) {
        self.send(NavigationEvent::Push(screen));
    }

    /// Request removal of the top screen.
    pub fn pop(&self) {
        self.send(NavigationEvent::Pop);
    }

    /// Request a reset to the root screen.
    pub fn reset_to_root(&self) {
        self.send(NavigationEvent::ResetToRoot);
    }

    /// Report that the link of the screen at `index` was deactivated.
    pub fn deactivated(&self, index: usize) {
        self.send(NavigationEvent::Deactivated { index });
    }
}
