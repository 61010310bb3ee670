//! Errors produced while building navigation state.

use thiserror::Error;

/// Errors returned by [`NavigationStack`](crate::NavigationStack) constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// A navigation stack must always contain its root screen.
    #[error("navigation stack requires at least a root screen")]
    EmptyStack,
}
