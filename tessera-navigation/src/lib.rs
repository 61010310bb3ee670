//! Declarative push navigation driven by an ordered list of screens.
//!
//! The navigation state is a plain [`NavigationStack`] of screen identifiers.
//! Every render pass folds it into a [`ChainNode`] tree with
//! [`navigation_stack`]: each node holds the view of one screen plus an
//! invisible [`PushLink`] to the screen pushed after it. A platform host
//! walks that tree, and when the user navigates back it deactivates a link,
//! which travels to the stack owner as a [`NavigationEvent`] through a
//! [`Navigator`].
//!
//! # Example
//!
//! ```
//! use tessera_navigation::{NavigationQueue, NavigationStack, Presentation, navigation_stack};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Screen {
//!     Inbox,
//!     Message(u32),
//! }
//!
//! let mut stack = NavigationStack::new(Screen::Inbox);
//! let queue = NavigationQueue::new();
//! stack.push(Screen::Message(3));
//!
//! let chain = navigation_stack(&stack, &queue.navigator(), |screen| format!("{screen:?}"));
//! let presentation = Presentation::from_chain(&chain);
//! assert_eq!(presentation.top().map(String::as_str), Some("Message(3)"));
//!
//! // The user swipes back: the link under the top screen is deactivated.
//! assert!(presentation.back_gesture());
//! for event in queue.drain() {
//!     stack.apply(event);
//! }
//! assert_eq!(stack.as_slice(), &[Screen::Inbox]);
//! ```

pub mod chain;
pub mod error;
pub mod host;
pub mod navigator;
pub mod prop;
pub mod renderer;
pub mod stack;

pub use crate::{
    chain::{ChainNode, LinkHandle, Nodes, PushLink, StackRef},
    error::NavigationError,
    host::{NavigationHost, Presentation},
    navigator::{NavigationEvent, NavigationQueue, Navigator},
    prop::{Callback, CallbackWith},
    renderer::navigation_stack,
    stack::NavigationStack,
};
