//! Platform boundary for presenting push chains.
//!
//! A host receives a freshly folded [`ChainNode`] on every render pass. It
//! shows the root view, then keeps following the node's [`PushLink`] while
//! the link is active. When the user navigates back, the host deactivates
//! the link under the screen being dismissed; that is the only way platform
//! gestures feed back into the stack.
//!
//! [`PushLink`]: crate::PushLink

use crate::{ChainNode, LinkHandle};

/// A platform surface that presents push chains.
pub trait NavigationHost<S, V> {
    /// Present the chain produced by the latest render pass.
    fn present(&mut self, root: &ChainNode<S, V>);
}

/// The screens a host shows for one chain, root first.
#[derive(Debug)]
pub struct Presentation<S, V> {
    screens: Vec<V>,
    links: Vec<LinkHandle<S>>,
}

impl<S, V> Default for Presentation<S, V> {
    fn default() -> Self {
        Self {
            screens: Vec::new(),
            links: Vec::new(),
        }
    }
}

impl<S, V: Clone> Presentation<S, V> {
    /// Walk `root`, descending through every active link.
    pub fn from_chain(root: &ChainNode<S, V>) -> Self {
        let mut presentation = Self::default();
        let mut node = root;
        while let Some(view) = node.view() {
            presentation.screens.push(view.clone());
            let Some(link) = node.link() else {
                break;
            };
            presentation.links.push(link.handle());
            if !link.is_active() {
                break;
            }
            node = link.target();
        }
        presentation
    }
}

impl<S, V> Presentation<S, V> {
    /// Visible screens, root first.
    pub fn screens(&self) -> &[V] {
        &self.screens
    }

    /// The screen on top.
    pub fn top(&self) -> Option<&V> {
        self.screens.last()
    }

    /// Number of visible screens.
    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    /// Links of the visible screens, one per screen.
    pub fn links(&self) -> &[LinkHandle<S>] {
        &self.links
    }

    /// Dismiss the top screen the way a platform back gesture does.
    ///
    /// Returns `false` when only the root is visible.
    pub fn back_gesture(&self) -> bool {
        let Some(beneath) = self.depth().checked_sub(2) else {
            return false;
        };
        self.links[beneath].deactivate();
        true
    }
}

impl<S, V: Clone> NavigationHost<S, V> for Presentation<S, V> {
    fn present(&mut self, root: &ChainNode<S, V>) {
        *self = Self::from_chain(root);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ChainNode, NavigationEvent, NavigationHost, NavigationQueue, NavigationStack,
        navigation_stack,
    };

    use super::Presentation;

    #[test]
    fn presentation_follows_active_links() {
        let queue = NavigationQueue::new();
        let stack = NavigationStack::from_entries(vec!['a', 'b', 'c']).unwrap();
        let chain = navigation_stack(&stack, &queue.navigator(), |screen| *screen);

        let presentation = Presentation::from_chain(&chain);
        assert_eq!(presentation.screens(), &['a', 'b', 'c']);
        assert_eq!(presentation.top(), Some(&'c'));
        let active: Vec<bool> = presentation.links().iter().map(|l| l.is_active()).collect();
        assert_eq!(active, vec![true, true, false]);
    }

    #[test]
    fn link_handles_agree_with_chain_links() {
        let queue = NavigationQueue::new();
        for len in 1..5u32 {
            let stack = NavigationStack::from_entries((0..len).collect()).unwrap();
            let chain = navigation_stack(&stack, &queue.navigator(), |screen| *screen);
            assert!(!chain.is_empty());
            let handles: Vec<_> = std::iter::successors(Some(&chain), |node| node.next())
                .filter_map(|node| node.link())
                .map(|link| (link.is_active(), link.handle()))
                .collect();
            assert_eq!(handles.len(), len as usize);
            for (active, handle) in handles {
                assert_eq!(handle.is_active(), active);
            }
        }
    }

    #[test]
    fn terminal_chain_presents_nothing() {
        let chain = ChainNode::<char, char>::Terminal;
        assert!(chain.is_empty());
        let presentation = Presentation::from_chain(&chain);
        assert_eq!(presentation.depth(), 0);
        assert!(!presentation.back_gesture());
    }

    #[test]
    fn back_gesture_at_root_sends_nothing() {
        let queue = NavigationQueue::new();
        let stack = NavigationStack::new('a');
        let mut presentation = Presentation::default();
        presentation.present(&navigation_stack(&stack, &queue.navigator(), |s| *s));

        assert_eq!(presentation.depth(), 1);
        assert!(!presentation.back_gesture());
        assert!(queue.is_idle());
    }

    #[test]
    fn back_gestures_unwind_to_root() {
        let queue = NavigationQueue::new();
        let mut stack = NavigationStack::from_entries(vec![1, 2, 3, 4]).unwrap();
        let mut presentation = Presentation::default();

        for expected_depth in (1..=4).rev() {
            presentation.present(&navigation_stack(&stack, &queue.navigator(), |s| *s));
            assert_eq!(presentation.depth(), expected_depth);
            if !presentation.back_gesture() {
                break;
            }
            let events = queue.drain();
            assert_eq!(
                events,
                vec![NavigationEvent::Deactivated {
                    index: expected_depth - 2
                }]
            );
            for event in events {
                assert!(stack.apply(event));
            }
        }
        assert_eq!(stack.as_slice(), &[1]);
    }
}
