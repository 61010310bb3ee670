//! Recursive push chain produced by [`navigation_stack`](crate::navigation_stack).
//!
//! A chain is a plain tree: every [`ChainNode::Node`] owns the node for the
//! screen pushed after it, down to a single [`ChainNode::Terminal`]. It is
//! rebuilt on every render pass and never outlives it.

use crate::Navigator;

/// Back-reference from a chain node to the stack it was folded from.
///
/// Holds the stack length seen by the render pass and the navigator used to
/// report truncation. It grants no direct access to the stack.
#[derive(Debug, PartialEq, Eq)]
pub struct StackRef<S> {
    len: usize,
    navigator: Navigator<S>,
}

impl<S> Clone for StackRef<S> {
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            navigator: self.navigator.clone(),
        }
    }
}

#[allow(clippy::len_without_is_empty)]
impl<S> StackRef<S> {
    pub(crate) fn new(len: usize, navigator: Navigator<S>) -> Self {
        Self { len, navigator }
    }

    /// Stack length at fold time.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Navigator of the stack owner.
    pub fn navigator(&self) -> &Navigator<S> {
        &self.navigator
    }
}

/// One screen followed by the rest of the stack.
#[derive(Clone, Debug, PartialEq)]
pub enum ChainNode<S, V> {
    /// A screen view and everything pushed after it.
    Node {
        /// View built for the screen at `index`.
        view: V,
        /// Chain for the screens pushed after this one.
        next: Box<ChainNode<S, V>>,
        /// Back-reference to the folded stack.
        stack: StackRef<S>,
        /// Forward index of the screen in the stack.
        index: usize,
    },
    /// Nothing is pushed beyond this point.
    Terminal,
}

impl<S, V> ChainNode<S, V> {
    /// Whether this is the end of the chain.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }

    /// View of this node, `None` for [`ChainNode::Terminal`].
    pub fn view(&self) -> Option<&V> {
        match self {
            Self::Node { view, .. } => Some(view),
            Self::Terminal => None,
        }
    }

    /// The node pushed after this one, `None` for [`ChainNode::Terminal`].
    pub fn next(&self) -> Option<&ChainNode<S, V>> {
        match self {
            Self::Node { next, .. } => Some(&**next),
            Self::Terminal => None,
        }
    }

    /// Forward index of this node's screen.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Node { index, .. } => Some(*index),
            Self::Terminal => None,
        }
    }

    /// Forward-navigation trigger of this node. Terminal nodes have none.
    pub fn link(&self) -> Option<PushLink<'_, S, V>> {
        match self {
            Self::Node {
                next, stack, index, ..
            } => Some(PushLink {
                target: &**next,
                stack,
                index: *index,
            }),
            Self::Terminal => None,
        }
    }

    /// Iterate the views of non-terminal nodes, root first.
    pub fn nodes(&self) -> Nodes<'_, S, V> {
        Nodes { current: self }
    }

    /// Number of non-terminal nodes in the chain.
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    /// Whether the chain holds no screens at all.
    pub fn is_empty(&self) -> bool {
        self.is_terminal()
    }
}

/// Iterator over the views of a chain, root first.
pub struct Nodes<'a, S, V> {
    current: &'a ChainNode<S, V>,
}

impl<'a, S, V> Iterator for Nodes<'a, S, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            ChainNode::Node { view, next, .. } => {
                self.current = &**next;
                Some(view)
            }
            ChainNode::Terminal => None,
        }
    }
}

/// Invisible trigger that keeps the next node pushed while active.
pub struct PushLink<'a, S, V> {
    target: &'a ChainNode<S, V>,
    stack: &'a StackRef<S>,
    index: usize,
}

impl<'a, S, V> PushLink<'a, S, V> {
    /// Forward index of the node owning this link.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Node presented while the link is active.
    pub fn target(&self) -> &'a ChainNode<S, V> {
        self.target
    }

    /// Whether a screen is pushed after this node right now.
    pub fn is_active(&self) -> bool {
        !self.target.is_terminal() && self.stack.len() > self.index + 1
    }

    /// Report that the platform dismissed everything pushed after this node.
    pub fn deactivate(&self) {
        self.stack.navigator().deactivated(self.index);
    }

    /// Owned handle that can deactivate this link after the chain is gone.
    pub fn handle(&self) -> LinkHandle<S> {
        LinkHandle {
            stack: self.stack.clone(),
            index: self.index,
            has_target: !self.target.is_terminal(),
        }
    }
}

/// Owned counterpart of a [`PushLink`] kept by hosts between render passes.
///
/// Holds the same stack ref as the chain it came from, so its active flag is
/// computed against the stack length of that render pass.
#[derive(Debug, PartialEq, Eq)]
pub struct LinkHandle<S> {
    stack: StackRef<S>,
    index: usize,
    has_target: bool,
}

impl<S> Clone for LinkHandle<S> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            index: self.index,
            has_target: self.has_target,
        }
    }
}

impl<S> LinkHandle<S> {
    /// Forward index of the node that owned the link.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether a screen was pushed after the node in the presented stack.
    pub fn is_active(&self) -> bool {
        self.has_target && self.stack.len() > self.index + 1
    }

    /// Report that the platform dismissed everything pushed after the node.
    pub fn deactivate(&self) {
        self.stack.navigator().deactivated(self.index);
    }
}
