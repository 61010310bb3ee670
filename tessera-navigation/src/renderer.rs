//! Folding a navigation stack into a push chain.

use tracing::debug;

use crate::{ChainNode, NavigationStack, Navigator, StackRef};

/// Fold `stack` into a [`ChainNode`] tree rooted at the first screen.
///
/// Screens are visited from the top of the stack down to the root. Each step
/// wraps the view built for that screen around the node built on the
/// previous step, so the root node ends up containing every pushed screen
/// and the chain ends in a single [`ChainNode::Terminal`].
///
/// The chain is meant to be rebuilt on every stack change.
pub fn navigation_stack<S, V, F>(
    stack: &NavigationStack<S>,
    navigator: &Navigator<S>,
    mut build_view: F,
) -> ChainNode<S, V>
where
    F: FnMut(&S) -> V,
{
    let stack_ref = StackRef::new(stack.len(), navigator.clone());
    let chain = stack
        .iter()
        .enumerate()
        .rev()
        .fold(ChainNode::Terminal, |pushed, (index, screen)| {
            ChainNode::Node {
                view: build_view(screen),
                next: Box::new(pushed),
                stack: stack_ref.clone(),
                index,
            }
        });
    debug!(depth = stack.len(), version = stack.version(), "folded navigation stack");
    chain
}
