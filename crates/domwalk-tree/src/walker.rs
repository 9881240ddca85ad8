use std::convert::Infallible;

/// What a node is, as far as the walker is concerned.
///
/// Only the `Element` payload is ever handed to a visitor; everything else is
/// stepped over when looking for the next element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<E> {
    Element(E),
    Text,
    Comment,
    Other,
}

impl<E> NodeKind<E> {
    pub fn element(self) -> Option<E> {
        match self {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// A cheap handle to a position in a tree.
///
/// Handles must come from an acyclic tree: following `first_child` and
/// `next_sibling` has to terminate. The walker does not check this.
pub trait TreeNode: Copy {
    type Element: Copy;

    fn first_child(&self) -> Option<Self>;
    fn next_sibling(&self) -> Option<Self>;
    fn kind(&self) -> NodeKind<Self::Element>;
}

/// The visitor's decision for the element it was just given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visit {
    /// Walk into this element's children.
    #[default]
    Descend,
    /// Leave this element's subtree out. Its siblings are still visited.
    Skip,
}

impl From<bool> for Visit {
    fn from(descend: bool) -> Self {
        if descend { Visit::Descend } else { Visit::Skip }
    }
}

impl From<()> for Visit {
    fn from(_: ()) -> Self {
        Visit::Descend
    }
}

/// Walks the element descendants of `root` in document order, pre-order.
///
/// `root` itself is not visited. Whatever the visitor returns is converted
/// into a [`Visit`], so closures returning `Visit`, `bool` or `()` all work.
pub fn walk<N, R, F>(root: N, mut visit: F)
where
    N: TreeNode,
    R: Into<Visit>,
    F: FnMut(N::Element) -> R,
{
    let result: Result<(), Infallible> = walk_children(root, &mut |element| Ok(visit(element).into()));
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Walks every element descendant of `root`, regardless of the visitor.
pub fn walk_all<N, F>(root: N, mut visit: F)
where
    N: TreeNode,
    F: FnMut(N::Element),
{
    walk(root, |element| {
        visit(element);
        Visit::Descend
    });
}

/// Like [`walk`], but with a visitor that can fail.
///
/// The first error stops the walk and is returned as is.
pub fn try_walk<N, E, F>(root: N, mut visit: F) -> Result<(), E>
where
    N: TreeNode,
    F: FnMut(N::Element) -> Result<Visit, E>,
{
    walk_children(root, &mut visit)
}

fn walk_children<N, E, F>(parent: N, visit: &mut F) -> Result<(), E>
where
    N: TreeNode,
    F: FnMut(N::Element) -> Result<Visit, E>,
{
    let mut child = parent.first_child();

    while let Some(node) = child {
        if let NodeKind::Element(element) = node.kind() {
            if visit(element)? == Visit::Descend {
                walk_children(node, visit)?;
            }
        }
        child = node.next_sibling();
    }

    Ok(())
}
