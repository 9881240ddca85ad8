//! [`TreeNode`] support for documents parsed with [`scraper`].
use std::ops::Deref;

use scraper::{ElementRef, Html, Node};

use crate::walker::{NodeKind, TreeNode, Visit, walk};

type NodeRef<'a> = <ElementRef<'a> as Deref>::Target;

/// Any node of a [`scraper`] tree: element, text, comment or document.
#[derive(Debug, Clone, Copy)]
pub struct ScraperNode<'a>(NodeRef<'a>);

impl<'a> ScraperNode<'a> {
    pub fn new(node: NodeRef<'a>) -> Self {
        Self(node)
    }

    pub fn document(html: &'a Html) -> Self {
        Self(html.tree.root())
    }

    pub fn value(&self) -> &'a Node {
        self.0.value()
    }
}

impl<'a> From<ElementRef<'a>> for ScraperNode<'a> {
    fn from(element: ElementRef<'a>) -> Self {
        Self(*element)
    }
}

impl<'a> TreeNode for ScraperNode<'a> {
    type Element = ElementRef<'a>;

    fn first_child(&self) -> Option<Self> {
        self.0.first_child().map(Self)
    }

    fn next_sibling(&self) -> Option<Self> {
        self.0.next_sibling().map(Self)
    }

    fn kind(&self) -> NodeKind<Self::Element> {
        match self.0.value() {
            Node::Element(_) => ElementRef::wrap(self.0).map_or(NodeKind::Other, NodeKind::Element),
            Node::Text(_) => NodeKind::Text,
            Node::Comment(_) => NodeKind::Comment,
            _ => NodeKind::Other,
        }
    }
}

/// Walks the element descendants of `element`.
///
/// For a fragment parsed with [`Html::parse_fragment`], pass
/// `html.root_element()` to walk the fragment's own elements.
pub fn walk_element<'a, R, F>(element: ElementRef<'a>, visit: F)
where
    R: Into<Visit>,
    F: FnMut(ElementRef<'a>) -> R,
{
    walk(ScraperNode::from(element), visit);
}

/// Walks every element of a parsed document, starting with `<html>`.
pub fn walk_document<'a, R, F>(html: &'a Html, visit: F)
where
    R: Into<Visit>,
    F: FnMut(ElementRef<'a>) -> R,
{
    walk(ScraperNode::document(html), visit);
}
