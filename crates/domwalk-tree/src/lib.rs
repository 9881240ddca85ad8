//! # domwalk-tree: visitor-driven element walks over HTML trees
//!
//! This crate walks the element descendants of a node in document order,
//! handing each element to a visitor. The visitor decides whether the walk
//! continues into that element's children.
//!
//! Any tree can be walked by implementing [`TreeNode`]. Implementations are
//! provided for [`scraper`] documents and for the owned [`HtmlNode`] snapshot.
//!
//! ## Quick Start
//!
//! ```rust
//! use domwalk_tree::{Visit, walk_element};
//! use scraper::Html;
//!
//! let html = Html::parse_fragment("<ul><li>one</li><li>two</li></ul><p>skip <b>me</b></p>");
//! let mut tags = Vec::new();
//!
//! walk_element(html.root_element(), |element| {
//!     tags.push(element.value().name().to_string());
//!     if element.value().name() == "p" { Visit::Skip } else { Visit::Descend }
//! });
//!
//! assert_eq!(tags, vec!["ul", "li", "li", "p"]);
//! ```
//!
//! ## Walking an owned tree
//!
//! ```rust
//! use domwalk_tree::{HtmlNode, walk_all};
//!
//! let tree = HtmlNode::parse_fragment("<div><span>a</span>text<!-- c --></div>");
//! let mut count = 0;
//! walk_all(tree.cursor(), |_| count += 1);
//! assert_eq!(count, 2);
//! ```
pub mod html;
pub mod node;
pub mod walker;

pub use html::{ScraperNode, walk_document, walk_element};
pub use node::{HtmlCursor, HtmlElement, HtmlNode};
pub use walker::{NodeKind, TreeNode, Visit, try_walk, walk, walk_all};
