use rustc_hash::FxHashMap;
use scraper::{Html, Node};

use crate::html::ScraperNode;
use crate::walker::{NodeKind, TreeNode};

/// An owned copy of an HTML subtree, detached from the parsed document.
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    Text(String),
    Element(HtmlElement),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HtmlElement {
    pub tag_name: String,
    pub attributes: FxHashMap<String, String>,
    pub children: Vec<HtmlNode>,
}

impl HtmlElement {
    pub fn new(tag_name: &str, attributes: FxHashMap<String, String>, children: Vec<HtmlNode>) -> Self {
        HtmlElement {
            tag_name: tag_name.to_lowercase(),
            attributes,
            children,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl HtmlNode {
    /// Shorthand for an element without attributes.
    pub fn element(tag_name: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Element(HtmlElement::new(tag_name, FxHashMap::default(), children))
    }

    pub fn text(text: &str) -> Self {
        HtmlNode::Text(text.to_string())
    }

    /// Copies a scraper subtree.
    ///
    /// Document, doctype and processing-instruction nodes have no owned
    /// counterpart and yield `None`.
    pub fn from_scraper(node: ScraperNode<'_>) -> Option<HtmlNode> {
        match node.value() {
            Node::Text(text) => Some(HtmlNode::Text(String::from(&**text))),
            Node::Comment(comment) => Some(HtmlNode::Comment(String::from(&**comment))),
            Node::Element(element) => {
                let attributes = element
                    .attrs()
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect();

                let mut children = Vec::new();
                let mut child = node.first_child();
                while let Some(current) = child {
                    if let Some(html_node) = HtmlNode::from_scraper(current) {
                        children.push(html_node);
                    }
                    child = current.next_sibling();
                }

                Some(HtmlNode::Element(HtmlElement::new(element.name(), attributes, children)))
            }
            _ => None,
        }
    }

    /// Parses `html` as a fragment and copies the `<html>` element wrapping it.
    pub fn parse_fragment(html: &str) -> HtmlNode {
        let fragment = Html::parse_fragment(html);
        HtmlNode::from_scraper(ScraperNode::from(fragment.root_element()))
            .unwrap_or_else(|| HtmlNode::element("html", Vec::new()))
    }

    pub fn as_element(&self) -> Option<&HtmlElement> {
        match self {
            HtmlNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// A walkable handle rooted at this node.
    pub fn cursor(&self) -> HtmlCursor<'_> {
        HtmlCursor {
            siblings: std::slice::from_ref(self),
            index: 0,
        }
    }
}

/// Position of a node among its siblings in an [`HtmlNode`] tree.
#[derive(Debug, Clone, Copy)]
pub struct HtmlCursor<'a> {
    siblings: &'a [HtmlNode],
    index: usize,
}

impl<'a> HtmlCursor<'a> {
    pub fn node(&self) -> &'a HtmlNode {
        &self.siblings[self.index]
    }
}

impl<'a> TreeNode for HtmlCursor<'a> {
    type Element = &'a HtmlElement;

    fn first_child(&self) -> Option<Self> {
        match self.node() {
            HtmlNode::Element(element) if !element.children.is_empty() => Some(HtmlCursor {
                siblings: &element.children,
                index: 0,
            }),
            _ => None,
        }
    }

    fn next_sibling(&self) -> Option<Self> {
        let index = self.index + 1;
        (index < self.siblings.len()).then_some(HtmlCursor {
            siblings: self.siblings,
            index,
        })
    }

    fn kind(&self) -> NodeKind<Self::Element> {
        match self.node() {
            HtmlNode::Element(element) => NodeKind::Element(element),
            HtmlNode::Text(_) => NodeKind::Text,
            HtmlNode::Comment(_) => NodeKind::Comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::{Visit, walk, walk_all};
    use rstest::rstest;

    fn tags(root: &HtmlNode) -> Vec<String> {
        let mut tags = Vec::new();
        walk_all(root.cursor(), |element: &HtmlElement| tags.push(element.tag_name.clone()));
        tags
    }

    #[test]
    fn test_element_new_lowercases_tag() {
        let element = HtmlElement::new("DIV", FxHashMap::default(), Vec::new());
        assert_eq!(element.tag_name, "div");
    }

    #[test]
    fn test_cursor_root_has_no_siblings() {
        let root = HtmlNode::element("div", vec![HtmlNode::element("p", Vec::new())]);
        assert!(root.cursor().next_sibling().is_none());
        assert!(root.cursor().first_child().is_some());
    }

    #[test]
    fn test_walk_built_tree() {
        let root = HtmlNode::element(
            "body",
            vec![
                HtmlNode::element("h1", vec![HtmlNode::text("title")]),
                HtmlNode::text("\n"),
                HtmlNode::element(
                    "ul",
                    vec![
                        HtmlNode::element("li", vec![HtmlNode::text("a")]),
                        HtmlNode::Comment("gap".to_string()),
                        HtmlNode::element("li", vec![HtmlNode::text("b")]),
                    ],
                ),
                HtmlNode::element("footer", Vec::new()),
            ],
        );

        assert_eq!(tags(&root), vec!["h1", "ul", "li", "li", "footer"]);
    }

    #[test]
    fn test_walk_text_root() {
        let root = HtmlNode::text("alone");
        assert!(tags(&root).is_empty());
    }

    #[test]
    fn test_walk_skip_on_owned_tree() {
        let root = HtmlNode::parse_fragment("<ul><li>a</li></ul><ol><li>b</li></ol>");
        let mut seen = Vec::new();

        walk(root.cursor(), |element: &HtmlElement| {
            seen.push(element.tag_name.clone());
            if element.tag_name == "ul" { Visit::Skip } else { Visit::Descend }
        });

        assert_eq!(seen, vec!["ul", "ol", "li"]);
    }

    #[rstest]
    #[case("<p>a</p>", vec!["p"])]
    #[case("<DIV><SPAN>x</SPAN></DIV>", vec!["div", "span"])]
    #[case("text only", vec![])]
    #[case("", vec![])]
    fn test_parse_fragment(#[case] input: &str, #[case] expected: Vec<&str>) {
        let root = HtmlNode::parse_fragment(input);
        assert_eq!(root.as_element().map(|e| e.tag_name.as_str()), Some("html"));
        assert_eq!(tags(&root), expected);
    }

    #[test]
    fn test_parse_fragment_keeps_attributes_and_text() {
        let root = HtmlNode::parse_fragment(r#"<a href="/docs" class="nav">Docs</a><!-- note -->"#);
        let html = root.as_element().unwrap();

        let link = html.children[0].as_element().unwrap();
        assert_eq!(link.tag_name, "a");
        assert_eq!(link.attr("href"), Some("/docs"));
        assert_eq!(link.attr("class"), Some("nav"));
        assert_eq!(link.attr("id"), None);
        assert_eq!(link.children, vec![HtmlNode::text("Docs")]);
        assert_eq!(html.children[1], HtmlNode::Comment(" note ".to_string()));
    }

    #[test]
    fn test_from_scraper_document_node_is_none() {
        let html = Html::parse_document("<!DOCTYPE html><p>x</p>");
        let document = ScraperNode::document(&html);

        assert_eq!(HtmlNode::from_scraper(document), None);

        let doctype = document.first_child().unwrap();
        assert_eq!(HtmlNode::from_scraper(doctype), None);
    }
}
