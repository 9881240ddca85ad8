use domwalk_tree::{Visit, walk_document};
use scraper::Html;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub depth: usize,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
}

impl OutlineEntry {
    /// `tag#id.class` selector-style label.
    pub fn label(&self) -> String {
        let mut label = self.tag.clone();
        if let Some(id) = &self.id {
            label.push('#');
            label.push_str(id);
        }
        for class in &self.classes {
            label.push('.');
            label.push_str(class);
        }
        label
    }
}

#[derive(Debug, Clone, Default)]
pub struct OutlineOptions {
    /// Tags that are listed but not descended into.
    pub prune: Vec<String>,
    /// Elements at this depth are listed but not descended into.
    pub max_depth: Option<usize>,
}

impl OutlineOptions {
    fn descend(&self, tag: &str, depth: usize) -> Visit {
        let pruned = self.prune.iter().any(|p| p.eq_ignore_ascii_case(tag));
        let too_deep = self.max_depth.is_some_and(|max| depth >= max);
        Visit::from(!pruned && !too_deep)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Outline {
    entries: Vec<OutlineEntry>,
}

impl Outline {
    pub fn from_html(html: &str, options: &OutlineOptions) -> Outline {
        let document = Html::parse_document(html);
        let mut entries = Vec::new();

        walk_document(&document, |element| {
            let depth = element
                .ancestors()
                .filter(|node| node.value().is_element())
                .count();
            let value = element.value();

            entries.push(OutlineEntry {
                depth,
                tag: value.name().to_string(),
                id: value.id().map(str::to_string),
                classes: value.classes().map(str::to_string).collect(),
            });

            options.descend(value.name(), depth)
        });

        Outline { entries }
    }

    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render_text(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}{}", "  ".repeat(entry.depth), entry.label()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}
