//! Shadow tree of the selector and its HTML rendering.
//!
//! The tree is deliberately flat: a style block followed by one `<span>`
//! holding links and `" | "` joiners.

use crate::attributes::HostAttributes;
use crate::language::Language;

/// Tag name of the host element.
pub const ELEMENT_NAME: &str = "language-selector";

/// Text placed between consecutive links.
pub const JOINER: &str = " | ";

/// Styles scoped to the shadow root. Colours come from the host page theme.
pub const STYLE: &str = r#"
:host {
	float: right;
	font-size: smaller;
	color: var(--lang-disabled)
}
a {
	cursor: pointer;
	font-weight: normal;
	text-decoration: none;
}
a:hover {
	text-decoration: underline;
}
a.current {
	font-weight: bold;
	color: var(--lang-enabled);
}
a.loading {
	opacity: 0.2;
	cursor: wait;
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    Current,
    Loading,
}

impl LinkClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkClass::Current => "current",
            LinkClass::Loading => "loading",
        }
    }
}

/// One clickable language link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageLink {
    pub code: String,
    pub title: String,
    classes: Vec<LinkClass>,
}

impl LanguageLink {
    pub fn new(language: &Language) -> Self {
        Self {
            code: language.code.clone(),
            title: language.name_local.clone(),
            classes: Vec::new(),
        }
    }

    /// Add a class; adding one already present is a no-op.
    pub fn add_class(&mut self, class: LinkClass) {
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    pub fn has_class(&self, class: LinkClass) -> bool {
        self.classes.contains(&class)
    }

    /// Classes in the order they were added.
    pub fn classes(&self) -> &[LinkClass] {
        &self.classes
    }

    pub fn is_current(&self) -> bool {
        self.has_class(LinkClass::Current)
    }

    pub fn is_loading(&self) -> bool {
        self.has_class(LinkClass::Loading)
    }

    fn to_html(&self) -> String {
        let mut html = format!("<a title=\"{}\"", escape_html(&self.title));
        if !self.classes.is_empty() {
            let classes = self
                .classes
                .iter()
                .map(LinkClass::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            html.push_str(&format!(" class=\"{}\"", classes));
        }
        html.push('>');
        html.push_str(&escape_html(&self.code));
        html.push_str("</a>");
        html
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListNode {
    Joiner,
    Link(LanguageLink),
}

/// The isolated render tree of one selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowRoot {
    style: &'static str,
    list: Vec<ListNode>,
}

impl ShadowRoot {
    /// Build the tree: one link per language, joiners between them, and every
    /// link whose code equals `current_language` marked current.
    pub fn build(languages: &[Language], current_language: Option<&str>) -> Self {
        let mut list = Vec::with_capacity(languages.len() * 2);

        for language in languages {
            if !list.is_empty() {
                list.push(ListNode::Joiner);
            }
            let mut link = LanguageLink::new(language);
            if current_language == Some(language.code.as_str()) {
                link.add_class(LinkClass::Current);
            }
            list.push(ListNode::Link(link));
        }

        Self { style: STYLE, list }
    }

    pub fn style(&self) -> &str {
        self.style
    }

    pub fn nodes(&self) -> &[ListNode] {
        &self.list
    }

    pub fn links(&self) -> impl Iterator<Item = &LanguageLink> {
        self.list.iter().filter_map(|node| match node {
            ListNode::Link(link) => Some(link),
            ListNode::Joiner => None,
        })
    }

    pub fn link_count(&self) -> usize {
        self.links().count()
    }

    pub fn link(&self, index: usize) -> Option<&LanguageLink> {
        self.links().nth(index)
    }

    pub fn link_mut(&mut self, index: usize) -> Option<&mut LanguageLink> {
        self.list
            .iter_mut()
            .filter_map(|node| match node {
                ListNode::Link(link) => Some(link),
                ListNode::Joiner => None,
            })
            .nth(index)
    }

    /// Visible text of the list container, e.g. `"en | fr"`.
    pub fn text_content(&self) -> String {
        self.list
            .iter()
            .map(|node| match node {
                ListNode::Joiner => JOINER,
                ListNode::Link(link) => link.code.as_str(),
            })
            .collect()
    }

    /// Render the shadow root contents: `<style>` then the `<span>` list.
    pub fn to_html(&self) -> String {
        let mut html = format!("<style>{}</style><span>", self.style);
        for node in &self.list {
            match node {
                ListNode::Joiner => html.push_str(JOINER),
                ListNode::Link(link) => html.push_str(&link.to_html()),
            }
        }
        html.push_str("</span>");
        html
    }
}

/// Render the host element with its shadow tree as a closed declarative
/// shadow root.
pub fn render_host_element(attributes: &HostAttributes, shadow: &ShadowRoot) -> String {
    let attrs: String = attributes
        .pairs()
        .into_iter()
        .map(|(name, value)| format!(" {}=\"{}\"", name, escape_html(value)))
        .collect();

    format!(
        "<{name}{attrs}><template shadowrootmode=\"closed\">{shadow}</template></{name}>",
        name = ELEMENT_NAME,
        attrs = attrs,
        shadow = shadow.to_html(),
    )
}

/// Escape text for use in HTML content and double-quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}
