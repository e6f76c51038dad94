//! The element tree: [`Element`] nodes with attributes and children.

// ── Node ──────────────────────────────────────────────────────────────────

/// One node in a markup tree: a child element or a run of text.
///
/// Text is stored unescaped; escaping happens at serialization time.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

// ── Element ───────────────────────────────────────────────────────────────

/// A markup element: tag name, ordered attributes, ordered children.
///
/// Built with a consuming builder, the same shape the widget crate uses:
///
/// ```rust
/// use roster_markup::Element;
///
/// let card = Element::new("li")
///     .class("student-item cf")
///     .child(Element::new("h3").text("Anna Smith"));
/// ```
///
/// The tag name is not validated — callers own that, exactly as the
/// factory contract requires.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attrs: Vec::new(), children: Vec::new() }
    }

    /// Create an element with a single property applied.
    ///
    /// The one-call form the view layer uses for leaf elements.
    pub fn with_attr(
        tag: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(tag).attr(name, value)
    }

    /// Append an attribute. Attributes serialize in insertion order.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Shorthand for `.attr("class", v)`.
    pub fn class(self, v: impl Into<String>) -> Self {
        self.attr("class", v)
    }

    /// Append a text child.
    pub fn text(mut self, v: impl Into<String>) -> Self {
        self.children.push(Node::Text(v.into()));
        self
    }

    /// Append a child element.
    pub fn child(mut self, el: Element) -> Self {
        self.children.push(Node::Element(el));
        self
    }

    /// Append every element from `iter` as a child.
    pub fn children(mut self, iter: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(iter.into_iter().map(Node::Element));
        self
    }

    // ── Inspection ────────────────────────────────────────────────────────

    /// The value of the first attribute named `name`, if any.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// Whether the `class` attribute contains `name` as a whole token.
    pub fn has_class(&self, name: &str) -> bool {
        self.attr_value("class")
            .map(|v| v.split_ascii_whitespace().any(|t| t == name))
            .unwrap_or(false)
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }
}
