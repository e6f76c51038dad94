//! Element tree builder and HTML serializer for **roster** views.
//!
//! This crate is intentionally dependency-free so view-model code,
//! tests, and tooling can build and serialize markup without pulling
//! in the rest of the workspace.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`element`] | `Element`, `Node`, the builder API |
//! | [`escape`] | text / attribute escaping |
//! | [`render`] | HTML serialization (`Element::to_html`) |
//!
//! # Quick start
//!
//! ```rust
//! use roster_markup::Element;
//!
//! let list = Element::new("ul")
//!     .class("student-list")
//!     .child(Element::with_attr("li", "class", "student-item").text("Anna Smith"));
//!
//! assert_eq!(
//!     list.to_html(),
//!     r#"<ul class="student-list"><li class="student-item">Anna Smith</li></ul>"#,
//! );
//! ```

pub mod element;
pub mod escape;
pub mod render;

pub use element::{Element, Node};

#[cfg(test)]
mod markup_tests {
    use super::*;

    #[test]
    fn bare_element() {
        assert_eq!(Element::new("div").to_html(), "<div></div>");
    }

    #[test]
    fn factory_applies_one_property() {
        let el = Element::with_attr("p", "class", "no-results");
        assert_eq!(el.to_html(), r#"<p class="no-results"></p>"#);
    }

    #[test]
    fn attrs_keep_insertion_order() {
        let el = Element::new("input").attr("id", "search").attr("type", "text");
        assert_eq!(el.to_html(), r#"<input id="search" type="text">"#);
    }

    #[test]
    fn void_tag_has_no_closing_tag() {
        let el = Element::with_attr("img", "src", "a.png");
        assert_eq!(el.to_html(), r#"<img src="a.png">"#);
    }

    #[test]
    fn text_is_escaped() {
        let el = Element::new("span").text("a < b & c");
        assert_eq!(el.to_html(), "<span>a &lt; b &amp; c</span>");
    }

    #[test]
    fn attr_value_is_escaped() {
        let el = Element::with_attr("img", "alt", r#"say "hi""#);
        assert_eq!(el.to_html(), r#"<img alt="say &quot;hi&quot;">"#);
    }

    #[test]
    fn nested_children_in_order() {
        let el = Element::new("li")
            .child(Element::new("h3").text("Anna"))
            .child(Element::with_attr("span", "class", "email").text("a@b.c"));
        assert_eq!(
            el.to_html(),
            r#"<li><h3>Anna</h3><span class="email">a@b.c</span></li>"#,
        );
    }

    #[test]
    fn mixed_text_and_element_children() {
        let el = Element::new("span").text("Joined ").child(Element::new("b").text("2019"));
        assert_eq!(el.to_html(), "<span>Joined <b>2019</b></span>");
    }

    #[test]
    fn attr_lookup() {
        let el = Element::new("button").attr("type", "button");
        assert_eq!(el.attr_value("type"), Some("button"));
        assert_eq!(el.attr_value("id"), None);
    }

    #[test]
    fn has_class_matches_whole_tokens() {
        let el = Element::with_attr("li", "class", "student-item cf");
        assert!(el.has_class("student-item"));
        assert!(el.has_class("cf"));
        assert!(!el.has_class("student"));
    }
}
