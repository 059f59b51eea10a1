//! The render target: a flat, id-addressed document model.
//!
//! Updates are one-way: renderers write text, attributes, and child
//! fragments; nothing reads the page back. Serialization is fully
//! deterministic (sorted attributes, insertion-order elements) so
//! idempotency can be checked byte for byte.

use std::collections::{BTreeMap, HashMap};

use libvitrin_core::PageKind;

/// Marker attribute recording that the image fallback already ran
const FALLBACK_MARKER: &str = "data-fallback";

/// One addressable element in the document
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    text: String,
    attrs: BTreeMap<String, String>,
    children: Vec<String>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            ..Element::default()
        }
    }

    /// Tags serialized without text or children
    fn is_void(&self) -> bool {
        matches!(self.tag.as_str(), "img" | "link" | "meta" | "br")
    }
}

/// In-memory page document
#[derive(Debug, Clone, Default)]
pub struct Document {
    order: Vec<String>,
    elements: HashMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    /// Add an element; the id must be unique, later adds are ignored
    pub fn add(&mut self, id: &str, tag: &str) -> &mut Self {
        if !self.elements.contains_key(id) {
            self.order.push(id.to_string());
            self.elements.insert(id.to_string(), Element::new(tag));
        }
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Set an element's plain text content. Missing targets are skipped.
    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.text = text.to_string();
        }
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|el| el.text.as_str())
    }

    /// Set an attribute. Missing targets are skipped.
    pub fn set_attr(&mut self, id: &str, name: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.attrs.insert(name.to_string(), value.to_string());
        }
    }

    pub fn attr(&self, id: &str, name: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|el| el.attrs.get(name))
            .map(|s| s.as_str())
    }

    /// Remove every child fragment from a container
    pub fn clear_children(&mut self, id: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.children.clear();
        }
    }

    /// Append one rendered markup fragment to a container
    pub fn append_fragment(&mut self, id: &str, fragment: String) {
        if let Some(el) = self.elements.get_mut(id) {
            el.children.push(fragment);
        }
    }

    pub fn children(&self, id: &str) -> &[String] {
        self.elements
            .get(id)
            .map(|el| el.children.as_slice())
            .unwrap_or(&[])
    }

    /// Substitute the placeholder for a failed image, at most once per
    /// element. Returns whether a substitution happened.
    pub fn apply_image_fallback(&mut self, id: &str, placeholder: &str) -> bool {
        let Some(el) = self.elements.get_mut(id) else {
            return false;
        };
        if el.attrs.contains_key(FALLBACK_MARKER) {
            return false;
        }
        el.attrs.insert("src".to_string(), placeholder.to_string());
        el.attrs.insert(FALLBACK_MARKER.to_string(), "1".to_string());
        true
    }

    /// Deterministic serialization of the whole document
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for id in &self.order {
            let Some(el) = self.elements.get(id) else {
                continue;
            };
            out.push('<');
            out.push_str(&el.tag);
            out.push_str(&format!(" id=\"{}\"", id));
            for (name, value) in &el.attrs {
                out.push_str(&format!(" {}=\"{}\"", name, crate::html::escape(value)));
            }
            if el.is_void() {
                out.push_str("/>\n");
                continue;
            }
            out.push('>');
            out.push_str(&crate::html::escape(&el.text));
            for child in &el.children {
                out.push('\n');
                out.push_str(child);
            }
            out.push_str(&format!("</{}>\n", el.tag));
        }
        out
    }

    /// The standard storefront skeleton for a page kind, using the
    /// well-known element ids the section renderers target
    pub fn storefront(kind: PageKind) -> Self {
        let mut doc = Document::new();

        // <head> surface
        doc.add("page-title", "title");
        doc.add("meta-description", "meta");
        doc.add("site-favicon", "link");

        // navbar
        doc.add("site-logo", "img");

        match kind {
            PageKind::Home => {
                doc.add("hero-background", "img");
                doc.add("hero-title-span", "span");
                doc.add("hero-subtitle-span", "span");
                doc.add("hero-description", "p");
                doc.add("arrival-background", "img");
                doc.add("arrival-title", "h2");
                doc.add("arrival-description", "p");
                doc.add("products-row", "div");
                doc.add("testimonial-container", "div");
                doc.add("gallery-container", "div");
            }
            PageKind::About => {
                doc.add("about-hero-title", "h1");
                doc.add("about-hero-subtitle", "h2");
                doc.add("about-hero-description", "p");
                doc.add("story-title", "h2");
                doc.add("story-subtitle", "h3");
                doc.add("story-content", "p");
                doc.add("story-content-2", "p");
                doc.add("story-content-3", "p");
                doc.add("story-image", "img");
                doc.add("gallery-title", "h2");
                doc.add("gallery-subtitle", "h3");
                doc.add("gallery-container", "div");
                doc.add("mission-title", "h2");
                doc.add("mission-subtitle", "h3");
                doc.add("team-title", "h2");
                doc.add("team-subtitle", "h3");
                doc.add("cta-title", "h2");
                doc.add("cta-description", "p");
            }
            PageKind::Testimonial => {
                doc.add("testimonial-container", "div");
            }
            PageKind::Product => {
                doc.add("products-row", "div");
            }
            PageKind::Contact | PageKind::Other => {}
        }

        // footer, shared by every page
        doc.add("footer-logo", "a");
        doc.add("footer-address-link", "a");
        doc.add("footer-address", "span");
        doc.add("footer-phone-link", "a");
        doc.add("footer-phone", "span");
        doc.add("footer-email-link", "a");
        doc.add("footer-email", "span");
        doc.add("footer-facebook", "a");
        doc.add("footer-twitter", "a");
        doc.add("footer-linkedin", "a");
        doc.add("footer-instagram", "a");
        doc.add("footer-pinterest", "a");

        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_target_is_silently_skipped() {
        let mut doc = Document::new();
        doc.set_text("ghost", "hello");
        doc.set_attr("ghost", "href", "#");
        doc.clear_children("ghost");
        assert!(doc.text("ghost").is_none());
    }

    #[test]
    fn test_text_is_escaped_on_serialization() {
        let mut doc = Document::new();
        doc.add("title", "h1");
        doc.set_text("title", "<script>alert(1)</script>");

        let html = doc.to_html();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_image_fallback_applies_exactly_once() {
        let mut doc = Document::new();
        doc.add("site-logo", "img");
        doc.set_attr("site-logo", "src", "images/broken.png");

        assert!(doc.apply_image_fallback("site-logo", "images/placeholder.png"));
        assert_eq!(doc.attr("site-logo", "src"), Some("images/placeholder.png"));

        // second failure signal: no further substitution
        assert!(!doc.apply_image_fallback("site-logo", "images/other.png"));
        assert_eq!(doc.attr("site-logo", "src"), Some("images/placeholder.png"));
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let build = || {
            let mut doc = Document::new();
            doc.add("a", "div");
            doc.set_attr("a", "class", "box");
            doc.set_attr("a", "data-kind", "hero");
            doc.set_text("a", "text");
            doc
        };
        assert_eq!(build().to_html(), build().to_html());
    }

    #[test]
    fn test_storefront_home_has_section_targets() {
        let doc = Document::storefront(PageKind::Home);
        for id in [
            "hero-title-span",
            "products-row",
            "testimonial-container",
            "gallery-container",
            "footer-phone-link",
        ] {
            assert!(doc.contains(id), "missing {}", id);
        }
    }
}
