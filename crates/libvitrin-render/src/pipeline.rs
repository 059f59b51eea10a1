//! Per-page-kind dispatch over the section renderers.
//!
//! One configuration-driven mapping table decides which sections run for
//! which page kind; there are no parallel per-page implementations.

use tracing::trace;

use libvitrin_core::{PageKind, SiteContent, PLACEHOLDER_IMAGE};

use crate::dom::Document;
use crate::sections;

/// The renderable page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Arrival,
    Products,
    Footer,
    SiteSettings,
    Testimonials,
    Gallery,
    AboutSections,
    SiteImages,
}

/// Renders loaded content into a document, section by section
#[derive(Debug, Clone)]
pub struct Renderer {
    placeholder_image: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer {
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Renderer::default()
    }

    /// Override the placeholder substituted for failed images
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder_image = placeholder.into();
        self
    }

    /// The fixed, ordered section list for a page kind
    pub fn sections_for(kind: PageKind) -> &'static [Section] {
        use Section::*;
        match kind {
            PageKind::Home => &[
                Hero,
                Arrival,
                Products,
                Footer,
                SiteSettings,
                Testimonials,
                Gallery,
                SiteImages,
            ],
            PageKind::About => &[AboutSections, Footer, SiteSettings, SiteImages],
            PageKind::Contact => &[Footer, SiteSettings, SiteImages],
            PageKind::Testimonial => &[Testimonials, Footer, SiteSettings, SiteImages],
            PageKind::Product => &[Products, Footer, SiteSettings, SiteImages],
            PageKind::Other => &[Footer, SiteSettings, SiteImages],
        }
    }

    /// Render every section for the page kind. Idempotent, DOM-only side
    /// effect; sections with missing targets or data do nothing.
    pub fn render(&self, content: &SiteContent, kind: PageKind, doc: &mut Document) {
        for section in Self::sections_for(kind) {
            match section {
                Section::Hero => sections::hero(content, doc),
                Section::Arrival => sections::arrival(content, doc),
                Section::Products => sections::products(content, doc),
                Section::Footer => sections::footer(content, doc),
                Section::SiteSettings => sections::site_settings(content, doc),
                Section::Testimonials => sections::testimonials(content, doc),
                Section::Gallery => sections::gallery(content, doc),
                Section::AboutSections => sections::about_sections(content, doc),
                Section::SiteImages => sections::site_images(content, doc),
            }
        }
        trace!(?kind, "rendered page sections");
    }

    /// Handle an image load failure: substitute the placeholder exactly once
    pub fn image_failed(&self, doc: &mut Document, id: &str) -> bool {
        doc.apply_image_fallback(id, &self.placeholder_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libvitrin_core::{GalleryItem, SiteContent};

    fn render_home(content: &SiteContent) -> Document {
        let mut doc = Document::storefront(PageKind::Home);
        Renderer::new().render(content, PageKind::Home, &mut doc);
        doc
    }

    #[test]
    fn test_render_is_idempotent() {
        let content = SiteContent::default();
        let renderer = Renderer::new();
        let mut doc = Document::storefront(PageKind::Home);

        renderer.render(&content, PageKind::Home, &mut doc);
        let first = doc.to_html();
        renderer.render(&content, PageKind::Home, &mut doc);
        assert_eq!(first, doc.to_html());
    }

    #[test]
    fn test_rerender_does_not_duplicate_collection_items() {
        let content = SiteContent::default();
        let renderer = Renderer::new();
        let mut doc = Document::storefront(PageKind::Home);

        renderer.render(&content, PageKind::Home, &mut doc);
        renderer.render(&content, PageKind::Home, &mut doc);
        assert_eq!(doc.children("products-row").len(), content.products.len());
        assert_eq!(
            doc.children("testimonial-container").len(),
            content.testimonials.len()
        );
    }

    #[test]
    fn test_gallery_of_ten_renders_three_rows_first_active() {
        let mut content = SiteContent::default();
        content.gallery = (0..10)
            .map(|i| GalleryItem {
                title: format!("Item {}", i),
                image: format!("images/g{}.jpg", i),
                ..GalleryItem::default()
            })
            .collect();

        let doc = render_home(&content);
        let rows = doc.children("gallery-container");
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("carousel-item active"));
        assert!(!rows[1].contains("active"));
        assert!(!rows[2].contains("active"));
        // 4 + 4 + 2 split
        assert_eq!(rows[0].matches("<img").count(), 4);
        assert_eq!(rows[1].matches("<img").count(), 4);
        assert_eq!(rows[2].matches("<img").count(), 2);
    }

    #[test]
    fn test_footer_phone_link_and_label() {
        let mut content = SiteContent::default();
        content.site_settings.phone = "+62123456789".into();

        let doc = render_home(&content);
        assert_eq!(
            doc.attr("footer-phone-link", "href"),
            Some("tel:+62123456789")
        );
        assert_eq!(doc.text("footer-phone"), Some("Call +62123456789"));
    }

    #[test]
    fn test_testimonial_first_slide_active() {
        let content = SiteContent::default();
        let doc = render_home(&content);
        let slides = doc.children("testimonial-container");
        assert!(slides[0].contains("carousel-item active"));
        assert!(slides[1..].iter().all(|s| !s.contains("active")));
    }

    #[test]
    fn test_about_page_sections_render_on_about_kind() {
        let content = SiteContent::default();
        let mut doc = Document::storefront(PageKind::About);
        Renderer::new().render(&content, PageKind::About, &mut doc);

        assert_eq!(doc.text("about-hero-title"), Some("About Famms"));
        assert_eq!(doc.text("story-title"), Some("Our Story"));
        // no product grid on the about page, and rendering it is a no-op
        assert!(!doc.contains("products-row"));
    }

    #[test]
    fn test_about_gallery_of_ten_renders_three_rows_first_active() {
        let mut content = SiteContent::default();
        content.about.gallery_images = (1..=10)
            .map(|i| format!("images/gallery-{}.jpg", i))
            .collect();

        let mut doc = Document::storefront(PageKind::About);
        Renderer::new().render(&content, PageKind::About, &mut doc);

        let rows = doc.children("gallery-container");
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("carousel-item active"));
        assert!(!rows[1].contains("active"));
        assert_eq!(rows[0].matches("<img").count(), 4);
        assert_eq!(rows[1].matches("<img").count(), 4);
        assert_eq!(rows[2].matches("<img").count(), 2);
        // alt text keeps the overall numbering across rows
        assert!(rows[1].contains("Gallery Image 5"));
    }

    #[test]
    fn test_missing_page_key_renders_nothing() {
        let mut content = SiteContent::default();
        if let Some(page) = content.pages.get_mut("index") {
            page.remove("hero_subtitle");
        }

        let doc = render_home(&content);
        // untouched target keeps its empty default text
        assert_eq!(doc.text("hero-subtitle-span"), Some(""));
    }

    #[test]
    fn test_image_failure_placeholder_once() {
        let content = SiteContent::default();
        let renderer = Renderer::new();
        let mut doc = render_home(&content);

        assert!(renderer.image_failed(&mut doc, "hero-background"));
        assert_eq!(
            doc.attr("hero-background", "src"),
            Some(PLACEHOLDER_IMAGE)
        );
        assert!(!renderer.image_failed(&mut doc, "hero-background"));
    }
}
