//! Page classification used to select which section renderers run.

/// Discrete classification of the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    About,
    Contact,
    Testimonial,
    Product,
    Other,
}

impl PageKind {
    /// Derive the page kind from a page identity (file name or URL path)
    pub fn from_path(path: &str) -> Self {
        let name = path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("")
            .trim_end_matches(".html");

        match name {
            "" | "index" => PageKind::Home,
            "about" => PageKind::About,
            "contact" | "why" => PageKind::Contact,
            "testimonial" => PageKind::Testimonial,
            "product" => PageKind::Product,
            _ => PageKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(PageKind::from_path("/"), PageKind::Home);
        assert_eq!(PageKind::from_path("index.html"), PageKind::Home);
        assert_eq!(PageKind::from_path("/shop/about.html"), PageKind::About);
        assert_eq!(PageKind::from_path("contact.html"), PageKind::Contact);
        assert_eq!(PageKind::from_path("testimonial.html"), PageKind::Testimonial);
        assert_eq!(PageKind::from_path("product.html"), PageKind::Product);
        assert_eq!(PageKind::from_path("blog.html"), PageKind::Other);
    }
}
