//! Content records mirrored from the JSON content files.
//!
//! All fields carry `#[serde(default)]` so a partial file deserializes into
//! a fully-populated record. Missing keys render nothing, they never error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flat string-to-string record backing a single page (hero titles,
/// descriptions, button text and links)
pub type PageRecord = BTreeMap<String, String>;

/// Root aggregate loaded on every page view.
///
/// `SiteContent::default()` is the built-in fallback content; after a load
/// every field is populated, never partially undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub pages: BTreeMap<String, PageRecord>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub site_settings: Settings,
    #[serde(default)]
    pub about: AboutPage,
}

/// A single product card. Identity is the position in the collection
/// index; the record itself only holds content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Full WhatsApp deep link; derived from `whatsapp` when absent
    #[serde(default)]
    pub wa_link: String,
    /// Bare WhatsApp number, kept for records that predate `wa_link`
    #[serde(default)]
    pub whatsapp: String,
}

impl Product {
    /// The "Buy Now" target: the explicit deep link when present,
    /// otherwise one derived from the bare number.
    pub fn buy_link(&self) -> String {
        if !self.wa_link.is_empty() {
            return self.wa_link.clone();
        }
        if !self.whatsapp.is_empty() {
            return format!("https://wa.me/{}", self.whatsapp.trim_start_matches('+'));
        }
        String::new()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub alt_text: String,
}

impl GalleryItem {
    /// Alt text for the rendered image, falling back to the title
    pub fn alt(&self) -> &str {
        if self.alt_text.is_empty() {
            &self.title
        } else {
            &self.alt_text
        }
    }
}

/// Store identity, contact, and social fields from settings.json
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub store_description: String,
    #[serde(default)]
    pub whatsapp_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub instagram_url: String,
    #[serde(default)]
    pub facebook_url: String,
    #[serde(default)]
    pub twitter_url: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub pinterest_url: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub favicon: String,
    #[serde(default)]
    pub hero_background: String,
    #[serde(default)]
    pub arrival_background: String,
}

/// About-page copy from about.json
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AboutPage {
    #[serde(default)]
    pub hero_title: String,
    #[serde(default)]
    pub hero_subtitle: String,
    #[serde(default)]
    pub hero_description: String,
    #[serde(default)]
    pub story_title: String,
    #[serde(default)]
    pub story_subtitle: String,
    #[serde(default)]
    pub story_content: String,
    #[serde(default)]
    pub story_content_2: String,
    #[serde(default)]
    pub story_content_3: String,
    #[serde(default)]
    pub story_image: String,
    #[serde(default)]
    pub gallery_title: String,
    #[serde(default)]
    pub gallery_subtitle: String,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default)]
    pub mission_title: String,
    #[serde(default)]
    pub mission_subtitle: String,
    #[serde(default)]
    pub team_title: String,
    #[serde(default)]
    pub team_subtitle: String,
    #[serde(default)]
    pub cta_title: String,
    #[serde(default)]
    pub cta_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_product_deserializes() {
        let p: Product = serde_json::from_str(r#"{"title": "Shirt"}"#).unwrap();
        assert_eq!(p.title, "Shirt");
        assert_eq!(p.price, "");
        assert_eq!(p.buy_link(), "");
    }

    #[test]
    fn test_buy_link_prefers_explicit_deep_link() {
        let p = Product {
            wa_link: "https://wa.me/628123456789?text=hi".into(),
            whatsapp: "628000000000".into(),
            ..Product::default()
        };
        assert_eq!(p.buy_link(), "https://wa.me/628123456789?text=hi");
    }

    #[test]
    fn test_buy_link_derived_from_number() {
        let p = Product {
            whatsapp: "+628123456789".into(),
            ..Product::default()
        };
        assert_eq!(p.buy_link(), "https://wa.me/628123456789");
    }

    #[test]
    fn test_gallery_alt_falls_back_to_title() {
        let g = GalleryItem {
            title: "Fashion Event".into(),
            ..GalleryItem::default()
        };
        assert_eq!(g.alt(), "Fashion Event");
    }
}
