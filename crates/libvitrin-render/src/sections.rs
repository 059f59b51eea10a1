//! Section renderers.
//!
//! Each renderer performs one-way DOM updates for one page section.
//! A renderer whose target elements or data are absent does nothing.

use libvitrin_core::{GalleryItem, SiteContent, GALLERY_ROW_SIZE};

use crate::dom::Document;
use crate::html;

/// Write a page-record key as text, skipping missing keys and targets
fn set_page_text(doc: &mut Document, content: &SiteContent, page: &str, key: &str, id: &str) {
    if let Some(value) = content.pages.get(page).and_then(|p| p.get(key)) {
        doc.set_text(id, value);
    }
}

fn set_text_if_present(doc: &mut Document, id: &str, value: &str) {
    if !value.is_empty() {
        doc.set_text(id, value);
    }
}

fn set_src_if_present(doc: &mut Document, id: &str, value: &str) {
    if !value.is_empty() {
        doc.set_attr(id, "src", value);
    }
}

pub fn hero(content: &SiteContent, doc: &mut Document) {
    set_page_text(doc, content, "index", "hero_title", "hero-title-span");
    set_page_text(doc, content, "index", "hero_subtitle", "hero-subtitle-span");
    set_page_text(doc, content, "index", "hero_description", "hero-description");
}

pub fn arrival(content: &SiteContent, doc: &mut Document) {
    set_page_text(doc, content, "index", "arrival_title", "arrival-title");
    set_page_text(doc, content, "index", "arrival_description", "arrival-description");
}

/// Product grid: the container is cleared fully before the fresh set is
/// appended, so re-rendering never leaves stale cards behind
pub fn products(content: &SiteContent, doc: &mut Document) {
    if !doc.contains("products-row") {
        return;
    }
    doc.clear_children("products-row");
    for product in &content.products {
        doc.append_fragment("products-row", html::product_card(product));
    }
}

pub fn footer(content: &SiteContent, doc: &mut Document) {
    let settings = &content.site_settings;

    if !settings.address.is_empty() {
        doc.set_attr(
            "footer-address-link",
            "href",
            &format!(
                "https://maps.google.com/?q={}",
                html::encode_query_component(&settings.address)
            ),
        );
        doc.set_text("footer-address", &settings.address);
    }

    if !settings.phone.is_empty() {
        doc.set_attr("footer-phone-link", "href", &format!("tel:{}", settings.phone));
        doc.set_text("footer-phone", &format!("Call {}", settings.phone));
    }

    if !settings.email.is_empty() {
        doc.set_attr("footer-email-link", "href", &format!("mailto:{}", settings.email));
        doc.set_text("footer-email", &settings.email);
    }

    set_text_if_present(doc, "footer-logo", &settings.store_name);

    let socials = [
        ("footer-facebook", &settings.facebook_url),
        ("footer-twitter", &settings.twitter_url),
        ("footer-linkedin", &settings.linkedin_url),
        ("footer-instagram", &settings.instagram_url),
        ("footer-pinterest", &settings.pinterest_url),
    ];
    for (id, url) in socials {
        if !url.is_empty() {
            doc.set_attr(id, "href", url);
            doc.set_attr(id, "target", "_blank");
        }
    }
}

/// Store identity in the head surface
pub fn site_settings(content: &SiteContent, doc: &mut Document) {
    let settings = &content.site_settings;
    if !settings.store_name.is_empty() {
        doc.set_text(
            "page-title",
            &format!("{} - Fashion HTML Template", settings.store_name),
        );
    }
    if !settings.store_description.is_empty() {
        doc.set_attr("meta-description", "content", &settings.store_description);
    }
}

pub fn testimonials(content: &SiteContent, doc: &mut Document) {
    if !doc.contains("testimonial-container") {
        return;
    }
    doc.clear_children("testimonial-container");
    for (i, testimonial) in content.testimonials.iter().enumerate() {
        doc.append_fragment(
            "testimonial-container",
            html::testimonial_slide(testimonial, i == 0),
        );
    }
}

/// Gallery rows of four, source order preserved, first row active
pub fn gallery(content: &SiteContent, doc: &mut Document) {
    if !doc.contains("gallery-container") {
        return;
    }
    doc.clear_children("gallery-container");
    for (i, row) in content.gallery.chunks(GALLERY_ROW_SIZE).enumerate() {
        doc.append_fragment("gallery-container", html::gallery_row(row, i == 0));
    }
}

pub fn about_sections(content: &SiteContent, doc: &mut Document) {
    let about = &content.about;

    set_text_if_present(doc, "about-hero-title", &about.hero_title);
    set_text_if_present(doc, "about-hero-subtitle", &about.hero_subtitle);
    set_text_if_present(doc, "about-hero-description", &about.hero_description);

    set_text_if_present(doc, "story-title", &about.story_title);
    set_text_if_present(doc, "story-subtitle", &about.story_subtitle);
    set_text_if_present(doc, "story-content", &about.story_content);
    set_text_if_present(doc, "story-content-2", &about.story_content_2);
    set_text_if_present(doc, "story-content-3", &about.story_content_3);
    set_src_if_present(doc, "story-image", &about.story_image);

    set_text_if_present(doc, "gallery-title", &about.gallery_title);
    set_text_if_present(doc, "gallery-subtitle", &about.gallery_subtitle);
    about_gallery(about.gallery_images.as_slice(), doc);
    set_text_if_present(doc, "mission-title", &about.mission_title);
    set_text_if_present(doc, "mission-subtitle", &about.mission_subtitle);
    set_text_if_present(doc, "team-title", &about.team_title);
    set_text_if_present(doc, "team-subtitle", &about.team_subtitle);
    set_text_if_present(doc, "cta-title", &about.cta_title);
    set_text_if_present(doc, "cta-description", &about.cta_description);
}

/// About-page image gallery: rows of four like the home gallery, alt
/// text numbered from the image's overall position
fn about_gallery(images: &[String], doc: &mut Document) {
    if !doc.contains("gallery-container") {
        return;
    }
    doc.clear_children("gallery-container");
    let items: Vec<GalleryItem> = images
        .iter()
        .enumerate()
        .map(|(i, image)| GalleryItem {
            image: image.clone(),
            alt_text: format!("Gallery Image {}", i + 1),
            ..GalleryItem::default()
        })
        .collect();
    for (i, row) in items.chunks(GALLERY_ROW_SIZE).enumerate() {
        doc.append_fragment("gallery-container", html::gallery_row(row, i == 0));
    }
}

pub fn site_images(content: &SiteContent, doc: &mut Document) {
    let settings = &content.site_settings;
    set_src_if_present(doc, "site-logo", &settings.logo);
    if !settings.favicon.is_empty() {
        doc.set_attr("site-favicon", "href", &settings.favicon);
    }
    set_src_if_present(doc, "hero-background", &settings.hero_background);
    set_src_if_present(doc, "arrival-background", &settings.arrival_background);
}
