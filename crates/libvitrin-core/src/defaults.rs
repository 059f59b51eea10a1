//! Built-in fallback content.
//!
//! Every loadable field has a default here so a total load failure still
//! yields a fully-populated `SiteContent`. The copy mirrors the seed data
//! the admin panel starts from.

use std::collections::BTreeMap;

use crate::types::content::{
    AboutPage, GalleryItem, PageRecord, Product, Settings, SiteContent, Testimonial,
};

impl Default for SiteContent {
    fn default() -> Self {
        let mut pages = BTreeMap::new();
        pages.insert("index".to_string(), default_index_page());

        SiteContent {
            pages,
            products: default_products(),
            testimonials: default_testimonials(),
            gallery: default_gallery(),
            site_settings: default_settings(),
            about: default_about(),
        }
    }
}

/// Default home-page record (hero + arrival copy)
pub fn default_index_page() -> PageRecord {
    let mut page = PageRecord::new();
    page.insert("hero_title".into(), "Sale 20% Off".into());
    page.insert("hero_subtitle".into(), "On Everything".into());
    page.insert(
        "hero_description".into(),
        "Explicabo esse amet tempora quibusdam laudantium, laborum eaque magnam fugiat hic? \
         Esse dicta aliquid error repudiandae earum suscipit fugiat molestias, veniam, vel \
         architecto veritatis delectus repellat modi impedit sequi."
            .into(),
    );
    page.insert("arrival_title".into(), "#NewArrivals".into());
    page.insert(
        "arrival_description".into(),
        "Vitae fugiat laboriosam officia perferendis provident aliquid voluptatibus dolorem, \
         fugit ullam sit earum id eaque nisi hic? Tenetur commodi, nisi rem vel, ea eaque ab \
         ipsa, autem similique ex unde!"
            .into(),
    );
    page
}

/// Default store settings
pub fn default_settings() -> Settings {
    Settings {
        store_name: "Famms".into(),
        store_description: "Your trusted online fashion store with the latest collections and \
                            the best quality."
            .into(),
        whatsapp_number: "+6281234567890".into(),
        address: "Jl. Sudirman No. 123, Jakarta Pusat, Indonesia".into(),
        phone: "+62123456789".into(),
        email: "info@famms.co.id".into(),
        instagram_url: "https://instagram.com/famms".into(),
        facebook_url: "https://facebook.com/famms".into(),
        twitter_url: "https://twitter.com/famms".into(),
        linkedin_url: "https://linkedin.com/company/famms".into(),
        pinterest_url: "https://pinterest.com/famms".into(),
        logo: "images/logo.png".into(),
        favicon: "images/favicon.png".into(),
        hero_background: "images/slider-bg.jpg".into(),
        arrival_background: "images/arrival-bg.png".into(),
    }
}

fn product(title: &str, price: &str, image: &str, category: &str, description: &str) -> Product {
    Product {
        title: title.into(),
        price: price.into(),
        image: image.into(),
        category: category.into(),
        description: description.into(),
        wa_link: String::new(),
        whatsapp: "628123456789".into(),
    }
}

/// Default product catalog (positions match the well-known file list)
pub fn default_products() -> Vec<Product> {
    vec![
        product(
            "Men's Premium Shirt",
            "$75",
            "images/p1.png",
            "Men",
            "High-quality premium shirt for men",
        ),
        product(
            "Men's Casual Shirt",
            "$65",
            "images/p2.png",
            "Men",
            "Comfortable casual shirt for daily wear",
        ),
        product(
            "Men's Sport Shirt",
            "$55",
            "images/p8.png",
            "Men",
            "Sport shirt for active lifestyle",
        ),
        product(
            "Men's Business Shirt",
            "$80",
            "images/p9.png",
            "Men",
            "Professional business shirt",
        ),
        product(
            "Men's Weekend Shirt",
            "$60",
            "images/p10.png",
            "Men",
            "Relaxed shirt for weekends",
        ),
        product(
            "Men's Classic Shirt",
            "$70",
            "images/p11.png",
            "Men",
            "Classic design shirt",
        ),
        product(
            "Women's Elegant Dress",
            "$85",
            "images/p3.png",
            "Women",
            "Elegant dress for special occasions",
        ),
        product(
            "Women's Summer Dress",
            "$68",
            "images/p4.png",
            "Women",
            "Perfect dress for summer season",
        ),
        product(
            "Women's Formal Dress",
            "$95",
            "images/p5.png",
            "Women",
            "Formal dress for business events",
        ),
        product(
            "Women's Casual Dress",
            "$58",
            "images/p12.png",
            "Women",
            "Casual dress for everyday wear",
        ),
        product(
            "Kids T-Shirt",
            "$25",
            "images/p6.png",
            "Kids",
            "Comfortable t-shirt for kids",
        ),
        product(
            "Leather Tote Bag",
            "$45",
            "images/p7.png",
            "Accessories",
            "Spacious tote bag for every day",
        ),
    ]
}

/// Default testimonials
pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Anna Trevor".into(),
            role: "Customer".into(),
            content: "Dignissimos reprehenderit repellendus nobis error quibusdam? Atque animi \
                      sint unde quis reprehenderit, et, perspiciatis, debitis totam est deserunt \
                      eius officiis ipsum ducimus ad labore modi voluptatibus accusantium \
                      sapiente nam! Quaerat."
                .into(),
            image: "images/client.jpg".into(),
            rating: 5,
        },
        Testimonial {
            name: "Michael Chen".into(),
            role: "Regular Customer".into(),
            content: "Excellent service and high-quality products! The team at Famms really \
                      knows fashion. I've been a loyal customer for over a year and couldn't \
                      be happier with their collection and customer service."
                .into(),
            image: "images/client.jpg".into(),
            rating: 5,
        },
        Testimonial {
            name: "Sarah Johnson".into(),
            role: "Fashion Enthusiast".into(),
            content: "Famms has completely transformed my wardrobe! Their trendy designs and \
                      affordable prices make it easy to stay fashionable without breaking the \
                      bank. Highly recommend!"
                .into(),
            image: "images/client.jpg".into(),
            rating: 5,
        },
    ]
}

fn gallery_item(title: &str, image: &str, category: &str, alt_text: &str) -> GalleryItem {
    GalleryItem {
        title: title.into(),
        image: image.into(),
        category: category.into(),
        alt_text: alt_text.into(),
    }
}

/// Default gallery (12 items, three carousel rows of four)
pub fn default_gallery() -> Vec<GalleryItem> {
    vec![
        gallery_item(
            "Fashion Collection 2024",
            "images/gallery-1.jpg",
            "Fashion",
            "Latest fashion collection showcase",
        ),
        gallery_item(
            "Premium Products",
            "images/gallery-2.jpg",
            "Products",
            "Premium product display",
        ),
        gallery_item(
            "Store Interior",
            "images/gallery-3.jpg",
            "Store",
            "Beautiful store interior design",
        ),
        gallery_item(
            "Fashion Event",
            "images/gallery-4.jpg",
            "Events",
            "Fashion show event",
        ),
        gallery_item(
            "Summer Collection",
            "images/gallery-5.jpg",
            "Fashion",
            "Summer fashion collection",
        ),
        gallery_item(
            "Accessories Line",
            "images/gallery-6.jpg",
            "Products",
            "Fashion accessories collection",
        ),
        gallery_item(
            "Store Front",
            "images/gallery-7.jpg",
            "Store",
            "Modern store front design",
        ),
        gallery_item(
            "Fashion Week",
            "images/gallery-8.jpg",
            "Events",
            "Fashion week runway show",
        ),
        gallery_item(
            "Winter Collection",
            "images/gallery-9.jpg",
            "Fashion",
            "Winter fashion collection",
        ),
        gallery_item(
            "Premium Quality",
            "images/gallery-10.jpg",
            "Products",
            "Premium quality fashion items",
        ),
        gallery_item(
            "Customer Service",
            "images/gallery-11.jpg",
            "Store",
            "Excellent customer service",
        ),
        gallery_item(
            "Fashion Show",
            "images/gallery-12.jpg",
            "Events",
            "Fashion show backstage",
        ),
    ]
}

/// Default about-page copy
pub fn default_about() -> AboutPage {
    AboutPage {
        hero_title: "About Famms".into(),
        hero_subtitle: "Your Trusted Fashion Partner Since 2020".into(),
        hero_description: "We are dedicated to providing high-quality fashion products that \
                           combine style, comfort, and affordability for the modern consumer."
            .into(),
        story_title: "Our Story".into(),
        story_subtitle: "From a small idea to a fashion destination".into(),
        story_content: "Founded in 2020, Famms began as a small boutique with a big vision: to \
                        make quality fashion accessible to everyone. What started as a modest \
                        store in the heart of the city has grown into a trusted name in the \
                        fashion industry."
            .into(),
        story_content_2: "Our journey has been driven by passion for fashion and commitment to \
                          customer satisfaction. We believe that great style shouldn't come \
                          with a great price tag, and that's why we work directly with \
                          manufacturers to bring you the best deals without compromising on \
                          quality."
            .into(),
        story_content_3: "Today, Famms stands as a testament to what can be achieved with \
                          dedication, hard work, and a genuine love for fashion. We continue \
                          to evolve, adapt, and grow, always keeping our customers at the \
                          heart of everything we do."
            .into(),
        story_image: "images/about-img.png".into(),
        gallery_title: "Our Gallery".into(),
        gallery_subtitle: "Our best fashion collections".into(),
        gallery_images: (1..=12).map(|i| format!("images/gallery-{}.jpg", i)).collect(),
        mission_title: "Our Mission".into(),
        mission_subtitle: "Quality fashion for everyone".into(),
        team_title: "Our Team".into(),
        team_subtitle: "The people behind Famms".into(),
        cta_title: "Ready to Experience the Famms Difference?".into(),
        cta_description: "Join thousands of satisfied customers who have discovered their \
                          perfect style with us."
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::files::Collection;

    #[test]
    fn test_default_content_fully_populated() {
        let content = SiteContent::default();
        assert!(content.pages.contains_key("index"));
        assert!(!content.products.is_empty());
        assert!(!content.testimonials.is_empty());
        assert!(!content.gallery.is_empty());
        assert!(!content.site_settings.store_name.is_empty());
        assert!(!content.about.hero_title.is_empty());
    }

    #[test]
    fn test_defaults_match_well_known_file_lists() {
        assert_eq!(
            default_products().len(),
            Collection::Products.well_known_files().len()
        );
        assert_eq!(
            default_testimonials().len(),
            Collection::Testimonials.well_known_files().len()
        );
        assert_eq!(
            default_gallery().len(),
            Collection::Gallery.well_known_files().len()
        );
    }
}
