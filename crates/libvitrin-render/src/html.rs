//! Fragment builders for the generated list markup.
//!
//! Collection rows are the one place content becomes markup, because the
//! structural repetition is not expressible as text. Every interpolated
//! value goes through `escape`.

use libvitrin_core::{GalleryItem, Product, Testimonial};

/// Escape a value for safe interpolation into markup
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a string for use inside a query component
pub fn encode_query_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// One product card in the grid
pub fn product_card(product: &Product) -> String {
    format!(
        r#"<div class="col-sm-6 col-md-4 col-lg-4">
  <div class="box">
    <div class="option_container">
      <div class="options">
        <a href="" class="option1">{title}</a>
        <a href="{link}" class="option2" target="_blank">Buy Now</a>
      </div>
    </div>
    <div class="img-box">
      <img src="{image}" alt="{title}">
    </div>
    <div class="detail-box">
      <h5>{title}</h5>
      <h6>{price}</h6>
    </div>
  </div>
</div>"#,
        title = escape(&product.title),
        link = escape(&product.buy_link()),
        image = escape(&product.image),
        price = escape(&product.price),
    )
}

/// One testimonial carousel slide; the first slide is the active one
pub fn testimonial_slide(testimonial: &Testimonial, active: bool) -> String {
    format!(
        r#"<div class="carousel-item{active}">
  <div class="box col-lg-10 mx-auto">
    <div class="img_container">
      <div class="img-box">
        <div class="img_box-inner">
          <img src="{image}" alt="{name}">
        </div>
      </div>
    </div>
    <div class="detail-box">
      <h5>{name}</h5>
      <h6>{role}</h6>
      <p>{content}</p>
    </div>
  </div>
</div>"#,
        active = if active { " active" } else { "" },
        image = escape(&testimonial.image),
        name = escape(&testimonial.name),
        role = escape(&testimonial.role),
        content = escape(&testimonial.content),
    )
}

/// One gallery carousel row; items keep source order
pub fn gallery_row(items: &[GalleryItem], active: bool) -> String {
    let imgs: Vec<String> = items
        .iter()
        .map(|item| {
            format!(
                r#"<img src="{image}" class="gallery-item" alt="{alt}">"#,
                image = escape(&item.image),
                alt = escape(item.alt()),
            )
        })
        .collect();

    format!(
        r#"<div class="carousel-item{active}">
  <div class="gallery-row">
    {imgs}
  </div>
</div>"#,
        active = if active { " active" } else { "" },
        imgs = imgs.join("\n    "),
    )
}
