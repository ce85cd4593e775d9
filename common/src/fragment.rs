//! Declarative description of one product card.
//!
//! A [`ProductFragment`] holds everything a card shows and does, already
//! resolved from a [`Product`] and the [`SiteConfig`]. It carries no markup;
//! the page renders it with Yew and the server renders it with
//! [`crate::markup`].

use crate::config::{ImageMode, SiteConfig};
use crate::model::product::{Product, ProductId};

/// Name of the page-level function invoked by the inline action handler.
pub const ORDER_HANDLER_FN: &str = "orderOnWhatsApp";

#[derive(Debug, Clone, PartialEq)]
pub enum ImageArea {
    Glyph(String),
    Picture {
        src: String,
        alt: String,
        /// Data URI swapped in when `src` fails to load.
        fallback_src: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceLine {
    /// Pre-discount price, struck through.
    pub original: Option<String>,
    pub current: String,
}

impl PriceLine {
    /// Plain-text form: `"{original} {current}"` or just `"{current}"`.
    pub fn text(&self) -> String {
        match &self.original {
            Some(original) => format!("{} {}", original, self.current),
            None => self.current.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionControl {
    pub label: String,
    pub inquiry_url: String,
    /// Inline handler call, e.g. `orderOnWhatsApp('Rose', '₹299')`, with
    /// the arguments escaped for a single-quoted JS string. Not yet escaped
    /// for HTML.
    pub handler: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductFragment {
    pub id: ProductId,
    pub image: ImageArea,
    pub name: String,
    pub category: String,
    pub description: String,
    pub details: Option<String>,
    pub price: PriceLine,
    pub action: ActionControl,
}

impl ProductFragment {
    pub fn build(product: &Product, config: &SiteConfig) -> Self {
        let price = PriceLine {
            original: product.original_price.as_ref().map(|p| p.to_string()),
            current: product.price.to_string(),
        };

        let image = match config.image_mode {
            ImageMode::Glyph => ImageArea::Glyph(product.icon.clone()),
            ImageMode::Picture => ImageArea::Picture {
                src: image_path(&config.image_dir, &product.id),
                alt: product.name.clone(),
                fallback_src: placeholder_data_uri(&product.icon),
            },
        };

        let details = product.details();
        let action = ActionControl {
            label: config.order_label.clone(),
            inquiry_url: config
                .whatsapp
                .product_inquiry_url(&product.name, &price.current),
            handler: format!(
                "{}('{}', '{}')",
                ORDER_HANDLER_FN,
                escape_js_single_quoted(&product.name),
                escape_js_single_quoted(&price.current)
            ),
        };

        Self {
            id: product.id.clone(),
            image,
            name: product.name.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            details: (!details.is_empty()).then(|| details.join(" · ")),
            price,
            action,
        }
    }
}

/// `{dir}/{id}.png`
pub fn image_path(dir: &str, id: &ProductId) -> String {
    format!("{}/{}.png", dir.trim_end_matches('/'), id)
}

/// A 200x200 grey SVG with `icon` centered, as a `data:` URI.
pub fn placeholder_data_uri(icon: &str) -> String {
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200">"#,
            r##"<rect fill="#f0f0f0" width="200" height="200"/>"##,
            r##"<text x="50%" y="50%" text-anchor="middle" dy=".3em" fill="#999" font-size="20">{}</text>"##,
            "</svg>"
        ),
        escape_xml_text(icon)
    );
    format!("data:image/svg+xml,{}", urlencoding::encode(&svg))
}

/// Escapes a value for use inside a single-quoted JavaScript string literal.
pub fn escape_js_single_quoted(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_xml_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whatsapp::decode_text_param;

    fn candle() -> Product {
        Product::new(7u64, "Vanilla Glow", "Jar Candles", "Warm vanilla.", 350u64, "🕯️")
    }

    #[test]
    fn picture_path_is_derived_from_id() {
        let fragment = ProductFragment::build(&candle(), &SiteConfig::default());
        match fragment.image {
            ImageArea::Picture { src, alt, fallback_src } => {
                assert_eq!(src, "media/product_images/7.png");
                assert_eq!(alt, "Vanilla Glow");
                assert!(fallback_src.starts_with("data:image/svg+xml,"));
            }
            other => panic!("unexpected image area {:?}", other),
        }
    }

    #[test]
    fn glyph_mode_shows_icon_only() {
        let config = SiteConfig {
            image_mode: ImageMode::Glyph,
            ..SiteConfig::default()
        };
        let fragment = ProductFragment::build(&candle(), &config);
        assert_eq!(fragment.image, ImageArea::Glyph("🕯️".to_string()));
    }

    #[test]
    fn price_line_with_original_price() {
        let product = candle().with_original_price(500u64);
        let fragment = ProductFragment::build(&product, &SiteConfig::default());
        assert_eq!(fragment.price.original.as_deref(), Some("₹500"));
        assert_eq!(fragment.price.current, "₹350");
        assert_eq!(fragment.price.text(), "₹500 ₹350");
    }

    #[test]
    fn price_line_without_original_price() {
        let fragment = ProductFragment::build(&candle(), &SiteConfig::default());
        assert_eq!(fragment.price.original, None);
        assert_eq!(fragment.price.text(), "₹350");
    }

    #[test]
    fn action_url_carries_name_and_price() {
        let fragment = ProductFragment::build(&candle(), &SiteConfig::default());
        let text = decode_text_param(&fragment.action.inquiry_url).unwrap();
        assert!(text.contains("Vanilla Glow"));
        assert!(text.contains("(₹350)"));
        assert_eq!(fragment.action.label, "Order on WhatsApp");
    }

    #[test]
    fn handler_escapes_single_quotes() {
        let mut product = candle();
        product.name = r"Mom's \Best\ Candle".to_string();
        let fragment = ProductFragment::build(&product, &SiteConfig::default());
        assert_eq!(
            fragment.action.handler,
            r"orderOnWhatsApp('Mom\'s \\Best\\ Candle', '₹350')"
        );
    }

    #[test]
    fn details_are_joined() {
        let mut product = candle();
        product.burn_time = Some("30-40 hours".to_string());
        product.wax_type = Some("Soy Wax".to_string());
        let fragment = ProductFragment::build(&product, &SiteConfig::default());
        assert_eq!(fragment.details.as_deref(), Some("30-40 hours · Soy Wax"));
        assert_eq!(
            ProductFragment::build(&candle(), &SiteConfig::default()).details,
            None
        );
    }

    #[test]
    fn placeholder_embeds_escaped_icon() {
        let uri = placeholder_data_uri("<b>");
        let svg = urlencoding::decode(uri.trim_start_matches("data:image/svg+xml,")).unwrap();
        assert!(svg.contains(">&lt;b&gt;</text>"));
        assert!(svg.contains(r##"<rect fill="#f0f0f0" width="200" height="200"/>"##));
        assert!(svg.contains(r##"fill="#999" font-size="20">"##));
        assert!(svg.ends_with("</text></svg>"));
    }

    #[test]
    fn image_path_accepts_text_ids_and_trailing_slash() {
        assert_eq!(
            image_path("media/product_images/", &ProductId::from("rose-01")),
            "media/product_images/rose-01.png"
        );
    }
}
