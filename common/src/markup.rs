//! HTML string rendering of product fragments.
//!
//! Used for the server-rendered catalog page, which needs no WebAssembly
//! bundle and carries one small inline script defining the order handler.
//! Every text node and attribute value is HTML-escaped. Inline handlers are
//! escaped twice: first for the single-quoted JS string (done when the
//! fragment is built), then for the HTML attribute.

use crate::config::SiteConfig;
use crate::fragment::{escape_js_single_quoted, ImageArea, ProductFragment, ORDER_HANDLER_FN};
use crate::model::catalog::Brand;

/// Escapes `&`, `<`, `>`, `"` and `'` as HTML entities.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// One `<div class="product-card">`.
pub fn render_fragment(fragment: &ProductFragment) -> String {
    let image = match &fragment.image {
        ImageArea::Glyph(glyph) => escape_html(glyph),
        ImageArea::Picture {
            src,
            alt,
            fallback_src,
        } => format!(
            r#"<img src="{}" alt="{}" onerror="{}">"#,
            escape_html(src),
            escape_html(alt),
            escape_html(&format!(
                "this.onerror=null;this.src='{}'",
                escape_js_single_quoted(fallback_src)
            ))
        ),
    };

    let price = match &fragment.price.original {
        Some(original) => format!(
            r#"<span class="original-price">{}</span> {}"#,
            escape_html(original),
            escape_html(&fragment.price.current)
        ),
        None => escape_html(&fragment.price.current),
    };

    let details = fragment
        .details
        .as_ref()
        .map(|d| format!(r#"<p class="product-details">{}</p>"#, escape_html(d)))
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="product-card">"#,
            r#"<div class="product-image">{image}</div>"#,
            r#"<div class="product-info">"#,
            "<h3>{name}</h3>",
            r#"<p class="product-category">{category}</p>"#,
            "<p>{description}</p>",
            "{details}",
            r#"<div class="product-price">{price}</div>"#,
            r#"<button class="btn btn-primary" onclick="{handler}">{label}</button>"#,
            "</div></div>"
        ),
        image = image,
        name = escape_html(&fragment.name),
        category = escape_html(&fragment.category),
        description = escape_html(&fragment.description),
        details = details,
        price = price,
        handler = escape_html(&fragment.action.handler),
        label = escape_html(&fragment.action.label),
    )
}

/// The products grid, one card per fragment in order.
pub fn render_grid(fragments: &[ProductFragment]) -> String {
    let mut out = String::from(r#"<div class="products-grid" id="productsGrid">"#);
    for fragment in fragments {
        out.push_str(&render_fragment(fragment));
    }
    out.push_str("</div>");
    out
}

/// Defines the handler called by the cards' action buttons.
fn order_script(config: &SiteConfig) -> String {
    format!(
        concat!(
            "function {func}(productName, productPrice) {{",
            "var message = \"Hello! I'm interested in ordering \" + productName + \" (\" + productPrice + \"). Please share more details about this product.\";",
            "window.open('https://wa.me/c/{number}?text=' + encodeURIComponent(message), '_blank');",
            "}}"
        ),
        func = ORDER_HANDLER_FN,
        number = escape_js_single_quoted(config.whatsapp.number()),
    )
}

/// A complete HTML document listing the catalog.
pub fn render_page(brand: Option<&Brand>, fragments: &[ProductFragment], config: &SiteConfig) -> String {
    let (title, tagline) = match brand {
        Some(brand) => (brand.name.as_str(), brand.tagline.as_str()),
        None => (config.brand_name.as_str(), ""),
    };

    format!(
        concat!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "<title>{title}</title></head><body>",
            "<header><h1>{title}</h1><p class=\"tagline\">{tagline}</p></header>",
            "<section id=\"products\">{grid}</section>",
            "<script>{script}</script>",
            "</body></html>"
        ),
        title = escape_html(title),
        tagline = escape_html(tagline),
        grid = render_grid(fragments),
        script = order_script(config),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::product::Product;

    fn unescape_html(input: &str) -> String {
        input
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    }

    /// Value of the first `attr="..."` in `html`, entity-decoded.
    fn attribute(html: &str, attr: &str) -> String {
        let marker = format!("{}=\"", attr);
        let start = html.find(&marker).unwrap() + marker.len();
        let end = start + html[start..].find('"').unwrap();
        unescape_html(&html[start..end])
    }

    /// Reads the single-quoted JS string literals of a call expression.
    fn js_string_args(call: &str) -> Vec<String> {
        let mut args = Vec::new();
        let mut chars = call.chars();
        while let Some(ch) = chars.next() {
            if ch != '\'' {
                continue;
            }
            let mut value = String::new();
            loop {
                match chars.next().expect("unterminated string literal") {
                    '\\' => match chars.next().unwrap() {
                        'n' => value.push('\n'),
                        'r' => value.push('\r'),
                        other => value.push(other),
                    },
                    '\'' => break,
                    other => value.push(other),
                }
            }
            args.push(value);
        }
        args
    }

    fn fragment_for(name: &str) -> ProductFragment {
        let product = Product::new(1u64, name, "Jar Candles", "Soy wax.", 350u64, "🕯️");
        ProductFragment::build(&product, &SiteConfig::default())
    }

    #[test]
    fn single_quote_in_name_keeps_handler_well_formed() {
        let name = "Grandma's \"Best\" Candle";
        let html = render_fragment(&fragment_for(name));

        let handler = attribute(&html, "onclick");
        assert!(handler.starts_with("orderOnWhatsApp("));
        assert!(handler.ends_with(')'));
        assert_eq!(js_string_args(&handler), vec![name.to_string(), "₹350".to_string()]);
    }

    #[test]
    fn backslash_and_markup_in_name_are_contained() {
        let name = r"<b>\'</b>";
        let html = render_fragment(&fragment_for(name));
        assert!(html.contains("<h3>&lt;b&gt;\\&#39;&lt;/b&gt;</h3>"));
        assert_eq!(js_string_args(&attribute(&html, "onclick"))[0], name);
    }

    #[test]
    fn price_line_shows_original_price_struck_through() {
        let product = Product::new(2u64, "Rose", "", "", 420u64, "🌹").with_original_price(500u64);
        let html = render_fragment(&ProductFragment::build(&product, &SiteConfig::default()));
        assert!(html.contains(
            r#"<div class="product-price"><span class="original-price">₹500</span> ₹420</div>"#
        ));
    }

    #[test]
    fn price_line_without_original_price() {
        let html = render_fragment(&fragment_for("Plain"));
        assert!(html.contains(r#"<div class="product-price">₹350</div>"#));
        assert!(!html.contains("original-price"));
    }

    #[test]
    fn picture_has_placeholder_fallback() {
        let html = render_fragment(&fragment_for("Plain"));
        assert_eq!(attribute(&html, "src"), "media/product_images/1.png");
        let onerror = attribute(&html, "onerror");
        assert!(onerror.starts_with("this.onerror=null;this.src='data:image/svg+xml,"));
        assert_eq!(js_string_args(&onerror).len(), 1);
    }

    #[test]
    fn grid_keeps_order_and_count() {
        let fragments: Vec<_> = ["A", "B", "C", "D"].iter().map(|n| fragment_for(n)).collect();
        let html = render_grid(&fragments);
        assert_eq!(html.matches(r#"class="product-card""#).count(), 4);
        let positions: Vec<_> = ["<h3>A</h3>", "<h3>B</h3>", "<h3>C</h3>", "<h3>D</h3>"]
            .iter()
            .map(|h| html.find(h).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn page_defines_order_handler() {
        let brand = Brand {
            name: "VDR Candle Crafts".to_string(),
            tagline: "Handcrafted Candles for Every Moment".to_string(),
        };
        let page = render_page(Some(&brand), &[fragment_for("A")], &SiteConfig::default());
        assert!(page.contains("<title>VDR Candle Crafts</title>"));
        assert!(page.contains("function orderOnWhatsApp(productName, productPrice) {"));
        assert!(page.contains("https://wa.me/c/917983158309?text="));
        assert_eq!(page.matches("<script>").count(), 1);
        assert!(page.ends_with("</script></body></html>"));
    }
}
