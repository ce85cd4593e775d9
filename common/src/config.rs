//! Site-wide settings shared by the page and the server-rendered catalog.

use crate::whatsapp::WhatsAppLinks;

/// How a product card shows its picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMode {
    /// `<img>` at `{image_dir}/{id}.png`, falling back to a placeholder with the icon.
    Picture,
    /// Only the icon glyph.
    Glyph,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub brand_name: String,
    pub whatsapp: WhatsAppLinks,
    /// Location of the catalog document, relative to the page.
    pub catalog_url: String,
    pub image_dir: String,
    pub image_mode: ImageMode,
    /// Label of the per-product action control.
    pub order_label: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "VDR Candle Crafts".to_string(),
            whatsapp: WhatsAppLinks::new("917983158309"),
            catalog_url: "products.json".to_string(),
            image_dir: "media/product_images".to_string(),
            image_mode: ImageMode::Picture,
            order_label: "Order on WhatsApp".to_string(),
        }
    }
}
