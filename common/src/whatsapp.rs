//! WhatsApp deep links for product inquiries and general contact.
//!
//! Product inquiries target the shop's catalog (`https://wa.me/c/<number>`),
//! general contact targets the chat itself (`https://wa.me/<number>`). The
//! message travels percent-encoded in the `text` query parameter.

const WA_BASE: &str = "https://wa.me";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLinks {
    number: String,
}

impl WhatsAppLinks {
    pub fn new(number: &str) -> Self {
        Self {
            number: number.to_string(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Link opened by a product card's action control.
    pub fn product_inquiry_url(&self, name: &str, price: &str) -> String {
        format!(
            "{}/c/{}?text={}",
            WA_BASE,
            self.number,
            urlencoding::encode(&product_inquiry_message(name, price))
        )
    }

    /// Link opened by the contact form.
    pub fn contact_url(&self, message: &str) -> String {
        format!(
            "{}/{}?text={}",
            WA_BASE,
            self.number,
            urlencoding::encode(message)
        )
    }
}

pub fn product_inquiry_message(name: &str, price: &str) -> String {
    format!(
        "Hello! I'm interested in ordering {} ({}). Please share more details about this product.",
        name, price
    )
}

/// Extracts and decodes the `text` parameter of a link built above.
pub fn decode_text_param(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("text="))
        .and_then(|encoded| urlencoding::decode(encoded).ok())
        .map(|decoded| decoded.into_owned())
}
