//! The contact form: three free-text fields turned into a WhatsApp message.

use crate::whatsapp::WhatsAppLinks;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Greeting line, then `Name:`, `Email:`, a blank line and the `Message:` body.
    pub fn compose(&self, brand: &str) -> String {
        format!(
            "Hello {}!\n\nName: {}\nEmail: {}\n\nMessage:\n{}",
            brand, self.name, self.email, self.message
        )
    }

    /// Builds the contact link and clears every field.
    pub fn submit(&mut self, brand: &str, links: &WhatsAppLinks) -> String {
        let submitted = std::mem::take(self);
        links.contact_url(&submitted.compose(brand))
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whatsapp::decode_text_param;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            message: "Do you take bulk orders?\nAround 40 jars.".to_string(),
        }
    }

    #[test]
    fn message_layout() {
        assert_eq!(
            filled().compose("VDR Candle Crafts"),
            "Hello VDR Candle Crafts!\n\nName: Asha\nEmail: asha@example.com\n\nMessage:\nDo you take bulk orders?\nAround 40 jars."
        );
    }

    #[test]
    fn submit_targets_contact_number_and_clears_fields() {
        let links = WhatsAppLinks::new("917983158309");
        let mut form = filled();
        let expected = form.compose("VDR Candle Crafts");

        let url = form.submit("VDR Candle Crafts", &links);

        assert!(url.starts_with("https://wa.me/917983158309?text="));
        assert_eq!(decode_text_param(&url).unwrap(), expected);
        assert!(form.is_empty());
        assert_eq!(form, ContactForm::default());
    }
}
