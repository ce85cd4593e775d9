/// Visibility of the collapsible navigation menu.
///
/// `Unset` leaves the display to the stylesheet until the first toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuDisplay {
    #[default]
    Unset,
    Open,
    Closed,
}

impl MenuDisplay {
    pub fn toggled(self) -> Self {
        match self {
            MenuDisplay::Open => MenuDisplay::Closed,
            MenuDisplay::Unset | MenuDisplay::Closed => MenuDisplay::Open,
        }
    }

    /// Inline `display` value, if any.
    pub fn css_display(self) -> Option<&'static str> {
        match self {
            MenuDisplay::Unset => None,
            MenuDisplay::Open => Some("flex"),
            MenuDisplay::Closed => Some("none"),
        }
    }
}

/// Element id targeted by an in-page anchor (`#products` -> `products`).
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_toggle_opens() {
        assert_eq!(MenuDisplay::Unset.toggled(), MenuDisplay::Open);
        assert_eq!(MenuDisplay::Open.toggled(), MenuDisplay::Closed);
        assert_eq!(MenuDisplay::Closed.toggled(), MenuDisplay::Open);
    }

    #[test]
    fn display_values() {
        assert_eq!(MenuDisplay::Unset.css_display(), None);
        assert_eq!(MenuDisplay::Open.css_display(), Some("flex"));
        assert_eq!(MenuDisplay::Closed.css_display(), Some("none"));
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#contact"), Some("contact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com"), None);
    }
}
