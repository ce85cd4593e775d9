//! Browser side effects shared by the page components.

use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Opens `url` in a new browsing context (`window.open(url, "_blank")`).
pub fn open_in_new_context(url: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                warn!("Could not open {}: {:?}", url, e);
            }
        }
        None => warn!("No window available to open {}", url),
    }
}

/// Smoothly scrolls the element with the given id into view.
///
/// Returns `false` when no such element exists.
pub fn scroll_to_element(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
