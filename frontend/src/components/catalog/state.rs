use common::fragment::ProductFragment;
use yew::prelude::*;

pub struct CatalogComponent {
    /// Rendered cards, in the order they were appended.
    pub fragments: Vec<ProductFragment>,

    /// The grid element; its presence is checked before a remote load.
    pub grid_ref: NodeRef,

    /// Guard so the catalog is requested only once per mount.
    pub loaded: bool,
}

impl CatalogComponent {
    pub fn new() -> Self {
        Self {
            fragments: Vec::new(),
            grid_ref: NodeRef::default(),
            loaded: false,
        }
    }
}
