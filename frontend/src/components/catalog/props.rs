use common::config::SiteConfig;
use yew::prelude::*;

/// Where the grid takes its products from.
///
/// The page's `App` always uses `Remote`. `Bundled` is opt-in for pages
/// built without a `products.json` to fetch:
/// `<CatalogComponent mode={CatalogMode::Bundled} />`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum CatalogMode {
    /// Fetch `SiteConfig::catalog_url` after the first render.
    #[default]
    Remote,
    /// Use the list compiled into the page.
    Bundled,
}

#[derive(Properties, PartialEq, Clone)]
pub struct CatalogProps {
    #[prop_or_default]
    pub config: SiteConfig,

    #[prop_or_default]
    pub mode: CatalogMode,
}
