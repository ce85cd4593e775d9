//! Product grid: loads the catalog once and renders one card per product.
//!
//! Responsibilities
//! - `Remote` mode: on first render, fetch the catalog document through
//!   `common::catalog::load_catalog` and append the resulting fragments.
//!   Failures are logged by the load routine and leave the grid empty.
//! - `Bundled` mode: render the in-memory product list synchronously when the
//!   component is created. Nothing selects it by default; a page opts in with
//!   the `mode` prop (see [`CatalogMode`]).

use yew::platform::spawn_local;
use yew::prelude::*;

use common::catalog::{load_catalog, render_products, RemoteCatalog, StaticCatalog};
use common::fragment::ProductFragment;

mod fetch;
mod messages;
mod props;
mod state;
mod update;
mod view;

use fetch::GlooFetch;
pub use messages::Msg;
pub use props::{CatalogMode, CatalogProps};
pub use state::CatalogComponent;

impl Component for CatalogComponent {
    type Message = Msg;
    type Properties = CatalogProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = CatalogComponent::new();

        if ctx.props().mode == CatalogMode::Bundled {
            let catalog = StaticCatalog::bundled();
            render_products(
                catalog.products_now(),
                &mut component.fragments,
                &ctx.props().config,
            );
            component.loaded = true;
        }

        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let config = ctx.props().config.clone();
            let grid_present = self.grid_ref.get().is_some();
            spawn_local(async move {
                let source = RemoteCatalog::new(GlooFetch, &config.catalog_url);
                let mut fragments: Vec<ProductFragment> = Vec::new();
                let count =
                    load_catalog(&source, grid_present.then_some(&mut fragments), &config).await;
                if count > 0 {
                    link.send_message(Msg::Loaded(fragments));
                }
            });
        }
    }
}
