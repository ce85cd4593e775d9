use yew::prelude::*;

use super::messages::Msg;
use super::state::CatalogComponent;

pub fn update(component: &mut CatalogComponent, _ctx: &Context<CatalogComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(fragments) => {
            // Appends; a second load duplicates the cards.
            component.fragments.extend(fragments);
            true
        }
    }
}
