//! Product cards rendered from `ProductFragment`s.

use common::fragment::{ImageArea, PriceLine, ProductFragment};
use web_sys::HtmlImageElement;
use yew::prelude::*;

use super::state::CatalogComponent;
use crate::helpers::open_in_new_context;

pub fn view(component: &CatalogComponent, _ctx: &Context<CatalogComponent>) -> Html {
    html! {
        <div class="products-grid" id="productsGrid" ref={component.grid_ref.clone()}>
            { for component.fragments.iter().map(product_card) }
        </div>
    }
}

fn product_card(fragment: &ProductFragment) -> Html {
    let onclick = {
        let url = fragment.action.inquiry_url.clone();
        Callback::from(move |_: MouseEvent| open_in_new_context(&url))
    };

    html! {
        <div class="product-card">
            <div class="product-image">{ image_area(&fragment.image) }</div>
            <div class="product-info">
                <h3>{ fragment.name.clone() }</h3>
                <p class="product-category">{ fragment.category.clone() }</p>
                <p>{ fragment.description.clone() }</p>
                {
                    match &fragment.details {
                        Some(details) => html! { <p class="product-details">{ details.clone() }</p> },
                        None => html! {},
                    }
                }
                <div class="product-price">{ price_line(&fragment.price) }</div>
                <button class="btn btn-primary" {onclick}>
                    { fragment.action.label.clone() }
                </button>
            </div>
        </div>
    }
}

fn image_area(image: &ImageArea) -> Html {
    match image {
        ImageArea::Glyph(glyph) => html! { <>{ glyph.clone() }</> },
        ImageArea::Picture {
            src,
            alt,
            fallback_src,
        } => {
            let onerror = {
                let fallback = fallback_src.clone();
                Callback::from(move |e: Event| {
                    let img: HtmlImageElement = e.target_unchecked_into();
                    if img.src() != fallback {
                        img.set_src(&fallback);
                    }
                })
            };
            html! { <img src={src.clone()} alt={alt.clone()} {onerror} /> }
        }
    }
}

fn price_line(price: &PriceLine) -> Html {
    match &price.original {
        Some(original) => html! {
            <>
                <span class="original-price">{ original.clone() }</span>
                { " " }
                { price.current.clone() }
            </>
        },
        None => html! { <>{ price.current.clone() }</> },
    }
}
