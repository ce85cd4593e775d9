use crate::components::catalog::{CatalogComponent, CatalogMode};
use crate::components::contact::ContactComponent;
use crate::components::hero::Hero;
use crate::components::nav::NavBar;
use common::config::SiteConfig;
use yew::{html, Component, Context, Html};

const TAGLINE: &str = "Handcrafted Candles for Every Moment";

pub struct App {
    config: SiteConfig,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: SiteConfig::default(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let brand = self.config.brand_name.clone();

        html! {
            <>
                <NavBar brand={brand.clone()} />
                <Hero brand={brand.clone()} tagline={TAGLINE} />
                <section id="products" class="products">
                    <h2>{"Our Collection"}</h2>
                    <CatalogComponent config={self.config.clone()} mode={CatalogMode::Remote} />
                </section>
                <section id="about" class="about">
                    <h2>{"About Us"}</h2>
                    <p>{"Every candle is hand-poured in small batches with natural wax and long-lasting fragrances."}</p>
                </section>
                <section id="contact" class="contact">
                    <h2>{"Get in Touch"}</h2>
                    <ContactComponent config={self.config.clone()} />
                </section>
                <footer class="footer">
                    <p>{format!("© {}", brand)}</p>
                </footer>
            </>
        }
    }
}
