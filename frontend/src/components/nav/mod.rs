//! Top navigation: brand link, section anchors and the mobile menu toggle.
//!
//! Anchor clicks are intercepted to smooth-scroll to their section and close
//! the menu afterwards.

use common::nav::{anchor_target, MenuDisplay};
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::scroll_to_element;

const LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#products", "Products"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

pub enum Msg {
    ToggleMenu,
    ScrollTo(String),
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
}

pub struct NavBar {
    menu: MenuDisplay,
}

impl Component for NavBar {
    type Message = Msg;
    type Properties = NavProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            menu: MenuDisplay::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.menu = self.menu.toggled();
                true
            }
            Msg::ScrollTo(id) => {
                if scroll_to_element(&id) {
                    self.menu = MenuDisplay::Closed;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let menu_style = self.menu.css_display().map(|d| format!("display: {};", d));

        html! {
            <nav class="navbar">
                <div class="nav-container">
                    <a href="#home" class="logo" onclick={anchor_callback(link, "#home")}>
                        { ctx.props().brand.clone() }
                    </a>
                    <ul class="nav-menu" style={menu_style}>
                        {
                            for LINKS.iter().map(|(href, label)| html! {
                                <li>
                                    <a href={*href} class="nav-link" onclick={anchor_callback(link, href)}>
                                        { *label }
                                    </a>
                                </li>
                            })
                        }
                    </ul>
                    <div class="hamburger" onclick={link.callback(|_| Msg::ToggleMenu)}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </div>
            </nav>
        }
    }
}

fn anchor_callback(link: &Scope<NavBar>, href: &str) -> Callback<MouseEvent> {
    let target = anchor_target(href).map(str::to_string);
    link.batch_callback(move |e: MouseEvent| {
        e.prevent_default();
        target.clone().map(Msg::ScrollTo)
    })
}
