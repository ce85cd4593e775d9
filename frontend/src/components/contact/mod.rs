//! Contact form. Submitting opens a WhatsApp chat with the composed message
//! and clears the form.

use common::config::SiteConfig;
use common::contact::ContactForm;
use log::debug;
use yew::prelude::*;

use crate::helpers::open_in_new_context;

mod view;

pub enum Msg {
    UpdateName(String),
    UpdateEmail(String),
    UpdateMessage(String),
    Submit,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ContactProps {
    #[prop_or_default]
    pub config: SiteConfig,
}

pub struct ContactComponent {
    pub form: ContactForm,
}

impl Component for ContactComponent {
    type Message = Msg;
    type Properties = ContactProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateName(value) => self.form.name = value,
            Msg::UpdateEmail(value) => self.form.email = value,
            Msg::UpdateMessage(value) => self.form.message = value,
            Msg::Submit => {
                let config = &ctx.props().config;
                let url = self.form.submit(&config.brand_name, &config.whatsapp);
                debug!("Opening contact link");
                open_in_new_context(&url);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
