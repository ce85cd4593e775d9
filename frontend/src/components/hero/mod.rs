use log::info;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlMediaElement;
use yew::prelude::*;

const BACKGROUND_VIDEO: &str = "media/hero_video.mp4";

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub brand: AttrValue,
    pub tagline: AttrValue,
}

/// Landing section with a muted background video.
pub struct Hero {
    video_ref: NodeRef,
}

impl Component for Hero {
    type Message = ();
    type Properties = HeroProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            video_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <section id="home" class="hero">
                <video
                    class="hero-bg-video"
                    ref={self.video_ref.clone()}
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                >
                    <source src={BACKGROUND_VIDEO} type="video/mp4" />
                </video>
                <div class="hero-content">
                    <h1>{ props.brand.clone() }</h1>
                    <p>{ props.tagline.clone() }</p>
                </div>
            </section>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(video) = self.video_ref.cast::<HtmlMediaElement>() {
            start_background_video(&video);
        }
    }
}

/// Mutes `video` and asks it to play.
///
/// Yew applies `muted` in the markup as an attribute only, which leaves the
/// element's `muted` property false, so it is set here before `play()`.
/// Browsers may still refuse unattended playback; the page works without it.
fn start_background_video(video: &HtmlMediaElement) {
    video.set_muted(true);
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                info!("Background video autoplay rejected: {:?}", e);
            }
        }),
        Err(e) => info!("Background video autoplay unavailable: {:?}", e),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn background_video_is_muted_before_playing() {
        let document = web_sys::window().unwrap().document().unwrap();
        let video: HtmlMediaElement = document
            .create_element("video")
            .unwrap()
            .dyn_into()
            .unwrap();
        assert!(!video.muted());

        start_background_video(&video);

        assert!(video.muted());
    }
}
