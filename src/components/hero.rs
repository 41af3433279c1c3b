use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::button::Button;
use crate::components::icons::{Icon, IconGlyph};
use crate::content::{ButtonSpec, ImageSpec};

// Hero banner with the video modal. The embedded frame only mounts once
// the modal opens; a spinner stays up until the frame fires its load
// event. There is no timeout for a frame that never loads.

// The frame stays hidden until its load event arrives; without the event
// the spinner simply persists.
pub(crate) fn frame_class(loaded: bool) -> &'static str {
    if loaded {
        "visible"
    } else {
        "hidden"
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or_else(default_heading)]
    pub heading: String,
    #[prop_or_else(default_description)]
    pub description: String,
    #[prop_or_else(default_buttons)]
    pub buttons: Vec<ButtonSpec>,
    #[prop_or_else(default_image)]
    pub image: ImageSpec,
    #[prop_or_else(default_video)]
    pub video: String,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let modal_open = use_state_eq(|| false);
    let iframe_loaded = use_state_eq(|| false);

    // Escape dismisses the modal while it is up.
    {
        let dep = *modal_open;
        let modal_open = modal_open.clone();
        use_effect_with_deps(
            move |&open| {
                let document = web_sys::window().unwrap().document().unwrap();
                let keydown_callback = open.then(|| {
                    let modal_open = modal_open.clone();
                    let callback =
                        Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
                            if event.key() == "Escape" {
                                modal_open.set(false);
                            }
                        }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
                    document
                        .add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    callback
                });
                let document_clone = document;
                move || {
                    if let Some(callback) = keydown_callback {
                        let _ = document_clone.remove_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            dep,
        );
    }

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(false))
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_iframe_load = {
        let iframe_loaded = iframe_loaded.clone();
        Callback::from(move |_: Event| iframe_loaded.set(true))
    };

    let heading_words = props
        .heading
        .split_whitespace()
        .enumerate()
        .map(|(index, word)| {
            let class = (index == 1 || index == 3).then(|| "text-gradient-gold");
            html! {
                <span key={index} class={classes!(class)}>{ word }{ " " }</span>
            }
        })
        .collect::<Html>();

    html! {
        <section id="hero" class="hero">
            <div class="hero-backdrop"></div>
            <div class="hero-inner">
                <div class="hero-copy">
                    <div class="hero-tagline anim-slide-right" style="animation-delay: 200ms;">
                        <span>{"Premium Smart Living"}</span>
                    </div>
                    <h1 class="hero-heading anim-fade-up" style="animation-delay: 300ms;">
                        { heading_words }
                    </h1>
                    <p class="hero-description anim-fade-up" style="animation-delay: 500ms;">
                        { &props.description }
                    </p>
                    <div class="hero-actions anim-fade-up" style="animation-delay: 700ms;">
                        {
                            props.buttons.iter().enumerate().map(|(index, button)| {
                                let class = if index == 0 { "hero-button-gold" } else { "hero-button-outline" };
                                html! {
                                    <Button
                                        key={button.title.clone()}
                                        spec={button.clone()}
                                        class={classes!(class)}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <button class="hero-media anim-scale-in" style="animation-delay: 400ms;" onclick={open_modal}>
                <div class="hero-media-frame">
                    <img src={props.image.src.clone()} alt={props.image.alt.clone()} />
                    <span class="hero-media-overlay"></span>
                    <span class="hero-media-accent"></span>
                </div>
                <span class="hero-play">
                    <span class="hero-play-ring"></span>
                    <IconGlyph icon={Icon::CirclePlay} class={classes!("hero-play-icon")} />
                    <span class="hero-play-label">{"Watch Video"}</span>
                </span>
            </button>

            {
                if *modal_open {
                    html! {
                        <div class="video-modal" onclick={close_modal.clone()}>
                            <div class="video-modal-content" onclick={keep_open}>
                                <button
                                    class="video-modal-close"
                                    aria-label="Close video"
                                    onclick={close_modal.clone()}
                                >
                                    {"\u{00d7}"}
                                </button>
                                {
                                    if !*iframe_loaded {
                                        html! {
                                            <IconGlyph
                                                icon={Icon::Spinner}
                                                class={classes!("video-spinner")}
                                            />
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                <iframe
                                    class={classes!("video-frame", frame_class(*iframe_loaded))}
                                    src={props.video.clone()}
                                    allow="autoplay; encrypted-media; picture-in-picture"
                                    allowfullscreen={true}
                                    onload={on_iframe_load}
                                ></iframe>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

pub fn default_heading() -> String {
    "Live Intelligently, Live Exceptionally".into()
}

pub fn default_description() -> String {
    "The Residence, kompleks residential smart home pertama di Medan, Indonesia. \
     Experience the future of luxury living with cutting-edge technology seamlessly \
     integrated into every aspect of your home."
        .into()
}

pub fn default_buttons() -> Vec<ButtonSpec> {
    vec![
        ButtonSpec::primary("Schedule a Tour").to_url("#contact"),
        ButtonSpec::secondary("Explore Residences").to_url("#residences"),
    ]
}

pub fn default_image() -> ImageSpec {
    ImageSpec::new(
        "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=1920&q=80",
        "Luxury modern residence exterior at dusk",
    )
}

pub fn default_video() -> String {
    "https://www.youtube.com/embed/8DKLYsikxTs?si=Ch9W0KrDWWUiCMMW".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_stays_hidden_until_the_load_signal() {
        // modal open, no load signal yet: placeholder up, frame hidden
        assert_eq!(frame_class(false), "hidden");
        // load signal received: frame revealed
        assert_eq!(frame_class(true), "visible");
    }
}
