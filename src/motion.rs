use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config;

// Viewport-triggered entrance animations. A `Reveal` wrapper watches its
// own position against the window on scroll and resize events and applies
// its animation class once the node enters the lower part of the viewport.
// The class sticks after the first trigger.

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    Fade,
    FadeUp,
    FadeDown,
    SlideLeft,
    SlideRight,
    ScaleIn,
}

impl Entrance {
    fn class(self) -> &'static str {
        match self {
            Entrance::Fade => "reveal-fade",
            Entrance::FadeUp => "reveal-fade-up",
            Entrance::FadeDown => "reveal-fade-down",
            Entrance::SlideLeft => "reveal-slide-left",
            Entrance::SlideRight => "reveal-slide-right",
            Entrance::ScaleIn => "reveal-scale-in",
        }
    }
}

pub fn in_lower_viewport(rect_top: f64, viewport_height: f64) -> bool {
    rect_top <= viewport_height * config::REVEAL_VIEWPORT_FRACTION
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(Entrance::FadeUp)]
    pub entrance: Entrance,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let revealed = Rc::new(Cell::new(false));

                let check: Rc<dyn Fn()> = {
                    let window = window.clone();
                    let revealed = revealed.clone();
                    Rc::new(move || {
                        if revealed.get() {
                            return;
                        }
                        if let Some(element) = node.cast::<Element>() {
                            let viewport_height = window
                                .inner_height()
                                .ok()
                                .and_then(|h| h.as_f64())
                                .unwrap_or(0.0);
                            let rect = element.get_bounding_client_rect();
                            if in_lower_viewport(rect.top(), viewport_height) {
                                revealed.set(true);
                                visible.set(true);
                            }
                        }
                    })
                };

                let callback = {
                    let check = check.clone();
                    Closure::wrap(Box::new(move || check()) as Box<dyn FnMut()>)
                };
                window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .unwrap();
                window
                    .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
                    .unwrap();

                // Anything already on screen reveals without waiting for a
                // scroll event.
                check();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("animation-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.entrance.class(),
                (*visible).then(|| "is-visible"),
                props.class.clone(),
            )}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_only_inside_the_lower_viewport_fraction() {
        assert!(in_lower_viewport(0.0, 1000.0));
        assert!(in_lower_viewport(899.0, 1000.0));
        assert!(in_lower_viewport(-250.0, 1000.0));
        assert!(!in_lower_viewport(901.0, 1000.0));
        assert!(!in_lower_viewport(1500.0, 1000.0));
    }
}
