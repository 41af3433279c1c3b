use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::components::button::Button;
use crate::config;
use crate::content::{AmenitySection, ButtonSpec, ImageSpec};
use crate::motion::Reveal;

// Stacked amenity sections that compress as the container scrolls past.
// The scale of every section is a pure function of the normalized scroll
// progress, recomputed from the container geometry on each scroll event.

// Progress runs from "container top at viewport top" to "container bottom
// at AMENITIES_END_OFFSET of the viewport height".
pub(crate) fn scroll_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let range = rect_height - viewport_height * config::AMENITIES_END_OFFSET;
    if range <= 0.0 {
        return if rect_top <= 0.0 { 1.0 } else { 0.0 };
    }
    (-rect_top / range).clamp(0.0, 1.0)
}

// Sections before the last interpolate 1.0 -> 0.8 across their own
// 1/total slice of the progress range; the last section never shrinks.
pub(crate) fn section_scale(index: usize, total: usize, progress: f64) -> f64 {
    if total == 0 || index + 1 >= total {
        return 1.0;
    }
    let fraction = 1.0 / total as f64;
    let start = fraction * index as f64;
    let local = ((progress - start) / fraction).clamp(0.0, 1.0);
    1.0 - 0.2 * local
}

#[derive(Properties, PartialEq)]
pub struct AmenitiesProps {
    #[prop_or_else(default_tagline)]
    pub tagline: String,
    #[prop_or_else(default_heading)]
    pub heading: String,
    #[prop_or_else(default_description)]
    pub description: String,
    #[prop_or_else(default_feature_sections)]
    pub feature_sections: Vec<AmenitySection>,
}

#[function_component(Amenities)]
pub fn amenities(props: &AmenitiesProps) -> Html {
    let container_ref = use_node_ref();
    let progress = use_state_eq(|| 0.0f64);

    {
        let container_ref = container_ref.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let measure: Rc<dyn Fn()> = {
                    let window = window.clone();
                    Rc::new(move || {
                        if let Some(element) = container_ref.cast::<Element>() {
                            let viewport_height = window
                                .inner_height()
                                .ok()
                                .and_then(|h| h.as_f64())
                                .unwrap_or(0.0);
                            let rect = element.get_bounding_client_rect();
                            progress.set(scroll_progress(
                                rect.top(),
                                rect.height(),
                                viewport_height,
                            ));
                        }
                    })
                };

                let callback = {
                    let measure = measure.clone();
                    Closure::wrap(Box::new(move || measure()) as Box<dyn FnMut()>)
                };
                window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .unwrap();
                window
                    .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
                    .unwrap();

                measure();

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

    let total = props.feature_sections.len();

    html! {
        <section id="amenities" class="amenities-section">
            <div class="amenities-blob top"></div>
            <div class="amenities-blob bottom"></div>
            <div class="amenities-blob center"></div>
            <div class="section-inner">
                <Reveal class={classes!("section-header")}>
                    <div class="section-tagline">
                        <span class="tagline-rule"></span>
                        <p>{ &props.tagline }</p>
                        <span class="tagline-rule"></span>
                    </div>
                    <h2>{ &props.heading }</h2>
                    <p class="section-description">{ &props.description }</p>
                </Reveal>
                <div ref={container_ref} class="amenities-stack">
                    {
                        props.feature_sections.iter().enumerate().map(|(index, section)| {
                            let scale = section_scale(index, total, *progress);
                            feature_section(section, index, scale)
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

fn feature_section(section: &AmenitySection, index: usize, scale: f64) -> Html {
    let is_even = index % 2 == 0;
    let style = format!("transform: scale({scale:.4});");

    html! {
        <Reveal
            key={section.heading.clone()}
            class={classes!("amenity-card-slot")}
            delay_ms={index as u32 * 100}
        >
            <div
                class={classes!("amenity-card", if is_even { "even" } else { "odd" })}
                style={style}
            >
                <div class="amenity-card-copy">
                    <div class="amenity-card-rule"></div>
                    <p class="amenity-card-tagline">{ &section.tagline }</p>
                    <h3>{ &section.heading }</h3>
                    <p class="amenity-card-description">{ &section.description }</p>
                    <div class="amenity-card-actions">
                        {
                            section.buttons.iter().enumerate().map(|(button_index, button)| {
                                html! {
                                    <Button
                                        key={button.title.clone()}
                                        spec={button.clone()}
                                        chevron={button_index != 0}
                                        class={classes!(
                                            if button_index == 0 { "amenity-button-dark" } else { "gold-link" },
                                        )}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div class="amenity-card-media">
                    <img src={section.image.src.clone()} alt={section.image.alt.clone()} />
                    <div class="amenity-card-shade"></div>
                    <span class="amenity-card-edge"></span>
                </div>
            </div>
        </Reveal>
    }
}

pub fn default_tagline() -> String {
    "Amenities & Facilities".into()
}

pub fn default_heading() -> String {
    "World-Class Amenities".into()
}

pub fn default_description() -> String {
    "Discover a range of exceptional amenities designed to enhance your living \
     experience and elevate everyday moments."
        .into()
}

pub fn default_feature_sections() -> Vec<AmenitySection> {
    vec![
        AmenitySection {
            tagline: "Social Hub".into(),
            heading: "Modern Clubhouse".into(),
            description: "Explore our state-of-the-art clubhouse featuring a premium fitness \
                          center, elegant lounge areas, and versatile event spaces designed \
                          for residents who appreciate the finer things in life."
                .into(),
            buttons: vec![
                ButtonSpec::secondary("Explore Clubhouse").to_url("#amenities"),
                ButtonSpec::link("View Gallery").to_url("#hero"),
            ],
            image: ImageSpec::new(
                "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?w=1200&q=80",
                "Modern fitness center with gym equipment",
            ),
        },
        AmenitySection {
            tagline: "Productivity".into(),
            heading: "Co-Working Spaces".into(),
            description: "Find your productivity zone in our dedicated co-working spaces, \
                          equipped with high-speed fiber internet, private meeting rooms, \
                          and comfortable workstations designed for the modern professional."
                .into(),
            buttons: vec![
                ButtonSpec::secondary("Tour Spaces").to_url("#amenities"),
                ButtonSpec::link("Learn More").to_url("#amenities"),
            ],
            image: ImageSpec::new(
                "https://images.unsplash.com/photo-1497366216548-37526070297c?w=1200&q=80",
                "Modern co-working office space",
            ),
        },
        AmenitySection {
            tagline: "Family Life".into(),
            heading: "Children Playground".into(),
            description: "The comfort and happiness of your children is our priority. Our \
                          dedicated playground area offers a safe, supervised, and fun \
                          environment for kids to play, learn, and make lasting friendships."
                .into(),
            buttons: vec![
                ButtonSpec::secondary("See Facilities").to_url("#amenities"),
                ButtonSpec::link("Safety Features").to_url("#amenities"),
            ],
            image: ImageSpec::new(
                "https://images.unsplash.com/photo-1576506295286-5cda18df43e7?w=1200&q=80",
                "Children playing on modern playground equipment",
            ),
        },
        AmenitySection {
            tagline: "Sustainability".into(),
            heading: "EV Charging Stations".into(),
            description: "Elevate your electric vehicle experience with our convenient \
                          Tesla-compatible charging stations. Embrace sustainable living \
                          without compromising on convenience or luxury."
                .into(),
            buttons: vec![
                ButtonSpec::secondary("View Stations").to_url("#amenities"),
                ButtonSpec::link("Green Initiative").to_url("#amenities"),
            ],
            image: ImageSpec::new(
                "https://images.unsplash.com/photo-1593941707882-a5bba14938c7?w=1200&q=80",
                "Electric vehicle charging at station",
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_scale(index: usize, total: usize, progress: f64) -> f64 {
        let local = ((progress - index as f64 / total as f64) * total as f64).clamp(0.0, 1.0);
        1.0 - 0.2 * local
    }

    #[test]
    fn scale_matches_the_interval_interpolation_law() {
        for total in 1usize..=6 {
            for index in 0..total.saturating_sub(1) {
                for step in 0..=100 {
                    let progress = step as f64 / 100.0;
                    let got = section_scale(index, total, progress);
                    let want = expected_scale(index, total, progress);
                    assert!(
                        (got - want).abs() < 1e-12,
                        "index {index} of {total} at {progress}: {got} != {want}"
                    );
                }
            }
        }
    }

    #[test]
    fn last_section_never_shrinks() {
        for total in 1..=6 {
            for step in 0..=100 {
                let progress = step as f64 / 100.0;
                assert_eq!(section_scale(total - 1, total, progress), 1.0);
            }
        }
    }

    #[test]
    fn scale_clamps_outside_the_section_interval() {
        // before its interval the section is full size, after it is 0.8
        assert_eq!(section_scale(1, 4, 0.0), 1.0);
        assert_eq!(section_scale(1, 4, 0.25), 1.0);
        assert!((section_scale(1, 4, 0.375) - 0.9).abs() < 1e-12);
        assert!((section_scale(1, 4, 0.5) - 0.8).abs() < 1e-12);
        assert!((section_scale(1, 4, 1.0) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn progress_clamps_and_handles_degenerate_ranges() {
        // container taller than the scroll range: interpolates and clamps
        assert_eq!(scroll_progress(200.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert!((scroll_progress(-700.0, 2000.0, 1000.0) - 0.5).abs() < 1e-12);
        assert_eq!(scroll_progress(-1400.0, 2000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-5000.0, 2000.0, 1000.0), 1.0);
        // degenerate range: collapses to the nearest endpoint
        assert_eq!(scroll_progress(10.0, 100.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(-10.0, 100.0, 1000.0), 1.0);
    }
}
