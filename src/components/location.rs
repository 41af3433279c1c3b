use yew::prelude::*;

use crate::components::button::Button;
use crate::components::icons::{Icon, IconGlyph};
use crate::content::{ButtonSpec, ContactSpec, ImageSpec, LinkSpec};
use crate::motion::{Entrance, Reveal};

// Sales gallery contact block and the external map link.

#[derive(Clone, PartialEq)]
pub struct MapSpec {
    pub url: String,
    pub image: ImageSpec,
}

#[derive(Properties, PartialEq)]
pub struct LocationProps {
    #[prop_or_else(default_tagline)]
    pub tagline: String,
    #[prop_or_else(default_heading)]
    pub heading: String,
    #[prop_or_else(default_description)]
    pub description: String,
    #[prop_or_else(default_contacts)]
    pub contacts: Vec<ContactSpec>,
    #[prop_or_else(default_map)]
    pub map: MapSpec,
}

#[function_component(Location)]
pub fn location(props: &LocationProps) -> Html {
    html! {
        <section id="location" class="location-section">
            <div class="section-inner">
                <div class="location-grid">
                    <Reveal entrance={Entrance::SlideRight} class={classes!("location-intro")}>
                        <p class="location-tagline">{ &props.tagline }</p>
                        <h2>{ &props.heading }</h2>
                        <p class="location-description">{ &props.description }</p>
                    </Reveal>
                    <div class="location-contacts">
                        {
                            props.contacts.iter().enumerate().map(|(index, contact)| {
                                html! {
                                    <Reveal
                                        key={contact.title.clone()}
                                        class={classes!("contact-row")}
                                        delay_ms={300 + index as u32 * 100}
                                    >
                                        <div class="contact-badge">
                                            <IconGlyph icon={contact.icon} class={classes!("gold-glyph")} />
                                        </div>
                                        <div class="contact-body">
                                            <h3>{ &contact.title }</h3>
                                            {
                                                match &contact.description {
                                                    Some(description) => html! { <p>{ description }</p> },
                                                    None => html! {},
                                                }
                                            }
                                            {
                                                if let Some(button) = &contact.button {
                                                    html! {
                                                        <div class="contact-action">
                                                            <Button
                                                                spec={button.clone()}
                                                                class={classes!("contact-button-gold")}
                                                            />
                                                        </div>
                                                    }
                                                } else if let Some(link) = &contact.link {
                                                    html! {
                                                        <a class="contact-link" href={link.url.clone()}>
                                                            { &link.label }
                                                        </a>
                                                    }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </div>
                                    </Reveal>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <Reveal class={classes!("map-card")}>
                    <a href={props.map.url.clone()} class="map-link" target="_blank" rel="noopener noreferrer">
                        <img src={props.map.image.src.clone()} alt={props.map.image.alt.clone()} />
                        <div class="map-shade"></div>
                        <div class="map-pin">
                            <span class="map-pin-ring"></span>
                            <span class="map-pin-badge">
                                <IconGlyph icon={Icon::MapPin} class={classes!("map-pin-glyph")} />
                            </span>
                        </div>
                        <div class="map-caption">
                            <p class="map-caption-title">{"View on Google Maps"}</p>
                            <p class="map-caption-hint">{"Click to get directions"}</p>
                        </div>
                        <span class="map-accent"></span>
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

pub fn default_tagline() -> String {
    "Location".into()
}

pub fn default_heading() -> String {
    "Visit Our Sales Gallery".into()
}

pub fn default_description() -> String {
    "Schedule a private viewing and experience the future of smart living. Our \
     dedicated team is ready to guide you through every detail of The Residence."
        .into()
}

pub fn default_contacts() -> Vec<ContactSpec> {
    vec![
        ContactSpec {
            icon: Icon::Envelope,
            title: "Email Us".into(),
            description: None,
            link: Some(LinkSpec::new(
                "hello@theresidence.id",
                "mailto:hello@theresidence.id",
            )),
            button: None,
        },
        ContactSpec {
            icon: Icon::Phone,
            title: "Call Us".into(),
            description: None,
            link: Some(LinkSpec::new("+62 61 888 9999", "tel:+62618889999")),
            button: None,
        },
        ContactSpec {
            icon: Icon::MapPin,
            title: "Office".into(),
            description: Some("Jl. Gatot Subroto No. 123, Medan, Sumatera Utara 20112".into()),
            link: None,
            button: Some(
                ButtonSpec::primary("Get Directions")
                    .to_url("https://maps.google.com/?q=Medan,Indonesia"),
            ),
        },
    ]
}

pub fn default_map() -> MapSpec {
    MapSpec {
        url: "https://maps.google.com/?q=Medan,Indonesia".into(),
        image: ImageSpec::new(
            "https://images.unsplash.com/photo-1524661135-423995f22d0b?w=1600&q=80",
            "Aerial view of Medan city location",
        ),
    }
}
