use yew::prelude::*;

use crate::components::button::Button;
use crate::content::{ButtonSpec, ImageSpec, PropertyCard};
use crate::motion::Reveal;

// Property-type cards on the dark panel.

#[derive(Properties, PartialEq)]
pub struct ResidenceProps {
    #[prop_or_else(default_tagline)]
    pub tagline: String,
    #[prop_or_else(default_heading)]
    pub heading: String,
    #[prop_or_else(default_description)]
    pub description: String,
    #[prop_or_else(default_cards)]
    pub cards: Vec<PropertyCard>,
}

#[function_component(Residence)]
pub fn residence(props: &ResidenceProps) -> Html {
    html! {
        <section id="residences" class="residence-section">
            <div class="residence-glow left"></div>
            <div class="residence-glow right"></div>
            <div class="section-inner">
                <Reveal class={classes!("section-header", "on-dark")}>
                    <div class="section-tagline">
                        <span class="tagline-rule"></span>
                        <p>{ &props.tagline }</p>
                        <span class="tagline-rule"></span>
                    </div>
                    <h2>{ &props.heading }</h2>
                    <p class="section-description">{ &props.description }</p>
                </Reveal>
                <div class="residence-grid">
                    {
                        props.cards.iter().enumerate().map(|(index, card)| {
                            html! {
                                <Reveal
                                    key={card.heading.clone()}
                                    class={classes!("residence-card")}
                                    delay_ms={index as u32 * 150}
                                >
                                    <div class="residence-card-media">
                                        <img src={card.image.src.clone()} alt={card.image.alt.clone()} />
                                        <div class="residence-card-shade"></div>
                                        <span class="residence-card-badge">{ &card.tagline }</span>
                                    </div>
                                    <div class="residence-card-body">
                                        <h3>{ &card.heading }</h3>
                                        <p>{ &card.description }</p>
                                        <ul class="residence-card-features">
                                            {
                                                card.features.iter().map(|feature| {
                                                    html! {
                                                        <li key={feature.clone()}>
                                                            <span class="feature-dot"></span>
                                                            { feature }
                                                        </li>
                                                    }
                                                }).collect::<Html>()
                                            }
                                        </ul>
                                        <div class="residence-card-action">
                                            <Button
                                                spec={card.button.clone()}
                                                chevron={true}
                                                class={classes!("gold-link", "on-dark")}
                                            />
                                        </div>
                                    </div>
                                    <span class="card-accent-line bottom"></span>
                                </Reveal>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

pub fn default_tagline() -> String {
    "Property Types".into()
}

pub fn default_heading() -> String {
    "Explore Our Residence Options".into()
}

pub fn default_description() -> String {
    "Discover a curated selection of residence types designed to suit your \
     lifestyle and elevate your living experience."
        .into()
}

pub fn default_cards() -> Vec<PropertyCard> {
    vec![
        PropertyCard {
            tagline: "Essential".into(),
            image: ImageSpec::new(
                "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=800&q=80",
                "Modern 2-bedroom apartment living room",
            ),
            heading: "2-Bedroom Apartments".into(),
            description: "Thoughtfully designed spaces with spacious living areas and \
                          premium modern amenities."
                .into(),
            features: vec![
                "Smart home integration".into(),
                "Premium finishes".into(),
                "Private balcony".into(),
            ],
            button: ButtonSpec::link("View Floor Plans").to_url("#residences"),
        },
        PropertyCard {
            tagline: "Premium".into(),
            image: ImageSpec::new(
                "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800&q=80",
                "Spacious 3-bedroom apartment interior",
            ),
            heading: "3-Bedroom Apartments".into(),
            description: "Expansive layouts offering more space for your family with \
                          enhanced luxury features."
                .into(),
            features: vec![
                "Home automation".into(),
                "Walk-in closets".into(),
                "Gourmet kitchen".into(),
            ],
            button: ButtonSpec::link("View Floor Plans").to_url("#residences"),
        },
        PropertyCard {
            tagline: "Presidential".into(),
            image: ImageSpec::new(
                "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?w=800&q=80",
                "Luxury penthouse with panoramic city view",
            ),
            heading: "Luxury Penthouses".into(),
            description: "Experience the pinnacle of urban living with exclusive top-tier \
                          amenities and panoramic views."
                .into(),
            features: vec![
                "Private elevator".into(),
                "Rooftop terrace".into(),
                "Concierge service".into(),
            ],
            button: ButtonSpec::link("View Floor Plans").to_url("#residences"),
        },
    ]
}
