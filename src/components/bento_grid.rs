use yew::prelude::*;

use crate::components::button::Button;
use crate::components::icons::{Icon, IconGlyph};
use crate::content::{ButtonSpec, FeatureCard, ImageSpec};
use crate::motion::Reveal;

// Smart-home feature grid. Cards distribute two per column, in order, so
// the column count is ceil(len / 2).

pub(crate) fn column_pairs(len: usize) -> Vec<(usize, Option<usize>)> {
    let columns = (len + 1) / 2;
    (0..columns)
        .map(|col| {
            let first = col * 2;
            let second = if first + 1 < len { Some(first + 1) } else { None };
            (first, second)
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct BentoGridProps {
    #[prop_or_else(default_tagline)]
    pub tagline: String,
    #[prop_or_else(default_heading)]
    pub heading: String,
    #[prop_or_else(default_description)]
    pub description: String,
    #[prop_or_else(default_cards)]
    pub cards: Vec<FeatureCard>,
}

#[function_component(BentoGrid)]
pub fn bento_grid(props: &BentoGridProps) -> Html {
    html! {
        <section id="smart-home" class="bento-section">
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
                <div class="bento-grid">
                    {
                        column_pairs(props.cards.len()).into_iter().map(|(first, second)| {
                            html! {
                                <div key={first} class="bento-column">
                                    { card(&props.cards[first], first) }
                                    {
                                        match second {
                                            Some(index) => card(&props.cards[index], index),
                                            None => html! {},
                                        }
                                    }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

fn card(card: &FeatureCard, index: usize) -> Html {
    html! {
        <Reveal key={index} class={classes!("bento-card")} delay_ms={index as u32 * 100}>
            <span class="card-accent-line"></span>
            <div class="bento-card-body">
                {
                    match card.icon {
                        Some(icon) => html! {
                            <div class="bento-card-icon">
                                <IconGlyph icon={icon} class={classes!("gold-glyph")} />
                            </div>
                        },
                        None => html! {},
                    }
                }
                {
                    match &card.tagline {
                        Some(tagline) => html! { <p class="bento-card-tagline">{ tagline }</p> },
                        None => html! {},
                    }
                }
                <h3>{ &card.heading }</h3>
                <p class="bento-card-description">{ &card.description }</p>
                <div class="bento-card-action">
                    <Button spec={card.button.clone()} chevron={true} class={classes!("gold-link")} />
                </div>
            </div>
            {
                match &card.image {
                    Some(image) => html! {
                        <div class="bento-card-media">
                            <img src={image.src.clone()} alt={image.alt.clone()} />
                        </div>
                    },
                    None => html! {},
                }
            }
        </Reveal>
    }
}

pub fn default_tagline() -> String {
    "Smart Home Features".into()
}

pub fn default_heading() -> String {
    "Experience Intelligent Living".into()
}

pub fn default_description() -> String {
    "Explore the cutting-edge smart home features that redefine modern living \
     with seamless technology integration."
        .into()
}

pub fn default_cards() -> Vec<FeatureCard> {
    vec![
        FeatureCard {
            icon: Some(Icon::Microphone),
            image: None,
            tagline: None,
            heading: "Voice-Activated Controls".into(),
            description: "Effortlessly manage your home environment using simple voice \
                          commands with integrated AI assistants."
                .into(),
            button: ButtonSpec::link("Learn More").to_url("#smart-home"),
        },
        FeatureCard {
            icon: None,
            image: Some(ImageSpec::new(
                "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&q=80",
                "Smart thermostat climate control",
            )),
            tagline: None,
            heading: "Intelligent Climate Control".into(),
            description: "Maintain the perfect ambiance with AI-powered climate systems \
                          that learn your preferences."
                .into(),
            button: ButtonSpec::link("Learn More").to_url("#smart-home"),
        },
        FeatureCard {
            icon: None,
            image: Some(ImageSpec::new(
                "https://images.unsplash.com/photo-1558002038-1055907df827?w=800&q=80",
                "Smart home security camera system",
            )),
            tagline: None,
            heading: "Advanced Security".into(),
            description: "Protect your home with state-of-the-art surveillance systems \
                          providing real-time monitoring and alerts."
                .into(),
            button: ButtonSpec::link("Learn More").to_url("#smart-home"),
        },
        FeatureCard {
            icon: Some(Icon::Bolt),
            image: None,
            tagline: None,
            heading: "Smart Energy Management".into(),
            description: "Optimize energy consumption with intelligent systems that adapt \
                          to your lifestyle automatically."
                .into(),
            button: ButtonSpec::link("Learn More").to_url("#smart-home"),
        },
        FeatureCard {
            icon: Some(Icon::Sun),
            image: None,
            tagline: None,
            heading: "Ambient Lighting".into(),
            description: "Create the perfect atmosphere with customizable smart lighting \
                          solutions for every mood."
                .into(),
            button: ButtonSpec::link("Learn More").to_url("#smart-home"),
        },
        FeatureCard {
            icon: None,
            image: Some(ImageSpec::new(
                "https://images.unsplash.com/photo-1593784991095-a205069470b6?w=800&q=80",
                "Home entertainment system with large TV",
            )),
            tagline: None,
            heading: "Integrated Entertainment".into(),
            description: "Enjoy seamless entertainment with integrated home theater and \
                          multi-room audio systems."
                .into(),
            button: ButtonSpec::link("Learn More").to_url("#smart-home"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_count_is_ceil_of_half() {
        assert_eq!(column_pairs(0).len(), 0);
        assert_eq!(column_pairs(1).len(), 1);
        assert_eq!(column_pairs(2).len(), 1);
        assert_eq!(column_pairs(5).len(), 3);
        assert_eq!(column_pairs(6).len(), 3);
        assert_eq!(column_pairs(7).len(), 4);
    }

    #[test]
    fn every_index_lands_in_exactly_one_column_in_order() {
        for len in 0..=9 {
            let mut seen = Vec::new();
            for (col, (first, second)) in column_pairs(len).into_iter().enumerate() {
                assert_eq!(first, col * 2);
                seen.push(first);
                if let Some(second) = second {
                    assert_eq!(second, col * 2 + 1);
                    seen.push(second);
                }
            }
            assert_eq!(seen, (0..len).collect::<Vec<_>>());
        }
    }

    #[test]
    fn odd_tail_column_holds_a_single_card() {
        let pairs = column_pairs(5);
        assert_eq!(pairs.last(), Some(&(4, None)));
    }
}
