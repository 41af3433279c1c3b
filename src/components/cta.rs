use yew::prelude::*;

use crate::components::button::Button;
use crate::content::ButtonSpec;
use crate::motion::{Entrance, Reveal};

// Closing call-to-action band with the trust indicator row.

#[derive(Clone, PartialEq)]
pub struct CtaStat {
    pub value: String,
    pub label: String,
}

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    #[prop_or_else(default_headers)]
    pub headers: Vec<String>,
    #[prop_or_else(default_description)]
    pub description: String,
    #[prop_or_else(default_buttons)]
    pub buttons: Vec<ButtonSpec>,
    #[prop_or_else(default_stats)]
    pub stats: Vec<CtaStat>,
}

#[function_component(Cta)]
pub fn cta(props: &CtaProps) -> Html {
    html! {
        <section id="contact" class="cta-section">
            <div class="cta-glow left"></div>
            <div class="cta-glow right"></div>
            <span class="cta-edge top"></span>
            <span class="cta-edge bottom"></span>
            <div class="section-inner">
                <div class="cta-body">
                    <h1 class="cta-heading">
                        {
                            props.headers.iter().enumerate().map(|(index, heading)| {
                                let entrance = if index % 2 == 0 {
                                    Entrance::SlideRight
                                } else {
                                    Entrance::SlideLeft
                                };
                                html! {
                                    <Reveal
                                        key={heading.clone()}
                                        entrance={entrance}
                                        class={classes!("cta-heading-row")}
                                        delay_ms={index as u32 * 150}
                                    >
                                        {
                                            heading.split_whitespace().enumerate().map(|(word_index, word)| {
                                                let class = (word_index % 3 == 1)
                                                    .then(|| "text-gradient-gold");
                                                html! {
                                                    <span key={word_index} class={classes!(class)}>
                                                        { word }{ " " }
                                                    </span>
                                                }
                                            }).collect::<Html>()
                                        }
                                    </Reveal>
                                }
                            }).collect::<Html>()
                        }
                    </h1>

                    <Reveal class={classes!("cta-description")} delay_ms={400}>
                        <p>{ &props.description }</p>
                    </Reveal>

                    <Reveal class={classes!("cta-actions")} delay_ms={600}>
                        {
                            props.buttons.iter().enumerate().map(|(index, button)| {
                                let class = if index == 0 { "cta-button-gold" } else { "cta-button-outline" };
                                html! {
                                    <Button
                                        key={button.title.clone()}
                                        spec={button.clone()}
                                        class={classes!(class)}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </Reveal>

                    <Reveal entrance={Entrance::Fade} class={classes!("cta-stats")} delay_ms={800}>
                        {
                            props.stats.iter().enumerate().map(|(index, stat)| {
                                html! {
                                    <>
                                        {
                                            if index > 0 {
                                                html! { <div key={format!("rule-{index}")} class="cta-stat-rule"></div> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                        <div key={stat.label.clone()} class="cta-stat">
                                            <p class="cta-stat-value">{ &stat.value }</p>
                                            <p class="cta-stat-label">{ &stat.label }</p>
                                        </div>
                                    </>
                                }
                            }).collect::<Html>()
                        }
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

pub fn default_headers() -> Vec<String> {
    vec!["Your Dream Home".into(), "Awaits You".into()]
}

pub fn default_description() -> String {
    "Ready to experience intelligent luxury? Contact us today to schedule a \
     private tour and discover how The Residence will transform your lifestyle."
        .into()
}

pub fn default_buttons() -> Vec<ButtonSpec> {
    vec![
        ButtonSpec::primary("Schedule Private Tour").to_url("#location"),
        ButtonSpec::secondary("Download Brochure").to_url("#footer"),
    ]
}

pub fn default_stats() -> Vec<CtaStat> {
    vec![
        CtaStat {
            value: "50+".into(),
            label: "Units Available".into(),
        },
        CtaStat {
            value: "2025".into(),
            label: "Completion".into(),
        },
        CtaStat {
            value: "5\u{2605}".into(),
            label: "Smart Living".into(),
        },
    ]
}
