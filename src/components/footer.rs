use chrono::Datelike;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::content::{ButtonSpec, FooterColumn, LinkSpec, LogoSpec, SocialLink};
use crate::motion::{Entrance, Reveal};

// Footer with the newsletter capture. Submitting only writes a structured
// diagnostic record to the console log and clears the field; nothing is
// sent anywhere.

#[derive(Serialize)]
struct NewsletterSignup {
    email: String,
}

const CONFIRMATION_MS: u32 = 4_000;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_else(default_logo)]
    pub logo: LogoSpec,
    #[prop_or_else(default_newsletter_heading)]
    pub newsletter_heading: String,
    #[prop_or_else(default_newsletter_description)]
    pub newsletter_description: String,
    #[prop_or_else(default_input_placeholder)]
    pub input_placeholder: String,
    #[prop_or_else(default_button)]
    pub button: ButtonSpec,
    #[prop_or_else(default_column_links)]
    pub column_links: Vec<FooterColumn>,
    #[prop_or_else(default_social_links)]
    pub social_links: Vec<SocialLink>,
    #[prop_or_else(default_footer_text)]
    pub footer_text: String,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let email_input = use_state(String::new);
    let subscribed = use_state_eq(|| false);

    let on_email_input = {
        let email_input = email_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email_input.set(input.value());
        })
    };

    let on_submit = {
        let email_input = email_input.clone();
        let subscribed = subscribed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let signup = NewsletterSignup {
                email: (*email_input).clone(),
            };
            log::info!(
                "newsletter signup: {}",
                serde_json::to_string(&signup).unwrap_or_default()
            );
            email_input.set(String::new());
            subscribed.set(true);

            let subscribed = subscribed.clone();
            Timeout::new(CONFIRMATION_MS, move || {
                subscribed.set(false);
            })
            .forget();
        })
    };

    html! {
        <footer id="footer" class="site-footer">
            <div class="footer-newsletter">
                <div class="section-inner">
                    <div class="newsletter-row">
                        <Reveal entrance={Entrance::SlideRight} class={classes!("newsletter-copy")}>
                            <h2>{ &props.newsletter_heading }</h2>
                            <p>{ &props.newsletter_description }</p>
                        </Reveal>
                        <Reveal
                            entrance={Entrance::SlideLeft}
                            class={classes!("newsletter-form-wrap")}
                            delay_ms={200}
                        >
                            <form class="newsletter-form" onsubmit={on_submit}>
                                <input
                                    id="email"
                                    type="email"
                                    class="newsletter-input"
                                    placeholder={props.input_placeholder.clone()}
                                    value={(*email_input).clone()}
                                    oninput={on_email_input}
                                />
                                <button type="submit" class="btn btn-primary newsletter-button">
                                    { &props.button.title }
                                </button>
                            </form>
                            {
                                if *subscribed {
                                    html! {
                                        <p class="newsletter-confirmation">
                                            {"Subscribed. Watch your inbox for updates."}
                                        </p>
                                    }
                                } else {
                                    html! {
                                        <p class="newsletter-terms">
                                            {"By subscribing you agree to our "}
                                            <a href="#footer">{"Privacy Policy"}</a>
                                            {"."}
                                        </p>
                                    }
                                }
                            }
                        </Reveal>
                    </div>
                </div>
            </div>

            <div class="footer-main">
                <div class="section-inner">
                    <div class="footer-columns">
                        {
                            props.column_links.iter().enumerate().map(|(index, column)| {
                                html! {
                                    <Reveal
                                        key={column.title.clone()}
                                        class={classes!("footer-column")}
                                        delay_ms={index as u32 * 100}
                                    >
                                        <h3>{ &column.title }</h3>
                                        <ul>
                                            {
                                                column.links.iter().map(|link| {
                                                    html! {
                                                        <li key={link.label.clone()}>
                                                            <a href={link.url.clone()}>{ &link.label }</a>
                                                        </li>
                                                    }
                                                }).collect::<Html>()
                                            }
                                        </ul>
                                    </Reveal>
                                }
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="footer-divider"></div>

                    <div class="footer-bottom">
                        <a href={props.logo.url.clone()} class="footer-logo">
                            <span class="footer-logo-text">
                                { &props.logo.prefix }{" "}
                                <span class="footer-logo-accent">{ &props.logo.accent }</span>
                            </span>
                        </a>
                        <div class="footer-social">
                            {
                                props.social_links.iter().map(|social| {
                                    html! {
                                        <a
                                            key={social.label.clone()}
                                            href={social.url.clone()}
                                            class="footer-social-link"
                                            aria-label={social.label.clone()}
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            <IconGlyph icon={social.icon} />
                                        </a>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                        <p class="footer-text">{ &props.footer_text }</p>
                    </div>
                </div>
            </div>

            <div class="footer-accent"></div>
        </footer>
    }
}

pub fn default_logo() -> LogoSpec {
    LogoSpec {
        prefix: "The".into(),
        accent: "Residence".into(),
        url: "#hero".into(),
    }
}

pub fn default_newsletter_heading() -> String {
    "Stay Informed".into()
}

pub fn default_newsletter_description() -> String {
    "Subscribe to receive exclusive updates, smart home insights, and priority \
     access to new releases."
        .into()
}

pub fn default_input_placeholder() -> String {
    "Enter your email".into()
}

pub fn default_button() -> ButtonSpec {
    ButtonSpec::secondary("Subscribe").small()
}

pub fn default_column_links() -> Vec<FooterColumn> {
    vec![
        FooterColumn {
            title: "Residences".into(),
            links: vec![
                LinkSpec::new("2-Bedroom", "#residences"),
                LinkSpec::new("3-Bedroom", "#residences"),
                LinkSpec::new("Penthouses", "#residences"),
                LinkSpec::new("Floor Plans", "#residences"),
            ],
        },
        FooterColumn {
            title: "Smart Home".into(),
            links: vec![
                LinkSpec::new("Features", "#smart-home"),
                LinkSpec::new("Technology", "#smart-home"),
                LinkSpec::new("Security", "#smart-home"),
                LinkSpec::new("Energy", "#smart-home"),
            ],
        },
        FooterColumn {
            title: "Amenities".into(),
            links: vec![
                LinkSpec::new("Clubhouse", "#amenities"),
                LinkSpec::new("Co-Working", "#amenities"),
                LinkSpec::new("Playground", "#amenities"),
                LinkSpec::new("EV Charging", "#amenities"),
            ],
        },
        FooterColumn {
            title: "Explore".into(),
            links: vec![
                LinkSpec::new("Virtual Tour", "#hero"),
                LinkSpec::new("Gallery", "#hero"),
                LinkSpec::new("Location", "#location"),
                LinkSpec::new("FAQs", "#contact"),
            ],
        },
        FooterColumn {
            title: "Company".into(),
            links: vec![
                LinkSpec::new("About Us", "#hero"),
                LinkSpec::new("Careers", "#contact"),
                LinkSpec::new("Press", "#contact"),
                LinkSpec::new("Contact", "#location"),
            ],
        },
        FooterColumn {
            title: "Legal".into(),
            links: vec![
                LinkSpec::new("Privacy Policy", "#footer"),
                LinkSpec::new("Terms of Service", "#footer"),
                LinkSpec::new("Cookie Policy", "#footer"),
                LinkSpec::new("Disclaimer", "#footer"),
            ],
        },
    ]
}

pub fn default_social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            icon: Icon::Facebook,
            label: "Facebook".into(),
            url: "https://facebook.com/theresidence.id".into(),
        },
        SocialLink {
            icon: Icon::Instagram,
            label: "Instagram".into(),
            url: "https://instagram.com/theresidence.id".into(),
        },
        SocialLink {
            icon: Icon::Twitter,
            label: "Twitter".into(),
            url: "https://twitter.com/theresidenceid".into(),
        },
        SocialLink {
            icon: Icon::Youtube,
            label: "YouTube".into(),
            url: "https://youtube.com/@theresidence".into(),
        },
    ]
}

pub fn default_footer_text() -> String {
    format!(
        "\u{00a9} {} The Residence. All rights reserved.",
        chrono::Local::now().year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns_are_populated() {
        let columns = default_column_links();
        assert_eq!(columns.len(), 6);
        for column in &columns {
            assert!(!column.links.is_empty());
        }
    }

    #[test]
    fn signup_serializes_to_a_flat_record() {
        let signup = NewsletterSignup {
            email: "a@b.com".into(),
        };
        assert_eq!(
            serde_json::to_string(&signup).unwrap(),
            r#"{"email":"a@b.com"}"#
        );
    }
}
