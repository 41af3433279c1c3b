use yew::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::content::{ButtonSize, ButtonSpec, ButtonVariant};

// Generic renderer for `ButtonSpec` records. Specs with a url render as
// anchors, the rest as plain buttons; the variant and size map to the
// button classes in styles.css.

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub spec: ButtonSpec,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(false)]
    pub chevron: bool,
}

fn variant_class(spec: &ButtonSpec) -> &'static str {
    match spec.variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Secondary => "btn btn-secondary",
        ButtonVariant::Link => "btn btn-link",
    }
}

fn size_class(spec: &ButtonSpec) -> Option<&'static str> {
    match spec.size {
        ButtonSize::Default => None,
        ButtonSize::Sm => Some("btn-sm"),
        ButtonSize::Link => Some("btn-size-link"),
    }
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let spec = &props.spec;
    let class = classes!(
        variant_class(spec),
        size_class(spec),
        props.class.clone(),
    );

    let label = html! {
        <span class="btn-label">
            { &spec.title }
            { if props.chevron {
                html! { <IconGlyph icon={Icon::ChevronRight} class={classes!("btn-chevron")} /> }
            } else {
                html! {}
            } }
        </span>
    };

    match &spec.url {
        Some(url) => html! {
            <a class={class} href={url.clone()}>{ label }</a>
        },
        None => html! {
            <button class={class} type="button">{ label }</button>
        },
    }
}
