use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::button::Button;
use crate::components::icons::{Icon, IconGlyph};
use crate::content::{ButtonSpec, LogoSpec, NavLink};
use crate::viewport::{self, use_input_mode, InputMode};

// Fixed navigation bar. The mobile menu and the per-item dropdowns are
// plain disclosure flags; the menu additionally closes on a pointer press
// outside the panel and whenever a leaf link is selected while it is open.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MenuEvent {
    TogglePressed,
    OutsidePress,
    LeafLinkSelected,
}

pub(crate) fn next_menu_state(open: bool, event: MenuEvent) -> bool {
    match event {
        MenuEvent::TogglePressed => !open,
        MenuEvent::OutsidePress | MenuEvent::LeafLinkSelected => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    #[prop_or_else(default_logo)]
    pub logo: LogoSpec,
    #[prop_or_else(default_nav_links)]
    pub nav_links: Vec<NavLink>,
    #[prop_or_else(default_buttons)]
    pub buttons: Vec<ButtonSpec>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);
    let input_mode = use_input_mode();
    let menu_ref = use_node_ref();
    let burger_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(viewport::past_scroll_threshold(scroll_y));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let burger_ref = burger_ref.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();

                let mousedown_callback =
                    Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                        let target = match event
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                        {
                            Some(node) => node,
                            None => return,
                        };
                        let inside_menu = menu_ref
                            .cast::<web_sys::Node>()
                            .map_or(false, |n| n.contains(Some(&target)));
                        let inside_burger = burger_ref
                            .cast::<web_sys::Node>()
                            .map_or(false, |n| n.contains(Some(&target)));
                        if !inside_menu && !inside_burger {
                            menu_open.set(next_menu_state(true, MenuEvent::OutsidePress));
                        }
                    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

                document
                    .add_event_listener_with_callback(
                        "mousedown",
                        mousedown_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = document.remove_event_listener_with_callback(
                        "mousedown",
                        mousedown_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    // While the touch menu is open the page behind it must not scroll.
    {
        let lock = *menu_open && input_mode.is_touch();
        use_effect_with_deps(
            move |&lock| {
                let body = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body());
                if let Some(body) = &body {
                    let value = if lock { "hidden" } else { "" };
                    let _ = body.style().set_property("overflow", value);
                }
                move || {
                    if let Some(body) = body {
                        let _ = body.style().set_property("overflow", "");
                    }
                }
            },
            lock,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(next_menu_state(*menu_open, MenuEvent::TogglePressed));
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(next_menu_state(*menu_open, MenuEvent::LeafLinkSelected));
        })
    };

    html! {
        <section class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-bar">
                <a href={props.logo.url.clone()} class="nav-logo">
                    <span class="nav-logo-text">
                        { &props.logo.prefix }{" "}
                        <span class="nav-logo-accent">{ &props.logo.accent }</span>
                    </span>
                </a>
                <button
                    ref={burger_ref}
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    aria-label="Toggle navigation menu"
                    onclick={toggle_menu}
                >
                    <span class="burger-line top"></span>
                    <span class="burger-line middle"></span>
                    <span class="burger-line bottom"></span>
                </button>
                <div class={classes!("nav-menu", (*menu_open).then(|| "mobile-menu-open"))}>
                    <div ref={menu_ref} class="nav-menu-panel">
                        {
                            props.nav_links.iter().map(|nav_link| {
                                if nav_link.sub_menu_links.is_empty() {
                                    html! {
                                        <div key={nav_link.title.clone()} onclick={close_menu.clone()}>
                                            <a href={nav_link.url.clone()} class="nav-link">
                                                { &nav_link.title }
                                            </a>
                                        </div>
                                    }
                                } else {
                                    html! {
                                        <SubMenu
                                            key={nav_link.title.clone()}
                                            nav_link={nav_link.clone()}
                                            input_mode={input_mode}
                                            on_leaf_select={close_menu.clone()}
                                        />
                                    }
                                }
                            }).collect::<Html>()
                        }
                        <div class="nav-actions">
                            {
                                props.buttons.iter().enumerate().map(|(index, button)| {
                                    let class = if index == 0 {
                                        "nav-button-outline"
                                    } else {
                                        "nav-button-gold"
                                    };
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
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SubMenuProps {
    nav_link: NavLink,
    input_mode: InputMode,
    on_leaf_select: Callback<MouseEvent>,
}

#[function_component(SubMenu)]
fn sub_menu(props: &SubMenuProps) -> Html {
    let dropdown_open = use_state_eq(|| false);
    let hover_enabled = !props.input_mode.is_touch();

    let on_mouse_enter = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| {
            if hover_enabled {
                dropdown_open.set(true);
            }
        })
    };

    let on_mouse_leave = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| {
            if hover_enabled {
                dropdown_open.set(false);
            }
        })
    };

    let on_toggle = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| {
            dropdown_open.set(!*dropdown_open);
        })
    };

    html! {
        <div class="nav-submenu" onmouseenter={on_mouse_enter} onmouseleave={on_mouse_leave}>
            <button class="nav-link nav-submenu-trigger" onclick={on_toggle}>
                <span>{ &props.nav_link.title }</span>
                <span class={classes!("nav-submenu-chevron", (*dropdown_open).then(|| "rotated"))}>
                    <IconGlyph icon={Icon::ChevronDown} />
                </span>
            </button>
            {
                if *dropdown_open {
                    html! {
                        <nav class="nav-dropdown">
                            {
                                props.nav_link.sub_menu_links.iter().map(|link| {
                                    html! {
                                        <div key={link.title.clone()} onclick={props.on_leaf_select.clone()}>
                                            <a href={link.url.clone()} class="nav-dropdown-link">
                                                { &link.title }
                                            </a>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </nav>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

pub fn default_logo() -> LogoSpec {
    LogoSpec {
        prefix: "The".into(),
        accent: "Residence".into(),
        url: "#hero".into(),
    }
}

pub fn default_nav_links() -> Vec<NavLink> {
    vec![
        NavLink::leaf("Residences", "#residences"),
        NavLink::leaf("Smart Home", "#smart-home"),
        NavLink::leaf("Amenities", "#amenities"),
        NavLink::parent(
            "Explore",
            "#",
            vec![
                NavLink::leaf("Gallery", "#hero"),
                NavLink::leaf("Virtual Tour", "#hero"),
                NavLink::leaf("Floor Plans", "#residences"),
            ],
        ),
    ]
}

pub fn default_buttons() -> Vec<ButtonSpec> {
    vec![
        ButtonSpec::secondary("Contact").small().to_url("#contact"),
        ButtonSpec::primary("Book Tour").small().to_url("#contact"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_outside_press_and_leaf_select_close() {
        let mut open = false;
        open = next_menu_state(open, MenuEvent::TogglePressed);
        assert!(open);
        open = next_menu_state(open, MenuEvent::OutsidePress);
        assert!(!open);
        open = next_menu_state(open, MenuEvent::TogglePressed);
        assert!(open);
        open = next_menu_state(open, MenuEvent::LeafLinkSelected);
        assert!(!open);
        // closing events are idempotent on a closed menu
        assert!(!next_menu_state(false, MenuEvent::OutsidePress));
        assert!(!next_menu_state(false, MenuEvent::LeafLinkSelected));
    }

    #[test]
    fn default_links_nest_at_most_one_level() {
        for link in default_nav_links() {
            for sub in &link.sub_menu_links {
                assert!(sub.sub_menu_links.is_empty());
            }
        }
    }
}
