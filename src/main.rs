use yew::prelude::*;
use yew_router::prelude::*;
use stylist::css;
use stylist::yew::Global;
use log::{info, Level};

mod config;
mod content;
mod viewport;
mod motion;
mod components {
    pub mod amenities;
    pub mod bento_grid;
    pub mod button;
    pub mod cta;
    pub mod footer;
    pub mod hero;
    pub mod icons;
    pub mod location;
    pub mod navbar;
    pub mod residence;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            // Base document rules; the design tokens and section styles
            // live in styles.css.
            <Global css={css!(r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: 'Inter', system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
                    background: #fdfbf7;
                    color: #102a43;
                    -webkit-font-smoothing: antialiased;
                }
            "#)} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
