use yew::prelude::*;

use crate::components::amenities::Amenities;
use crate::components::bento_grid::BentoGrid;
use crate::components::cta::Cta;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::location::Location;
use crate::components::navbar::Navbar;
use crate::components::residence::Residence;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <Navbar />
            <main>
                <Hero />
                <BentoGrid />
                <Residence />
                <Amenities />
                <Location />
                <Cta />
            </main>
            <Footer />
        </div>
    }
}
