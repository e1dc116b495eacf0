use yew::prelude::*;
use yew_router::prelude::*;

mod styles;
mod config;
mod landing;
mod nav;
mod sections;
mod contact_form;
mod social_settings;
mod footer;
mod logo;
mod submit;

use crate::{config::CONFIG, landing::Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! {
            <Landing
                logo_src={CONFIG.logo_src}
                show_testimonials={CONFIG.show_testimonials}
                twitter_url={CONFIG.twitter_url}
                linkedin_url={CONFIG.linkedin_url}
                instagram_url={CONFIG.instagram_url}
            />
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&format!("{} landing page starting", CONFIG.brand_name).into());
    yew::Renderer::<App>::new().render();
}
