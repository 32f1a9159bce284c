use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod effects;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod state;

use pages::{ItemManagerPage, NotFoundPage};

const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// Backend address, set at build time through `BACKEND_URL`.
pub fn backend_address() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

pub fn get_api_client() -> APIClient {
    APIClient {
        address: backend_address().trim_end_matches('/').to_string(),
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

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
        Route::Home => html! { <ItemManagerPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
