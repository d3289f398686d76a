pub mod components;
pub mod config;
pub mod content;
pub mod overlay;
pub mod pages;
pub mod proposal;
pub mod state;
pub mod theme;
pub mod utils;
pub mod visibility;

use yew::prelude::*;
use yew_router::prelude::*;

use content::PageVariant;
use pages::landing::Landing;
use pages::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dia")]
    Dia,
    #[at("/esencial")]
    Esencial,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing key="nocturna" variant={PageVariant::Nocturna} /> },
        Route::Dia => html! { <Landing key="diurna" variant={PageVariant::Diurna} /> },
        Route::Esencial => html! { <Landing key="esencial" variant={PageVariant::Esencial} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
