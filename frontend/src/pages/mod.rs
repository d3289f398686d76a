pub mod landing;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Esta página no existe."}</p>
            <Link<Route> to={Route::Home}>{"Volver al inicio"}</Link<Route>>
        </div>
    }
}
