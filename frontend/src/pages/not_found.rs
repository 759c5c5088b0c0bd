use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::styles;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Base plain={true}>
            <div class="min-h-[60vh] flex items-center justify-center text-center px-4">
                <div>
                    <h1 class="text-6xl font-bold mb-4 text-[oklch(0.85_0.15_85)]">{"404"}</h1>
                    <p class={classes!("mb-6", styles::TEXT_MUTED)}>{"Sivua ei löytynyt."}</p>
                    <Link<Route> to={Route::Home} classes={styles::NAV_LINK}>{"← Etusivulle"}</Link<Route>>
                </div>
            </div>
        </Base>
    }
}
