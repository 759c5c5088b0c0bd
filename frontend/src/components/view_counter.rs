use shared::countdown::format_fi;
use yew::prelude::*;

use crate::hooks::use_view_count;
use crate::styles;

#[function_component(ViewCounter)]
pub fn view_counter() -> Html {
    let views = use_view_count();

    html! {
        <div class="text-center animate-fade-in-delay">
            <div class={classes!("text-3xl", "sm:text-4xl", "md:text-5xl", "lg:text-6xl", "font-bold", "mb-3", "tabular-nums", styles::GOLD)}>
                {format_fi(views)}
            </div>
            <div class={classes!("text-base", "font-light", styles::TEXT_MUTED)}>
                {"Orgaanista näyttökertaa asiakkaideni sosiaalisen median kanavoissa, joihin sinäkin olet varmasti törmännyt."}
            </div>
        </div>
    }
}
