use shared::countdown::pad2;
use yew::prelude::*;

use crate::hooks::use_countdown;
use crate::styles;

#[function_component(Countdown)]
pub fn countdown() -> Html {
    let left = use_countdown();
    let units = [
        ("Päivää", left.days),
        ("Tuntia", left.hours),
        ("Minuuttia", left.minutes),
        ("Sekuntia", left.seconds),
    ];

    html! {
        <div class="flex justify-center gap-3 sm:gap-6 md:gap-8 flex-wrap">
            { for units.iter().map(|(label, value)| html! {
                <div key={*label} class="flex flex-col items-center min-w-[60px] sm:min-w-[80px]">
                    <div class={classes!("text-3xl", "sm:text-4xl", "md:text-5xl", "font-bold", "tabular-nums", "mb-1", "sm:mb-2", styles::GOLD)}>
                        {pad2(*value)}
                    </div>
                    <div class={classes!("text-xs", "sm:text-sm", "font-light", "uppercase", "tracking-wider", styles::TEXT_FAINT)}>
                        {*label}
                    </div>
                </div>
            }) }
        </div>
    }
}
