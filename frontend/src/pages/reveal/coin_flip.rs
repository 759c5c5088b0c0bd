use shared::reveal_session::UserAction;
use shared::shared_reveal_flow::Phase;
use yew::prelude::*;

use crate::hooks::RevealHandle;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CoinFlipProps {
    pub handle: RevealHandle,
}

/// Coin stages of the reveal: the first button, the flip and landing
/// animations, and the way into the slot machine.
#[function_component(CoinFlip)]
pub fn coin_flip(props: &CoinFlipProps) -> Html {
    let send = props.handle.send.clone();
    let action = move |action: UserAction| {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send.emit(action))
    };

    match props.handle.state.phase {
        Phase::Idle => html! {
            <button class={styles::GOLD_OUTLINE_BUTTON} onclick={action(UserAction::FlipCoin)}>
                <span class="text-4xl group-hover:animate-bounce">{"🪙"}</span>
                <span class={classes!("font-semibold", "text-base", "sm:text-lg", styles::GOLD)}>
                    {"Heitä kolikkoa paljastaaksesi yhteystiedot"}
                </span>
            </button>
        },
        Phase::CoinFlipping => html! {
            <div class="flex flex-col items-center gap-4 py-8">
                <div class="text-7xl sm:text-8xl animate-coin-flip">{"🪙"}</div>
                <p class={classes!("text-sm", "animate-pulse", styles::TEXT_MUTED)}>{"Kolikko pyörii..."}</p>
            </div>
        },
        Phase::CoinLanding => html! {
            <div class="flex flex-col items-center gap-4 py-8">
                <div class="text-7xl sm:text-8xl animate-coin-land">{"🪙"}</div>
                <p class={classes!("text-sm", styles::TEXT_MUTED)}>{"Kolikko laskeutuu..."}</p>
            </div>
        },
        // Stays visible behind the slot modal.
        Phase::CoinDone | Phase::Slot => html! {
            <div class="animate-fade-in">
                <p class={classes!("text-lg", "mb-4", styles::GOLD)}>{"Kolikko tippui! Nyt tarvitset jackpotin..."}</p>
                <button class={styles::GOLD_OUTLINE_BUTTON} onclick={action(UserAction::OpenSlot)}>
                    <span class="text-3xl">{"🎰"}</span>
                    <span class={classes!("font-semibold", "text-base", "sm:text-lg", styles::GOLD)}>{"Avaa hedelmäpeli"}</span>
                </button>
            </div>
        },
        _ => html! {},
    }
}
