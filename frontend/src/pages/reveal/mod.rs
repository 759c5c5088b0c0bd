mod coin_flip;
mod frontend_slot_game;
mod frontend_wheel_game;

use shared::shared_reveal_flow::Phase;
use yew::prelude::*;

use crate::components::{Confetti, ContactForm};
use crate::config::reveal_config;
use crate::hooks::use_reveal_session;
use crate::styles;
use coin_flip::CoinFlip;
use frontend_slot_game::SlotGame;
use frontend_wheel_game::WheelGame;

/// Contact section: the email address is earned through the coin, the slot
/// machine and, in the three-stage flow, the wheel.
#[function_component(ContactReveal)]
pub fn contact_reveal() -> Html {
    let config = use_memo((), |_| reveal_config());
    let handle = use_reveal_session(*config);
    let phase = handle.state.phase;

    let body = match (phase, handle.contact) {
        (Phase::Revealed, Some(email)) => html! {
            <div class="animate-fade-in">
                <p class={classes!("text-xl", "sm:text-2xl", "font-semibold", "mb-4", styles::GOLD)}>
                    {"🎉 Yhteystiedot paljastettu! Laita sähköpostia tulemaan:"}
                </p>
                <a
                    href={format!("mailto:{}", email)}
                    class="inline-block text-lg sm:text-xl text-[oklch(0.85_0.15_85)] hover:text-[oklch(0.95_0.15_85)] transition-all duration-300 underline decoration-[oklch(0.75_0.15_85)]/50 hover:decoration-[oklch(0.75_0.15_85)] hover:scale-105"
                >
                    {email}
                </a>
                <ContactForm />
            </div>
        },
        (Phase::SlotWon | Phase::Wheel, _) => html! {
            <p class={classes!("text-lg", "animate-pulse", styles::GOLD)}>{"Yhteystiedot paljastuvat..."}</p>
        },
        _ => html! { <CoinFlip handle={handle.clone()} /> },
    };

    let modal = match phase {
        // The slot modal stays up through the jackpot.
        Phase::Slot | Phase::SlotWon => html! { <SlotGame handle={handle.clone()} /> },
        Phase::Wheel => html! { <WheelGame handle={handle.clone()} /> },
        _ => html! {},
    };

    html! {
        <>
            <Confetti runs={handle.confetti_runs} />
            <h2 class={styles::SECTION_TITLE}>{"Yhteystiedot"}</h2>
            {body}
            {modal}
        </>
    }
}
