use gloo_timers::callback::{Interval, Timeout};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::constants::{LEVER_PULL_MS, REEL_TICK_MS};
use shared::reveal_session::UserAction;
use shared::shared_reveal_flow::{FlowVariant, Phase};
use shared::shared_slot_game::{reel_spins, ReelFace};
use yew::prelude::*;

use crate::components::SlotReel;
use crate::hooks::RevealHandle;
use crate::styles;
use crate::timers::PendingTimeouts;

/// Face shown on one reel and whether it is still cycling.
type ReelView = (ReelFace, bool);

#[derive(Properties, PartialEq)]
pub struct SlotGameProps {
    pub handle: RevealHandle,
}

#[function_component(SlotGame)]
pub fn slot_game(props: &SlotGameProps) -> Html {
    let state = &props.handle.state;
    let reels = use_state(|| [(ReelFace::Blank, false); 3]);
    let lever_pulled = use_state(|| false);
    let lever_timeout = use_mut_ref(PendingTimeouts::<()>::default);

    {
        let lever_timeout = lever_timeout.clone();
        use_effect_with((), move |_| move || lever_timeout.borrow_mut().clear());
    }

    {
        let reels = reels.clone();
        use_effect_with(
            (state.slot_attempts, state.slot_spinning, state.reels),
            move |(_, spinning, targets)| {
                let mut ticker = None;
                match (*targets, *spinning) {
                    (None, _) => reels.set([(ReelFace::Blank, false); 3]),
                    (Some(targets), false) => reels.set(targets.map(|symbol| (ReelFace::Symbol(symbol), false))),
                    (Some(targets), true) => {
                        let mut spins = reel_spins(targets);
                        let mut rng = SmallRng::from_entropy();
                        let started = js_sys::Date::now();
                        ticker = Some(Interval::new(REEL_TICK_MS, move || {
                            let elapsed = (js_sys::Date::now() - started).max(0.0) as u32;
                            let view: [ReelView; 3] = [0, 1, 2].map(|i| {
                                let face = spins[i].tick(elapsed, &mut rng);
                                (face, !spins[i].is_stopped())
                            });
                            reels.set(view);
                        }));
                    }
                }
                move || drop(ticker)
            },
        );
    }

    let on_pull = {
        let send = props.handle.send.clone();
        let lever_pulled = lever_pulled.clone();
        let lever_timeout = lever_timeout.clone();
        let can_pull = state.can_pull_lever();
        Callback::from(move |_: MouseEvent| {
            if !can_pull {
                return;
            }
            lever_pulled.set(true);
            let lever_pulled = lever_pulled.clone();
            let release = Timeout::new(LEVER_PULL_MS, move || lever_pulled.set(false));
            lever_timeout.borrow_mut().arm((), release);
            send.emit(UserAction::PullLever);
        })
    };
    let on_close = {
        let send = props.handle.send.clone();
        Callback::from(move |_: MouseEvent| send.emit(UserAction::Close))
    };
    let on_open_wheel = {
        let send = props.handle.send.clone();
        Callback::from(move |_: MouseEvent| send.emit(UserAction::OpenWheel))
    };

    let won = state.phase == Phase::SlotWon;

    html! {
        <div class={styles::MODAL_BACKDROP}>
            <div class="relative max-w-sm w-full">
                <div class={styles::MACHINE_FRAME}>
                    <div class={styles::MACHINE_FACE}>
                        if !won {
                            <button
                                class={styles::CLOSE_BUTTON}
                                onclick={on_close}
                                disabled={state.slot_spinning}
                                aria-label="Sulje"
                            >
                                {"✕"}
                            </button>
                        }
                        <div class="flex items-center justify-center gap-2 mb-4">
                            <div class="h-0.5 flex-1 bg-gradient-to-r from-transparent to-[oklch(0.75_0.15_85)]/40" />
                            <h3 class={classes!("text-xl", "sm:text-2xl", "font-bold", "tracking-wider", styles::GOLD)}>{"JACKPOT"}</h3>
                            <div class="h-0.5 flex-1 bg-gradient-to-l from-transparent to-[oklch(0.75_0.15_85)]/40" />
                        </div>
                        <p class={classes!("text-center", "text-xs", "sm:text-sm", "mb-5", styles::TEXT_FAINT)}>
                            {"Kolme punaista seiskaa vie sinut eteenpäin"}
                        </p>

                        <div class={styles::REEL_WINDOW}>
                            <div class="flex justify-center gap-2 sm:gap-3">
                                { for reels.iter().map(|(face, spinning)| html! {
                                    <SlotReel face={*face} spinning={*spinning} />
                                }) }
                            </div>
                            <div class="flex items-center mt-3">
                                <div class="w-3 h-3 rounded-full bg-[oklch(0.75_0.15_85)] shadow-[0_0_6px_rgba(212,175,55,0.5)]" />
                                <div class="flex-1 h-0.5 bg-[oklch(0.75_0.15_85)]/30" />
                                <div class="w-3 h-3 rounded-full bg-[oklch(0.75_0.15_85)] shadow-[0_0_6px_rgba(212,175,55,0.5)]" />
                            </div>
                        </div>

                        if won {
                            <div class="text-center animate-fade-in py-2">
                                <p class="text-lg sm:text-xl font-bold text-red-500 mb-1">{"🎉 7 7 7 – JACKPOT! 🎉"}</p>
                                if props.handle.variant == FlowVariant::ThreeStage {
                                    <p class={classes!("text-sm", "mb-4", styles::TEXT_MUTED)}>{"Vielä yksi pyöräytys..."}</p>
                                    <button class={styles::GOLD_BUTTON} onclick={on_open_wheel}>{"Avaa onnenpyörä"}</button>
                                } else {
                                    <p class={classes!("text-sm", styles::TEXT_MUTED)}>{"Yhteystiedot paljastuvat..."}</p>
                                }
                            </div>
                        } else {
                            <button class={styles::GOLD_BUTTON} onclick={on_pull} disabled={!state.can_pull_lever()}>
                                { if state.slot_spinning { "Pyörii..." } else { "VEDÄ" } }
                            </button>
                        }
                    </div>
                </div>

                <div class="absolute -right-6 sm:-right-8 top-1/2 -translate-y-1/2 flex flex-col items-center">
                    <div class="w-3 sm:w-4 h-24 sm:h-32 bg-gradient-to-b from-[#555] to-[#333] rounded-full relative">
                        <div class={classes!(
                            "absolute", "-top-4", "sm:-top-5", "left-1/2", "-translate-x-1/2",
                            "w-6", "h-6", "sm:w-8", "sm:h-8", "rounded-full",
                            "bg-gradient-to-b", "from-red-500", "to-red-700",
                            "shadow-[0_0_10px_rgba(220,20,60,0.4)]", "border-2", "border-red-400/50",
                            "transition-transform", "duration-500",
                            (*lever_pulled).then_some("translate-y-16 sm:translate-y-20"),
                        )} />
                    </div>
                    <div class="w-5 sm:w-6 h-2 bg-[#444] rounded-b-lg mt-1" />
                </div>
            </div>
        </div>
    }
}
