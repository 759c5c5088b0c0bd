mod wheel_canvas;

use shared::reveal_session::UserAction;
use yew::prelude::*;

use crate::animation::FrameLoop;
use crate::hooks::RevealHandle;
use crate::styles;
use wheel_canvas::WheelCanvas;

#[derive(Properties, PartialEq)]
pub struct WheelGameProps {
    pub handle: RevealHandle,
}

#[function_component(WheelGame)]
pub fn wheel_game(props: &WheelGameProps) -> Html {
    let state = &props.handle.state;
    let displayed = use_state(|| state.rotation);

    {
        let displayed = displayed.clone();
        let rest = state.rotation;
        use_effect_with(props.handle.spin, move |spin| {
            let frames = match *spin {
                Some(animation) => Some(FrameLoop::start(move |elapsed_ms| {
                    displayed.set(animation.rotation_at(elapsed_ms));
                    !animation.is_finished(elapsed_ms)
                })),
                None => {
                    displayed.set(rest);
                    None
                }
            };
            move || drop(frames)
        });
    }

    let on_spin = {
        let send = props.handle.send.clone();
        Callback::from(move |_: MouseEvent| send.emit(UserAction::SpinWheel))
    };
    let on_close = {
        let send = props.handle.send.clone();
        Callback::from(move |_: MouseEvent| send.emit(UserAction::Close))
    };

    html! {
        <div class={styles::MODAL_BACKDROP}>
            <div class="relative max-w-sm w-full">
                <div class={styles::MACHINE_FRAME}>
                    <div class={styles::MACHINE_FACE}>
                        <button
                            class={styles::CLOSE_BUTTON}
                            onclick={on_close}
                            disabled={state.wheel_spinning}
                            aria-label="Sulje"
                        >
                            {"✕"}
                        </button>
                        <div class="flex items-center justify-center gap-2 mb-4">
                            <div class="h-0.5 flex-1 bg-gradient-to-r from-transparent to-[oklch(0.75_0.15_85)]/40" />
                            <h3 class={classes!("text-xl", "sm:text-2xl", "font-bold", "tracking-wider", styles::GOLD)}>{"ONNENPYÖRÄ"}</h3>
                            <div class="h-0.5 flex-1 bg-gradient-to-l from-transparent to-[oklch(0.75_0.15_85)]/40" />
                        </div>
                        <p class={classes!("text-center", "text-xs", "sm:text-sm", "mb-5", styles::TEXT_FAINT)}>
                            {"Vihreä vie perille, punainen ei"}
                        </p>

                        <WheelCanvas
                            rotation={*displayed}
                            is_spinning={state.wheel_spinning}
                            geometry={props.handle.geometry}
                        />

                        <div class="mt-5">
                            <button class={styles::GOLD_BUTTON} onclick={on_spin} disabled={!state.can_spin_wheel()}>
                                { if state.wheel_spinning { "Pyörii..." } else { "PYÖRÄYTÄ" } }
                            </button>
                        </div>
                        if state.wheel_attempts > 0 {
                            <p class={classes!("text-center", "text-xs", "mt-3", styles::TEXT_FAINT)}>
                                {format!("Yrityksiä: {}", state.wheel_attempts)}
                            </p>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
