use chrono::Local;
use gloo_timers::callback::Interval;
use shared::countdown::{countdown_target, time_left, TimeLeft};
use yew::prelude::*;

fn remaining() -> TimeLeft {
    countdown_target()
        .map(|target| time_left(Local::now().naive_local(), target))
        .unwrap_or_default()
}

/// Time left until launch, refreshed every second.
#[hook]
pub fn use_countdown() -> TimeLeft {
    let left = use_state(remaining);

    {
        let left = left.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(1000, move || left.set(remaining()));
            move || drop(interval)
        });
    }

    *left
}
