use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::constants::{TARGET_VIEWS, VIEW_TICK_MS};
use shared::countdown::{ramp_finished, view_count_at, view_increment, view_increment_delay_ms};
use yew::prelude::*;

use crate::animation::FrameLoop;

// With ticks every two seconds and delays of at most four, older ones have fired.
const MAX_PENDING_INCREMENTS: usize = 3;

/// Views counter: a six minute ramp up to the headline number, then a slow
/// random trickle.
#[hook]
pub fn use_view_count() -> u64 {
    let views = use_state(|| 0u64);
    let ramp_done = use_state(|| false);

    {
        let views = views.clone();
        let ramp_done = ramp_done.clone();
        use_effect_with((), move |_| {
            let ramp = FrameLoop::start(move |elapsed_ms| {
                let elapsed_ms = elapsed_ms.max(0.0) as u64;
                views.set(view_count_at(elapsed_ms));
                if ramp_finished(elapsed_ms) {
                    ramp_done.set(true);
                    return false;
                }
                true
            });
            move || drop(ramp)
        });
    }

    {
        let views = views.clone();
        use_effect_with(*ramp_done, move |&done| {
            let trickle = done.then(|| {
                let total = Rc::new(RefCell::new(TARGET_VIEWS));
                let pending: Rc<RefCell<VecDeque<Timeout>>> = Rc::default();
                let mut rng = SmallRng::from_entropy();

                let interval = {
                    let pending = pending.clone();
                    Interval::new(VIEW_TICK_MS, move || {
                        let increment = view_increment(&mut rng);
                        let delay = view_increment_delay_ms(&mut rng);
                        let total = total.clone();
                        let views = views.clone();
                        let timeout = Timeout::new(delay, move || {
                            let mut total = total.borrow_mut();
                            *total += increment;
                            views.set(*total);
                        });

                        let mut pending = pending.borrow_mut();
                        if pending.len() >= MAX_PENDING_INCREMENTS {
                            pending.pop_front();
                        }
                        pending.push_back(timeout);
                    })
                };
                (interval, pending)
            });
            move || drop(trickle)
        });
    }

    *views
}
