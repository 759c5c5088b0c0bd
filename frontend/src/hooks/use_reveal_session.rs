use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::config::RevealConfig;
use shared::reveal_session::{RevealSession, UserAction};
use shared::shared_reveal_flow::{FlowVariant, RevealState};
use shared::shared_wheel_game::{SpinAnimation, WheelGeometry};
use yew::prelude::*;

use crate::base::dispatch_notification;

/// What the reveal components render from.
#[derive(Clone, PartialEq)]
pub struct RevealHandle {
    pub state: RevealState,
    pub variant: FlowVariant,
    pub geometry: WheelGeometry,
    pub spin: Option<SpinAnimation>,
    pub contact: Option<&'static str>,
    /// Bumped every time the flow asks for confetti.
    pub confetti_runs: u32,
    pub send: Callback<UserAction>,
}

/// Owns the session and arms one browser timeout for its next due event.
struct Driver {
    session: RefCell<RevealSession>,
    timer: RefCell<Option<Timeout>>,
    mounted_at: f64,
    confetti_runs: Cell<u32>,
    on_change: Callback<()>,
}

impl Driver {
    fn elapsed_ms(&self) -> u64 {
        (js_sys::Date::now() - self.mounted_at).max(0.0) as u64
    }

    fn send(self: &Rc<Self>, action: UserAction) {
        {
            let mut session = self.session.borrow_mut();
            session.advance_to(self.elapsed_ms());
            session.send(action);
        }
        self.sync();
    }

    fn fire(self: &Rc<Self>) {
        self.session.borrow_mut().advance_to(self.elapsed_ms());
        self.sync();
    }

    fn sync(self: &Rc<Self>) {
        let (notifications, confetti, next_due) = {
            let mut session = self.session.borrow_mut();
            (session.drain_notifications(), session.take_confetti(), session.next_due())
        };

        for notification in &notifications {
            dispatch_notification(notification);
        }
        if confetti {
            self.confetti_runs.set(self.confetti_runs.get() + 1);
        }

        let timeout = next_due.map(|due| {
            let delay = due.saturating_sub(self.elapsed_ms()).min(u32::MAX as u64) as u32;
            let driver = Rc::clone(self);
            Timeout::new(delay, move || driver.fire())
        });
        *self.timer.borrow_mut() = timeout;

        self.on_change.emit(());
    }

    fn handle(&self, send: Callback<UserAction>) -> RevealHandle {
        let session = self.session.borrow();
        RevealHandle {
            state: session.state().clone(),
            variant: session.variant(),
            geometry: *session.geometry(),
            spin: session.spin_animation(),
            contact: session.contact(),
            confetti_runs: self.confetti_runs.get(),
            send,
        }
    }
}

#[hook]
pub fn use_reveal_session(config: RevealConfig) -> RevealHandle {
    let update = use_force_update();

    let driver = use_memo((), {
        let update = update.clone();
        move |_| {
            let session = RevealSession::from_config(
                &config,
                Box::new(SmallRng::from_entropy()),
                Box::new(SmallRng::from_entropy()),
                Box::new(SmallRng::from_entropy()),
            );
            Rc::new(Driver {
                session: RefCell::new(session),
                timer: RefCell::new(None),
                mounted_at: js_sys::Date::now(),
                confetti_runs: Cell::new(0),
                on_change: Callback::from(move |_| update.force_update()),
            })
        }
    });

    {
        let driver = (*driver).clone();
        use_effect_with((), move |_| {
            move || {
                driver.timer.borrow_mut().take();
            }
        });
    }

    let send = {
        let driver = (*driver).clone();
        Callback::from(move |action: UserAction| driver.send(action))
    };

    driver.handle(send)
}
