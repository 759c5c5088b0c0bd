use serde::{Serialize, Deserialize};

use crate::config::RevealConfig;
use crate::constants::CONTACT_EMAIL;
use crate::outcome_policy::{OutcomePolicy, RandomSource};
use crate::shared_reveal_flow::{
    transition, Effect, FlowVariant, Notification, Phase, RevealEvent, RevealState,
};
use crate::shared_slot_game::reel_outcome;
use crate::shared_wheel_game::{SpinAnimation, WheelGeometry};
use crate::timer_queue::TimerQueue;

/// Things a visitor can click.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    FlipCoin,
    OpenSlot,
    PullLever,
    OpenWheel,
    SpinWheel,
    Close,
}

/// Drives `transition` with a virtual clock. The UI feeds it clicks and the
/// current time, then renders `state()` and pops notifications.
pub struct RevealSession {
    variant: FlowVariant,
    state: RevealState,
    timers: TimerQueue<RevealEvent>,
    slot_policy: Box<dyn OutcomePolicy>,
    wheel_policy: Box<dyn OutcomePolicy>,
    visuals: Box<dyn RandomSource>,
    geometry: WheelGeometry,
    notifications: Vec<Notification>,
    confetti_pending: bool,
}

impl RevealSession {
    pub fn with_policies(
        variant: FlowVariant,
        slot_policy: Box<dyn OutcomePolicy>,
        wheel_policy: Box<dyn OutcomePolicy>,
        visuals: Box<dyn RandomSource>,
    ) -> Self {
        log::info!(
            "Reveal session: {:?}, slot {}, wheel {}",
            variant,
            slot_policy.name(),
            wheel_policy.name()
        );
        Self {
            variant,
            state: RevealState::default(),
            timers: TimerQueue::new(),
            slot_policy,
            wheel_policy,
            visuals,
            geometry: WheelGeometry::default(),
            notifications: Vec::new(),
            confetti_pending: false,
        }
    }

    /// Each policy gets its own source so the slot and wheel draws never
    /// interleave.
    pub fn from_config(
        config: &RevealConfig,
        slot_source: Box<dyn RandomSource>,
        wheel_source: Box<dyn RandomSource>,
        visuals: Box<dyn RandomSource>,
    ) -> Self {
        Self::with_policies(
            config.variant,
            config.slot_policy.build(slot_source),
            config.wheel_policy.build(wheel_source),
            visuals,
        )
    }

    pub fn state(&self) -> &RevealState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn variant(&self) -> FlowVariant {
        self.variant
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn next_due(&self) -> Option<u64> {
        self.timers.next_due()
    }

    pub fn send(&mut self, action: UserAction) {
        let event = match action {
            UserAction::FlipCoin => RevealEvent::FlipCoin,
            UserAction::OpenSlot => RevealEvent::OpenSlot,
            UserAction::OpenWheel => RevealEvent::OpenWheel,
            UserAction::Close => RevealEvent::Close,
            UserAction::PullLever => {
                if !self.state.can_pull_lever() {
                    return;
                }
                let attempt = self.state.slot_attempts + 1;
                let win = self.slot_policy.draw_outcome(attempt);
                let reels = reel_outcome(win, self.visuals.as_mut());
                log::info!("Slot attempt {}: {}", attempt, if win { "win" } else { "lose" });
                RevealEvent::SlotSpin { reels, win }
            }
            UserAction::SpinWheel => {
                if !self.state.can_spin_wheel() {
                    return;
                }
                let attempt = self.state.wheel_attempts + 1;
                let win = self.wheel_policy.draw_outcome(attempt);
                let rotation = self
                    .geometry
                    .target_rotation(self.state.rotation, win, self.visuals.as_mut());
                log::info!("Wheel attempt {}: {} at {:.1}°", attempt, if win { "win" } else { "lose" }, rotation);
                RevealEvent::WheelSpin { win, rotation }
            }
        };
        self.apply(event);
    }

    fn apply(&mut self, event: RevealEvent) {
        let (next, effects) = transition(&self.state, event, self.variant);
        self.state = next;

        for effect in effects {
            match effect {
                Effect::Schedule { delay_ms, event } => {
                    self.timers.schedule(delay_ms, event);
                }
                Effect::CancelTimers => self.timers.cancel_all(),
                Effect::Notify(notification) => self.notifications.push(notification),
                Effect::StartConfetti => self.confetti_pending = true,
            }
        }
    }

    /// Fires every timer due at or before `now_ms`, in due order.
    pub fn advance_to(&mut self, now_ms: u64) {
        while let Some((_, event)) = self.timers.pop_due(now_ms) {
            self.apply(event);
        }
        self.timers.set_now(now_ms);
    }

    pub fn advance_by(&mut self, delta_ms: u64) {
        let target = self.timers.now() + delta_ms;
        self.advance_to(target);
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// True once per reveal; the caller starts the confetti canvas.
    pub fn take_confetti(&mut self) -> bool {
        std::mem::replace(&mut self.confetti_pending, false)
    }

    /// Animation for the wheel spin in progress, if any.
    pub fn spin_animation(&self) -> Option<SpinAnimation> {
        self.state
            .wheel_spinning
            .then(|| SpinAnimation::new(self.state.spin_from, self.state.rotation))
    }

    pub fn contact(&self) -> Option<&'static str> {
        self.state.is_revealed().then_some(CONTACT_EMAIL)
    }
}
