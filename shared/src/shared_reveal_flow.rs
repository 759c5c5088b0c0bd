use serde::{Serialize, Deserialize};

use crate::constants::*;
use crate::shared_slot_game::Symbol;

/// Where the contact reveal currently is. Exactly one is active.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Idle,
    CoinFlipping,
    CoinLanding,
    CoinDone,
    Slot,
    SlotWon,
    Wheel,
    Revealed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FlowVariant {
    /// Coin, slot machine, reveal.
    #[default]
    TwoStage,
    /// Coin, slot machine, wheel of fortune, reveal.
    ThreeStage,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub duration_ms: u32,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: &str, duration_ms: u32) -> Self {
        Self { kind, message: message.to_string(), duration_ms }
    }

    pub fn success(message: &str, duration_ms: u32) -> Self {
        Self::new(NotificationKind::Success, message, duration_ms)
    }

    pub fn error(message: &str, duration_ms: u32) -> Self {
        Self::new(NotificationKind::Error, message, duration_ms)
    }

    pub fn info(message: &str, duration_ms: u32) -> Self {
        Self::new(NotificationKind::Info, message, duration_ms)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub enum RevealEvent {
    FlipCoin,
    CoinLanded,
    CoinSettled,
    OpenSlot,
    SlotSpin { reels: [Symbol; 3], win: bool },
    SlotStopped { win: bool },
    SlotCelebrated,
    OpenWheel,
    WheelSpin { win: bool, rotation: f64 },
    WheelStopped { win: bool },
    Close,
    ConfettiDone,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Schedule { delay_ms: u32, event: RevealEvent },
    CancelTimers,
    Notify(Notification),
    StartConfetti,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RevealState {
    pub phase: Phase,
    pub slot_attempts: u32,
    pub wheel_attempts: u32,
    pub reels: Option<[Symbol; 3]>,
    pub slot_spinning: bool,
    pub wheel_spinning: bool,
    /// Accumulated wheel rotation in degrees. Only ever grows.
    pub rotation: f64,
    /// Rotation the current (or last) spin started from.
    pub spin_from: f64,
    pub confetti: bool,
}

impl Default for RevealState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            slot_attempts: 0,
            wheel_attempts: 0,
            reels: None,
            slot_spinning: false,
            wheel_spinning: false,
            rotation: 0.0,
            spin_from: 0.0,
            confetti: false,
        }
    }
}

impl RevealState {
    pub fn can_pull_lever(&self) -> bool {
        self.phase == Phase::Slot && !self.slot_spinning
    }

    pub fn can_spin_wheel(&self) -> bool {
        self.phase == Phase::Wheel && !self.wheel_spinning
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == Phase::Revealed
    }

    fn reset_slot(&mut self) {
        self.slot_attempts = 0;
        self.reels = None;
        self.slot_spinning = false;
    }

    fn reset_wheel(&mut self) {
        self.wheel_attempts = 0;
        self.wheel_spinning = false;
    }
}

fn reveal(mut state: RevealState) -> (RevealState, Vec<Effect>) {
    state.phase = Phase::Revealed;
    state.confetti = true;
    let effects = vec![
        Effect::StartConfetti,
        Effect::Notify(Notification::success(REVEALED_MESSAGE, REVEALED_TOAST_MS)),
        Effect::Schedule { delay_ms: CONFETTI_DURATION_MS, event: RevealEvent::ConfettiDone },
    ];
    (state, effects)
}

/// Pure state transition. Events that make no sense in the current phase
/// return the state unchanged and no effects.
pub fn transition(state: &RevealState, event: RevealEvent, variant: FlowVariant) -> (RevealState, Vec<Effect>) {
    let mut next = state.clone();

    let (next, effects) = match (state.phase, event) {
        (Phase::Idle, RevealEvent::FlipCoin) => {
            next.phase = Phase::CoinFlipping;
            (next, vec![Effect::Schedule { delay_ms: COIN_FLIP_MS, event: RevealEvent::CoinLanded }])
        }
        (Phase::CoinFlipping, RevealEvent::CoinLanded) => {
            next.phase = Phase::CoinLanding;
            (next, vec![Effect::Schedule { delay_ms: COIN_LANDING_MS, event: RevealEvent::CoinSettled }])
        }
        (Phase::CoinLanding, RevealEvent::CoinSettled) => {
            next.phase = Phase::CoinDone;
            (next, Vec::new())
        }
        (Phase::CoinDone, RevealEvent::OpenSlot) => {
            next.phase = Phase::Slot;
            next.reset_slot();
            (next, Vec::new())
        }
        (Phase::Slot, RevealEvent::SlotSpin { reels, win }) if !state.slot_spinning => {
            next.slot_attempts += 1;
            next.reels = Some(reels);
            next.slot_spinning = true;
            (next, vec![Effect::Schedule { delay_ms: SLOT_SETTLE_MS, event: RevealEvent::SlotStopped { win } }])
        }
        (Phase::Slot, RevealEvent::SlotStopped { win }) if state.slot_spinning => {
            next.slot_spinning = false;
            if win {
                next.phase = Phase::SlotWon;
                (next, vec![
                    Effect::Notify(Notification::info(SLOT_WIN_MESSAGE, SLOT_WIN_TOAST_MS)),
                    Effect::Schedule { delay_ms: SLOT_CELEBRATION_MS, event: RevealEvent::SlotCelebrated },
                ])
            } else {
                (next, vec![Effect::Notify(Notification::error(SLOT_LOSE_MESSAGE, LOSE_TOAST_MS))])
            }
        }
        (Phase::SlotWon, RevealEvent::SlotCelebrated) => match variant {
            FlowVariant::TwoStage => reveal(next),
            FlowVariant::ThreeStage => {
                next.phase = Phase::Wheel;
                next.reset_wheel();
                (next, Vec::new())
            }
        },
        (Phase::SlotWon, RevealEvent::OpenWheel) if variant == FlowVariant::ThreeStage => {
            next.phase = Phase::Wheel;
            next.reset_wheel();
            (next, Vec::new())
        }
        (Phase::Wheel, RevealEvent::WheelSpin { win, rotation })
            if !state.wheel_spinning && rotation > state.rotation =>
        {
            next.wheel_attempts += 1;
            next.wheel_spinning = true;
            next.spin_from = state.rotation;
            next.rotation = rotation;
            (next, vec![Effect::Schedule { delay_ms: WHEEL_SPIN_MS, event: RevealEvent::WheelStopped { win } }])
        }
        (Phase::Wheel, RevealEvent::WheelStopped { win }) if state.wheel_spinning => {
            next.wheel_spinning = false;
            if win {
                reveal(next)
            } else {
                (next, vec![Effect::Notify(Notification::error(WHEEL_LOSE_MESSAGE, LOSE_TOAST_MS))])
            }
        }
        (Phase::Slot, RevealEvent::Close) => {
            next.phase = Phase::CoinDone;
            next.reset_slot();
            (next, vec![Effect::CancelTimers])
        }
        (Phase::Wheel, RevealEvent::Close) => {
            next.phase = Phase::SlotWon;
            next.reset_wheel();
            (next, vec![Effect::CancelTimers])
        }
        (Phase::Revealed, RevealEvent::ConfettiDone) => {
            next.confetti = false;
            (next, Vec::new())
        }
        (phase, event) => {
            log::trace!("Ignoring {:?} in phase {:?}", event, phase);
            return (state.clone(), Vec::new());
        }
    };

    if next.phase != state.phase {
        log::debug!("Reveal phase {:?} -> {:?}", state.phase, next.phase);
    }
    (next, effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_slot_game::{LOSING_TRIPLES, WINNING_TRIPLE};

    fn apply(state: &RevealState, event: RevealEvent) -> (RevealState, Vec<Effect>) {
        transition(state, event, FlowVariant::TwoStage)
    }

    fn at_phase(phase: Phase) -> RevealState {
        RevealState { phase, ..RevealState::default() }
    }

    #[test]
    fn test_coin_sequence_schedules_each_step() {
        let (state, effects) = apply(&RevealState::default(), RevealEvent::FlipCoin);
        assert_eq!(state.phase, Phase::CoinFlipping);
        assert_eq!(effects, vec![Effect::Schedule { delay_ms: COIN_FLIP_MS, event: RevealEvent::CoinLanded }]);

        let (state, effects) = apply(&state, RevealEvent::CoinLanded);
        assert_eq!(state.phase, Phase::CoinLanding);
        assert_eq!(effects, vec![Effect::Schedule { delay_ms: COIN_LANDING_MS, event: RevealEvent::CoinSettled }]);

        let (state, effects) = apply(&state, RevealEvent::CoinSettled);
        assert_eq!(state.phase, Phase::CoinDone);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_no_phase_is_skipped() {
        let idle = RevealState::default();
        for event in [RevealEvent::CoinSettled, RevealEvent::OpenSlot, RevealEvent::SlotCelebrated, RevealEvent::Close] {
            let (state, effects) = apply(&idle, event);
            assert_eq!(state, idle);
            assert!(effects.is_empty());
        }
        // A second click while flipping does nothing.
        let flipping = at_phase(Phase::CoinFlipping);
        assert_eq!(apply(&flipping, RevealEvent::FlipCoin).0, flipping);
    }

    #[test]
    fn test_slot_spin_counts_attempts_and_blocks_double_pull() {
        let slot = at_phase(Phase::Slot);
        let spin = RevealEvent::SlotSpin { reels: LOSING_TRIPLES[0], win: false };
        let (state, effects) = apply(&slot, spin);
        assert_eq!(state.slot_attempts, 1);
        assert!(state.slot_spinning);
        assert_eq!(state.reels, Some(LOSING_TRIPLES[0]));
        assert_eq!(effects, vec![Effect::Schedule {
            delay_ms: SLOT_SETTLE_MS,
            event: RevealEvent::SlotStopped { win: false },
        }]);

        let (again, effects) = apply(&state, spin);
        assert_eq!(again.slot_attempts, 1);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_losing_slot_stop_notifies_error() {
        let state = RevealState { slot_spinning: true, slot_attempts: 1, ..at_phase(Phase::Slot) };
        let (state, effects) = apply(&state, RevealEvent::SlotStopped { win: false });
        assert_eq!(state.phase, Phase::Slot);
        assert!(!state.slot_spinning);
        assert_eq!(effects, vec![Effect::Notify(Notification::error(SLOT_LOSE_MESSAGE, LOSE_TOAST_MS))]);
    }

    #[test]
    fn test_two_stage_reveals_after_celebration() {
        let state = RevealState { slot_spinning: true, reels: Some(WINNING_TRIPLE), ..at_phase(Phase::Slot) };
        let (state, effects) = apply(&state, RevealEvent::SlotStopped { win: true });
        assert_eq!(state.phase, Phase::SlotWon);
        assert!(effects.contains(&Effect::Schedule {
            delay_ms: SLOT_CELEBRATION_MS,
            event: RevealEvent::SlotCelebrated,
        }));

        let (state, effects) = apply(&state, RevealEvent::SlotCelebrated);
        assert_eq!(state.phase, Phase::Revealed);
        assert!(state.confetti);
        assert_eq!(effects[0], Effect::StartConfetti);
        assert!(effects.contains(&Effect::Notify(Notification::success(REVEALED_MESSAGE, REVEALED_TOAST_MS))));
    }

    #[test]
    fn test_three_stage_moves_to_wheel() {
        let (state, _) = transition(&at_phase(Phase::SlotWon), RevealEvent::SlotCelebrated, FlowVariant::ThreeStage);
        assert_eq!(state.phase, Phase::Wheel);
        assert_eq!(state.wheel_attempts, 0);
    }

    #[test]
    fn test_open_wheel_only_in_three_stage() {
        let won = at_phase(Phase::SlotWon);
        assert_eq!(transition(&won, RevealEvent::OpenWheel, FlowVariant::TwoStage).0.phase, Phase::SlotWon);
        assert_eq!(transition(&won, RevealEvent::OpenWheel, FlowVariant::ThreeStage).0.phase, Phase::Wheel);
    }

    #[test]
    fn test_wheel_rotation_must_grow() {
        let wheel = RevealState { rotation: 2000.0, ..at_phase(Phase::Wheel) };
        let backwards = RevealEvent::WheelSpin { win: true, rotation: 1500.0 };
        assert_eq!(transition(&wheel, backwards, FlowVariant::ThreeStage).0, wheel);

        let forwards = RevealEvent::WheelSpin { win: false, rotation: 4000.0 };
        let (state, _) = transition(&wheel, forwards, FlowVariant::ThreeStage);
        assert_eq!(state.spin_from, 2000.0);
        assert_eq!(state.rotation, 4000.0);
        assert_eq!(state.wheel_attempts, 1);
    }

    #[test]
    fn test_wheel_loss_stays_on_wheel() {
        let spinning = RevealState { wheel_spinning: true, wheel_attempts: 1, rotation: 900.0, ..at_phase(Phase::Wheel) };
        let (state, effects) = transition(&spinning, RevealEvent::WheelStopped { win: false }, FlowVariant::ThreeStage);
        assert_eq!(state.phase, Phase::Wheel);
        assert_eq!(state.wheel_attempts, 1);
        assert_eq!(effects, vec![Effect::Notify(Notification::error(WHEEL_LOSE_MESSAGE, LOSE_TOAST_MS))]);

        let (state, _) = transition(
            &RevealState { wheel_spinning: true, ..state },
            RevealEvent::WheelStopped { win: true },
            FlowVariant::ThreeStage,
        );
        assert_eq!(state.phase, Phase::Revealed);
    }

    #[test]
    fn test_close_returns_to_previous_phase() {
        let slot = RevealState { slot_attempts: 2, slot_spinning: true, reels: Some(LOSING_TRIPLES[1]), ..at_phase(Phase::Slot) };
        let (state, effects) = apply(&slot, RevealEvent::Close);
        assert_eq!(state.phase, Phase::CoinDone);
        assert_eq!(state.slot_attempts, 0);
        assert_eq!(state.reels, None);
        assert_eq!(effects, vec![Effect::CancelTimers]);

        let wheel = RevealState { wheel_attempts: 4, rotation: 3000.0, ..at_phase(Phase::Wheel) };
        let (state, effects) = transition(&wheel, RevealEvent::Close, FlowVariant::ThreeStage);
        assert_eq!(state.phase, Phase::SlotWon);
        assert_eq!(state.wheel_attempts, 0);
        assert_eq!(state.rotation, 3000.0);
        assert_eq!(effects, vec![Effect::CancelTimers]);
    }

    #[test]
    fn test_revealed_is_terminal() {
        let revealed = RevealState { confetti: true, ..at_phase(Phase::Revealed) };
        for event in [RevealEvent::FlipCoin, RevealEvent::OpenSlot, RevealEvent::Close, RevealEvent::OpenWheel] {
            assert_eq!(apply(&revealed, event).0.phase, Phase::Revealed);
        }
        let (state, _) = apply(&revealed, RevealEvent::ConfettiDone);
        assert_eq!(state.phase, Phase::Revealed);
        assert!(!state.confetti);
    }

    #[test]
    fn test_phase_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&Phase::CoinFlipping).unwrap(), "\"coin-flipping\"");
        assert_eq!(serde_json::to_string(&FlowVariant::ThreeStage).unwrap(), "\"three-stage\"");
    }
}
