use std::collections::VecDeque;

use rand::{Rng, RngCore};
use serde::{Serialize, Deserialize};

use crate::constants::{FAIR_WIN_PROBABILITY, SCRIPTED_WIN_ATTEMPT};

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        ((self.next_unit() * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// Uniform value in `[low, high)`.
    fn next_range(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of draws, then keeps returning `fallback`.
#[derive(Debug, Clone)]
pub struct ScriptedDraws {
    draws: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedDraws {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback: 0.5,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(std::iter::empty()).with_fallback(value)
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }
}

impl RandomSource for ScriptedDraws {
    fn next_unit(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}

/// Decides whether a given attempt of a mini-game wins. `attempt` is 1-based.
pub trait OutcomePolicy {
    fn draw_outcome(&mut self, attempt: u32) -> bool;

    fn name(&self) -> &'static str;
}

/// Rigged: every attempt before `win_on_attempt` loses, that one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedPolicy {
    pub win_on_attempt: u32,
}

impl Default for ScriptedPolicy {
    fn default() -> Self {
        Self { win_on_attempt: SCRIPTED_WIN_ATTEMPT }
    }
}

impl OutcomePolicy for ScriptedPolicy {
    fn draw_outcome(&mut self, attempt: u32) -> bool {
        attempt >= self.win_on_attempt
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Independent draw per attempt; the attempt number is ignored.
pub struct FairPolicy {
    pub win_probability: f64,
    source: Box<dyn RandomSource>,
}

impl FairPolicy {
    pub fn new(win_probability: f64, source: Box<dyn RandomSource>) -> Self {
        Self {
            win_probability: win_probability.clamp(0.0, 1.0),
            source,
        }
    }
}

impl OutcomePolicy for FairPolicy {
    fn draw_outcome(&mut self, _attempt: u32) -> bool {
        self.source.next_unit() < self.win_probability
    }

    fn name(&self) -> &'static str {
        "fair"
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyKind {
    Scripted { win_on_attempt: u32 },
    Fair { win_probability: f64 },
}

impl PolicyKind {
    pub fn scripted() -> Self {
        Self::Scripted { win_on_attempt: SCRIPTED_WIN_ATTEMPT }
    }

    pub fn fair() -> Self {
        Self::Fair { win_probability: FAIR_WIN_PROBABILITY }
    }

    /// `source` is only consumed by the fair policy.
    pub fn build(self, source: Box<dyn RandomSource>) -> Box<dyn OutcomePolicy> {
        match self {
            Self::Scripted { win_on_attempt } => Box::new(ScriptedPolicy {
                win_on_attempt: win_on_attempt.max(1),
            }),
            Self::Fair { win_probability } => Box::new(FairPolicy::new(win_probability, source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scripted_wins_on_third_attempt() {
        let mut policy = ScriptedPolicy::default();
        assert!(!policy.draw_outcome(1));
        assert!(!policy.draw_outcome(2));
        assert!(policy.draw_outcome(3));
    }

    #[test]
    fn test_scripted_is_deterministic() {
        for _ in 0..50 {
            let mut policy = ScriptedPolicy::default();
            let outcomes: Vec<bool> = (1..=3).map(|attempt| policy.draw_outcome(attempt)).collect();
            assert_eq!(outcomes, vec![false, false, true]);
        }
    }

    #[test]
    fn test_fair_threshold_mapping() {
        let mut policy = FairPolicy::new(0.5, Box::new(ScriptedDraws::new([0.49, 0.51, 0.0, 0.5])));
        assert!(policy.draw_outcome(1));
        assert!(!policy.draw_outcome(2));
        assert!(policy.draw_outcome(3));
        // The threshold is exclusive.
        assert!(!policy.draw_outcome(4));
    }

    #[test]
    fn test_fair_ignores_attempt_number() {
        for attempt in [1, 2, 3, 100] {
            let mut policy = FairPolicy::new(0.5, Box::new(ScriptedDraws::constant(0.7)));
            assert!(!policy.draw_outcome(attempt));
            let mut policy = FairPolicy::new(0.5, Box::new(ScriptedDraws::constant(0.2)));
            assert!(policy.draw_outcome(attempt));
        }
    }

    #[test]
    fn test_fair_consumes_one_draw_per_call() {
        let mut policy = FairPolicy::new(0.5, Box::new(ScriptedDraws::new([0.9, 0.1])));
        assert!(!policy.draw_outcome(1));
        assert!(policy.draw_outcome(1));
    }

    #[test]
    fn test_rng_source_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let value = rng.next_unit();
            assert!((0.0..1.0).contains(&value));
            assert!(rng.next_index(4) < 4);
        }
    }

    #[test]
    fn test_policy_kind_builds_named_policy() {
        let scripted = PolicyKind::scripted().build(Box::new(ScriptedDraws::constant(0.0)));
        assert_eq!(scripted.name(), "scripted");
        let fair = PolicyKind::fair().build(Box::new(ScriptedDraws::constant(0.0)));
        assert_eq!(fair.name(), "fair");
    }

    #[test]
    fn test_policy_kind_serde_shape() {
        let json = serde_json::to_string(&PolicyKind::fair()).unwrap();
        assert_eq!(json, r#"{"kind":"fair","win_probability":0.5}"#);
    }
}
