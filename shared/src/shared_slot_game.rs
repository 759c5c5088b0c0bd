use serde::{Serialize, Deserialize};

use crate::constants::REEL_STOP_DELAYS_MS;
use crate::outcome_policy::RandomSource;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Cherry,
    Bell,
    Diamond,
    Bar,
    Star,
    Lemon,
    Seven,
}

impl Symbol {
    pub fn glyph(&self) -> &'static str {
        match self {
            Symbol::Cherry => "🍒",
            Symbol::Bell => "🔔",
            Symbol::Diamond => "💎",
            Symbol::Bar => "BAR",
            Symbol::Star => "⭐",
            Symbol::Lemon => "🍋",
            Symbol::Seven => "7",
        }
    }
}

/// Symbols shown while a reel is cycling. The seven only ever appears as a
/// final symbol.
pub const SLOT_SYMBOLS: [Symbol; 6] = [
    Symbol::Cherry,
    Symbol::Bell,
    Symbol::Diamond,
    Symbol::Bar,
    Symbol::Star,
    Symbol::Lemon,
];

pub const LOSING_TRIPLES: [[Symbol; 3]; 4] = [
    [Symbol::Cherry, Symbol::Bell, Symbol::Diamond],
    [Symbol::Bar, Symbol::Star, Symbol::Lemon],
    [Symbol::Bell, Symbol::Cherry, Symbol::Bar],
    [Symbol::Diamond, Symbol::Lemon, Symbol::Star],
];

pub const WINNING_TRIPLE: [Symbol; 3] = [Symbol::Seven, Symbol::Seven, Symbol::Seven];

/// Final symbols for one spin. The outcome is already decided; losing spins
/// only pick which losing row to show.
pub fn reel_outcome(win: bool, source: &mut dyn RandomSource) -> [Symbol; 3] {
    if win {
        WINNING_TRIPLE
    } else {
        LOSING_TRIPLES[source.next_index(LOSING_TRIPLES.len())]
    }
}

pub fn is_winning_triple(reels: &[Symbol; 3]) -> bool {
    *reels == WINNING_TRIPLE
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ReelFace {
    Blank,
    Symbol(Symbol),
}

impl ReelFace {
    pub fn glyph(&self) -> &'static str {
        match self {
            ReelFace::Blank => "?",
            ReelFace::Symbol(symbol) => symbol.glyph(),
        }
    }

    pub fn is_seven(&self) -> bool {
        matches!(self, ReelFace::Symbol(Symbol::Seven))
    }
}

/// Display state of a single reel during one spin.
#[derive(Debug, Clone, PartialEq)]
pub struct ReelSpin {
    pub target: Symbol,
    pub stop_delay_ms: u32,
    face: ReelFace,
    stopped_at: Option<u32>,
}

impl ReelSpin {
    pub fn new(target: Symbol, stop_delay_ms: u32) -> Self {
        Self {
            target,
            stop_delay_ms,
            face: ReelFace::Blank,
            stopped_at: None,
        }
    }

    /// Advances the reel to `elapsed_ms` since the spin started. Until the
    /// stop delay passes the face is a random cycling symbol.
    pub fn tick(&mut self, elapsed_ms: u32, source: &mut dyn RandomSource) -> ReelFace {
        if self.stopped_at.is_some() {
            return self.face;
        }
        if elapsed_ms >= self.stop_delay_ms {
            self.face = ReelFace::Symbol(self.target);
            self.stopped_at = Some(elapsed_ms);
        } else {
            self.face = ReelFace::Symbol(SLOT_SYMBOLS[source.next_index(SLOT_SYMBOLS.len())]);
        }
        self.face
    }

    pub fn face(&self) -> ReelFace {
        self.face
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped_at.is_some()
    }

    pub fn stopped_at(&self) -> Option<u32> {
        self.stopped_at
    }
}

pub fn reel_spins(targets: [Symbol; 3]) -> [ReelSpin; 3] {
    [0, 1, 2].map(|i| ReelSpin::new(targets[i], REEL_STOP_DELAYS_MS[i]))
}
