pub const CONTACT_EMAIL: &str = "vili@matilda.media";
pub const SITE_NAME: &str = "MATILDA MEDIA";

// Coin flip
pub const COIN_FLIP_MS: u32 = 2500;
pub const COIN_LANDING_MS: u32 = 1000;

// Slot machine
pub const REEL_STOP_DELAYS_MS: [u32; 3] = [1200, 1800, 2400];
pub const REEL_TICK_MS: u32 = 100;
pub const SLOT_SETTLE_MS: u32 = 2600;
pub const LEVER_PULL_MS: u32 = 500;
pub const SLOT_CELEBRATION_MS: u32 = 2500;
pub const SCRIPTED_WIN_ATTEMPT: u32 = 3;

// Wheel of fortune
pub const WHEEL_SPIN_MS: u32 = 4000;
pub const FAIR_WIN_PROBABILITY: f64 = 0.5;

// Confetti
pub const CONFETTI_DURATION_MS: u32 = 7000;
pub const CONFETTI_WAVE_SIZE: usize = 80;
pub const CONFETTI_WAVE_OFFSETS_MS: [u32; 3] = [0, 1500, 3000];
pub const CONFETTI_FADE_MS: f64 = 1000.0;

// Notifications
pub const SLOT_LOSE_MESSAGE: &str = "Ei tärpännyt! Kokeile uudelleen 🎰";
pub const SLOT_WIN_MESSAGE: &str = "🎰 7 7 7 – JACKPOT!";
pub const WHEEL_LOSE_MESSAGE: &str = "Punainen! Onni ei suosinut – pyöräytä uudelleen 🎡";
pub const REVEALED_MESSAGE: &str = "🎉 Yhteystiedot paljastettu!";
pub const CONTACT_SENT_MESSAGE: &str = "Sähköpostiohjelma avautuu…";
pub const CONTACT_INVALID_MESSAGE: &str = "Tarkista lomakkeen kentät";

pub const LOSE_TOAST_MS: u32 = 3000;
pub const SLOT_WIN_TOAST_MS: u32 = 4000;
pub const REVEALED_TOAST_MS: u32 = 5000;
pub const CONTACT_TOAST_MS: u32 = 4000;

// View counter and countdown
pub const TARGET_VIEWS: u64 = 22_000_000;
pub const VIEW_RAMP_MS: u64 = 360_000;
pub const VIEW_TICK_MS: u32 = 2000;
pub const COUNTDOWN_TARGET: &str = "2027-07-01T00:00:00";
