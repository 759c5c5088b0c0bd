pub mod constants;
pub mod timer_queue;
pub mod outcome_policy;
pub mod shared_slot_game;
pub mod shared_wheel_game;
pub mod confetti;
pub mod shared_reveal_flow;
pub mod reveal_session;
pub mod config;
pub mod contact;
pub mod blog;
pub mod markdown;
pub mod countdown;
