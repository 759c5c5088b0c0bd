pub mod form_state;
pub mod use_countdown;
pub mod use_reveal_session;
pub mod use_view_count;

pub use form_state::*;
pub use use_countdown::*;
pub use use_reveal_session::*;
pub use use_view_count::*;
