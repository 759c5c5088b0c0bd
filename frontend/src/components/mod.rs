pub mod confetti;
pub mod contact_form;
pub mod countdown;
pub mod markdown_view;
pub mod slot_reel;
pub mod view_counter;

pub use confetti::Confetti;
pub use contact_form::ContactForm;
pub use countdown::Countdown;
pub use markdown_view::MarkdownView;
pub use slot_reel::SlotReel;
pub use view_counter::ViewCounter;
