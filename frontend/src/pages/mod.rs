pub mod blog;
pub mod blog_post;
pub mod home;
pub mod not_found;
pub mod reveal;
