//! Welcome screen: greeting and logout.

mod render;
mod update;

pub use render::render_welcome;
pub use update::{WelcomeAction, handle_welcome_key};
