//! Login screen: email, password and submit.

mod render;
mod state;
mod update;

pub use render::render_login;
pub use state::{Field, LoginForm};
pub use update::{LoginAction, handle_login_key, handle_login_paste};
