//! Core library for signin: configuration, the user directory client,
//! the credential check and the session value.

pub mod auth;
pub mod config;
pub mod directory;
pub mod logging;
pub mod session;
