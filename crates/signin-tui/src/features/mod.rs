//! Per-screen features. Each owns its state, key handling and rendering.

pub mod login;
pub mod welcome;
