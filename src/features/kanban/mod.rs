pub mod components;
pub mod hooks;
pub mod services;

pub use components::*;
