// src/models/mod.rs
pub mod event;
pub mod view;

pub use event::*;
pub use view::*;
