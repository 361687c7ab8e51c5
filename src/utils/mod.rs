// src/utils/mod.rs
pub mod markup;
