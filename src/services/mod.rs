// src/services/mod.rs
pub mod connection;
pub mod decoder;
pub mod directory;
pub mod dispatcher;
pub mod filter;
pub mod mapper;
pub mod presenter;
pub mod store;
