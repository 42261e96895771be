// src/core.rs
pub mod modes;
pub mod naming;
pub mod resolve;
pub mod walker;
