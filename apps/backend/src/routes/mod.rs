//! HTTP route handlers

pub mod practice;
pub mod stats;
pub mod words;
