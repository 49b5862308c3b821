//! Request handlers

pub mod health;
pub mod catalog;
pub mod quote;
pub mod explanation;
