//! Request handlers

pub mod rating;
pub mod history;
pub mod health;
