//! Request/Response data transfer objects

pub mod rating;
