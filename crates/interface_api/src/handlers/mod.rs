//! Request handlers

pub mod cases;
pub mod health;
pub mod metrics;
pub mod policies;
