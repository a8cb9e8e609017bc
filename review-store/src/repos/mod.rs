//! Repository implementations

pub mod reviews;
