//! Row models and DTOs.

pub mod passport;
