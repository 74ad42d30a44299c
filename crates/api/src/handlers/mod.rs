//! Request handlers.
//!
//! Handlers validate input with `passport_core`, delegate persistence to
//! `passport_db` / `passport_storage` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod passport;
pub mod photo;
