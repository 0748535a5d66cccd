#![doc = include_str!("../README.md")]

pub mod client;
mod error;
pub mod session;

pub use client::{ApiConfiguration, Client, ClientSettings};
pub use error::{ApiError, MissingFieldError};
pub use session::{SessionIdentity, UserProfile};
