#![doc = include_str!("../README.md")]

mod auth_client;

pub mod password_confirmation;

pub use auth_client::{AuthClient, AuthClientExt};
