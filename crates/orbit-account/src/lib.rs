#![doc = include_str!("../README.md")]

mod account_client;
mod facts;
mod gate;
mod provider_binding;
mod settings_flow;

mod api;

pub use account_client::{AccountClient, AccountFactsError};
pub use facts::{AccountFacts, AccountFactsLoader, AccountFactsSource, FactsSnapshot};
pub use gate::{LoginNavigator, PageState, SessionGate, page_state};
pub use provider_binding::ProviderBinding;
pub use settings_flow::{AccountSettingsExt, AccountSettingsFlow};
