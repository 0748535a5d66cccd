use std::sync::Arc;

use orbit_core::{Client, SessionIdentity, UserProfile};

use crate::{
    AccountClient, AccountFacts, AccountFactsLoader, FactsSnapshot, LoginNavigator, PageState,
    ProviderBinding, SessionGate,
};

/// Binds the account-settings data flow for one page visit: the ambient
/// session identity, the facts loader and the session gate.
///
/// Rendering stays with the frontend; this type only answers what to show
/// (loading, redirect, full page) and carries the data the page needs.
pub struct AccountSettingsFlow {
    client: Client,
    loader: AccountFactsLoader,
    gate: SessionGate,
}

impl AccountSettingsFlow {
    /// Creates the flow against the given client, redirecting through
    /// `navigator` when the session turns out to be gone.
    pub fn new(client: Client, navigator: Arc<dyn LoginNavigator>) -> Self {
        let source = Arc::new(AccountClient::new(client.clone()));
        Self {
            client,
            loader: AccountFactsLoader::new(source),
            gate: SessionGate::new(navigator),
        }
    }

    /// Applies the gating policy to the current session identity and facts.
    /// Call on every identity change; the login redirect fires from here.
    pub fn evaluate(&self) -> PageState {
        self.gate
            .evaluate(&self.client.session_identity(), &self.loader.facts())
    }

    /// Fetches both account facts and publishes the snapshot. Exposed to
    /// sibling widgets as their refresh hook after a mutation.
    pub async fn fetch_page_data(&self) -> AccountFacts {
        self.loader.fetch_page_data().await
    }

    /// Refreshes only the linked-providers list, for the provider-management
    /// widget.
    pub async fn refresh_linked_providers(&self) -> Vec<ProviderBinding> {
        self.loader.refresh_linked_providers().await
    }

    /// The latest published facts snapshot.
    pub fn facts(&self) -> FactsSnapshot {
        self.loader.facts()
    }

    /// Profile data of the authenticated session, if any.
    pub fn profile(&self) -> Option<UserProfile> {
        self.client.session_identity().profile().cloned()
    }

    /// The replace-session callback handed to the profile-edit collaborator.
    pub fn replace_session(&self, identity: SessionIdentity) {
        self.client.replace_session(identity);
    }
}

/// Extension trait for `Client` to enter the account-settings flow.
pub trait AccountSettingsExt {
    /// Creates a new [`AccountSettingsFlow`] instance.
    fn account_settings(&self, navigator: Arc<dyn LoginNavigator>) -> AccountSettingsFlow;
}

impl AccountSettingsExt for Client {
    fn account_settings(&self, navigator: Arc<dyn LoginNavigator>) -> AccountSettingsFlow {
        AccountSettingsFlow::new(self.clone(), navigator)
    }
}
