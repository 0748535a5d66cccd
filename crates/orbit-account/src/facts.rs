use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use tracing::{debug, warn};

use crate::{ProviderBinding, account_client::AccountFactsError};

/// Source of the independently fetched account facts.
#[async_trait::async_trait]
pub trait AccountFactsSource: Send + Sync {
    /// The identity providers currently linked to the account, in server
    /// order.
    async fn linked_providers(&self) -> Result<Vec<ProviderBinding>, AccountFactsError>;

    /// Whether the account has a password set.
    async fn has_password(&self) -> Result<bool, AccountFactsError>;
}

/// A complete set of account facts for the settings page.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AccountFacts {
    /// Linked identity providers, in the order the server reports them.
    pub linked_providers: Vec<ProviderBinding>,
    /// Whether the account has a password set. Parameterizes which
    /// password affordance the page offers (set vs. change).
    pub has_password: bool,
}

/// The published facts, or the fact that there are none yet.
///
/// "Still loading" is deliberately distinct from any loaded value; consumers
/// observe either a complete snapshot or none at all, never a partial mix.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum FactsSnapshot {
    /// No complete snapshot has been published yet.
    #[default]
    Loading,
    /// Both sub-fetches settled and this is the latest complete snapshot.
    Ready(AccountFacts),
}

impl FactsSnapshot {
    /// Whether a complete snapshot has been published.
    pub fn is_ready(&self) -> bool {
        matches!(self, FactsSnapshot::Ready(_))
    }
}

/// Fetches and aggregates the account facts behind the settings page.
///
/// Both sub-fetches run concurrently and both must settle before a snapshot
/// is published. A failed sub-fetch degrades to its safe default instead of
/// blocking the page: no providers, and no password. Treating a user as
/// passwordless only affects which password affordance is shown, never the
/// credential itself.
pub struct AccountFactsLoader {
    source: Arc<dyn AccountFactsSource>,
    // Generation guard: a refresh that finishes after a newer refresh has
    // published must be discarded, not applied (late write to a stale flow).
    generation: AtomicU64,
    published: Mutex<(u64, FactsSnapshot)>,
}

impl AccountFactsLoader {
    /// Creates a loader with nothing published yet.
    pub fn new(source: Arc<dyn AccountFactsSource>) -> Self {
        Self {
            source,
            generation: AtomicU64::new(0),
            published: Mutex::new((0, FactsSnapshot::Loading)),
        }
    }

    /// The latest published snapshot.
    pub fn facts(&self) -> FactsSnapshot {
        self.published
            .lock()
            .expect("Mutex is not poisoned")
            .1
            .clone()
    }

    /// Fetches both account facts, publishes the complete snapshot and
    /// returns it.
    ///
    /// May be called repeatedly; sibling widgets use this as their refresh
    /// hook after a security-related mutation. The returned facts are the
    /// ones this invocation fetched, even when a newer invocation has
    /// published in the meantime and this snapshot was discarded.
    pub async fn fetch_page_data(&self) -> AccountFacts {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let (providers, has_password) = tokio::join!(
            self.source.linked_providers(),
            self.source.has_password()
        );

        let facts = AccountFacts {
            linked_providers: providers.unwrap_or_else(|error| {
                warn!(%error, "Failed to fetch linked providers, showing none");
                Vec::new()
            }),
            has_password: has_password.unwrap_or_else(|error| {
                warn!(%error, "Failed to fetch has-password, assuming none");
                false
            }),
        };

        self.publish(generation, facts.clone());
        facts
    }

    /// Re-fetches only the linked providers and splices them into the
    /// published snapshot, leaving the has-password fact untouched.
    ///
    /// Used by the provider-management widget after linking or unlinking.
    /// If no snapshot has been published yet the fetched list is returned
    /// but nothing is spliced; the page is still gated on the full fetch.
    pub async fn refresh_linked_providers(&self) -> Vec<ProviderBinding> {
        let providers = match self.source.linked_providers().await {
            Ok(providers) => providers,
            Err(error) => {
                warn!(%error, "Failed to refresh linked providers, showing none");
                Vec::new()
            }
        };

        let mut published = self.published.lock().expect("Mutex is not poisoned");
        if let FactsSnapshot::Ready(facts) = &mut published.1 {
            facts.linked_providers = providers.clone();
        }

        providers
    }

    fn publish(&self, generation: u64, facts: AccountFacts) {
        let mut published = self.published.lock().expect("Mutex is not poisoned");
        if generation < published.0 {
            warn!(
                generation,
                newest = published.0,
                "Discarding stale account facts"
            );
            return;
        }

        debug!(generation, "Publishing account facts snapshot");
        *published = (generation, FactsSnapshot::Ready(facts));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use tokio::sync::Notify;

    use super::*;

    /// Scripted facts source: answers are popped per call, and the first
    /// call of either fetch can be parked until released.
    struct FakeSource {
        providers: Mutex<VecDeque<Result<Vec<ProviderBinding>, AccountFactsError>>>,
        passwords: Mutex<VecDeque<Result<bool, AccountFactsError>>>,
        providers_hold: Mutex<Option<Arc<Notify>>>,
        passwords_hold: Mutex<Option<Arc<Notify>>>,
    }

    impl FakeSource {
        fn new(
            providers: Vec<Result<Vec<ProviderBinding>, AccountFactsError>>,
            passwords: Vec<Result<bool, AccountFactsError>>,
        ) -> Self {
            Self {
                providers: Mutex::new(providers.into()),
                passwords: Mutex::new(passwords.into()),
                providers_hold: Mutex::new(None),
                passwords_hold: Mutex::new(None),
            }
        }

        fn hold_providers(self, release: Arc<Notify>) -> Self {
            *self.providers_hold.lock().unwrap() = Some(release);
            self
        }

        fn hold_passwords(self, release: Arc<Notify>) -> Self {
            *self.passwords_hold.lock().unwrap() = Some(release);
            self
        }
    }

    #[async_trait::async_trait]
    impl AccountFactsSource for FakeSource {
        async fn linked_providers(&self) -> Result<Vec<ProviderBinding>, AccountFactsError> {
            let hold = self.providers_hold.lock().unwrap().take();
            if let Some(release) = hold {
                release.notified().await;
            }
            self.providers
                .lock()
                .unwrap()
                .pop_front()
                .expect("test queued too few provider responses")
        }

        async fn has_password(&self) -> Result<bool, AccountFactsError> {
            let hold = self.passwords_hold.lock().unwrap().take();
            if let Some(release) = hold {
                release.notified().await;
            }
            self.passwords
                .lock()
                .unwrap()
                .pop_front()
                .expect("test queued too few password responses")
        }
    }

    fn binding(provider_name: &str) -> ProviderBinding {
        ProviderBinding {
            provider_name: provider_name.to_string(),
            account_email: None,
            avatar_url: None,
        }
    }

    fn transport_fault() -> AccountFactsError {
        AccountFactsError::Api(orbit_core::ApiError::ResponseContent {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            message: "upstream unavailable".to_string(),
        })
    }

    #[tokio::test]
    async fn test_snapshot_published_once_both_fetches_settle() {
        let release = Arc::new(Notify::new());
        let source = Arc::new(
            FakeSource::new(vec![Ok(vec![binding("github")])], vec![Ok(true)])
                .hold_passwords(release.clone()),
        );
        let loader = AccountFactsLoader::new(source);

        // Providers settle first; the snapshot must stay unpublished until
        // has-password settles too.
        let (facts, ()) = tokio::join!(loader.fetch_page_data(), async {
            tokio::task::yield_now().await;
            tokio::task::yield_now().await;
            assert_eq!(loader.facts(), FactsSnapshot::Loading);
            release.notify_one();
        });

        assert!(facts.has_password);
        assert_eq!(loader.facts(), FactsSnapshot::Ready(facts));
    }

    #[tokio::test]
    async fn test_snapshot_published_in_the_opposite_settle_order() {
        let release = Arc::new(Notify::new());
        let source = Arc::new(
            FakeSource::new(vec![Ok(vec![binding("github")])], vec![Ok(true)])
                .hold_providers(release.clone()),
        );
        let loader = AccountFactsLoader::new(source);

        let (facts, ()) = tokio::join!(loader.fetch_page_data(), async {
            tokio::task::yield_now().await;
            tokio::task::yield_now().await;
            assert_eq!(loader.facts(), FactsSnapshot::Loading);
            release.notify_one();
        });

        assert_eq!(facts.linked_providers, vec![binding("github")]);
        assert_eq!(loader.facts(), FactsSnapshot::Ready(facts));
    }

    #[tokio::test]
    async fn test_failed_provider_fetch_degrades_to_empty() {
        let source = Arc::new(FakeSource::new(vec![Err(transport_fault())], vec![Ok(true)]));
        let loader = AccountFactsLoader::new(source);

        let facts = loader.fetch_page_data().await;

        assert!(facts.linked_providers.is_empty());
        assert!(facts.has_password);
        assert!(loader.facts().is_ready());
    }

    #[tokio::test]
    async fn test_failed_has_password_fetch_degrades_to_false() {
        let source = Arc::new(FakeSource::new(
            vec![Ok(vec![binding("github")])],
            vec![Err(transport_fault())],
        ));
        let loader = AccountFactsLoader::new(source);

        let facts = loader.fetch_page_data().await;

        // Safety-leaning default: the page still reaches ready.
        assert!(!facts.has_password);
        assert!(loader.facts().is_ready());
    }

    #[tokio::test]
    async fn test_stale_refresh_does_not_overwrite_newer_snapshot() {
        let release = Arc::new(Notify::new());
        let source = Arc::new(
            FakeSource::new(
                // Popped in call order: the parked first refresh pops after
                // the second one, so its answers are queued last.
                vec![Ok(vec![]), Ok(vec![binding("github")])],
                vec![Ok(false), Ok(true)],
            )
            .hold_providers(release.clone())
            .hold_passwords(release.clone()),
        );
        let loader = AccountFactsLoader::new(source);

        // The first refresh parks inside both sub-fetches; the second one
        // starts later, finishes first and publishes. The first must then be
        // discarded.
        let (stale, ()) = tokio::join!(loader.fetch_page_data(), async {
            tokio::task::yield_now().await;
            let fresh = loader.fetch_page_data().await;
            assert_eq!(fresh.linked_providers, Vec::<ProviderBinding>::new());
            release.notify_one();
            release.notify_one();
        });

        assert_eq!(stale.linked_providers, vec![binding("github")]);
        assert_eq!(
            loader.facts(),
            FactsSnapshot::Ready(AccountFacts {
                linked_providers: vec![],
                has_password: false,
            })
        );
    }

    #[tokio::test]
    async fn test_partial_provider_refresh_keeps_has_password() {
        let source = Arc::new(FakeSource::new(
            vec![Ok(vec![binding("github")]), Ok(vec![binding("gitlab")])],
            vec![Ok(true)],
        ));
        let loader = AccountFactsLoader::new(source);

        loader.fetch_page_data().await;
        let providers = loader.refresh_linked_providers().await;

        assert_eq!(providers, vec![binding("gitlab")]);
        assert_eq!(
            loader.facts(),
            FactsSnapshot::Ready(AccountFacts {
                linked_providers: vec![binding("gitlab")],
                has_password: true,
            })
        );
    }

    #[tokio::test]
    async fn test_partial_refresh_before_full_fetch_publishes_nothing() {
        let source = Arc::new(FakeSource::new(vec![Ok(vec![binding("github")])], vec![]));
        let loader = AccountFactsLoader::new(source);

        let providers = loader.refresh_linked_providers().await;

        assert_eq!(providers, vec![binding("github")]);
        assert_eq!(loader.facts(), FactsSnapshot::Loading);
    }
}
