use std::sync::{Arc, Mutex};

use orbit_core::SessionIdentity;
use tracing::info;

use crate::facts::FactsSnapshot;

/// What the settings page should currently show.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageState {
    /// Session or facts are not known yet.
    Loading,
    /// The session is definitively unauthenticated.
    RedirectToLogin,
    /// Session and facts are both resolved; render the full page.
    Ready,
}

/// The complete gating policy. No other combination is valid.
///
/// | identity  | facts ready | page state        |
/// |-----------|-------------|-------------------|
/// | `Unknown` | —           | `Loading`         |
/// | `Absent`  | —           | `RedirectToLogin` |
/// | `Present` | no          | `Loading`         |
/// | `Present` | yes         | `Ready`           |
pub fn page_state(identity: &SessionIdentity, facts: &FactsSnapshot) -> PageState {
    match identity {
        SessionIdentity::Unknown => PageState::Loading,
        SessionIdentity::Absent => PageState::RedirectToLogin,
        SessionIdentity::Present(_) => {
            if facts.is_ready() {
                PageState::Ready
            } else {
                PageState::Loading
            }
        }
    }
}

/// Performs the hard navigation to the login entry point. This is a full
/// page navigation, not in-app routing; the flow is torn down with it.
pub trait LoginNavigator: Send + Sync {
    /// Navigate the client to the login page.
    fn redirect_to_login(&self);
}

/// Watches the session identity and triggers the login redirect when the
/// session becomes definitively unauthenticated.
///
/// The redirect fires exactly once per transition into `Absent`; re-observing
/// an unchanged `Absent` identity does not fire again, and `Unknown` never
/// redirects.
pub struct SessionGate {
    navigator: Arc<dyn LoginNavigator>,
    last_seen: Mutex<Option<IdentityKind>>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum IdentityKind {
    Unknown,
    Absent,
    Present,
}

impl IdentityKind {
    fn of(identity: &SessionIdentity) -> Self {
        match identity {
            SessionIdentity::Unknown => IdentityKind::Unknown,
            SessionIdentity::Absent => IdentityKind::Absent,
            SessionIdentity::Present(_) => IdentityKind::Present,
        }
    }
}

impl SessionGate {
    /// Creates a gate that redirects through `navigator`.
    pub fn new(navigator: Arc<dyn LoginNavigator>) -> Self {
        Self {
            navigator,
            last_seen: Mutex::new(None),
        }
    }

    /// Applies the gating policy to the current identity and facts, firing
    /// the one-shot redirect if the identity just transitioned into
    /// `Absent`.
    pub fn evaluate(&self, identity: &SessionIdentity, facts: &FactsSnapshot) -> PageState {
        self.observe(identity);
        page_state(identity, facts)
    }

    fn observe(&self, identity: &SessionIdentity) {
        let kind = IdentityKind::of(identity);
        let mut last_seen = self.last_seen.lock().expect("Mutex is not poisoned");
        let entered_absent = kind == IdentityKind::Absent && *last_seen != Some(IdentityKind::Absent);
        *last_seen = Some(kind);
        drop(last_seen);

        if entered_absent {
            info!("Session is gone, redirecting to login");
            self.navigator.redirect_to_login();
        }
    }
}
