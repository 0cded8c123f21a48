//! Authentication context and hooks for the UI.
//!
//! `AuthProvider` owns the one process-wide piece of shared state: a
//! `Signal<AuthState>` provided via context. Consumers read it through
//! [`use_auth`]; the [`Auth`] handle's own operations are the only writers.

use api::UserInfo;
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Handle for reading auth state and performing auth operations.
///
/// Operations are not serialized against each other; overlapping calls
/// resolve in completion order and the last write wins.
#[derive(Clone, Copy)]
pub struct Auth {
    state: Signal<AuthState>,
}

impl Auth {
    /// Snapshot of the current auth state.
    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    /// Sign in with email and password. On success the held user is
    /// replaced; on failure the backend message is returned.
    pub async fn sign_in(mut self, email: String, password: String) -> Result<(), String> {
        self.state.write().loading = true;
        match api::login(email, password).await {
            Ok(user) => {
                self.state.set(AuthState {
                    user: Some(user),
                    loading: false,
                });
                Ok(())
            }
            Err(e) => {
                self.state.write().loading = false;
                Err(e.to_string())
            }
        }
    }

    /// Create an account and open a session. Returns the new user so the
    /// caller can perform the separate profile follow-up write.
    pub async fn sign_up(mut self, email: String, password: String) -> Result<UserInfo, String> {
        self.state.write().loading = true;
        match api::register(email, password).await {
            Ok(user) => {
                self.state.set(AuthState {
                    user: Some(user.clone()),
                    loading: false,
                });
                Ok(user)
            }
            Err(e) => {
                self.state.write().loading = false;
                Err(e.to_string())
            }
        }
    }

    /// Sign out. Local state clears even when the server call fails — the
    /// user asked for the session to end. The error is still returned.
    pub async fn sign_out(mut self) -> Result<(), String> {
        self.state.write().loading = true;
        let result = api::logout().await;
        self.state.set(AuthState {
            user: None,
            loading: false,
        });
        result.map_err(|e| {
            tracing::error!("sign-out failed on the server: {e}");
            e.to_string()
        })
    }

    /// Re-fetch the current user from the session, e.g. after a profile
    /// write changed fields the held copy doesn't have.
    pub async fn refresh(mut self) {
        match api::get_current_user().await {
            Ok(user) => self.state.set(AuthState {
                user,
                loading: false,
            }),
            Err(e) => tracing::error!("auth refresh failed: {e}"),
        }
    }
}

/// Get the auth handle from context.
pub fn use_auth() -> Auth {
    Auth {
        state: use_context::<Signal<AuthState>>(),
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(user) => {
                auth_state.set(AuthState {
                    user,
                    loading: false,
                });
            }
            Err(_) => {
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
