//! In-process identity provider.
//!
//! Stands in for the managed authentication backend: in-memory accounts, a
//! single ambient session, and a watch channel that delivers the current
//! identity immediately on subscription and again on every change.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, watch};

use super::error::AuthError;

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Stable account id
    pub uid: String,

    /// Sign-in email
    pub email: String,

    /// Chosen display name
    pub display_name: String,
}

/// A registered account.
#[derive(Debug, Clone)]
struct Account {
    password: String,
    user: User,
}

/// Identity provider state behind the cloneable handle.
#[derive(Debug)]
struct IdentityState {
    accounts: HashMap<String, Account>,
    next_uid: u64,
}

/// Cloneable handle to the identity provider.
///
/// The current identity lives in a `watch` channel so that subscribers see
/// the initial state at once and every change afterwards, in order.
#[derive(Debug, Clone)]
pub struct Identity {
    state: Arc<RwLock<IdentityState>>,
    current: Arc<watch::Sender<Option<User>>>,
}

impl Identity {
    /// Create an identity provider with no accounts and nobody signed in.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            state: Arc::new(RwLock::new(IdentityState {
                accounts: HashMap::new(),
                next_uid: 1,
            })),
            current: Arc::new(tx),
        }
    }

    /// Register a new account and sign it in.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<User, AuthError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AuthError::InvalidInput {
                reason: "email must not be empty",
            });
        }
        if password.is_empty() {
            return Err(AuthError::InvalidInput {
                reason: "password must not be empty",
            });
        }

        let mut state = self.state.write().await;
        if state.accounts.contains_key(email) {
            return Err(AuthError::EmailTaken);
        }

        let uid = format!("user-{}", state.next_uid);
        state.next_uid += 1;

        let user = User {
            uid,
            email: email.to_string(),
            display_name: display_name.to_string(),
        };
        state.accounts.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                user: user.clone(),
            },
        );
        drop(state);

        self.current.send_replace(Some(user.clone()));
        Ok(user)
    }

    /// Sign in with email and password.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let state = self.state.read().await;
        let account = state
            .accounts
            .get(email.trim())
            .ok_or(AuthError::InvalidCredentials)?;
        if account.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        let user = account.user.clone();
        drop(state);

        self.current.send_replace(Some(user.clone()));
        Ok(user)
    }

    /// Sign the current user out.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        if self.current.borrow().is_none() {
            return Err(AuthError::NotSignedIn);
        }
        self.current.send_replace(None);
        Ok(())
    }

    /// The currently signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.current.borrow().clone()
    }

    /// Subscribe to identity changes.
    ///
    /// The receiver observes the current identity immediately and every
    /// subsequent change; dropping it ends the subscription.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.current.subscribe()
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new()
    }
}
