//! Session store: the single owner of "who is signed in".
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is built in `App`, provided through context, and
//! restored once from durable storage on the client. Pages call its async
//! operations from form handlers; the route guard watches the `AuthState` it
//! publishes to subscribers.
//!
//! INVARIANTS
//! ==========
//! - Storage key `user` is written only here, and always before the in-memory
//!   state changes. A failed write leaves memory untouched.
//! - `loading` flips from `true` to `false` exactly once, in `restore`.
//! - A new session replaces the previous record whole.
//!
//! CONCURRENCY
//! ===========
//! Operations run on the browser event loop. Overlapping calls are not
//! coordinated; forms disable submission while a call is in flight.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock};

use super::auth::AuthState;
use crate::net::api::{Backend, require_fields};
use crate::net::types::{ApiError, ProfileUpdate, SessionRecord};
use crate::util::identity::avatar_url;
use crate::util::storage::{AUTH_TOKEN_KEY, KeyValueStore, Loaded, USER_KEY, load_json, save_json};

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please provide email and password";
pub const SIGNUP_REQUIRED_MESSAGE: &str = "Please provide all required fields";

type Listener = Arc<dyn Fn(&AuthState) + Send + Sync>;

struct Inner {
    storage: Arc<dyn KeyValueStore>,
    backend: Arc<dyn Backend>,
    state: RwLock<AuthState>,
    listeners: RwLock<Vec<Listener>>,
}

/// Cheaply cloneable handle; clones share one session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// A store in the initial loading state. Call [`Self::restore`] next.
    pub fn new(storage: Arc<dyn KeyValueStore>, backend: Arc<dyn Backend>) -> Self {
        Self {
            inner: Arc::new(Inner {
                storage,
                backend,
                state: RwLock::new(AuthState::default()),
                listeners: RwLock::new(Vec::new()),
            }),
        }
    }

    pub fn snapshot(&self) -> AuthState {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Register `listener` to receive every state published from now on.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        self.inner
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    fn publish(&self, mutate: impl FnOnce(&mut AuthState)) {
        let snapshot = {
            let mut state = self.inner.state.write().unwrap_or_else(PoisonError::into_inner);
            mutate(&mut state);
            state.clone()
        };
        let listeners = self.inner.listeners.read().unwrap_or_else(PoisonError::into_inner).clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    /// Load a previously saved session, then end the loading phase.
    ///
    /// Unreadable records are discarded. Calls after the first are ignored.
    pub fn restore(&self) {
        if !self.snapshot().loading {
            log::debug!("session restore skipped: already restored");
            return;
        }
        let user = match load_json::<SessionRecord>(self.inner.storage.as_ref(), USER_KEY) {
            Loaded::Found(record) => {
                log::info!("session restored for {}", record.email);
                Some(record)
            }
            Loaded::Missing => None,
            Loaded::Corrupt(reason) => {
                log::warn!("discarding unreadable saved session: {reason}");
                self.inner.storage.remove(USER_KEY);
                None
            }
        };
        self.publish(|state| {
            state.user = user;
            state.loading = false;
        });
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Validation errors when either field is empty; otherwise whatever the
    /// backend or the storage write reports. State is unchanged on error.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionRecord, ApiError> {
        require_fields(&[email, password], LOGIN_REQUIRED_MESSAGE)?;
        let record = self.inner.backend.login(email, password).await?;
        self.establish(record)
    }

    /// Create an account and sign in.
    ///
    /// # Errors
    ///
    /// Validation errors when any field is empty; otherwise whatever the
    /// backend or the storage write reports. State is unchanged on error.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<SessionRecord, ApiError> {
        require_fields(&[name, email, password], SIGNUP_REQUIRED_MESSAGE)?;
        let record = self.inner.backend.signup(name, email, password).await?;
        self.establish(record)
    }

    /// Sign in through the Google placeholder flow.
    ///
    /// # Errors
    ///
    /// Only if the backend or the storage write fails.
    pub async fn login_with_google(&self) -> Result<SessionRecord, ApiError> {
        let record = self.inner.backend.login_with_google().await?;
        self.establish(record)
    }

    /// Forget the current session in memory and in storage. Safe to repeat.
    pub fn logout(&self) {
        self.inner.storage.remove(USER_KEY);
        self.inner.storage.remove(AUTH_TOKEN_KEY);
        let was_signed_in = self.snapshot().is_authenticated();
        self.publish(|state| state.user = None);
        if was_signed_in {
            log::info!("session cleared");
        }
    }

    /// Apply `update` to the signed-in user's record.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotSignedIn`] without a session (or if the session ended
    /// while the backend was answering); otherwise backend or storage errors.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<SessionRecord, ApiError> {
        let Some(current) = self.snapshot().user else {
            return Err(ApiError::NotSignedIn);
        };
        let echoed = self.inner.backend.update_profile(update).await?;

        let still_current = self.snapshot().user.is_some_and(|u| u.id == current.id);
        if !still_current {
            return Err(ApiError::NotSignedIn);
        }

        let mut record = current;
        let renamed = echoed.fields.name.is_some();
        if let Some(name) = echoed.fields.name {
            record.name = name;
        }
        if let Some(email) = echoed.fields.email {
            record.email = email;
        }
        match echoed.fields.avatar {
            Some(avatar) => record.avatar = avatar,
            None if renamed => record.avatar = avatar_url(&record.name),
            None => {}
        }
        record.updated_at = Some(echoed.updated_at);
        self.commit(record)
    }

    /// Backend shared with the rest of the app.
    pub fn backend(&self) -> Arc<dyn Backend> {
        Arc::clone(&self.inner.backend)
    }

    /// Commit a freshly issued session. The backend has already stored its
    /// token, so a failed `user` write also drops `authToken`.
    fn establish(&self, record: SessionRecord) -> Result<SessionRecord, ApiError> {
        match self.commit(record) {
            Ok(record) => {
                log::info!("session established for {}", record.email);
                Ok(record)
            }
            Err(e) => {
                self.inner.storage.remove(AUTH_TOKEN_KEY);
                log::warn!("session not saved, discarding token: {e}");
                Err(e)
            }
        }
    }

    /// Write `record` through to storage, then publish it.
    fn commit(&self, record: SessionRecord) -> Result<SessionRecord, ApiError> {
        save_json(self.inner.storage.as_ref(), USER_KEY, &record)?;
        let published = record.clone();
        self.publish(move |state| state.user = Some(published));
        Ok(record)
    }
}
