use std::fmt;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

use crate::api::{LoginRequest, PosApi};
use crate::entities::SessionUser;
use crate::errors::PosError;
use crate::policy::{self, Capability};
use crate::session::SessionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

/// Where an unauthenticated navigation is sent instead of its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Login => "/login",
        }
    }
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl From<Redirect> for PosError {
    fn from(_: Redirect) -> Self {
        PosError::Unauthenticated
    }
}

/// Two-state gate in front of every protected view. There is no expiry
/// timer and no refresh: a token is either held or it is not.
pub struct AuthGuard<A: PosApi> {
    api: Arc<A>,
    session: SessionContext,
}

impl<A: PosApi> Clone for AuthGuard<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            session: self.session.clone(),
        }
    }
}

impl<A: PosApi> AuthGuard<A> {
    pub fn new(api: Arc<A>, session: SessionContext) -> Self {
        Self { api, session }
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub async fn state(&self) -> AuthState {
        if self.session.is_authenticated().await {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }

    pub async fn login(&self, email: &str, password: SecretString) -> Result<SessionUser, PosError> {
        let email = email.trim();
        let password = SecretString::new(password.expose_secret().trim().to_string());
        if email.is_empty() || password.expose_secret().is_empty() {
            return Err(PosError::validation("email and password are required"));
        }

        let request = LoginRequest {
            email: email.to_string(),
            password,
        };
        let response = self.api.login(&request).await.map_err(|e| {
            warn!(email = %email, error = %e, "login failed");
            PosError::from(e)
        })?;

        if response.token.is_empty() {
            warn!(email = %email, "login response carried no token");
            return Err(PosError::validation("login failed, server returned no token"));
        }

        let user = response.user;
        self.session
            .set(SecretString::new(response.token), user.clone())
            .await?;
        info!(user_id = user.id, role = %user.role, "logged in");
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), PosError> {
        self.session.clear().await?;
        Ok(())
    }

    /// Mount-time check: re-reads durable storage and redirects to login
    /// when no token is found there.
    pub async fn check(&self) -> Result<SessionUser, Redirect> {
        match self.session.reload().await {
            Ok(true) => {}
            Ok(false) => return Err(Redirect::Login),
            Err(e) => {
                warn!(error = %e, "session storage unreadable, treating as logged out");
                return Err(Redirect::Login);
            }
        }
        self.session.user().await.ok_or(Redirect::Login)
    }

    /// Guard plus policy check for a protected view.
    pub async fn enter(&self, capability: Capability) -> Result<SessionUser, PosError> {
        let user = self.check().await?;
        policy::require(user.role, capability)?;
        Ok(user)
    }
}
