//! Sign-in collaborator.
//!
//! Credential checking is left to an [`Authenticator`]. The dashboard only
//! needs to know where to go next.

use tracing::{info, warn};

use super::nav::Route;
use crate::error::{Error, Result};

/// Checks credentials.
pub trait Authenticator {
    /// Returns true when `email` may sign in with `password`.
    fn authenticate(&self, email: &str, password: &str) -> bool;
}

/// Accepts every non-empty email. Stand-in until a real identity provider
/// is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Authenticator for AcceptAll {
    fn authenticate(&self, email: &str, _password: &str) -> bool {
        !email.trim().is_empty()
    }
}

/// Signs in and returns the page to show next.
pub fn sign_in(auth: &dyn Authenticator, email: &str, password: &str) -> Result<Route> {
    if auth.authenticate(email, password) {
        info!(email, "signed in");
        Ok(Route::Dashboard)
    } else {
        warn!(email, "sign-in rejected");
        Err(Error::Authentication(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, &'static str);

    impl Authenticator for Fixed {
        fn authenticate(&self, email: &str, password: &str) -> bool {
            email == self.0 && password == self.1
        }
    }

    #[test]
    fn test_accept_all() {
        assert_eq!(
            sign_in(&AcceptAll, "admin@smartlis.com", "").unwrap(),
            Route::Dashboard
        );
        assert!(matches!(
            sign_in(&AcceptAll, "  ", "secret"),
            Err(Error::Authentication(_))
        ));
    }

    #[test]
    fn test_custom_authenticator() {
        let auth = Fixed("jane.t@smartlis.com", "pipette");
        assert!(sign_in(&auth, "jane.t@smartlis.com", "pipette").is_ok());
        assert!(sign_in(&auth, "jane.t@smartlis.com", "wrong").is_err());
    }
}
