//! Admin session token, held in memory and mirrored to local storage.

/// Editing session state. The token is opaque to the UI; holding one merely
/// unlocks the admin routes and rides along as a bearer header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Builds a session from pasted or stored text. Whitespace-only input
    /// means no session.
    #[must_use]
    pub fn new(token: &str) -> Self {
        let token = token.trim();
        Self {
            token: (!token.is_empty()).then(|| token.to_string()),
        }
    }

    /// The bearer token, when signed in.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether admin screens should unlock.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_token_means_signed_out() {
        assert!(!Session::new("   ").is_admin());
        assert!(Session::new("   ").token().is_none());
        assert!(!Session::default().is_admin());
    }

    #[test]
    fn token_is_trimmed_and_kept() {
        let session = Session::new("  tok-123  ");
        assert!(session.is_admin());
        assert_eq!(session.token(), Some("tok-123"));
    }
}
