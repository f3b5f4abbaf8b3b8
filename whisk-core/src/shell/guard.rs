//! Route guards.
//!
//! Two declarative policies protect the screen graph: the authenticated
//! area requires a token, and the entry screens bounce signed-in users to
//! the app. Guards decide from the session snapshot alone.

use super::Screen;
use crate::session::SessionSnapshot;

/// Result of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardResult {
    /// Navigation proceeds to the requested screen.
    Allow,
    /// Navigation is redirected to this screen instead.
    Redirect(Screen),
}

/// Guard policy for a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellGuard {
    /// Only reachable with a token; otherwise redirect.
    RequireAuth { redirect_to: Screen },
    /// Only reachable without a token; otherwise redirect.
    PublicOnly { redirect_to: Screen },
    /// No restriction.
    Open,
}

impl ShellGuard {
    /// The guard protecting `screen`.
    pub fn for_screen(screen: &Screen) -> ShellGuard {
        if screen.requires_auth() {
            ShellGuard::RequireAuth { redirect_to: Screen::Login }
        } else if screen.public_only() {
            ShellGuard::PublicOnly { redirect_to: Screen::Idea }
        } else {
            ShellGuard::Open
        }
    }

    /// Check this guard against the current session.
    pub fn check(&self, session: &SessionSnapshot) -> GuardResult {
        match self {
            ShellGuard::RequireAuth { redirect_to } if !session.authenticated => {
                GuardResult::Redirect(redirect_to.clone())
            }
            ShellGuard::PublicOnly { redirect_to } if session.authenticated => {
                GuardResult::Redirect(redirect_to.clone())
            }
            _ => GuardResult::Allow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anon() -> SessionSnapshot {
        SessionSnapshot { authenticated: false, last_spec_id: None }
    }

    fn signed_in() -> SessionSnapshot {
        SessionSnapshot { authenticated: true, last_spec_id: None }
    }

    #[test]
    fn test_require_auth_redirects_anonymous_to_login() {
        let guard = ShellGuard::for_screen(&Screen::SpecsList);
        assert_eq!(guard.check(&anon()), GuardResult::Redirect(Screen::Login));
        assert_eq!(guard.check(&signed_in()), GuardResult::Allow);
    }

    #[test]
    fn test_public_only_redirects_signed_in_to_app() {
        let guard = ShellGuard::for_screen(&Screen::Login);
        assert_eq!(guard.check(&signed_in()), GuardResult::Redirect(Screen::Idea));
        assert_eq!(guard.check(&anon()), GuardResult::Allow);
    }

    #[test]
    fn test_landing_is_open() {
        let guard = ShellGuard::for_screen(&Screen::Landing);
        assert_eq!(guard.check(&anon()), GuardResult::Allow);
        assert_eq!(guard.check(&signed_in()), GuardResult::Allow);
    }
}
