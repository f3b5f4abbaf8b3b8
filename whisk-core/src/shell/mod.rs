//! Page/routing shell
//!
//! State machine over the named screens. Navigation applies the target
//! screen's guard against the current session snapshot; `sync` re-applies
//! the current screen's guard after a session change, which is how a 401
//! logout (observed through the session channel) lands on the login
//! screen without any screen-level code knowing about tokens.

pub mod guard;

pub use guard::{GuardResult, ShellGuard};

use crate::session::SessionState;

/// The application's screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Login,
    Register,
    Idea,
    SpecsList,
    SpecDetail(String),
    DesignPreview(String),
    CodeStubs(String),
}

impl Screen {
    /// Route path for this screen.
    pub fn path(&self) -> String {
        match self {
            Screen::Landing => "/".to_string(),
            Screen::Login => "/login".to_string(),
            Screen::Register => "/register".to_string(),
            Screen::Idea => "/app".to_string(),
            Screen::SpecsList => "/app/specs".to_string(),
            Screen::SpecDetail(id) => format!("/app/spec/{}", id),
            Screen::DesignPreview(id) => format!("/app/design/{}", id),
            Screen::CodeStubs(id) => format!("/app/code-stubs/{}", id),
        }
    }

    /// Screens inside the authenticated area.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Screen::Idea
                | Screen::SpecsList
                | Screen::SpecDetail(_)
                | Screen::DesignPreview(_)
                | Screen::CodeStubs(_)
        )
    }

    /// Entry screens that signed-in users skip.
    pub fn public_only(&self) -> bool {
        matches!(self, Screen::Login | Screen::Register)
    }
}

/// The navigation state machine.
pub struct Shell {
    session: SessionState,
    current: Screen,
}

impl Shell {
    /// Start on the landing screen.
    pub fn new(session: SessionState) -> Self {
        Self { session, current: Screen::Landing }
    }

    pub fn current(&self) -> &Screen {
        &self.current
    }

    /// Navigate to `target`, applying its guard. Returns the screen
    /// actually reached.
    pub fn navigate(&mut self, target: Screen) -> &Screen {
        let snapshot = self.session.snapshot();
        let reached = match ShellGuard::for_screen(&target).check(&snapshot) {
            GuardResult::Allow => target,
            GuardResult::Redirect(redirect) => {
                log::debug!(
                    "navigation to {} redirected to {}",
                    target.path(),
                    redirect.path()
                );
                redirect
            }
        };
        self.current = reached;
        &self.current
    }

    /// Re-apply the current screen's guard after a session change. Called
    /// whenever the session channel reports a new snapshot.
    pub fn sync(&mut self) -> &Screen {
        let snapshot = self.session.snapshot();
        if let GuardResult::Redirect(redirect) =
            ShellGuard::for_screen(&self.current).check(&snapshot)
        {
            log::debug!("session change moved shell to {}", redirect.path());
            self.current = redirect;
        }
        &self.current
    }

    /// Convenience for resuming the last-viewed specification.
    pub fn open_last_spec(&mut self) -> &Screen {
        match self.session.snapshot().last_spec_id {
            Some(id) => self.navigate(Screen::SpecDetail(id)),
            None => self.navigate(Screen::Idea),
        }
    }
}
