use payloads::{UserRole, responses};
use yewdux::prelude::*;

/// Session state as reported by the identity provider. Written only by
/// `use_session` (and the logout/onboarding flows); everything else reads.
#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    SignedOut,
    SignedIn(responses::UserProfile),
}

#[derive(Clone, PartialEq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Session (managed by use_session) ===
    pub auth_state: AuthState,

    // === Theme ===
    pub theme_mode: ThemeMode,
    pub system_prefers_dark: bool,
}

impl State {
    pub fn is_dark_mode(&self) -> bool {
        match self.theme_mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => self.system_prefers_dark,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.auth_state, AuthState::SignedIn(_))
    }

    /// The session is resolved once the provider has answered either way.
    pub fn session_resolved(&self) -> bool {
        !matches!(self.auth_state, AuthState::Unknown)
    }

    pub fn profile(&self) -> Option<&responses::UserProfile> {
        match &self.auth_state {
            AuthState::SignedIn(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.profile().and_then(|p| p.role)
    }

    pub fn is_recruiter(&self) -> bool {
        self.role() == Some(UserRole::Recruiter)
    }

    pub fn is_candidate(&self) -> bool {
        self.role() == Some(UserRole::Candidate)
    }

    pub fn sign_out(&mut self) {
        self.auth_state = AuthState::SignedOut;
    }
}
