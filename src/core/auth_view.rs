//! Which of the login, register and recover forms is showing

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
    Recover,
}

/// View state for the combined auth form, owned by the component tree root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthView {
    pub mode: AuthMode,

    /// Free-form step marker within the current mode
    pub step: String,
}

impl Default for AuthView {
    fn default() -> Self {
        Self {
            mode: AuthMode::Login,
            step: "1".to_string(),
        }
    }
}

impl AuthView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_login(&mut self) {
        self.mode = AuthMode::Login;
    }

    pub fn show_register(&mut self) {
        self.mode = AuthMode::Register;
    }

    pub fn show_recover(&mut self) {
        self.mode = AuthMode::Recover;
    }

    /// Switching mode leaves the step alone
    pub fn set_step(&mut self, step: impl Into<String>) {
        self.step = step.into();
    }
}
