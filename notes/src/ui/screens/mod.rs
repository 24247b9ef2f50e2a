pub mod home_screen;
pub mod login_screen;
pub mod signup_screen;

use crate::state::{LoginFormState, SignupFormState};

#[derive(Debug, Clone)]
pub enum Screen {
    Login(LoginFormState),
    Signup(SignupFormState),
    Home,
}

impl Screen {
    /// Route name, for logs
    pub fn route(&self) -> &'static str {
        match self {
            Screen::Login(_) => "/login",
            Screen::Signup(_) => "/signup",
            Screen::Home => "/",
        }
    }
}
