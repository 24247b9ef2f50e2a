mod models;

pub use models::{AuthResponse, SigninRequest, SignupRequest};
