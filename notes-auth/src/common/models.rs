use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Body of `POST /api/auth/signin`
#[derive(Debug, Clone, Serialize)]
pub struct SigninRequest {
    pub email: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,
}

impl SigninRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Body of `POST /api/auth/signup`
///
/// The server calls the display name `username`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,
}

impl SignupRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Response body shared by both auth endpoints
///
/// Anything besides `success` and `message` (tokens, user profile, ...) is kept
/// in `session` untouched, so the whole body can be handed to the session store.
///
/// `success` may be absent. Sign-in only accepts an explicit `true`; sign-up
/// only rejects an explicit `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub session: Map<String, Value>,
}

impl AuthResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: Some(true),
            message: message.into(),
            session: Map::new(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: Some(false),
            message: message.into(),
            session: Map::new(),
        }
    }

    /// The server explicitly reported success
    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }

    /// The server explicitly reported failure
    pub fn is_failure(&self) -> bool {
        self.success == Some(false)
    }

    /// Attach an extra session field (builder style)
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.session.insert(key.into(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.session.get(key)
    }
}

fn serialize_secret<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}
