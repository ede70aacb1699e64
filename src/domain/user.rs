use uuid::Uuid;

/// Registration payload.
///
/// Every field is optional on purpose: the service is expected to reject a
/// registration that misses any of email/password/name, and the suite drives
/// those scenarios by leaving fields out. A `None` field is omitted from the
/// serialized body entirely rather than sent as `null`.
#[derive(serde::Serialize, Clone, Debug)]
pub struct UserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserRequest {
    pub fn new(
        email: impl Into<Option<String>>,
        password: impl Into<Option<String>>,
        name: impl Into<Option<String>>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }
}

/// Login payload. Constructed per call, never stored.
#[derive(serde::Serialize, Clone, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile-update payload for `PATCH /api/auth/user`.
#[derive(serde::Serialize, Clone, Debug)]
pub struct UserUpdateRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Generate a random UUID and append it to a domain.
///
/// The resulting address is a throwaway test identity; the embedded v4 UUID
/// makes collisions across test runs overwhelmingly unlikely.
pub fn generate_random_email() -> String {
    format!("user-{}@example.com", Uuid::new_v4())
}
