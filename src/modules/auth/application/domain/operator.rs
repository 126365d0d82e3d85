use std::env;

/// The single site operator. There is no user table: the one set of
/// admin credentials is provisioned through the environment, and any
/// authenticated session has full admin rights.
#[derive(Debug, Clone)]
pub struct OperatorCredentials {
    email: String,
    password_hash: String,
}

impl OperatorCredentials {
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password_hash,
        }
    }

    /// Load operator credentials from `ADMIN_EMAIL` and
    /// `ADMIN_PASSWORD_HASH` (an Argon2 PHC string).
    pub fn from_env() -> Self {
        let email = env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set");
        let password_hash =
            env::var("ADMIN_PASSWORD_HASH").expect("ADMIN_PASSWORD_HASH must be set");

        Self::new(email, password_hash)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Case-insensitive email comparison, matching the normalization
    /// applied at construction.
    pub fn matches_email(&self, candidate: &str) -> bool {
        self.email == candidate.trim().to_lowercase()
    }
}
