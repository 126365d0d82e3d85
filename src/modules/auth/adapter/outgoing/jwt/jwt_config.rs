use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Access token lifetime in seconds
    pub access_token_expiry: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let access_token_expiry = env::var("JWT_ACCESS_EXPIRY")
            .unwrap_or_else(|_| "3600".to_string()) // Default 1 hour
            .parse::<i64>()
            .expect("Invalid JWT_ACCESS_EXPIRY value");

        Self {
            secret_key,
            issuer: String::from("Foliode"),
            access_token_expiry,
        }
    }
}
