pub mod password_hasher;
pub mod token_blacklist_repository;
pub mod token_provider;

pub use password_hasher::{PasswordHasher, PasswordHasherError};
pub use token_blacklist_repository::TokenBlacklistRepository;
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
