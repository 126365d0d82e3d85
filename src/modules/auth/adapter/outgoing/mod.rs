pub mod jwt;
pub mod security;
pub mod token_blacklist_redis;
