pub mod operator;

pub use operator::OperatorCredentials;
