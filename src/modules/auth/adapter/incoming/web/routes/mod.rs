pub mod login;
pub mod logout;
pub mod session;

pub use login::login_handler;
pub use logout::logout_handler;
pub use session::check_session_handler;
