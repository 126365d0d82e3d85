pub mod check_session;
pub mod login_operator;
pub mod logout_operator;
