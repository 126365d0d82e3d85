pub mod submit_contact;

pub use submit_contact::{ContactSubmission, SubmitContactService, SubmitContactUseCase};
