mod contact;

pub use contact::submit_contact_handler;
