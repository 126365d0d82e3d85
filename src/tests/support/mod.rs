pub mod app_state_builder;
pub mod memory;
pub mod stubs;
