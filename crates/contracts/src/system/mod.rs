pub mod auth;
pub mod ui_state;
