pub mod components;
pub mod delay;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod state;
pub mod storage;
