pub mod badge;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::{Badge, RiskBadge, StatusBadge};
pub use input::FormInput;
pub use select::FormSelect;
pub use textarea::FormTextarea;
