//! Merchant Details UI Module
//!
//! MVVM:
//! - view_model.rs: status/risk editor state and the save command
//! - view.rs: modal rendered over the merchants list

mod view;
mod view_model;

pub use view::MerchantDetails;
pub use view_model::MerchantDetailsViewModel;
