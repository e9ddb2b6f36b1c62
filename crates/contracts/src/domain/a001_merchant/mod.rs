pub mod aggregate;
pub mod form;
pub mod list_view;
pub mod seed;
pub mod stats;
pub mod store;

pub use aggregate::{Merchant, MerchantId, MerchantPatch, MerchantRisk, MerchantStatus};
pub use store::{MerchantError, MerchantStore, MerchantsSnapshot};
