pub mod store_handle;

use crate::shared::storage::BrowserRepository;
use contracts::domain::a001_merchant::MerchantStore;
use contracts::system::auth::AuthStore;
use contracts::system::ui_state::UiStore;
use leptos::prelude::*;

pub use store_handle::StoreHandle;

pub type MerchantsHandle = StoreHandle<MerchantStore<BrowserRepository>>;
pub type AuthHandle = StoreHandle<AuthStore<BrowserRepository>>;
pub type UiHandle = StoreHandle<UiStore<BrowserRepository>>;

pub fn use_merchants() -> MerchantsHandle {
    use_context::<MerchantsHandle>().expect("merchant store not provided")
}

pub fn use_ui() -> UiHandle {
    use_context::<UiHandle>().expect("ui store not provided")
}
