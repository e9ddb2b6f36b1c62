pub mod d400_merchant_overview;

pub use d400_merchant_overview::ui::MerchantOverviewDashboard;
