mod dashboard;

pub use dashboard::MerchantOverviewDashboard;
