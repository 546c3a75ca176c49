mod get_provider_dashboard;

pub use get_provider_dashboard::{
    get_provider_dashboard, get_provider_stats, GetProviderDashboardUseCase, ProviderDashboard,
};
