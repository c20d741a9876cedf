pub mod accumulation_service;
pub mod aggregation_service;
pub mod analytics_service;
pub mod annuity_service;
pub mod comparison_service;
pub mod export_service;
pub mod forecast_service;
pub mod wealth_service;
