pub mod accumulation;
pub mod aggregation;
pub mod analytics;
pub mod annuity;
pub mod bucket;
pub mod comparison;
pub mod export;
pub mod forecast;
pub mod investment;
pub mod ledger;
pub mod record;
pub mod settings;
pub mod wealth;
