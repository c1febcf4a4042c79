pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure_commission_routes;
pub use models::{CommissionBreakdown, CommissionPolicy, PriceTier};
pub use services::CommissionEngine;
