pub mod models;

pub use models::{SaleDraft, SaleRecord, SaleType};
