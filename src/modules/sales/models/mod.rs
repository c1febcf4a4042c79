pub mod sale;

pub use sale::{SaleDraft, SaleRecord, SaleType};
