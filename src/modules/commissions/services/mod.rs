pub mod commission_engine;

pub use commission_engine::CommissionEngine;
