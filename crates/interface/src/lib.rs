pub mod defaults;
mod error;
mod field;
mod model;

pub use error::RateError;
pub use field::Field;
pub use model::{CostingBand, DealerQuote, FieldChange, Quote, RateSnapshot, RawSnapshot};
