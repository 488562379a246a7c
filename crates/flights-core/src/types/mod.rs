//! Storage-neutral values and row records returned by lookups.

pub mod record;
pub mod value;

pub use record::Record;
pub use value::Value;
