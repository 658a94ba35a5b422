pub mod coerce;
pub mod record;
pub mod validate;
pub mod value;

pub use coerce::*;
pub use record::*;
pub use validate::*;
pub use value::TypedValue;
