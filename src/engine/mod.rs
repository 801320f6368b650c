mod convert;
mod currency;
mod rates;

pub use convert::*;
pub use currency::*;
pub use rates::*;
