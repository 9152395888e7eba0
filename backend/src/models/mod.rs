pub mod histogram;
pub mod time;

pub use histogram::*;
pub use time::*;
