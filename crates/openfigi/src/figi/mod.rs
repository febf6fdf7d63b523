mod alphabet;
mod checksum;
mod error;
mod result;
mod symbol;

pub use alphabet::*;
pub use checksum::*;
pub use error::*;
pub use result::*;
pub use symbol::*;
