mod lock;
mod mutex;
#[cfg(test)]
mod tests;
mod unique;

pub use lock::*;
pub use mutex::*;
pub use unique::*;
