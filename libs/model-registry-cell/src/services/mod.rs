pub mod registry;
pub mod scorer;

pub use registry::*;
pub use scorer::*;
