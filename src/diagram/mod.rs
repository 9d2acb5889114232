pub mod conversion;
pub mod definition;
pub mod lucid;

pub use conversion::*;
pub use definition::*;
pub use lucid::*;
