pub mod errors;
pub mod pagination;
pub mod shutdown;
pub mod validations;

pub use errors::*;
pub use pagination::*;
pub use shutdown::*;
pub use validations::*;
