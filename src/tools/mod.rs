pub mod list_variants;
pub mod search;

pub use list_variants::*;
pub use search::*;
