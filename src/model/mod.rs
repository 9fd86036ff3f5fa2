pub mod document;
pub mod types;

pub use document::*;
pub use types::*;
