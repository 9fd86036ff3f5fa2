pub mod classify;
pub mod components;
pub mod composer;
pub mod disclosure;
pub mod security;
pub mod text;
pub mod traits;
pub mod tree;

pub use classify::*;
pub use components::*;
pub use composer::*;
pub use disclosure::*;
pub use text::*;
pub use traits::*;
pub use tree::*;
