//! # opdoc
//!
//! Renders a machine-readable API operation description (parameters,
//! request body, responses, security requirements) into an interactive,
//! progressively-disclosed documentation view.
//!
//! The input is a typed, already-dereferenced operation model (or a JSON
//! document through [`model::document`]); the output is a tree of
//! [`renderer::VisualNode`]s in which nested schema structure stays
//! suspended behind [`renderer::ToggleRegion`]s until a branch is opened.
//! Rendering cost therefore tracks visible structure rather than total
//! schema size, and self-referential schemas terminate in
//! recursive-reference markers instead of infinite descent.

pub mod model;
pub mod renderer;


pub use model::*;
pub use renderer::*;
