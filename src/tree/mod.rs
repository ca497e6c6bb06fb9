//! Expression tree schema and rendering.

pub mod icons;
pub mod render;
pub mod schema;

pub use render::{format_tree, render, RenderedRow};
pub use schema::{ExpressionDocument, ExpressionNode};

#[cfg(test)]
mod tests;
