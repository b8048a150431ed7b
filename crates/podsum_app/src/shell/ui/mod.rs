pub mod constants;
pub mod render;

pub use render::{help_lines, render, RenderStyle};
