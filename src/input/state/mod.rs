mod actions;
mod core;
mod pointer;

pub use core::{SketchError, SketchState};
