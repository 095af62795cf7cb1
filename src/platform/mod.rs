//! Platform abstraction layer
//!
//! Browser implementations of the rendering contracts:
//! - `CanvasSurface`: `Surface` over a Canvas 2D context
//! - `DomScoreDisplay`: `ScoreDisplay` over an HTML element
//!
//! Native builds use `renderer::SoftwareSurface` instead.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{CanvasSurface, DomScoreDisplay};
