//! Export of positioned graphs.
//!
//! - [`json`] - The render model handed to rendering surfaces
//! - [`svg`] - A standalone SVG preview

pub mod json;
pub mod svg;
