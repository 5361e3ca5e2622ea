//! Archgraph Core Types and Definitions
//!
//! This crate provides the foundational types shared by the archgraph
//! crates. It includes:
//!
//! - **Architecture**: The input model produced by the architecture generation
//!   service ([`architecture::Architecture`], [`architecture::Component`])
//! - **Strategy**: The layout strategy selector ([`strategy::LayoutStrategy`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])

pub mod architecture;
pub mod color;
pub mod geometry;
pub mod strategy;
