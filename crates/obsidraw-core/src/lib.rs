//! Obsidraw Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Obsidraw
//! decoder, renderer and CLI. It includes:
//!
//! - **Colors**: CSS color handling that preserves the author's spelling ([`color::Color`])
//! - **Geometry**: Points, sizes and bounding boxes ([`geometry`] module)
//! - **Elements**: The typed drawing element model ([`element`] module)
//! - **Filtering**: Removal of index annotations and deleted elements ([`filter`] module)
//! - **Bounds**: Tight bounds over a set of elements ([`bounds`] module)
//! - **Scene**: Elements plus render configuration ([`scene::Scene`])
//! - **Draw**: Drawing primitives and the rendered document ([`draw`] module)

pub mod bounds;
pub mod color;
pub mod draw;
pub mod element;
pub mod filter;
pub mod geometry;
pub mod scene;
