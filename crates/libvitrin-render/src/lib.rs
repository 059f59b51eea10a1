//! Render pipeline for vitrin
//!
//! This crate provides:
//! - `Document`: an in-memory render target addressed by element id,
//!   with one-way text/attribute updates and owned child fragments
//! - Fragment builders for the generated list markup (product cards,
//!   testimonial slides, gallery rows)
//! - `Renderer`: per-page-kind dispatch over the section renderers,
//!   idempotent and infallible
//!
//! Text fields are written as plain text and escaped on serialization;
//! only the generated list markup is built as markup fragments, and its
//! interpolated values are escaped by the fragment builders.

pub mod dom;
pub mod html;
pub mod pipeline;
mod sections;

pub use dom::{Document, Element};
pub use pipeline::{Renderer, Section};
