//! Dayplan Core Types and Definitions
//!
//! This crate provides the foundational types for laying out and drawing a
//! single calendar day. It includes:
//!
//! - **Intervals**: Ordering and overlap rules over timed items ([`interval`] module)
//! - **Events**: Calendar events and their placed form ([`event`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Drawables for the calendar view ([`draw`] module)

pub mod color;
pub mod draw;
pub mod event;
pub mod geometry;
pub mod interval;
