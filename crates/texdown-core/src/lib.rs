//! Texdown Core
//!
//! This crate provides the event model, render state, and error
//! definitions for the texdown markdown-to-LaTeX renderer.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Event`], [`Block`], [`Span`], [`TextKind`], [`Attribute`] - The
//!   structural event stream a parser front-end produces
//! - [`RenderState`], [`Verbatim`] - The mutable context of one render pass
//! - [`TexdownError`] - Error types

pub mod error;
pub mod event;
pub mod state;

pub use error::{Result, TexdownError};
pub use event::{AttrPart, Attribute, Block, Event, Span, TextKind};
pub use state::{RenderState, Verbatim};
