//! Pokesprite - entity sprite compositing from pre-rendered art
//!
//! This library provides functionality to:
//! - Resolve the base art for an entity through a fixed fallback chain
//! - Layer egg, held item and shiny marker overlays in a fixed order
//! - Paint type and encounter hints, experience bars and glows
//! - Load art from memory or from a directory of PNG files
//!
//! The core never fails on a missing asset; it falls back to placeholder art
//! and logs through the `log` facade.

pub mod art;
pub mod assets;
pub mod builder;
pub mod cli;
pub mod color;
pub mod composition;
pub mod config;
pub mod decorate;
pub mod effects;
pub mod entity;
pub mod output;
pub mod resolve;
