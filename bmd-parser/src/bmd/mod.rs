//! Main module for bmd library functionality

pub mod ast;
pub mod attributes;
pub mod formats;
pub mod inlines;
pub mod loader;
pub mod normalization;
pub mod options;
pub mod parsing;
pub mod transforms;
