//! Main module for trip library functionality

pub mod ast;
pub mod building;
pub mod error;
pub mod formats;
pub mod imagery;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod prompt;
pub mod render;
pub mod session;
pub mod testing;
pub mod validation;
