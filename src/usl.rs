//! Main module for usl library functionality
//!
//! Data flows leaves-first through the submodules:
//!
//!     raw lines -> [lexing::cursor] (normalize + validate alphabet)
//!               -> [tokenizer] (one line at a time, driven by the active space)
//!               -> [validation] (grammar checks, raising [diagnostics])
//!               -> [token] construction -> space registry -> ordered top-level tokens

pub mod config;
pub mod diagnostics;
pub mod formats;
pub mod grammar;
pub mod lexing;
pub mod token;
pub mod tokenizer;
pub mod validation;
