//! CLI infrastructure for the noughts engine
//!
//! This module provides the command-line interface for querying the engine,
//! playing interactive matches, running agent series and self-verification.

pub mod commands;
pub mod config;
pub mod output;
