//! Command-line interface for the tic-tac-toe engine
//!
//! This module provides the interactive `play` command and the AI-versus-AI
//! `arena` command.

pub mod commands;
pub mod output;
