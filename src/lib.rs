//! Tic-tac-toe engine with configurable board sizes and AI difficulty levels
//!
//! This crate provides:
//! - Board state for 3x3, 5x5 and 9x9 games with per-size win lengths
//! - Line-based win detection for runs shorter than the board side
//! - Random, heuristic and alpha-beta minimax move strategies
//! - A turn-taking controller between a human and the AI
//! - A round-robin arena for AI-versus-AI matches

pub mod arena;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod ports;
pub mod strategy;
pub mod tictactoe;

pub use config::{Difficulty, GameConfig};
pub use controller::{GameController, MoveResult, Outcome, Phase};
pub use error::{Error, Result};
