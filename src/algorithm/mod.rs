//! Maze construction and flow field computation
//!
//! This module contains the two engine algorithms:
//! - Seeded generation of fully connected mazes
//! - Breadth-first flow field solving toward the goal

/// Seeded maze generation by randomized depth-first carving
pub mod generator;
/// Goal-directed flow field analysis and path reconstruction
pub mod solver;

pub use generator::Generator;
pub use solver::{Analysis, analyze};
