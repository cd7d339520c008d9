//! Consolidated test utilities for quickspace
//!
//! This module provides unified testing utilities for integration tests,
//! focused on real workspace directories and git repositories for
//! reliable testing.

pub mod assertions;
pub mod fixtures;
pub mod workspace;
