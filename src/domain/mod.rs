//! # Domain Layer
//!
//! The domain layer contains the core business rules of the forum.
//! It is independent of any web framework or database driver.
//!
//! ## Structure
//!
//! - **entities**: Thread and comment value objects with their repository traits
//!
//! ## Design Principles
//!
//! - Entities validate their input once, at construction
//! - Repository traits define data access contracts
//! - No dependencies on infrastructure or presentation layers

pub mod entities;

// Re-export commonly used types
pub use entities::*;
