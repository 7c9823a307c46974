//! # Forum API Library
//!
//! This crate provides the backend of a discussion forum:
//! - RESTful HTTP API for threads and comments
//! - JWT-authenticated writes, public thread reads
//! - Soft-deleted comments that keep their place in a thread
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Validated entities and repository traits
//! - **Application Layer**: Use cases and response DTOs
//! - **Infrastructure Layer**: PostgreSQL repository implementations
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! forum_api/
//! +-- config/         Configuration management
//! +-- domain/         Entities and repository traits
//! +-- application/    Use cases and DTOs
//! +-- infrastructure/ Database pool and repositories
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Common utilities (errors, id generation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
