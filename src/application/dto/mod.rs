//! Data Transfer Objects
//!
//! DTOs for API response serialization. Request bodies stay as raw JSON until
//! the domain entities validate them.

pub mod response;

pub use response::{AddedCommentData, AddedThreadData, SuccessResponse, ThreadData};
