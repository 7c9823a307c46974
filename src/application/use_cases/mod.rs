//! Use Cases
//!
//! One struct per business operation, each orchestrating repository calls.
//! Repository errors propagate unchanged.
//!
//! ## Available Use Cases
//!
//! - **AddThreadUseCase**: validate and persist a thread
//! - **AddCommentUseCase**: validate a comment, check its thread, persist it
//! - **DeleteCommentUseCase**: ownership-checked soft delete
//! - **GetDetailThreadUseCase**: a thread with its comments

pub mod add_comment;
pub mod add_thread;
pub mod delete_comment;
pub mod get_detail_thread;

pub use add_comment::AddCommentUseCase;
pub use add_thread::AddThreadUseCase;
pub use delete_comment::{DeleteCommentPayload, DeleteCommentUseCase};
pub use get_detail_thread::GetDetailThreadUseCase;
