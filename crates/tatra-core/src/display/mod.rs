//! Display formatting for tasks and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while the wrapper types here give each command its own confirmation or
//! listing format.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Result & List   │    │   Formatted     │
//! │  (Task)         │───▶│ Wrappers        │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: the [`Tasks`] list wrapper
//! - [`results`]: operation results (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: `Error:` lines (OperationStatus)
//! - [`datetime`]: local time formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use tatra_core::display::OperationStatus;
//!
//! let error = OperationStatus::failure("Task with ID 99 not found".to_string());
//! assert_eq!(error.to_string(), "Error: Task with ID 99 not found\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Tasks;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, TaskChange, UpdateResult};
pub use status::OperationStatus;
