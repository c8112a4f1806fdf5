//! Table initialization for analytics executions.
//!
//! This crate provides:
//! - **[`TableInitializer`]**: the paginated execution initializer driving
//!   the execute-then-read-first-page fetch with advisory cancellation.
//! - **[`TableFacade`]**: the fully-initialized table returned on success.
//! - **Drill extraction**: [`available_drill_targets`] and
//!   [`available_drill_targets_from_result`].
//! - **[`MemoryExecution`]**: an in-memory reference backend for tests,
//!   docs, and demos.

pub mod drill;
pub mod facade;
pub mod initializer;
pub mod memory;

pub use drill::{available_drill_targets, available_drill_targets_from_result};
pub use facade::TableFacade;
pub use initializer::{COLS_PER_PAGE, InitOutcome, TableInitializer};
pub use memory::{MemoryExecution, MemoryView};
