//! Domain model for the task ledger.
//!
//! # Responsibility
//! - Define the canonical task record used by load and report logic.
//!
//! # Invariants
//! - A task's kind decides which dependent fields exist; the variant shape
//!   enforces this, there are no independently nullable fields.
//! - A task is addressed by its 0-based load position for its whole life.

pub mod task;
