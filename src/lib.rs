//! # async-traverse
//!
//! Ordered sequential and concurrent traversal operations for async
//! collections.
//!
//! ## Overview
//!
//! This library provides higher-order traversal operations over any ordered
//! collection, where the per-element operation is asynchronous and may fail.
//! It includes:
//!
//! - **Sequential Traversal**: each element's operation fully completes, in
//!   order, before the next begins
//! - **Concurrent Traversal**: all operations are launched at once, results
//!   are collected back into original element order
//! - **Task Handles**: eagerly spawned operations that can be awaited for
//!   their outcome exactly once
//!
//! Every traversal comes in three shapes (visit, map, filter-map), each with
//! a fallible `try_` twin that short-circuits on the first error.
//!
//! ## Ordering Guarantee
//!
//! Output order always equals input order, for both disciplines. Concurrent
//! traversals achieve this by awaiting task handles in the order they were
//! spawned, never in completion order.
//!
//! ## Example
//!
//! ```rust,ignore
//! use async_traverse::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let doubled = vec![1, 2, 3]
//!         .map_concurrent(|x| async move { x * 2 })
//!         .await;
//!     assert_eq!(doubled, vec![2, 4, 6]);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: traversal methods are async fns on public traits. The returned
// futures inherit Send from the caller's operation, which is the intended
// contract, so the auto-trait-bound caveat behind this lint does not apply.
#![allow(async_fn_in_trait)]

/// Prelude module for convenient imports.
///
/// Re-exports the traversal traits and the task handle type.
///
/// # Usage
///
/// ```rust
/// use async_traverse::prelude::*;
/// ```
pub mod prelude {
    pub use crate::concurrent::ConcurrentTraversal;
    pub use crate::sequential::SequentialTraversal;
    pub use crate::task::Task;
}

pub mod concurrent;
pub mod sequential;
pub mod task;
