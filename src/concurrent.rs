//! Concurrent traversal over ordered collections of async operations.
//!
//! The [`ConcurrentTraversal`] trait extends every ordered collection with
//! visit, map, and filter-map operations that run the per-element work
//! concurrently. Each call proceeds in two phases:
//!
//! 1. **Spawning**: one [`Task`] is spawned per element, in input order,
//!    with no dependency between spawns. Every operation is running before
//!    any outcome is observed.
//! 2. **Collecting**: the handles are awaited in the order they were
//!    spawned, by handing the handle list to the matching
//!    [`SequentialTraversal`] primitive. The handle itself is the
//!    per-element operation of that inner traversal.
//!
//! Collecting in spawn order is what makes output order equal input order
//! regardless of completion order, and it only ever blocks on work that is
//! already running, so total wall-clock time is bounded by the slowest
//! operation rather than the sum.
//!
//! # Failure Semantics
//!
//! For the `try_` flavors, the first handle in collection order whose
//! outcome is an error fails the whole call with that error. Tasks that were
//! launched but not yet collected are not cancelled: they keep running to
//! completion in the background and their outcomes, including any failures
//! of their own, are discarded. Launch cost is paid for every element
//! regardless of an early abort during collection. Callers that need
//! cancellation must wrap the whole call in the runtime's own cancellation
//! facility.
//!
//! # Examples
//!
//! ```rust,ignore
//! use async_traverse::concurrent::ConcurrentTraversal;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Results come back in input order even though the per-element
//!     // latencies would finish in the opposite order.
//!     let doubled = vec![3u64, 2, 1]
//!         .map_concurrent(|x| async move {
//!             tokio::time::sleep(std::time::Duration::from_millis(x * 10)).await;
//!             x * 2
//!         })
//!         .await;
//!     assert_eq!(doubled, vec![6, 4, 2]);
//! }
//! ```

use std::future::Future;

use crate::sequential::SequentialTraversal;
use crate::task::Task;

/// Concurrent visit, map, and filter-map over any ordered collection.
///
/// Implemented for every [`IntoIterator`]. Elements are captured by value at
/// spawn time, so each operation owns its element outright; the crate
/// introduces no shared state between concurrently running operations.
///
/// Because each operation is moved onto the runtime, operations and their
/// outputs must be `Send + 'static`. For work that does not meet those
/// bounds, use the [`SequentialTraversal`] methods instead.
///
/// # Panics
///
/// All methods spawn onto the ambient tokio runtime and panic if called
/// outside one, as [`Task::spawn`] does.
pub trait ConcurrentTraversal: IntoIterator + Sized {
    /// Visits every element concurrently, then waits for all operations in
    /// spawn order.
    ///
    /// Returns once every operation has completed.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_traverse::concurrent::ConcurrentTraversal;
    ///
    /// urls.for_each_concurrent(|url| async move { prefetch(url).await })
    ///     .await;
    /// ```
    async fn for_each_concurrent<Op, Fut>(self, mut operation: Op)
    where
        Op: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        // Spawn phase: every operation is launched before any is awaited.
        let handles: Vec<Task<()>> = self
            .into_iter()
            .map(|element| Task::spawn(operation(element)))
            .collect();

        // Collect phase: the handle is the per-element operation.
        handles.for_each_async(|handle| handle).await;
    }

    /// Visits every element concurrently, failing with the first error in
    /// collection order.
    ///
    /// All operations are launched before any outcome is observed, so an
    /// early error does not prevent later elements from running; their
    /// outcomes are discarded.
    ///
    /// # Errors
    ///
    /// Returns the error of the first handle, in spawn order, whose outcome
    /// is an error, regardless of which operation finished first on the
    /// clock.
    async fn try_for_each_concurrent<E, Op, Fut>(self, mut operation: Op) -> Result<(), E>
    where
        Op: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Send + 'static,
    {
        let handles: Vec<Task<Result<(), E>>> = self
            .into_iter()
            .map(|element| Task::spawn(operation(element)))
            .collect();

        handles.try_for_each_async(|handle| handle).await
    }

    /// Transforms every element concurrently, collecting outputs in input
    /// order.
    ///
    /// The output at position *i* is derived from the element at position
    /// *i* of the input, regardless of completion order.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_traverse::concurrent::ConcurrentTraversal;
    ///
    /// let bodies = urls.map_concurrent(|url| async move { fetch(url).await }).await;
    /// ```
    async fn map_concurrent<B, Op, Fut>(self, mut operation: Op) -> Vec<B>
    where
        Op: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = B> + Send + 'static,
        B: Send + 'static,
    {
        let handles: Vec<Task<B>> = self
            .into_iter()
            .map(|element| Task::spawn(operation(element)))
            .collect();

        handles.map_async(|handle| handle).await
    }

    /// Transforms every element concurrently, failing with the first error
    /// in collection order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first handle, in spawn order, whose outcome
    /// is an error. No partial output collection is returned; outcomes of
    /// handles past the failing one are discarded while their tasks run to
    /// completion in the background.
    async fn try_map_concurrent<B, E, Op, Fut>(self, mut operation: Op) -> Result<Vec<B>, E>
    where
        Op: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Result<B, E>> + Send + 'static,
        B: Send + 'static,
        E: Send + 'static,
    {
        let handles: Vec<Task<Result<B, E>>> = self
            .into_iter()
            .map(|element| Task::spawn(operation(element)))
            .collect();

        handles.try_map_async(|handle| handle).await
    }

    /// Transforms every element concurrently, dropping `None` outcomes and
    /// collecting the survivors in input order.
    async fn filter_map_concurrent<B, Op, Fut>(self, mut operation: Op) -> Vec<B>
    where
        Op: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Option<B>> + Send + 'static,
        B: Send + 'static,
    {
        let handles: Vec<Task<Option<B>>> = self
            .into_iter()
            .map(|element| Task::spawn(operation(element)))
            .collect();

        handles.filter_map_async(|handle| handle).await
    }

    /// Transforms every element concurrently, dropping `None` outcomes and
    /// failing with the first error in collection order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first handle, in spawn order, whose outcome
    /// is an error. No partial output collection is returned.
    async fn try_filter_map_concurrent<B, E, Op, Fut>(
        self,
        mut operation: Op,
    ) -> Result<Vec<B>, E>
    where
        Op: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Result<Option<B>, E>> + Send + 'static,
        B: Send + 'static,
        E: Send + 'static,
    {
        let handles: Vec<Task<Result<Option<B>, E>>> = self
            .into_iter()
            .map(|element| Task::spawn(operation(element)))
            .collect();

        handles.try_filter_map_async(|handle| handle).await
    }
}

impl<I: IntoIterator> ConcurrentTraversal for I {}
