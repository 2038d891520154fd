//! Task handles for eagerly spawned asynchronous operations.
//!
//! A [`Task`] represents one in-flight invocation of an asynchronous
//! operation. Unlike a bare future, the operation starts running the moment
//! the task is spawned, concurrently with the caller and with every other
//! spawned task. The handle is awaited to retrieve the outcome.
//!
//! # Design Philosophy
//!
//! `Task` separates *launching* work from *collecting* its outcome:
//!
//! 1. **Spawning is non-suspending**: [`Task::spawn`] hands the future to the
//!    runtime and returns immediately. Starting a task never blocks on any
//!    other task.
//! 2. **Awaiting is outcome retrieval**: awaiting the handle suspends the
//!    caller until that specific task resolves. Awaiting a handle whose task
//!    has already completed returns immediately with the stored outcome.
//! 3. **Dropping detaches**: a dropped handle does not cancel its task; the
//!    task keeps running to completion and its outcome is discarded.
//!
//! The concurrent traversals in [`crate::concurrent`] are built directly on
//! these three properties: spawn one task per element, then await the handles
//! in spawn order.
//!
//! # Examples
//!
//! ```rust,ignore
//! use async_traverse::task::Task;
//!
//! #[tokio::main]
//! async fn main() {
//!     // The operation starts running here, not at the await point.
//!     let task = Task::spawn(async { 21 * 2 });
//!     assert_eq!(task.await, 42);
//! }
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;
use tokio::task::JoinHandle;

// =============================================================================
// Task Struct Definition
// =============================================================================

pin_project! {
    /// A handle to one eagerly running asynchronous operation.
    ///
    /// `Task<A>` wraps a spawned runtime task producing a value of type `A`.
    /// The task begins executing as soon as it is created via [`Task::spawn`];
    /// the handle only controls when (and whether) the outcome is observed.
    ///
    /// # Type Parameters
    ///
    /// - `A`: The type of the value produced by the task.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_traverse::task::Task;
    ///
    /// let task = Task::spawn(async { "done" });
    /// assert_eq!(task.await, "done");
    /// ```
    pub struct Task<A> {
        #[pin]
        handle: JoinHandle<A>,
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: Send + 'static> Task<A> {
    /// Spawns a future onto the runtime and returns a handle to it.
    ///
    /// The future begins executing immediately, concurrently with the caller
    /// and with all other spawned tasks. This function does not suspend and
    /// returns without waiting for any part of the future to complete.
    ///
    /// # Arguments
    ///
    /// * `future` - The operation to run. It is moved onto the runtime, so it
    ///   must own everything it touches.
    ///
    /// # Panics
    ///
    /// Panics if called from outside a tokio runtime context, since there is
    /// nothing to execute the task on.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_traverse::task::Task;
    ///
    /// let task = Task::spawn(async {
    ///     tokio::task::yield_now().await;
    ///     42
    /// });
    /// // The operation is already running at this point.
    /// assert_eq!(task.await, 42);
    /// ```
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        Self {
            handle: tokio::task::spawn(future),
        }
    }
}

// =============================================================================
// Outcome Retrieval
// =============================================================================

impl<A> Task<A> {
    /// Waits for the task to complete and returns its outcome.
    ///
    /// Equivalent to awaiting the handle directly. If the task has already
    /// completed, this returns immediately with the stored outcome.
    ///
    /// # Panics
    ///
    /// If the task panicked, the panic payload is re-raised here (see the
    /// [`Future`] implementation).
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let task = Task::spawn(async { 7 });
    /// assert_eq!(task.join().await, 7);
    /// ```
    pub async fn join(self) -> A {
        self.await
    }

    /// Returns `true` if the task has run to completion.
    ///
    /// This is a non-blocking probe; it does not consume the outcome.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

// =============================================================================
// Future Implementation
// =============================================================================

impl<A> Future for Task<A> {
    type Output = A;

    /// Polls the underlying runtime task for its outcome.
    ///
    /// A task that panicked re-raises the panic payload at this await point,
    /// so panics travel the panic channel and never masquerade as values.
    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.handle.poll(context) {
            Poll::Ready(Ok(value)) => Poll::Ready(value),
            Poll::Ready(Err(join_error)) => match join_error.try_into_panic() {
                Ok(payload) => std::panic::resume_unwind(payload),
                Err(join_error) => panic!(
                    "Task internal error: the spawned operation was cancelled ({join_error}). \
                     Task handles never cancel their operations, so this indicates the \
                     runtime shut down while the task was still running."
                ),
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A> fmt::Debug for Task<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Task")
            .field("finished", &self.handle.is_finished())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    #[rstest]
    #[tokio::test]
    async fn test_spawn_returns_value_on_await() {
        let task = Task::spawn(async { 21 * 2 });
        assert_eq!(task.await, 42);
    }

    #[rstest]
    #[tokio::test]
    async fn test_join_returns_value() {
        let task = Task::spawn(async { "hello".to_string() });
        assert_eq!(task.join().await, "hello");
    }

    #[rstest]
    #[tokio::test]
    async fn test_spawn_begins_execution_immediately() {
        let executed = Arc::new(AtomicBool::new(false));
        let executed_clone = executed.clone();

        let task = Task::spawn(async move {
            executed_clone.store(true, Ordering::SeqCst);
        });

        // Yield to the scheduler without touching the handle; the task runs
        // on its own.
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(executed.load(Ordering::SeqCst));

        task.await;
    }

    #[rstest]
    #[tokio::test]
    async fn test_awaiting_completed_task_returns_stored_outcome() {
        let task = Task::spawn(async { 7 });

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(task.is_finished());

        assert_eq!(task.await, 7);
    }

    #[rstest]
    #[tokio::test]
    async fn test_is_finished_false_while_running() {
        let task = Task::spawn(async {
            tokio::time::sleep(Duration::from_secs(10)).await;
        });
        assert!(!task.is_finished());
        drop(task);
    }

    #[rstest]
    #[tokio::test]
    #[should_panic(expected = "boom")]
    async fn test_panicking_task_reraises_payload_on_await() {
        let task = Task::spawn(async { panic!("boom") });
        task.await;
    }

    #[rstest]
    #[tokio::test]
    async fn test_dropped_task_keeps_running() {
        let executed = Arc::new(AtomicBool::new(false));
        let executed_clone = executed.clone();

        let task = Task::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            executed_clone.store(true, Ordering::SeqCst);
        });
        drop(task);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(executed.load(Ordering::SeqCst));
    }

    #[rstest]
    #[tokio::test]
    async fn test_debug_shows_completion_state() {
        let task = Task::spawn(async { 1 });
        tokio::time::sleep(Duration::from_millis(10)).await;

        let debug = format!("{task:?}");
        assert!(debug.contains("Task"));
        assert!(debug.contains("finished: true"));

        task.await;
    }
}
