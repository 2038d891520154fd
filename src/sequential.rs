//! Sequential traversal over ordered collections of async operations.
//!
//! The [`SequentialTraversal`] trait extends every ordered collection with
//! visit, map, and filter-map operations whose per-element work is
//! asynchronous. The discipline is strict: each element's operation fully
//! completes, including any suspension it performs, before the operation for
//! the next element is even started.
//!
//! Every operation comes in two flavors. The plain flavor takes an operation
//! that cannot fail. The `try_` flavor takes an operation returning
//! [`Result`] and aborts the whole traversal at the first error: remaining
//! elements are never invoked, and any outputs accumulated so far are
//! discarded rather than partially returned.
//!
//! # Examples
//!
//! ```rust,ignore
//! use async_traverse::sequential::SequentialTraversal;
//!
//! #[tokio::main]
//! async fn main() {
//!     let lengths = vec!["a", "bb", "ccc"]
//!         .map_async(|word| async move { word.len() })
//!         .await;
//!     assert_eq!(lengths, vec![1, 2, 3]);
//! }
//! ```

use std::future::Future;

/// Sequential visit, map, and filter-map over any ordered collection.
///
/// Implemented for every [`IntoIterator`], so the methods are available
/// directly on `Vec`, slices-by-value, ranges, and anything else that can be
/// consumed in order. Iteration order defines the output order.
///
/// All methods consume the collection and hold the caller's operation only
/// for the duration of the call.
pub trait SequentialTraversal: IntoIterator + Sized {
    /// Visits each element in order, awaiting each operation to completion
    /// before invoking the next.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_traverse::sequential::SequentialTraversal;
    ///
    /// vec![1, 2, 3]
    ///     .for_each_async(|x| async move { println!("{x}") })
    ///     .await;
    /// ```
    async fn for_each_async<Op, Fut>(self, mut operation: Op)
    where
        Op: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = ()>,
    {
        for element in self {
            operation(element).await;
        }
    }

    /// Visits each element in order, stopping at the first failure.
    ///
    /// Elements after the failing one are never invoked.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `operation`, unchanged.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_traverse::sequential::SequentialTraversal;
    ///
    /// let outcome = vec![1, 2, 3]
    ///     .try_for_each_async(|x| async move {
    ///         if x == 2 { Err("even") } else { Ok(()) }
    ///     })
    ///     .await;
    /// assert_eq!(outcome, Err("even"));
    /// ```
    async fn try_for_each_async<E, Op, Fut>(self, mut operation: Op) -> Result<(), E>
    where
        Op: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        for element in self {
            operation(element).await?;
        }
        Ok(())
    }

    /// Transforms each element in order, producing one output per element.
    ///
    /// The output at position *i* is derived from the element at position
    /// *i* of the input.
    async fn map_async<B, Op, Fut>(self, mut operation: Op) -> Vec<B>
    where
        Op: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = B>,
    {
        let iterator = self.into_iter();
        let mut outputs = Vec::with_capacity(iterator.size_hint().0);

        for element in iterator {
            outputs.push(operation(element).await);
        }

        outputs
    }

    /// Transforms each element in order, stopping at the first failure.
    ///
    /// On failure at element *i*, elements after *i* are never invoked and
    /// the outputs accumulated for elements before *i* are discarded.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `operation`, unchanged. No partial
    /// output collection is returned.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use async_traverse::sequential::SequentialTraversal;
    ///
    /// let doubled = vec![1, 2, 3]
    ///     .try_map_async(|x| async move { Ok::<_, String>(x * 2) })
    ///     .await;
    /// assert_eq!(doubled, Ok(vec![2, 4, 6]));
    /// ```
    async fn try_map_async<B, E, Op, Fut>(self, mut operation: Op) -> Result<Vec<B>, E>
    where
        Op: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Result<B, E>>,
    {
        let iterator = self.into_iter();
        let mut outputs = Vec::with_capacity(iterator.size_hint().0);

        for element in iterator {
            outputs.push(operation(element).await?);
        }

        Ok(outputs)
    }

    /// Transforms each element in order, dropping elements for which the
    /// operation yields `None`.
    ///
    /// Surviving outputs keep the relative order of their source elements.
    async fn filter_map_async<B, Op, Fut>(self, mut operation: Op) -> Vec<B>
    where
        Op: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Option<B>>,
    {
        let mut outputs = Vec::new();

        for element in self {
            if let Some(output) = operation(element).await {
                outputs.push(output);
            }
        }

        outputs
    }

    /// Transforms each element in order, dropping `None` outcomes and
    /// stopping at the first failure.
    ///
    /// An operation yielding `Ok(None)` contributes nothing to the output
    /// and does not disturb the ordering of subsequent survivors.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `operation`, unchanged. No partial
    /// output collection is returned.
    async fn try_filter_map_async<B, E, Op, Fut>(self, mut operation: Op) -> Result<Vec<B>, E>
    where
        Op: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Result<Option<B>, E>>,
    {
        let mut outputs = Vec::new();

        for element in self {
            if let Some(output) = operation(element).await? {
                outputs.push(output);
            }
        }

        Ok(outputs)
    }
}

impl<I: IntoIterator> SequentialTraversal for I {}
