//! Allocators for the Spotwise engine.
//!
//! [`ExhaustiveAllocator`] is the default implementation of the
//! [`Allocator`](spotwise_core::Allocator) trait. It scores every way of
//! handing spots to agents and keeps the partition whose longest route is
//! shortest. The number of candidates is `agents ^ spots`, so it is exact but
//! only usable on small instances; [`search_space_size`] lets callers check
//! the cost up front. With the `parallel` feature the enumeration can be split
//! across a rayon thread pool without changing the result.
//!
//! [`GreedyAllocator`] trades the optimality guarantee for linear running time
//! and is never substituted for the exhaustive search implicitly.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod exhaustive;
mod greedy;

pub use exhaustive::{ExhaustiveAllocator, ExhaustiveConfig, optimize, search_space_size};
pub use greedy::GreedyAllocator;
