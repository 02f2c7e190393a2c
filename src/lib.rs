//! Facade crate for the Spotwise allocation engine.
//!
//! This crate re-exports the core domain types and exposes the allocators
//! behind feature flags.

#![forbid(unsafe_code)]

pub use spotwise_core::{
    AgentRoute, AllocationError, AllocationRequest, AllocationRequestValidationError,
    AllocationResponse, Allocator, Assignment, Diagnostics, Point, Spot, distance, route_cost,
};

#[cfg(feature = "solver")]
pub use spotwise_solver::{
    ExhaustiveAllocator, ExhaustiveConfig, GreedyAllocator, optimize, search_space_size,
};
