//! Core domain types for the Spotwise allocation engine.
//!
//! A fleet of agents (UGVs) starts from known positions and must visit a list
//! of spots. These types describe the input, the partition of spots across
//! agents, and the contract every allocator implements. Validation is explicit
//! so invalid input surfaces before any search begins.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod allocator;
pub mod assignment;
pub mod point;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use allocator::{
    AllocationError, AllocationRequest, AllocationRequestValidationError, AllocationResponse,
    Allocator, Diagnostics,
};
pub use assignment::{AgentRoute, Assignment, AssignmentError, Spot};
pub use point::{Point, distance, route_cost};
