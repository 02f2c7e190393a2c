//! Test helpers for writing request files and stubbing the allocator.

use camino::Utf8Path;
use spotwise_core::test_support::{FixedAllocator, points};
use spotwise_core::{
    AllocationRequest, AllocationResponse, Allocator, Assignment, Diagnostics,
};
use std::time::Duration;

use crate::options::{AllocationSettings, AllocatorBuilder};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

pub(super) fn write_request(path: &Utf8Path, request: &AllocationRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialize request");
    write_utf8(path, payload.as_bytes());
}

/// One agent at the origin visiting two collinear spots.
pub(super) fn collinear_request() -> AllocationRequest {
    AllocationRequest::new(&points(&[(0.0, 0.0)]), &points(&[(1.0, 0.0), (2.0, 0.0)]))
}

/// Canned response placing every spot of [`collinear_request`] on agent 0.
pub(super) fn collinear_response() -> AllocationResponse {
    let request = collinear_request();
    let assignment =
        Assignment::from_labels(&request.agents, &request.spots, &[0, 0]).expect("labels fit");
    AllocationResponse {
        score: assignment.makespan(),
        assignment,
        diagnostics: Diagnostics {
            solve_time: Duration::from_secs(0),
            candidates_evaluated: 1,
        },
    }
}

/// Builder handing out a [`FixedAllocator`] and recording the settings it saw.
#[derive(Debug)]
pub(super) struct FixedAllocatorBuilder {
    response: AllocationResponse,
    seen: std::cell::RefCell<Option<AllocationSettings>>,
}

impl FixedAllocatorBuilder {
    pub(super) fn new(response: AllocationResponse) -> Self {
        Self {
            response,
            seen: std::cell::RefCell::new(None),
        }
    }

    pub(super) fn seen(&self) -> Option<AllocationSettings> {
        *self.seen.borrow()
    }
}

impl AllocatorBuilder for FixedAllocatorBuilder {
    fn build(&self, settings: &AllocationSettings) -> Box<dyn Allocator> {
        self.seen.replace(Some(*settings));
        Box::new(FixedAllocator::new(self.response.clone()))
    }
}
