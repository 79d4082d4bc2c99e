//! In-memory transport for exercising the façade without a browser.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::transport::{ApiRequest, ApiResponse, Transport, TransportError};

/// Records every request and replays queued responses in order. With nothing
/// queued it answers `200 []`.
#[derive(Clone, Debug, Default)]
pub(crate) struct RecordingTransport {
    sent: Rc<RefCell<Vec<ApiRequest>>>,
    queued: Rc<RefCell<VecDeque<Result<ApiResponse, TransportError>>>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, result: Result<ApiResponse, TransportError>) {
        self.queued.borrow_mut().push_back(result);
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub(crate) fn last_request(&self) -> Option<ApiRequest> {
        self.sent.borrow().last().cloned()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        self.queued
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::new(200, "[]")))
    }
}
