//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use super::transport::Transport;
use super::types::{ApiError, ApiRequest, ApiResponse};

/// Transport stub: scripted responses per path, records every request.
pub struct ScriptedTransport {
    pub requests: RefCell<Vec<ApiRequest>>,
    scripts: RefCell<Vec<(String, VecDeque<Result<ApiResponse, ApiError>>)>>,
}

impl ScriptedTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            requests: RefCell::new(Vec::new()),
            scripts: RefCell::new(Vec::new()),
        })
    }

    /// Queue the next response for `path`. Responses for a path are consumed
    /// in order; a request to a path with an exhausted or missing script
    /// fails the test.
    pub fn push(&self, path: &str, result: Result<ApiResponse, ApiError>) {
        let mut scripts = self.scripts.borrow_mut();
        if let Some((_, queue)) = scripts.iter_mut().find(|(p, _)| p == path) {
            queue.push_back(result);
        } else {
            scripts.push((path.to_owned(), VecDeque::from([result])));
        }
    }

    /// Number of requests recorded against `path`.
    pub fn calls_to(&self, path: &str) -> usize {
        self.requests.borrow().iter().filter(|r| r.path == path).count()
    }

    /// All recorded requests against `path`, in order.
    pub fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, req: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>> {
        self.requests.borrow_mut().push(req.clone());
        let result = self
            .scripts
            .borrow_mut()
            .iter_mut()
            .find(|(p, _)| *p == req.path)
            .and_then(|(_, queue)| queue.pop_front())
            .unwrap_or_else(|| panic!("no scripted response for {}", req.path));
        Box::pin(futures::future::ready(result))
    }
}

/// A 200 response with the given JSON body.
pub fn ok_json(body: serde_json::Value) -> Result<ApiResponse, ApiError> {
    Ok(ApiResponse { status: 200, body })
}
