//! Scripted transport for controller tests

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::TransportError;
use crate::store::{HttpReply, Transport};

type Scripted = RefCell<VecDeque<Result<HttpReply, TransportError>>>;

/// Answers requests from queued replies and records every call.
/// Unscripted requests fail as a network error.
#[derive(Default)]
pub struct MockTransport {
    gets: Scripted,
    posts: Scripted,
    calls: RefCell<Vec<String>>,
    bodies: RefCell<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(self, reply: Result<HttpReply, TransportError>) -> Self {
        self.gets.borrow_mut().push_back(reply);
        self
    }

    pub fn on_post(self, reply: Result<HttpReply, TransportError>) -> Self {
        self.posts.borrow_mut().push_back(reply);
        self
    }

    /// "GET url" / "POST url" in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn posted_bodies(&self) -> Vec<String> {
        self.bodies.borrow().clone()
    }

    fn next(queue: &Scripted) -> Result<HttpReply, TransportError> {
        queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".into())))
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        self.calls.borrow_mut().push(format!("GET {url}"));
        Self::next(&self.gets)
    }

    async fn post(&self, url: &str, body: String) -> Result<HttpReply, TransportError> {
        self.calls.borrow_mut().push(format!("POST {url}"));
        self.bodies.borrow_mut().push(body);
        Self::next(&self.posts)
    }
}

pub fn ok(body: &str) -> HttpReply {
    HttpReply {
        status: 200,
        body: body.to_string(),
    }
}
