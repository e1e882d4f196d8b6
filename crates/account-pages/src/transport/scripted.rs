use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use super::{AccountResponse, AccountTransport, SubmitError, SubmitRequest};

/// A canned reply for [`ScriptedTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
	/// The server answered with this body
	Body(String),
	/// The request never got an answer
	Fail(SubmitError),
}

impl Reply {
	pub fn json(value: serde_json::Value) -> Self {
		Self::Body(value.to_string())
	}
}

/// Replays queued replies in order and records every request.
///
/// Once the queue is empty, further requests fail with
/// [`SubmitError::Network`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
	replies: Rc<RefCell<VecDeque<Reply>>>,
	requests: Rc<RefCell<Vec<SubmitRequest>>>,
}

impl ScriptedTransport {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn reply(self, reply: Reply) -> Self {
		self.replies.borrow_mut().push_back(reply);
		self
	}

	/// Requests received so far, oldest first
	pub fn requests(&self) -> Vec<SubmitRequest> {
		self.requests.borrow().clone()
	}
}

#[async_trait(?Send)]
impl AccountTransport for ScriptedTransport {
	async fn submit(&self, request: &SubmitRequest) -> Result<AccountResponse, SubmitError> {
		self.requests.borrow_mut().push(request.clone());
		let reply = self.replies.borrow_mut().pop_front();
		match reply {
			Some(Reply::Body(body)) => AccountResponse::from_body(&body),
			Some(Reply::Fail(err)) => Err(err),
			None => Err(SubmitError::Network("No scripted reply left".to_string())),
		}
	}
}
