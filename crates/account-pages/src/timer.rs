//! Delayed callbacks
//!
//! A [`Scheduler`] runs a task once after a delay. Scheduled tasks are fire
//! and forget: nothing tracks them and nothing cancels them, so two tasks
//! scheduled a second apart both run.

use std::time::Duration;

/// A one-shot task run by a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + 'static>;

pub trait Scheduler {
	fn schedule(&self, delay: Duration, task: Task);
}

/// `setTimeout` through `gloo-timers` (WASM only).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
	fn schedule(&self, delay: Duration, task: Task) {
		let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
		gloo_timers::callback::Timeout::new(millis, task).forget();
	}
}

/// `tokio::time::sleep` on a local task (native only).
///
/// Tasks are spawned with [`tokio::task::spawn_local`], so
/// [`schedule`](Scheduler::schedule) must be called from inside a
/// [`tokio::task::LocalSet`].
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[cfg(not(target_arch = "wasm32"))]
impl Scheduler for TokioScheduler {
	fn schedule(&self, delay: Duration, task: Task) {
		tokio::task::spawn_local(async move {
			tokio::time::sleep(delay).await;
			task();
		});
	}
}
