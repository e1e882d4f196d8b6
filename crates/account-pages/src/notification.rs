//! Notification banner
//!
//! [`Notifier`] drives the single `#notification` element. There is no
//! queue: each [`show`](Notifier::show) overwrites the banner and schedules
//! its own hide. Older hides are not cancelled, so a hide scheduled for an
//! earlier message still hides whatever is on screen when it fires.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::debug_log;
use crate::dom::{Display, ElementHandle};
use crate::timer::Scheduler;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	Info,
	Success,
	Danger,
}

impl Severity {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Info => "info",
			Self::Success => "success",
			Self::Danger => "danger",
		}
	}

	/// `class` attribute for the banner, e.g. `alert alert-danger`
	pub fn css_class(&self) -> String {
		format!("alert alert-{}", self.as_str())
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// What the banner currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationState {
	pub message: String,
	pub severity: Severity,
	pub visible: bool,
}

/// Shows messages in the notification element and hides them after a fixed window.
pub struct Notifier<E, S> {
	element: Option<E>,
	scheduler: S,
	display_for: Duration,
	state: Rc<RefCell<Option<NotificationState>>>,
}

impl<E, S> Notifier<E, S>
where
	E: ElementHandle,
	S: Scheduler,
{
	/// `element` may be `None` when the page has no banner; the state is
	/// still tracked.
	pub fn new(element: Option<E>, scheduler: S, display_for: Duration) -> Self {
		Self {
			element,
			scheduler,
			display_for,
			state: Rc::new(RefCell::new(None)),
		}
	}

	pub fn show(&self, message: &str, severity: Severity) {
		debug_log!("Notification ({}): {}", severity, message);

		if let Some(element) = &self.element {
			element.set_text_content(message);
			element.set_class_name(&severity.css_class());
			element.set_display(Display::Block);
		}
		*self.state.borrow_mut() = Some(NotificationState {
			message: message.to_string(),
			severity,
			visible: true,
		});

		let element = self.element.clone();
		let state = Rc::clone(&self.state);
		self.scheduler.schedule(
			self.display_for,
			Box::new(move || {
				if let Some(element) = element {
					element.set_display(Display::None);
				}
				if let Some(current) = state.borrow_mut().as_mut() {
					current.visible = false;
				}
			}),
		);
	}

	/// The last notification shown, if any
	pub fn state(&self) -> Option<NotificationState> {
		self.state.borrow().clone()
	}

	pub fn display_for(&self) -> Duration {
		self.display_for
	}
}

impl<E, S> fmt::Debug for Notifier<E, S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Notifier")
			.field("has_element", &self.element.is_some())
			.field("display_for", &self.display_for)
			.field("state", &self.state.borrow())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dom::memory::MemoryElement;
	use crate::timer::Task;
	use rstest::rstest;
	use std::cell::RefCell;

	/// Holds tasks until the test runs them.
	#[derive(Clone, Default)]
	struct HeldTasks(Rc<RefCell<Vec<(Duration, Task)>>>);

	impl HeldTasks {
		fn run_all(&self) {
			let tasks: Vec<_> = self.0.borrow_mut().drain(..).collect();
			for (_, task) in tasks {
				task();
			}
		}

		fn delays(&self) -> Vec<Duration> {
			self.0.borrow().iter().map(|(d, _)| *d).collect()
		}
	}

	impl Scheduler for HeldTasks {
		fn schedule(&self, delay: Duration, task: Task) {
			self.0.borrow_mut().push((delay, task));
		}
	}

	#[rstest]
	#[case(Severity::Info, "alert alert-info")]
	#[case(Severity::Success, "alert alert-success")]
	#[case(Severity::Danger, "alert alert-danger")]
	fn test_severity_css_class(#[case] severity: Severity, #[case] class: &str) {
		assert_eq!(severity.css_class(), class);
	}

	#[rstest]
	fn test_severity_serializes_lowercase() {
		assert_eq!(
			serde_json::to_string(&Severity::Danger).unwrap(),
			"\"danger\""
		);
	}

	#[rstest]
	fn test_show_updates_element_and_schedules_hide() {
		let element = MemoryElement::new();
		let tasks = HeldTasks::default();
		let notifier = Notifier::new(
			Some(element.clone()),
			tasks.clone(),
			Duration::from_millis(3000),
		);

		notifier.show("Updating your account...", Severity::Info);

		assert_eq!(element.text(), "Updating your account...");
		assert_eq!(element.class_name(), "alert alert-info");
		assert_eq!(element.display(), Display::Block);
		assert_eq!(tasks.delays(), vec![Duration::from_millis(3000)]);

		tasks.run_all();

		assert_eq!(element.display(), Display::None);
		assert_eq!(
			notifier.state(),
			Some(NotificationState {
				message: "Updating your account...".to_string(),
				severity: Severity::Info,
				visible: false,
			})
		);
	}

	#[rstest]
	fn test_last_write_wins_and_old_timer_still_hides() {
		let element = MemoryElement::new();
		let tasks = HeldTasks::default();
		let notifier = Notifier::new(Some(element.clone()), tasks.clone(), Duration::from_secs(3));

		notifier.show("first", Severity::Danger);
		notifier.show("second", Severity::Success);
		assert_eq!(element.text(), "second");
		assert_eq!(tasks.delays().len(), 2);

		// Run only the first hide: it hides the second message
		let (_, first_hide) = tasks.0.borrow_mut().remove(0);
		first_hide();
		assert!(!element.is_visible());
		assert_eq!(notifier.state().map(|s| s.visible), Some(false));
	}

	#[rstest]
	fn test_missing_element_still_tracks_state() {
		let tasks = HeldTasks::default();
		let notifier: Notifier<MemoryElement, _> =
			Notifier::new(None, tasks.clone(), Duration::from_secs(3));

		notifier.show("Invalid email format.", Severity::Danger);
		assert_eq!(
			notifier.state().map(|s| s.message),
			Some("Invalid email format.".to_string())
		);
		tasks.run_all();
		assert_eq!(notifier.state().map(|s| s.visible), Some(false));
	}
}
