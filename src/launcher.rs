//! WASM entry point
//!
//! Mounts the account form controller once the page has loaded. The
//! controller is configured from the form's optional `data-config`
//! attribute (JSON, see [`ControllerConfig`]); pages that build the form
//! later call [`mount_account_form`] themselves.

use std::rc::Rc;

use account_pages::config::DEFAULT_FORM_ID;
use account_pages::{
	BrowserController, BrowserDocument, BrowserScheduler, ControllerConfig, FetchTransport,
	debug_log, error_log,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Event;

/// Attribute holding the JSON configuration override
pub const CONFIG_ATTRIBUTE: &str = "data-config";

/// Set on a form once its submit listener is attached
pub const MOUNTED_ATTRIBUTE: &str = "data-account-mounted";

/// `document.readyState` before `DOMContentLoaded`
const LOADING_STATE: &str = "loading";

fn is_loading(ready_state: &str) -> bool {
	ready_state == LOADING_STATE
}

/// WASM entry point
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	// Set up panic hook for better error messages in console
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let document = BrowserDocument::current().ok_or_else(|| JsValue::from_str("No document object"))?;

	if is_loading(&document.document().ready_state()) {
		let on_ready = Closure::wrap(Box::new(move |_event: Event| {
			mount_account_form(None);
		}) as Box<dyn FnMut(_)>);
		document
			.document()
			.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
		on_ready.forget();
	} else {
		mount_account_form(None);
	}
	Ok(())
}

/// Bind the controller to the current page
///
/// `config_json` overrides the `data-config` attribute of
/// `#update-account-form`. Returns `false` when the page has no account
/// form. Calling it again for an already mounted form is a no-op that
/// returns `true`; the form keeps a single submit listener.
#[wasm_bindgen]
pub fn mount_account_form(config_json: Option<String>) -> bool {
	let Some(document) = BrowserDocument::current() else {
		return false;
	};

	let config_json = config_json.or_else(|| {
		document
			.document()
			.get_element_by_id(DEFAULT_FORM_ID)
			.and_then(|form| form.get_attribute(CONFIG_ATTRIBUTE))
	});
	let config = match config_json {
		Some(json) => ControllerConfig::from_json(&json).unwrap_or_else(|err| {
			error_log!("Ignoring invalid account form config: {}", err);
			ControllerConfig::default()
		}),
		None => ControllerConfig::default(),
	};

	let already_mounted = document
		.document()
		.get_element_by_id(&config.form_id)
		.is_some_and(|form| form.has_attribute(MOUNTED_ATTRIBUTE));
	if already_mounted {
		debug_log!("#{} is already mounted", config.form_id);
		return true;
	}

	let Some(controller) =
		BrowserController::mount(&document, config, FetchTransport::new(), BrowserScheduler)
	else {
		return false;
	};

	let form = controller.form().element().clone();
	match attach_submit_listener(Rc::new(controller)) {
		Ok(()) => {
			if let Err(err) = form.set_attribute(MOUNTED_ATTRIBUTE, "") {
				error_log!("Failed to mark the form as mounted: {:?}", err);
			}
			true
		}
		Err(err) => {
			error_log!("Failed to add submit listener: {:?}", err);
			false
		}
	}
}

fn attach_submit_listener(controller: Rc<BrowserController>) -> Result<(), JsValue> {
	let form = controller.form().element().clone();

	let closure = Closure::wrap(Box::new(move |event: Event| {
		event.prevent_default();

		let controller = Rc::clone(&controller);
		wasm_bindgen_futures::spawn_local(async move {
			controller.handle_submit().await;
		});
	}) as Box<dyn FnMut(_)>);

	form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}
