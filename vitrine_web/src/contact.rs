// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form posted with `fetch`, answered with a toast.

use vitrine_core::contact::{ContactConfig, SubmitOutcome};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Event, FormData, Headers, HtmlElement, HtmlFormElement, Request, RequestInit,
    Response,
};

use crate::error::MountError;
use crate::timer::Timeout;

/// Element ids of the form and its toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactSelectors {
    /// Id of the `<form>`; its `action` is the POST endpoint.
    pub form: &'static str,
    /// Id of the toast element.
    pub toast: &'static str,
}

impl ContactSelectors {
    /// The portfolio's contact section.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            form: "contact-form",
            toast: "toast",
        }
    }
}

impl Default for ContactSelectors {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Replaces the form's navigation with an in-page `fetch` POST.
///
/// The request carries the form fields and `Accept: application/json`. The
/// toast reports the outcome; the form is cleared only on success.
pub fn mount_contact_form(
    document: &Document,
    selectors: &ContactSelectors,
    config: ContactConfig,
) -> Result<(), MountError> {
    let form: HtmlFormElement = crate::by_id(document, selectors.form)?
        .dyn_into()
        .map_err(|_| MountError::MissingElement(selectors.form))?;
    let toast = crate::by_id(document, selectors.toast)?;

    let submit_form = form.clone();
    let submit_cb = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        let Ok(body) = FormData::new_with_form(&submit_form) else {
            show_toast(&toast, &config, SubmitOutcome::Failed);
            return;
        };
        let action = submit_form.get_attribute("action").unwrap_or_default();
        let form = submit_form.clone();
        let toast = toast.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = post(&action, &body).await;
            show_toast(&toast, &config, outcome);
            if config.resets_form(outcome) {
                form.reset();
            }
        });
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", submit_cb.as_ref().unchecked_ref())?;
    submit_cb.forget();
    Ok(())
}

async fn post(action: &str, body: &FormData) -> SubmitOutcome {
    SubmitOutcome::from_status(send(action, body).await.ok())
}

async fn send(action: &str, body: &FormData) -> Result<u16, JsValue> {
    let headers = Headers::new()?;
    headers.set("Accept", "application/json")?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(body);
    init.set_headers(&headers);
    let request = Request::new_with_str_and_init(action, &init)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    Ok(response.status())
}

fn show_toast(toast: &HtmlElement, config: &ContactConfig, outcome: SubmitOutcome) {
    toast.set_text_content(Some(config.message(outcome)));
    let _ = toast.class_list().add_1(config.toast_class);
    let toast = toast.clone();
    let class = config.toast_class;
    Timeout::spawn(config.toast_ms, move || {
        let _ = toast.class_list().remove_1(class);
    });
}
