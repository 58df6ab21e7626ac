//! Signup popup: renders the verification flow and drives its remote calls.

mod flow;

pub use flow::{
    CodeCheck, FlowError, FlowStatus, PendingVerification, RegistrationDraft, VerificationFlow,
    CODE_SLOTS,
};

use dioxus::prelude::*;

use crate::api::{self, ApiError};
use crate::session::use_session;

/// How long the success indication stays visible before the popup closes.
#[cfg(feature = "web")]
const SUCCESS_DISMISS_MS: u32 = 1_200;

fn code_request_error(err: ApiError) -> FlowError {
    match err {
        ApiError::Network(_) | ApiError::Decode(_) => FlowError::Network,
        ApiError::Rejected { reason, .. } => FlowError::ServerRejected(reason),
    }
}

fn registration_error(err: ApiError) -> FlowError {
    match err {
        ApiError::Network(_) | ApiError::Decode(_) => FlowError::Network,
        ApiError::Rejected { reason, .. } => FlowError::RegistrationRejected(reason),
    }
}

/// Move browser focus to the given code slot.
fn focus_code_slot(index: usize) {
    #[cfg(feature = "web")]
    {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&format!("code-slot-{index}")));
        if let Some(element) = element {
            if let Some(input) = element.dyn_ref::<web_sys::HtmlElement>() {
                let _ = input.focus();
            }
        }
    }

    #[cfg(not(feature = "web"))]
    let _ = index;
}

/// Signup popup. Dropping it (cancel, outside click) discards the draft and
/// any pending verification without touching the session or the backend.
#[component]
pub fn SignupPopup(on_close: EventHandler<()>) -> Element {
    let mut flow = use_signal(VerificationFlow::new);
    let session = use_session();

    let handle_request_code = move |_| {
        if !flow.write().begin_code_request() {
            return;
        }
        let draft = flow.read().draft().clone();
        spawn(async move {
            match api::send_auth_code(&draft.full_name, &draft.email).await {
                Ok(response) => {
                    flow.write().code_request_succeeded(response.auth_code);
                    focus_code_slot(0);
                }
                Err(err) => flow.write().code_request_failed(code_request_error(err)),
            }
        });
    };

    let handle_verify = move |_| {
        if flow.write().submit_code() != Some(CodeCheck::Match) {
            return;
        }
        let draft = flow.read().draft().clone();
        let mut session = session;
        spawn(async move {
            match api::register(&draft.full_name, &draft.email, &draft.password).await {
                Ok(response) => {
                    flow.write().registration_succeeded();
                    session.establish(&draft.full_name, &response.token);

                    // Leave the success indication visible briefly.
                    #[cfg(feature = "web")]
                    gloo_timers::future::TimeoutFuture::new(SUCCESS_DISMISS_MS).await;

                    on_close.call(());
                }
                Err(err) => flow.write().registration_failed(registration_error(err)),
            }
        });
    };

    let status = flow.read().status().clone();
    let failure = flow.read().failure().map(ToString::to_string);
    let at_code_entry = flow.read().pending().is_some();
    let slots: Vec<String> = (0..CODE_SLOTS)
        .map(|i| {
            flow.read()
                .pending()
                .map(|p| p.slot(i).to_string())
                .unwrap_or_default()
        })
        .collect();

    rsx! {
        div {
            class: "signup bg-white rounded-lg p-6 shadow-lg w-80",

            if let Some(reason) = failure {
                div {
                    class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm",
                    "{reason}"
                }
            }

            if status == FlowStatus::Verified {
                div {
                    class: "py-8 text-center",
                    p { class: "text-3xl mb-2", "\u{2713}" }
                    p { class: "text-green-700 font-medium", "Account created. Welcome!" }
                }
            } else if at_code_entry {
                div {
                    p {
                        class: "mb-3 text-sm text-gray-600",
                        "Enter the 6-digit code we sent to your email"
                    }
                    div {
                        class: "flex justify-between gap-2 mb-4",
                        for (i, slot_value) in slots.into_iter().enumerate() {
                            input {
                                id: "code-slot-{i}",
                                r#type: "text",
                                maxlength: "1",
                                value: "{slot_value}",
                                class: "w-10 h-12 text-center text-xl border border-gray-300 rounded",
                                disabled: status == FlowStatus::Verifying,
                                oninput: move |e| {
                                    if let Some(next) = flow.write().enter_slot(i, &e.value()) {
                                        focus_code_slot(next);
                                    }
                                },
                            }
                        }
                    }
                    button {
                        class: "w-full bg-green-500 text-white py-2 px-4 rounded hover:bg-green-600 disabled:opacity-50",
                        disabled: !flow.read().can_verify(),
                        onclick: handle_verify,
                        if status == FlowStatus::Verifying { "Verifying..." } else { "Verify" }
                    }
                    button {
                        class: "cancel-btn w-full mt-2 text-gray-500 py-2 px-4 rounded hover:bg-gray-100",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            } else {
                div {
                    input {
                        r#type: "text",
                        placeholder: "Username",
                        value: "{flow.read().draft().full_name}",
                        class: "w-full mb-2 px-3 py-2 border border-gray-300 rounded",
                        oninput: move |e| flow.write().set_full_name(e.value()),
                    }
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: "{flow.read().draft().email}",
                        class: "w-full mb-2 px-3 py-2 border border-gray-300 rounded",
                        oninput: move |e| flow.write().set_email(e.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: "{flow.read().draft().password}",
                        class: "w-full mb-4 px-3 py-2 border border-gray-300 rounded",
                        oninput: move |e| flow.write().set_password(e.value()),
                    }
                    button {
                        class: "w-full bg-green-500 text-white py-2 px-4 rounded hover:bg-green-600 disabled:opacity-50",
                        disabled: !flow.read().can_request_code(),
                        onclick: handle_request_code,
                        if status == FlowStatus::SendingCode { "Sending..." } else { "Sign Up" }
                    }
                    button {
                        class: "cancel-btn w-full mt-2 text-gray-500 py-2 px-4 rounded hover:bg-gray-100",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
