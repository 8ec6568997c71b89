//! Commerce registration form wired to the browser

use dioxus::prelude::*;

use crate::components::{
    display::SubmissionStatus,
    inputs::{FieldError, NumberInput},
};
use crate::features::commerce::*;
use crate::services::client::RegistryClient;
use crate::services::config::get_global_config;
use crate::{console_error, console_info, console_warn};

/// Browser host for the submission workflow: state lives in a signal,
/// acknowledgments use `window.alert`, navigation is delegated to the page.
struct BrowserEffects {
    state: Signal<CommerceFormState>,
    on_registered: EventHandler<()>,
}

impl RegistrationEffects for BrowserEffects {
    fn dispatch(&self, action: CommerceAction) {
        let mut state = self.state;
        state.with_mut(|s| s.reduce_in_place(action));
    }

    fn acknowledge(&self, acknowledgment: &Acknowledgment) {
        let message = acknowledgment.message();
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(&message).is_err() {
                    console_warn!("[Commerce] Could not show alert: {}", message);
                }
            }
            None => console_warn!("[Commerce] No window to show alert: {}", message),
        }
    }

    fn navigate_to_listing(&self) {
        self.on_registered.call(());
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CommerceRegistrationFormProps {
    /// Called once after the registry accepts a record
    pub on_registered: EventHandler<()>,
}

#[component]
pub fn CommerceRegistrationForm(props: CommerceRegistrationFormProps) -> Element {
    let state = use_signal(CommerceFormState::default);
    let on_registered = props.on_registered;

    let dispatch = EventHandler::new(move |action: CommerceAction| {
        let mut state = state;
        state.with_mut(|s| s.reduce_in_place(action));
    });

    rsx! {
        div {
            class: "form-comercio",
            h2 { "Insira suas informações para realizar a operação" }

            form {
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    let record = state().record;

                    spawn(async move {
                        let effects = BrowserEffects { state, on_registered };
                        let client = match RegistryClient::new(&get_global_config()) {
                            Ok(client) => client,
                            Err(e) => {
                                console_error!("[Commerce] Registry client unavailable: {}", e);
                                effects.acknowledge(&Acknowledgment::ServerUnavailable);
                                return;
                            }
                        };
                        let outcome = submit_commerce(&record, &client, &effects).await;
                        console_info!("[Commerce] Submission finished: {:?}", outcome);
                    });
                },

                for field in CommerceField::ALL {
                    div {
                        key: "{field.wire_name()}",
                        class: "input-section",
                        label {
                            class: "input-label",
                            r#for: "{field.input_id()}",
                            "{field.label()}"
                        }
                        NumberInput {
                            name: field.wire_name().to_string(),
                            id: field.input_id().to_string(),
                            value: state().display_value(field),
                            placeholder: field.placeholder().to_string(),
                            on_change: move |raw: String| {
                                dispatch.call(CommerceAction::UpdateField(field, raw));
                            }
                        }
                        FieldError { message: state().error_for(field) }
                    }
                }

                div {
                    class: "button-section",
                    button {
                        r#type: "submit",
                        class: "submit-btn",
                        "REGISTRAR"
                    }
                }
            }

            SubmissionStatus {
                is_submitting: state().is_submitting(),
                acknowledgment: state().last_acknowledgment,
            }
        }
    }
}
