use dioxus::prelude::*;

use crate::features::commerce::Acknowledgment;

#[derive(Props, PartialEq, Clone)]
pub struct SubmissionStatusProps {
    pub is_submitting: bool,
    pub acknowledgment: Option<Acknowledgment>,
}

/// Pending indicator plus the outcome of the last submission
#[component]
pub fn SubmissionStatus(props: SubmissionStatusProps) -> Element {
    rsx! {
        if props.is_submitting {
            div {
                class: "loading-indicator",
                "⏳ Enviando cadastro..."
            }
        }

        if let Some(ack) = &props.acknowledgment {
            div {
                class: if ack.is_success() { "submission-result success" } else { "submission-result error" },
                div {
                    class: "result-message",
                    if ack.is_success() { "✓ {ack.message()}" } else { "✗ {ack.message()}" }
                }
            }
        }
    }
}
