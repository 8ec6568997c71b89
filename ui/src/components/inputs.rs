//! Input components for form fields and their validation messages

use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct NumberInputProps {
    pub name: String,
    pub id: String,
    pub value: String,
    pub placeholder: String,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn NumberInput(props: NumberInputProps) -> Element {
    rsx! {
        input {
            class: "input-field",
            r#type: "number",
            name: "{props.name}",
            id: "{props.id}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            required: true,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    pub message: Option<String>,
}

/// Inline message under a field; renders nothing when the field is valid
#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    match props.message {
        Some(message) if !message.is_empty() => rsx! {
            p {
                class: "error-message",
                "{message}"
            }
        },
        _ => rsx! {},
    }
}
