use dioxus::prelude::*;

use crate::components::forms::CommerceRegistrationForm;

const COMMERCE_CSS: Asset = asset!("/assets/styling/commerce.css");

#[derive(Props, PartialEq, Clone)]
pub struct CommerceRegistrationProps {
    /// Where to go once the registry accepts the record
    pub on_registered: EventHandler<()>,
}

#[component]
pub fn CommerceRegistration(props: CommerceRegistrationProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: COMMERCE_CSS }

        div {
            class: "container-comercio",
            h1 {
                class: "titulo",
                "COMERCIO"
            }
            CommerceRegistrationForm {
                on_registered: props.on_registered
            }
        }
    }
}
