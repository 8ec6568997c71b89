use dioxus::prelude::*;

use super::{ADMINISTRATION_PATH, COMMERCE_REGISTRATION_PATH};

const COMMERCE_CSS: Asset = asset!("/assets/styling/commerce.css");

/// Landing page after a successful registration
#[component]
pub fn CommerceListing() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: COMMERCE_CSS }

        div {
            class: "container-comercio",
            h1 {
                class: "titulo",
                "COMERCIOS"
            }
            p {
                class: "listing-empty",
                "Os comércios registrados pela distribuição aparecem aqui."
            }
            a {
                class: "submit-btn",
                href: COMMERCE_REGISTRATION_PATH,
                "NOVO COMERCIO"
            }
            a {
                class: "back-link",
                href: ADMINISTRATION_PATH,
                "VOLTAR"
            }
        }
    }
}
