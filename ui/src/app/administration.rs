use dioxus::prelude::*;

use crate::components::display::{
    CommerceSection, CommunitiesSection, StorageSection, UnitsSection,
};

const ADMINISTRATION_CSS: Asset = asset!("/assets/styling/administration.css");

/// Administration screen: the four registry sections in a fixed order
#[component]
pub fn Administration() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ADMINISTRATION_CSS }

        div {
            class: "container",
            CommunitiesSection {}
            UnitsSection {}
            CommerceSection {}
            StorageSection {}
        }
    }
}
