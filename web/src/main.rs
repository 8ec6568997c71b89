use dioxus::prelude::*;
use ui::{Administration, CommerceListing, CommerceRegistration};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Rede Alva" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/administracao")]
    Administracao {},
    #[route("/comercios/cad-comercios")]
    CadastroComercio {},
    #[route("/comercio")]
    Comercio {},
}

#[component]
fn Home() -> Element {
    rsx! {
        Administration {}
    }
}

#[component]
fn Administracao() -> Element {
    rsx! {
        Administration {}
    }
}

#[component]
fn CadastroComercio() -> Element {
    let nav = navigator();

    rsx! {
        CommerceRegistration {
            on_registered: move |_| {
                nav.push(Route::Comercio {});
            }
        }
    }
}

#[component]
fn Comercio() -> Element {
    rsx! {
        CommerceListing {}
    }
}
