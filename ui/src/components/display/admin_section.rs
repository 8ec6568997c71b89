use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct AdminSectionProps {
    pub title: String,
    pub description: String,
    /// Registration page for this section, when one exists in this app
    pub register_href: Option<String>,
}

#[component]
pub fn AdminSection(props: AdminSectionProps) -> Element {
    rsx! {
        section {
            class: "admin-section",
            h2 {
                class: "admin-section-title",
                "{props.title}"
            }
            p {
                class: "admin-section-description",
                "{props.description}"
            }
            if let Some(href) = &props.register_href {
                a {
                    class: "admin-section-link",
                    href: "{href}",
                    "CADASTRAR"
                }
            }
        }
    }
}

#[component]
pub fn CommunitiesSection() -> Element {
    rsx! {
        AdminSection {
            title: "COMUNIDADES".to_string(),
            description: "Agrupamentos de unidades que compartilham energia.".to_string(),
            register_href: None,
        }
    }
}

#[component]
pub fn UnitsSection() -> Element {
    rsx! {
        AdminSection {
            title: "UNIDADES".to_string(),
            description: "Produtores e consumidores que compram ou vendem energia.".to_string(),
            register_href: None,
        }
    }
}

#[component]
pub fn CommerceSection() -> Element {
    rsx! {
        AdminSection {
            title: "COMERCIO".to_string(),
            description: "Trocas de energia entre uma unidade vendedora e uma compradora.".to_string(),
            register_href: Some(crate::app::COMMERCE_REGISTRATION_PATH.to_string()),
        }
    }
}

#[component]
pub fn StorageSection() -> Element {
    rsx! {
        AdminSection {
            title: "ARMAZENAMENTO".to_string(),
            description: "Capacidade de armazenamento de energia das comunidades.".to_string(),
            register_href: None,
        }
    }
}
