use dioxus::prelude::*;

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

// Shown when the catalog holds no products
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "c-empty-state",
            p { class: "c-empty-state__text", "{message}" }
        }
    }
}
