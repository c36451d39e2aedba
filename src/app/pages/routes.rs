use dioxus::prelude::*;

use crate::app::pages::HomePage;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
}

#[component]
fn Home() -> Element {
    rsx! { HomePage {} }
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Dioxus App initialized successfully");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Built by build.rs from assets/css/
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        document::Title { "Product Showcase" }
        main { class: "c-layout__main",
            Outlet::<Route> {}
        }
    }
}
