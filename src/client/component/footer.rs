use dioxus::prelude::*;

use crate::client::constant::SITE_NAME;

#[component]
pub fn Footer() -> Element {
    rsx!(footer {
        class: "footer footer-center p-4 bg-base-200 text-base-content",
        p {
            "{SITE_NAME} · Plan the trip, share the journey"
        }
    })
}
