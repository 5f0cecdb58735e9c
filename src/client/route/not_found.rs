use dioxus::prelude::*;

/// Unmatched paths leave the routed region empty; the layout around it still renders.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;

    rsx! {}
}
