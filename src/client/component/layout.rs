use dioxus::prelude::*;

use crate::client::{
    component::{Footer, Navbar},
    constant::{ERROR_MESSAGE, LOADING_MESSAGE},
    router::Route,
};

/// Page chrome around the routed content.
///
/// Navbar and footer sit outside the routed region's boundaries, so a routed page that
/// is still loading or has failed never affects them.
#[component]
pub fn Layout() -> Element {
    rsx! {
        div {
            class: "flex flex-col min-h-screen",
            Navbar {}
            main {
                class: "flex-1",
                RoutedRegion {
                    Outlet::<Route> {}
                }
            }
            Footer {}
        }
    }
}

/// Boundaries for a routed page.
///
/// The error boundary wraps the suspense boundary, which means a deferred load that
/// fails surfaces as `ERROR_MESSAGE` rather than being left in the loading state.
#[component]
pub fn RoutedRegion(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_: ErrorContext| rsx! {
                div { {ERROR_MESSAGE} }
            },
            SuspenseBoundary {
                fallback: |_: SuspenseContext| rsx! {
                    div { {LOADING_MESSAGE} }
                },
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use dioxus::history::{provide_history_context, MemoryHistory};

    use super::*;
    use crate::{
        client::{constant::SITE_NAME, model::error::ApiError, model::load::use_deferred},
        model::user::RegisterFormDto,
    };

    const FOOTER_TEXT: &str = "Plan the trip, share the journey";

    /// Mounts the app router with in-memory history starting at `path`.
    fn routed_at(path: &'static str) -> Element {
        use_hook(|| provide_history_context(Rc::new(MemoryHistory::with_initial_path(path))));

        rsx! { Router::<Route> {} }
    }

    #[cfg(not(feature = "web"))]
    fn app_at_root() -> Element {
        routed_at("/")
    }

    fn app_at_unmatched_path() -> Element {
        routed_at("/trips/42")
    }

    async fn failing_loader() -> Result<RegisterFormDto, ApiError> {
        Err(ApiError {
            status: 500,
            message: "Failed to parse response: expected value".to_string(),
        })
    }

    #[component]
    fn FailingPage() -> Element {
        let _ = use_deferred(failing_loader)?;

        rsx! { div { "unreachable page" } }
    }

    #[component]
    fn ResolvingPage() -> Element {
        let form = use_deferred(|| async { Ok(RegisterFormDto::default()) })?;

        rsx! { div { "limit {form.username_max_length}" } }
    }

    fn failing_harness() -> Element {
        rsx! {
            div { "NAV" }
            RoutedRegion { FailingPage {} }
            div { "FOOT" }
        }
    }

    fn resolving_harness() -> Element {
        rsx! {
            div { "NAV" }
            RoutedRegion { ResolvingPage {} }
            div { "FOOT" }
        }
    }

    /// Renders the first frame and the frame after all suspense has resolved.
    async fn render_before_and_after(mut dom: VirtualDom) -> (String, String) {
        dom.rebuild_in_place();
        let initial = dioxus_ssr::render(&dom);

        dom.wait_for_suspense().await;
        let settled = dioxus_ssr::render(&dom);

        (initial, settled)
    }

    /// Tests that a pending load shows the loading text next to the chrome.
    ///
    /// Expected: loading text first, page content once the loader resolves
    #[tokio::test]
    async fn shows_loading_text_until_deferred_page_resolves() {
        let (initial, settled) = render_before_and_after(VirtualDom::new(resolving_harness)).await;

        assert!(initial.contains("<div>NAV</div>"));
        assert!(initial.contains(LOADING_MESSAGE));
        assert!(initial.contains("<div>FOOT</div>"));
        assert!(!initial.contains("limit 80"));

        assert!(settled.contains("<div>NAV</div>"));
        assert!(settled.contains("limit 80"));
        assert!(!settled.contains(LOADING_MESSAGE));
        assert!(settled.contains("<div>FOOT</div>"));
    }

    /// Tests that a failed load is contained to the routed region.
    ///
    /// Expected: loading text first, then the error text with chrome intact
    #[tokio::test]
    async fn failed_deferred_load_shows_error_text() {
        let (initial, settled) = render_before_and_after(VirtualDom::new(failing_harness)).await;

        assert!(initial.contains(LOADING_MESSAGE));

        assert!(settled.contains("<div>NAV</div>"));
        assert!(settled.contains(ERROR_MESSAGE));
        assert!(!settled.contains(LOADING_MESSAGE));
        assert!(!settled.contains("unreachable page"));
        assert!(settled.contains("<div>FOOT</div>"));
    }

    /// Tests that an unmatched path leaves the routed region empty.
    ///
    /// Expected: empty `main` with navbar and footer rendered
    #[tokio::test]
    async fn unmatched_path_renders_empty_region() {
        let (initial, settled) = render_before_and_after(VirtualDom::new(app_at_unmatched_path)).await;

        for html in [initial, settled] {
            assert!(html.contains(r#"<main class="flex-1"></main>"#));
            assert!(html.contains(SITE_NAME));
            assert!(html.contains(FOOTER_TEXT));
            assert!(!html.contains(LOADING_MESSAGE));
            assert!(!html.contains(ERROR_MESSAGE));
        }
    }

    /// Tests the root route through the real router and register page.
    ///
    /// Only built without `web`, where the register loader resolves locally instead
    /// of issuing a browser request.
    ///
    /// Expected: chrome and loading text first, the register form once loaded
    #[cfg(not(feature = "web"))]
    #[tokio::test]
    async fn root_path_renders_register_page_after_loading() {
        let (initial, settled) = render_before_and_after(VirtualDom::new(app_at_root)).await;

        assert!(initial.contains(SITE_NAME));
        assert!(initial.contains(LOADING_MESSAGE));
        assert!(initial.contains(FOOTER_TEXT));

        assert!(settled.contains("Create your account"));
        assert!(!settled.contains(LOADING_MESSAGE));
        assert!(settled.contains(FOOTER_TEXT));
    }

    /// Tests that the layout renders identically across independent mounts.
    ///
    /// Expected: byte-identical output for two fresh mounts
    #[tokio::test]
    async fn independent_mounts_render_identically() {
        let first = render_before_and_after(VirtualDom::new(app_at_unmatched_path)).await;
        let second = render_before_and_after(VirtualDom::new(app_at_unmatched_path)).await;

        assert_eq!(first, second);
    }
}
