pub const SITE_NAME: &str = "Wayfarer";

/// Shown in the routed region while a deferred page is loading.
pub const LOADING_MESSAGE: &str = "Loading Your Page...";

/// Shown in place of the routed region after it fails to render.
pub const ERROR_MESSAGE: &str = "An error occurred!";
