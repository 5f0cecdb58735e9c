use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{NotFound, Register};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Register {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
