use dioxus::prelude::*;

use crate::components::Layout;
use crate::pages::Home;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
}
