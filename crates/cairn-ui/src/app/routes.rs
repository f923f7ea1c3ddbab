//! Routing definitions for the Cairn UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/datasets/:urn")]
    Dataset { urn: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}
