//! Routing definitions for the Risalo UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Archive,
    #[at("/terms")]
    Terms,
    #[at("/admin")]
    Admin,
    #[at("/admin/poetry")]
    AdminPoetry,
    #[at("/admin/categories")]
    AdminCategories,
    #[at("/admin/tags")]
    AdminTags,
    #[at("/admin/romanizer")]
    AdminRomanizer,
    #[at("/admin/settings")]
    AdminSettings,
    #[not_found]
    #[at("/404")]
    NotFound,
}
