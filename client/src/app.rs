//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;

/// Root application component.
///
/// The page has a single route, so there is no router; each component
/// creates and owns its own state signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Time Zone Converter"/>
        <HomePage/>
    }
}
