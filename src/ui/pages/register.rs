//! Registration route: the landing page with the trial dialog open on top

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use super::HomePage;
use crate::ui::landing::RegistrationModal;

#[component]
pub fn RegisterPage() -> impl IntoView {
    // Leaving the dialog leaves the route
    let on_open_change = Callback::new(move |open: bool| {
        if !open {
            let navigate = use_navigate();
            navigate("/", Default::default());
        }
    });

    view! {
        <HomePage />
        <Title text="Start Your Free Trial | AgriPredict" />
        <RegistrationModal on_open_change=on_open_change />
    }
}
