//! Landing page composer
//!
//! Mounts the sections top to bottom and wraps the scroll targets in the
//! anchors the navbar links to. Both "Try for Free" buttons lead to the
//! registration route.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::navigation::{DEMO_ANCHOR, FEATURES_ANCHOR, SOLUTION_ANCHOR, TESTIMONIALS_ANCHOR};
use crate::ui::landing::{
    AISolution, DemoVideo, Footer, Hero, LandingStyles, Navbar, ProblemStatement, SamplePrediction,
    ScrollAnimationScript, SeoMeta, Testimonials,
};

/// Landing page with every section in display order
#[component]
pub fn HomePage() -> impl IntoView {
    let on_try_free = Callback::new(move |_: ()| {
        let navigate = use_navigate();
        navigate("/register", Default::default());
    });

    view! {
        <SeoMeta />
        <LandingStyles />

        <div class="min-h-screen bg-black text-white overflow-x-hidden">
            <Navbar on_try_free_click=on_try_free />
            <Hero on_cta_click=on_try_free />

            <div id=FEATURES_ANCHOR>
                <ProblemStatement />
            </div>

            <div id=SOLUTION_ANCHOR>
                <AISolution />
            </div>

            <div id=DEMO_ANCHOR>
                <DemoVideo />
                <SamplePrediction />
            </div>

            <div id=TESTIMONIALS_ANCHOR>
                <Testimonials />
            </div>

            <Footer />
        </div>

        <ScrollAnimationScript />
    }
}
