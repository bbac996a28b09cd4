use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::clock::{copyright_line, current_year};
use crate::core::content::COMPANY_NAME;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Tell the server to answer with a 404 status
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found | AgriPredict" />
        <div class="min-h-screen bg-black text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-gray-900 border border-gray-800 rounded-full flex items-center justify-center">
                    <Icon name=icons::SEARCH class="w-12 h-12 opacity-60" />
                </div>

                <h1 class="text-6xl font-bold mb-4 bg-clip-text text-transparent bg-gradient-to-r from-emerald-400 to-blue-500">
                    "404"
                </h1>
                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>
                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        attr:class="px-6 py-3 bg-emerald-500 hover:bg-emerald-600 text-black font-medium rounded-full transition-colors"
                    >
                        "Go Home"
                    </A>
                    <A
                        href="/register"
                        attr:class="px-6 py-3 border border-gray-700 hover:bg-gray-800 font-medium rounded-full transition-colors"
                    >
                        "Start Free Trial"
                    </A>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-500">{copyright_line(current_year(), COMPANY_NAME)}</p>
            </div>
        </div>
    }
}
