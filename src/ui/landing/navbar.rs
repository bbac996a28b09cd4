use leptos::prelude::*;

use crate::core::content::PRODUCT_NAME;
use crate::core::{MenuState, NAV_LINKS};
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};

/// Fixed top bar with anchor links, the trial CTA and a mobile menu
#[component]
pub fn Navbar(
    /// Called by both the desktop and the mobile "Try for Free" button
    #[prop(optional, into)]
    on_try_free_click: Option<Callback<()>>,
) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    let try_free = move || {
        if let Some(cb) = on_try_free_click {
            cb.run(());
        }
    };

    view! {
        <header class="fixed top-0 left-0 w-full z-50 bg-black/30 backdrop-blur-md border-b border-white/10">
            <div class="container mx-auto px-4 h-20 flex items-center justify-between">
                // Logo
                <a href="/" class="text-2xl font-bold text-white flex items-center gap-2">
                    <div class="w-8 h-8 rounded-full bg-emerald-500 flex items-center justify-center">
                        <span class="text-black font-bold">"A"</span>
                    </div>
                    <span>{PRODUCT_NAME}</span>
                </a>

                // Desktop Navigation
                <nav class="hidden md:flex items-center gap-1" aria-label="Main">
                    {NAV_LINKS.iter().map(|link| view! {
                        <a
                            href=link.href
                            class="text-white/90 hover:text-white px-4 py-2 text-sm font-medium transition-colors"
                        >
                            {link.label}
                        </a>
                    }).collect_view()}
                </nav>

                <div class="hidden md:block">
                    <Button
                        variant=ButtonVariant::Primary
                        size=ButtonSize::Medium
                        on_click=Callback::new(move |_| try_free())
                    >
                        "Try for Free"
                    </Button>
                </div>

                // Mobile menu button
                <button
                    class="md:hidden text-white p-2"
                    on:click=move |_| menu.update(|m| *m = m.toggled())
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.get().aria_expanded()
                >
                    {move || {
                        if menu.get().is_open() {
                            view! { <Icon name=icons::X class="w-6 h-6"/> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="w-6 h-6"/> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile menu
            <Show when=move || menu.get().is_open()>
                <div class="md:hidden bg-black/95 backdrop-blur-md">
                    <nav class="container mx-auto px-4 py-4 flex flex-col space-y-4">
                        {NAV_LINKS.iter().map(|link| view! {
                            <a
                                href=link.href
                                class="text-white/90 hover:text-white py-2 text-lg font-medium"
                                on:click=move |_| menu.set(MenuState::Closed)
                            >
                                {link.label}
                            </a>
                        }).collect_view()}
                        <Button
                            variant=ButtonVariant::Primary
                            class="w-full mt-2"
                            on_click=Callback::new(move |_| {
                                menu.set(MenuState::Closed);
                                try_free();
                            })
                        >
                            "Try for Free"
                        </Button>
                    </nav>
                </div>
            </Show>
        </header>
    }
}
