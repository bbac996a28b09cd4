use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Centered dialog over a dimmed backdrop
///
/// Escape, the close button and a click on the backdrop all call `on_close`.
/// Whether the dialog actually closes is up to the owner of `is_open`.
#[component]
pub fn Dialog(
    /// Dialog title
    title: String,
    /// Optional description under the title
    #[prop(optional)]
    description: Option<String>,
    /// Whether the dialog is shown
    is_open: Signal<bool>,
    /// Close request
    on_close: Callback<()>,
    /// Dialog body
    children: Children,
    /// Maximum width class
    #[prop(default = "sm:max-w-[500px]")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "dialog-backdrop fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4 transition-opacity duration-200"
                } else {
                    "dialog-backdrop fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4 opacity-0 pointer-events-none transition-opacity duration-200"
                }
            }
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(element) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                        if element.class_list().contains("dialog-backdrop") {
                            on_close.run(());
                        }
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div
                class=format!("relative w-full {} rounded-lg border border-gray-800 bg-gray-900 p-6 text-white shadow-xl", max_width)
                role="dialog"
                aria-modal="true"
            >
                <button
                    type="button"
                    class="absolute right-4 top-4 rounded-sm opacity-70 transition-opacity hover:opacity-100"
                    on:click=move |_| on_close.run(())
                    aria-label="Close"
                >
                    <Icon name=icons::X class="w-4 h-4"/>
                </button>

                <div class="mb-4 space-y-1.5">
                    <h2 class="text-2xl font-bold">{title}</h2>
                    {description.map(|d| view! { <p class="text-gray-400">{d}</p> })}
                </div>

                {children()}
            </div>
        </div>
    }
}
