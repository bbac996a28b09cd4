use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Emerald pill used for "Try for Free" style calls to action
    Primary,
    /// Blue to purple gradient
    Gradient,
    /// Transparent with a grey border
    Outline,
    /// Frosted glass over imagery
    Glass,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-emerald-500 hover:bg-emerald-600 text-black rounded-full shadow-lg shadow-emerald-500/20 border border-emerald-400/50"
            }
            ButtonVariant::Gradient => {
                "bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white rounded-md"
            }
            ButtonVariant::Outline => {
                "border border-gray-700 hover:bg-gray-700 text-white rounded-md"
            }
            ButtonVariant::Glass => {
                "bg-white/10 backdrop-blur-md border border-white/20 hover:bg-white/20 text-white rounded-lg shadow-[0_0_15px_rgba(255,255,255,0.2)] hover:shadow-[0_0_20px_rgba(255,255,255,0.4)]"
            }
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "h-9 px-4 text-sm",
            ButtonSize::Medium => "h-10 px-6 text-sm",
            ButtonSize::Large => "px-8 py-6 text-lg",
        }
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler; omit for submit buttons
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// `button` or `submit`
    #[prop(default = "button")]
    button_type: &'static str,
    /// Whether button is in loading state
    #[prop(optional, into)]
    loading: Signal<bool>,
    /// Button content (text or elements)
    children: Children,
    /// Optional icon name to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Optional icon name to show after text
    #[prop(optional)]
    trailing_icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let full_classes = format!(
        "inline-flex items-center justify-center gap-2 font-medium transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed {} {} {}",
        variant.class(),
        size.class(),
        class
    );

    view! {
        <button
            type=button_type
            class=full_classes
            on:click=move |_| {
                if !loading.get_untracked() {
                    if let Some(on_click) = on_click {
                        on_click.run(());
                    }
                }
            }
            disabled=move || loading.get()
        >
            {move || if loading.get() {
                view! { <Icon name=icons::LOADER class="w-4 h-4 animate-spin"/> }.into_any()
            } else if let Some(icon_name) = icon {
                view! { <Icon name=icon_name class="w-4 h-4"/> }.into_any()
            } else {
                ().into_any()
            }}
            {children()}
            {trailing_icon.map(|name| view! { <Icon name=name class="w-4 h-4"/> })}
        </button>
    }
}
