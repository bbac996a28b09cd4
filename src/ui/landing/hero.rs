use leptos::logging::log;
use leptos::prelude::*;

use crate::core::content::{COMMODITY_COUNT, HERO_BACKGROUND, REPORTING_CENTRE_COUNT};
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};

/// Full-height opening banner over a field photograph
#[component]
pub fn Hero(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] cta_text: Option<String>,
    /// Defaults to logging the click
    #[prop(optional, into)]
    on_cta_click: Option<Callback<()>>,
    #[prop(optional, into)] background_image: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "AI-Powered Essential Commodities Price Prediction".into());
    let subtitle = subtitle.unwrap_or_else(|| {
        format!(
            "Monitoring {COMMODITY_COUNT} essential food commodities across {REPORTING_CENTRE_COUNT} price reporting centers to stabilize market prices and support strategic interventions."
        )
    });
    let cta_text = cta_text.unwrap_or_else(|| "Try for Free".into());
    let background = background_image.unwrap_or_else(|| HERO_BACKGROUND.into());
    let on_cta_click = on_cta_click.unwrap_or_else(|| Callback::new(|_| log!("CTA clicked")));

    view! {
        <section class="relative w-full h-[800px] bg-black overflow-hidden">
            // Background image with overlay
            <div class="absolute inset-0 z-0">
                <div
                    class="absolute inset-0 bg-cover bg-center"
                    style=format!("background-image: url('{background}')")
                ></div>
                <div class="absolute inset-0 bg-black/60"></div>
            </div>

            // Drifting orbs
            <div class="absolute inset-0 z-10 opacity-40" aria-hidden="true">
                <div class="absolute w-24 h-24 rounded-full bg-blue-500/30 blur-xl agri-orb-a" style="top: 20%; left: 10%;"></div>
                <div class="absolute w-32 h-32 rounded-full bg-green-500/30 blur-xl agri-orb-b" style="top: 30%; right: 15%;"></div>
                <div class="absolute w-40 h-40 rounded-full bg-purple-500/30 blur-xl agri-orb-c" style="bottom: 20%; left: 25%;"></div>
            </div>

            // Grid lines overlay
            <div class="absolute inset-0 z-10 opacity-10" aria-hidden="true">
                <div class="w-full h-full agri-grid-overlay"></div>
            </div>

            <div class="relative z-20 flex flex-col items-center justify-center h-full px-4 md:px-8 lg:px-16 text-center">
                <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold text-white mb-6 agri-fade-in-up">
                    {title}
                </h1>
                <p class="text-lg md:text-xl text-gray-200 max-w-3xl mb-10 agri-fade-in-up agri-delay-200">
                    {subtitle}
                </p>
                <div class="agri-fade-in-up agri-delay-400">
                    <Button
                        variant=ButtonVariant::Glass
                        size=ButtonSize::Large
                        on_click=on_cta_click
                    >
                        {cta_text}
                    </Button>
                </div>

                // Scroll indicator
                <div class="absolute bottom-8 agri-bob" aria-hidden="true">
                    <Icon name=icons::ARROW_DOWN class="w-6 h-6"/>
                </div>
            </div>
        </section>
    }
}
