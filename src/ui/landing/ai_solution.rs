use leptos::prelude::*;

use crate::core::content::{
    COMMODITY_COUNT, FlowStep, PredictionFactor, REPORTING_CENTRE_COUNT, default_flow_steps,
    default_prediction_factors,
};
use crate::core::motion::particles;
use crate::ui::icon::{Icon, icons};

use super::glyph::GlyphIcon;

/// Pipeline diagram, model inputs and the animated training panel
#[component]
pub fn AISolution(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] flow_steps: Option<Vec<FlowStep>>,
    #[prop(optional, into)] prediction_factors: Option<Vec<PredictionFactor>>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "AI-Powered Price Prediction Model".into());
    let description = description.unwrap_or_else(|| {
        format!(
            "Our machine learning model is trained on historical data from {REPORTING_CENTRE_COUNT} price reporting centers to predict future prices for {COMMODITY_COUNT} essential food commodities, helping with strategic planning and buffer stock management."
        )
    });
    let flow_steps = flow_steps.unwrap_or_else(default_flow_steps);
    let prediction_factors = prediction_factors.unwrap_or_else(default_prediction_factors);

    let last_step = flow_steps.len().saturating_sub(1);

    view! {
        <section class="w-full py-20 px-4 md:px-8 lg:px-16 bg-gradient-to-b from-black to-gray-900 text-white overflow-hidden">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16 agri-reveal">
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-6 bg-clip-text text-transparent bg-gradient-to-r from-blue-400 via-purple-500 to-green-400">
                        {title}
                    </h2>
                    <p class="text-lg md:text-xl text-gray-300 max-w-3xl mx-auto">{description}</p>
                </div>

                // Flow diagram
                <div class="relative mb-24">
                    <svg class="absolute top-1/2 left-0 w-full h-2 -translate-y-1/2 hidden md:block" aria-hidden="true" preserveAspectRatio="none">
                        <defs>
                            <linearGradient id="agri-flow-gradient" x1="0%" y1="0%" x2="100%" y2="0%">
                                <stop offset="0%" stop-color="#3B82F6" />
                                <stop offset="33%" stop-color="#A855F7" />
                                <stop offset="66%" stop-color="#22C55E" />
                                <stop offset="100%" stop-color="#EAB308" />
                            </linearGradient>
                        </defs>
                        <line
                            x1="0" y1="4" x2="100%" y2="4"
                            stroke="url(#agri-flow-gradient)"
                            stroke-width="4"
                            stroke-dasharray="10 10"
                            class="agri-dash-flow"
                        />
                    </svg>

                    <div class="grid grid-cols-1 md:grid-cols-4 gap-8 relative z-10">
                        {flow_steps
                            .into_iter()
                            .enumerate()
                            .map(|(index, step)| {
                                view! { <FlowStepCard step=step index=index show_arrow={index < last_step} /> }
                            })
                            .collect_view()}
                    </div>
                </div>

                // Prediction factors
                <div class="mb-20">
                    <h3 class="text-2xl md:text-3xl font-bold text-center mb-12 agri-reveal">
                        "Key Inputs for Our Prediction Model"
                    </h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {prediction_factors
                            .into_iter()
                            .enumerate()
                            .map(|(index, factor)| {
                                let delay = 0.8 + index as f32 * 0.1;
                                view! {
                                    <div
                                        class="bg-gray-800/50 backdrop-blur-sm rounded-xl p-6 border border-gray-700 hover:border-gray-500 transition-colors agri-reveal"
                                        style=format!("transition-delay: {delay:.1}s;")
                                    >
                                        <div class=format!("mb-4 {}", factor.accent.text())>
                                            <GlyphIcon glyph=factor.glyph />
                                        </div>
                                        <h4 class="text-lg font-semibold mb-2">{factor.title}</h4>
                                        <p class="text-sm text-gray-400">{factor.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <TrainingPanel />
            </div>
        </section>
    }
}

#[component]
fn FlowStepCard(step: FlowStep, index: usize, show_arrow: bool) -> impl IntoView {
    let (dot, halo) = step.accent.dot();
    let delay = index as f32 * 0.2;

    view! {
        <div class="relative flex flex-col items-center text-center agri-reveal" style=format!("transition-delay: {delay:.1}s;")>
            <div class=format!("relative w-20 h-20 rounded-full {halo} flex items-center justify-center mb-6 agri-glow")>
                <div class=format!("absolute inset-2 rounded-full {dot} opacity-20")></div>
                <span class=format!("relative {}", step.accent.text())>
                    <GlyphIcon glyph=step.glyph />
                </span>
            </div>
            <h3 class="text-xl font-semibold mb-3">{step.title}</h3>
            <p class="text-gray-400 text-sm">{step.description}</p>
            <Show when=move || show_arrow>
                <div class="hidden md:block absolute top-10 -right-6 text-gray-500 agri-nudge" aria-hidden="true">
                    <Icon name=icons::ARROW_RIGHT class="w-6 h-6"/>
                </div>
            </Show>
        </div>
    }
}

/// Dark panel with a stream of coloured particles behind the caption
#[component]
fn TrainingPanel() -> impl IntoView {
    view! {
        <div class="relative h-[300px] rounded-2xl overflow-hidden bg-gray-950 border border-gray-800 agri-reveal">
            <div class="absolute inset-0" aria-hidden="true">
                {particles()
                    .into_iter()
                    .map(|particle| {
                        view! {
                            <div class="absolute left-0 w-2 h-2 rounded-full agri-particle" style=particle.style()></div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="relative z-10 flex flex-col items-center justify-center h-full px-6 text-center">
                <h3 class="text-2xl md:text-3xl font-bold mb-4">"Predictive Model Training"</h3>
                <p class="text-gray-300 max-w-2xl">
                    {format!(
                        "Our machine learning model is trained on historical data to identify patterns and predict future prices for {COMMODITY_COUNT} essential commodities, supporting informed decision-making"
                    )}
                </p>
            </div>
        </div>
    }
}
