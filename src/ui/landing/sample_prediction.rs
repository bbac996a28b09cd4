use leptos::prelude::*;

use crate::core::PredictionPanel;
use crate::core::content::{Choice, Crop, Market, choice_name, default_crops, default_markets};
use crate::core::prediction::{
    CONFIDENCE_LEVEL, bar_delay, bar_height_percent, format_price_per_ton, peak_price,
    price_series,
};
use crate::ui::common::{Button, ButtonVariant, FormField, SelectField};
use crate::ui::icon::{Icon, icons};

fn options(choices: &[Choice]) -> Vec<(String, String)> {
    choices
        .iter()
        .map(|choice| (choice.id.clone(), choice.name.clone()))
        .collect()
}

/// Crop/market picker next to a mock twelve-month price chart
#[component]
pub fn SamplePrediction(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] crops: Option<Vec<Crop>>,
    #[prop(optional, into)] markets: Option<Vec<Market>>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Try Our AI Prediction Tool".into());
    let description = description.unwrap_or_else(|| {
        "Experience the power of our AI-driven price prediction tool. Select a crop and market to see projected prices based on historical data and market trends.".into()
    });
    let crops = StoredValue::new(crops.unwrap_or_else(default_crops));
    let markets = StoredValue::new(markets.unwrap_or_else(default_markets));

    let panel = RwSignal::new(PredictionPanel::new());

    let selected_crop = Signal::derive(move || panel.with(|p| p.crop.clone().unwrap_or_default()));
    let selected_market =
        Signal::derive(move || panel.with(|p| p.market.clone().unwrap_or_default()));
    let keywords = Signal::derive(move || panel.with(|p| p.keywords.clone()));

    let on_generate = Callback::new(move |_| {
        panel.update(|p| {
            p.generate();
        });
    });

    view! {
        <section class="w-full py-20 bg-black text-white">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12 agri-reveal">
                    <h2 class="text-4xl font-bold mb-4">{title}</h2>
                    <p class="text-lg text-gray-300 max-w-3xl mx-auto">{description}</p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-10 items-center">
                    // Search panel
                    <div class="bg-gray-900 border border-gray-800 rounded-xl overflow-hidden agri-reveal">
                        <div class="p-6 space-y-1.5">
                            <h3 class="text-2xl font-semibold">"Search for Price Predictions"</h3>
                            <p class="text-sm text-gray-400">
                                "Select a crop and market to see future price trends"
                            </p>
                        </div>
                        <div class="px-6 pb-6 space-y-4">
                            <SelectField
                                id="prediction-crop"
                                label="Crop"
                                placeholder="Select crop"
                                value=selected_crop
                                on_change=Callback::new(move |id: String| panel.update(|p| p.select_crop(&id)))
                                options=crops.with_value(|c| options(c))
                            />
                            <SelectField
                                id="prediction-market"
                                label="Market"
                                placeholder="Select market"
                                value=selected_market
                                on_change=Callback::new(move |id: String| panel.update(|p| p.select_market(&id)))
                                options=markets.with_value(|m| options(m))
                            />
                            <FormField
                                id="prediction-keywords"
                                label="Additional Keywords (Optional)"
                                placeholder="E.g., organic, export grade"
                                value=keywords
                                on_input=Callback::new(move |text: String| panel.update(|p| p.keywords = text))
                            />
                        </div>
                        <div class="px-6 pb-6">
                            <Button
                                variant=ButtonVariant::Gradient
                                icon=icons::SEARCH
                                class="w-full"
                                on_click=on_generate
                            >
                                "Generate Prediction"
                            </Button>
                        </div>
                    </div>

                    // Result panel
                    <div class="relative agri-reveal">
                        <Show
                            when=move || panel.with(PredictionPanel::shows_chart)
                            fallback=|| view! { <EmptyPrediction /> }
                        >
                            <div class="bg-gray-900 border border-gray-800 rounded-xl p-6 h-full">
                                <div class="mb-6">
                                    <h3 class="text-xl font-bold mb-2">
                                        {move || {
                                            let (crop, market) = panel.with(|p| (p.crop.clone(), p.market.clone()));
                                            let crop = crop
                                                .and_then(|id| crops.with_value(|c| choice_name(c, &id).map(str::to_owned)))
                                                .unwrap_or_default();
                                            let market = market
                                                .and_then(|id| markets.with_value(|m| choice_name(m, &id).map(str::to_owned)))
                                                .unwrap_or_default();
                                            format!("Price Prediction: {crop} in {market}")
                                        }}
                                    </h3>
                                    <p class="text-gray-400 text-sm">
                                        "Projected prices for the next 12 months based on historical data and market trends"
                                    </p>
                                </div>

                                // Re-rendered per generation so the bars grow again
                                {move || {
                                    let generation = panel.with(PredictionPanel::generation);
                                    view! { <PriceChart generation=generation /> }
                                }}

                                <div class="mt-6 p-4 bg-gray-800 rounded-lg">
                                    <div class="flex justify-between items-center">
                                        <div>
                                            <p class="text-sm text-gray-400">"Predicted Peak Price"</p>
                                            <p class="text-2xl font-bold">
                                                {format_price_per_ton(peak_price(&price_series()))}
                                            </p>
                                        </div>
                                        <div>
                                            <p class="text-sm text-gray-400">"Confidence Level"</p>
                                            <p class="text-2xl font-bold">{format!("{CONFIDENCE_LEVEL}%")}</p>
                                        </div>
                                        <Button variant=ButtonVariant::Outline trailing_icon=icons::ARROW_RIGHT>
                                            "Full Report"
                                        </Button>
                                    </div>
                                </div>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PriceChart(generation: u32) -> impl IntoView {
    let series = price_series();
    let max = peak_price(&series);

    view! {
        <div class="h-64 relative" data-generation=generation>
            <div class="absolute bottom-0 left-0 right-0 h-full flex items-end">
                {series
                    .into_iter()
                    .enumerate()
                    .map(|(index, point)| {
                        let style = format!(
                            "height: {:.2}%; animation-delay: {:.1}s;",
                            bar_height_percent(point.price, max),
                            bar_delay(index)
                        );
                        view! {
                            <div class="flex-1 h-full flex flex-col items-center justify-end">
                                <div
                                    class="w-4 bg-gradient-to-t from-blue-600 to-purple-600 rounded-t-sm agri-bar"
                                    style=style
                                    title=format_price_per_ton(point.price)
                                ></div>
                                <span class="text-xs mt-2 text-gray-400">{point.month}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn EmptyPrediction() -> impl IntoView {
    view! {
        <div class="bg-gray-900 border border-gray-800 rounded-xl p-6 h-full flex flex-col justify-center items-center text-center">
            <div class="w-24 h-24 rounded-full bg-gray-800 flex items-center justify-center mb-6">
                <Icon name=icons::SEARCH class="h-10 w-10 opacity-60"/>
            </div>
            <h3 class="text-xl font-bold mb-2">"No Prediction Generated"</h3>
            <p class="text-gray-400 max-w-md">
                "Select a crop and market from the search panel to generate a price prediction visualization"
            </p>
        </div>
    }
}
