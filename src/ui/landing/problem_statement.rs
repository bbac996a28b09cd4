use leptos::prelude::*;

use crate::core::content::{PROBLEM_BACKGROUND, ProblemCard, default_problems};
use crate::core::navigation::SOLUTION_ANCHOR;
use crate::ui::icon::{Icon, icons};

use super::glyph::GlyphIcon;

/// Grid of market problems with cards that reveal on every scroll pass
#[component]
pub fn ProblemStatement(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] problems: Option<Vec<ProblemCard>>,
    #[prop(optional, into)] background_image: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Critical Market Challenges We're Solving".into());
    let subtitle = subtitle.unwrap_or_else(|| {
        "The Department of Consumer Affairs faces significant obstacles in monitoring and stabilizing prices of essential food commodities that impact millions of lives daily.".into()
    });
    let problems = problems.unwrap_or_else(default_problems);
    let background = background_image.unwrap_or_else(|| PROBLEM_BACKGROUND.into());

    view! {
        <section class="relative w-full py-24 overflow-hidden bg-black">
            <div class="absolute inset-0 z-0">
                <div
                    class="absolute inset-0 bg-cover bg-center opacity-20"
                    style=format!("background-image: url('{background}')")
                ></div>
                <div class="absolute inset-0 bg-gradient-to-b from-black via-black/95 to-black"></div>
            </div>

            <div class="container relative z-10 mx-auto px-4">
                <div class="text-center mb-16 agri-reveal">
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-white mb-6">
                        {title}
                    </h2>
                    <p class="text-gray-300 max-w-3xl mx-auto text-lg">{subtitle}</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8" style="perspective: 1000px;">
                    {problems
                        .into_iter()
                        .map(|problem| view! { <ProblemCardView problem=problem /> })
                        .collect_view()}
                </div>

                <div class="mt-16 text-center agri-reveal">
                    <a
                        href=format!("#{SOLUTION_ANCHOR}")
                        class="inline-flex items-center text-emerald-400 hover:text-emerald-300 font-medium text-lg transition-colors"
                    >
                        "Discover our AI solution"
                        <Icon name=icons::ARROW_RIGHT class="ml-2 w-5 h-5"/>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProblemCardView(problem: ProblemCard) -> impl IntoView {
    let accent = problem.accent;
    let card_class = format!(
        "p-8 rounded-xl border {} bg-gradient-to-br {} backdrop-blur-sm hover:shadow-lg transition-all duration-300 agri-reveal-card",
        accent.card_border(),
        accent.card_gradient()
    );

    view! {
        <div
            class=card_class
            data-replay="true"
            style=format!("transition-delay: {}s;", problem.delay)
        >
            <div class=format!("mb-6 {}", accent.text())>
                <GlyphIcon glyph=problem.glyph class="h-10 w-10" />
            </div>
            <h3 class="text-xl font-bold text-white mb-3">{problem.title}</h3>
            <p class="text-gray-400">{problem.description}</p>
        </div>
    }
}
