use leptos::prelude::*;

use crate::core::Glyph;

/// Inline line-art icon that inherits `currentColor`
#[component]
pub fn GlyphIcon(glyph: Glyph, #[prop(default = "h-8 w-8")] class: &'static str) -> impl IntoView {
    let shape = match glyph {
        Glyph::TrendingDown => view! {
            <polyline points="22 17 13.5 8.5 8.5 13.5 2 7" />
            <polyline points="16 17 22 17 22 11" />
        }
        .into_any(),
        Glyph::TrendingUp => view! {
            <polyline points="22 7 13.5 15.5 8.5 10.5 2 17" />
            <polyline points="16 7 22 7 22 13" />
        }
        .into_any(),
        Glyph::AlertTriangle => view! {
            <path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z" />
            <path d="M12 9v4" />
            <path d="M12 17h.01" />
        }
        .into_any(),
        Glyph::DollarSign => view! {
            <line x1="12" x2="12" y1="2" y2="22" />
            <path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6" />
        }
        .into_any(),
        Glyph::BarChart => view! {
            <line x1="18" x2="18" y1="20" y2="10" />
            <line x1="12" x2="12" y1="20" y2="4" />
            <line x1="6" x2="6" y1="20" y2="14" />
        }
        .into_any(),
        Glyph::Clock => view! {
            <circle cx="12" cy="12" r="10" />
            <polyline points="12 6 12 12 16 14" />
        }
        .into_any(),
        Glyph::Database => view! {
            <ellipse cx="12" cy="5" rx="9" ry="3" />
            <path d="M3 5V19A9 3 0 0 0 21 19V5" />
            <path d="M3 12A9 3 0 0 0 21 12" />
        }
        .into_any(),
        Glyph::Brain => view! {
            <path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z" />
            <path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z" />
            <path d="M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4" />
        }
        .into_any(),
        Glyph::LineChart => view! {
            <path d="M3 3v18h18" />
            <path d="m19 9-5 5-4-4-3 3" />
        }
        .into_any(),
        Glyph::Zap => view! {
            <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" />
        }
        .into_any(),
        Glyph::Calendar => view! {
            <rect width="18" height="18" x="3" y="4" rx="2" ry="2" />
            <line x1="16" x2="16" y1="2" y2="6" />
            <line x1="8" x2="8" y1="2" y2="6" />
            <line x1="3" x2="21" y1="10" y2="10" />
        }
        .into_any(),
        Glyph::CloudRain => view! {
            <path d="M4 14.899A7 7 0 1 1 15.71 8h1.79a4.5 4.5 0 0 1 2.5 8.242" />
            <path d="M16 14v6" />
            <path d="M8 14v6" />
            <path d="M12 16v6" />
        }
        .into_any(),
    };

    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {shape}
        </svg>
    }
}
