use leptos::prelude::*;

use crate::core::PlaybackState;
use crate::core::content::{
    COMMODITY_COUNT, DEMO_POSTER, DEMO_VIDEO_URL, DemoHighlight, REPORTING_CENTRE_COUNT,
    default_demo_highlights,
};
use crate::ui::icon::{Icon, icons};

/// Demo video with a play overlay, mute toggle and the monitoring summary
#[component]
pub fn DemoVideo(
    #[prop(optional, into)] video_url: Option<String>,
    #[prop(optional, into)] poster_image: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] highlights: Option<Vec<DemoHighlight>>,
) -> impl IntoView {
    let video_url = video_url.unwrap_or_else(|| DEMO_VIDEO_URL.into());
    let poster = poster_image.unwrap_or_else(|| DEMO_POSTER.into());
    let title = title.unwrap_or_else(|| "See Our AI in Action".into());
    let description = description.unwrap_or_else(|| {
        format!(
            "Watch how our AI analyzes data from {REPORTING_CENTRE_COUNT} price reporting centers to predict essential food commodity prices"
        )
    });
    let highlights = highlights.unwrap_or_else(default_demo_highlights);

    let playback = RwSignal::new(PlaybackState::default());
    let video_ref = NodeRef::<leptos::html::Video>::new();

    let toggle_play = move || {
        let mut state = playback.get_untracked();
        let playing = state.toggle_play();
        playback.set(state);

        #[cfg(not(feature = "ssr"))]
        {
            if let Some(video) = video_ref.get_untracked() {
                if playing {
                    start_playback(video, playback);
                } else {
                    let _ = video.pause();
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = playing;
        }
    };

    // Stop the media element when the section unmounts
    on_cleanup(move || {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(video) = video_ref.try_get_untracked().flatten() {
                let _ = video.pause();
            }
        }
    });

    view! {
        <section class="w-full py-20 bg-black text-white">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12 agri-reveal">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">{title}</h2>
                    <p class="text-gray-400 max-w-2xl mx-auto">{description}</p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-10 items-center">
                    // Video player
                    <div class="relative rounded-xl overflow-hidden aspect-video bg-gradient-to-br from-green-900/30 to-blue-900/30 border border-green-800/30 group">
                        <div class="absolute inset-0 bg-black/40 backdrop-blur-sm group-hover:bg-black/30 transition-all duration-300"></div>

                        <video
                            node_ref=video_ref
                            class="absolute inset-0 w-full h-full object-cover opacity-70 group-hover:opacity-80 transition-opacity duration-300"
                            poster=poster
                            preload="metadata"
                            muted=true
                            prop:muted=move || playback.get().muted
                            on:click=move |_| toggle_play()
                        >
                            <source src=video_url type="video/mp4" />
                            "Your browser does not support the video tag."
                        </video>

                        <Show when=move || playback.get().overlay_visible()>
                            <div class="absolute inset-0 flex items-center justify-center z-10">
                                <button
                                    type="button"
                                    class="rounded-full w-16 h-16 flex items-center justify-center border bg-green-500/20 border-green-500/50 hover:bg-green-500/30 hover:border-green-500/70 backdrop-blur-sm transition-transform hover:scale-110 active:scale-95"
                                    aria-label="Play video"
                                    on:click=move |_| toggle_play()
                                >
                                    <Icon name=icons::PLAY class="h-8 w-8"/>
                                </button>
                            </div>
                        </Show>

                        <button
                            type="button"
                            class="absolute bottom-4 right-4 z-20 rounded-full p-2 bg-black/50 border border-white/20 hover:bg-black/70 transition-colors"
                            aria-label=move || if playback.get().muted { "Unmute video" } else { "Mute video" }
                            on:click=move |_| playback.update(|state| {
                                state.toggle_mute();
                            })
                        >
                            {move || {
                                let icon = if playback.get().muted { icons::VOLUME_MUTED } else { icons::VOLUME };
                                view! { <Icon name=icon class="h-5 w-5"/> }
                            }}
                        </button>

                        <PlantDecoration class="absolute -bottom-10 -left-10 w-40 h-40 opacity-20" />
                        <PlantDecoration class="absolute -top-10 -right-10 w-40 h-40 opacity-20 rotate-180" />
                    </div>

                    // Description
                    <div class="space-y-6 agri-reveal">
                        <h3 class="text-2xl md:text-3xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-green-400 to-blue-500">
                            "Department of Consumer Affairs Price Monitoring"
                        </h3>
                        <p class="text-gray-300">
                            {format!(
                                "The Department of Consumer Affairs monitors the daily prices of {COMMODITY_COUNT} essential food commodities through {REPORTING_CENTRE_COUNT} price reporting centres across the country."
                            )}
                        </p>
                        <div class="space-y-4">
                            {highlights
                                .into_iter()
                                .map(|highlight| {
                                    let (dot, halo) = highlight.accent.dot();
                                    view! {
                                        <div class="flex items-start gap-3">
                                            <div class=format!("w-8 h-8 rounded-full {halo} flex items-center justify-center flex-shrink-0 mt-1")>
                                                <div class=format!("w-3 h-3 rounded-full {dot}")></div>
                                            </div>
                                            <p class="text-gray-400">{highlight.text}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Ask the element to play; browsers may refuse (autoplay policy), in which
/// case the overlay comes back.
#[cfg(not(feature = "ssr"))]
fn start_playback(video: web_sys::HtmlVideoElement, playback: RwSignal<PlaybackState>) {
    use leptos::logging::warn;
    use leptos::task::spawn_local;
    use wasm_bindgen_futures::JsFuture;

    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                warn!("Demo video playback was rejected: {:?}", err);
                playback.update(PlaybackState::play_rejected);
            }
        }),
        Err(err) => {
            warn!("Demo video could not start: {:?}", err);
            playback.update(PlaybackState::play_rejected);
        }
    }
}

#[component]
fn PlantDecoration(class: &'static str) -> impl IntoView {
    view! {
        <div class=class aria-hidden="true">
            <svg viewBox="0 0 200 200" fill="none" class="w-full h-full text-green-500">
                <path d="M20,50 Q50,20 80,50 T140,50 T180,50" stroke="currentColor" stroke-width="4" fill="none" />
                <path d="M100,50 L100,180" stroke="currentColor" stroke-width="4" />
                <path d="M60,80 Q100,60 100,100" stroke="currentColor" stroke-width="3" fill="none" />
                <path d="M140,80 Q100,60 100,100" stroke="currentColor" stroke-width="3" fill="none" />
                <path d="M60,120 Q100,100 100,140" stroke="currentColor" stroke-width="3" fill="none" />
                <path d="M140,120 Q100,100 100,140" stroke="currentColor" stroke-width="3" fill="none" />
            </svg>
        </div>
    }
}
