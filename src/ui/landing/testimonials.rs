//! Testimonial reel
//!
//! The cards are rendered twice and slid left by a CSS marquee. The reel can
//! be dragged sideways with the mouse, and every card bobs vertically on an
//! animation-frame loop that stops when the section unmounts.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{Testimonial, default_testimonials};
use crate::core::{DragScroll, FloatMotion, reel_items};
use crate::ui::icon::{Icon, icons};

/// Scrolling wall of customer quotes with a sign-up call to action
#[component]
pub fn Testimonials(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] testimonials: Option<Vec<Testimonial>>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Trusted by Agricultural Experts Across India".into());
    let subtitle = subtitle.unwrap_or_else(|| {
        "See how our AI-powered price prediction platform is transforming agricultural markets and empowering stakeholders throughout the supply chain.".into()
    });
    let testimonials = testimonials.unwrap_or_else(default_testimonials);

    let reel_ref = NodeRef::<leptos::html::Div>::new();
    let drag = RwSignal::new(DragScroll::default());
    // Seconds since mount, advanced once per animation frame
    let elapsed = RwSignal::new(0.0_f64);

    let running = Arc::new(AtomicBool::new(true));
    #[cfg(not(feature = "ssr"))]
    {
        let running = running.clone();
        // Effects only run in the browser, once the reel is mounted
        Effect::new(move |_| start_float_loop(elapsed, running.clone()));
    }
    on_cleanup(move || running.store(false, Ordering::Relaxed));

    let on_mouse_down = move |ev: leptos::ev::MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(reel) = reel_ref.get_untracked() {
                let x = f64::from(ev.page_x() - reel.offset_left());
                let scroll_left = f64::from(reel.scroll_left());
                drag.update(|d| d.begin(x, scroll_left));
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = ev;
        }
    };

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(reel) = reel_ref.get_untracked() {
                let x = f64::from(ev.page_x() - reel.offset_left());
                if let Some(left) = drag.get_untracked().drag_to(x) {
                    ev.prevent_default();
                    reel.set_scroll_left(left as i32);
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = ev;
        }
    };

    let end_drag = move |_: leptos::ev::MouseEvent| drag.update(DragScroll::end);

    let cards = reel_items(&testimonials)
        .into_iter()
        .map(|item| {
            let motion = FloatMotion::for_index(item.index);
            let testimonial = item.testimonial.clone();
            view! {
                <div
                    class="testimonial-card hover:z-10"
                    data-reel-key=item.key
                    style=move || format!("transform: translateY({:.2}px);", motion.offset(elapsed.get()))
                >
                    <TestimonialCard testimonial=testimonial />
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="w-full py-20 bg-black text-white relative overflow-hidden">
            // Background decoration
            <div class="absolute inset-0 overflow-hidden" aria-hidden="true">
                <div class="absolute inset-0 opacity-5">
                    <div
                        class="h-full w-full"
                        style="background-image: radial-gradient(circle, rgba(59, 130, 246, 0.1) 1px, transparent 1px), radial-gradient(circle, rgba(16, 185, 129, 0.1) 1px, transparent 1px); background-size: 30px 30px, 50px 50px; background-position: 0 0, 15px 15px;"
                    ></div>
                </div>
                <div class="absolute top-1/4 left-1/4 w-64 h-64 rounded-full bg-blue-500/10 blur-3xl animate-pulse"></div>
                <div class="absolute bottom-1/3 right-1/4 w-80 h-80 rounded-full bg-emerald-500/10 blur-3xl animate-pulse"></div>
                <div class="absolute top-1/2 right-1/3 w-40 h-40 rounded-full bg-purple-500/10 blur-3xl animate-pulse"></div>
            </div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-5xl font-bold mb-4 bg-clip-text text-transparent bg-gradient-to-r from-emerald-400 via-blue-400 to-purple-400 agri-reveal">
                        {title}
                    </h2>
                    <p class="text-gray-300 max-w-2xl mx-auto text-lg agri-reveal" style="transition-delay: 0.2s;">
                        {subtitle}
                    </p>
                </div>

                <div class="relative mt-10 overflow-hidden">
                    <div
                        node_ref=reel_ref
                        class="flex overflow-x-auto hide-scrollbar py-12 cursor-grab"
                        class:agri-reel-dragging=move || drag.get().is_dragging()
                        class:cursor-grabbing=move || drag.get().is_dragging()
                        on:mousedown=on_mouse_down
                        on:mousemove=on_mouse_move
                        on:mouseup=end_drag
                        on:mouseleave=end_drag
                    >
                        <div class="flex gap-8 px-4 min-w-max agri-marquee">
                            {cards}
                        </div>
                    </div>

                    // Edge fades
                    <div class="pointer-events-none absolute inset-y-0 left-0 w-1/6 bg-gradient-to-r from-black to-transparent z-10"></div>
                    <div class="pointer-events-none absolute inset-y-0 right-0 w-1/6 bg-gradient-to-l from-black to-transparent z-10"></div>

                    <div class="flex justify-center mt-4 items-center gap-2">
                        <span class="agri-nudge"><Icon name=icons::CHEVRON_LEFT class="h-4 w-4 opacity-60"/></span>
                        <span class="text-sm text-gray-400">"Drag to explore more testimonials"</span>
                        <span class="agri-nudge-reverse"><Icon name=icons::CHEVRON_RIGHT class="h-4 w-4 opacity-60"/></span>
                    </div>
                </div>

                <div class="text-center mt-16 agri-reveal" style="transition-delay: 0.4s;">
                    <div class="inline-block relative transition-transform hover:scale-105 hover:-translate-y-1 active:scale-[0.98]">
                        <A
                            href="/register"
                            attr:class="relative inline-flex items-center overflow-hidden bg-gradient-to-r from-emerald-600 to-blue-600 hover:from-emerald-500 hover:to-blue-500 text-white font-medium rounded-xl px-10 py-5 text-lg shadow-[0_10px_25px_-5px_rgba(16,185,129,0.3)] hover:shadow-[0_20px_35px_-10px_rgba(16,185,129,0.5)] transition-all duration-300"
                        >
                            <span class="relative z-10">"Join Thousands of Satisfied Users"</span>
                            <span class="absolute inset-0 bg-gradient-to-r from-emerald-400/20 to-blue-400/20 backdrop-blur-sm"></span>
                        </A>
                        <div class="absolute -inset-1 rounded-xl blur-xl bg-gradient-to-r from-emerald-600/30 to-blue-600/30 opacity-70 -z-10"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let stars = (0..Testimonial::MAX_RATING)
        .map(|i| {
            let icon = if testimonial.is_star_filled(i) {
                icons::STAR
            } else {
                icons::STAR_EMPTY
            };
            view! { <Icon name=icon class="w-2 h-2"/> }
        })
        .collect_view();

    view! {
        <div class="w-[200px] h-[200px] flex-shrink-0 mx-3 agri-card-3d">
            <div class="relative h-full w-full transition-transform duration-500">
                <div class="absolute inset-0 bg-gradient-to-br from-gray-800/90 to-gray-900/95 backdrop-blur-md rounded-lg shadow-[0_20px_50px_rgba(8,_112,_184,_0.3)]"></div>
                <div class="absolute inset-0 rounded-lg p-[1px] bg-gradient-to-br from-emerald-500/40 via-transparent to-blue-500/40 agri-glow"></div>

                <div class="relative z-10 p-3 h-full flex flex-col">
                    {testimonial.commodity.clone().map(|commodity| view! {
                        <div class="absolute -top-2 -right-2 bg-gradient-to-r from-blue-500/30 to-emerald-500/30 backdrop-blur-sm px-2 py-1 rounded-full border border-blue-500/30 text-xs font-medium text-blue-300 rotate-12">
                            {commodity}
                        </div>
                    })}

                    <div class="flex items-center mb-2">
                        <div class="h-8 w-8 rounded-full overflow-hidden border-2 border-emerald-500/50 shadow-lg shadow-emerald-500/20">
                            <img
                                src=testimonial.avatar.clone()
                                alt=testimonial.name.clone()
                                class="h-full w-full object-cover"
                                draggable="false"
                            />
                        </div>
                        <div class="ml-2 overflow-hidden">
                            <h4 class="font-semibold text-xs text-white truncate">{testimonial.name.clone()}</h4>
                            <p class="text-[10px] text-gray-400 truncate">{testimonial.role.clone()}</p>
                        </div>
                    </div>

                    {testimonial.highlight.clone().map(|highlight| view! {
                        <div class="bg-gradient-to-r from-emerald-500/20 to-blue-500/20 backdrop-blur-sm px-2 py-1 rounded-md border border-emerald-500/30 text-[10px] font-medium text-emerald-400 mb-1 inline-block agri-glow">
                            {highlight}
                        </div>
                    })}

                    <div class="flex-grow overflow-hidden mb-2">
                        <p class="text-gray-200 text-[10px] leading-relaxed line-clamp-6">
                            {format!("\"{}\"", testimonial.content)}
                        </p>
                    </div>

                    <div class="flex items-center" aria-label=format!("{} out of {} stars", testimonial.stars(), Testimonial::MAX_RATING)>
                        {stars}
                    </div>

                    <div class="absolute bottom-2 right-2 opacity-30" aria-hidden="true">
                        <Icon name=icons::QUOTE class="w-4 h-4"/>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Advance `elapsed` every animation frame until `running` is cleared
#[cfg(not(feature = "ssr"))]
fn start_float_loop(elapsed: RwSignal<f64>, running: Arc<AtomicBool>) {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    let Some(window) = web_sys::window() else {
        return;
    };

    let origin = js_sys::Date::now();
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();
    let loop_window = window.clone();

    *frame.borrow_mut() = Some(Closure::new(move || {
        if !running.load(Ordering::Relaxed) {
            // Release the closure; the loop ends here
            let _ = next_frame.borrow_mut().take();
            return;
        }

        elapsed.set((js_sys::Date::now() - origin) / 1000.0);

        if let Some(closure) = next_frame.borrow().as_ref() {
            let _ = loop_window.request_animation_frame(closure.as_ref().unchecked_ref());
        }
    }));

    if let Some(closure) = frame.borrow().as_ref() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
