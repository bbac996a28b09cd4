//! Landing page animations and the scroll reveal observer
//!
//! Entrance and loop animations are plain CSS. Scroll-triggered reveals add a
//! `visible` class from an IntersectionObserver: `.agri-reveal` elements keep
//! it once shown, elements marked `data-replay` lose it again when they leave
//! the viewport so the animation plays on every pass.

use leptos::prelude::*;

/// CSS styles for landing page animations
#[component]
pub fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .hide-scrollbar { -ms-overflow-style: none; scrollbar-width: none; }
            .hide-scrollbar::-webkit-scrollbar { display: none; }

            .line-clamp-6 {
                display: -webkit-box;
                -webkit-line-clamp: 6;
                -webkit-box-orient: vertical;
                overflow: hidden;
            }

            /* Hero entrance */
            @keyframes agri-fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .agri-fade-in-up { animation: agri-fade-in-up 0.8s ease-out forwards; }
            .agri-delay-200 { animation-delay: 0.2s; opacity: 0; }
            .agri-delay-400 { animation-delay: 0.4s; opacity: 0; }

            /* Hero orbs */
            @keyframes agri-orb-a {
                0%, 100% { transform: translate(0, 0); }
                25% { transform: translate(100px, 50px); }
                50% { transform: translate(200px, 100px); }
                75% { transform: translate(100px, 150px); }
            }
            @keyframes agri-orb-b {
                0%, 100% { transform: translate(200px, 100px); }
                25% { transform: translate(100px, 150px); }
                50% { transform: translate(0, 200px); }
                75% { transform: translate(100px, 150px); }
            }
            @keyframes agri-orb-c {
                0%, 100% { transform: translate(100px, 300px); }
                25% { transform: translate(200px, 250px); }
                50% { transform: translate(300px, 200px); }
                75% { transform: translate(200px, 250px); }
            }
            .agri-orb-a { animation: agri-orb-a 20s linear infinite; }
            .agri-orb-b { animation: agri-orb-b 25s linear infinite; }
            .agri-orb-c { animation: agri-orb-c 30s linear infinite; }

            .agri-grid-overlay {
                background-image:
                    linear-gradient(to right, rgba(255,255,255,0.1) 1px, transparent 1px),
                    linear-gradient(to bottom, rgba(255,255,255,0.1) 1px, transparent 1px);
                background-size: 50px 50px;
            }

            @keyframes agri-bob {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(10px); }
            }
            .agri-bob { animation: agri-bob 2s ease-in-out infinite; }

            /* Scroll reveals */
            .agri-reveal {
                opacity: 0;
                transform: translateY(20px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .agri-reveal.visible { opacity: 1; transform: none; }

            .agri-reveal-card {
                opacity: 0;
                transform: translateY(50px) rotateY(15deg);
                transition: opacity 0.7s cubic-bezier(0.25, 0.1, 0.25, 1), transform 0.7s cubic-bezier(0.25, 0.1, 0.25, 1);
            }
            .agri-reveal-card.visible { opacity: 1; transform: none; }
            .agri-reveal-card.visible:hover { transform: scale(1.05) rotateY(5deg); }

            /* Model training particles */
            @keyframes agri-particle {
                from { transform: translateX(-10px); opacity: 0.7; }
                to { transform: translateX(1000px); opacity: 0; }
            }
            .agri-particle {
                animation-name: agri-particle;
                animation-timing-function: linear;
                animation-iteration-count: infinite;
                animation-fill-mode: backwards;
            }

            @keyframes agri-dash-flow {
                to { stroke-dashoffset: -100; }
            }
            .agri-dash-flow { animation: agri-dash-flow 4s linear infinite; }

            /* Prediction chart bars */
            @keyframes agri-bar-grow {
                from { height: 0; }
            }
            .agri-bar { animation: agri-bar-grow 0.5s ease-out backwards; }

            /* Testimonial reel */
            @keyframes agri-marquee {
                from { transform: translateX(0); }
                to { transform: translateX(-4000px); }
            }
            .agri-marquee { animation: agri-marquee 120s linear infinite; }
            .agri-reel-dragging .agri-marquee { animation-play-state: paused; }

            @keyframes agri-glow {
                0%, 100% { box-shadow: 0 0 5px rgba(16, 185, 129, 0.2); }
                50% { box-shadow: 0 0 10px rgba(16, 185, 129, 0.4); }
            }
            .agri-glow { animation: agri-glow 2s ease-in-out infinite; }

            @keyframes agri-nudge {
                0%, 100% { transform: translateX(-5px); }
                50% { transform: translateX(5px); }
            }
            .agri-nudge { animation: agri-nudge 2s ease-in-out infinite; }
            .agri-nudge-reverse { animation: agri-nudge 2s ease-in-out infinite reverse; }

            .agri-card-3d { perspective: 1000px; }
            .agri-card-3d:hover > div { transform: scale(1.08) rotateY(10deg) translateY(-10px); }
            "#
        </style>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
pub fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            const el = entry.target;
                            if (entry.isIntersecting) {
                                el.classList.add('visible');
                                if (!el.hasAttribute('data-replay')) {
                                    observer.unobserve(el);
                                }
                            } else if (el.hasAttribute('data-replay')) {
                                el.classList.remove('visible');
                            }
                        });
                    }, {
                        threshold: 0.15,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    const watch = (root) => {
                        root.querySelectorAll('.agri-reveal, .agri-reveal-card').forEach(el => {
                            observer.observe(el);
                        });
                    };
                    watch(document);

                    // Sections mounted later by client-side navigation
                    new MutationObserver((mutations) => {
                        mutations.forEach(m => m.addedNodes.forEach(node => {
                            if (node.nodeType === 1) {
                                if (node.matches('.agri-reveal, .agri-reveal-card')) {
                                    observer.observe(node);
                                }
                                watch(node);
                            }
                        }));
                    }).observe(document.body, { childList: true, subtree: true });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}

#[cfg(test)]
mod tests {
    const MAIN_CSS: &str = include_str!("../../../style/main.css");
    const MANIFEST: &str = include_str!("../../../Cargo.toml");

    #[test]
    fn test_utility_classes_are_generated() {
        assert!(
            MAIN_CSS.trim_start().starts_with("@import \"tailwindcss\""),
            "main.css must pull in tailwind before any rule"
        );
        assert!(MANIFEST.contains("tailwind-input-file = \"style/main.css\""));
    }

    #[test]
    fn test_base_rules_stay_below_utilities() {
        // Unlayered rules would override `hidden` and the other utilities
        let layer_start = MAIN_CSS.find("@layer base {").expect("base layer");
        let block_rule = MAIN_CSS.find("display: block").expect("media display rule");
        let motion_rule = MAIN_CSS
            .find("@media (prefers-reduced-motion")
            .expect("reduced motion rule");
        assert!(layer_start < block_rule && block_rule < motion_rule);
    }
}
