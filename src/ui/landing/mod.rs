//! Landing page sections
//!
//! Every section takes optional props that override its shipped copy and
//! data. The page composer in `ui::pages::home` decides order and anchors.

mod ai_solution;
mod demo_video;
mod footer;
mod glyph;
mod hero;
mod navbar;
mod problem_statement;
mod registration_modal;
mod sample_prediction;
mod seo;
mod styles;
mod testimonials;

pub use ai_solution::AISolution;
pub use demo_video::DemoVideo;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use problem_statement::ProblemStatement;
pub use registration_modal::RegistrationModal;
pub use sample_prediction::SamplePrediction;
pub use seo::{SeoMeta, structured_data};
pub use styles::{LandingStyles, ScrollAnimationScript};
pub use testimonials::Testimonials;
