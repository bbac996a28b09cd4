//! Core domain models and UI state for the landing page

pub mod clock;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod media;
pub mod motion;
pub mod navigation;
pub mod prediction;
pub mod reel;
pub mod registration;
#[cfg(test)]
mod tests;
pub mod validation;

pub use content::*;
pub use media::PlaybackState;
pub use motion::{FloatMotion, Particle};
pub use navigation::{MenuState, NAV_LINKS, NavLink};
pub use prediction::{PredictionPanel, PricePoint};
pub use reel::{DragScroll, ReelItem, reel_items};
pub use registration::{ModalPhase, RegistrationFlow, SubmitError, SubmitFuture};
pub use validation::{Field, FieldError, FieldErrors, RegistrationDraft, RegistrationForm};
