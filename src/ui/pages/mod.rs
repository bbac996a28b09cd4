//! Application pages
//!
//! - Home: the landing page
//! - Register: the landing page with the trial dialog open
//! - Not found

mod home;
mod not_found;
mod register;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
