//! Calendar year for the footer copyright line

/// Current year on the server
#[cfg(feature = "ssr")]
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}

/// Current year in the browser
#[cfg(all(feature = "hydrate", not(feature = "ssr")))]
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_utc_full_year() as i32
}

/// `© 2026 AgriPredict AI. All rights reserved.`
pub fn copyright_line(year: i32, company: &str) -> String {
    format!("© {year} {company}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2025, "AgriPredict AI"),
            "© 2025 AgriPredict AI. All rights reserved."
        );
    }
}
