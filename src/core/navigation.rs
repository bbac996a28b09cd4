//! Navbar links and the mobile menu toggle

/// In-page anchor shown in the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FEATURES_ANCHOR: &str = "features";
pub const SOLUTION_ANCHOR: &str = "solution";
pub const DEMO_ANCHOR: &str = "demo";
pub const TESTIMONIALS_ANCHOR: &str = "testimonials";

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Features",
        href: "#features",
    },
    NavLink {
        label: "Our Solution",
        href: "#solution",
    },
    NavLink {
        label: "Watch Demo",
        href: "#demo",
    },
    NavLink {
        label: "Testimonials",
        href: "#testimonials",
    },
];

/// Mobile menu panel state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// `aria-expanded` value for the toggle button
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_point_at_section_anchors() {
        let anchors = [
            FEATURES_ANCHOR,
            SOLUTION_ANCHOR,
            DEMO_ANCHOR,
            TESTIMONIALS_ANCHOR,
        ];
        for (link, anchor) in NAV_LINKS.iter().zip(anchors) {
            assert_eq!(link.href, format!("#{anchor}"));
        }
    }

    #[test]
    fn test_toggle_twice_closes() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert!(menu.toggled().is_open());
        assert_eq!(menu.toggled().toggled(), MenuState::Closed);
        assert_eq!(menu.toggled().aria_expanded(), "true");
    }
}
