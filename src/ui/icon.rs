use leptos::prelude::*;

/// SVG icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon name (file name without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and colour filters
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names shipped in `public/icons`; social network icons are named by
/// [`SocialLinks::entries`](crate::core::SocialLinks::entries)
pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ARROW_DOWN: &str = "arrow-down";
    pub const PLAY: &str = "play";
    pub const VOLUME: &str = "volume-2";
    pub const VOLUME_MUTED: &str = "volume-x";
    pub const SEARCH: &str = "search";
    pub const QUOTE: &str = "quote";
    pub const STAR: &str = "star";
    pub const STAR_EMPTY: &str = "star-empty";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const MAP_PIN: &str = "map-pin";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::core::default_social_links;

    const ICON_SOURCE: &str = include_str!("icon.rs");

    fn shipped_icons() -> Vec<String> {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("public/icons");
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .expect("public/icons")
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                (path.extension()? == "svg").then(|| path.file_stem()?.to_str().map(String::from))?
            })
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_every_shipped_icon_is_named() {
        let social: Vec<&str> = default_social_links()
            .entries()
            .into_iter()
            .map(|(_, icon, _)| icon)
            .collect();

        for name in shipped_icons() {
            let quoted = format!("\"{name}\"");
            assert!(
                ICON_SOURCE.contains(&quoted) || social.contains(&name.as_str()),
                "{name}.svg is not referenced"
            );
        }
    }

    #[test]
    fn test_named_icons_exist() {
        let shipped = shipped_icons();
        let named = [
            super::icons::MENU,
            super::icons::PLAY,
            super::icons::VOLUME_MUTED,
            super::icons::LOADER,
        ];
        for name in named {
            assert!(shipped.iter().any(|s| s == name), "missing {name}.svg");
        }
    }
}
