use dioxus::prelude::*;

/// What a badge labels. Each kind has its own colour treatment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    /// A movie or TV show ("MOVIE", "TV SHOW").
    #[default]
    Work,
    /// A person's inferred role ("ACTOR", "DIRECTOR").
    Person,
    Genre,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Work => "work",
            BadgeVariant::Person => "person",
            BadgeVariant::Genre => "genre",
        }
    }
}

/// Small upper-case label beside a result title or on a detail page.
#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "badge", "data-kind": variant.as_str(), {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_names_match_stylesheet_selectors() {
        let css = include_str!("style.css");
        for variant in [BadgeVariant::Work, BadgeVariant::Person, BadgeVariant::Genre] {
            let selector = format!(r#"[data-kind="{}"]"#, variant.as_str());
            assert!(css.contains(&selector), "missing {selector}");
        }
    }
}
