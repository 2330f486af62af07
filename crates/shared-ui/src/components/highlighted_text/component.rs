use dioxus::prelude::*;
use shared_types::highlight_segments;

/// Renders `text` with every case-insensitive occurrence of `term` wrapped
/// in a `<mark>`.
#[component]
pub fn HighlightedText(text: String, term: String) -> Element {
    let segments = highlight_segments(&text, &term);

    rsx! {
        for segment in segments {
            if segment.emphasized {
                mark { class: "highlight", "{segment.text}" }
            } else {
                "{segment.text}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(text: &'static str, term: &'static str) -> String {
        let mut dom = VirtualDom::new_with_props(
            HighlightedText,
            HighlightedTextProps {
                text: text.to_string(),
                term: term.to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn marks_matching_run() {
        let html = render("The Wedding Party", "wed");
        assert!(html.contains(r#"<mark class="highlight">Wed</mark>"#), "{html}");
        assert!(html.contains("ding Party"));
    }

    #[test]
    fn short_term_renders_plain_text() {
        let html = render("The Wedding Party", "w");
        assert!(!html.contains("<mark"));
        assert!(html.contains("The Wedding Party"));
    }

    #[test]
    fn pattern_characters_match_literally() {
        let html = render("Cash (2020)", "(20");
        assert_eq!(html.matches("<mark").count(), 1);
        assert!(html.contains(">(20</mark>"), "{html}");
    }
}
