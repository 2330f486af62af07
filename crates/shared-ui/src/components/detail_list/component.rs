use dioxus::prelude::*;

/// Label/value facts about a record, e.g. a person's birth date and place.
///
/// Renders nothing when `items` is empty.
#[component]
pub fn DetailList(
    items: Vec<(&'static str, String)>,
    #[props(default)] heading: String,
) -> Element {
    if items.is_empty() {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if !heading.is_empty() {
            h3 { class: "detail-list-heading", "{heading}" }
        }
        dl { class: "detail-list",
            for (label, value) in items {
                div { key: "{label}", class: "detail-item",
                    dt { class: "detail-item-label", "{label}" }
                    dd { class: "detail-item-value", "{value}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(items: Vec<(&'static str, String)>, heading: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            DetailList,
            DetailListProps {
                items,
                heading: heading.to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_items_in_order_under_heading() {
        let html = render(
            vec![("Born", "May 3, 1979".into()), ("Age", "47".into())],
            "Personal Info",
        );
        assert!(html.contains("Personal Info"), "{html}");
        let born = html.find("Born").unwrap();
        let age = html.find("Age").unwrap();
        assert!(born < age);
        assert!(html.contains("May 3, 1979"));
    }

    #[test]
    fn empty_list_renders_nothing() {
        let html = render(Vec::new(), "Personal Info");
        assert!(!html.contains("Personal Info"));
        assert!(!html.contains("<dl"));
    }
}
