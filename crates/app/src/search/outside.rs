use dioxus::prelude::*;

/// Listener that reports pointer presses landing outside `container_id`.
/// A missing container reports nothing. Replaces any listener already
/// registered for the same container.
fn attach_script(container_id: &str) -> String {
    format!(
        r#"
        (function() {{
            var id = "{container_id}";
            var handler = function(event) {{
                var container = document.getElementById(id);
                if (!container) return;
                if (!container.contains(event.target)) dioxus.send(true);
            }};
            window.__outsideHandlers = window.__outsideHandlers || {{}};
            var previous = window.__outsideHandlers[id];
            if (previous) {{
                document.removeEventListener("mousedown", previous);
                document.removeEventListener("touchstart", previous);
            }}
            window.__outsideHandlers[id] = handler;
            document.addEventListener("mousedown", handler);
            document.addEventListener("touchstart", handler);
        }})();
        "#
    )
}

fn detach_script(container_id: &str) -> String {
    format!(
        r#"
        (function() {{
            var handlers = window.__outsideHandlers || {{}};
            var handler = handlers["{container_id}"];
            if (!handler) return;
            document.removeEventListener("mousedown", handler);
            document.removeEventListener("touchstart", handler);
            delete handlers["{container_id}"];
        }})();
        "#
    )
}

/// Call `on_outside` whenever a mousedown or touchstart lands outside the
/// element with id `container_id`. Listeners are removed when the calling
/// component unmounts.
pub fn use_outside_interaction(container_id: &'static str, on_outside: Callback<()>) {
    use_effect(move || {
        spawn(async move {
            let mut listener = document::eval(&attach_script(container_id));
            while listener.recv::<bool>().await.is_ok() {
                on_outside.call(());
            }
        });
    });

    use_drop(move || {
        document::eval(&detach_script(container_id));
    });
}
