//! Render tests for shared view components.

#![cfg(feature = "dioxus")]

use dioxus::prelude::*;
use nutritrack::views::shared::DismissibleAlert;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn test_alert_shows_message_with_dismiss_control() {
    fn app() -> Element {
        let error = use_signal(|| "Failed to generate meal. Using fallback options.".to_string());
        rsx! {
            DismissibleAlert { error }
        }
    }

    let html = render(app);
    assert!(html.contains("Failed to generate meal. Using fallback options."));
    // Dismissal control clears the error without retrying the request.
    assert!(html.contains("alert-dismiss"));
    assert!(html.contains(r#"aria-label="Dismiss""#));
}

#[test]
fn test_alert_renders_nothing_when_clear() {
    fn app() -> Element {
        let error = use_signal(String::new);
        rsx! {
            DismissibleAlert { error }
        }
    }

    let html = render(app);
    assert!(!html.contains("alert"));
}
