//! Banner for a failed backend request.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Which request failed, e.g. "Report generation failed"
    pub title: String,
    pub message: String,
    /// Renders a close button when set.
    #[props(default)]
    pub on_dismiss: Option<EventHandler<MouseEvent>>,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "display: flex; align-items: flex-start; gap: 8px; padding: 10px 12px; margin: 12px 0; background: #FFF4F4; color: #B71C1C; border-left: 4px solid #D32F2F; border-radius: 2px;",
            div {
                style: "flex: 1;",
                div { style: "font-weight: 600;", "{props.title}" }
                div { style: "font-size: 13px;", "{props.message}" }
            }
            if let Some(on_dismiss) = props.on_dismiss {
                button {
                    r#type: "button",
                    title: "Dismiss",
                    style: "border: none; background: none; color: inherit; font-size: 16px; cursor: pointer;",
                    onclick: move |evt| on_dismiss.call(evt),
                    "×"
                }
            }
        }
    }
}
