//! Form title.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FormHeaderProps {
    pub title: String,
    /// Optional line under the title
    #[props(default = String::new())]
    pub subtitle: String,
}

#[component]
pub fn FormHeader(props: FormHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px; text-align: center;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 22px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
