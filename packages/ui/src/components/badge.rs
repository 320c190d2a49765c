use dioxus::prelude::*;

#[component]
pub fn Badge(children: Element) -> Element {
    rsx! {
        span {
            class: "badge",
            {children}
        }
    }
}
