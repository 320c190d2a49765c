use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default = false)] readonly: bool,
    #[props(default = false)] required: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    let type_ = r#type;
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{type_}",
            placeholder: "{placeholder}",
            value: "{value}",
            readonly,
            required,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
