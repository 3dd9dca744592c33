use dioxus::prelude::*;

use crate::toast::ToastQueue;

#[component]
pub fn ToastHost(queue: Signal<ToastQueue>) -> Element {
    let current = queue.read().current().map(str::to_string);
    rsx! {
        if let Some(text) = current {
            div { class: "toast-host",
                div { class: "toast", role: "status", "{text}" }
            }
        }
    }
}
