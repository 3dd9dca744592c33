//! Filter chip screen.
//!
//! Renders one chip per registry entry in a wrapping row and a submit button
//! that announces every selected filter, in order, through the toast queue.

use dioxus::{
    logger::tracing::info,
    prelude::*,
};

use crate::{
    filter::{fruit_filters, FilterRegistry},
    theme::Palette,
    toast::ToastQueue,
    ui::{chip::FilterChip, toast::ToastHost},
    AppSettings,
};

#[component]
pub fn Home() -> Element {
    let filters = use_signal(fruit_filters);
    rsx! {
        FilterChipSection { filters }
    }
}

#[component]
pub fn FilterChipSection(filters: Signal<FilterRegistry>) -> Element {
    let mut filters = filters;
    let settings = use_context::<AppSettings>();
    let mut toasts = use_signal(ToastQueue::new);
    let palette = Palette::default();

    let duration = settings.toast_duration();
    let elevation = settings.elevation();
    let title = settings.title.clone();
    let bar = format!(
        "background-color: {}; color: {};",
        palette.primary, palette.on_primary
    );

    let submit = move |_e: Event<MouseData>| {
        let selected = filters.read().collect_selected();
        info!("submitting {} filters: {selected:?}", selected.len());
        // Only one drain task runs; it exits once the queue is empty.
        let start_drain = toasts.write().enqueue(selected);
        if start_drain {
            spawn(async move {
                loop {
                    tokio::time::sleep(duration).await;
                    if !toasts.write().advance() {
                        break;
                    }
                }
            });
        }
    };

    let chips: Vec<(usize, String, bool)> = filters
        .read()
        .iter()
        .enumerate()
        .map(|(i, f)| (i, f.name().to_string(), f.enabled))
        .collect();

    rsx! {
        div { class: "screen",
            div { class: "app-bar", style: "{bar}",
                span { class: "app-title", "{title}" }
            }
            div { class: "content",
                div { class: "chip-flow",
                    for (index, name, enabled) in chips {
                        div { key: "{name}", class: "chip-slot",
                            FilterChip {
                                name: name.clone(),
                                selected: enabled,
                                elevation,
                                on_toggle: move |value: bool| {
                                    filters.write().set_enabled(index, value);
                                },
                            }
                        }
                    }
                }
                div { class: "spacer" }
                button { class: "submit", style: "{bar}", onclick: submit,
                    span { class: "submit-label", "Submit" }
                }
            }
            ToastHost { queue: toasts }
        }
    }
}
