// Copyright © 2025 Nipun Kumar

use dioxus::prelude::*;

use crate::{
    color::Color,
    effects::{
        BorderStroke, border_stroke, diagonal_gradient_border, elevated_background,
        elevation_shadow, offset_gradient_background,
    },
    theme::{Palette, SMALL_RADIUS},
};

const CHIP_HEIGHT: f32 = 40.0;
const PRESSED_GRADIENT_WIDTH: f32 = 200.0;

/// Rounded, shadowed box whose fill is lightened by its elevation.
#[component]
pub fn ChipSurface(
    color: Color,
    content_color: Color,
    border: Option<BorderStroke>,
    #[props(default)] elevation: f32,
    #[props(default = SMALL_RADIUS)] radius: f32,
    #[props(default = CHIP_HEIGHT)] height: f32,
    children: Element,
) -> Element {
    let shadow = elevation_shadow(elevation);
    let fill = elevated_background(color, elevation);
    let stroke = border_stroke(border);
    rsx! {
        div {
            class: "chip-surface",
            style: "
            {shadow}
            {stroke}
            {fill}
            color: {content_color};
            height: {height}px;
            border-radius: {radius}px;
            overflow: hidden;
            ",
            {children}
        }
    }
}

#[component]
pub fn FilterChip(
    name: String,
    selected: bool,
    #[props(default = 2.0)] elevation: f32,
    on_toggle: EventHandler<bool>,
) -> Element {
    let mut pressed = use_signal(|| false);
    let palette = Palette::default();
    let gradient = palette.chip_gradient();

    let (color, content_color) = if selected {
        (palette.primary, palette.on_primary)
    } else {
        (palette.background, palette.on_background)
    };
    let border = diagonal_gradient_border(!selected, &gradient, 1.0);
    let pressed_bg = if pressed() {
        offset_gradient_background(&gradient, PRESSED_GRADIENT_WIDTH, 0.0)
    } else {
        String::new()
    };
    let checked = if selected { "true" } else { "false" };

    rsx! {
        ChipSurface { color, content_color, elevation,
            div {
                class: "chip-toggle",
                role: "switch",
                "aria-checked": checked,
                style: "
                {pressed_bg}
                height: {CHIP_HEIGHT}px;
                border-radius: {SMALL_RADIUS}px;
                ",
                onpointerdown: move |_| pressed.set(true),
                onpointerup: move |_| pressed.set(false),
                onpointerleave: move |_| pressed.set(false),
                onclick: move |_| on_toggle.call(!selected),
                div {
                    class: "chip-border",
                    style: "{border} border-radius: {SMALL_RADIUS}px;",
                }
                span { class: "chip-label", "{name}" }
            }
        }
    }
}
