//! CSS builders for the chip's visual effects.
//!
//! Each helper returns a fragment of inline style. The webview animates
//! between fragments through the `transition` rules in `main.css`, so a
//! fragment only ever changes properties those rules interpolate.

use crate::color::{tint, Color};

fn stops(colors: &[Color]) -> String {
    colors
        .iter()
        .map(Color::to_css)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Top-left to bottom-right gradient border that fades in when `show` is set.
///
/// The style belongs on its own layer stacked over the surface. The gradient
/// is masked down to a ring `width` px thick, so the fill underneath shows
/// through. Only `opacity` differs between shown and hidden.
pub fn diagonal_gradient_border(show: bool, colors: &[Color], width: f32) -> String {
    let opacity = if show && !colors.is_empty() { 1 } else { 0 };
    let image = match colors {
        [] => "none".to_string(),
        [only] => format!("linear-gradient(135deg, {only}, {only})"),
        _ => format!("linear-gradient(135deg, {})", stops(colors)),
    };
    format!(
        "opacity: {opacity}; padding: {width}px; background-image: {image}; \
         -webkit-mask: linear-gradient(#000 0 0) content-box, linear-gradient(#000 0 0); \
         -webkit-mask-composite: xor; mask-composite: exclude;"
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStroke {
    pub width: f32,
    pub color: Color,
}

/// Solid outline for a surface; empty when there is none.
pub fn border_stroke(border: Option<BorderStroke>) -> String {
    match border {
        Some(b) => format!("border: {}px solid {};", b.width, b.color),
        None => String::new(),
    }
}

/// Horizontal gradient spanning `width` px, shifted by `offset` and mirrored
/// beyond its ends.
pub fn offset_gradient_background(colors: &[Color], width: f32, offset: f32) -> String {
    let [first, rest @ ..] = colors else {
        return "background-image: none;".to_string();
    };
    let start = 0.0 - offset;
    let end = width - offset;
    let mut forward: Vec<String> = vec![format!("{first} {start}px")];
    let n = rest.len() as f32;
    for (i, c) in rest.iter().enumerate() {
        let at = start + (end - start) * (i as f32 + 1.0) / n;
        forward.push(format!("{c} {at}px"));
    }
    // Walk back down to mirror the tile.
    let back = colors.iter().rev().skip(1).enumerate().map(|(i, c)| {
        let at = end + (end - start) * (i as f32 + 1.0) / n;
        format!("{c} {at}px")
    });
    forward.extend(back);
    format!(
        "background-image: repeating-linear-gradient(90deg, {});",
        forward.join(", ")
    )
}

/// Drop shadow and stacking order for a surface raised to `elevation` dp.
pub fn elevation_shadow(elevation: f32) -> String {
    if elevation <= 0.0 {
        return "box-shadow: none; z-index: 0;".to_string();
    }
    format!(
        "box-shadow: 0px {}px {}px rgba(0, 0, 0, 0.24); z-index: {};",
        elevation / 2.0,
        elevation,
        elevation.round() as i32
    )
}

/// Surface fill for `color` once the elevation overlay is applied.
pub fn elevated_background(color: Color, elevation: f32) -> String {
    format!("background-color: {};", tint(color, elevation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{PURPLE_200, PURPLE_500};

    #[test]
    fn hidden_border_is_transparent() {
        let css = diagonal_gradient_border(false, &[PURPLE_500, PURPLE_200], 1.0);
        assert!(css.starts_with("opacity: 0;"));
    }

    #[test]
    fn shown_border_is_diagonal() {
        let css = diagonal_gradient_border(true, &[PURPLE_500, PURPLE_200], 1.0);
        assert!(css.starts_with("opacity: 1; padding: 1px;"));
        assert!(css.contains(
            "linear-gradient(135deg, rgba(98, 0, 238, 1.000), rgba(187, 134, 252, 1.000))"
        ));
        assert!(css.contains("mask-composite: exclude;"));
    }

    #[test]
    fn border_toggle_only_changes_opacity() {
        let shown = diagonal_gradient_border(true, &[PURPLE_500, PURPLE_200], 1.0);
        let hidden = diagonal_gradient_border(false, &[PURPLE_500, PURPLE_200], 1.0);
        assert_eq!(
            shown.replacen("opacity: 1;", "opacity: 0;", 1),
            hidden
        );
        // The ring never paints an opaque fill or resizes the chip.
        for css in [&shown, &hidden] {
            assert!(!css.contains("background:"));
            assert!(!css.contains("padding-box"));
            assert!(!css.contains("border:"));
        }
    }

    #[test]
    fn border_without_colors_stays_hidden() {
        let css = diagonal_gradient_border(true, &[], 1.0);
        assert!(css.starts_with("opacity: 0;"));
        assert!(css.contains("background-image: none;"));
    }

    #[test]
    fn stroke_only_when_present() {
        assert_eq!(border_stroke(None), "");
        let stroke = BorderStroke {
            width: 1.0,
            color: PURPLE_500,
        };
        assert_eq!(
            border_stroke(Some(stroke)),
            "border: 1px solid rgba(98, 0, 238, 1.000);"
        );
    }

    #[test]
    fn pressed_gradient_mirrors() {
        let css = offset_gradient_background(&[PURPLE_500, PURPLE_200], 200.0, 0.0);
        assert_eq!(
            css,
            "background-image: repeating-linear-gradient(90deg, \
             rgba(98, 0, 238, 1.000) 0px, rgba(187, 134, 252, 1.000) 200px, \
             rgba(98, 0, 238, 1.000) 400px);"
        );
    }

    #[test]
    fn empty_gradient_falls_back() {
        assert_eq!(offset_gradient_background(&[], 200.0, 0.0), "background-image: none;");
    }

    #[test]
    fn flat_surface_has_no_shadow() {
        assert_eq!(elevation_shadow(0.0), "box-shadow: none; z-index: 0;");
        assert!(elevation_shadow(2.0).contains("0px 1px 2px"));
    }

    #[test]
    fn elevated_background_is_tinted() {
        let flat = elevated_background(PURPLE_500, 0.0);
        assert_eq!(flat, "background-color: rgba(98, 0, 238, 1.000);");
        assert_ne!(elevated_background(PURPLE_500, 2.0), flat);
    }
}
