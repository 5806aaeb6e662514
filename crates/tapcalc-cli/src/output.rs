//! Output formatting for `press`, `keypad` and `palette`

use console::style;
use serde::Serialize;
use tapcalc::display::DisplayState;
use tapcalc::keypad::Keypad;
use tapcalc::theme::{Palette, Rgb, Theme};

use crate::config::OutputFormat;
use crate::error::CliResult;

/// Display state after one press of a replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Label of the key pressed
    pub key: String,
    /// What the display shows afterwards
    pub state: DisplayState,
}

/// Width of the label column in text output
const LABEL_WIDTH: usize = 10;

fn label(name: &str, color: bool) -> String {
    let padded = format!("{name:<LABEL_WIDTH$}");
    style(padded).dim().force_styling(color).to_string()
}

/// Renders one display state
pub fn render_state(state: &DisplayState, format: OutputFormat, color: bool) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(state)?),
        OutputFormat::Text => {
            let value = style(&state.value).bold().force_styling(color);
            Ok([
                format!("{}{}", label("equation", color), state.equation.trim_end()),
                format!("{}{value}", label("value", color)),
                format!("{}{}", label("font size", color), state.font_size),
                format!("{}{}", label("last", color), state.last_result),
                format!("{}{}", label("theme", color), state.theme),
            ]
            .join("\n"))
        }
    }
}

/// Renders the display after every press of a replay
pub fn render_steps(steps: &[Step], format: OutputFormat, color: bool) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(steps)?),
        OutputFormat::Text => Ok(steps
            .iter()
            .map(|step| {
                let key = style(format!("{:>4}", step.key)).cyan().force_styling(color);
                format!("{key}  {:>16}  {}", step.state.value, step.state.equation)
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Renders the keypad as rows of bracketed labels
pub fn render_keypad(keypad: &Keypad) -> String {
    keypad.to_text().join("\n")
}

/// Named color slots of a palette, in display order
pub fn palette_slots(palette: &Palette) -> Vec<(&'static str, Rgb)> {
    vec![
        ("background", palette.background),
        ("display_bg", palette.display_bg),
        ("text", palette.text),
        ("subtitle_text", palette.subtitle_text),
        ("digit_button", palette.digit.fill),
        ("digit_shadow", palette.digit.shadow),
        ("digit_text", palette.digit.text),
        ("operation_button", palette.operation.fill),
        ("operation_shadow", palette.operation.shadow),
        ("operation_text", palette.operation.text),
        ("special_button", palette.special.fill),
        ("special_shadow", palette.special.shadow),
        ("special_text", palette.special.text),
    ]
}

/// Renders the colors of a theme
pub fn render_palette(theme: Theme, format: OutputFormat, color: bool) -> CliResult<String> {
    let slots = palette_slots(&theme.palette());
    match format {
        OutputFormat::Json => {
            let colors: serde_json::Map<String, serde_json::Value> = slots
                .into_iter()
                .map(|(name, rgb)| (name.to_string(), rgb.to_string().into()))
                .collect();
            let doc = serde_json::json!({ "theme": theme, "colors": colors });
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        OutputFormat::Text => {
            let mut lines = vec![format!("{} theme", style(theme).bold().force_styling(color))];
            lines.extend(slots.into_iter().map(|(name, rgb)| {
                format!("  {:<18}{rgb}", style(name).force_styling(color))
            }));
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tapcalc::prelude::*;

    fn state(tokens: &str) -> DisplayState {
        let mut calc = Calculator::new();
        calc.press_tokens(tokens).unwrap();
        calc.snapshot()
    }

    // ===== State output =====

    #[test]
    fn test_state_text() {
        let text = render_state(&state("7 + 5 ="), OutputFormat::Text, false).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0].trim_end(), "equation");
        assert_eq!(lines[1], "value     12");
        assert_eq!(lines[2], "font size 80");
        assert_eq!(lines[3], "last      7 + 5 = 12");
        assert_eq!(lines[4], "theme     dark");
    }

    #[test]
    fn test_state_text_shows_pending_equation() {
        let text = render_state(&state("6 ÷ 4"), OutputFormat::Text, false).unwrap();
        assert!(text.contains("equation  6 / 4"));
    }

    #[test]
    fn test_state_json() {
        let json = render_state(&state("6 ÷ 4 ="), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["value"], "1.5");
        assert_eq!(value["last_result"], "6 ÷ 4 = 1.5");
        assert_eq!(value["font_size"], 80);
        assert_eq!(value["theme"], "dark");
    }

    #[test]
    fn test_plain_text_has_no_escape_codes() {
        let text = render_state(&state("1"), OutputFormat::Text, false).unwrap();
        assert!(!text.contains('\u{1b}'));
    }

    // ===== Step output =====

    #[test]
    fn test_steps_text() {
        let steps = vec![
            Step {
                key: "7".to_string(),
                state: state("7"),
            },
            Step {
                key: "+".to_string(),
                state: state("7 +"),
            },
        ];
        let text = render_steps(&steps, OutputFormat::Text, false).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("   7"));
        assert!(lines[0].ends_with("7  7"));
        assert!(lines[1].ends_with("7 +"));
    }

    #[test]
    fn test_steps_json() {
        let steps = vec![Step {
            key: "C".to_string(),
            state: state("C"),
        }];
        let json = render_steps(&steps, OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["key"], "C");
        assert_eq!(value[0]["state"]["value"], "0");
    }

    // ===== Keypad and palette output =====

    #[test]
    fn test_keypad_text() {
        let text = render_keypad(&Keypad::new());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("[ C ]"));
        assert!(lines[0].contains("[+/-]"));
        assert!(lines[4].contains("[ = ]"));
    }

    #[test]
    fn test_palette_slots_cover_every_color() {
        let slots = palette_slots(&Palette::DARK);
        assert_eq!(slots.len(), 13);
        assert_eq!(slots[0], ("background", Palette::DARK.background));
    }

    #[test]
    fn test_palette_text() {
        let text = render_palette(Theme::Light, OutputFormat::Text, false).unwrap();
        assert!(text.starts_with("light theme"));
        assert!(text.contains("background"));
        assert!(text.contains("#f8f9fa"));
        assert!(text.contains("#0088ff"));
    }

    #[test]
    fn test_palette_json() {
        let json = render_palette(Theme::Dark, OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["colors"]["background"], "#101014");
        assert_eq!(value["colors"]["special_text"], "#1a1a23");
    }
}
