//! Frame layout and drawing
//!
//! ```text
//!  tapcalc                  [t] light  [q] quit
//! ┌──────────────────────────────────────────┐  equation
//! │                                    7 + 5 │  value
//! │                                       12 │  last result
//! │                               6 ÷ 4 = 1.5│
//! keypad (5 x 4 buttons, each with a shadow row)
//! ```

use crate::display::DisplayState;
use crate::keypad::{Area, Keypad, KeypadButton};
use crate::theme::Palette;

use super::app::TuiApp;
use super::grid::{Cell, Style, TextGrid};

/// Rows used by the display panel
const DISPLAY_ROWS: u16 = 4;

/// Widest keypad drawn, in cells
const MAX_KEYPAD_WIDTH: u16 = 48;

/// Screen regions for one terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Title and hint row
    pub header: Area,
    /// Equation, value and subtitle
    pub display: Area,
    /// Button grid
    pub keypad: Area,
}

impl Layout {
    /// Splits a terminal of the given size
    #[must_use]
    pub fn compute(width: u16, height: u16) -> Self {
        let inner_width = width.saturating_sub(2);
        let header = Area::new(1, 0, inner_width, 1.min(height));
        let display = Area::new(1, 1, inner_width, DISPLAY_ROWS.min(height.saturating_sub(1)));

        let keypad_top = 1 + DISPLAY_ROWS + 1;
        let keypad_rows = height.saturating_sub(keypad_top) / 5 * 5;
        let keypad_width = inner_width.min(MAX_KEYPAD_WIDTH) / 4 * 4;
        let keypad_x = 1 + inner_width.saturating_sub(keypad_width) / 2;
        let keypad = Area::new(keypad_x, keypad_top, keypad_width, keypad_rows);

        Self {
            header,
            display,
            keypad,
        }
    }
}

/// Draws a full frame for the app
pub fn render(app: &TuiApp, grid: &mut TextGrid) {
    let state = app.snapshot();
    let palette = state.theme.palette();
    let layout = app.layout();

    grid.fill(grid.area(), Style::new(palette.text, palette.background));
    render_header(grid, layout.header, &state, &palette);
    render_display(grid, layout.display, &state, &palette);
    for button in app.keypad().buttons() {
        let pressed = app.highlighted() == Some(button.key);
        render_button(grid, app.keypad(), layout.keypad, button, pressed, &palette);
    }
}

fn render_header(grid: &mut TextGrid, area: Area, state: &DisplayState, palette: &Palette) {
    if area.height == 0 {
        return;
    }
    let style = Style::new(palette.subtitle_text, palette.background);
    grid.write_str(area.x, area.y, "tapcalc", style.bold());
    let hint = format!("[t] {} mode  [q] quit", state.theme.toggle());
    grid.write_right(area, area.y, &hint, style);
}

fn render_display(grid: &mut TextGrid, area: Area, state: &DisplayState, palette: &Palette) {
    if area.height == 0 {
        return;
    }
    let panel = Style::new(palette.text, palette.display_bg);
    grid.fill(area, panel);

    let text_area = Area::new(area.x + 1, area.y, area.width.saturating_sub(2), area.height);
    let rows = [
        (0, state.equation.clone(), panel),
        (1, value_text(state, text_area.width), panel.bold()),
        (2, state.last_result.clone(), Style::new(palette.subtitle_text, palette.display_bg)),
    ];
    for (offset, text, style) in rows {
        if offset < area.height {
            grid.write_right(text_area, area.y + offset, &text, style);
        }
    }
}

/// Full-size values are letter-spaced when they fit; shrunk values are not.
fn value_text(state: &DisplayState, width: u16) -> String {
    if state.is_full_size() {
        let spaced: String = state
            .value
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ");
        if spaced.chars().count() <= width as usize {
            return spaced;
        }
    }
    state.value.clone()
}

fn render_button(
    grid: &mut TextGrid,
    keypad: &Keypad,
    keypad_area: Area,
    button: &KeypadButton,
    pressed: bool,
    palette: &Palette,
) {
    let cell = keypad.button_area(keypad_area, button);
    if cell.width < 2 || cell.height == 0 {
        return;
    }
    let colors = palette.button(button.style);

    // One column of gap on the right, the last row is the drop shadow
    let face_height = if cell.height > 1 { cell.height - 1 } else { 1 };
    let face = Area::new(cell.x, cell.y, cell.width - 1, face_height);
    let fill = if pressed { colors.shadow } else { colors.fill };
    grid.fill(face, Style::new(colors.text, fill));

    if cell.height > 1 {
        let shadow_y = cell.y + face_height;
        for x in face.x..face.x + face.width {
            grid.set(x, shadow_y, Cell::blank(colors.text, colors.shadow));
        }
    }

    let label_y = face.y + face.height / 2;
    grid.write_centered(face, label_y, &button.key.label(), Style::new(colors.text, fill).bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Key;
    use crate::theme::Theme;

    fn frame(app: &TuiApp) -> TextGrid {
        let (w, h) = app.size();
        let mut grid = TextGrid::new(w, h, Cell::blank(Palette::DARK.text, Palette::DARK.background));
        render(app, &mut grid);
        grid
    }

    // ===== Layout tests =====

    #[test]
    fn test_layout_standard_terminal() {
        let layout = Layout::compute(80, 24);
        assert_eq!(layout.header, Area::new(1, 0, 78, 1));
        assert_eq!(layout.display, Area::new(1, 1, 78, 4));
        assert_eq!(layout.keypad.y, 6);
        assert_eq!(layout.keypad.height, 15);
        assert_eq!(layout.keypad.width, 48);
        assert_eq!(layout.keypad.x, 1 + (78 - 48) / 2);
    }

    #[test]
    fn test_layout_tiny_terminal() {
        let layout = Layout::compute(10, 5);
        assert_eq!(layout.keypad.height, 0);
        assert_eq!(layout.keypad.width, 8);
    }

    // ===== Frame tests =====

    #[test]
    fn test_frame_shows_initial_state() {
        let app = TuiApp::new(Theme::Dark, 80, 24);
        let lines = frame(&app).to_lines();
        assert!(lines[0].contains("tapcalc"));
        assert!(lines[0].contains("[t] light mode"));
        assert!(lines[2].ends_with('0'));
    }

    #[test]
    fn test_frame_shows_equation_value_and_subtitle() {
        let mut app = TuiApp::new(Theme::Dark, 80, 24);
        app.press_keys(&[Key::Digit(6), Key::Operator(crate::core::Operator::Divide), Key::Digit(4)]);
        let lines = frame(&app).to_lines();
        assert!(lines[1].trim_end().ends_with("6 / 4"));
        assert!(lines[2].trim_end().ends_with('4'));

        app.press_keys(&[Key::Equals]);
        let lines = frame(&app).to_lines();
        assert!(lines[2].trim_end().ends_with("1 . 5"));
        assert!(lines[3].trim_end().ends_with("6 ÷ 4 = 1.5"));
    }

    #[test]
    fn test_frame_long_value_is_not_spaced() {
        let mut app = TuiApp::new(Theme::Dark, 80, 24);
        app.press_keys(&[Key::Digit(1); 10]);
        let lines = frame(&app).to_lines();
        assert!(lines[2].trim_end().ends_with("1111111111"));
    }

    #[test]
    fn test_frame_draws_every_label() {
        let app = TuiApp::new(Theme::Light, 80, 24);
        let text = frame(&app).to_lines().join("\n");
        for key in Key::ALL {
            assert!(text.contains(&key.label()), "missing {key}");
        }
    }

    #[test]
    fn test_frame_uses_theme_palette() {
        let app = TuiApp::new(Theme::Light, 80, 24);
        let grid = frame(&app);
        assert_eq!(grid.get(0, 0).unwrap().bg, Palette::LIGHT.background);
        assert_eq!(grid.get(1, 1).unwrap().bg, Palette::LIGHT.display_bg);
    }

    #[test]
    fn test_pressed_button_uses_shadow_color() {
        let mut app = TuiApp::new(Theme::Dark, 80, 24);
        app.press_keys(&[Key::Clear]);
        let grid = frame(&app);
        let layout = app.layout();
        let cell = grid.get(layout.keypad.x, layout.keypad.y).unwrap();
        assert_eq!(cell.bg, Palette::DARK.special.shadow);
    }

    #[test]
    fn test_value_text_spacing() {
        let state = TuiApp::new(Theme::Dark, 80, 24).snapshot();
        assert_eq!(value_text(&state, 10), "0");
        let mut wide = state;
        wide.value = "12".to_string();
        assert_eq!(value_text(&wide, 10), "1 2");
        assert_eq!(value_text(&wide, 2), "12");
    }
}
