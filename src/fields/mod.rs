//! Keeps the editable text representations consistent with the canonical
//! color while the user may be typing into one of them.
//!
//! Each hex field carries an edit state. A field in `UserEditing` is never
//! overwritten by a refresh, so an in-progress shorthand like `#abc` is not
//! replaced by the expanded six-digit form under the user's cursor. The state
//! is per field: editing one field does not block updates to the others.

pub mod hex;

use crate::config::RgbDisplay;
use crate::geometry::Color;

pub use hex::{format_hex_full, format_hex_short, parse_hex_digits};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    HexFull,
    HexShort,
    Rgb,
}

/// Per-field edit suppression. `UserEditing` replaces the historical
/// "blocked" boolean so the lock lifecycle is explicit in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    UserEditing,
}

/// What applying a user edit did to the canonical color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// A new canonical color should be committed.
    Committed(Color),
    /// The text is not at a committing length yet; nothing changes.
    Ignored,
}

#[derive(Debug, Default)]
pub struct FieldSync {
    hex_full: String,
    hex_short: String,
    rgb: String,
    hex_full_edit: EditState,
    hex_short_edit: EditState,
}

impl FieldSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regenerates every representation from `color`, skipping fields the
    /// user is editing.
    pub fn refresh(&mut self, color: Color, display: RgbDisplay) {
        if self.hex_full_edit == EditState::Idle {
            self.hex_full = format_hex_full(color);
        }
        if self.hex_short_edit == EditState::Idle {
            self.hex_short = format_hex_short(color);
        }
        self.rgb = format_rgb(color, display);
    }

    pub fn displayed(&self, field: Field) -> &str {
        match field {
            Field::HexFull => &self.hex_full,
            Field::HexShort => &self.hex_short,
            Field::Rgb => &self.rgb,
        }
    }

    pub fn edit_state(&self, field: Field) -> EditState {
        match field {
            Field::HexFull => self.hex_full_edit,
            Field::HexShort => self.hex_short_edit,
            Field::Rgb => EditState::Idle,
        }
    }

    /// Clears the field's lock when editing focus leaves it; the field picks
    /// up the canonical color again on the next refresh.
    pub fn focus_left(&mut self, field: Field) {
        match field {
            Field::HexFull => self.hex_full_edit = EditState::Idle,
            Field::HexShort => self.hex_short_edit = EditState::Idle,
            Field::Rgb => {}
        }
    }

    /// Keystroke filter for the hex fields: hex digits, `#` and backspace
    /// reach the text buffer, everything else is silently discarded.
    pub fn allow_key(&self, field: Field, key: char) -> bool {
        match field {
            Field::HexFull | Field::HexShort => {
                key.is_ascii_hexdigit() || key == '#' || key == '\u{8}'
            }
            Field::Rgb => false,
        }
    }

    /// Applies an edit of the `#RRGGBB` field. Commits at length 7, or at
    /// length 4 as shorthand (locking the field so the typed text survives
    /// the refresh). Garbage at a committing length falls soft to black.
    pub fn apply_hex_full_edit(&mut self, text: &str) -> EditOutcome {
        if !text.starts_with('#') {
            return EditOutcome::Ignored;
        }
        self.hex_full = text.to_string();
        match text.len() {
            7 => EditOutcome::Committed(parse_or_black(&text[1..])),
            4 => match parse_hex_digits(&text[1..]) {
                Some(color) => {
                    self.hex_full_edit = EditState::UserEditing;
                    EditOutcome::Committed(color)
                }
                None => EditOutcome::Committed(Color::BLACK),
            },
            _ => EditOutcome::Ignored,
        }
    }

    /// Applies an edit of the bare six-digit field. Commits at length 6, or
    /// at length 3 as shorthand with the same locking rule.
    pub fn apply_hex_short_edit(&mut self, text: &str) -> EditOutcome {
        self.hex_short = text.to_string();
        match text.len() {
            6 => EditOutcome::Committed(parse_or_black(text)),
            3 => match parse_hex_digits(text) {
                Some(color) => {
                    self.hex_short_edit = EditState::UserEditing;
                    EditOutcome::Committed(color)
                }
                None => EditOutcome::Committed(Color::BLACK),
            },
            _ => EditOutcome::Ignored,
        }
    }
}

fn parse_or_black(digits: &str) -> Color {
    parse_hex_digits(digits).unwrap_or(Color::BLACK)
}

fn format_rgb(color: Color, display: RgbDisplay) -> String {
    match display {
        RgbDisplay::Byte => format!("{}, {}, {}", color.r, color.g, color.b),
        RgbDisplay::Float => format!(
            "{}, {}, {}",
            format_float_channel(color.r),
            format_float_channel(color.g),
            format_float_channel(color.b)
        ),
    }
}

/// Channel/255 to at most two decimals, trailing zeros trimmed, `f` suffix.
fn format_float_channel(value: u8) -> String {
    let mut text = format!("{:.2}", f64::from(value) / 255.0);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text.push('f');
    text
}
