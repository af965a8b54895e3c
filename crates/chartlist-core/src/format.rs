//! Value formatting for table cells.

use chartlist_model::PropertyValue;
use serde::{Deserialize, Serialize};

/// Placeholder shown for property values the host has not fetched yet.
pub const VALUE_NOT_FETCHED: &str = "Value not fetched";

const FIRST_STRONG_ISOLATE: char = '\u{2068}';
const POP_DIRECTIONAL_ISOLATE: char = '\u{2069}';

/// How text is marked for bidirectional rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidiMode {
    /// Raw, unformatted text whose direction is taken from its own content.
    Raw,
    /// Leave the text untouched.
    None,
}

/// The host's value formatter contract.
pub trait ValueFormatter {
    /// Format a property value for display. `None` when there is nothing to show.
    fn format_value(&self, value: &PropertyValue) -> Option<String>;

    fn wrap_for_bidi(&self, text: &str, mode: BidiMode) -> String;

    fn format_count(&self, count: usize) -> String;
}

/// Options for [`DisplayFormatter`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Wrap raw text in Unicode directional isolates.
    pub bidi_isolation: bool,
    /// Fixed number of decimal places for decimal values.
    pub decimal_places: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            bidi_isolation: true,
            decimal_places: None,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bidi_isolation(mut self, enable: bool) -> Self {
        self.bidi_isolation = enable;
        self
    }

    #[must_use]
    pub fn with_decimal_places(mut self, places: Option<usize>) -> Self {
        self.decimal_places = places;
        self
    }
}

/// Default formatter used when the host does not supply its own.
#[derive(Debug, Clone, Default)]
pub struct DisplayFormatter {
    options: FormatOptions,
}

impl DisplayFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }
}

impl ValueFormatter for DisplayFormatter {
    fn format_value(&self, value: &PropertyValue) -> Option<String> {
        let formatted = match value {
            PropertyValue::Text(text) | PropertyValue::Date(text) => text.clone(),
            PropertyValue::Integer(value) => {
                group_thousands(&value.unsigned_abs().to_string(), *value < 0)
            }
            PropertyValue::Decimal(value) if !value.is_finite() => return None,
            PropertyValue::Decimal(value) => match self.options.decimal_places {
                Some(places) => format!("{value:.places$}"),
                None => value.to_string(),
            },
            PropertyValue::Boolean(true) => "Yes".to_string(),
            PropertyValue::Boolean(false) => "No".to_string(),
            PropertyValue::Unfetched => return None,
        };
        (!formatted.is_empty()).then_some(formatted)
    }

    fn wrap_for_bidi(&self, text: &str, mode: BidiMode) -> String {
        match mode {
            BidiMode::Raw if self.options.bidi_isolation => {
                format!("{FIRST_STRONG_ISOLATE}{text}{POP_DIRECTIONAL_ISOLATE}")
            }
            _ => text.to_string(),
        }
    }

    fn format_count(&self, count: usize) -> String {
        group_thousands(&count.to_string(), false)
    }
}

fn group_thousands(digits: &str, negative: bool) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_grouped() {
        let formatter = DisplayFormatter::default();
        assert_eq!(
            formatter.format_value(&PropertyValue::Integer(1_234_567)),
            Some("1,234,567".to_string())
        );
        assert_eq!(
            formatter.format_value(&PropertyValue::Integer(-950)),
            Some("-950".to_string())
        );
        assert_eq!(formatter.format_count(1000), "1,000");
    }

    #[test]
    fn empty_text_formats_to_nothing() {
        let formatter = DisplayFormatter::default();
        assert_eq!(formatter.format_value(&PropertyValue::Text(String::new())), None);
        assert_eq!(formatter.format_value(&PropertyValue::Unfetched), None);
        assert_eq!(formatter.format_value(&PropertyValue::Decimal(f64::NAN)), None);
    }

    #[test]
    fn decimals_respect_fixed_places() {
        let formatter = DisplayFormatter::new(FormatOptions::new().with_decimal_places(Some(2)));
        assert_eq!(
            formatter.format_value(&PropertyValue::Decimal(1.5)),
            Some("1.50".to_string())
        );
    }

    #[test]
    fn raw_text_is_isolated() {
        let formatter = DisplayFormatter::default();
        assert_eq!(formatter.wrap_for_bidi("Age", BidiMode::Raw), "\u{2068}Age\u{2069}");
        assert_eq!(formatter.wrap_for_bidi("Age", BidiMode::None), "Age");

        let plain = DisplayFormatter::new(FormatOptions::new().with_bidi_isolation(false));
        assert_eq!(plain.wrap_for_bidi("Age", BidiMode::Raw), "Age");
    }
}
