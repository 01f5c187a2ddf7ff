//! Formatting state machine driving the RTF writer.
//!
//! The writer tracks which attributes are active in the output stream and
//! whether the last thing written was a control word (which must be
//! separated from following text by a space). [`step`] is the pure
//! transition: given the current state and the style of the next character
//! it returns the new state and the toggle commands to emit, in the fixed
//! order bold, italic, underline.

use super::types::{Attribute, Style};
use smallvec::SmallVec;

/// Toggle commands emitted for one character (at most one per attribute).
pub type Toggles = SmallVec<[Toggle; 3]>;

/// A single emitted toggle command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    /// Attribute being switched
    pub attribute: Attribute,
    /// New value of the attribute
    pub enabled: bool,
    /// Whether a space precedes the control word
    pub leading_space: bool,
}

impl Toggle {
    /// Write the command as it appears in the stream, e.g. ` \i0`.
    pub fn write_to(&self, out: &mut String) {
        if self.leading_space {
            out.push(' ');
        }
        out.push('\\');
        out.push_str(self.attribute.control_word());
        if !self.enabled {
            out.push('0');
        }
    }
}

/// Encoder state between two characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncoderState {
    /// Attributes active in the output stream
    pub active: Style,
    /// The last token written was a control word
    pub needs_space: bool,
}

impl EncoderState {
    /// State at the start of every paragraph.
    pub const START: EncoderState = EncoderState {
        active: Style::PLAIN,
        needs_space: false,
    };

    /// Record that literal text is about to be written.
    ///
    /// Returns the state after the text and whether a separating space must
    /// precede it.
    #[inline]
    pub fn text(self) -> (EncoderState, bool) {
        (
            EncoderState {
                needs_space: false,
                ..self
            },
            self.needs_space,
        )
    }
}

/// Advance the state machine to `next`.
///
/// Attributes are compared one by one in [`Attribute::ALL`] order. Each
/// change emits a toggle preceded by a space when `needs_space` was already
/// set, then sets `needs_space`. The flag is a boolean, so the first toggle
/// after literal text is unspaced and every later one in the same cluster is
/// spaced.
pub fn step(state: EncoderState, next: Style) -> (EncoderState, Toggles) {
    let mut state = state;
    let mut toggles = Toggles::new();

    for attribute in Attribute::ALL {
        let enabled = next.get(attribute);
        if enabled != state.active.get(attribute) {
            toggles.push(Toggle {
                attribute,
                enabled,
                leading_space: state.needs_space,
            });
            state.active.set(attribute, enabled);
            state.needs_space = true;
        }
    }

    (state, toggles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(toggles: &[Toggle]) -> String {
        let mut out = String::new();
        for toggle in toggles {
            toggle.write_to(&mut out);
        }
        out
    }

    #[test]
    fn test_no_change_emits_nothing() {
        let (state, toggles) = step(EncoderState::START, Style::PLAIN);
        assert!(toggles.is_empty());
        assert_eq!(state, EncoderState::START);
    }

    #[test]
    fn test_single_toggle_sets_needs_space() {
        let (state, toggles) = step(EncoderState::START, Style::BOLD);
        assert_eq!(render(&toggles), "\\b");
        assert_eq!(state.active, Style::BOLD);
        assert!(state.needs_space);

        let (state, space) = state.text();
        assert!(space);
        assert!(!state.needs_space);
    }

    #[test]
    fn test_cluster_order_and_spacing() {
        let (state, toggles) = step(EncoderState::START, Style::new(true, true, true));
        assert_eq!(render(&toggles), "\\b \\i \\ul");

        let (state, _) = state.text();
        let (_, toggles) = step(state, Style::ITALIC);
        assert_eq!(render(&toggles), "\\b0 \\ul0");
    }

    #[test]
    fn test_order_is_fixed_regardless_of_change() {
        let start = EncoderState {
            active: Style::UNDERLINE,
            needs_space: false,
        };
        let (_, toggles) = step(start, Style::BOLD);
        let attrs: Vec<_> = toggles.iter().map(|t| t.attribute).collect();
        assert_eq!(attrs, vec![Attribute::Bold, Attribute::Underline]);
        assert_eq!(render(&toggles), "\\b \\ul0");
    }

    #[test]
    fn test_pending_space_carries_into_first_toggle() {
        let state = EncoderState {
            active: Style::BOLD,
            needs_space: true,
        };
        let (state, toggles) = step(state, Style::PLAIN);
        assert_eq!(render(&toggles), " \\b0");
        assert!(state.needs_space);
    }
}
