//! Board configuration intake: the pre-game form that collects and validates
//! the board dimensions before any engine exists.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{info, warn};
use thiserror::Error;

use crate::config::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DimensionError, GridSize, MAX_BOARD_SIDE,
};

/// Which form field has keyboard focus.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Field {
    Width,
    Height,
}

impl Field {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Width => Self::Height,
            Self::Height => Self::Width,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum FieldError {
    #[error("enter a whole number of at least 1")]
    NotPositiveInteger,
    #[error("enter a number no larger than {max}")]
    TooLarge { max: u16 },
}

/// Per-field outcome of a rejected submission.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("board dimensions rejected (width: {width:?}, height: {height:?})")]
pub struct IntakeError {
    pub width: Option<FieldError>,
    pub height: Option<FieldError>,
}

impl From<DimensionError> for IntakeError {
    fn from(error: DimensionError) -> Self {
        let flagged = Some(FieldError::NotPositiveInteger);
        match error {
            DimensionError::ZeroWidth => Self {
                width: flagged,
                height: None,
            },
            DimensionError::ZeroHeight => Self {
                width: None,
                height: flagged,
            },
        }
    }
}

/// What the form wants the caller to do after a key press.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum IntakeAction {
    /// Keep showing the form.
    Continue,
    /// Dimensions accepted; construct the engine.
    Submit(GridSize),
}

/// Two-field dimension form with per-field error flags.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct IntakeForm {
    width: String,
    height: String,
    focus: Field,
    errors: Option<IntakeError>,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}

impl IntakeForm {
    /// Creates a form prefilled with the given raw field text.
    #[must_use]
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
            focus: Field::Width,
            errors: None,
        }
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Width => &self.width,
            Field::Height => &self.height,
        }
    }

    #[must_use]
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Error flagged on `field` by the last submission, if any.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<FieldError> {
        let errors = self.errors?;
        match field {
            Field::Width => errors.width,
            Field::Height => errors.height,
        }
    }

    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
    }

    /// Edits the form or submits it.
    ///
    /// Any printable character is accepted while typing; validation only
    /// happens on submit.
    pub fn handle_key(&mut self, key: KeyEvent) -> IntakeAction {
        match key.code {
            KeyCode::Enter => {
                if let Ok(size) = self.submit() {
                    return IntakeAction::Submit(size);
                }
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.other();
            }
            KeyCode::Backspace => {
                self.field_mut(self.focus).pop();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.field_mut(self.focus).push(ch);
            }
            _ => {}
        }

        IntakeAction::Continue
    }

    /// Validates both fields, flagging every offending one.
    ///
    /// Flags from an earlier submission are cleared first.
    pub fn submit(&mut self) -> Result<GridSize, IntakeError> {
        self.errors = None;

        let result = match (parse_dimension(&self.width), parse_dimension(&self.height)) {
            (Ok(width), Ok(height)) => GridSize::new(width, height).map_err(IntakeError::from),
            (width, height) => Err(IntakeError {
                width: width.err(),
                height: height.err(),
            }),
        };

        match result {
            Ok(size) => {
                info!(
                    "board dimensions accepted: {}x{}",
                    size.width(),
                    size.height()
                );
                Ok(size)
            }
            Err(error) => {
                warn!(
                    "board dimensions rejected: width={:?} height={:?}",
                    self.width, self.height
                );
                self.errors = Some(error);
                Err(error)
            }
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Width => &mut self.width,
            Field::Height => &mut self.height,
        }
    }
}

/// Parses a dimension made only of ASCII digits, between 1 and [`MAX_BOARD_SIDE`].
pub fn parse_dimension(raw: &str) -> Result<u16, FieldError> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(FieldError::NotPositiveInteger);
    }

    let digits = raw.trim_start_matches('0');
    if digits.is_empty() {
        return Err(FieldError::NotPositiveInteger);
    }

    match digits.parse::<u16>() {
        Ok(value) if value <= MAX_BOARD_SIDE => Ok(value),
        _ => Err(FieldError::TooLarge {
            max: MAX_BOARD_SIDE,
        }),
    }
}
