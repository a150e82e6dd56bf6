//! Attribute selectors for widget queries.
//!
//! Supports:
//! - `"[data-testid='rating']"` - by test ID
//! - `"[aria-label='Product rating']"` - by accessible name
//! - `"[role='slider']"` - by accessible role

use starling_core::{AccessibleRole, Widget};

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by test ID (e.g., `[data-testid='foo']`)
    TestId(String),
    /// Match by accessible name (e.g., `[aria-label='foo']`)
    Label(String),
    /// Match by accessible role (e.g., `[role='slider']`)
    Role(String),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        SelectorParser::new(input).parse()
    }

    /// Check if this selector matches a widget.
    #[must_use]
    pub fn matches(&self, widget: &dyn Widget) -> bool {
        match self {
            Self::TestId(id) => widget.test_id() == Some(id.as_str()),
            Self::Label(name) => widget.accessible_name() == Some(name.as_str()),
            Self::Role(role) => role_name(widget.accessible_role()) == role,
        }
    }
}

const fn role_name(role: AccessibleRole) -> &'static str {
    match role {
        AccessibleRole::Generic => "generic",
        AccessibleRole::Image => "img",
        AccessibleRole::Slider => "slider",
    }
}

/// Selector parser.
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a new parser.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse the selector.
    pub fn parse(&mut self) -> Result<Selector, SelectorError> {
        self.skip_whitespace();

        match self.peek_char() {
            None => Err(SelectorError::Empty),
            Some('[') => {
                let selector = self.parse_attribute()?;
                self.skip_whitespace();
                match self.peek_char() {
                    None => Ok(selector),
                    Some(c) => Err(SelectorError::UnexpectedChar(c)),
                }
            }
            Some(c) => Err(SelectorError::UnexpectedChar(c)),
        }
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // Skip '['

        let name = self.read_until_any(&['=', ']']).trim().to_string();
        if name.is_empty() || self.peek_char() != Some('=') {
            return Err(SelectorError::InvalidAttribute);
        }
        self.advance(); // Skip '='

        let quote = match self.peek_char() {
            Some(q @ ('\'' | '"')) => {
                self.advance();
                Some(q)
            }
            _ => None,
        };

        let value = match quote {
            Some(q) => self.read_until_any(&[q]),
            None => self.read_until_any(&[']']),
        };

        if let Some(q) = quote {
            if self.peek_char() != Some(q) {
                return Err(SelectorError::UnclosedAttribute);
            }
            self.advance();
        }

        if self.peek_char() != Some(']') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance();

        match name.as_str() {
            "data-testid" => Ok(Selector::TestId(value)),
            "aria-label" => Ok(Selector::Label(value)),
            "role" => Ok(Selector::Role(value)),
            _ => Err(SelectorError::UnknownAttribute(name)),
        }
    }

    fn read_until_any(&mut self, stops: &[char]) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if stops.contains(&c) {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}

/// Selector parsing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Empty selector
    Empty,
    /// Unexpected character
    UnexpectedChar(char),
    /// Invalid attribute syntax
    InvalidAttribute,
    /// Unclosed attribute bracket or quote
    UnclosedAttribute,
    /// Attribute name not supported
    UnknownAttribute(String),
}

impl std::fmt::Display for SelectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty selector"),
            Self::UnexpectedChar(c) => write!(f, "unexpected character: '{c}'"),
            Self::InvalidAttribute => write!(f, "invalid attribute syntax"),
            Self::UnclosedAttribute => write!(f, "unclosed attribute bracket"),
            Self::UnknownAttribute(name) => write!(f, "unknown attribute: {name}"),
        }
    }
}

impl std::error::Error for SelectorError {}
