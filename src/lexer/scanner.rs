/// Lexer state while walking SQL bytes.
///
/// Quoted states remember where they opened so an unterminated literal can be reported
/// at its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum State {
    Normal,
    Quoted { quote: u8, start: usize },
    Bracketed { start: usize },
    LineComment,
    BlockComment,
}

impl State {
    pub(super) fn describe_unterminated(self) -> Option<(usize, &'static str)> {
        match self {
            State::Quoted { quote: b'\'', start } => Some((start, "unterminated string literal")),
            State::Quoted { start, .. } | State::Bracketed { start } => {
                Some((start, "unterminated quoted identifier"))
            }
            State::Normal | State::LineComment | State::BlockComment => None,
        }
    }
}

/// End index of the run of ASCII digits starting at `start` (equal to `start` if none).
pub(super) fn scan_digits_end(bytes: &[u8], start: usize) -> usize {
    let mut idx = start;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    idx
}

/// End index of the run of identifier characters starting at `start`.
pub(super) fn scan_identifier_end(bytes: &[u8], start: usize) -> usize {
    let mut idx = start;
    while idx < bytes.len() && super::parsers::is_identifier_char(bytes[idx]) {
        idx += 1;
    }
    idx
}
