use super::scanner::{scan_digits_end, scan_identifier_end};

pub(super) fn is_line_comment_start(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx) == Some(&b'-') && bytes.get(idx + 1) == Some(&b'-')
}

pub(super) fn is_block_comment_start(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx) == Some(&b'/') && bytes.get(idx + 1) == Some(&b'*')
}

pub(super) fn is_block_comment_end(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx) == Some(&b'*') && bytes.get(idx + 1) == Some(&b'/')
}

// Non-ASCII bytes are identifier characters, so a run never ends inside a UTF-8 sequence.
pub(super) fn is_identifier_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

pub(super) fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

/// If a bind parameter starts at `idx`, return the index one past its end.
///
/// `?` takes any digits that follow it. `:`, `@`, `$` and `#` need at least one identifier
/// character, otherwise the sigil is ordinary text.
pub(super) fn bind_parameter_end(bytes: &[u8], idx: usize) -> Option<usize> {
    match bytes.get(idx)? {
        b'?' => Some(scan_digits_end(bytes, idx + 1)),
        b':' | b'@' | b'$' | b'#' => {
            let end = scan_identifier_end(bytes, idx + 1);
            (end > idx + 1).then_some(end)
        }
        _ => None,
    }
}
