//! JSONC comment stripping
//!
//! Turns JSON-with-comments into strict JSON by removing `//` line comments
//! and `/* */` block comments. Works line by line, tracking string state with
//! a simple quote-parity scan, so comment markers inside string values on the
//! same line are left alone. Multi-line string values are not supported.

/// Comment opener found on a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opener {
    Line,
    Block,
}

/// Remove comments from JSONC input
///
/// Every surviving source line is emitted followed by `\n`. Lines that fall
/// entirely inside a block comment are dropped.
pub fn strip_comments(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut in_block = false;

    for line in lines(data) {
        let mut rest = line;

        if in_block {
            match find(rest, b"*/") {
                Some(end) => {
                    rest = &rest[end + 2..];
                    in_block = false;
                }
                None => continue,
            }
        }

        loop {
            match find_opener(rest) {
                None => {
                    out.extend_from_slice(rest);
                    break;
                }
                Some((start, Opener::Line)) => {
                    out.extend_from_slice(&rest[..start]);
                    break;
                }
                Some((start, Opener::Block)) => {
                    out.extend_from_slice(&rest[..start]);
                    let body = &rest[start + 2..];
                    match find(body, b"*/") {
                        Some(end) => rest = &body[end + 2..],
                        None => {
                            in_block = true;
                            break;
                        }
                    }
                }
            }
        }

        out.push(b'\n');
    }

    out
}

/// Split on `\n`, dropping a trailing `\r` and the empty tail after a final newline
fn lines(data: &[u8]) -> impl Iterator<Item = &[u8]> {
    let data = data.strip_suffix(b"\n").unwrap_or(data);
    data.split(|b| *b == b'\n')
        .filter(move |_| !data.is_empty())
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// Locate the first `//` or `/*` that is outside a string literal
fn find_opener(line: &[u8]) -> Option<(usize, Opener)> {
    let mut in_string = false;
    let mut escaped = false;

    for (i, &byte) in line.iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match byte {
            b'\\' => escaped = true,
            b'"' => in_string = !in_string,
            b'/' if !in_string => match line.get(i + 1) {
                Some(b'/') => return Some((i, Opener::Line)),
                Some(b'*') => return Some((i, Opener::Block)),
                _ => {}
            },
            _ => {}
        }
    }

    None
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
