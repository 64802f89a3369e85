//! Header split and render — the line transformation at the heart of docsync.
//!
//! A source file is two contiguous regions: the *header*, the maximal leading
//! run of `//!`-prefixed lines, and the *body*, everything from the first
//! non-marker line (inclusive) to end of file. The header is rebuilt from
//! README lines on every sync; the body is never touched.

use crate::types::DOC_MARKER;

/// Split source content into `(discarded header line count, body)`.
///
/// The body is returned as a subslice of the input, so byte-for-byte
/// preservation holds by construction. An empty file, or one where every line
/// carries the marker, has an empty body.
pub fn split_body(source: &str) -> (usize, &str) {
    let mut header_lines = 0;
    let mut offset = 0;
    for line in source.split_inclusive('\n') {
        if !line.starts_with(DOC_MARKER) {
            break;
        }
        header_lines += 1;
        offset += line.len();
    }
    (header_lines, &source[offset..])
}

/// Render README lines as a fresh documentation header.
///
/// A line with content becomes the marker, one space, then the line verbatim
/// (its terminator included). A blank line becomes the bare marker followed by
/// the line's own terminator, so no trailing whitespace is ever emitted.
pub fn render_header(readme: &str) -> String {
    let mut out = String::with_capacity(readme.len() + 64);
    for line in readme.split_inclusive('\n') {
        out.push_str(DOC_MARKER);
        if line.trim_end().is_empty() {
            out.push_str(terminator(line));
        } else {
            out.push(' ');
            out.push_str(line);
        }
    }
    out
}

/// Compose the output file: rendered header first, untouched body after.
pub fn compose(header: &str, body: &str) -> String {
    let mut out = String::with_capacity(header.len() + body.len());
    out.push_str(header);
    out.push_str(body);
    out
}

fn terminator(line: &str) -> &str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
