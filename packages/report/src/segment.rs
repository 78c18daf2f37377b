//! District block segmentation.
//!
//! The report groups detail lines under `DISTRICT <n>` header lines. A
//! district's block runs from the line after its header up to the next line
//! containing `DISTRICT` (any district) or the end of the text.
//!
//! Header matching is case-sensitive and substring-based, not token-based:
//! a line containing `DISTRICT 41 CONTINUED` still opens district 41's
//! block, and a request for district 4 matches the first `DISTRICT 4x`
//! header it encounters. The upstream layout relies on this, so the
//! matching strategy lives here and nowhere else; swap it in this one
//! function if the source format ever changes.

/// Returns the block of lines belonging to `district`.
///
/// Scans for the first line containing the substring `DISTRICT <district>`
/// (the integer rendered without leading zeros) and collects everything up
/// to, but not including, the next `DISTRICT` line. Only the first header
/// occurrence is honored.
///
/// Returns an empty block when the header never appears. A requested
/// district missing from the text is indistinguishable from one with zero
/// incidents, and callers depend on that: absence is not an error.
#[must_use]
pub fn district_block<'a>(lines: &'a [&'a str], district: u32) -> &'a [&'a str] {
    let marker = format!("DISTRICT {district}");

    let Some(header) = lines.iter().position(|line| line.contains(&marker)) else {
        return &[];
    };

    let body = &lines[header + 1..];
    let end = body
        .iter()
        .position(|line| line.contains("DISTRICT"))
        .unwrap_or(body.len());

    &body[..end]
}
