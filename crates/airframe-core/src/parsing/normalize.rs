/// Strip footnote markers and non-breaking spaces from a cell or item text.
///
/// Steps:
/// 1. Drop every `[...]` span (citation markers such as `[12]` or `[note 3]`)
/// 2. Replace U+00A0 with a plain space
/// 3. Trim surrounding whitespace
pub fn clean_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(open) = rest.find('[') {
        match rest[open..].find(']') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);

    out.replace('\u{a0}', " ").trim().to_string()
}

/// Clean a row or item label and lowercase it for substring matching.
pub fn normalize_label(raw: &str) -> String {
    clean_text(raw).to_lowercase()
}

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
