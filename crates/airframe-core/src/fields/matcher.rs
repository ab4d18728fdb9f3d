/// A labelled entry: a table row (label, cell of the chosen column) or a
/// bulleted item (bold lead phrase, full item text). Labels are lowercase.
pub type Entry<'a> = (&'a str, &'a str);

/// True when some label contains one of the keywords.
pub fn has_label<L: AsRef<str>, K: AsRef<str>>(labels: &[L], keywords: &[K]) -> bool {
    keywords.iter().any(|keyword| {
        let keyword = keyword.as_ref().to_lowercase();
        labels.iter().any(|label| label.as_ref().contains(&keyword))
    })
}

/// First non-empty text whose label contains a keyword and no excluded term.
///
/// Keywords are tried in order; for each keyword the entries are scanned in
/// order. An earlier keyword always wins over a later one, even when the later
/// keyword's row comes first in the document.
pub fn find<'a, K: AsRef<str>, E: AsRef<str>>(
    entries: &[Entry<'a>],
    keywords: &[K],
    exclude: &[E],
) -> Option<&'a str> {
    find_map(entries, keywords, exclude, |text| {
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    })
}

/// Like [`find`], but keeps scanning past matching entries whose text `parse`
/// rejects.
pub fn find_map<'a, K, E, T, F>(
    entries: &[Entry<'a>],
    keywords: &[K],
    exclude: &[E],
    mut parse: F,
) -> Option<T>
where
    K: AsRef<str>,
    E: AsRef<str>,
    F: FnMut(&'a str) -> Option<T>,
{
    let exclude: Vec<String> = exclude.iter().map(|e| e.as_ref().to_lowercase()).collect();

    for keyword in keywords {
        let keyword = keyword.as_ref().to_lowercase();
        for &(label, text) in entries {
            if !label.contains(&keyword) {
                continue;
            }
            if exclude.iter().any(|term| label.contains(term.as_str())) {
                continue;
            }
            if let Some(value) = parse(text) {
                return Some(value);
            }
        }
    }

    None
}
