/// Normalizes heading text into a base slug.
///
/// The text is lowercased with the full Unicode mapping, characters that are
/// not letters or digits are dropped, and runs of whitespace or hyphens
/// become a single hyphen. Leading and trailing hyphens never appear in the
/// output. Letters and digits from non-Latin scripts are kept as-is rather
/// than transliterated.
///
/// Text with no letters or digits at all normalizes to the empty string.
/// The input is used as given, with no NFC/NFD conversion; combining marks
/// are dropped, so precomposed (NFC) input is assumed.
///
/// The result is stable: normalizing an already-normalized slug returns it
/// unchanged.
///
/// ## Example
/// ```rs
/// use ancre::slugify;
///
/// assert_eq!(slugify("Hello World!"), "hello-world");
/// assert_eq!(slugify("  Héllo   Wörld  "), "héllo-wörld");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() || ch == '-' {
            // Separators only count once something has been emitted, which
            // trims leading hyphens and collapses runs in the same stroke.
            pending_hyphen = !slug.is_empty();
            continue;
        }

        if !ch.is_alphanumeric() {
            continue;
        }

        if pending_hyphen {
            slug.push('-');
            pending_hyphen = false;
        }

        slug.push(ch);
    }

    slug
}
