/// Normalizes free text before any keyword matching.
///
/// Lowercases, drops every character that is not an ASCII letter or
/// whitespace (digits and punctuation included, so "5 years" becomes
/// "years"), then collapses whitespace runs to a single space and trims.
/// Total: every input yields a string, possibly empty.
///
/// Whitespace is the Unicode `White_Space` set plus the ASCII information
/// separators U+001C–U+001F, so "a\x1cb" becomes "a b".
pub fn normalize(text: &str) -> String {
    let letters: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_alphabetic() || is_space(c))
        .collect();

    letters
        .split(is_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
