//! Whitespace stripping and sign-run collapsing.

/// Removes all whitespace and collapses every run of `+`/`-` characters into
/// a single sign.
///
/// Whitespace is dropped before runs are detected, so `8 - ---+ 2` becomes
/// `8+2`. Every other character is copied through untouched.
pub fn normalize(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut run: Option<char> = None;
    for ch in raw.chars().filter(|ch| !ch.is_whitespace()) {
        match ch {
            '+' | '-' => run = Some(fold_sign(run.unwrap_or('+'), ch)),
            _ => {
                if let Some(sign) = run.take() {
                    normalized.push(sign);
                }
                normalized.push(ch);
            }
        }
    }
    if let Some(sign) = run {
        normalized.push(sign);
    }
    normalized
}

/// Collapses a run of sign characters, starting the fold from `+`.
///
/// The result is `-` iff the run holds an odd number of `-` characters.
pub fn collapse_signs(run: &str) -> char {
    run.chars().fold('+', fold_sign)
}

fn fold_sign(acc: char, current: char) -> char {
    match (acc, current) {
        ('+', current) => current,
        ('-', '+') => '-',
        _ => '+',
    }
}
