//! # Canonical Matching Form
//!
//! Accent-, case- and punctuation-insensitive form of a name, used for the
//! fuzzy step of team resolution.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Reduce a string to its canonical matching form.
///
/// NFD-decomposes, drops combining marks, lowercases, collapses every run of
/// characters outside `[a-z0-9]` into one space and trims. The output only
/// contains `[a-z0-9 ]` with single inner spaces, so `canon` is idempotent.
/// Absent input yields `""`.
#[must_use]
pub fn canon<'a>(s: impl Into<Option<&'a str>>) -> String {
    let Some(s) = s.into() else {
        return String::new();
    };

    let folded: String = s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();

    let mut out = String::with_capacity(folded.len());
    let mut pending_space = false;
    for c in folded.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_punctuation() {
        assert_eq!(canon("Côte d'Ivoire"), "cote d ivoire");
        assert_eq!(canon("Côte d'Ivoire"), canon("cote d ivoire"));
        assert_eq!(canon("Côte d\u{2019}Ivoire"), "cote d ivoire");
        assert_eq!(canon("Curaçao"), "curacao");
        assert_eq!(canon("TÜRKİYE"), "turkiye");
    }

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(canon("  Bosnia -- and   Herzegovina!! "), "bosnia and herzegovina");
        assert_eq!(canon("...---..."), "");
        assert_eq!(canon("Korea_Republic"), "korea republic");
    }

    #[test]
    fn absent_is_empty() {
        assert_eq!(canon(None), "");
        assert_eq!(canon(""), "");
    }

    #[test]
    fn idempotent_on_samples() {
        for s in ["São Tomé", "U.S.A.", "  Ñandú 2026 ", "Ελλάδα", "ß"] {
            let once = canon(s);
            assert_eq!(canon(once.as_str()), once);
        }
    }
}
