// Ending and irregularity classification for infinitives.
//
// Irregularity is a pure function of the written ending: an explicit
// exception list, then 4-letter patterns, then 3-letter patterns.
// 4-letter checks must run before 3-letter checks because the last
// four letters of a verb can contain an unrelated 3-letter suffix.

use crate::error::ConjugationError;
use crate::types::{EndingClass, IrregularityClass};

// ---------------------------------------------------------------------------
// Exception and pattern lists
// ---------------------------------------------------------------------------

/// Verbs assigned an irregularity class by name rather than pattern.
pub const IRREGULAR_VERBS: &[&str] = &["traer"];

const VOWEL_ER_LAST_THREES: &[&str] = &["eer", "oer", "oír", "oir"];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Classify an infinitive into its ending class and irregularity
/// class. Fails when the infinitive is shorter than two letters or
/// does not end in -ar/-er/-ir.
pub fn classify(infinitive: &str) -> Result<(EndingClass, IrregularityClass), ConjugationError> {
    if infinitive.chars().count() < 2 {
        return Err(ConjugationError::InvalidVerb(infinitive.to_string()));
    }

    // {oír} is a listed irregular pattern, so the accented ír ending
    // is as valid as plain ir.
    let ending = match last_chars(infinitive, 2) {
        "ar" => EndingClass::Ar,
        "er" => EndingClass::Er,
        "ir" | "ír" => EndingClass::Ir,
        _ => return Err(ConjugationError::InvalidVerb(infinitive.to_string())),
    };

    Ok((ending, irregularity(infinitive)))
}

/// First matching rule wins; the order is load-bearing (see module
/// comment).
fn irregularity(infinitive: &str) -> IrregularityClass {
    if IRREGULAR_VERBS.contains(&infinitive) {
        return IrregularityClass::UcirTraer;
    }

    let last_four = last_chars(infinitive, 4);
    let last_three = last_chars(infinitive, 3);

    if last_four == "ucir" {
        IrregularityClass::UcirTraer
    } else if last_four == "guar" {
        IrregularityClass::Guar
    } else if last_four == "caer" || VOWEL_ER_LAST_THREES.contains(&last_three) {
        IrregularityClass::VowelEr
    } else if last_three == "uir" {
        IrregularityClass::Uir
    } else if last_three == "ger" || last_three == "gir" {
        IrregularityClass::GerGir
    } else if last_three == "car" {
        IrregularityClass::Car
    } else if last_three == "gar" {
        IrregularityClass::Gar
    } else if last_three == "zar" {
        IrregularityClass::Zar
    } else {
        IrregularityClass::Regular
    }
}

// ---------------------------------------------------------------------------
// Char-based string helpers
// ---------------------------------------------------------------------------
//
// Spanish forms contain multi-byte letters (á, é, í, ó, ú, ü, ñ), so
// all trimming counts chars, never bytes.

/// Byte offset of the boundary `n` chars from the end of `s`. Returns
/// 0 when `s` has `n` or fewer chars.
fn boundary_from_end(s: &str, n: usize) -> usize {
    let total = s.chars().count();
    if n >= total {
        return 0;
    }
    s.char_indices()
        .nth(total - n)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Last `n` chars of `s` (the whole string if shorter).
pub(crate) fn last_chars(s: &str, n: usize) -> &str {
    &s[boundary_from_end(s, n)..]
}

/// `s` with its last `n` chars removed (empty if `s` is shorter).
pub(crate) fn strip_last_chars(s: &str, n: usize) -> &str {
    &s[..boundary_from_end(s, n)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_classes() {
        assert_eq!(
            classify("hablar").unwrap(),
            (EndingClass::Ar, IrregularityClass::Regular)
        );
        assert_eq!(
            classify("aprender").unwrap(),
            (EndingClass::Er, IrregularityClass::Regular)
        );
        assert_eq!(
            classify("escribir").unwrap(),
            (EndingClass::Ir, IrregularityClass::Regular)
        );
    }

    #[test]
    fn test_orthographic_classes() {
        assert_eq!(classify("buscar").unwrap().1, IrregularityClass::Car);
        assert_eq!(classify("pagar").unwrap().1, IrregularityClass::Gar);
        assert_eq!(classify("cazar").unwrap().1, IrregularityClass::Zar);
        assert_eq!(classify("averiguar").unwrap().1, IrregularityClass::Guar);
        assert_eq!(classify("escoger").unwrap().1, IrregularityClass::GerGir);
        assert_eq!(classify("dirigir").unwrap().1, IrregularityClass::GerGir);
    }

    #[test]
    fn test_vowel_er_patterns() {
        assert_eq!(classify("leer").unwrap().1, IrregularityClass::VowelEr);
        assert_eq!(classify("roer").unwrap().1, IrregularityClass::VowelEr);
        assert_eq!(classify("caer").unwrap().1, IrregularityClass::VowelEr);
        assert_eq!(
            classify("oír").unwrap(),
            (EndingClass::Ir, IrregularityClass::VowelEr)
        );
    }

    #[test]
    fn test_uir_and_ucir() {
        assert_eq!(classify("destruir").unwrap().1, IrregularityClass::Uir);
        // -ucir is a 4-letter pattern checked before the -uir match
        // inside it could fire.
        assert_eq!(
            classify("conducir").unwrap().1,
            IrregularityClass::UcirTraer
        );
        assert_eq!(
            classify("traducir").unwrap().1,
            IrregularityClass::UcirTraer
        );
    }

    #[test]
    fn test_exception_list() {
        assert_eq!(classify("traer").unwrap().1, IrregularityClass::UcirTraer);
    }

    #[test]
    fn test_guar_before_three_letter_checks() {
        // -guar must not fall through to any 3-letter class.
        assert_eq!(classify("aguar").unwrap().1, IrregularityClass::Guar);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let first = classify("destruir").unwrap();
        for _ in 0..3 {
            assert_eq!(classify("destruir").unwrap(), first);
        }
    }

    #[test]
    fn test_invalid_infinitives() {
        for bad in ["", "a", "saltó", "jump", "xy"] {
            assert!(
                matches!(classify(bad), Err(ConjugationError::InvalidVerb(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_two_letter_infinitive_is_valid() {
        // {ir} itself: empty stem, regular -ir classification.
        assert_eq!(
            classify("ir").unwrap(),
            (EndingClass::Ir, IrregularityClass::Regular)
        );
    }

    #[test]
    fn test_char_helpers_multibyte() {
        assert_eq!(last_chars("oír", 2), "ír");
        assert_eq!(last_chars("oír", 3), "oír");
        assert_eq!(last_chars("oír", 4), "oír");
        assert_eq!(strip_last_chars("oír", 2), "o");
        assert_eq!(strip_last_chars("cazar", 3), "ca");
        assert_eq!(strip_last_chars("ir", 2), "");
    }
}
