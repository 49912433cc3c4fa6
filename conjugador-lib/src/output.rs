// Table rendering for conjugation results.

use crate::error::ConjugationError;
use crate::types::{Mood, Subject, Tense, Verb};

/// Render the 6-row conjugation table for one (mood, tense) pair,
/// one "pronoun form" line per subject.
pub fn table(verb: &Verb, mood: Mood, tense: Tense) -> Result<String, ConjugationError> {
    let forms = verb.forms(mood, tense)?;
    Ok(Subject::ALL
        .iter()
        .zip(forms.iter())
        .map(|(subject, form)| format!("{subject} {form}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Render every generated tense for a verb, each table under a
/// "mood tense" header line.
pub fn full_table(verb: &Verb) -> String {
    let mut out = String::new();
    for tense in [Tense::Present, Tense::Imperfect, Tense::Preterite] {
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(&format!("{} {}\n", Mood::Indicative, tense));
        // The tense loop only visits generated tenses, so table()
        // cannot fail here.
        if let Ok(rows) = table(verb, Mood::Indicative, tense) {
            out.push_str(&rows);
        }
    }
    out
}
