// Verb construction and conjugation.
//
// Classification and the full paradigm for the supported tenses are
// computed once, in the constructor; conjugation afterwards is a pure
// table lookup.

use crate::classify::{classify, strip_last_chars};
use crate::error::ConjugationError;
use crate::tables;
use crate::types::{
    EndingClass, IrregularityClass, Mood, Paradigm, Subject, Tense, Verb, VerbFlags,
};

impl Verb {
    /// Construct a verb with default flags. Fails with `InvalidVerb`
    /// when the infinitive is malformed.
    pub fn new(infinitive: &str, definition: &str) -> Result<Self, ConjugationError> {
        Self::with_flags(infinitive, definition, VerbFlags::default())
    }

    /// Construct a verb with explicit classification metadata.
    pub fn with_flags(
        infinitive: &str,
        definition: &str,
        flags: VerbFlags,
    ) -> Result<Self, ConjugationError> {
        let (ending, irregularity) = classify(infinitive)?;
        let stem = strip_last_chars(infinitive, 2).to_string();
        let paradigm = build_paradigm(infinitive, &stem, ending, irregularity);

        Ok(Verb {
            infinitive: infinitive.to_string(),
            participle: format!("{stem}{}", tables::participle_ending(ending)),
            gerund: format!("{stem}{}", tables::gerund_ending(ending)),
            stem,
            ending,
            irregularity,
            definition: definition.to_string(),
            paradigm,
            reflexive: flags.reflexive,
            stem_changing: flags.stem_changing,
            stem_change: flags.stem_change,
            starred: flags.starred,
        })
    }

    /// Whether forms are generated for this (mood, tense) pair.
    pub fn supports(mood: Mood, tense: Tense) -> bool {
        matches!(
            (mood, tense),
            (
                Mood::Indicative,
                Tense::Present | Tense::Imperfect | Tense::Preterite
            )
        )
    }

    /// The 6-subject row for a (mood, tense) pair, or `Unsupported`
    /// for pairs whose forms are not generated.
    pub fn forms(&self, mood: Mood, tense: Tense) -> Result<&[String; 6], ConjugationError> {
        match (mood, tense) {
            (Mood::Indicative, Tense::Present) => Ok(&self.paradigm.ind_pres),
            (Mood::Indicative, Tense::Imperfect) => Ok(&self.paradigm.ind_imp),
            (Mood::Indicative, Tense::Preterite) => Ok(&self.paradigm.ind_pret),
            _ => Err(ConjugationError::Unsupported { mood, tense }),
        }
    }

    /// One conjugated form.
    pub fn conjugate(
        &self,
        mood: Mood,
        tense: Tense,
        subject: Subject,
    ) -> Result<&str, ConjugationError> {
        Ok(self.forms(mood, tense)?[subject.index()].as_str())
    }
}

/// String-keyed conjugation entry point: validates the mood and tense
/// codes and the subject index, then looks the form up. Fails with
/// `InvalidArgument` naming the offending parameter.
pub fn conjugate(
    verb: &Verb,
    mood: &str,
    tense: &str,
    subject: usize,
) -> Result<String, ConjugationError> {
    let mood: Mood = mood.parse()?;
    let tense: Tense = tense.parse()?;
    let subject = Subject::from_index(subject)?;
    verb.conjugate(mood, tense, subject).map(str::to_string)
}

// ---------------------------------------------------------------------------
// Paradigm construction
// ---------------------------------------------------------------------------

fn build_paradigm(
    infinitive: &str,
    stem: &str,
    ending: EndingClass,
    irregularity: IrregularityClass,
) -> Paradigm {
    Paradigm {
        ind_pres: attach(stem, &row(ending, irregularity, Tense::Present)),
        ind_imp: build_imperfect(infinitive, stem, ending, irregularity),
        ind_pret: build_preterite(infinitive, stem, ending, irregularity),
    }
}

/// Resolved suffix row for a generated tense.
fn row(ending: EndingClass, irregularity: IrregularityClass, tense: Tense) -> [&'static str; 6] {
    tables::suffixes(ending, irregularity, tense)
        .expect("suffix rows exist for every generated tense")
}

/// Append one suffix row to a stem.
fn attach(stem: &str, suffixes: &[&str; 6]) -> [String; 6] {
    std::array::from_fn(|i| format!("{stem}{}", suffixes[i]))
}

fn build_imperfect(
    infinitive: &str,
    stem: &str,
    ending: EndingClass,
    irregularity: IrregularityClass,
) -> [String; 6] {
    match tables::imperfect_forms(infinitive) {
        Some(whole) => (*whole).map(String::from),
        None => attach(stem, &row(ending, irregularity, Tense::Imperfect)),
    }
}

fn build_preterite(
    infinitive: &str,
    stem: &str,
    ending: EndingClass,
    irregularity: IrregularityClass,
) -> [String; 6] {
    let suffixes = row(ending, irregularity, Tense::Preterite);
    let mut forms = attach(stem, &suffixes);
    // The consonant before the ending participates in the c→qu /
    // g→gu / z→c shift, so the patched yo suffix attaches to the
    // infinitive minus three letters, not the regular stem.
    if matches!(
        irregularity,
        IrregularityClass::Car | IrregularityClass::Gar | IrregularityClass::Zar
    ) {
        forms[0] = format!("{}{}", strip_last_chars(infinitive, 3), suffixes[0]);
    }
    forms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_ar_paradigm() {
        let verb = Verb::new("hablar", "to speak").unwrap();
        assert_eq!(verb.stem(), "habl");
        assert_eq!(
            verb.paradigm().ind_pres,
            ["hablo", "hablas", "habla", "hablamos", "habláis", "hablan"]
        );
        assert_eq!(
            verb.paradigm().ind_imp,
            [
                "hablaba",
                "hablabas",
                "hablaba",
                "hablábamos",
                "hablabais",
                "hablaban"
            ]
        );
        assert_eq!(
            verb.paradigm().ind_pret,
            [
                "hablé",
                "hablaste",
                "habló",
                "hablamos",
                "hablasteis",
                "hablaron"
            ]
        );
    }

    #[test]
    fn test_regular_er_ir_present_differ() {
        let aprender = Verb::new("aprender", "to learn").unwrap();
        let escribir = Verb::new("escribir", "to write").unwrap();
        assert_eq!(aprender.paradigm().ind_pres[3], "aprendemos");
        assert_eq!(escribir.paradigm().ind_pres[3], "escribimos");
        assert_eq!(escribir.paradigm().ind_pres[4], "escribís");
    }

    #[test]
    fn test_zar_short_stem_in_preterite_yo() {
        let verb = Verb::new("cazar", "to hunt").unwrap();
        assert_eq!(
            verb.paradigm().ind_pret,
            ["cacé", "cazaste", "cazó", "cazamos", "cazasteis", "cazaron"]
        );
        // The short stem applies to the preterite yo only.
        assert_eq!(verb.paradigm().ind_pres[0], "cazo");
    }

    #[test]
    fn test_car_gar_short_stems() {
        let buscar = Verb::new("buscar", "to look for").unwrap();
        assert_eq!(buscar.paradigm().ind_pret[0], "busqué");
        assert_eq!(buscar.paradigm().ind_pret[1], "buscaste");

        let pagar = Verb::new("pagar", "to pay").unwrap();
        assert_eq!(pagar.paradigm().ind_pret[0], "pagué");
        assert_eq!(pagar.paradigm().ind_pret[2], "pagó");
    }

    #[test]
    fn test_vowel_er_preterite() {
        let verb = Verb::new("leer", "to read").unwrap();
        assert_eq!(
            verb.paradigm().ind_pret,
            ["leí", "leíste", "leyó", "leímos", "leisteis", "leyeron"]
        );
    }

    #[test]
    fn test_uir_preterite_tu_has_no_accent() {
        let verb = Verb::new("destruir", "to destroy").unwrap();
        assert_eq!(
            verb.paradigm().ind_pret,
            [
                "destruí",
                "destruiste",
                "destruyó",
                "destruimos",
                "destruisteis",
                "destruyeron"
            ]
        );
    }

    #[test]
    fn test_traer_preterite() {
        let verb = Verb::new("traer", "to bring").unwrap();
        assert_eq!(
            verb.paradigm().ind_pret,
            ["traje", "trajiste", "trajo", "trajimos", "trajisteis", "trajeron"]
        );
    }

    #[test]
    fn test_accented_infinitive() {
        let verb = Verb::new("oír", "to hear").unwrap();
        assert_eq!(verb.stem(), "o");
        assert_eq!(verb.irregularity(), IrregularityClass::VowelEr);
        assert_eq!(verb.paradigm().ind_pret[2], "oyó");
    }

    #[test]
    fn test_whole_form_imperfects() {
        let ser = Verb::new("ser", "to be").unwrap();
        assert_eq!(
            ser.paradigm().ind_imp,
            ["era", "eras", "era", "éramos", "erais", "eran"]
        );

        let ir = Verb::new("ir", "to go").unwrap();
        assert_eq!(
            ir.paradigm().ind_imp,
            ["iba", "ibas", "iba", "íbamos", "ibais", "iban"]
        );

        let ver = Verb::new("ver", "to see").unwrap();
        assert_eq!(
            ver.paradigm().ind_imp,
            ["veía", "veías", "veía", "veíamos", "veíais", "veían"]
        );
        // The substitution is imperfect-only.
        assert_eq!(ver.paradigm().ind_pres[0], "vo");
    }

    #[test]
    fn test_participle_and_gerund() {
        let hablar = Verb::new("hablar", "to speak").unwrap();
        assert_eq!(hablar.participle(), "hablado");
        assert_eq!(hablar.gerund(), "hablando");

        let aprender = Verb::new("aprender", "to learn").unwrap();
        assert_eq!(aprender.participle(), "aprendido");
        assert_eq!(aprender.gerund(), "aprendiendo");
    }

    #[test]
    fn test_conjugate_typed() {
        let verb = Verb::new("hablar", "to speak").unwrap();
        assert_eq!(
            verb.conjugate(Mood::Indicative, Tense::Present, Subject::Yo)
                .unwrap(),
            "hablo"
        );
        assert_eq!(
            verb.conjugate(Mood::Indicative, Tense::Preterite, Subject::Vosotros)
                .unwrap(),
            "hablasteis"
        );
    }

    #[test]
    fn test_conjugate_string_facade() {
        let verb = Verb::new("escribir", "to write").unwrap();
        assert_eq!(conjugate(&verb, "ind", "pret", 0).unwrap(), "escribí");
        assert_eq!(conjugate(&verb, "ind", "pres", 5).unwrap(), "escriben");
    }

    #[test]
    fn test_invalid_arguments() {
        let verb = Verb::new("hablar", "to speak").unwrap();
        assert!(matches!(
            conjugate(&verb, "xyz", "pres", 0),
            Err(ConjugationError::InvalidArgument { name: "mood", .. })
        ));
        assert!(matches!(
            conjugate(&verb, "ind", "presente", 0),
            Err(ConjugationError::InvalidArgument { name: "tense", .. })
        ));
        assert!(matches!(
            conjugate(&verb, "ind", "pres", 9),
            Err(ConjugationError::InvalidArgument { name: "subject", .. })
        ));
    }

    #[test]
    fn test_unsupported_pairs() {
        let verb = Verb::new("hablar", "to speak").unwrap();
        assert!(matches!(
            verb.conjugate(Mood::Indicative, Tense::Future, Subject::Yo),
            Err(ConjugationError::Unsupported { .. })
        ));
        assert!(matches!(
            verb.conjugate(Mood::Subjunctive, Tense::Present, Subject::Yo),
            Err(ConjugationError::Unsupported { .. })
        ));
        assert!(!Verb::supports(Mood::Imperative, Tense::None));
        assert!(Verb::supports(Mood::Indicative, Tense::Imperfect));
    }

    #[test]
    fn test_construction_is_idempotent() {
        let a = Verb::new("destruir", "to destroy").unwrap();
        let b = Verb::new("destruir", "to destroy").unwrap();
        assert_eq!(a.paradigm(), b.paradigm());
    }

    #[test]
    fn test_flags_are_metadata_only() {
        let plain = Verb::new("pensar", "to think").unwrap();
        let flagged = Verb::with_flags(
            "pensar",
            "to think",
            VerbFlags {
                stem_changing: true,
                stem_change: Some(crate::types::StemChange::Ie),
                starred: true,
                ..VerbFlags::default()
            },
        )
        .unwrap();
        assert!(flagged.starred);
        assert_eq!(plain.paradigm(), flagged.paradigm());
    }

    #[test]
    fn test_invalid_infinitive_rejected() {
        assert!(matches!(
            Verb::new("jump", "to jump"),
            Err(ConjugationError::InvalidVerb(_))
        ));
        assert!(matches!(
            Verb::new("x", ""),
            Err(ConjugationError::InvalidVerb(_))
        ));
    }
}
