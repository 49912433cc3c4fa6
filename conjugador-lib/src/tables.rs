// Suffix tables for the supported tenses, plus the per-irregularity
// override rules that patch or replace them.
//
// Every row holds exactly 6 suffixes in subject order:
//   yo, tú, él/ella/usted, nosotros/as, vosotros/as, ellos/ellas/ustedes

use crate::types::{EndingClass, IrregularityClass, Tense};

// ---------------------------------------------------------------------------
// Regular suffix rows
// ---------------------------------------------------------------------------

pub const IND_PRES_AR: [&str; 6] = ["o", "as", "a", "amos", "áis", "an"];
pub const IND_PRES_ER: [&str; 6] = ["o", "es", "e", "emos", "éis", "en"];
pub const IND_PRES_IR: [&str; 6] = ["o", "es", "e", "imos", "ís", "en"];

pub const IND_IMP_AR: [&str; 6] = ["aba", "abas", "aba", "ábamos", "abais", "aban"];
pub const IND_IMP_ER_IR: [&str; 6] = ["ía", "ías", "ía", "íamos", "íais", "ían"];

pub const IND_PRET_AR: [&str; 6] = ["é", "aste", "ó", "amos", "asteis", "aron"];
pub const IND_PRET_ER_IR: [&str; 6] = ["í", "iste", "ió", "imos", "isteis", "ieron"];

// ---------------------------------------------------------------------------
// Override rules
// ---------------------------------------------------------------------------

// Slot patches: replace the yo suffix only, keeping the rest of the
// regular row.
const IND_PRET_YO_CAR: &str = "qué";
const IND_PRET_YO_GAR: &str = "gué";
const IND_PRET_YO_ZAR: &str = "cé";
const IND_PRET_YO_GUAR: &str = "güé";
const IND_PRES_YO_GER_GIR: &str = "jo";

// Full substitutions: replace the whole preterite row.
const IND_PRET_UIR: [&str; 6] = ["í", "iste", "yó", "imos", "isteis", "yeron"];
const IND_PRET_VOWEL_ER: [&str; 6] = ["í", "íste", "yó", "ímos", "isteis", "yeron"];
const IND_PRET_UCIR_TRAER: [&str; 6] = ["je", "jiste", "jo", "jimos", "jisteis", "jeron"];

// Whole-form imperfects for {ser}, {ir}, {ver}. These are complete
// words, not suffixes.
const IND_IMP_SER: [&str; 6] = ["era", "eras", "era", "éramos", "erais", "eran"];
const IND_IMP_IR: [&str; 6] = ["iba", "ibas", "iba", "íbamos", "ibais", "iban"];
const IND_IMP_VER: [&str; 6] = ["veía", "veías", "veía", "veíamos", "veíais", "veían"];

// ---------------------------------------------------------------------------
// Participle and gerund endings
// ---------------------------------------------------------------------------

const PARTICIPLE_AR: &str = "ado";
const PARTICIPLE_ER_IR: &str = "ido";

const GERUND_AR: &str = "ando";
const GERUND_ER_IR: &str = "iendo";

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Regular suffix row for a supported (ending, tense) pair without
/// override application; `None` for unsupported tenses.
pub fn regular_suffixes(ending: EndingClass, tense: Tense) -> Option<&'static [&'static str; 6]> {
    match tense {
        Tense::Present => Some(match ending {
            EndingClass::Ar => &IND_PRES_AR,
            EndingClass::Er => &IND_PRES_ER,
            EndingClass::Ir => &IND_PRES_IR,
        }),
        Tense::Imperfect => Some(match ending {
            EndingClass::Ar => &IND_IMP_AR,
            EndingClass::Er | EndingClass::Ir => &IND_IMP_ER_IR,
        }),
        Tense::Preterite => Some(match ending {
            EndingClass::Ar => &IND_PRET_AR,
            EndingClass::Er | EndingClass::Ir => &IND_PRET_ER_IR,
        }),
        _ => None,
    }
}

/// Suffix row after override application: the regular row with any
/// slot patch or full substitution for the irregularity class.
/// `None` for unsupported tenses.
pub fn suffixes(
    ending: EndingClass,
    irregularity: IrregularityClass,
    tense: Tense,
) -> Option<[&'static str; 6]> {
    let mut row = *regular_suffixes(ending, tense)?;
    match (irregularity, tense) {
        (IrregularityClass::Car, Tense::Preterite) => row[0] = IND_PRET_YO_CAR,
        (IrregularityClass::Gar, Tense::Preterite) => row[0] = IND_PRET_YO_GAR,
        (IrregularityClass::Zar, Tense::Preterite) => row[0] = IND_PRET_YO_ZAR,
        (IrregularityClass::Guar, Tense::Preterite) => row[0] = IND_PRET_YO_GUAR,
        (IrregularityClass::GerGir, Tense::Present) => row[0] = IND_PRES_YO_GER_GIR,
        (IrregularityClass::Uir, Tense::Preterite) => row = IND_PRET_UIR,
        (IrregularityClass::VowelEr, Tense::Preterite) => row = IND_PRET_VOWEL_ER,
        (IrregularityClass::UcirTraer, Tense::Preterite) => row = IND_PRET_UCIR_TRAER,
        _ => {}
    }
    Some(row)
}

/// Complete imperfect forms for the handful of verbs whose imperfect
/// is not built from the stem at all.
pub fn imperfect_forms(infinitive: &str) -> Option<&'static [&'static str; 6]> {
    match infinitive {
        "ser" => Some(&IND_IMP_SER),
        "ir" => Some(&IND_IMP_IR),
        "ver" => Some(&IND_IMP_VER),
        _ => None,
    }
}

pub fn participle_ending(ending: EndingClass) -> &'static str {
    match ending {
        EndingClass::Ar => PARTICIPLE_AR,
        EndingClass::Er | EndingClass::Ir => PARTICIPLE_ER_IR,
    }
}

pub fn gerund_ending(ending: EndingClass) -> &'static str {
    match ending {
        EndingClass::Ar => GERUND_AR,
        EndingClass::Er | EndingClass::Ir => GERUND_ER_IR,
    }
}
