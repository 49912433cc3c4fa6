use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConjugationError;

/// Grammatical mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mood {
    #[serde(rename = "ind")]
    Indicative,
    #[serde(rename = "sub")]
    Subjunctive,
    #[serde(rename = "imp")]
    Imperative,
}

impl Mood {
    pub const ALLOWED: &'static str = "ind, sub, imp";

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Indicative => "ind",
            Mood::Subjunctive => "sub",
            Mood::Imperative => "imp",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ConjugationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ind" => Ok(Mood::Indicative),
            "sub" => Ok(Mood::Subjunctive),
            "imp" => Ok(Mood::Imperative),
            _ => Err(ConjugationError::InvalidArgument {
                name: "mood",
                value: s.to_string(),
                allowed: Mood::ALLOWED,
            }),
        }
    }
}

/// Grammatical tense. Only the indicative present, imperfect, and
/// preterite are generated; the rest are recognised codes that
/// conjugation reports as unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tense {
    #[serde(rename = "pres")]
    Present,
    #[serde(rename = "imp")]
    Imperfect,
    #[serde(rename = "pret")]
    Preterite,
    #[serde(rename = "fut")]
    Future,
    #[serde(rename = "cond")]
    Conditional,
    #[serde(rename = "pres_perf")]
    PresentPerfect,
    #[serde(rename = "past_perf")]
    PastPerfect,
    #[serde(rename = "fut_perf")]
    FuturePerfect,
    #[serde(rename = "cond_perf")]
    ConditionalPerfect,
    #[serde(rename = "none")]
    None,
}

impl Tense {
    pub const ALLOWED: &'static str =
        "pres, imp, pret, fut, cond, pres_perf, past_perf, fut_perf, cond_perf, none";

    pub fn as_str(&self) -> &'static str {
        match self {
            Tense::Present => "pres",
            Tense::Imperfect => "imp",
            Tense::Preterite => "pret",
            Tense::Future => "fut",
            Tense::Conditional => "cond",
            Tense::PresentPerfect => "pres_perf",
            Tense::PastPerfect => "past_perf",
            Tense::FuturePerfect => "fut_perf",
            Tense::ConditionalPerfect => "cond_perf",
            Tense::None => "none",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tense {
    type Err = ConjugationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pres" => Ok(Tense::Present),
            "imp" => Ok(Tense::Imperfect),
            "pret" => Ok(Tense::Preterite),
            "fut" => Ok(Tense::Future),
            "cond" => Ok(Tense::Conditional),
            "pres_perf" | "pres perf" => Ok(Tense::PresentPerfect),
            "past_perf" | "past perf" => Ok(Tense::PastPerfect),
            "fut_perf" | "fut perf" => Ok(Tense::FuturePerfect),
            "cond_perf" | "cond perf" => Ok(Tense::ConditionalPerfect),
            "none" => Ok(Tense::None),
            _ => Err(ConjugationError::InvalidArgument {
                name: "tense",
                value: s.to_string(),
                allowed: Tense::ALLOWED,
            }),
        }
    }
}

/// Grammatical subject (person + number). Each suffix row holds one
/// suffix per subject, in this declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Yo,
    Tu,
    El,
    Nosotros,
    Vosotros,
    Ellos,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Subject::Yo,
        Subject::Tu,
        Subject::El,
        Subject::Nosotros,
        Subject::Vosotros,
        Subject::Ellos,
    ];

    /// Position of this subject within a suffix row.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Result<Self, ConjugationError> {
        Subject::ALL.get(index).copied().ok_or_else(|| {
            ConjugationError::InvalidArgument {
                name: "subject",
                value: index.to_string(),
                allowed: "0-5",
            }
        })
    }

    /// Pronoun label used in conjugation tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Yo => "yo",
            Subject::Tu => "tú",
            Subject::El => "él/ella/usted",
            Subject::Nosotros => "nosotros/as",
            Subject::Vosotros => "vosotros/as",
            Subject::Ellos => "ellos/ellas/ustedes",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infinitive ending class, derived from the last two letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndingClass {
    Ar,
    Er,
    Ir,
}

/// Orthographic irregularity class, derived once at construction from
/// the written ending (or the explicit exception list). Exactly one
/// class applies per verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IrregularityClass {
    Regular,
    /// -car: c→qu keeps the hard /k/ before é (preterite yo).
    Car,
    /// -gar: g→gu keeps the hard /g/ before é (preterite yo).
    Gar,
    /// -zar: z→c before é (preterite yo).
    Zar,
    /// -guar: diaeresis keeps the /w/ before é (preterite yo).
    Guar,
    /// -ucir and traer: inserted j, unaccented preterite.
    UcirTraer,
    /// -caer, -eer, -oer, -oír: i→y between vowels in the preterite.
    VowelEr,
    /// -uir: i→y, but no accent on the tú preterite.
    Uir,
    /// -ger, -gir: g→j in the present yo.
    GerGir,
}

/// Reserved stem-change vowel pattern (e→i, e→ie, o→ue). Carried as
/// metadata; not yet consumed by conjugation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StemChange {
    I,
    Ie,
    Ue,
}

/// Optional classification metadata supplied at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbFlags {
    pub reflexive: bool,
    pub stem_changing: bool,
    pub stem_change: Option<StemChange>,
    pub starred: bool,
}

/// Precomputed inflected forms for the supported tenses, one row per
/// tense in subject order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paradigm {
    pub ind_pres: [String; 6],
    pub ind_imp: [String; 6],
    pub ind_pret: [String; 6],
}

/// One Spanish verb: its infinitive, derived classification, and
/// precomputed paradigm. Immutable after construction except for the
/// user metadata flags.
#[derive(Debug, Clone, Serialize)]
pub struct Verb {
    pub(crate) infinitive: String,
    pub(crate) stem: String,
    pub(crate) ending: EndingClass,
    pub(crate) irregularity: IrregularityClass,
    pub(crate) definition: String,
    pub(crate) participle: String,
    pub(crate) gerund: String,
    pub(crate) paradigm: Paradigm,
    pub reflexive: bool,
    pub stem_changing: bool,
    pub stem_change: Option<StemChange>,
    pub starred: bool,
}

impl Verb {
    pub fn infinitive(&self) -> &str {
        &self.infinitive
    }

    /// Infinitive minus its final two letters.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn ending(&self) -> EndingClass {
        self.ending
    }

    pub fn irregularity(&self) -> IrregularityClass {
        self.irregularity
    }

    /// English gloss. Not used in conjugation.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn participle(&self) -> &str {
        &self.participle
    }

    pub fn gerund(&self) -> &str {
        &self.gerund
    }

    pub fn paradigm(&self) -> &Paradigm {
        &self.paradigm
    }
}
