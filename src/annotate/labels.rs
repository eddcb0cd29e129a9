//! Closed enumerations for grammatical labels
//!
//! The annotation sidecar speaks in strings ("nsubj", "VBD", "PERSON").
//! Everything is resolved to these enums once, at deserialization; the
//! core engine only ever switches on typed variants. Labels the closed
//! sets don't cover collapse into an `Other` catch-all, which no core
//! rule matches.

use serde::{Deserialize, Serialize};

/// Universal part-of-speech category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    Space,
    #[serde(other)]
    X,
}

/// Fine-grained grammatical tag (Penn Treebank set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FineTag {
    Cc,
    Cd,
    Dt,
    Ex,
    In,
    Jj,
    Jjr,
    Jjs,
    Md,
    Nn,
    Nns,
    Nnp,
    Nnps,
    Pdt,
    Prp,
    Rb,
    Rbr,
    Rbs,
    To,
    Uh,
    Vb,
    Vbd,
    Vbg,
    Vbn,
    Vbp,
    Vbz,
    Wdt,
    Wp,
    Wrb,
    #[serde(rename = ".")]
    SentClose,
    #[serde(rename = ",")]
    Comma,
    #[serde(rename = ":")]
    Colon,
    #[serde(other)]
    Other,
}

impl FineTag {
    /// Human-readable grammatical detail for this tag
    pub fn description(self) -> &'static str {
        match self {
            FineTag::Cc => "conjunction, coordinating",
            FineTag::Cd => "cardinal number",
            FineTag::Dt => "determiner",
            FineTag::Ex => "existential there",
            FineTag::In => "conjunction, subordinating or preposition",
            FineTag::Jj => "adjective",
            FineTag::Jjr => "adjective, comparative",
            FineTag::Jjs => "adjective, superlative",
            FineTag::Md => "verb, modal auxiliary",
            FineTag::Nn => "noun, singular or mass",
            FineTag::Nns => "noun, plural",
            FineTag::Nnp => "noun, proper singular",
            FineTag::Nnps => "noun, proper plural",
            FineTag::Pdt => "predeterminer",
            FineTag::Prp => "pronoun, personal",
            FineTag::Rb => "adverb",
            FineTag::Rbr => "adverb, comparative",
            FineTag::Rbs => "adverb, superlative",
            FineTag::To => "infinitival to",
            FineTag::Uh => "interjection",
            FineTag::Vb => "verb, base form",
            FineTag::Vbd => "verb, past tense",
            FineTag::Vbg => "verb, gerund or present participle",
            FineTag::Vbn => "verb, past participle",
            FineTag::Vbp => "verb, non-3rd person singular present",
            FineTag::Vbz => "verb, 3rd person singular present",
            FineTag::Wdt => "wh-determiner",
            FineTag::Wp => "wh-pronoun, personal",
            FineTag::Wrb => "wh-adverb",
            FineTag::SentClose => "punctuation mark, sentence closer",
            FineTag::Comma => "punctuation mark, comma",
            FineTag::Colon => "punctuation mark, colon or ellipsis",
            FineTag::Other => "unrecognized tag",
        }
    }

    /// Wh-determiners head relative clauses, not questionable subjects
    pub fn is_wh_determiner(self) -> bool {
        matches!(self, FineTag::Wdt)
    }

    /// Non-3rd-person present form, which takes "do" rather than "does"
    pub fn is_non_third_person(self) -> bool {
        matches!(self, FineTag::Vbp)
    }
}

/// Dependency relation of a token to its syntactic head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepLabel {
    #[serde(rename = "ROOT")]
    Root,
    Acomp,
    Advmod,
    Amod,
    Attr,
    Aux,
    Auxpass,
    Cc,
    Compound,
    Conj,
    Csubj,
    Csubjpass,
    Det,
    Dobj,
    Iobj,
    Npadvmod,
    Nsubj,
    Nsubjpass,
    Pobj,
    Prep,
    Punct,
    #[serde(other)]
    Other,
}

impl DepLabel {
    /// Labels marking a clausal or nominal subject
    pub fn is_subject(self) -> bool {
        matches!(
            self,
            DepLabel::Csubj | DepLabel::Csubjpass | DepLabel::Nsubj | DepLabel::Nsubjpass
        )
    }

    /// Labels marking a direct object or object of a preposition
    pub fn is_object(self) -> bool {
        matches!(self, DepLabel::Dobj | DepLabel::Pobj)
    }
}

/// Named-entity category from the annotator
///
/// The empty string on the wire means "no entity".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityKind {
    Person,
    Norp,
    Org,
    Gpe,
    Loc,
    Date,
    Time,
    Money,
    #[serde(rename = "")]
    None,
    #[serde(other)]
    Other,
}

impl Default for EntityKind {
    fn default() -> Self {
        EntityKind::None
    }
}
