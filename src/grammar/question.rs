//! Question value type and string composition

use std::fmt;

use crate::annotate::labels::Pos;
use crate::annotate::stream::Span;
use crate::grammar::wh::WhWord;

/// One generated question
///
/// Immutable once constructed. Subject normalization (pronoun
/// substitution, proper-noun capitalization) happens at construction;
/// [`Question::text`] is a pure function over the stored slots, so the
/// same value always renders the same string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    wh: WhWord,
    aux: String,
    nsubj: String,
    verb: String,
    obj: Option<String>,
}

impl Question {
    /// Build a question from resolved clause slots
    ///
    /// The subject span is rendered token-by-token: proper nouns keep
    /// their surface form, everything else is lowercased. A bare `which`
    /// subject refers back to the previous clause and becomes `it`.
    pub fn new(
        wh: WhWord,
        aux: String,
        nsubj: Span<'_>,
        verb: String,
        obj: Option<String>,
    ) -> Self {
        let nsubj = match capitalize_proper_nouns(nsubj) {
            s if s == "which" => "it".to_string(),
            s => s,
        };
        Self {
            wh,
            aux,
            nsubj,
            verb: verb.to_lowercase(),
            obj,
        }
    }

    pub fn wh(&self) -> WhWord {
        self.wh
    }

    pub fn aux(&self) -> &str {
        &self.aux
    }

    pub fn nsubj(&self) -> &str {
        &self.nsubj
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn obj(&self) -> Option<&str> {
        self.obj.as_deref()
    }

    /// Compose the question string
    ///
    /// Tokens are joined with single spaces and the trailing `?` is its
    /// own token — the space before it is part of the output contract.
    /// `has` as auxiliary needs restructuring (`does ... have` /
    /// `did ...`), and an infinitival `to` that survived resolution
    /// surfaces as `will`.
    pub fn text(&self) -> String {
        let aux = normalize_aux(&self.aux).to_lowercase();
        let parts: Vec<&str> = if self.verb == self.aux {
            if self.aux == "has" {
                vec![self.wh.as_str(), "does", &self.nsubj, "have", "?"]
            } else {
                vec![self.wh.as_str(), &aux, &self.nsubj, "?"]
            }
        } else if self.aux == "has" {
            vec![self.wh.as_str(), "did", &self.nsubj, &self.verb, "?"]
        } else {
            vec![self.wh.as_str(), &aux, &self.nsubj, &self.verb, "?"]
        };
        parts.join(" ")
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

fn normalize_aux(aux: &str) -> &str {
    if aux == "to" {
        "will"
    } else {
        aux
    }
}

/// Render a subject span, keeping proper nouns capitalized and
/// lowercasing everything else
fn capitalize_proper_nouns(span: Span<'_>) -> String {
    span.tokens()
        .map(|token| {
            if token.pos == Pos::Propn {
                token.text.clone()
            } else {
                token.text.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
