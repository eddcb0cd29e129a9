//! Auxiliary verb resolution

use crate::annotate::labels::{DepLabel, Pos};
use crate::annotate::stream::{AnnotatedToken, Span};
use crate::grammar::tense::Tense;

/// Adjust an auxiliary's surface form for English exceptions
///
/// Infinitival `to` stands in for the finite auxiliary the question
/// needs, chosen by tense; bare `be` surfaces as `is`; everything else
/// passes through.
pub fn fine_tune(aux_text: &str, tense: Tense) -> String {
    match aux_text {
        "to" => match tense {
            Tense::Present => "does".to_string(),
            t if t.is_past() => "did".to_string(),
            _ => "will".to_string(),
        },
        "be" => "is".to_string(),
        other => other.to_string(),
    }
}

/// Resolve the auxiliary verb for a clause
///
/// Checks the token immediately preceding the verb, then scans the clause
/// for any auxiliary-tagged or auxiliary-labeled token (the verb itself
/// counts when it is the root auxiliary), then falls back to a default
/// chosen by tense. `None` means the clause cannot form a question and
/// will be dropped.
pub fn resolve(clause: Span<'_>, verb: &AnnotatedToken, tense: Tense) -> Option<String> {
    let stream = clause.stream();

    // verb preceded by its auxiliary
    if verb.index > 0 {
        let prev = stream.token(verb.index - 1);
        if prev.pos == Pos::Aux {
            return Some(fine_tune(&prev.text, tense));
        }
    }

    // look for an auxiliary anywhere in the clause
    for token in clause.tokens() {
        if token.pos == Pos::Aux || token.dep == DepLabel::Aux {
            if token.index == verb.index {
                // aux is the root verb
                return Some(fine_tune(&verb.text, tense));
            }
            return Some(fine_tune(&token.text, tense));
        }
    }

    // no auxiliary in the clause, default by tense
    match tense {
        Tense::PastTense => Some("did".to_string()),
        Tense::Present => {
            if verb.tag.is_non_third_person() {
                Some("do".to_string())
            } else {
                Some("does".to_string())
            }
        }
        _ => {
            tracing::debug!(verb = %verb.text, tense = ?tense, "could not determine aux verb");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::labels::{EntityKind, FineTag};
    use crate::annotate::stream::{TokenStream, TokenStreamBuilder};

    // "Maria will visit ." — aux immediately precedes the verb
    fn modal_stream() -> TokenStream {
        TokenStreamBuilder::new()
            .token("Maria", "Maria", Pos::Propn, FineTag::Nnp, DepLabel::Nsubj, EntityKind::Person, 2)
            .token("will", "will", Pos::Aux, FineTag::Md, DepLabel::Aux, EntityKind::None, 2)
            .token("visit", "visit", Pos::Verb, FineTag::Vb, DepLabel::Root, EntityKind::None, 2)
            .token(".", ".", Pos::Punct, FineTag::SentClose, DepLabel::Punct, EntityKind::None, 2)
            .build()
            .unwrap()
    }

    #[test]
    fn preceding_aux_wins() {
        let stream = modal_stream();
        let clause = stream.span(0, 3);
        let aux = resolve(clause, stream.token(2), Tense::Base);
        assert_eq!(aux.as_deref(), Some("will"));
    }

    #[test]
    fn clause_scan_finds_displaced_aux() {
        // "She wants to leave ." — "to" is labeled aux deeper in the clause
        let stream = TokenStreamBuilder::new()
            .token("She", "she", Pos::Pron, FineTag::Prp, DepLabel::Nsubj, EntityKind::None, 1)
            .token("wants", "want", Pos::Verb, FineTag::Vbz, DepLabel::Root, EntityKind::None, 1)
            .token("to", "to", Pos::Part, FineTag::To, DepLabel::Aux, EntityKind::None, 3)
            .token("leave", "leave", Pos::Verb, FineTag::Vb, DepLabel::Other, EntityKind::None, 1)
            .token(".", ".", Pos::Punct, FineTag::SentClose, DepLabel::Punct, EntityKind::None, 1)
            .build()
            .unwrap();
        let clause = stream.span(0, 4);
        let aux = resolve(clause, stream.token(1), Tense::Present);
        assert_eq!(aux.as_deref(), Some("does"));
    }

    #[test]
    fn root_aux_fine_tunes_its_own_text() {
        // "She is happy ." — the copula is both verb and auxiliary
        let stream = TokenStreamBuilder::new()
            .token("She", "she", Pos::Pron, FineTag::Prp, DepLabel::Nsubj, EntityKind::None, 1)
            .token("is", "be", Pos::Aux, FineTag::Vbz, DepLabel::Root, EntityKind::None, 1)
            .token("happy", "happy", Pos::Adj, FineTag::Jj, DepLabel::Acomp, EntityKind::None, 1)
            .token(".", ".", Pos::Punct, FineTag::SentClose, DepLabel::Punct, EntityKind::None, 1)
            .build()
            .unwrap();
        let clause = stream.span(0, 3);
        let aux = resolve(clause, stream.token(1), Tense::Present);
        assert_eq!(aux.as_deref(), Some("is"));
    }

    #[test]
    fn past_tense_defaults_to_did() {
        let stream = TokenStreamBuilder::new()
            .token("cat", "cat", Pos::Noun, FineTag::Nn, DepLabel::Nsubj, EntityKind::None, 1)
            .token("ran", "run", Pos::Verb, FineTag::Vbd, DepLabel::Root, EntityKind::None, 1)
            .build()
            .unwrap();
        let clause = stream.span(0, 2);
        let aux = resolve(clause, stream.token(1), Tense::PastTense);
        assert_eq!(aux.as_deref(), Some("did"));
    }

    #[test]
    fn present_defaults_by_person() {
        let third = TokenStreamBuilder::new()
            .token("cat", "cat", Pos::Noun, FineTag::Nn, DepLabel::Nsubj, EntityKind::None, 1)
            .token("runs", "run", Pos::Verb, FineTag::Vbz, DepLabel::Root, EntityKind::None, 1)
            .build()
            .unwrap();
        let aux = resolve(third.span(0, 2), third.token(1), Tense::Present);
        assert_eq!(aux.as_deref(), Some("does"));

        let plural = TokenStreamBuilder::new()
            .token("birds", "bird", Pos::Noun, FineTag::Nns, DepLabel::Nsubj, EntityKind::None, 1)
            .token("fly", "fly", Pos::Verb, FineTag::Vbp, DepLabel::Root, EntityKind::None, 1)
            .build()
            .unwrap();
        let aux = resolve(plural.span(0, 2), plural.token(1), Tense::Present);
        assert_eq!(aux.as_deref(), Some("do"));
    }

    #[test]
    fn unresolvable_tense_yields_none() {
        let stream = TokenStreamBuilder::new()
            .token("cat", "cat", Pos::Noun, FineTag::Nn, DepLabel::Nsubj, EntityKind::None, 1)
            .token("meow", "meow", Pos::Verb, FineTag::Other, DepLabel::Root, EntityKind::None, 1)
            .build()
            .unwrap();
        let aux = resolve(stream.span(0, 2), stream.token(1), Tense::Unknown);
        assert_eq!(aux, None);
    }

    #[test]
    fn fine_tune_covers_exceptions() {
        assert_eq!(fine_tune("to", Tense::Present), "does");
        assert_eq!(fine_tune("to", Tense::PastTense), "did");
        assert_eq!(fine_tune("to", Tense::PastPrin), "did");
        assert_eq!(fine_tune("to", Tense::PastPart), "did");
        assert_eq!(fine_tune("to", Tense::Future), "will");
        assert_eq!(fine_tune("to", Tense::Base), "will");
        assert_eq!(fine_tune("be", Tense::Present), "is");
        assert_eq!(fine_tune("was", Tense::PastTense), "was");
    }
}
