//! Per-clause syntax extraction
//!
//! Maps a candidate clause span to the five question slots: WH-word,
//! subject span, main verb, auxiliary, and object. The map also carries
//! the verb phrase's true end index, which may lie past the clause's
//! punctuation boundary; the scan resumes from there.

use crate::annotate::stream::{AnnotatedToken, Span, TokenStream};
use crate::grammar::aux;
use crate::grammar::question::Question;
use crate::grammar::segmenter::{is_close_bracket, is_open_bracket};
use crate::grammar::tense::{self, Tense};
use crate::grammar::wh::{self, WhWord};

/// Extraction result for one clause
///
/// Transient: produced and consumed within one clause-processing step.
/// `nsubj` and `aux` may be absent, marking a clause the orchestrator
/// must skip; `obj` may legitimately be absent.
#[derive(Debug)]
pub struct SyntaxMap<'a> {
    pub wh: WhWord,
    pub nsubj: Option<Span<'a>>,
    pub obj: Option<&'a AnnotatedToken>,
    pub verb: String,
    pub aux: Option<String>,
    /// Index of the verb phrase's rightmost dependent
    pub end: usize,
}

impl SyntaxMap<'_> {
    /// Build the question value, or `None` when a required slot is absent
    pub fn into_question(self) -> Option<Question> {
        let nsubj = self.nsubj?;
        let aux = self.aux?;
        Some(Question::new(
            self.wh,
            aux,
            nsubj,
            self.verb,
            self.obj.map(|t| t.text.clone()),
        ))
    }
}

/// Map a clause span `[start, end)` to its syntax, or `None` when the
/// clause has no recognizable subject
pub fn map_syntax(stream: &TokenStream, start: usize, end: usize) -> Option<SyntaxMap<'_>> {
    let clause = stream.span(start, end);
    let mut verb = clause.root()?;
    let mut vp_end = verb.right_edge();

    let bracketed = bracketed_offsets(clause);

    // Prefer a subject-labeled noun chunk; its head is the true predicate,
    // which can differ from the clause root when a subordinate clause is
    // present.
    let mut subject: Option<&AnnotatedToken> = None;
    for chunk in clause.noun_chunks() {
        let chunk_root = stream.token(chunk.root);
        if chunk_root.dep.is_subject() && !bracketed[chunk.root - clause.start()] {
            subject = Some(chunk_root);
            verb = stream.token(chunk_root.head);
            vp_end = verb.right_edge();
            break;
        }
    }

    let subject = match subject {
        Some(subject) => subject,
        None => find_subject_in_tokens(clause)?,
    };

    // subject is the found token and all of its descendants
    let nsubj = stream.subtree_span(subject.index);

    let obj = find_object(stream, verb);
    let wh = wh::select(subject, obj);
    let verb_tense = tense::classify(verb);
    let aux = aux::resolve(clause, verb, verb_tense);

    // use the base form when the auxiliary already carries the tense
    // ("did ran" vs "did run")
    let verb_text = match (&aux, verb_tense) {
        (Some(aux_text), Tense::PastTense | Tense::Present) if verb.text != *aux_text => {
            verb.lemma.clone()
        }
        _ => verb.text.clone(),
    };

    Some(SyntaxMap {
        wh,
        nsubj: Some(nsubj),
        obj,
        verb: verb_text,
        aux,
        end: vp_end,
    })
}

/// Which clause offsets sit inside a bracketed aside
///
/// The opening bracket is suppressed along with the aside; the closing
/// bracket is not.
fn bracketed_offsets(clause: Span<'_>) -> Vec<bool> {
    let mut flags = Vec::with_capacity(clause.end() - clause.start());
    let mut in_bracket = false;
    for token in clause.tokens() {
        if is_open_bracket(&token.text) {
            in_bracket = true;
        }
        if is_close_bracket(&token.text) && in_bracket {
            in_bracket = false;
        }
        flags.push(in_bracket);
    }
    flags
}

/// Fallback subject search: linear scan over the clause, skipping
/// bracketed asides, for the first subject-labeled token that is not a
/// wh-determiner
pub fn find_subject_in_tokens(clause: Span<'_>) -> Option<&AnnotatedToken> {
    let mut in_bracket = false;
    for token in clause.tokens() {
        if is_open_bracket(&token.text) {
            in_bracket = true;
        }
        if is_close_bracket(&token.text) && in_bracket {
            in_bracket = false;
        }
        if in_bracket {
            continue;
        }

        if token.dep.is_subject() && !token.tag.is_wh_determiner() {
            return Some(token);
        }
    }
    None
}

/// First object among the verb's dependents, searching each child's
/// subtree depth-first in surface order
pub fn find_object<'a>(stream: &'a TokenStream, verb: &AnnotatedToken) -> Option<&'a AnnotatedToken> {
    verb.children()
        .iter()
        .find_map(|&child| search_for_object(stream, Some(child), stream.len()))
}

/// Depth-first search for a `dobj`/`pobj` token in the subtree rooted at
/// `index`
///
/// The depth bound caps the recursion at the stream length (a dependency
/// tree can never be deeper); an exhausted bound yields `None` for that
/// branch.
fn search_for_object(
    stream: &TokenStream,
    index: Option<usize>,
    depth: usize,
) -> Option<&AnnotatedToken> {
    let index = index?;
    if depth == 0 {
        return None;
    }

    let token = stream.token(index);
    if token.dep.is_object() {
        return Some(token);
    }

    token
        .children()
        .iter()
        .find_map(|&child| search_for_object(stream, Some(child), depth - 1))
}
