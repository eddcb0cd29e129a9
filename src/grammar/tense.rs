//! Verb tense classification

use crate::annotate::labels::FineTag;
use crate::annotate::stream::AnnotatedToken;

/// Tense category of a clause's main verb
///
/// `PastPrin` is carried for annotators whose tagset distinguishes
/// preterite principal parts; the Penn mapping never produces it, and it
/// behaves like the other past categories everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    PastTense,
    PastPrin,
    PastPart,
    Present,
    Future,
    Base,
    Unknown,
}

impl Tense {
    /// Any of the past categories
    pub fn is_past(self) -> bool {
        matches!(self, Tense::PastTense | Tense::PastPrin | Tense::PastPart)
    }
}

/// Classify a verb's tense from its fine-grained tag
///
/// Unrecognized tags classify as `Unknown`, which downstream resolves to
/// a missing auxiliary and drops the clause; it never aborts the scan.
pub fn classify(verb: &AnnotatedToken) -> Tense {
    match verb.tag {
        FineTag::Vbd => Tense::PastTense,
        FineTag::Vbn => Tense::PastPart,
        FineTag::Vbz | FineTag::Vbp | FineTag::Vbg => Tense::Present,
        FineTag::Md => Tense::Future,
        FineTag::Vb => Tense::Base,
        tag => {
            tracing::debug!(
                token = %verb.text,
                tag = ?tag,
                detail = tag.description(),
                "could not determine verb tense"
            );
            Tense::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::labels::{DepLabel, EntityKind, Pos};
    use crate::annotate::stream::{TokenStream, TokenStreamBuilder};

    fn verb_with_tag(tag: FineTag) -> TokenStream {
        TokenStreamBuilder::new()
            .token("ran", "run", Pos::Verb, tag, DepLabel::Root, EntityKind::None, 0)
            .build()
            .unwrap()
    }

    #[test]
    fn classifies_verb_tags() {
        assert_eq!(classify(verb_with_tag(FineTag::Vbd).token(0)), Tense::PastTense);
        assert_eq!(classify(verb_with_tag(FineTag::Vbn).token(0)), Tense::PastPart);
        assert_eq!(classify(verb_with_tag(FineTag::Vbz).token(0)), Tense::Present);
        assert_eq!(classify(verb_with_tag(FineTag::Vbp).token(0)), Tense::Present);
        assert_eq!(classify(verb_with_tag(FineTag::Vbg).token(0)), Tense::Present);
        assert_eq!(classify(verb_with_tag(FineTag::Md).token(0)), Tense::Future);
        assert_eq!(classify(verb_with_tag(FineTag::Vb).token(0)), Tense::Base);
    }

    #[test]
    fn non_verb_tags_are_unknown() {
        assert_eq!(classify(verb_with_tag(FineTag::Nn).token(0)), Tense::Unknown);
        assert_eq!(classify(verb_with_tag(FineTag::Other).token(0)), Tense::Unknown);
    }

    #[test]
    fn past_family_predicate() {
        assert!(Tense::PastTense.is_past());
        assert!(Tense::PastPrin.is_past());
        assert!(Tense::PastPart.is_past());
        assert!(!Tense::Present.is_past());
        assert!(!Tense::Unknown.is_past());
    }
}
