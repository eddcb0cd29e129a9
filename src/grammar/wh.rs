//! WH-word selection

use std::fmt;

use crate::annotate::labels::{DepLabel, EntityKind};
use crate::annotate::stream::AnnotatedToken;

/// Interrogative word heading a generated question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhWord {
    What,
    Who,
    Where,
    When,
    How,
    Why,
}

impl WhWord {
    pub fn as_str(self) -> &'static str {
        match self {
            WhWord::What => "What",
            WhWord::Who => "Who",
            WhWord::Where => "Where",
            WhWord::When => "When",
            WhWord::How => "How",
            WhWord::Why => "Why",
        }
    }
}

impl fmt::Display for WhWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Select the WH-word for a clause from its subject and object
///
/// An object-less clause asks `Why` (there is nothing for `What` to ask
/// about, and `Why <aux> <subject> <verb> ?` is always well-formed). A
/// passive subject asks `How`, unless its surface form is the relative
/// `which`/`that`. Otherwise the object's entity category decides.
pub fn select(subject: &AnnotatedToken, object: Option<&AnnotatedToken>) -> WhWord {
    let object = match object {
        Some(object) => object,
        None => return WhWord::Why,
    };

    if subject.dep == DepLabel::Nsubjpass && subject.text != "which" && subject.text != "that" {
        return WhWord::How;
    }

    match object.entity {
        EntityKind::Person => WhWord::Who,
        EntityKind::Gpe => WhWord::Where,
        EntityKind::Date => WhWord::When,
        _ => WhWord::What,
    }
}
