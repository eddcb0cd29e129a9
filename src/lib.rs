//! Genquest - WH-question generation from declarative text
//!
//! Converts declarative passages into WH-questions by analyzing their
//! grammatical structure. The annotation engine (tagging, parsing, NER)
//! is an external collaborator behind [`annotate::Annotate`]; the core
//! engine in [`grammar`] is pure and synchronous.

pub mod annotate;
pub mod core;
pub mod grammar;
pub mod server;

pub use crate::annotate::{Annotate, RemoteAnnotator, TokenStream, TokenStreamBuilder};
pub use crate::core::{GenquestError, Result, ServiceConfig};
pub use crate::grammar::{Question, QuestionGenerator};
