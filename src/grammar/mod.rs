//! Clause-to-question synthesis engine
//!
//! The pipeline, leaves first: [`segmenter`] walks the token stream
//! emitting candidate clause bounds; [`syntax`] extracts subject, verb,
//! auxiliary, and object per clause; [`tense`], [`aux`], and [`wh`]
//! resolve the remaining slots; [`question`] composes the final string;
//! [`generator`] orchestrates the whole scan.

pub mod aux;
pub mod generator;
pub mod question;
pub mod segmenter;
pub mod syntax;
pub mod tense;
pub mod wh;

pub use generator::QuestionGenerator;
pub use question::Question;
pub use segmenter::ClauseScan;
pub use syntax::SyntaxMap;
pub use tense::Tense;
pub use wh::WhWord;
