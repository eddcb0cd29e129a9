//! Question generation orchestrator

use crate::annotate::client::Annotate;
use crate::annotate::stream::TokenStream;
use crate::core::error::Result;
use crate::grammar::question::Question;
use crate::grammar::segmenter::ClauseScan;
use crate::grammar::syntax;

/// Generates WH-questions from one annotated passage
///
/// Owns the token stream and the questions extracted from it, in clause
/// order. One instance per input passage; clause processing is
/// sequential because each clause's scan position depends on the
/// previous clause's resolved end.
#[derive(Debug)]
pub struct QuestionGenerator {
    stream: TokenStream,
    questions: Vec<Question>,
}

impl QuestionGenerator {
    /// Run the engine over a pre-annotated stream
    pub fn from_stream(stream: TokenStream) -> Self {
        let mut generator = Self {
            stream,
            questions: Vec::new(),
        };
        generator.run();
        generator
    }

    /// Annotate `text` through the collaborator, then run the engine
    pub async fn generate(annotator: &dyn Annotate, text: &str) -> Result<Self> {
        let stream = annotator.annotate(text).await?;
        Ok(Self::from_stream(stream))
    }

    fn run(&mut self) {
        let mut scan = ClauseScan::new(self.stream.len());

        while let Some((start, end)) = scan.next_candidate(&self.stream) {
            match syntax::map_syntax(&self.stream, start, end) {
                Some(map) => {
                    let map_end = map.end;
                    match map.into_question() {
                        Some(question) => {
                            self.questions.push(question);
                            scan.accept(map_end);
                        }
                        None => {
                            tracing::debug!(start, end, "clause incomplete, skipping boundary");
                            scan.reject();
                        }
                    }
                }
                None => {
                    tracing::debug!(start, end, "clause unmappable, skipping boundary");
                    scan.reject();
                }
            }
        }

        // closing clause with no trailing punctuation
        if let Some((start, end)) = scan.remainder() {
            if let Some(question) =
                syntax::map_syntax(&self.stream, start, end).and_then(|map| map.into_question())
            {
                self.questions.push(question);
            }
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
