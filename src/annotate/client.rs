//! Client for the external annotation sidecar
//!
//! The annotation engine (tokenization, tagging, dependency parsing,
//! NER, noun chunking) lives in a separate service; this client is the
//! only place that talks to it. The wire payload carries string labels;
//! they resolve into the closed enums during deserialization, so nothing
//! downstream of this file ever sees a raw label.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::annotate::labels::{DepLabel, EntityKind, FineTag, Pos};
use crate::annotate::stream::{TokenStream, TokenStreamBuilder};
use crate::core::config;
use crate::core::error::{GenquestError, Result};

/// Source of annotated token streams
///
/// The production implementation is [`RemoteAnnotator`]; tests hand the
/// core pre-built streams instead.
#[async_trait]
pub trait Annotate: Send + Sync {
    async fn annotate(&self, text: &str) -> Result<TokenStream>;
}

/// HTTP client for the annotation sidecar
///
/// Process-wide, read-only after construction; shared across requests
/// behind an `Arc`.
pub struct RemoteAnnotator {
    client: Client,
    base_url: String,
}

impl RemoteAnnotator {
    /// Create a client with an explicit base URL and request timeout
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenquestError::Annotation(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the environment and global config
    ///
    /// Optional: ANNOTATOR_URL (defaults to the configured annotator_url)
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("ANNOTATOR_URL").unwrap_or_else(|_| config().annotator_url.clone());
        Self::new(base_url, config().annotator_timeout())
    }

    fn endpoint(&self) -> String {
        format!("{}/annotate", self.base_url)
    }
}

#[async_trait]
impl Annotate for RemoteAnnotator {
    async fn annotate(&self, text: &str) -> Result<TokenStream> {
        let request = AnnotateRequest { text };

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| GenquestError::Annotation(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenquestError::Annotation(format!(
                "annotator returned {}: {}",
                status, error_text
            )));
        }

        let payload: AnnotatePayload = response
            .json()
            .await
            .map_err(|e| GenquestError::Annotation(e.to_string()))?;

        payload.into_stream()
    }
}

// Annotation service wire format

#[derive(Serialize)]
struct AnnotateRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct AnnotatePayload {
    tokens: Vec<RawToken>,
    #[serde(default)]
    noun_chunks: Vec<(usize, usize)>,
}

#[derive(Deserialize)]
struct RawToken {
    text: String,
    lemma: String,
    pos: Pos,
    tag: FineTag,
    dep: DepLabel,
    head: usize,
    #[serde(default)]
    entity: EntityKind,
}

impl AnnotatePayload {
    fn into_stream(self) -> Result<TokenStream> {
        let mut builder = TokenStreamBuilder::new();
        for raw in &self.tokens {
            builder = builder.token(
                &raw.text, &raw.lemma, raw.pos, raw.tag, raw.dep, raw.entity, raw.head,
            );
        }
        for &(start, end) in &self.noun_chunks {
            builder = builder.noun_chunk(start, end);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_normalizes_trailing_slash() {
        let annotator =
            RemoteAnnotator::new("http://localhost:9000/".into(), Duration::from_secs(5)).unwrap();
        assert_eq!(annotator.endpoint(), "http://localhost:9000/annotate");
    }

    #[test]
    fn payload_deserializes_and_builds_stream() {
        let json = r#"{
            "tokens": [
                {"text": "Birds", "lemma": "bird", "pos": "NOUN", "tag": "NNS", "dep": "nsubj", "head": 1, "entity": ""},
                {"text": "fly", "lemma": "fly", "pos": "VERB", "tag": "VBP", "dep": "ROOT", "head": 1, "entity": ""},
                {"text": ".", "lemma": ".", "pos": "PUNCT", "tag": ".", "dep": "punct", "head": 1, "entity": ""}
            ],
            "noun_chunks": [[0, 1]]
        }"#;
        let payload: AnnotatePayload = serde_json::from_str(json).unwrap();
        let stream = payload.into_stream().unwrap();

        assert_eq!(stream.len(), 3);
        assert_eq!(stream.token(0).dep, DepLabel::Nsubj);
        assert_eq!(stream.token(1).tag, FineTag::Vbp);
        assert_eq!(stream.token(1).right_edge(), 2);
    }

    #[test]
    fn payload_with_bad_heads_is_rejected() {
        let json = r#"{
            "tokens": [
                {"text": "x", "lemma": "x", "pos": "NOUN", "tag": "NN", "dep": "ROOT", "head": 9}
            ],
            "noun_chunks": []
        }"#;
        let payload: AnnotatePayload = serde_json::from_str(json).unwrap();
        assert!(payload.into_stream().is_err());
    }
}
