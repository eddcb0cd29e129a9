//! Annotation boundary: typed labels, token streams, and the sidecar client

pub mod client;
pub mod labels;
pub mod stream;

pub use client::{Annotate, RemoteAnnotator};
pub use labels::{DepLabel, EntityKind, FineTag, Pos};
pub use stream::{AnnotatedToken, NounChunk, Span, TokenStream, TokenStreamBuilder};
