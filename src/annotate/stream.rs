//! Token arena and span views over one annotated passage
//!
//! A [`TokenStream`] owns every token the annotator produced for a single
//! passage, in surface order, together with the noun-chunk table. Tokens
//! reference each other by index (head links, children lists, subtree
//! edges), so the core engine can walk the dependency tree without any
//! pointer graph. Construction goes through [`TokenStreamBuilder`], which
//! validates head links and derives everything the annotator does not
//! send: children lists, subtree edges, and chunk roots.

use crate::annotate::labels::{DepLabel, EntityKind, FineTag, Pos};
use crate::core::error::{GenquestError, Result};

/// One token with its full linguistic annotation
///
/// Immutable after [`TokenStreamBuilder::build`]; the core only ever
/// borrows these.
#[derive(Debug, Clone)]
pub struct AnnotatedToken {
    pub text: String,
    pub lemma: String,
    pub index: usize,
    pub pos: Pos,
    pub tag: FineTag,
    pub dep: DepLabel,
    pub entity: EntityKind,
    /// Index of the syntactic head; self-referential for sentence roots
    pub head: usize,
    children: Vec<usize>,
    left_edge: usize,
    right_edge: usize,
}

impl AnnotatedToken {
    /// Ordered dependents of this token
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    /// Index of the leftmost token in this token's subtree
    pub fn left_edge(&self) -> usize {
        self.left_edge
    }

    /// Index of the rightmost token in this token's subtree
    pub fn right_edge(&self) -> usize {
        self.right_edge
    }

    /// Whether this token is a sentence root (self-headed)
    pub fn is_root(&self) -> bool {
        self.head == self.index
    }
}

/// A noun-phrase span recognized by the annotator
#[derive(Debug, Clone, Copy)]
pub struct NounChunk {
    pub start: usize,
    pub end: usize,
    /// Head token of the phrase, derived at build time
    pub root: usize,
}

/// All tokens and noun chunks of one annotated passage
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<AnnotatedToken>,
    chunks: Vec<NounChunk>,
}

impl TokenStream {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AnnotatedToken> {
        self.tokens.get(index)
    }

    /// Token at `index`; panics when out of bounds
    pub fn token(&self, index: usize) -> &AnnotatedToken {
        &self.tokens[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnnotatedToken> {
        self.tokens.iter()
    }

    /// Borrowed view over `[start, end)`; bounds are clamped to the stream
    pub fn span(&self, start: usize, end: usize) -> Span<'_> {
        let end = end.min(self.len());
        let start = start.min(end);
        Span { stream: self, start, end }
    }

    /// The full subtree of `index` as a span
    pub fn subtree_span(&self, index: usize) -> Span<'_> {
        let token = &self.tokens[index];
        self.span(token.left_edge, token.right_edge + 1)
    }
}

/// A contiguous run of tokens `[start, end)` borrowed from a stream
#[derive(Debug, Clone, Copy)]
pub struct Span<'a> {
    stream: &'a TokenStream,
    start: usize,
    end: usize,
}

impl<'a> Span<'a> {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn stream(&self) -> &'a TokenStream {
        self.stream
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'a AnnotatedToken> {
        self.stream.tokens[self.start..self.end].iter()
    }

    /// Syntactic head of the span: the first token whose head falls
    /// outside the span (self-headed roots count)
    pub fn root(&self) -> Option<&'a AnnotatedToken> {
        if self.is_empty() {
            return None;
        }
        self.tokens()
            .find(|t| t.is_root() || !self.contains(t.head))
            .or_else(|| self.stream.get(self.start))
    }

    /// Noun chunks fully contained in this span
    pub fn noun_chunks(&self) -> impl Iterator<Item = &'a NounChunk> + '_ {
        self.stream
            .chunks
            .iter()
            .filter(move |c| c.start >= self.start && c.end <= self.end)
    }

    /// Surface text of the span, tokens joined with single spaces
    pub fn text(&self) -> String {
        self.tokens().map(|t| t.text.as_str()).collect::<Vec<_>>().join(" ")
    }
}

/// Assembles and validates a [`TokenStream`]
///
/// Used by the remote-annotator client to lift the wire payload into the
/// typed arena, and by tests to construct streams by hand.
#[derive(Debug, Default)]
pub struct TokenStreamBuilder {
    tokens: Vec<AnnotatedToken>,
    chunks: Vec<(usize, usize)>,
}

impl TokenStreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token; `head` is the index of its syntactic head
    /// (self-referential for sentence roots)
    #[allow(clippy::too_many_arguments)]
    pub fn token(
        mut self,
        text: &str,
        lemma: &str,
        pos: Pos,
        tag: FineTag,
        dep: DepLabel,
        entity: EntityKind,
        head: usize,
    ) -> Self {
        let index = self.tokens.len();
        self.tokens.push(AnnotatedToken {
            text: text.to_string(),
            lemma: lemma.to_string(),
            index,
            pos,
            tag,
            dep,
            entity,
            head,
            children: Vec::new(),
            left_edge: index,
            right_edge: index,
        });
        self
    }

    /// Register a noun-chunk span `[start, end)`
    pub fn noun_chunk(mut self, start: usize, end: usize) -> Self {
        self.chunks.push((start, end));
        self
    }

    /// Validate head links, derive children lists, subtree edges, and
    /// chunk roots
    pub fn build(self) -> Result<TokenStream> {
        let mut tokens = self.tokens;
        let len = tokens.len();

        for token in &tokens {
            if token.head >= len {
                return Err(GenquestError::InvalidStream(format!(
                    "token {} has head {} outside stream of length {}",
                    token.index, token.head, len
                )));
            }
        }

        // Every head chain must reach a self-headed root within len steps,
        // otherwise the head links contain a cycle.
        for start in 0..len {
            let mut current = start;
            let mut steps = 0;
            while tokens[current].head != current {
                current = tokens[current].head;
                steps += 1;
                if steps > len {
                    return Err(GenquestError::InvalidStream(format!(
                        "cycle in head links reachable from token {}",
                        start
                    )));
                }
            }
        }

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); len];
        for index in 0..len {
            let head = tokens[index].head;
            if head != index {
                children[head].push(index);
            }
        }
        for (index, child_list) in children.into_iter().enumerate() {
            tokens[index].children = child_list;
        }

        // Subtree edges: process deepest tokens first so child edges are
        // final before they merge into their head.
        let depth = |mut i: usize| {
            let mut d = 0;
            while tokens[i].head != i {
                i = tokens[i].head;
                d += 1;
            }
            d
        };
        let mut order: Vec<usize> = (0..len).collect();
        order.sort_by_key(|&i| std::cmp::Reverse(depth(i)));
        for index in order {
            let head = tokens[index].head;
            if head != index {
                let (child_left, child_right) = (tokens[index].left_edge, tokens[index].right_edge);
                let head_token = &mut tokens[head];
                head_token.left_edge = head_token.left_edge.min(child_left);
                head_token.right_edge = head_token.right_edge.max(child_right);
            }
        }

        let mut chunks = Vec::with_capacity(self.chunks.len());
        for (start, end) in self.chunks {
            if start >= end || end > len {
                return Err(GenquestError::InvalidStream(format!(
                    "noun chunk [{}, {}) out of bounds for stream of length {}",
                    start, end, len
                )));
            }
            let root = (start..end)
                .find(|&i| tokens[i].head == i || tokens[i].head < start || tokens[i].head >= end)
                .unwrap_or(end - 1);
            chunks.push(NounChunk { start, end, root });
        }

        Ok(TokenStream { tokens, chunks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "The cat chased the mouse ." with the standard parse
    fn cat_stream() -> TokenStream {
        TokenStreamBuilder::new()
            .token("The", "the", Pos::Det, FineTag::Dt, DepLabel::Det, EntityKind::None, 1)
            .token("cat", "cat", Pos::Noun, FineTag::Nn, DepLabel::Nsubj, EntityKind::None, 2)
            .token("chased", "chase", Pos::Verb, FineTag::Vbd, DepLabel::Root, EntityKind::None, 2)
            .token("the", "the", Pos::Det, FineTag::Dt, DepLabel::Det, EntityKind::None, 4)
            .token("mouse", "mouse", Pos::Noun, FineTag::Nn, DepLabel::Dobj, EntityKind::None, 2)
            .token(".", ".", Pos::Punct, FineTag::SentClose, DepLabel::Punct, EntityKind::None, 2)
            .noun_chunk(0, 2)
            .noun_chunk(3, 5)
            .build()
            .unwrap()
    }

    #[test]
    fn derives_children_in_surface_order() {
        let stream = cat_stream();
        assert_eq!(stream.token(2).children(), &[1, 4, 5]);
        assert_eq!(stream.token(1).children(), &[0]);
    }

    #[test]
    fn derives_subtree_edges() {
        let stream = cat_stream();
        assert_eq!(stream.token(2).left_edge(), 0);
        assert_eq!(stream.token(2).right_edge(), 5);
        assert_eq!(stream.token(4).left_edge(), 3);
        assert_eq!(stream.token(4).right_edge(), 4);
    }

    #[test]
    fn span_root_is_outside_headed_token() {
        let stream = cat_stream();
        let clause = stream.span(0, 5);
        assert_eq!(clause.root().unwrap().index, 2);

        // a sub-span not containing the verb roots at its highest token
        let subject = stream.span(0, 2);
        assert_eq!(subject.root().unwrap().index, 1);
    }

    #[test]
    fn chunk_roots_are_head_nouns() {
        let stream = cat_stream();
        let clause = stream.span(0, 6);
        let roots: Vec<usize> = clause.noun_chunks().map(|c| c.root).collect();
        assert_eq!(roots, vec![1, 4]);
    }

    #[test]
    fn noun_chunks_filtered_by_containment() {
        let stream = cat_stream();
        let clause = stream.span(0, 2);
        assert_eq!(clause.noun_chunks().count(), 1);
    }

    #[test]
    fn subtree_span_covers_edges() {
        let stream = cat_stream();
        let subject = stream.subtree_span(1);
        assert_eq!((subject.start(), subject.end()), (0, 2));
        assert_eq!(subject.text(), "The cat");
    }

    #[test]
    fn rejects_out_of_range_head() {
        let result = TokenStreamBuilder::new()
            .token("x", "x", Pos::Noun, FineTag::Nn, DepLabel::Root, EntityKind::None, 7)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_cyclic_heads() {
        let result = TokenStreamBuilder::new()
            .token("a", "a", Pos::Noun, FineTag::Nn, DepLabel::Dobj, EntityKind::None, 1)
            .token("b", "b", Pos::Noun, FineTag::Nn, DepLabel::Dobj, EntityKind::None, 0)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_out_of_bounds_chunk() {
        let result = TokenStreamBuilder::new()
            .token("x", "x", Pos::Noun, FineTag::Nn, DepLabel::Root, EntityKind::None, 0)
            .noun_chunk(0, 2)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn empty_stream_builds() {
        let stream = TokenStreamBuilder::new().build().unwrap();
        assert!(stream.is_empty());
    }
}
