use crate::buffer::TextBuffer;
use crate::error::RenderError;
use crate::store::Annotation;
use crate::MarkupSink;

/// Interval partitioner: split `lo..hi` into alternating raw-text gaps and
/// maximal overlap clusters, left to right, dispatching each cluster to the
/// splitter.
///
/// `spans` is the store-ordered subset covering `lo..hi`. Every character of
/// the range is written to the sink exactly once.
pub(crate) fn render_range<S: MarkupSink>(
    buf: &TextBuffer,
    lo: usize,
    hi: usize,
    spans: &[Annotation],
    sink: &mut S,
) -> Result<(), RenderError>
where
    RenderError: From<S::Error>,
{
    let Some(first) = spans.first() else {
        if hi > lo {
            sink.write_text(buf.slice(lo, hi))?;
        }
        return Ok(());
    };

    if first.span.start > lo {
        sink.write_text(buf.slice(lo, first.span.start))?;
    }

    // A span joins the current cluster iff it starts before the furthest end
    // seen so far; otherwise the cluster is closed and a new one begins.
    let mut cluster_from = 0;
    let mut cluster_lo = first.span.start;
    let mut furthest_end = first.span.end;

    for (i, ann) in spans.iter().enumerate().skip(1) {
        if ann.span.start < furthest_end {
            furthest_end = furthest_end.max(ann.span.end);
        } else {
            split_cluster(buf, cluster_lo, furthest_end, &spans[cluster_from..i], sink)?;
            if ann.span.start > furthest_end {
                sink.write_text(buf.slice(furthest_end, ann.span.start))?;
            }
            cluster_from = i;
            cluster_lo = ann.span.start;
            furthest_end = ann.span.end;
        }
    }

    split_cluster(buf, cluster_lo, furthest_end, &spans[cluster_from..], sink)?;
    if furthest_end < hi {
        sink.write_text(buf.slice(furthest_end, hi))?;
    }
    Ok(())
}

/// Cluster splitter: resolve one cluster of mutually overlapping spans into a
/// nested structure.
///
/// The dominant span (longest, ties broken by store order) takes outer
/// nesting priority; every other member is partitioned against its bounds,
/// splitting boundary-crossers into fragments that keep their style, and the
/// three induced regions are partitioned recursively.
pub(crate) fn split_cluster<S: MarkupSink>(
    buf: &TextBuffer,
    lo: usize,
    hi: usize,
    cluster: &[Annotation],
    sink: &mut S,
) -> Result<(), RenderError>
where
    RenderError: From<S::Error>,
{
    if cluster.is_empty() {
        return Err(RenderError::EmptyCluster { lo, hi });
    }
    tracing::trace!(lo, hi, members = cluster.len(), "splitting overlap cluster");

    let mut dom = 0;
    for (i, ann) in cluster.iter().enumerate().skip(1) {
        if ann.span.len() > cluster[dom].span.len() {
            dom = i;
        }
    }
    let d = cluster[dom].span;

    let mut left = Vec::new();
    let mut embedded = Vec::new();
    let mut right = Vec::new();
    for (i, ann) in cluster.iter().enumerate() {
        if i == dom {
            continue;
        }
        let s = ann.span;
        if s.end <= d.start {
            left.push(ann.clone());
        } else if s.start >= d.end {
            right.push(ann.clone());
        } else if s.start >= d.start && s.end <= d.end {
            embedded.push(ann.clone());
        } else if s.start < d.start {
            // crosses the left boundary; the dominant is maximal, so the
            // remainder cannot also cross the right boundary
            left.push(ann.fragment(s.start, d.start));
            embedded.push(ann.fragment(d.start, s.end));
        } else {
            embedded.push(ann.fragment(s.start, d.end));
            right.push(ann.fragment(d.end, s.end));
        }
    }
    // clipping can put fragments out of (start, end) order; restore it
    left.sort();
    embedded.sort();
    right.sort();

    let template = cluster[dom].style.resolve();
    render_range(buf, lo, d.start, &left, sink)?;
    sink.open_span(&template)?;
    render_range(buf, d.start, d.end, &embedded, sink)?;
    sink.close_span(&template)?;
    render_range(buf, d.end, hi, &right, sink)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AnnotationStore;
    use spanweave_styles::{SpanTemplate, StyleKind};

    /// Records markers as `{Class}` / `{/Class}` so nesting is easy to read.
    struct TestSink {
        buffer: String,
    }

    impl TestSink {
        fn new() -> Self {
            Self {
                buffer: String::new(),
            }
        }
    }

    impl MarkupSink for TestSink {
        type Error = std::fmt::Error;

        fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
            self.buffer.push_str(text);
            Ok(())
        }

        fn open_span(&mut self, template: &SpanTemplate) -> Result<(), Self::Error> {
            self.buffer.push('{');
            self.buffer.push_str(template.class());
            self.buffer.push('}');
            Ok(())
        }

        fn close_span(&mut self, template: &SpanTemplate) -> Result<(), Self::Error> {
            self.buffer.push_str("{/");
            self.buffer.push_str(template.class());
            self.buffer.push('}');
            Ok(())
        }
    }

    fn rendered(text: &str, spans: &[(usize, usize, StyleKind)]) -> String {
        let buf = TextBuffer::new(text);
        let store = AnnotationStore::for_len(buf.len());
        for (start, end, kind) in spans {
            store.add(*start, *end, *kind).unwrap();
        }
        let mut sink = TestSink::new();
        render_range(&buf, 0, buf.len(), &store.snapshot(), &mut sink).unwrap();
        sink.buffer
    }

    #[test]
    fn no_spans_is_verbatim() {
        assert_eq!(rendered("plain text", &[]), "plain text");
    }

    #[test]
    fn disjoint_spans_wrap_in_document_order() {
        let out = rendered(
            "ab cd ef",
            &[
                (6, 8, StyleKind::Condition),
                (0, 2, StyleKind::WeakWord),
            ],
        );
        assert_eq!(out, "{WeakWord}ab{/WeakWord} cd {Condition}ef{/Condition}");
    }

    #[test]
    fn embedded_span_nests_inside_dominant() {
        let out = rendered("0123456789", &[(1, 9, StyleKind::Condition), (3, 5, StyleKind::WeakWord)]);
        assert_eq!(
            out,
            "0{Condition}12{WeakWord}34{/WeakWord}5678{/Condition}9"
        );
    }

    #[test]
    fn partial_overlap_splits_the_shorter_span() {
        // dominant 0..6, the 4..9 span is split at 6
        let out = rendered("012345678", &[(0, 6, StyleKind::Condition), (4, 9, StyleKind::WeakWord)]);
        assert_eq!(
            out,
            "{Condition}0123{WeakWord}45{/WeakWord}{/Condition}{WeakWord}678{/WeakWord}"
        );
    }

    #[test]
    fn left_boundary_overlap_splits_into_left_and_embedded() {
        // dominant 3..9 (longest), 1..5 crosses its left boundary
        let out = rendered("0123456789", &[(1, 5, StyleKind::WeakWord), (3, 9, StyleKind::Condition)]);
        assert_eq!(
            out,
            "0{WeakWord}12{/WeakWord}{Condition}{WeakWord}34{/WeakWord}5678{/Condition}9"
        );
    }

    #[test]
    fn equal_length_tie_goes_to_store_order() {
        // identical coordinates: the earlier-added span becomes the outer one
        let out = rendered("0123456789", &[(2, 6, StyleKind::WeakWord), (2, 6, StyleKind::Condition)]);
        assert_eq!(out, "01{WeakWord}{Condition}2345{/Condition}{/WeakWord}6789");
    }

    #[test]
    fn transitive_overlap_forms_one_cluster() {
        // 0..4 and 6..10 do not touch, but 2..8 bridges them
        let out = rendered(
            "0123456789",
            &[
                (0, 4, StyleKind::WeakWord),
                (2, 8, StyleKind::Condition),
                (6, 10, StyleKind::TimeMarker),
            ],
        );
        // dominant 2..8 splits both neighbors at its boundaries
        assert_eq!(
            out,
            "{WeakWord}01{/WeakWord}{Condition}{WeakWord}23{/WeakWord}45{Time}67{/Time}{/Condition}{Time}89{/Time}"
        );
    }

    /// Fails on any crossing: a close must always match the template opened
    /// most recently, so two emitted regions are either disjoint or nested.
    struct NestingCheckSink {
        open: Vec<SpanTemplate>,
    }

    impl MarkupSink for NestingCheckSink {
        type Error = std::fmt::Error;

        fn write_text(&mut self, _text: &str) -> Result<(), Self::Error> {
            Ok(())
        }

        fn open_span(&mut self, template: &SpanTemplate) -> Result<(), Self::Error> {
            self.open.push(template.clone());
            Ok(())
        }

        fn close_span(&mut self, template: &SpanTemplate) -> Result<(), Self::Error> {
            match self.open.pop() {
                Some(top) => assert_eq!(top, *template, "crossing close"),
                None => panic!("close without open"),
            }
            Ok(())
        }
    }

    #[test]
    fn closes_always_match_the_most_recent_open() {
        let buf = TextBuffer::new("abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ");
        let store = AnnotationStore::for_len(buf.len());
        let kinds = [
            StyleKind::Condition,
            StyleKind::WeakWord,
            StyleKind::TimeMarker,
            StyleKind::Headphrase,
            StyleKind::LinkedPhrase,
            StyleKind::RepetitionMarker,
            StyleKind::LoopMarker,
        ];
        for (i, (start, end)) in [(5, 28), (8, 15), (8, 9), (18, 39), (23, 46), (25, 30), (44, 47)]
            .into_iter()
            .enumerate()
        {
            store.add(start, end, kinds[i]).unwrap();
        }
        let mut sink = NestingCheckSink { open: Vec::new() };
        render_range(&buf, 0, buf.len(), &store.snapshot(), &mut sink).unwrap();
        assert!(sink.open.is_empty(), "unclosed spans: {:?}", sink.open);
    }

    #[test]
    fn empty_cluster_is_an_internal_invariant_violation() {
        let buf = TextBuffer::new("abc");
        let mut sink = TestSink::new();
        let err = split_cluster(&buf, 0, 3, &[], &mut sink).unwrap_err();
        assert!(matches!(err, RenderError::EmptyCluster { lo: 0, hi: 3 }));
        assert!(sink.buffer.is_empty());
    }
}
