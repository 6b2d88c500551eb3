use crate::error::RenderError;
use serde::{Deserialize, Serialize};
use spanweave_styles::StyleHandle;
use std::cmp::Ordering;
use std::sync::{Mutex, PoisonError};

/// A half-open character range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharSpan {
    pub start: usize,
    pub end: usize,
}

impl CharSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// An annotation request as produced by external detectors: a span plus a
/// style reference. The serde shape is the wire form for span sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRequest {
    pub start: usize,
    pub end: usize,
    pub style: StyleHandle,
}

/// One stored annotation. `seq` is the insertion sequence number that makes
/// the store order total even when coordinates coincide; fragments created by
/// the splitter inherit the parent's `seq` along with its style.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub span: CharSpan,
    pub style: StyleHandle,
    seq: u64,
}

impl Annotation {
    pub(crate) fn fragment(&self, start: usize, end: usize) -> Annotation {
        Annotation {
            span: CharSpan::new(start, end),
            style: self.style.clone(),
            seq: self.seq,
        }
    }
}

impl PartialEq for Annotation {
    fn eq(&self, other: &Self) -> bool {
        self.span == other.span && self.seq == other.seq
    }
}

impl Eq for Annotation {}

impl PartialOrd for Annotation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Annotation {
    fn cmp(&self, other: &Self) -> Ordering {
        // start ascending, then end ascending (shorter first), then the
        // insertion counter so two distinct requests never compare equal
        (self.span.start, self.span.end, self.seq).cmp(&(
            other.span.start,
            other.span.end,
            other.seq,
        ))
    }
}

/// Ordered collection of annotation requests for one text buffer.
///
/// `add` is safe for concurrent producers; callers must let all producers
/// finish before rendering from a snapshot.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    len: usize,
    inner: Mutex<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    spans: Vec<Annotation>,
    next_seq: u64,
}

impl AnnotationStore {
    /// A store for a text of `len` characters.
    pub fn for_len(len: usize) -> Self {
        Self {
            len,
            inner: Mutex::new(StoreInner::default()),
        }
    }

    /// Insert a request, preserving the total order. Duplicate coordinate
    /// pairs are retained, never merged.
    pub fn add(
        &self,
        start: usize,
        end: usize,
        style: impl Into<StyleHandle>,
    ) -> Result<(), RenderError> {
        if end <= start || end > self.len {
            return Err(RenderError::Range {
                start,
                end,
                len: self.len,
            });
        }
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let at = inner
            .spans
            .partition_point(|a| (a.span.start, a.span.end, a.seq) <= (start, end, seq));
        inner.spans.insert(
            at,
            Annotation {
                span: CharSpan::new(start, end),
                style: style.into(),
                seq,
            },
        );
        Ok(())
    }

    pub fn add_request(&self, request: &AnnotationRequest) -> Result<(), RenderError> {
        self.add(request.start, request.end, request.style.clone())
    }

    /// The current ordered sequence of requests, for one render pass.
    pub fn snapshot(&self) -> Vec<Annotation> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .spans
            .clone()
    }

    pub fn count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .spans
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanweave_styles::StyleKind;

    fn spans_of(store: &AnnotationStore) -> Vec<(usize, usize)> {
        store
            .snapshot()
            .iter()
            .map(|a| (a.span.start, a.span.end))
            .collect()
    }

    #[test]
    fn rejects_out_of_bounds_and_degenerate_ranges() {
        let store = AnnotationStore::for_len(10);
        assert!(matches!(
            store.add(3, 3, StyleKind::Condition),
            Err(RenderError::Range { .. })
        ));
        assert!(matches!(
            store.add(5, 2, StyleKind::Condition),
            Err(RenderError::Range { .. })
        ));
        assert!(matches!(
            store.add(0, 11, StyleKind::Condition),
            Err(RenderError::Range { .. })
        ));
        assert!(matches!(
            store.add(12, 13, StyleKind::Condition),
            Err(RenderError::Range { .. })
        ));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn orders_by_start_then_shorter_end() {
        let store = AnnotationStore::for_len(50);
        store.add(10, 40, StyleKind::Condition).unwrap();
        store.add(5, 20, StyleKind::Condition).unwrap();
        store.add(10, 15, StyleKind::Condition).unwrap();
        assert_eq!(spans_of(&store), [(5, 20), (10, 15), (10, 40)]);
    }

    #[test]
    fn duplicate_coordinates_are_both_kept_in_insertion_order() {
        let store = AnnotationStore::for_len(50);
        store.add(3, 9, StyleKind::WeakWord).unwrap();
        store.add(3, 9, StyleKind::Condition).unwrap();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].style.kind, StyleKind::WeakWord);
        assert_eq!(snapshot[1].style.kind, StyleKind::Condition);
        assert!(snapshot[0] < snapshot[1]);
    }

    #[test]
    fn concurrent_adds_all_land() {
        let store = std::sync::Arc::new(AnnotationStore::for_len(1000));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store.add(t * 100 + i, t * 100 + i + 1, StyleKind::TimeMarker).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.count(), 200);
        let snapshot = store.snapshot();
        assert!(snapshot.windows(2).all(|w| w[0] < w[1]));
    }
}
