use miette::Diagnostic;

/// Failures of the annotation engine.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum RenderError {
    /// An annotation request with out-of-bounds or degenerate offsets.
    /// Recoverable: reject the request and keep going.
    #[error("annotation range {start}..{end} is invalid for a text of {len} characters")]
    #[diagnostic(code(spanweave::range))]
    Range {
        start: usize,
        end: usize,
        len: usize,
    },

    /// The cluster splitter was handed an empty cluster. This can only come
    /// from a partitioner defect; the render is aborted with no output.
    #[error("cluster splitter invoked with no spans over {lo}..{hi}")]
    #[diagnostic(
        code(spanweave::empty_cluster),
        help("this indicates a bug in the interval partitioner, not a caller error")
    )]
    EmptyCluster { lo: usize, hi: usize },

    /// The sink's underlying writer failed.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}
