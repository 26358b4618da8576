use crate::core::FeatureDomain;
use crate::core::instances::Example;

/// Pull-based, single-pass source of labelled examples.
///
/// Streams may be finite (files) or unbounded (generators). Every example must fit the stream's
/// [`FeatureDomain`], which stays fixed for the stream's lifetime. Streams are not rewound.
pub trait Stream {
    fn domain(&self) -> &FeatureDomain;

    /// Whether the stream *may* produce more examples.
    ///
    /// If this returns `false`, a following [`Stream::next_example`] must return `None`.
    fn has_more_examples(&self) -> bool;

    /// Produces the next example, or `None` once the stream is exhausted.
    fn next_example(&mut self) -> Option<Example>;
}
