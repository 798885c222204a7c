use crate::engine::{ReconstructionPath, TraceEngine};
use crate::traits::TraceCollection;

pub struct TraceEngineBuilder<C: TraceCollection> {
    n: usize,
    traces: C,
    expected: Option<ReconstructionPath>,
}

impl<C: TraceCollection> TraceEngineBuilder<C> {
    pub fn new(n: usize, traces: C) -> Self {
        Self {
            n,
            traces,
            expected: None,
        }
    }
    pub fn expect_path(mut self, path: ReconstructionPath) -> Self {
        self.expected = Some(path);
        self
    }
    pub fn expect_subsequences(self) -> Self {
        self.expect_path(ReconstructionPath::Subsequences)
    }
    pub fn expect_supersequences(self) -> Self {
        self.expect_path(ReconstructionPath::Supersequences)
    }
    pub fn build(self) -> TraceEngine<C> {
        TraceEngine::with_expected_path(self.n, self.traces, self.expected)
    }
}
