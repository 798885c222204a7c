//! Reading trace files.
//!
//! A trace file holds one trace per line, symbols written as `0`/`1` tokens
//! separated by whitespace. Every line must decode to the same length;
//! blank lines are ignored. Parsing happens once, up front, so a malformed
//! file is rejected before any reconstruction starts.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::collections::{RankedTrie, RankedTrieBuilder, TraceMatrix};
use crate::error::{Error, Result};
use crate::traits::Symbol;

/// Parse one line into a binary trace. `line_no` is 1-based and only used
/// for error messages.
pub fn parse_line(line: &str, line_no: usize) -> Result<Vec<Symbol>> {
    line.split_whitespace()
        .map(|token| match token {
            "0" => Ok(0),
            "1" => Ok(1),
            other => Err(Error::malformed(format!(
                "line {line_no}: token '{other}' is not a binary symbol"
            ))),
        })
        .collect()
}

/// Traces read from a file, in file order, all of one length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceSet {
    traces: Vec<Vec<Symbol>>,
    trace_len: usize,
}

impl TraceSet {
    /// Validate and collect already-decoded traces.
    pub fn from_traces(traces: Vec<Vec<Symbol>>) -> Result<Self> {
        let mut set = Self::default();
        for (idx, trace) in traces.into_iter().enumerate() {
            set.push(trace, idx + 1)?;
        }
        Ok(set)
    }

    fn push(&mut self, trace: Vec<Symbol>, line_no: usize) -> Result<()> {
        if self.traces.is_empty() {
            self.trace_len = trace.len();
        } else if trace.len() != self.trace_len {
            return Err(Error::malformed(format!(
                "line {line_no}: trace has length {}, expected {}",
                trace.len(),
                self.trace_len
            )));
        }
        if let Some(&bad) = trace.iter().find(|&&s| s > 1) {
            return Err(Error::malformed(format!(
                "line {line_no}: symbol {bad} is not binary"
            )));
        }
        self.traces.push(trace);
        Ok(())
    }

    /// Common length of the traces (0 when there are none).
    pub fn trace_len(&self) -> usize {
        self.trace_len
    }

    /// Number of traces, duplicates included.
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    pub fn traces(&self) -> &[Vec<Symbol>] {
        &self.traces
    }

    /// Dense realization; keeps duplicates and file order.
    pub fn to_matrix(&self) -> Result<TraceMatrix> {
        TraceMatrix::new(&self.traces)
    }

    /// Trie realization; duplicates collapse.
    pub fn to_trie(&self) -> Result<RankedTrie> {
        let mut builder = RankedTrieBuilder::new();
        for trace in &self.traces {
            builder.insert(trace)?;
        }
        Ok(builder.build())
    }
}

/// Read every trace from `reader`.
pub fn read_traces<R: BufRead>(reader: R) -> Result<TraceSet> {
    let mut set = TraceSet::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let trace = parse_line(&line, idx + 1)?;
        set.push(trace, idx + 1)?;
    }
    Ok(set)
}

/// Read a trace file from disk.
pub fn read_trace_file(path: impl AsRef<Path>) -> Result<TraceSet> {
    let file = File::open(path)?;
    read_traces(BufReader::new(file))
}

/// Read a trace file straight into a matrix.
pub fn load_matrix(path: impl AsRef<Path>) -> Result<TraceMatrix> {
    read_trace_file(path)?.to_matrix()
}

/// Read a trace file straight into a trie.
pub fn load_trie(path: impl AsRef<Path>) -> Result<RankedTrie> {
    read_trace_file(path)?.to_trie()
}
