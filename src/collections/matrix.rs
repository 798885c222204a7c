//! Dense trace collection backed by a 2-D array.
//!
//! Traces are the columns of an `ndarray::Array2`, rows are positions. The
//! matrix keeps duplicates and insertion order, so `keep_top(n)` is simply
//! "the first `n` columns". Derived collections are freshly sliced arrays;
//! the source matrix is never written to after construction.

use ndarray::{s, Array2, ArrayView1, Axis};

use crate::error::{Error, Result};
use crate::traits::{Symbol, TraceCollection};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceMatrix {
    data: Array2<Symbol>, // shape = (height, size)
    alphabet: usize,
}

impl TraceMatrix {
    /// Build a binary matrix from equal-length traces.
    pub fn new<T: AsRef<[Symbol]>>(traces: &[T]) -> Result<Self> {
        Self::with_alphabet(traces, 2)
    }

    /// Build a matrix over symbols `0..alphabet`.
    ///
    /// Fails with [`Error::MalformedInput`] on ragged lengths or out-of-range
    /// symbols and with [`Error::UnsupportedAlphabet`] when `alphabet < 2`.
    pub fn with_alphabet<T: AsRef<[Symbol]>>(traces: &[T], alphabet: usize) -> Result<Self> {
        if alphabet < 2 || alphabet > Symbol::MAX as usize + 1 {
            return Err(Error::UnsupportedAlphabet { q: alphabet });
        }
        let height = traces.first().map_or(0, |t| t.as_ref().len());
        for (idx, trace) in traces.iter().enumerate() {
            let trace = trace.as_ref();
            if trace.len() != height {
                return Err(Error::malformed(format!(
                    "trace {idx} has length {}, expected {height}",
                    trace.len()
                )));
            }
            if let Some(&bad) = trace.iter().find(|&&s| s as usize >= alphabet) {
                return Err(Error::malformed(format!(
                    "trace {idx} contains symbol {bad} outside alphabet of size {alphabet}"
                )));
            }
        }
        let data = Array2::from_shape_fn((height, traces.len()), |(row, col)| {
            traces[col].as_ref()[row]
        });
        Ok(Self { data, alphabet })
    }

    /// Wrap an existing `(height, size)` array without validation.
    pub fn from_array(data: Array2<Symbol>, alphabet: usize) -> Self {
        Self { data, alphabet }
    }

    /// Read-only view of the backing array.
    pub fn as_array(&self) -> &Array2<Symbol> {
        &self.data
    }

    /// Iterate over traces in insertion order.
    pub fn traces(&self) -> impl Iterator<Item = ArrayView1<'_, Symbol>> {
        self.data.axis_iter(Axis(1))
    }

    fn empty_like(&self, height: usize) -> Self {
        Self {
            data: Array2::zeros((height, 0)),
            alphabet: self.alphabet,
        }
    }
}

/// 0-based index of the first occurrence of `value`, if any.
fn first_index(trace: ArrayView1<'_, Symbol>, value: Symbol) -> Option<usize> {
    trace.iter().position(|&s| s == value)
}

impl TraceCollection for TraceMatrix {
    fn size(&self) -> usize {
        self.data.ncols()
    }

    fn height(&self) -> usize {
        self.data.nrows()
    }

    fn alphabet_size(&self) -> usize {
        self.alphabet
    }

    fn skip_to(&self, value: Symbol, position: usize) -> Self {
        let height = self.height();
        if position == 0 || position > height {
            return self.empty_like(height.saturating_sub(position));
        }
        let kept: Vec<usize> = self
            .traces()
            .enumerate()
            .filter(|(_, trace)| first_index(*trace, value) == Some(position - 1))
            .map(|(col, _)| col)
            .collect();
        let data = Array2::from_shape_fn((height - position, kept.len()), |(row, col)| {
            self.data[[position + row, kept[col]]]
        });
        Self {
            data,
            alphabet: self.alphabet,
        }
    }

    fn count_after_skipping(&self, value: Symbol, position: usize) -> usize {
        if position == 0 {
            return 0;
        }
        self.traces()
            .filter(|trace| first_index(*trace, value) == Some(position - 1))
            .count()
    }

    fn keep_top(&self, n: usize) -> Self {
        let n = n.min(self.size());
        Self {
            data: self.data.slice(s![.., ..n]).to_owned(),
            alphabet: self.alphabet,
        }
    }

    fn unique_member(&self) -> Result<Vec<Symbol>> {
        if self.size() != 1 {
            return Err(Error::InvalidUniqueExtraction { size: self.size() });
        }
        Ok(self.data.column(0).to_vec())
    }

    fn first_occurrence_order(&self) -> (usize, usize) {
        let mut zero_first = 0;
        let mut one_first = 0;
        for trace in self.traces() {
            match (first_index(trace, 0), first_index(trace, 1)) {
                (Some(z), Some(o)) if z < o => zero_first += 1,
                (Some(_), Some(_)) => one_first += 1,
                _ => {}
            }
        }
        (zero_first, one_first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn matrix(rows: &[&[Symbol]]) -> TraceMatrix {
        TraceMatrix::new(rows).unwrap()
    }

    #[test]
    fn shape_follows_traces() {
        let m = matrix(&[&[1, 0], &[1, 0], &[1, 1], &[0, 1]]);
        assert_eq!(m.size(), 4);
        assert_eq!(m.height(), 2);
        assert_eq!(m.alphabet_size(), 2);
        assert_eq!(m.as_array().shape(), &[2, 4]);
    }

    #[test]
    fn rejects_ragged_and_out_of_alphabet() {
        let ragged: Vec<Vec<Symbol>> = vec![vec![0, 1], vec![1]];
        assert_matches!(TraceMatrix::new(&ragged), Err(Error::MalformedInput(_)));
        let ternary: Vec<Vec<Symbol>> = vec![vec![0, 2]];
        assert_matches!(TraceMatrix::new(&ternary), Err(Error::MalformedInput(_)));
        assert!(TraceMatrix::with_alphabet(&ternary, 3).is_ok());
        assert_matches!(
            TraceMatrix::with_alphabet(&ternary, 1),
            Err(Error::UnsupportedAlphabet { q: 1 })
        );
    }

    #[test]
    fn skip_conditions_on_first_occurrence() {
        let m = matrix(&[&[0, 0, 1], &[1, 0, 1], &[1, 1, 0], &[0, 1, 1]]);
        // first 0 at offset 2: only [1,0,1]
        let u = m.skip_to(0, 2);
        assert_eq!(u.size(), 1);
        assert_eq!(u.height(), 1);
        assert_eq!(u.unique_member().unwrap(), vec![1]);
        assert_eq!(m.count_after_skipping(0, 2), 1);
        // first 0 at offset 3: [1,1,0] leaves an empty suffix
        let u = m.skip_to(0, 3);
        assert_eq!(u.size(), 1);
        assert_eq!(u.height(), 0);
        // starts with 1
        assert_eq!(m.count_after_skipping(1, 1), 2);
        assert_eq!(m.skip_to(1, 1).as_array().shape(), &[2, 2]);
    }

    #[test]
    fn skip_past_height_is_empty() {
        let m = matrix(&[&[0, 1]]);
        let u = m.skip_to(1, 5);
        assert!(u.is_empty());
        assert_eq!(u.height(), 0);
        assert_eq!(m.count_after_skipping(1, 0), 0);
    }

    #[test]
    fn keep_top_preserves_insertion_order() {
        let m = matrix(&[&[1, 0], &[1, 0], &[1, 1], &[0, 1]]);
        let kept = m.keep_top(3);
        assert_eq!(kept.size(), 3);
        let cols: Vec<Vec<Symbol>> = kept.traces().map(|c| c.to_vec()).collect();
        assert_eq!(cols, vec![vec![1, 0], vec![1, 0], vec![1, 1]]);
        assert_eq!(m.keep_top(10).size(), 4);
        // source untouched
        assert_eq!(m.size(), 4);
    }

    #[test]
    fn unique_member_requires_single_trace() {
        let m = matrix(&[&[1, 0], &[0, 1]]);
        assert_matches!(
            m.unique_member(),
            Err(Error::InvalidUniqueExtraction { size: 2 })
        );
        assert_eq!(m.keep_top(1).unique_member().unwrap(), vec![1, 0]);
    }

    #[test]
    fn first_occurrence_order_ignores_constant_traces() {
        let m = matrix(&[&[0, 0, 1], &[0, 1, 0], &[1, 0, 1], &[1, 1, 1], &[0, 0, 0]]);
        assert_eq!(m.first_occurrence_order(), (2, 1));
    }
}
