use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{ErrorInfo, LabsError};

/// Ordered ±1 sequence scored by the LABS objective.
///
/// Elements are stored as `f32` so a sequence can be handed to the batch
/// evaluator without conversion. Nothing here enforces the ±1 constraint;
/// [`Sequence::is_binary`] reports whether it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Sequence(Vec<f32>);

impl Sequence {
    /// Wraps raw element values.
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// Builds a sequence from integer signs.
    pub fn from_signs(signs: &[i8]) -> Self {
        Self(signs.iter().map(|&sign| f32::from(sign)).collect())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrowed view over the element values.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Consumes the sequence and returns the raw values.
    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }

    /// Flips the sign of the element at `index` in place.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn flip(&mut self, index: usize) {
        self.0[index] = -self.0[index];
    }

    /// Returns a copy with the element at `index` negated.
    pub fn flipped(&self, index: usize) -> Self {
        let mut trial = self.clone();
        trial.flip(index);
        trial
    }

    /// Returns the elementwise negation.
    pub fn negated(&self) -> Self {
        Self(self.0.iter().map(|value| -value).collect())
    }

    /// Returns the sequence in reverse order.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    /// Returns true when every element is exactly +1 or -1.
    pub fn is_binary(&self) -> bool {
        self.0.iter().all(|&value| value == 1.0 || value == -1.0)
    }

    /// Collapses each element to its sign, mapping zero to +1.
    pub fn to_signs(&self) -> Vec<i8> {
        self.0
            .iter()
            .map(|&value| if value < 0.0 { -1 } else { 1 })
            .collect()
    }
}

impl From<Vec<f32>> for Sequence {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}

impl AsRef<[f32]> for Sequence {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = LabsError;

    /// Parses comma or whitespace separated numbers, e.g. `"1,1,-1"`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(position, token)| {
                token.parse::<f32>().map_err(|err| {
                    LabsError::Shape(
                        ErrorInfo::new("sequence-parse", err.to_string())
                            .with_context("position", position)
                            .with_context("token", token),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Rectangular `rows × cols` batch of sequences sharing one length.
///
/// Backed by an [`Array2`]; row `i` is candidate `i`. Serialized as
/// `{rows, cols, data}` with `data` in row-major order, and deserialized
/// through [`Batch::from_flat`] so the shape is always checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawBatch", try_from = "RawBatch")]
pub struct Batch(Array2<f32>);

#[derive(Serialize, Deserialize)]
struct RawBatch {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl From<Batch> for RawBatch {
    fn from(batch: Batch) -> Self {
        let (rows, cols) = batch.0.dim();
        Self {
            rows,
            cols,
            data: batch.0.iter().copied().collect(),
        }
    }
}

impl TryFrom<RawBatch> for Batch {
    type Error = LabsError;

    fn try_from(raw: RawBatch) -> Result<Self, Self::Error> {
        Batch::from_flat(raw.rows, raw.cols, raw.data)
    }
}

impl Batch {
    /// Creates a zero-filled batch.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self(Array2::zeros((rows, cols)))
    }

    /// Wraps an existing array.
    pub fn from_array(array: Array2<f32>) -> Self {
        Self(array)
    }

    /// Wraps row-major storage, checking that it matches the shape.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, LabsError> {
        let len = data.len();
        Array2::from_shape_vec((rows, cols), data)
            .map(Self)
            .map_err(|err| {
                LabsError::Shape(
                    ErrorInfo::new("batch-flat-length", err.to_string())
                        .with_shape(rows, cols)
                        .with_context("len", len),
                )
            })
    }

    /// Stacks rows of equal length into a batch.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self, LabsError> {
        let cols = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(LabsError::Shape(
                    ErrorInfo::new("batch-ragged", "batch rows must share one length")
                        .with_context("row", index)
                        .with_context("expected", cols)
                        .with_context("found", row.len())
                        .with_hint("group sequences by length before stacking them"),
                ));
            }
            data.extend_from_slice(row);
        }
        Self::from_flat(rows.len(), cols, data)
    }

    /// Wraps a single sequence as a 1×N batch.
    pub fn from_sequence(sequence: &Sequence) -> Self {
        Self(Array1::from(sequence.as_slice().to_vec()).insert_axis(Axis(0)))
    }

    /// Number of sequences in the batch.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Length shared by every sequence.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// Returns true when the batch holds no rows.
    pub fn is_empty(&self) -> bool {
        self.0.nrows() == 0
    }

    /// Read-only view of the whole batch.
    pub fn view(&self) -> ArrayView2<'_, f32> {
        self.0.view()
    }

    /// Underlying array.
    pub fn as_array(&self) -> &Array2<f32> {
        &self.0
    }

    /// Mutable access to the underlying array.
    pub fn as_array_mut(&mut self) -> &mut Array2<f32> {
        &mut self.0
    }

    /// Consumes the batch and returns the array.
    pub fn into_array(self) -> Array2<f32> {
        self.0
    }

    /// View of row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= rows`.
    pub fn row(&self, index: usize) -> ArrayView1<'_, f32> {
        self.0.row(index)
    }

    /// Iterates over rows in order.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = ArrayView1<'_, f32>> + '_ {
        self.0.outer_iter()
    }

    /// Copies row `index` out as a standalone sequence.
    pub fn sequence(&self, index: usize) -> Sequence {
        Sequence::new(self.row(index).to_vec())
    }
}

/// Outcome of one solver invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverResult {
    /// Wall-clock seconds from entry to return.
    pub time_taken: f64,
    /// Lowest energy found, or `+∞` when no candidate was evaluated.
    ///
    /// `+∞` is written as JSON `null` and read back as `+∞`.
    #[serde(with = "energy_or_unbounded")]
    pub best_energy: f64,
}

impl SolverResult {
    /// Result for a run that evaluated no candidates.
    pub fn empty(time_taken: f64) -> Self {
        Self {
            time_taken,
            best_energy: f64::INFINITY,
        }
    }
}

mod energy_or_unbounded {
    use super::*;

    pub fn serialize<S: Serializer>(energy: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        energy.is_finite().then_some(*energy).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
