use nalgebra::DMatrix;
use serde::Serialize;
use std::collections::HashSet;

use crate::utils::ModelError;

/// An immutable continuous-time LTI model `x' = A x + B u`, `y = C x + D u`.
///
/// The output map is fixed: every state is observed directly (`C = I`) and
/// inputs never feed through to the outputs (`D = 0`). Instances are only
/// created through [`StateSpaceModel::new`], which checks that the matrix
/// shapes agree with the named axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSpaceModel {
    a: DMatrix<f64>,
    b: DMatrix<f64>,
    c: DMatrix<f64>,
    d: DMatrix<f64>,
    state_names: Vec<String>,
    input_names: Vec<String>,
}

/// Borrowed view of the four system matrices.
#[derive(Debug, Clone, Copy)]
pub struct StateSpaceMatrices<'a> {
    pub a: &'a DMatrix<f64>,
    pub b: &'a DMatrix<f64>,
    pub c: &'a DMatrix<f64>,
    pub d: &'a DMatrix<f64>,
}

impl StateSpaceModel {
    /// Creates a new model, deriving `C` and `D` from the dimensions.
    ///
    /// # Arguments
    /// * `a` - State matrix, must be `n x n`.
    /// * `b` - Input matrix, must be `n x m`.
    /// * `state_names` - `n` unique state names, in row order.
    /// * `input_names` - `m` unique input names, in column order.
    ///
    /// # Errors
    /// [`ModelError::Dimension`] if any shape or name list disagrees.
    pub fn new<S, I>(
        a: DMatrix<f64>,
        b: DMatrix<f64>,
        state_names: S,
        input_names: I,
    ) -> Result<Self, ModelError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let state_names: Vec<String> = state_names.into_iter().map(Into::into).collect();
        let input_names: Vec<String> = input_names.into_iter().map(Into::into).collect();
        let n = state_names.len();
        let m = input_names.len();

        if a.nrows() != n || a.ncols() != n {
            return Err(ModelError::Dimension(format!(
                "A is {}x{} but {} states are named",
                a.nrows(),
                a.ncols(),
                n
            )));
        }
        if b.nrows() != n {
            return Err(ModelError::Dimension(format!(
                "B has {} rows but {} states are named",
                b.nrows(),
                n
            )));
        }
        if b.ncols() != m {
            return Err(ModelError::Dimension(format!(
                "B has {} columns but {} inputs are named",
                b.ncols(),
                m
            )));
        }
        ensure_unique("state", &state_names)?;
        ensure_unique("input", &input_names)?;

        Ok(Self {
            c: DMatrix::identity(n, n),
            d: DMatrix::zeros(n, m),
            a,
            b,
            state_names,
            input_names,
        })
    }

    pub fn state_dimension(&self) -> usize {
        self.state_names.len()
    }

    pub fn input_dimension(&self) -> usize {
        self.input_names.len()
    }

    pub fn state_names(&self) -> &[String] {
        &self.state_names
    }

    pub fn input_names(&self) -> &[String] {
        &self.input_names
    }

    pub fn a(&self) -> &DMatrix<f64> {
        &self.a
    }

    pub fn b(&self) -> &DMatrix<f64> {
        &self.b
    }

    pub fn c(&self) -> &DMatrix<f64> {
        &self.c
    }

    pub fn d(&self) -> &DMatrix<f64> {
        &self.d
    }

    pub fn matrices(&self) -> StateSpaceMatrices<'_> {
        StateSpaceMatrices {
            a: &self.a,
            b: &self.b,
            c: &self.c,
            d: &self.d,
        }
    }

    pub fn state_index(&self, name: &str) -> Option<usize> {
        self.state_names.iter().position(|s| s == name)
    }

    pub fn input_index(&self, name: &str) -> Option<usize> {
        self.input_names.iter().position(|s| s == name)
    }

    /// Reduced model over a subset of the states, in the order given.
    ///
    /// Rows and columns of `A` and rows of `B` are kept for the selected
    /// states; all inputs are retained. This is how the short-period
    /// approximation is cut out of the longitudinal model.
    pub fn select_states(&self, names: &[&str]) -> Result<Self, ModelError> {
        let indices = names
            .iter()
            .map(|name| {
                self.state_index(name).ok_or_else(|| {
                    ModelError::Dimension(format!("Unknown state '{name}'"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let k = indices.len();
        let a = DMatrix::from_fn(k, k, |i, j| self.a[(indices[i], indices[j])]);
        let b = DMatrix::from_fn(k, self.input_dimension(), |i, j| self.b[(indices[i], j)]);

        Self::new(a, b, names.iter().copied(), self.input_names.iter().cloned())
    }
}

fn ensure_unique(axis: &str, names: &[String]) -> Result<(), ModelError> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(ModelError::Dimension(format!(
                "Duplicate {axis} name '{name}'"
            )));
        }
    }
    Ok(())
}
