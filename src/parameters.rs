//! Flat storage for the parameters of a single neuron or population.
use serde::{Deserialize, Serialize};
use std::slice;

use crate::error::{ModelError, ModelResult};
use crate::types::Real;

/// Ordered list of real-valued parameters. The meaning of each position is
/// given by the [`NeuronType`](crate::model::NeuronType) the store belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeuronParameters {
    values: Vec<Real>,
}

impl NeuronParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: Vec<Real>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> ModelResult<Real> {
        self.values
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn get_mut(&mut self, index: usize) -> ModelResult<&mut Real> {
        let len = self.values.len();
        self.values
            .get_mut(index)
            .ok_or(ModelError::OutOfRange { index, len })
    }

    pub fn set(&mut self, index: usize, value: Real) -> ModelResult<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Iterates over the values from the first position on. Every call starts a
    /// fresh pass.
    pub fn iter(&self) -> slice::Iter<'_, Real> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[Real] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [Real] {
        &mut self.values
    }

    pub fn into_vec(self) -> Vec<Real> {
        self.values
    }

    fn out_of_range(&self, index: usize) -> ModelError {
        ModelError::OutOfRange {
            index,
            len: self.values.len(),
        }
    }

    // Views check the length once on construction, so these cannot fail there.
    pub(crate) fn at(&self, index: usize) -> Real {
        self.values[index]
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> &mut Real {
        &mut self.values[index]
    }
}

impl From<Vec<Real>> for NeuronParameters {
    fn from(values: Vec<Real>) -> Self {
        Self::from_values(values)
    }
}

impl From<&[Real]> for NeuronParameters {
    fn from(values: &[Real]) -> Self {
        Self::from_values(values.to_vec())
    }
}

impl FromIterator<Real> for NeuronParameters {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a NeuronParameters {
    type Item = &'a Real;
    type IntoIter = slice::Iter<'a, Real>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::assert_equal;

    #[test]
    fn default_is_empty() {
        let params = NeuronParameters::new();
        assert_eq!(params.len(), 0);
        assert!(params.is_empty());
        assert_eq!(params.iter().count(), 0);
        assert_eq!(
            params.get(0),
            Err(ModelError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn adopts_values() {
        let params = NeuronParameters::from_values(vec![0.5, -1.0, 3.0]);
        assert_eq!(params.len(), 3);
        assert_eq!(params.get(0), Ok(0.5));
        assert_eq!(params.get(1), Ok(-1.0));
        assert_eq!(params.get(2), Ok(3.0));
    }

    #[test]
    fn out_of_range() {
        let mut params = NeuronParameters::from(vec![1.0, 2.0]);

        for index in 0..2 {
            assert!(params.get(index).is_ok());
            assert!(params.set(index, 7.0).is_ok());
        }

        for index in 2..5 {
            assert_eq!(
                params.get(index),
                Err(ModelError::OutOfRange { index, len: 2 })
            );
            assert_eq!(
                params.set(index, 7.0),
                Err(ModelError::OutOfRange { index, len: 2 })
            );
        }

        assert_eq!(params.as_slice(), &[7.0, 7.0]);
    }

    #[test]
    fn write_in_place() {
        let mut params: NeuronParameters = (0..4).map(|i| i as Real).collect();
        *params.get_mut(3).unwrap() += 0.5;
        params.set(0, -2.0).unwrap();
        assert_eq!(params.into_vec(), vec![-2.0, 1.0, 2.0, 3.5]);
    }

    #[test]
    fn iteration_restarts() {
        let params = NeuronParameters::from_values(vec![1.0, 2.0, 3.0]);
        let mut iter = params.iter();
        iter.next();

        assert_equal(params.iter().copied(), [1.0, 2.0, 3.0]);
        assert_equal(&params, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn clones_do_not_share_storage() {
        let original = NeuronParameters::from_values(vec![1.0]);
        let mut copy = original.clone();
        copy.set(0, 2.0).unwrap();
        assert_eq!(original.get(0), Ok(1.0));
        assert_eq!(copy.get(0), Ok(2.0));
    }

    #[test]
    fn serializes_as_plain_list() {
        let params = NeuronParameters::from_values(vec![1.0, 2.5]);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, "[1.0,2.5]");
        let parsed: NeuronParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, params);
    }
}
