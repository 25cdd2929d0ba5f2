//! Flags selecting which signals of a neuron are recorded.
use serde::{Deserialize, Serialize};
use std::slice;

use crate::error::{ModelError, ModelResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeuronSignals {
    flags: Vec<bool>,
}

impl NeuronSignals {
    /// Creates `signal_count` flags, none of them recorded.
    pub fn with_count(signal_count: usize) -> Self {
        Self {
            flags: vec![false; signal_count],
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn get(&self, index: usize) -> ModelResult<bool> {
        self.flags
            .get(index)
            .copied()
            .ok_or(ModelError::OutOfRange {
                index,
                len: self.flags.len(),
            })
    }

    pub fn set(&mut self, index: usize, recorded: bool) -> ModelResult<()> {
        let len = self.flags.len();
        let flag = self
            .flags
            .get_mut(index)
            .ok_or(ModelError::OutOfRange { index, len })?;
        *flag = recorded;
        Ok(())
    }

    pub fn iter(&self) -> slice::Iter<'_, bool> {
        self.flags.iter()
    }

    /// Indices of all recorded signals, in ascending order.
    pub fn recorded(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, recorded)| **recorded)
            .map(|(index, _)| index)
    }

    pub fn any_recorded(&self) -> bool {
        self.flags.iter().any(|recorded| *recorded)
    }

    pub(crate) fn at(&self, index: usize) -> bool {
        self.flags[index]
    }

    pub(crate) fn put(&mut self, index: usize, recorded: bool) {
        self.flags[index] = recorded;
    }
}
