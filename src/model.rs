use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::parameters::NeuronParameters;
use crate::registry;
use crate::signals::NeuronSignals;
use crate::types::Real;

/// Closed set of built-in neuron models. Acts as the tag generic code
/// dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    Null,
    SpikeSourceArray,
    IfCondExp,
    EifCondExpIsfaIsta,
}

impl ModelKind {
    pub const ALL: [ModelKind; 4] = [
        ModelKind::Null,
        ModelKind::SpikeSourceArray,
        ModelKind::IfCondExp,
        ModelKind::EifCondExpIsfaIsta,
    ];

    pub fn descriptor(self) -> &'static NeuronType {
        match self {
            ModelKind::Null => registry::null_neuron(),
            ModelKind::SpikeSourceArray => registry::spike_source_array(),
            ModelKind::IfCondExp => registry::if_cond_exp(),
            ModelKind::EifCondExpIsfaIsta => registry::eif_cond_exp_isfa_ista(),
        }
    }

    pub fn type_id(self) -> i32 {
        self.descriptor().type_id()
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name()
    }

    pub fn from_type_id(type_id: i32) -> ModelResult<Self> {
        registry::by_type_id(type_id).map(NeuronType::kind)
    }

    pub fn from_name(name: &str) -> ModelResult<Self> {
        registry::by_name(name).map(NeuronType::kind)
    }
}

/// Immutable description of a neuron model: its identity, the layout of its
/// parameter store and the signals that can be recorded from it.
///
/// Instances only exist as the `static` entries of [`registry`].
#[derive(Debug, Serialize)]
pub struct NeuronType {
    #[serde(skip)]
    kind: ModelKind,
    type_id: i32,
    name: &'static str,
    parameter_names: &'static [&'static str],
    parameter_units: &'static [&'static str],
    parameter_defaults: &'static [Real],
    signal_names: &'static [&'static str],
    signal_units: &'static [&'static str],
    conductance_based: bool,
    spike_source: bool,
}

impl NeuronType {
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn new(
        kind: ModelKind,
        type_id: i32,
        name: &'static str,
        parameter_names: &'static [&'static str],
        parameter_units: &'static [&'static str],
        parameter_defaults: &'static [Real],
        signal_names: &'static [&'static str],
        signal_units: &'static [&'static str],
        conductance_based: bool,
        spike_source: bool,
    ) -> Self {
        assert!(parameter_names.len() == parameter_units.len());
        assert!(parameter_names.len() == parameter_defaults.len());
        assert!(signal_names.len() == signal_units.len());

        Self {
            kind,
            type_id,
            name,
            parameter_names,
            parameter_units,
            parameter_defaults,
            signal_names,
            signal_units,
            conductance_based,
            spike_source,
        }
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Stable identifier exchanged with backends. Never changes once assigned.
    pub fn type_id(&self) -> i32 {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn parameter_names(&self) -> &'static [&'static str] {
        self.parameter_names
    }

    pub fn parameter_units(&self) -> &'static [&'static str] {
        self.parameter_units
    }

    pub fn parameter_defaults(&self) -> &'static [Real] {
        self.parameter_defaults
    }

    pub fn signal_names(&self) -> &'static [&'static str] {
        self.signal_names
    }

    pub fn signal_units(&self) -> &'static [&'static str] {
        self.signal_units
    }

    pub fn conductance_based(&self) -> bool {
        self.conductance_based
    }

    pub fn spike_source(&self) -> bool {
        self.spike_source
    }

    pub fn parameter_count(&self) -> usize {
        self.parameter_names.len()
    }

    pub fn signal_count(&self) -> usize {
        self.signal_names.len()
    }

    /// Position of the parameter called `name`. Exact, case-sensitive match;
    /// the first match wins.
    pub fn parameter_index(&self, name: &str) -> ModelResult<usize> {
        self.parameter_names
            .iter()
            .position(|candidate| *candidate == name)
            .ok_or_else(|| ModelError::name_not_found("parameter", name))
    }

    /// Position of the signal called `name`, same rules as
    /// [`parameter_index`](Self::parameter_index).
    pub fn signal_index(&self, name: &str) -> ModelResult<usize> {
        self.signal_names
            .iter()
            .position(|candidate| *candidate == name)
            .ok_or_else(|| ModelError::name_not_found("signal", name))
    }

    pub fn parameter_unit(&self, name: &str) -> ModelResult<&'static str> {
        Ok(self.parameter_units[self.parameter_index(name)?])
    }

    pub fn signal_unit(&self, name: &str) -> ModelResult<&'static str> {
        Ok(self.signal_units[self.signal_index(name)?])
    }

    pub fn default_parameters(&self) -> NeuronParameters {
        NeuronParameters::from(self.parameter_defaults)
    }

    pub fn default_signals(&self) -> NeuronSignals {
        NeuronSignals::with_count(self.signal_count())
    }

    pub fn get_parameter(&self, parameters: &NeuronParameters, name: &str) -> ModelResult<Real> {
        parameters.get(self.parameter_index(name)?)
    }

    pub fn set_parameter(
        &self,
        parameters: &mut NeuronParameters,
        name: &str,
        value: Real,
    ) -> ModelResult<()> {
        parameters.set(self.parameter_index(name)?, value)
    }

    pub fn is_recorded(&self, signals: &NeuronSignals, name: &str) -> ModelResult<bool> {
        signals.get(self.signal_index(name)?)
    }

    pub fn set_recorded(
        &self,
        signals: &mut NeuronSignals,
        name: &str,
        recorded: bool,
    ) -> ModelResult<()> {
        signals.set(self.signal_index(name)?, recorded)
    }
}
