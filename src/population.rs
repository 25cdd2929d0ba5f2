use itertools::Itertools;
use log::{debug, trace};
use serde::Serialize;
use simple_error::{try_with, SimpleError};

use crate::error::{ModelError, ModelResult};
use crate::model::{ModelKind, NeuronType};
use crate::parameters::NeuronParameters;
use crate::params::{self, NetworkParams, PopulationParams};
use crate::signals::NeuronSignals;
use crate::types::Real;
use crate::views::{ModelParameters, ModelSignals, SpikeSourceArrayParameters};

/// A group of neurons sharing one model, one parameter set and one recording
/// configuration. This is the shape in which stores are handed to backends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Population {
    size: usize,
    parameters: ModelParameters,
    signals: ModelSignals,
}

impl Population {
    pub fn new(
        size: usize,
        parameters: ModelParameters,
        signals: ModelSignals,
    ) -> ModelResult<Self> {
        if size == 0 {
            return Err(ModelError::EmptyPopulation);
        }

        if parameters.kind() != signals.kind() {
            return Err(ModelError::ModelMismatch {
                expected: parameters.kind().name(),
                actual: signals.kind().name(),
            });
        }

        Ok(Self {
            size,
            parameters,
            signals,
        })
    }

    pub fn kind(&self) -> ModelKind {
        self.parameters.kind()
    }

    pub fn descriptor(&self) -> &'static NeuronType {
        self.kind().descriptor()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    pub fn set_parameter(&mut self, name: &str, value: Real) -> ModelResult<()> {
        self.parameters.set(name, value)
    }

    pub fn signals(&self) -> &ModelSignals {
        &self.signals
    }

    pub fn set_recorded(&mut self, name: &str, recorded: bool) -> ModelResult<()> {
        self.signals.set_recorded(name, recorded)
    }

    /// Untyped parameter store, provided the population uses `kind`.
    pub fn parameters_for(&self, kind: ModelKind) -> ModelResult<&NeuronParameters> {
        self.parameters.expect_model(kind)
    }

    pub fn signals_for(&self, kind: ModelKind) -> ModelResult<&NeuronSignals> {
        self.signals.expect_model(kind)
    }
}

pub fn create_population(params: &PopulationParams) -> Result<Population, SimpleError> {
    try_with!(
        params::validate_population_params(params),
        "invalid population parameters"
    );

    let kind = try_with!(ModelKind::from_name(&params.model), "invalid model");

    let mut parameters = match kind {
        ModelKind::SpikeSourceArray => ModelParameters::SpikeSourceArray(
            SpikeSourceArrayParameters::from_spike_times(params.spike_times.clone()),
        ),
        _ => ModelParameters::defaults(kind),
    };

    for (name, value) in params.parameters.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
        trace!("{}: {} = {}", kind.name(), name, value);
        try_with!(parameters.set(name, *value), "invalid parameter override");
    }

    let mut signals = ModelSignals::new(kind);

    for name in &params.record {
        try_with!(signals.record(name), "invalid signal");
    }

    debug!(
        "created population of {} {} neurons, recording [{}]",
        params.size,
        kind.name(),
        signals.recorded_names().join(", ")
    );

    Ok(Population {
        size: params.size,
        parameters,
        signals,
    })
}

pub fn create_populations(params: &NetworkParams) -> Result<Vec<Population>, SimpleError> {
    try_with!(
        params::validate_network_params(params),
        "invalid network parameters"
    );

    params.populations.iter().map(create_population).collect()
}
