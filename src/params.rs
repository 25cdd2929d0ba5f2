use itertools::Itertools;
use serde::{Deserialize, Serialize};
use simple_error::SimpleError;

use crate::model::ModelKind;
use crate::registry;
use crate::types::{HashMap, HashSet, Real};

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkParams {
    pub populations: Vec<PopulationParams>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PopulationParams {
    pub model: String,
    pub size: usize,
    #[serde(default)]
    pub parameters: HashMap<String, Real>,
    #[serde(default)]
    pub spike_times: Vec<Real>,
    #[serde(default)]
    pub record: Vec<String>,
}

impl PopulationParams {
    pub fn for_model(kind: ModelKind, size: usize) -> Self {
        Self {
            model: kind.name().to_string(),
            size,
            parameters: HashMap::default(),
            spike_times: Vec::new(),
            record: Vec::new(),
        }
    }
}

impl Default for PopulationParams {
    fn default() -> Self {
        Self::for_model(ModelKind::IfCondExp, 1)
    }
}

pub fn network_params_from_yaml(yaml: &str) -> Result<NetworkParams, SimpleError> {
    serde_yaml::from_str(yaml).map_err(SimpleError::from)
}

pub fn network_params_from_json(json: &str) -> Result<NetworkParams, SimpleError> {
    serde_json::from_str(json).map_err(SimpleError::from)
}

pub fn validate_network_params(network_params: &NetworkParams) -> Result<(), SimpleError> {
    for (i, population_params) in network_params.populations.iter().enumerate() {
        validate_population_params(population_params)
            .map_err(|err| SimpleError::new(format!("population {}: {}", i, err)))?;
    }

    Ok(())
}

pub fn validate_population_params(population_params: &PopulationParams) -> Result<(), SimpleError> {
    let descriptor = registry::by_name(&population_params.model).map_err(SimpleError::from)?;

    if population_params.size == 0 {
        return Err(SimpleError::new("size must be strictly positive"));
    }

    if descriptor.spike_source() {
        if !population_params.parameters.is_empty() {
            return Err(SimpleError::new(format!(
                "{} takes spike_times, not named parameters",
                descriptor.name()
            )));
        }
    } else if !population_params.spike_times.is_empty() {
        return Err(SimpleError::new(format!(
            "spike_times are not valid for {}",
            descriptor.name()
        )));
    }

    for name in population_params.parameters.keys().sorted() {
        descriptor
            .parameter_index(name)
            .map_err(SimpleError::from)?;
    }

    let mut seen_signals = HashSet::default();

    for name in &population_params.record {
        descriptor.signal_index(name).map_err(SimpleError::from)?;

        if !seen_signals.insert(name.as_str()) {
            return Err(SimpleError::new(format!(
                "signal {} requested more than once",
                name
            )));
        }
    }

    Ok(())
}
