//! The built-in neuron models.
//!
//! Every descriptor is plain `static` data, initialised at compile time, so
//! each accessor hands out the same `&'static` instance from any thread.
use crate::error::{ModelError, ModelResult};
use crate::model::{ModelKind, NeuronType};
use crate::views::{
    EifCondExpIsfaIstaParameters, EifCondExpIsfaIstaSignals, IfCondExpParameters,
    IfCondExpSignals, NullNeuronParameters, NullNeuronSignals, SpikeSourceArrayParameters,
    SpikeSourceArraySignals,
};

pub static NULL_NEURON: NeuronType = NeuronType::new(
    ModelKind::Null,
    -1,
    "Null",
    NullNeuronParameters::NAMES,
    NullNeuronParameters::UNITS,
    NullNeuronParameters::DEFAULTS,
    NullNeuronSignals::NAMES,
    NullNeuronSignals::UNITS,
    false,
    false,
);

pub static SPIKE_SOURCE_ARRAY: NeuronType = NeuronType::new(
    ModelKind::SpikeSourceArray,
    0,
    "SpikeSourceArray",
    SpikeSourceArrayParameters::NAMES,
    SpikeSourceArrayParameters::UNITS,
    SpikeSourceArrayParameters::DEFAULTS,
    SpikeSourceArraySignals::NAMES,
    SpikeSourceArraySignals::UNITS,
    false,
    true,
);

pub static IF_COND_EXP: NeuronType = NeuronType::new(
    ModelKind::IfCondExp,
    1,
    "IfCondExp",
    IfCondExpParameters::NAMES,
    IfCondExpParameters::UNITS,
    IfCondExpParameters::DEFAULTS,
    IfCondExpSignals::NAMES,
    IfCondExpSignals::UNITS,
    true,
    false,
);

pub static EIF_COND_EXP_ISFA_ISTA: NeuronType = NeuronType::new(
    ModelKind::EifCondExpIsfaIsta,
    2,
    "EifCondExpIsfaIsta",
    EifCondExpIsfaIstaParameters::NAMES,
    EifCondExpIsfaIstaParameters::UNITS,
    EifCondExpIsfaIstaParameters::DEFAULTS,
    EifCondExpIsfaIstaSignals::NAMES,
    EifCondExpIsfaIstaSignals::UNITS,
    true,
    false,
);

static ALL: [&NeuronType; 4] = [
    &NULL_NEURON,
    &SPIKE_SOURCE_ARRAY,
    &IF_COND_EXP,
    &EIF_COND_EXP_ISFA_ISTA,
];

pub fn null_neuron() -> &'static NeuronType {
    &NULL_NEURON
}

pub fn spike_source_array() -> &'static NeuronType {
    &SPIKE_SOURCE_ARRAY
}

pub fn if_cond_exp() -> &'static NeuronType {
    &IF_COND_EXP
}

pub fn eif_cond_exp_isfa_ista() -> &'static NeuronType {
    &EIF_COND_EXP_ISFA_ISTA
}

pub fn all() -> &'static [&'static NeuronType] {
    &ALL
}

pub fn by_type_id(type_id: i32) -> ModelResult<&'static NeuronType> {
    ALL.iter()
        .copied()
        .find(|descriptor| descriptor.type_id() == type_id)
        .ok_or_else(|| ModelError::name_not_found("model type id", type_id.to_string()))
}

pub fn by_name(name: &str) -> ModelResult<&'static NeuronType> {
    ALL.iter()
        .copied()
        .find(|descriptor| descriptor.name() == name)
        .ok_or_else(|| ModelError::name_not_found("model", name))
}
