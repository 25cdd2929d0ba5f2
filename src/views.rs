//! Typed, named access to the parameter and signal stores of each model.
//!
//! Every view owns a plain [`NeuronParameters`] or [`NeuronSignals`] and adds
//! nothing but fixed-index getters and setters. The per-model tables below are
//! also the source of the schema published by [`registry`](crate::registry).
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::error::{ModelError, ModelResult};
use crate::model::{ModelKind, NeuronType};
use crate::parameters::NeuronParameters;
use crate::signals::NeuronSignals;
use crate::types::Real;

macro_rules! parameter_view {
    (
        $(#[$meta:meta])*
        $view:ident for $kind:ident {
            $(($idx:ident, $getter:ident, $setter:ident) = $index:literal, $name:literal, $unit:literal, $default:expr;)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(try_from = "NeuronParameters", into = "NeuronParameters")]
        pub struct $view {
            store: NeuronParameters,
        }

        impl $view {
            pub const NAMES: &'static [&'static str] = &[$($name),*];
            pub const UNITS: &'static [&'static str] = &[$($unit),*];
            pub const DEFAULTS: &'static [Real] = &[$($default),*];
            $(pub const $idx: usize = $index;)*

            /// Creates the view with every parameter at its default.
            pub fn new() -> Self {
                Self {
                    store: NeuronParameters::from(Self::DEFAULTS),
                }
            }

            pub fn descriptor() -> &'static NeuronType {
                ModelKind::$kind.descriptor()
            }

            pub fn as_store(&self) -> &NeuronParameters {
                &self.store
            }

            pub fn into_store(self) -> NeuronParameters {
                self.store
            }

            pub fn set(&mut self, index: usize, value: Real) -> ModelResult<()> {
                self.store.set(index, value)
            }

            pub(crate) fn store_mut(&mut self) -> &mut NeuronParameters {
                &mut self.store
            }

            $(
                pub fn $getter(&self) -> Real {
                    self.store.at(Self::$idx)
                }

                pub fn $setter(&mut self, value: Real) -> &mut Self {
                    *self.store.at_mut(Self::$idx) = value;
                    self
                }
            )*
        }

        const _: () = {
            $(assert!(str_eq($view::NAMES[$view::$idx], $name));)*
        };

        impl Default for $view {
            fn default() -> Self {
                Self::new()
            }
        }

        impl TryFrom<NeuronParameters> for $view {
            type Error = ModelError;

            fn try_from(store: NeuronParameters) -> ModelResult<Self> {
                check_length(ModelKind::$kind, Self::NAMES.len(), store.len())?;
                Ok(Self { store })
            }
        }

        impl TryFrom<Vec<Real>> for $view {
            type Error = ModelError;

            fn try_from(values: Vec<Real>) -> ModelResult<Self> {
                Self::try_from(NeuronParameters::from_values(values))
            }
        }

        impl From<$view> for NeuronParameters {
            fn from(view: $view) -> Self {
                view.store
            }
        }

        impl Deref for $view {
            type Target = NeuronParameters;

            fn deref(&self) -> &NeuronParameters {
                &self.store
            }
        }
    };
}

macro_rules! signal_view {
    (
        $view:ident for $kind:ident {
            $(($idx:ident, $getter:ident, $record:ident, $setter:ident) = $index:literal, $name:literal, $unit:literal;)*
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(try_from = "NeuronSignals", into = "NeuronSignals")]
        pub struct $view {
            store: NeuronSignals,
        }

        impl $view {
            pub const NAMES: &'static [&'static str] = &[$($name),*];
            pub const UNITS: &'static [&'static str] = &[$($unit),*];
            $(pub const $idx: usize = $index;)*

            /// Creates the view with no signal recorded.
            pub fn new() -> Self {
                Self {
                    store: NeuronSignals::with_count(Self::NAMES.len()),
                }
            }

            pub fn descriptor() -> &'static NeuronType {
                ModelKind::$kind.descriptor()
            }

            pub fn as_store(&self) -> &NeuronSignals {
                &self.store
            }

            pub fn into_store(self) -> NeuronSignals {
                self.store
            }

            pub fn set(&mut self, index: usize, recorded: bool) -> ModelResult<()> {
                self.store.set(index, recorded)
            }

            pub(crate) fn store_mut(&mut self) -> &mut NeuronSignals {
                &mut self.store
            }

            $(
                pub fn $getter(&self) -> bool {
                    self.store.at(Self::$idx)
                }

                pub fn $record(&mut self) -> &mut Self {
                    self.$setter(true)
                }

                pub fn $setter(&mut self, recorded: bool) -> &mut Self {
                    self.store.put(Self::$idx, recorded);
                    self
                }
            )*
        }

        const _: () = {
            $(assert!(str_eq($view::NAMES[$view::$idx], $name));)*
        };

        impl Default for $view {
            fn default() -> Self {
                Self::new()
            }
        }

        impl TryFrom<NeuronSignals> for $view {
            type Error = ModelError;

            fn try_from(store: NeuronSignals) -> ModelResult<Self> {
                check_length(ModelKind::$kind, Self::NAMES.len(), store.len())?;
                Ok(Self { store })
            }
        }

        impl From<$view> for NeuronSignals {
            fn from(view: $view) -> Self {
                view.store
            }
        }

        impl Deref for $view {
            type Target = NeuronSignals;

            fn deref(&self) -> &NeuronSignals {
                &self.store
            }
        }
    };
}

// Used by the view macros to check each row index against its name.
const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

fn check_length(kind: ModelKind, expected: usize, actual: usize) -> ModelResult<()> {
    if expected != actual {
        return Err(ModelError::LengthMismatch {
            model: kind.name(),
            expected,
            actual,
        });
    }
    Ok(())
}

parameter_view! {
    /// Placeholder model without parameters.
    NullNeuronParameters for Null {}
}

parameter_view! {
    /// Conductance based leaky integrate-and-fire neuron with exponentially
    /// decaying synaptic conductances.
    IfCondExpParameters for IfCondExp {
        (IDX_CM, cm, set_cm) = 0, "cm", "nF", 1.0;
        (IDX_TAU_M, tau_m, set_tau_m) = 1, "tau_m", "ms", 20.0;
        (IDX_TAU_SYN_E, tau_syn_e, set_tau_syn_e) = 2, "tau_syn_E", "ms", 5.0;
        (IDX_TAU_SYN_I, tau_syn_i, set_tau_syn_i) = 3, "tau_syn_I", "ms", 5.0;
        (IDX_TAU_REFRAC, tau_refrac, set_tau_refrac) = 4, "tau_refrac", "ms", 0.1;
        (IDX_V_REST, v_rest, set_v_rest) = 5, "v_rest", "mV", -65.0;
        (IDX_V_THRESH, v_thresh, set_v_thresh) = 6, "v_thresh", "mV", -50.0;
        (IDX_V_RESET, v_reset, set_v_reset) = 7, "v_reset", "mV", -65.0;
        (IDX_E_REV_E, e_rev_e, set_e_rev_e) = 8, "e_rev_E", "mV", 0.0;
        (IDX_E_REV_I, e_rev_i, set_e_rev_i) = 9, "e_rev_I", "mV", -70.0;
        (IDX_I_OFFSET, i_offset, set_i_offset) = 10, "i_offset", "nA", 0.0;
    }
}

parameter_view! {
    /// Adaptive exponential integrate-and-fire neuron with conductance based
    /// synapses, spike-triggered and subthreshold adaptation.
    EifCondExpIsfaIstaParameters for EifCondExpIsfaIsta {
        (IDX_CM, cm, set_cm) = 0, "cm", "nF", 0.281;
        (IDX_TAU_M, tau_m, set_tau_m) = 1, "tau_m", "ms", 9.3667;
        (IDX_TAU_SYN_E, tau_syn_e, set_tau_syn_e) = 2, "tau_syn_E", "ms", 5.0;
        (IDX_TAU_SYN_I, tau_syn_i, set_tau_syn_i) = 3, "tau_syn_I", "ms", 5.0;
        (IDX_TAU_REFRAC, tau_refrac, set_tau_refrac) = 4, "tau_refrac", "ms", 0.1;
        (IDX_TAU_W, tau_w, set_tau_w) = 5, "tau_w", "ms", 144.0;
        (IDX_V_REST, v_rest, set_v_rest) = 6, "v_rest", "mV", -70.6;
        (IDX_V_THRESH, v_thresh, set_v_thresh) = 7, "v_thresh", "mV", -50.4;
        (IDX_V_RESET, v_reset, set_v_reset) = 8, "v_reset", "mV", -70.6;
        (IDX_E_REV_E, e_rev_e, set_e_rev_e) = 9, "e_rev_E", "mV", 0.0;
        (IDX_E_REV_I, e_rev_i, set_e_rev_i) = 10, "e_rev_I", "mV", -80.0;
        (IDX_I_OFFSET, i_offset, set_i_offset) = 11, "i_offset", "nA", 0.0;
        (IDX_A, a, set_a) = 12, "a", "nS", 4.0;
        (IDX_B, b, set_b) = 13, "b", "nA", 0.0805;
        (IDX_DELTA_T, delta_t, set_delta_t) = 14, "delta_T", "mV", 2.0;
    }
}

/// Spike times of a spike source array. The store holds the times themselves,
/// so it may have any length and has no named parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpikeSourceArrayParameters {
    store: NeuronParameters,
}

impl SpikeSourceArrayParameters {
    pub const NAMES: &'static [&'static str] = &[];
    pub const UNITS: &'static [&'static str] = &[];
    pub const DEFAULTS: &'static [Real] = &[];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spike_times(spike_times: Vec<Real>) -> Self {
        Self {
            store: NeuronParameters::from_values(spike_times),
        }
    }

    pub fn descriptor() -> &'static NeuronType {
        ModelKind::SpikeSourceArray.descriptor()
    }

    pub fn spike_times(&self) -> &[Real] {
        self.store.as_slice()
    }

    pub fn spike_times_mut(&mut self) -> &mut [Real] {
        self.store.as_mut_slice()
    }

    pub fn set(&mut self, index: usize, value: Real) -> ModelResult<()> {
        self.store.set(index, value)
    }

    pub(crate) fn store_mut(&mut self) -> &mut NeuronParameters {
        &mut self.store
    }

    pub fn as_store(&self) -> &NeuronParameters {
        &self.store
    }

    pub fn into_store(self) -> NeuronParameters {
        self.store
    }
}

impl From<Vec<Real>> for SpikeSourceArrayParameters {
    fn from(spike_times: Vec<Real>) -> Self {
        Self::from_spike_times(spike_times)
    }
}

impl From<NeuronParameters> for SpikeSourceArrayParameters {
    fn from(store: NeuronParameters) -> Self {
        Self { store }
    }
}

impl From<SpikeSourceArrayParameters> for NeuronParameters {
    fn from(view: SpikeSourceArrayParameters) -> Self {
        view.store
    }
}

impl Deref for SpikeSourceArrayParameters {
    type Target = NeuronParameters;

    fn deref(&self) -> &NeuronParameters {
        &self.store
    }
}

signal_view! {
    NullNeuronSignals for Null {}
}

signal_view! {
    SpikeSourceArraySignals for SpikeSourceArray {
        (IDX_SPIKES, spikes, record_spikes, set_spikes) = 0, "spikes", "ms";
    }
}

signal_view! {
    IfCondExpSignals for IfCondExp {
        (IDX_SPIKES, spikes, record_spikes, set_spikes) = 0, "spikes", "ms";
        (IDX_V, v, record_v, set_v) = 1, "v", "mV";
        (IDX_GSYN_EXC, gsyn_exc, record_gsyn_exc, set_gsyn_exc) = 2, "gsyn_exc", "uS";
        (IDX_GSYN_INH, gsyn_inh, record_gsyn_inh, set_gsyn_inh) = 3, "gsyn_inh", "uS";
    }
}

signal_view! {
    EifCondExpIsfaIstaSignals for EifCondExpIsfaIsta {
        (IDX_SPIKES, spikes, record_spikes, set_spikes) = 0, "spikes", "ms";
        (IDX_V, v, record_v, set_v) = 1, "v", "mV";
        (IDX_GSYN_EXC, gsyn_exc, record_gsyn_exc, set_gsyn_exc) = 2, "gsyn_exc", "uS";
        (IDX_GSYN_INH, gsyn_inh, record_gsyn_inh, set_gsyn_inh) = 3, "gsyn_inh", "uS";
    }
}

/// Parameters of any built-in model, tagged with the model they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", content = "parameters")]
pub enum ModelParameters {
    Null(NullNeuronParameters),
    SpikeSourceArray(SpikeSourceArrayParameters),
    IfCondExp(IfCondExpParameters),
    EifCondExpIsfaIsta(EifCondExpIsfaIstaParameters),
}

impl ModelParameters {
    /// Default parameters of `kind`. Spike source arrays start without spikes.
    pub fn defaults(kind: ModelKind) -> Self {
        match kind {
            ModelKind::Null => ModelParameters::Null(NullNeuronParameters::new()),
            ModelKind::SpikeSourceArray => {
                ModelParameters::SpikeSourceArray(SpikeSourceArrayParameters::new())
            }
            ModelKind::IfCondExp => ModelParameters::IfCondExp(IfCondExpParameters::new()),
            ModelKind::EifCondExpIsfaIsta => {
                ModelParameters::EifCondExpIsfaIsta(EifCondExpIsfaIstaParameters::new())
            }
        }
    }

    /// Wraps an untyped store, checking that it has the layout of `kind`.
    pub fn from_store(kind: ModelKind, store: NeuronParameters) -> ModelResult<Self> {
        Ok(match kind {
            ModelKind::Null => ModelParameters::Null(store.try_into()?),
            ModelKind::SpikeSourceArray => ModelParameters::SpikeSourceArray(store.into()),
            ModelKind::IfCondExp => ModelParameters::IfCondExp(store.try_into()?),
            ModelKind::EifCondExpIsfaIsta => {
                ModelParameters::EifCondExpIsfaIsta(store.try_into()?)
            }
        })
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            ModelParameters::Null(_) => ModelKind::Null,
            ModelParameters::SpikeSourceArray(_) => ModelKind::SpikeSourceArray,
            ModelParameters::IfCondExp(_) => ModelKind::IfCondExp,
            ModelParameters::EifCondExpIsfaIsta(_) => ModelKind::EifCondExpIsfaIsta,
        }
    }

    pub fn descriptor(&self) -> &'static NeuronType {
        self.kind().descriptor()
    }

    pub fn store(&self) -> &NeuronParameters {
        match self {
            ModelParameters::Null(view) => view,
            ModelParameters::SpikeSourceArray(view) => view,
            ModelParameters::IfCondExp(view) => view,
            ModelParameters::EifCondExpIsfaIsta(view) => view,
        }
    }

    fn store_mut(&mut self) -> &mut NeuronParameters {
        match self {
            ModelParameters::Null(view) => view.store_mut(),
            ModelParameters::SpikeSourceArray(view) => view.store_mut(),
            ModelParameters::IfCondExp(view) => view.store_mut(),
            ModelParameters::EifCondExpIsfaIsta(view) => view.store_mut(),
        }
    }

    pub fn into_store(self) -> NeuronParameters {
        match self {
            ModelParameters::Null(view) => view.into(),
            ModelParameters::SpikeSourceArray(view) => view.into(),
            ModelParameters::IfCondExp(view) => view.into(),
            ModelParameters::EifCondExpIsfaIsta(view) => view.into(),
        }
    }

    pub fn get(&self, name: &str) -> ModelResult<Real> {
        self.descriptor().get_parameter(self.store(), name)
    }

    pub fn set(&mut self, name: &str, value: Real) -> ModelResult<()> {
        let descriptor = self.descriptor();
        descriptor.set_parameter(self.store_mut(), name, value)
    }

    /// Returns the store if it was built for `kind`.
    pub fn expect_model(&self, kind: ModelKind) -> ModelResult<&NeuronParameters> {
        check_model(kind, self.kind())?;
        Ok(self.store())
    }
}

/// Recorded signals of any built-in model, tagged with the model they belong
/// to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", content = "signals")]
pub enum ModelSignals {
    Null(NullNeuronSignals),
    SpikeSourceArray(SpikeSourceArraySignals),
    IfCondExp(IfCondExpSignals),
    EifCondExpIsfaIsta(EifCondExpIsfaIstaSignals),
}

impl ModelSignals {
    pub fn new(kind: ModelKind) -> Self {
        match kind {
            ModelKind::Null => ModelSignals::Null(NullNeuronSignals::new()),
            ModelKind::SpikeSourceArray => {
                ModelSignals::SpikeSourceArray(SpikeSourceArraySignals::new())
            }
            ModelKind::IfCondExp => ModelSignals::IfCondExp(IfCondExpSignals::new()),
            ModelKind::EifCondExpIsfaIsta => {
                ModelSignals::EifCondExpIsfaIsta(EifCondExpIsfaIstaSignals::new())
            }
        }
    }

    pub fn from_store(kind: ModelKind, store: NeuronSignals) -> ModelResult<Self> {
        Ok(match kind {
            ModelKind::Null => ModelSignals::Null(store.try_into()?),
            ModelKind::SpikeSourceArray => ModelSignals::SpikeSourceArray(store.try_into()?),
            ModelKind::IfCondExp => ModelSignals::IfCondExp(store.try_into()?),
            ModelKind::EifCondExpIsfaIsta => ModelSignals::EifCondExpIsfaIsta(store.try_into()?),
        })
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            ModelSignals::Null(_) => ModelKind::Null,
            ModelSignals::SpikeSourceArray(_) => ModelKind::SpikeSourceArray,
            ModelSignals::IfCondExp(_) => ModelKind::IfCondExp,
            ModelSignals::EifCondExpIsfaIsta(_) => ModelKind::EifCondExpIsfaIsta,
        }
    }

    pub fn descriptor(&self) -> &'static NeuronType {
        self.kind().descriptor()
    }

    pub fn store(&self) -> &NeuronSignals {
        match self {
            ModelSignals::Null(view) => view,
            ModelSignals::SpikeSourceArray(view) => view,
            ModelSignals::IfCondExp(view) => view,
            ModelSignals::EifCondExpIsfaIsta(view) => view,
        }
    }

    fn store_mut(&mut self) -> &mut NeuronSignals {
        match self {
            ModelSignals::Null(view) => view.store_mut(),
            ModelSignals::SpikeSourceArray(view) => view.store_mut(),
            ModelSignals::IfCondExp(view) => view.store_mut(),
            ModelSignals::EifCondExpIsfaIsta(view) => view.store_mut(),
        }
    }

    pub fn is_recorded(&self, name: &str) -> ModelResult<bool> {
        self.descriptor().is_recorded(self.store(), name)
    }

    pub fn record(&mut self, name: &str) -> ModelResult<()> {
        self.set_recorded(name, true)
    }

    pub fn set_recorded(&mut self, name: &str, recorded: bool) -> ModelResult<()> {
        let descriptor = self.descriptor();
        descriptor.set_recorded(self.store_mut(), name, recorded)
    }

    /// Names of the recorded signals, in schema order.
    pub fn recorded_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        let names = self.descriptor().signal_names();
        self.store().recorded().map(move |index| names[index])
    }

    pub fn expect_model(&self, kind: ModelKind) -> ModelResult<&NeuronSignals> {
        check_model(kind, self.kind())?;
        Ok(self.store())
    }
}

fn check_model(expected: ModelKind, actual: ModelKind) -> ModelResult<()> {
    if expected != actual {
        return Err(ModelError::ModelMismatch {
            expected: expected.name(),
            actual: actual.name(),
        });
    }
    Ok(())
}
