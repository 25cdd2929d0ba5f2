use float_cmp::assert_approx_eq;
use itertools::{assert_equal, Itertools};
use neurotype::{
    error::ModelError,
    model::ModelKind,
    parameters::NeuronParameters,
    params::network_params_from_yaml,
    population::create_populations,
    registry,
    signals::NeuronSignals,
    types::Real,
    views::{
        EifCondExpIsfaIstaParameters, EifCondExpIsfaIstaSignals, IfCondExpParameters,
        IfCondExpSignals, ModelParameters, ModelSignals, NullNeuronParameters, NullNeuronSignals,
        SpikeSourceArrayParameters, SpikeSourceArraySignals,
    },
};
use rand::{distributions::Uniform, prelude::Distribution, rngs::StdRng, SeedableRng};

const SCENARIO_YAML: &str = r#"
populations:
- model: SpikeSourceArray
  size: 100
  spike_times: [5.0, 12.5, 40.0]
  record: [spikes]
- model: IfCondExp
  size: 800
  parameters:
    tau_m: 10.0
    tau_refrac: 2.0
    v_thresh: -52.0
  record: [spikes, v]
- model: EifCondExpIsfaIsta
  size: 200
  parameters:
    a: 2.0
    b: 0.05
    delta_T: 1.5
  record: [gsyn_exc, gsyn_inh]
- model: Null
  size: 1
"#;

#[test]
fn if_cond_exp_scenario() {
    let descriptor = registry::if_cond_exp();
    assert_eq!(descriptor.parameter_count(), 11);
    assert_eq!(descriptor.signal_count(), 4);

    let mut params = IfCondExpParameters::new();
    params.set_tau_m(20.0);
    assert_eq!(params.tau_m(), 20.0);

    for (i, name) in descriptor.parameter_names().iter().enumerate() {
        if *name != "tau_m" {
            assert_eq!(params.get(i), Ok(descriptor.parameter_defaults()[i]));
        }
    }
}

#[test]
fn spike_source_array_scenario() {
    let params = SpikeSourceArrayParameters::from_spike_times(vec![1.0, 2.0, 3.0]);
    assert_eq!(params.len(), 3);
    assert_equal(params.spike_times().iter().copied(), [1.0, 2.0, 3.0]);

    let mut signals = SpikeSourceArraySignals::new();
    assert!(!signals.spikes());
    signals.record_spikes();
    assert!(signals.spikes());
}

#[test]
fn null_model_scenario() {
    let descriptor = registry::null_neuron();
    assert_eq!(descriptor.parameter_count(), 0);
    assert_eq!(descriptor.signal_count(), 0);
    assert_eq!(NullNeuronParameters::new().len(), 0);
    assert_eq!(NullNeuronSignals::new().len(), 0);
    assert!(ModelParameters::defaults(ModelKind::Null).store().is_empty());
}

#[test]
fn randomized_round_trip_for_every_parameter() {
    let mut rng = StdRng::seed_from_u64(0);
    let dist = Uniform::new(-100.0, 100.0);

    for kind in ModelKind::ALL {
        let descriptor = kind.descriptor();
        let mut params = ModelParameters::defaults(kind);

        for name in descriptor.parameter_names() {
            let value: Real = dist.sample(&mut rng);
            params.set(name, value).unwrap();
            assert_eq!(params.get(name), Ok(value));
            assert_eq!(
                params.store().get(descriptor.parameter_index(name).unwrap()),
                Ok(value)
            );
        }
    }
}

#[test]
fn typed_accessors_agree_with_name_resolution() {
    let mut params = EifCondExpIsfaIstaParameters::new();
    params
        .set_cm(0.2)
        .set_tau_m(10.0)
        .set_tau_syn_e(3.0)
        .set_tau_syn_i(6.0)
        .set_tau_refrac(1.0)
        .set_tau_w(120.0)
        .set_v_rest(-70.0)
        .set_v_thresh(-50.0)
        .set_v_reset(-72.0)
        .set_e_rev_e(5.0)
        .set_e_rev_i(-85.0)
        .set_i_offset(0.1)
        .set_a(3.0)
        .set_b(0.07)
        .set_delta_t(2.5);

    let tagged = ModelParameters::EifCondExpIsfaIsta(params.clone());
    assert_eq!(tagged.descriptor().name(), "EifCondExpIsfaIsta");

    for (name, value) in [
        ("cm", params.cm()),
        ("tau_m", params.tau_m()),
        ("tau_syn_E", params.tau_syn_e()),
        ("tau_syn_I", params.tau_syn_i()),
        ("tau_refrac", params.tau_refrac()),
        ("tau_w", params.tau_w()),
        ("v_rest", params.v_rest()),
        ("v_thresh", params.v_thresh()),
        ("v_reset", params.v_reset()),
        ("e_rev_E", params.e_rev_e()),
        ("e_rev_I", params.e_rev_i()),
        ("i_offset", params.i_offset()),
        ("a", params.a()),
        ("b", params.b()),
        ("delta_T", params.delta_t()),
    ] {
        assert_eq!(tagged.get(name), Ok(value));
    }

    assert_approx_eq!(f64, params.b() as f64, 0.07, epsilon = 1e-6);
}

#[test]
fn signal_views_default_off_and_record() {
    let mut signals = IfCondExpSignals::new();
    assert!(signals.iter().all(|recorded| !recorded));
    signals.record_v();
    assert!(signals.v());

    let mut signals = EifCondExpIsfaIstaSignals::new();
    signals.record_spikes().record_gsyn_exc().set_gsyn_exc(false);
    assert!(signals.spikes());
    assert!(!signals.gsyn_exc());

    for kind in ModelKind::ALL {
        let mut signals = ModelSignals::new(kind);
        for name in kind.descriptor().signal_names() {
            assert_eq!(signals.is_recorded(name), Ok(false));
            signals.record(name).unwrap();
            assert_eq!(signals.is_recorded(name), Ok(true));
        }
    }
}

#[test]
fn out_of_range_access() {
    let n = 5;
    let mut params = NeuronParameters::from_values(vec![0.0; n]);
    let mut signals = NeuronSignals::with_count(n);

    for i in 0..n {
        assert!(params.set(i, i as Real).is_ok());
        assert!(signals.set(i, true).is_ok());
    }

    for i in n..n + 3 {
        assert_eq!(params.get(i), Err(ModelError::OutOfRange { index: i, len: n }));
        assert_eq!(signals.get(i), Err(ModelError::OutOfRange { index: i, len: n }));
    }
}

#[test]
fn unknown_names() {
    for descriptor in registry::all() {
        assert_eq!(
            descriptor.parameter_index("not_a_parameter"),
            Err(ModelError::NameNotFound {
                kind: "parameter",
                name: "not_a_parameter".to_string()
            })
        );
        assert!(descriptor.signal_index("not_a_signal").is_err());
    }
}

#[test]
fn registry_is_shared() {
    let first = registry::if_cond_exp();
    let second = registry::if_cond_exp();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.type_id(), second.type_id());
    assert_eq!(first.name(), second.name());
    assert_eq!(first.parameter_names(), second.parameter_names());
    assert_eq!(first.signal_units(), second.signal_units());
}

#[test]
fn scenario_network() {
    let params = network_params_from_yaml(SCENARIO_YAML).unwrap();
    let populations = create_populations(&params).unwrap();

    assert_equal(
        populations.iter().map(|population| population.kind()),
        [
            ModelKind::SpikeSourceArray,
            ModelKind::IfCondExp,
            ModelKind::EifCondExpIsfaIsta,
            ModelKind::Null,
        ],
    );
    assert_eq!(
        populations
            .iter()
            .map(|population| population.size())
            .sum::<usize>(),
        1101
    );

    let source = populations[0]
        .parameters_for(ModelKind::SpikeSourceArray)
        .unwrap();
    assert_equal(source.iter().copied(), [5.0, 12.5, 40.0]);

    let excitatory = &populations[1];
    assert_eq!(excitatory.parameters().get("tau_refrac"), Ok(2.0));
    assert_eq!(excitatory.parameters().get("cm"), Ok(1.0));
    assert_eq!(
        excitatory.signals().recorded_names().collect_vec(),
        vec!["spikes", "v"]
    );

    let adaptive = &populations[2];
    assert_eq!(adaptive.parameters().get("delta_T"), Ok(1.5));
    assert_eq!(
        adaptive
            .signals_for(ModelKind::EifCondExpIsfaIsta)
            .unwrap()
            .iter()
            .copied()
            .collect_vec(),
        vec![false, false, true, true]
    );
}

#[test]
fn schema_serialization() {
    let json = serde_json::to_value(registry::all()).unwrap();
    let models = json.as_array().unwrap();
    assert_eq!(models.len(), 4);

    let if_cond_exp = &models[2];
    assert_eq!(if_cond_exp["name"], "IfCondExp");
    assert_eq!(if_cond_exp["type_id"], 1);
    assert_eq!(if_cond_exp["parameter_names"][1], "tau_m");
    assert_eq!(if_cond_exp["signal_units"][2], "uS");
    assert_eq!(if_cond_exp["conductance_based"], true);
    assert_eq!(if_cond_exp["spike_source"], false);
}
