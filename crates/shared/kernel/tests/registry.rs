use cosmo_kernel::prelude::*;
use cosmo_kernel::{flrw, realizations};
use serial_test::serial;

fn with_kwargs() -> std::sync::Arc<CosmologyClass> {
    CosmologyClass::builder("CosmologyWithKwargs")
        .parameter(ParameterSpec::optional("Tcmb0", 0.0).unit(Unit::Kelvin))
        .default_name("cosmology with kwargs")
        .accept_extra_kwargs()
        .build()
}

#[test]
#[serial]
fn global_registry_holds_builtins() {
    let global = ClassRegistry::global();
    for name in ["FlatLambdaCDM", "LambdaCDM", "wCDM", "FlatwCDM"] {
        assert!(global.contains(name), "{name} should be registered");
    }
    let class = global.get(flrw::FLAT_LAMBDA_CDM).unwrap();
    assert_eq!(*class, *flrw::flat_lambda_cdm());
}

#[test]
#[serial]
fn global_registration_round_trip() {
    let global = ClassRegistry::global();
    global.register(with_kwargs());
    assert!(global.get("CosmologyWithKwargs").is_ok());

    global.unregister("CosmologyWithKwargs");
    global.unregister("CosmologyWithKwargs");
    assert!(matches!(
        global.get("CosmologyWithKwargs"),
        Err(CosmologyError::UnknownClass { .. })
    ));
}

#[test]
fn realizations_are_listed_in_publication_order() {
    let names: Vec<_> = realizations::available().collect();
    assert_eq!(names, ["Planck13", "Planck15", "Planck18", "WMAP5", "WMAP7", "WMAP9"]);
}

#[test]
fn realization_metadata_carries_the_reference() {
    let wmap9 = realizations::get("WMAP9").unwrap();
    let reference = wmap9.meta().get("reference").and_then(Value::as_str).unwrap();
    assert!(reference.starts_with("Hinshaw et al. 2013"));
    assert_eq!(wmap9.parameter("m_nu"), Some(&Value::Quantity(Quantity::new(0.0, Unit::ElectronVolt))));
}

#[test]
fn clone_with_rejects_undeclared_parameters() {
    let planck18 = realizations::get("Planck18").unwrap();
    let mut changes = Mapping::default();
    changes.insert("w0", -0.9);
    let err = planck18.clone_with(changes).unwrap_err();
    assert!(matches!(err, CosmologyError::UnexpectedArguments { .. }));
}

#[test]
fn error_context_can_be_attached() {
    let result: Result<(), CosmologyError> =
        Err(CosmologyError::UnknownClass { name: "Nope".into(), context: None });
    let err = result.context("resolving target class").unwrap_err();
    assert!(err.to_string().ends_with("(resolving target class)"));
}
