use cosmo_domain::mapping::{Mapping, MappingKind};
use cosmo_domain::value::Value;
use cosmo_format::{FormatError, FormatRegistry, Payload, from_format, to_format};
use cosmo_kernel::realizations;
use cosmo_kernel::registry::ClassRegistry;
use cosmo_mapping::{ErrorKind, FromMappingOptions, ToMappingOptions};
use std::fs;
use tempfile::tempdir;

#[test]
fn mapping_input_is_identified_automatically() {
    for cosmo in realizations::all().unwrap() {
        let mut payload = to_format(&cosmo, "mapping", &ToMappingOptions::default()).unwrap();
        if let Payload::Mapping(map) = &mut payload {
            map.insert("cosmology", cosmo.class().qualname());
        }
        let got = from_format(&payload, None, &FromMappingOptions::default()).unwrap();
        assert_eq!(got, cosmo);
    }
}

#[test]
fn every_realization_round_trips_through_json() {
    for cosmo in realizations::all().unwrap() {
        let payload = to_format(&cosmo, "json", &ToMappingOptions::default()).unwrap();
        let text = payload.as_text().unwrap();
        assert!(text.contains(r#""cosmology": "FlatLambdaCDM""#));
        assert!(text.contains(r#""unit": "km / (Mpc s)""#));

        let got = from_format(&payload, Some("json"), &FromMappingOptions::default()).unwrap();
        assert_eq!(got, cosmo);
        assert_eq!(got.meta(), cosmo.meta());
    }
}

#[test]
fn quantity_shaped_metadata_survives_json() {
    let mut calib = Mapping::default();
    calib.insert("value", 1.0);
    calib.insert("unit", "K");
    let mut meta = Mapping::default();
    meta.insert("calib", calib);
    let mut changes = Mapping::default();
    changes.insert("name", "Planck18");
    changes.insert("meta", meta);
    let cosmo = realizations::get("Planck18").unwrap().clone_with(changes).unwrap();

    let payload = to_format(&cosmo, "json", &ToMappingOptions::default()).unwrap();
    let got = from_format(&payload, Some("json"), &FromMappingOptions::default()).unwrap();
    assert_eq!(got, cosmo);
    assert_eq!(got.meta(), cosmo.meta());
    assert!(got.meta().get("calib").and_then(Value::as_map).is_some());
}

#[test]
fn json_output_honours_flattened_metadata() {
    let planck15 = realizations::get("Planck15").unwrap();
    let options = ToMappingOptions { move_from_meta: true, ..ToMappingOptions::default() };
    let payload = to_format(&planck15, "json", &options).unwrap();
    assert!(!payload.as_text().unwrap().contains(r#""meta""#));

    let err = from_format(&payload, None, &FromMappingOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);

    let got = from_format(&payload, None, &FromMappingOptions::default().move_to_meta(true)).unwrap();
    assert_eq!(got, planck15);
    assert_eq!(got.meta().get("sigma8"), Some(&Value::Float(0.8159)));
}

#[test]
fn json_read_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("planck13.json");
    let planck13 = realizations::get("Planck13").unwrap();
    let payload = to_format(&planck13, "json", &ToMappingOptions::default()).unwrap();
    fs::write(&path, payload.as_text().unwrap()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let got = from_format(&Payload::Text(text), None, &FromMappingOptions::default()).unwrap();
    assert_eq!(got, planck13);
}

#[test]
fn partial_json_takes_class_from_options() {
    let json = r#"{ "H0": 70, "Om0": 0.3, "Ode0": 0.7, "name": "handmade" }"#;
    let options = FromMappingOptions::default().cosmology("LambdaCDM");
    let got = from_format(&Payload::from(json), None, &options).unwrap();
    assert_eq!(got.class().qualname(), "LambdaCDM");
    assert_eq!(got.h0(), Some(70.0));
    assert_eq!(got.name(), Some("handmade"));
}

#[test]
fn format_and_input_must_agree() {
    let err = from_format(&Payload::from("{}"), Some("mapping"), &FromMappingOptions::default())
        .unwrap_err();
    assert!(matches!(err, FormatError::UnsupportedInput { .. }));
    assert_eq!(err.kind(), ErrorKind::Type);

    let err = from_format(&Payload::from("[1]"), Some("json"), &FromMappingOptions::default())
        .unwrap_err();
    assert!(matches!(err, FormatError::UnsupportedInput { .. }));
}

#[test]
fn malformed_json_is_reported() {
    let err = from_format(&Payload::from("{ not json"), None, &FromMappingOptions::default())
        .unwrap_err();
    assert!(matches!(err, FormatError::Json { .. }));
}

#[test]
fn unknown_format_is_a_lookup_error() {
    let wmap7 = realizations::get("WMAP7").unwrap();
    let err = to_format(&wmap7, "ascii.html", &ToMappingOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);
}

#[test]
fn isolated_registries_do_not_touch_the_global_ones() {
    let formats = FormatRegistry::new();
    formats.register(std::sync::Arc::new(cosmo_format::mapping::MappingFormat));
    let classes = ClassRegistry::new();

    let wmap5 = realizations::get("WMAP5").unwrap();
    let options = ToMappingOptions { kind: MappingKind::OrderedDict, ..ToMappingOptions::default() };
    let payload = formats.to_format(&wmap5, "mapping", &options).unwrap();
    assert_eq!(payload.as_mapping().map(|m| m.kind()), Some(MappingKind::OrderedDict));

    let got = formats.from_format(&payload, None, &FromMappingOptions::default(), &classes).unwrap();
    assert_eq!(got, wmap5);
    assert!(formats.get("json").is_err());
}
