use cosmo::prelude::*;

#[test]
fn method_style_round_trip() {
    for name in cosmo::realizations::available() {
        let cosmo = cosmo::realizations::get(name).unwrap();
        let map = cosmo.to_mapping(&ToMappingOptions::default());
        assert_eq!(Cosmology::from_mapping(&map, &FromMappingOptions::default()).unwrap(), cosmo);
    }
}

#[test]
fn format_feature_is_reported() {
    assert!(cosmo::features::is_enabled("mapping"));
    assert_eq!(cosmo::features::is_enabled("format"), cfg!(feature = "format"));
    assert!(!cosmo::features::is_enabled("ascii"));
}

#[cfg(feature = "format")]
#[test]
fn method_style_json_round_trip() {
    let planck18 = cosmo::realizations::get("Planck18").unwrap();
    let json = planck18.to_format("json", &ToMappingOptions::default()).unwrap();
    let back = Cosmology::from_format(&json, None, &FromMappingOptions::default()).unwrap();
    assert_eq!(back, planck18);
    assert_eq!(back.meta(), planck18.meta());
}

#[test]
fn class_argument_conversions() {
    let by_name: ClassArg = "FlatwCDM".into();
    assert!(matches!(by_name, ClassArg::Name(ref n) if n == "FlatwCDM"));
    let by_class: ClassArg = cosmo::kernel::flrw::flat_w_cdm().into();
    assert!(matches!(by_class, ClassArg::Class(ref c) if c.qualname() == "FlatwCDM"));
}
