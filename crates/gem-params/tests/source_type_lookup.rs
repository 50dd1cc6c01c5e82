use gem_params::SourceType;

const LABELS: [&str; 4] = [
    "Area Source",
    "Grid Source",
    "Fault Source",
    "Subduction Fault Source",
];

#[test]
fn every_label_resolves_to_its_member() {
    for label in LABELS {
        let member = SourceType::lookup(Some(label)).expect("known label");
        assert_eq!(member.label(), label);
        assert_eq!(member.to_string(), label);
        assert!(SourceType::is_valid(label));
    }
}

#[test]
fn fault_source_scenario() {
    let member = SourceType::lookup(Some("Fault Source")).unwrap();
    assert_eq!(member, SourceType::Fault);
    assert_eq!(format!("{member}"), "Fault Source");
}

#[test]
fn volcano_source_is_rejected() {
    assert!(!SourceType::is_valid("Volcano Source"));
    let err = SourceType::lookup(Some("Volcano Source")).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.info().message, "GEM source name does not exist");
    assert_eq!(
        err.info().context.get("name").map(String::as_str),
        Some("Volcano Source")
    );
}

#[test]
fn absent_name_is_null_input_not_invalid_argument() {
    let err = SourceType::lookup(None).unwrap_err();
    assert!(err.is_null_input());
    assert!(!err.is_invalid_argument());
}

#[test]
fn comparison_is_exact() {
    for candidate in [
        "fault source",
        "FAULT SOURCE",
        " Fault Source",
        "Fault Source ",
        "Fault",
        "",
    ] {
        assert!(!SourceType::is_valid(candidate), "{candidate:?}");
        assert!(SourceType::from_label(candidate).unwrap_err().is_invalid_argument());
    }
}

#[test]
fn iteration_follows_declaration_order() {
    let members: Vec<_> = SourceType::iter().collect();
    assert_eq!(
        members,
        vec![
            SourceType::Area,
            SourceType::Grid,
            SourceType::Fault,
            SourceType::SubductionFault,
        ]
    );
    assert_eq!(SourceType::iter().len(), 4);
    assert_eq!(SourceType::ALL.to_vec(), members);
}

#[test]
fn labels_are_pairwise_distinct() {
    let mut labels: Vec<_> = SourceType::iter().map(SourceType::label).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), SourceType::ALL.len());
}

#[test]
fn from_str_and_try_from_agree_with_lookup() {
    for label in LABELS {
        let parsed: SourceType = label.parse().unwrap();
        let converted = SourceType::try_from(label).unwrap();
        assert_eq!(parsed, converted);
        assert_eq!(Some(parsed), SourceType::lookup(Some(label)).ok());
    }
    assert!("Volcano Source".parse::<SourceType>().is_err());
}

#[test]
fn keys_are_stable() {
    let keys: Vec<_> = SourceType::iter().map(SourceType::key).collect();
    assert_eq!(keys, vec!["area", "grid", "fault", "subduction_fault"]);
}

#[test]
fn registry_is_shareable_across_threads() {
    let handles: Vec<_> = LABELS
        .into_iter()
        .map(|label| std::thread::spawn(move || SourceType::from_label(label).unwrap()))
        .collect();
    let resolved: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(resolved, SourceType::ALL.to_vec());
}
