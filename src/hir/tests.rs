#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::base::constants::INTERNAL_TYPE_NAMES;
use crate::syntax::{ArrayTypeError, GlobalVariable, Primitive, TypeDeclaration, TypeKind};
use rstest::rstest;

// =============================================================================
// FIXTURES
// =============================================================================

fn published(name: &str, data_type: &str) -> GlobalVariable {
    GlobalVariable {
        name: name.into(),
        data_type: data_type.into(),
        comment: format!("{name} comment"),
        network_publish: Some("PublicationOnly".into()),
        ..Default::default()
    }
}

fn member(name: &str, data_type: &str) -> TypeDeclaration {
    TypeDeclaration::new(name, data_type).with_comment(format!("{name} member"))
}

fn structure(name: &str, members: Vec<TypeDeclaration>) -> TypeDeclaration {
    TypeDeclaration::new(name, "STRUCT").with_members(members)
}

/// sMotor { Speed: REAL, Status: sStatus, Mode: eMode, Axis: _sAXIS_REF_STA }
/// sStatus { Ready: BOOL, Codes: ARRAY[0..3] OF WORD }
/// eMode: ENUM
fn motor_dictionary() -> TypeDictionary {
    [
        structure(
            "sMotor",
            vec![
                member("Speed", "REAL"),
                member("Status", "sStatus"),
                member("Mode", "eMode"),
                member("Axis", "_sAXIS_REF_STA"),
            ],
        ),
        structure(
            "sStatus",
            vec![member("Ready", "BOOL"), member("Codes", "ARRAY[0..3] OF WORD")],
        ),
        TypeDeclaration::new("eMode", "ENUM"),
    ]
    .into_iter()
    .collect()
}

fn names(resolution: &Resolution) -> Vec<&str> {
    resolution.symbols.iter().map(|s| s.name.as_str()).collect()
}

fn find<'r>(resolution: &'r Resolution, name: &str) -> &'r crate::syntax::ResolvedSymbol {
    resolution
        .symbols
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("{name} not resolved"))
}

// =============================================================================
// DICTIONARY
// =============================================================================

#[test]
fn test_dictionary_keys_are_qualified() {
    let dict: TypeDictionary = [
        TypeDeclaration::new("sA", "STRUCT").with_namespace(Some("Ns".into())),
        TypeDeclaration::new("sB", "STRUCT"),
    ]
    .into_iter()
    .collect();
    assert!(dict.contains("Ns\\sA"));
    assert!(!dict.contains("sA"));
    assert!(dict.contains("sB"));
}

#[test]
fn test_dictionary_last_write_wins() {
    let mut dict = TypeDictionary::new();
    dict.insert(TypeDeclaration::new("sA", "STRUCT").with_comment("first"));
    let replaced = dict.insert(TypeDeclaration::new("sA", "ENUM").with_comment("second"));

    assert_eq!(replaced.map(|d| d.comment().to_string()), Some("first".into()));
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.get("sA").unwrap().kind(), TypeKind::Enum);
}

// =============================================================================
// INTERNAL CATALOG
// =============================================================================

#[test]
fn test_catalog_covers_every_reserved_name() {
    for name in INTERNAL_TYPE_NAMES {
        let decl = internal_types::lookup(name).expect("catalog entry");
        assert_eq!(decl.name(), name);
        assert_eq!(decl.kind(), TypeKind::Struct);
        assert!(!decl.members().is_empty());
        assert!(internal_types::is_internal_type(name));
    }
    assert_eq!(internal_types::iter().count(), INTERNAL_TYPE_NAMES.len());
}

#[test]
fn test_catalog_lookup_is_case_sensitive() {
    assert!(internal_types::lookup("_saxis_ref_sta").is_none());
    assert!(!internal_types::is_internal_type("_saxis_ref_sta"));
}

#[test]
fn test_catalog_event_layout() {
    let event = internal_types::lookup("_sMC_REF_EVENT").unwrap();
    let members: Vec<_> = event
        .members()
        .iter()
        .map(|m| (m.name(), m.data_type()))
        .collect();
    assert_eq!(members, [("Active", "BOOL"), ("Code", "WORD")]);
}

// =============================================================================
// SEEDING
// =============================================================================

#[test]
fn test_primitive_global_resolves_directly() {
    let globals = [published("myFlag", "BOOL")];
    let resolution = resolve_published_symbols(&TypeDictionary::new(), &globals).unwrap();

    assert_eq!(resolution.symbols.len(), 1);
    let flag = &resolution.symbols[0];
    assert_eq!(flag.name, "myFlag");
    assert_eq!(flag.base_type.to_string(), "BOOL");
    assert_eq!(flag.comment, "myFlag comment");
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("Publish"))]
#[case(Some("PublicationOnly "))]
fn test_unpublished_globals_are_excluded(#[case] flag: Option<&str>) {
    let globals = [GlobalVariable {
        network_publish: flag.map(String::from),
        ..published("hidden", "BOOL")
    }];
    let resolution = resolve_published_symbols(&TypeDictionary::new(), &globals).unwrap();
    assert!(resolution.symbols.is_empty());
}

#[test]
fn test_unknown_type_is_skipped_with_diagnostic() {
    let globals = [published("ghost", "sGhost"), published("real", "INT")];
    let resolution = resolve_published_symbols(&TypeDictionary::new(), &globals).unwrap();

    assert_eq!(names(&resolution), ["real"]);
    assert_eq!(resolution.diagnostics.len(), 1);
    let diag = &resolution.diagnostics[0];
    assert_eq!(diag.code, codes::UNRESOLVED_TYPE);
    assert_eq!(diag.symbol, "ghost");
    assert_eq!(diag.type_name, "sGhost");
    assert_eq!(diag.severity, Severity::Warning);
}

#[test]
fn test_internal_type_global_is_fatal() {
    let globals = [published("axis", "_sAXIS_REF_STA")];
    let err = resolve_published_symbols(&TypeDictionary::new(), &globals).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::InternalTypeUnsupported { ref symbol, ref type_name }
            if symbol == "axis" && type_name == "_sAXIS_REF_STA"
    ));
}

#[test]
fn test_internal_type_array_is_fatal() {
    let globals = [published("axes", "ARRAY[0..1] OF _sMC_REF_EVENT")];
    let err = resolve_published_symbols(&TypeDictionary::new(), &globals).unwrap_err();
    assert_eq!(err.symbol(), "axes");
    assert!(matches!(err, ResolveError::InternalTypeUnsupported { .. }));
}

#[test]
fn test_malformed_array_is_fatal() {
    let globals = [published("ok", "BOOL"), published("bad", "ARRAY[0..x] OF INT")];
    let err = resolve_published_symbols(&TypeDictionary::new(), &globals).unwrap_err();
    match err {
        ResolveError::ArrayFormat { symbol, source } => {
            assert_eq!(symbol, "bad");
            assert!(matches!(source, ArrayTypeError::InvalidBound { .. }));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

// =============================================================================
// ARRAYS
// =============================================================================

#[test]
fn test_primitive_array_stays_packed() {
    let globals = [published("aCptNDef", "ARRAY[0..19] OF USINT")];
    let resolution = resolve_published_symbols(&TypeDictionary::new(), &globals).unwrap();

    assert_eq!(names(&resolution), ["aCptNDef"]);
    assert_eq!(resolution.symbols[0].base_type.to_string(), "USINT[0..19]");
}

#[test]
fn test_struct_array_expands_per_index() {
    let dict: TypeDictionary = [structure("sPoint", vec![member("X", "REAL")])]
        .into_iter()
        .collect();
    let globals = [published("pts", "ARRAY[0..1,1..2] OF sPoint")];
    let resolution = resolve_published_symbols(&dict, &globals).unwrap();

    assert_eq!(
        names(&resolution),
        ["pts[0,1].X", "pts[0,2].X", "pts[1,1].X", "pts[1,2].X"]
    );
}

#[test]
fn test_enum_array_elements_become_dint() {
    let dict: TypeDictionary = [TypeDeclaration::new("eMode", "ENUM")].into_iter().collect();
    let globals = [published("modes", "ARRAY[1..2] OF eMode")];
    let resolution = resolve_published_symbols(&dict, &globals).unwrap();

    assert_eq!(names(&resolution), ["modes[1]", "modes[2]"]);
    assert!(
        resolution
            .symbols
            .iter()
            .all(|s| s.base_type.primitive == Primitive::Dint)
    );
}

#[test]
fn test_array_of_unknown_type_skips_each_index() {
    let globals = [published("ghosts", "ARRAY[0..2] OF sGhost")];
    let resolution = resolve_published_symbols(&TypeDictionary::new(), &globals).unwrap();

    assert!(resolution.symbols.is_empty());
    let mut skipped: Vec<_> = resolution
        .diagnostics
        .iter()
        .map(|d| d.symbol.as_str())
        .collect();
    skipped.sort();
    assert_eq!(skipped, ["ghosts[0]", "ghosts[1]", "ghosts[2]"]);
}

// =============================================================================
// STRUCTURES
// =============================================================================

#[test]
fn test_struct_expansion_full_tree() {
    let globals = [published("motor", "sMotor")];
    let resolution = resolve_published_symbols(&motor_dictionary(), &globals).unwrap();

    assert_eq!(
        names(&resolution),
        [
            "motor.Axis.Continuous",
            "motor.Axis.Coordinated",
            "motor.Axis.Disabled",
            "motor.Axis.Discrete",
            "motor.Axis.ErrorStop",
            "motor.Axis.Homing",
            "motor.Axis.Ready",
            "motor.Axis.Reserved",
            "motor.Axis.Standstill",
            "motor.Axis.Stopping",
            "motor.Axis.Synchronized",
            "motor.Mode",
            "motor.Speed",
            "motor.Status.Codes",
            "motor.Status.Ready",
        ]
    );
    assert!(resolution.diagnostics.is_empty());
}

#[test]
fn test_struct_member_types_and_comments() {
    let globals = [published("motor", "sMotor")];
    let resolution = resolve_published_symbols(&motor_dictionary(), &globals).unwrap();

    let speed = find(&resolution, "motor.Speed");
    assert_eq!(speed.base_type.to_string(), "REAL");
    assert_eq!(speed.comment, "Speed member");

    let mode = find(&resolution, "motor.Mode");
    assert_eq!(mode.base_type.to_string(), "DINT");
    assert_eq!(mode.comment, "Mode member");

    let codes = find(&resolution, "motor.Status.Codes");
    assert_eq!(codes.base_type.to_string(), "WORD[0..3]");
    assert_eq!(codes.comment, "Codes member");

    let reserved = find(&resolution, "motor.Axis.Reserved");
    assert_eq!(reserved.base_type.to_string(), "BYTE[0..7]");
}

#[test]
fn test_enum_global_becomes_dint() {
    let globals = [published("mode", "eMode")];
    let resolution = resolve_published_symbols(&motor_dictionary(), &globals).unwrap();

    assert_eq!(names(&resolution), ["mode"]);
    assert_eq!(resolution.symbols[0].base_type.primitive, Primitive::ENUM_STORAGE);
    assert_eq!(resolution.symbols[0].comment, "mode comment");
}

#[test]
fn test_struct_member_of_unknown_type_is_skipped() {
    let dict: TypeDictionary = [structure(
        "sBox",
        vec![member("Known", "INT"), member("Unknown", "sMissing")],
    )]
    .into_iter()
    .collect();
    let globals = [published("box", "sBox")];
    let resolution = resolve_published_symbols(&dict, &globals).unwrap();

    assert_eq!(names(&resolution), ["box.Known"]);
    assert_eq!(resolution.diagnostics[0].symbol, "box.Unknown");
}

#[test]
fn test_namespaced_member_reference() {
    let dict: TypeDictionary = [
        TypeDeclaration::new("sInner", "STRUCT")
            .with_namespace(Some("Lib".into()))
            .with_members(vec![member("Flag", "BOOL")]),
        structure("sOuter", vec![member("Inner", "Lib\\sInner")]),
    ]
    .into_iter()
    .collect();
    let globals = [published("outer", "sOuter")];
    let resolution = resolve_published_symbols(&dict, &globals).unwrap();

    assert_eq!(names(&resolution), ["outer.Inner.Flag"]);
}

#[test]
fn test_deep_nesting_does_not_recurse() {
    // 2000 levels: s0 { Next: s1 } ... s1999 { Leaf: BOOL }
    let depth = 2000;
    let mut dict = TypeDictionary::new();
    for level in 0..depth {
        let next = if level + 1 == depth {
            member("Leaf", "BOOL")
        } else {
            member("Next", &format!("s{}", level + 1))
        };
        dict.insert(structure(&format!("s{level}"), vec![next]));
    }
    let globals = [published("root", "s0")];
    let resolution = resolve_published_symbols(&dict, &globals).unwrap();

    assert_eq!(resolution.symbols.len(), 1);
    let expected = format!("root{}.Leaf", ".Next".repeat(depth - 1));
    assert_eq!(resolution.symbols[0].name, expected);
}

// =============================================================================
// OUTPUT PROPERTIES
// =============================================================================

#[test]
fn test_output_is_strictly_sorted_by_bytes() {
    let globals = [
        published("b", "BOOL"),
        published("B", "BOOL"),
        published("a_z", "BOOL"),
        published("aZ", "BOOL"),
        published("motor", "sMotor"),
    ];
    let resolution = resolve_published_symbols(&motor_dictionary(), &globals).unwrap();

    assert!(
        resolution
            .symbols
            .windows(2)
            .all(|w| w[0].name.as_bytes() < w[1].name.as_bytes())
    );
    assert_eq!(&names(&resolution)[..3], ["B", "aZ", "a_z"]);
}

#[test]
fn test_resolution_is_deterministic() {
    let globals = [
        published("motor", "sMotor"),
        published("motors", "ARRAY[0..2] OF sMotor"),
        published("flag", "BOOL"),
        published("ghost", "sGhost"),
    ];
    let dict = motor_dictionary();
    let first = resolve_published_symbols(&dict, &globals).unwrap();
    let second = resolve_published_symbols(&dict, &globals).unwrap();
    assert_eq!(first, second);
}
