#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use chrono::{DateTime, TimeZone, Utc};
use rstest::rstest;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// =============================================================================
// FIXTURES
// =============================================================================

const MOTOR_TYPES: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Data>
  <DataType Name="sMotor" BaseType="STRUCT" Comment="Motor">
    <DataType Name="Speed" BaseType="REAL" Comment="rpm" />
    <DataType Name="Mode" BaseType="Drives\eMode" Comment="mode" />
  </DataType>
</Data>
"#;

const MODE_TYPES: &str = r#"<Data>
  <DataType Name="eMode" BaseType="ENUM" Comment="">
    <DataType Name="Auto" BaseType="" EnumValue="0" />
  </DataType>
</Data>
"#;

const DUMP: &str = "Sysmac dump\r\n\
++D=sMotor\tN=motor\tNTP=PublicationOnly\tCom=Main motor$t$t$t$tDrives\r\n\
++D=BOOL\tN=hidden\tNTP=DoNotPublish\r\n\
++D=ARRAY[0..1] OF INT\tN=counts\tNTP=PublicationOnly\tCom=\r\n";

fn entity_index(name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<Project>
  <Entity type="Solution" name="{name}" id="sol">
    <ChildEntities>
      <Entity type="Variables" subtype="Global" id="vars" />
      <Entity type="Group" subtype="IecData" id="grp">
        <ChildEntities>
          <Entity type="DataType" id="dt-main" />
          <Entity type="DataType" id="dt-drives" namespace="Drives" />
        </ChildEntities>
      </Entity>
    </ChildEntities>
  </Entity>
</Project>
"#
    )
}

fn properties(date: &str) -> String {
    format!(
        r#"<ProjectProperties>
  <General>
    <ProjectType>Standard</ProjectType>
    <Author>jdoe</Author>
    <DateModified>{date}</DateModified>
  </General>
</ProjectProperties>
"#
    )
}

/// Write a complete project `uuid` under `root`.
fn write_project(root: &Path, uuid: &str, name: &str, date: &str) {
    let dir = root.join(uuid);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{uuid}.oem")), entity_index(name)).unwrap();
    fs::write(dir.join(format!("{uuid}.xml")), properties(date)).unwrap();
    fs::write(dir.join("dt-main.xml"), MOTOR_TYPES).unwrap();
    fs::write(dir.join("dt-drives.xml"), MODE_TYPES).unwrap();
    fs::write(dir.join("vars.xml"), DUMP).unwrap();
}

// =============================================================================
// METADATA
// =============================================================================

#[rstest]
#[case("2024-03-01T10:15:30Z", Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap())]
#[case("2024-03-01T10:15:30+02:00", Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 30).unwrap())]
#[case("2024-03-01T10:15:30", Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap())]
#[case("2024-03-01 10:15:30", Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap())]
#[case("2024-03-01", Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())]
fn test_parse_timestamp(#[case] text: &str, #[case] expected: DateTime<Utc>) {
    assert_eq!(parse_timestamp(text), Some(expected));
}

#[test]
fn test_parse_timestamp_keeps_fraction() {
    let parsed = parse_timestamp("2024-03-01T10:15:30.5").unwrap();
    assert_eq!(parsed.timestamp_subsec_millis(), 500);
}

#[rstest]
#[case("")]
#[case("yesterday")]
#[case("2024-13-01")]
fn test_parse_timestamp_rejects_garbage(#[case] text: &str) {
    assert_eq!(parse_timestamp(text), None);
}

#[test]
fn test_metadata_read() {
    let root = TempDir::new().unwrap();
    write_project(root.path(), "p1", "Line A", "2024-03-01T10:15:30+01:00");

    let project = Project::open(root.path(), "p1").unwrap();
    let info = project.info();
    assert_eq!(info.uuid, "p1");
    assert_eq!(info.name, "Line A");
    assert_eq!(info.author, "jdoe");
    assert_eq!(info.project_type, "Standard");
    assert_eq!(
        info.last_modified,
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 15, 30).unwrap()
    );
}

#[test]
fn test_metadata_missing_properties_keeps_name() {
    let root = TempDir::new().unwrap();
    write_project(root.path(), "p1", "Line A", "2024-03-01");
    fs::remove_file(root.path().join("p1").join("p1.xml")).unwrap();

    let info = Project::open(root.path(), "p1").unwrap().info().clone();
    assert_eq!(
        info,
        ProjectInfo::new("p1").with_name("Line A")
    );
    assert_eq!(info.last_modified, DateTime::<Utc>::UNIX_EPOCH);
}

#[test]
fn test_metadata_missing_index_keeps_properties() {
    let root = TempDir::new().unwrap();
    write_project(root.path(), "p1", "Line A", "2024-03-01");
    fs::remove_file(root.path().join("p1").join("p1.oem")).unwrap();

    let project = Project::open(root.path(), "p1").unwrap();
    assert_eq!(project.name(), "");
    assert_eq!(project.info().display_name(), "p1");
    assert_eq!(project.info().author, "jdoe");
}

#[test]
fn test_metadata_invalid_date_defaults_to_epoch() {
    let root = TempDir::new().unwrap();
    write_project(root.path(), "p1", "Line A", "not a date");

    let info = Project::open(root.path(), "p1").unwrap().info().clone();
    assert_eq!(info.last_modified, DateTime::<Utc>::UNIX_EPOCH);
    assert_eq!(info.author, "jdoe");
}

#[test]
fn test_open_missing_project_is_error() {
    let root = TempDir::new().unwrap();
    let err = Project::open(root.path(), "nope").unwrap_err();
    assert!(matches!(err, ProjectError::Io { .. }));
}

// =============================================================================
// DISCOVERY
// =============================================================================

#[test]
fn test_discover_sorts_most_recent_first() {
    let root = TempDir::new().unwrap();
    write_project(root.path(), "old", "Old", "2020-01-01T00:00:00");
    write_project(root.path(), "new", "New", "2024-01-01T00:00:00");
    write_project(root.path(), "mid", "Mid", "2022-01-01T00:00:00");
    fs::create_dir(root.path().join("empty")).unwrap();
    fs::write(root.path().join("stray.txt"), "not a project").unwrap();

    let projects = discover_projects(root.path()).unwrap();
    let uuids: Vec<_> = projects.iter().map(|p| p.uuid()).collect();
    assert_eq!(uuids, ["new", "mid", "old", "empty"]);
}

#[test]
fn test_discover_missing_root_is_error() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("absent");
    let err = SolutionRoot::new(&missing).discover().unwrap_err();
    assert!(matches!(err, ProjectError::SolutionRootNotFound(path) if path == missing));
}

#[test]
fn test_solution_root_default() {
    assert_eq!(
        SolutionRoot::default().path(),
        Path::new(r"C:\OMRON\Data\Solution")
    );
}

// =============================================================================
// DECLARATIONS
// =============================================================================

#[test]
fn test_type_dictionary_uses_namespaces() {
    let root = TempDir::new().unwrap();
    write_project(root.path(), "p1", "Line A", "2024-03-01");

    let dictionary = Project::open(root.path(), "p1")
        .unwrap()
        .type_dictionary()
        .unwrap();
    let keys: Vec<_> = dictionary.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["sMotor", "Drives\\eMode"]);
}

#[test]
fn test_global_variables() {
    let root = TempDir::new().unwrap();
    write_project(root.path(), "p1", "Line A", "2024-03-01");

    let globals = Project::open(root.path(), "p1")
        .unwrap()
        .global_variables()
        .unwrap();
    assert_eq!(globals.len(), 3);
    assert_eq!(globals[0].comment, "Main motor");
    assert!(!globals[1].is_published());
}

#[test]
fn test_published_symbols() {
    let root = TempDir::new().unwrap();
    write_project(root.path(), "p1", "Line A", "2024-03-01");

    let resolution = Project::open(root.path(), "p1")
        .unwrap()
        .published_symbols()
        .unwrap();
    let rows: Vec<_> = resolution
        .symbols
        .iter()
        .map(|s| (s.name.as_str(), s.base_type.to_string()))
        .collect();
    assert_eq!(
        rows,
        [
            ("counts", "INT[0..1]".to_string()),
            ("motor.Mode", "DINT".to_string()),
            ("motor.Speed", "REAL".to_string()),
        ]
    );
    assert!(resolution.diagnostics.is_empty());
}

#[test]
fn test_missing_global_entity_is_error() {
    let root = TempDir::new().unwrap();
    write_project(root.path(), "p1", "Line A", "2024-03-01");
    fs::write(
        root.path().join("p1").join("p1.oem"),
        r#"<Project><Entity type="Solution" name="Line A" /></Project>"#,
    )
    .unwrap();

    let err = Project::open(root.path(), "p1")
        .unwrap()
        .global_variables()
        .unwrap_err();
    assert!(matches!(err, ProjectError::MissingEntity { .. }));
}

#[test]
fn test_missing_data_type_file_is_error() {
    let root = TempDir::new().unwrap();
    write_project(root.path(), "p1", "Line A", "2024-03-01");
    fs::remove_file(root.path().join("p1").join("dt-drives.xml")).unwrap();

    let err = Project::open(root.path(), "p1")
        .unwrap()
        .type_dictionary()
        .unwrap_err();
    match err {
        ProjectError::Io { path, .. } => assert!(path.ends_with("dt-drives.xml")),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_resolve_error_names_project() {
    let root = TempDir::new().unwrap();
    write_project(root.path(), "p1", "Line A", "2024-03-01");
    fs::write(
        root.path().join("p1").join("vars.xml"),
        "++D=_sAXIS_REF_STA\tN=axis\tNTP=PublicationOnly\n",
    )
    .unwrap();

    let err = Project::open(root.path(), "p1")
        .unwrap()
        .published_symbols()
        .unwrap_err();
    assert!(matches!(err, ProjectError::Resolve { ref project, .. } if project == "Line A"));
    assert!(err.to_string().contains("Line A"));
}
