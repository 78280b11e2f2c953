//! End-to-end test suite for enumgen-core.

use crate::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn write_file(file: &Path, content: &str) {
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(file, content).unwrap();
}

fn setup_temp_project() -> PathBuf {
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir()
        .join("enumgen_tests")
        .join(format!("{}_{}", timestamp, id));

    if dir.exists() {
        fs::remove_dir_all(&dir).ok();
    }
    fs::create_dir_all(dir.join("decls")).unwrap();
    dir
}

const COLORS: &str = r##"
//! Color declarations.

struct ColorEnum {
    #[tag = r#"enum:"RED""#]
    Red: String,
    #[tag = r#"enum:"LIGHT_BLUE""#]
    LightBlue: String,
}

struct Unrelated {
    #[tag = r#"enum:"NOPE""#]
    Nope: String,
}
"##;

const STATUS: &str = r##"
struct StatusEnum {
    #[tag = r#"enum:"true""#]
    On: bool,
    #[tag = r#"enum:"false""#]
    Off: bool,
}

struct SushiEnum {
    #[tag = r#"enum:"MAKI,Rice and filling wrapped in seaweed""#]
    Maki: String,
    #[tag = r#"enum:"TEMAKI,Hand rolled into a cone shape""#]
    Temaki: String,
    #[tag = r#"enum:"SASHIMI,Fish or shellfish served alone without rice""#]
    Sashimi: String,
}
"##;

// Scenario: ColorEnum with RED / LIGHT_BLUE
#[test]
fn test_color_scenario_model() {
    let root = setup_temp_project();
    let file = root.join("decls/colors.rs");
    write_file(&file, COLORS);

    let (files, enums) = Enumgen::new().file(&file).extract().unwrap();
    assert_eq!(files, vec![file]);
    assert_eq!(enums.len(), 1);

    let color = &enums[0];
    assert_eq!(color.name, "Color");
    assert_eq!(
        color.elements,
        vec![
            EnumElement {
                value: "RED".into(),
                field: "Red".into(),
                description: String::new(),
                value_type: "String".into(),
            },
            EnumElement {
                value: "LIGHT_BLUE".into(),
                field: "LightBlue".into(),
                description: String::new(),
                value_type: "String".into(),
            },
        ]
    );
    fs::remove_dir_all(&root).ok();
}

// Scenario: full run writes one formatted file with header first
#[test]
fn test_run_writes_generated_file() {
    let root = setup_temp_project();
    write_file(&root.join("decls/colors.rs"), COLORS);
    write_file(&root.join("decls/status.rs"), STATUS);
    let output = root.join("src/enums_gen.rs");

    let report = Enumgen::new()
        .file(root.join("decls"))
        .output(&output)
        .run()
        .unwrap();

    assert_eq!(report.output, output);
    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.enum_count, 3);

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(report.bytes_written, text.len());
    assert!(text.contains("Code generated by enumgen from colors.rs, status.rs. DO NOT EDIT."));

    // encounter order: colors.rs before status.rs, declaration order inside
    let color = text.find("pub enum Color").unwrap();
    let status = text.find("pub enum Status").unwrap();
    let sushi = text.find("pub enum Sushi").unwrap();
    assert!(text.find("DO NOT EDIT").unwrap() < color);
    assert!(color < status && status < sushi);
    assert!(!text.contains("pub enum Unrelated"));
    fs::remove_dir_all(&root).ok();
}

#[cfg(feature = "format")]
#[test]
fn test_generated_source_is_formatted() {
    let root = setup_temp_project();
    write_file(&root.join("decls/colors.rs"), COLORS);

    let generation = Enumgen::new().file(root.join("decls")).generate().unwrap();
    assert!(generation.formatted);
    assert!(generation.source.starts_with("//! Code generated by enumgen"));
    assert!(generation.source.contains("pub enum Color {\n    Red,\n    LightBlue,\n}"));
    assert!(generation.source.contains("Self::LightBlue => \"LIGHT_BLUE\","));
    assert!(generation.source.contains("pub const COLOR_VALUES: [Color; 2] = [Color::Red, Color::LightBlue];"));
    fs::remove_dir_all(&root).ok();
}

// Scenario: boolean display values are not coerced
#[test]
fn test_status_values_verbatim() {
    let root = setup_temp_project();
    write_file(&root.join("decls/status.rs"), STATUS);

    let generation = Enumgen::new().file(root.join("decls/status.rs")).generate().unwrap();
    let status = &generation.enumerations[0];
    assert_eq!(status.name, "Status");
    assert_eq!(status.value_type, "bool");
    let values: Vec<_> = status.elements.iter().map(|e| e.value.as_str()).collect();
    assert_eq!(values, vec!["true", "false"]);
    assert!(generation.source.contains("\"true\""));

    let sushi = &generation.enumerations[1];
    assert_eq!(sushi.elements[2].description, "Fish or shellfish served alone without rice");
    fs::remove_dir_all(&root).ok();
}

// Scenario: missing enum key halts before any output is written
#[test]
fn test_missing_key_writes_nothing() {
    let root = setup_temp_project();
    write_file(&root.join("decls/colors.rs"), COLORS);
    write_file(
        &root.join("decls/zbroken.rs"),
        r##"
struct BrokenEnum {
    #[tag = r#"enum:RED"#]
    Red: String,
}
"##,
    );
    let output = root.join("out.rs");

    let err = Enumgen::new()
        .file(root.join("decls"))
        .output(&output)
        .run()
        .unwrap_err();

    assert!(matches!(err, EnumgenError::Tag { .. }));
    assert!(!err.is_internal());
    assert!(!output.exists());
    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_lower_rejects_case_only_collisions() {
    let root = setup_temp_project();
    write_file(
        &root.join("decls/method.rs"),
        r##"
struct HTTPMethodEnum {
    #[tag = r#"enum:"GET""#]
    Get: String,
    #[tag = r#"enum:"get""#]
    Get2: String,
}
"##,
    );
    let output = root.join("out.rs");

    // distinct values are fine without case folding
    let plain = Enumgen::new().file(root.join("decls")).generate().unwrap();
    assert_eq!(plain.enumerations[0].len(), 2);

    let err = Enumgen::new()
        .file(root.join("decls"))
        .output(&output)
        .lower(true)
        .run()
        .unwrap_err();
    assert!(matches!(err, EnumgenError::Declaration { .. }));
    assert!(!err.is_internal());
    assert!(!output.exists());
    fs::remove_dir_all(&root).ok();
}

// Scenario: colliding variant names are bad input, not a generator defect
#[test]
fn test_colliding_variants_are_user_errors() {
    let root = setup_temp_project();
    write_file(
        &root.join("decls/colors.rs"),
        r##"
struct ColorEnum {
    #[tag = r#"enum:"light""#]
    light_blue: String,
    #[tag = r#"enum:"LIGHT_BLUE""#]
    LightBlue: String,
}
"##,
    );

    let err = Enumgen::new().file(root.join("decls")).generate().unwrap_err();
    assert!(matches!(err, EnumgenError::Declaration { .. }));
    assert!(!err.is_internal());
    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_generation_is_deterministic() {
    let root = setup_temp_project();
    write_file(&root.join("decls/colors.rs"), COLORS);
    write_file(&root.join("decls/status.rs"), STATUS);

    let builder = Enumgen::new().file(root.join("decls")).marshal(true);
    let first = builder.generate().unwrap().source;
    let second = builder.generate().unwrap().source;
    assert_eq!(first, second);
    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_render_same_model_twice_is_identical() {
    let e = extract_from_source(Path::new("colors.rs"), COLORS, &ExtractOptions::default())
        .unwrap()
        .remove(0);

    let mut once = Renderer::new(RenderOptions::default());
    once.render(&EnumTemplate, &e).unwrap();
    let mut twice = Renderer::new(RenderOptions::default());
    twice.render(&EnumTemplate, &e).unwrap();
    twice.render(&EnumTemplate, &e).unwrap();

    assert_eq!(twice.fragments()[0], twice.fragments()[1]);
    assert_eq!(once.finish(), twice.fragments()[0]);
}

#[test]
fn test_default_output_next_to_input_is_not_rescanned() {
    let root = setup_temp_project();
    let decls = root.join("decls");
    write_file(&decls.join("colors.rs"), COLORS);

    let first = Enumgen::new().file(&decls).run().unwrap();
    assert_eq!(first.output, decls.join(DEFAULT_OUTPUT_NAME));
    assert!(first.output.exists());

    // second run must not read its own output
    let second = Enumgen::new().file(&decls).run().unwrap();
    assert_eq!(second.files_scanned, 1);
    assert_eq!(second.enum_count, 1);
    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_no_enumerations_still_renders_header() {
    let root = setup_temp_project();
    write_file(&root.join("decls/plain.rs"), "struct Plain { a: i32 }");

    let generation = Enumgen::new().file(root.join("decls")).generate().unwrap();
    assert!(generation.enumerations.is_empty());
    assert!(generation.source.contains("DO NOT EDIT"));
    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_no_inputs_is_invalid_argument() {
    let err = Enumgen::new().generate().unwrap_err();
    assert!(matches!(err, EnumgenError::InvalidArgument { .. }));
}

#[test]
fn test_syntax_error_reports_file() {
    let root = setup_temp_project();
    let file = root.join("decls/bad.rs");
    write_file(&file, "struct BadEnum {\n    #[tag = r#\"enum:\"A\"\"#]\n    A String,\n}\n");

    let err = Enumgen::new().file(&file).generate().unwrap_err();
    match &err {
        EnumgenError::Parse { path, line, .. } => {
            assert_eq!(path, &file);
            assert_eq!(*line, Some(3));
        }
        other => panic!("Expected Parse error, got {other:?}"),
    }
    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_config_overrides_defaults() {
    let root = setup_temp_project();
    write_file(
        &root.join("decls/levels.rs"),
        r##"
#[generate]
struct Level {
    #[meta = r#"value:"low""#]
    Low: String,
    #[meta = r#"value:"high""#]
    High: String,
}
"##,
    );
    write_file(
        &root.join(CONFIG_FILE),
        r#"
output = "gen/levels_gen.rs"
marshal = true
lower = true
detection = "attribute"
attribute = "generate"
key = "value"
tag_attribute = "meta"
format = false
"#,
    );

    let config = load_config(&root).unwrap().unwrap();
    let generation = Enumgen::new()
        .file(root.join("decls"))
        .with_config(&config)
        .generate()
        .unwrap();

    assert_eq!(generation.output, PathBuf::from("gen/levels_gen.rs"));
    assert!(!generation.formatted);
    assert_eq!(generation.enumerations.len(), 1);
    assert_eq!(generation.enumerations[0].name, "Level");
    assert!(generation.source.contains(":: serde :: Serialize"));
    assert!(generation.source.contains("to_lowercase"));
    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_model_dumps_as_json() {
    let root = setup_temp_project();
    write_file(&root.join("decls/colors.rs"), COLORS);

    let (_, enums) = Enumgen::new().file(root.join("decls")).extract().unwrap();
    let json = serde_json::to_value(&enums).unwrap();
    assert_eq!(json[0]["original_name"], "ColorEnum");
    assert_eq!(json[0]["elements"][1]["field"], "LightBlue");
    fs::remove_dir_all(&root).ok();
}
