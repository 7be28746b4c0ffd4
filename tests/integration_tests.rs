//! Integration tests for template generation.

use std::fs;
use std::path::Path;
use stencil::prelude::*;
use tempfile::TempDir;

const SPEC: &str = r#"
name: widgets
version: 2.0.0
variables:
  project_slug:
    description: Package slug
    default: acme-widgets
    transforms:
      - match: acme-widgets
  company:
    default: Acme Corp
    transforms:
      - match: Acme Corp
        node_types: [string, comment]
  namespace:
    default: AcmeWidgets
    transforms:
      - match: AcmeWidgets
        node_types: [namespace]
  include_docs:
    type: bool
    default: true
conditional_paths:
  docs/: include_docs
exclude: ["*.log"]
no_transform: ["assets/**"]
"#;

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn create_project(dir: &Path) {
    write(dir, ".stencil.yml", SPEC.as_bytes());
    write(
        dir,
        "setup.py",
        b"from setuptools import setup\n\nsetup(name=\"acme-widgets\")\n",
    );
    write(
        dir,
        "src/Program.cs",
        b"// Copyright Acme Corp\nnamespace AcmeWidgets\n{\n    class Program { }\n}\n",
    );
    write(dir, "LICENSE", b"Copyright (c) Acme Corp\n");
    write(dir, "Makefile", b"build:\n\techo acme-widgets\n");
    write(dir, "docs/index.md", b"# acme-widgets\n");
    write(dir, "assets/banner.txt", b"Acme Corp\n");
    write(dir, "debug.log", b"acme-widgets started\n");
    write(dir, ".git/HEAD", b"ref: refs/heads/main\n");
}

fn load_spec(dir: &Path) -> TemplateSpec {
    TemplateSpec::load(dir.join(".stencil.yml")).unwrap()
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_generate_template() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    create_project(src.path());

    let report = Generator::new(src.path(), out.path(), load_spec(src.path()))
        .run()
        .unwrap();

    assert_eq!(report.files_processed, 6);
    assert_eq!(report.files_transformed, 4);
    assert!(report.warnings.is_empty());

    let template = out.path().join("template");
    assert_eq!(
        read(template.join("setup.py.jinja")),
        "from setuptools import setup\n\nsetup(name=\"{{ project_slug }}\")\n"
    );
    assert_eq!(
        read(template.join("src/Program.cs.jinja")),
        "// Copyright {{ company }}\nnamespace {{ namespace }}\n{\n    class Program { }\n}\n"
    );
    assert_eq!(
        read(template.join("LICENSE.jinja")),
        "Copyright (c) {{ company }}\n"
    );
    assert_eq!(read(template.join("docs/index.md.jinja")), "# {{ project_slug }}\n");

    // Originals are not kept next to their templated form.
    assert!(!template.join("setup.py").exists());
    assert!(!template.join("LICENSE").exists());
}

#[test]
fn test_unrecognized_and_no_transform_files_copied_verbatim() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    create_project(src.path());

    Generator::new(src.path(), out.path(), load_spec(src.path()))
        .run()
        .unwrap();

    let template = out.path().join("template");
    assert_eq!(read(template.join("Makefile")), "build:\n\techo acme-widgets\n");
    assert_eq!(read(template.join("assets/banner.txt")), "Acme Corp\n");
    assert!(!template.join("assets/banner.txt.jinja").exists());
}

#[test]
fn test_excluded_paths_are_skipped() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    create_project(src.path());

    Generator::new(src.path(), out.path(), load_spec(src.path()))
        .run()
        .unwrap();

    let template = out.path().join("template");
    assert!(!template.join("debug.log").exists());
    assert!(!template.join(".git").exists());
    assert!(!template.join(".stencil.yml").exists());
}

#[test]
fn test_copier_config_written() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    create_project(src.path());

    let report = Generator::new(src.path(), out.path(), load_spec(src.path()))
        .run()
        .unwrap();

    let copier_file = report.copier_file.unwrap();
    assert_eq!(copier_file, out.path().join("copier.yaml"));

    let config: serde_yaml::Value = serde_yaml::from_str(&read(&copier_file)).unwrap();
    assert_eq!(config["_subdirectory"], serde_yaml::Value::from("template"));
    assert_eq!(
        config["project_slug"]["default"],
        serde_yaml::Value::from("acme-widgets")
    );
    assert_eq!(config["include_docs"]["type"], serde_yaml::Value::from("bool"));
    assert_eq!(
        config["_exclude"][0],
        serde_yaml::Value::from("{% if not include_docs %}docs/{% endif %}")
    );
}

#[test]
fn test_output_is_replaced_between_runs() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    create_project(src.path());
    write(out.path(), "template/stale.txt", b"old");

    Generator::new(src.path(), out.path(), load_spec(src.path()))
        .run()
        .unwrap();

    assert!(!out.path().join("template/stale.txt").exists());
}

#[test]
fn test_output_inside_source_is_not_walked() {
    let src = TempDir::new().unwrap();
    create_project(src.path());
    let out = src.path().join("template-output");

    let first = Generator::new(src.path(), &out, load_spec(src.path()))
        .run()
        .unwrap();
    let second = Generator::new(src.path(), &out, load_spec(src.path()))
        .run()
        .unwrap();

    assert_eq!(first.files_processed, 6);
    assert_eq!(second.files_processed, 6);
    assert!(!out.join("template/template-output").exists());
}

#[test]
fn test_source_inside_output_is_rejected() {
    let out = TempDir::new().unwrap();
    let src = out.path().join("project");
    create_project(&src);

    let result = Generator::new(&src, out.path(), load_spec(&src)).run();

    assert!(matches!(result, Err(StencilError::InvalidConfig(_))));
    assert!(src.join("setup.py").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    create_project(src.path());
    let output = out.path().join("generated");

    let report = Generator::new(src.path(), &output, load_spec(src.path()))
        .dry_run()
        .run()
        .unwrap();

    assert!(!output.exists());
    assert!(report.copier_file.is_none());
    assert_eq!(report.files_transformed, 4);
    assert_eq!(report.changes.len(), 4);
    assert_eq!(report.summary.files_changed, 4);

    let diff = report.diff(false);
    assert!(diff.contains("+++ b/setup.py.jinja"));
    assert!(diff.contains("-setup(name=\"acme-widgets\")"));
    assert!(diff.contains("+setup(name=\"{{ project_slug }}\")"));
}

#[test]
fn test_github_output() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    create_project(src.path());
    let output_file = out.path().join("github_output");
    fs::write(&output_file, "existing=1\n").unwrap();
    let template_out = out.path().join("generated");

    let report = Generator::new(src.path(), &template_out, load_spec(src.path()))
        .run()
        .unwrap();
    report.write_github_output(&output_file).unwrap();

    let content = read(&output_file);
    assert!(content.starts_with("existing=1\n"));
    assert!(content.contains("files-processed=6\n"));
    assert!(content.contains("files-transformed=4\n"));
    assert!(content.contains(&format!("template-path={}\n", template_out.display())));
}

#[test]
fn test_stray_non_utf8_bytes_do_not_block_templating() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    create_project(src.path());
    write(src.path(), "legacy.py", b"# caf\xe9\nNAME = \"acme-widgets\"\n");

    let report = Generator::new(src.path(), out.path(), load_spec(src.path()))
        .run()
        .unwrap();

    assert_eq!(report.files_transformed, 5);
    let templated = fs::read(out.path().join("template/legacy.py.jinja")).unwrap();
    assert_eq!(templated, b"# caf\xe9\nNAME = \"{{ project_slug }}\"\n");
}

#[test]
fn test_missing_spec() {
    let dir = TempDir::new().unwrap();
    let result = TemplateSpec::load(dir.path().join(".stencil.yml"));
    assert!(matches!(result, Err(StencilError::SpecNotFound(_))));
}

#[test]
fn test_unknown_node_type_fails_validation() {
    let spec = TemplateSpec::from_yaml_str(
        r#"
variables:
  name:
    transforms:
      - match: acme
        node_types: [strings]
"#,
    )
    .unwrap();

    assert!(matches!(spec.validate(), Err(StencilError::InvalidConfig(_))));
}

#[test]
fn test_rules_follow_declaration_order() {
    let spec = TemplateSpec::from_yaml_str(SPEC).unwrap();
    let rules = spec.compile_rules().unwrap();

    let patterns: Vec<&str> = rules.iter().map(|r| r.pattern()).collect();
    assert_eq!(patterns, vec!["acme-widgets", "Acme Corp", "AcmeWidgets"]);
    assert_eq!(rules[2].replacement(), "{{ namespace }}");
    assert_eq!(rules[2].node_categories(), &[NodeCategory::Namespace]);
}
