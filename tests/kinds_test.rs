use proforma::kinds::dockerfile::DockerfileValues;
use proforma::kinds::readme::ReadmeValues;
use proforma::kinds::sonar::SonarValues;
use proforma::kinds::travis::TravisValues;
use proforma::kinds::{doc, FileKind, Registry, ValueProvider};
use proforma::profile::Profile;
use proforma::project::Project;
use proforma::renderer::MiniJinjaRenderer;

fn full_profile() -> Profile {
    Profile::parse(
        "full",
        r#"
title: full
author:
  name: Jane Doe
  contact: jane@example.com
git:
  url: github.com/jane
ci:
  url: https://ci.example.com/jane/demo
sonar:
  org: jane-org
readme:
  badges:
    - "![build](https://ci.example.com/badge.svg)"
    - "![cover](https://cover.example.com/badge.svg)"
"#,
    )
    .unwrap()
}

fn render(kind: FileKind, profile: &Profile) -> String {
    let project = Project::new(profile, "demo", "/tmp/demo");
    let mut descriptor = kind.constructor()(&project).unwrap();
    descriptor.render(&MiniJinjaRenderer::new()).unwrap().to_string()
}

#[test]
fn test_every_kind_renders_with_an_empty_profile() {
    let profile = Profile::default();
    let renderer = MiniJinjaRenderer::new();
    let project = Project::new(&profile, "demo", "/tmp/demo");

    for kind in Registry::builtin().kinds() {
        let mut descriptor = kind.constructor()(&project).unwrap();
        let result = descriptor.render(&renderer);
        assert!(result.is_ok(), "{} failed: {:?}", kind.identifier(), result.err());
    }
}

#[test]
fn test_every_kind_renders_with_a_full_profile() {
    let profile = full_profile();
    for kind in FileKind::ALL {
        assert!(!render(kind, &profile).is_empty(), "{} rendered nothing", kind.identifier());
    }
}

#[test]
fn test_fixed_kinds_render_verbatim() {
    let profile = full_profile();
    for kind in [FileKind::GitIgnore, FileKind::GolangCi, FileKind::Makefile, FileKind::PreCommit] {
        assert_eq!(render(kind, &profile), kind.spec().template);
    }
}

#[test]
fn test_dockerfile_maintainer() {
    let profile = full_profile();
    let values = DockerfileValues::provide(&profile, "demo");
    assert_eq!(values.maintainer, "Jane Doe <jane@example.com>");
    assert_eq!(values.binary_name, "demo");

    let content = "author:\n  name: Jane\ndocker:\n  maintainer: ops team\n";
    let profile = Profile::parse("p", content).unwrap();
    assert_eq!(DockerfileValues::provide(&profile, "demo").maintainer, "ops team");

    let profile = Profile::parse("p", "author:\n  name: Jane\n").unwrap();
    assert_eq!(DockerfileValues::provide(&profile, "demo").maintainer, "Jane");

    let values = DockerfileValues::provide(&Profile::default(), "demo");
    assert_eq!(values.maintainer, "");

    let content = render(FileKind::Dockerfile, &full_profile());
    assert!(content.contains("LABEL maintainer=\"Jane Doe <jane@example.com>\""));
    assert!(content.contains("ENTRYPOINT [\"/demo\"]"));
}

#[test]
fn test_sonar_values() {
    let values = SonarValues::provide(&full_profile(), "demo");
    assert_eq!(values.organization_id, "jane-org");
    assert_eq!(values.project_id, "demo");
    assert_eq!(values.ci_link, "https://ci.example.com/jane/demo");
    assert_eq!(values.repo_link, "github.com/jane");

    let values = SonarValues::provide(&Profile::default(), "demo");
    assert_eq!(values.organization_id, "");
    assert_eq!(values.ci_link, "");
}

#[test]
fn test_travis_sonar_section_is_conditional() {
    let values = TravisValues::provide(&full_profile(), "demo");
    assert_eq!(values.sonar_org, "jane-org");

    let with_org = render(FileKind::Travis, &full_profile());
    assert!(with_org.contains("organization: \"jane-org\""));
    assert!(with_org.contains("sonar-scanner"));

    let without_org = render(FileKind::Travis, &Profile::default());
    assert!(!without_org.contains("sonarcloud"));
    assert!(!without_org.contains("sonar-scanner"));
    assert!(without_org.contains("make cover"));
}

#[test]
fn test_readme_values_and_badges() {
    let values = ReadmeValues::provide(&full_profile(), "demo");
    assert_eq!(values.project_name, "demo");
    assert_eq!(values.contact, "jane@example.com");
    assert_eq!(values.repo_url, "github.com/jane");
    assert_eq!(values.badges.len(), 2);

    let content = render(FileKind::Readme, &full_profile());
    assert!(content.starts_with("# demo\n"));
    assert!(content.contains("![build](https://ci.example.com/badge.svg)\n"));
    assert!(content.contains("go install github.com/jane/demo@latest"));
    assert!(content.contains("jane@example.com"));

    let content = render(FileKind::Readme, &Profile::default());
    assert!(content.contains("go install demo@latest"));
    assert!(!content.contains("security issues"));
}

#[test]
fn test_doc_package_name() {
    assert_eq!(doc::package_name("my-app"), "my_app");
    assert_eq!(doc::package_name("demo"), "demo");

    let profile = Profile::default();
    let project = Project::new(&profile, "my-app", "/tmp/my-app");
    let descriptor = FileKind::Doc.constructor()(&project).unwrap();
    assert_eq!(descriptor.context()["package_name"], "my_app");
}
