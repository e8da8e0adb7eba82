use proforma::error::Error;
use proforma::kinds::{FileKind, Registry};
use proforma::profile::Profile;
use proforma::project::Project;
use std::collections::HashSet;

#[test]
fn test_builtin_registry_holds_every_kind() {
    let registry = Registry::builtin();
    let identifiers = registry.identifiers();

    assert_eq!(
        identifiers,
        vec![
            "doc",
            "readme",
            "dockerfile",
            "gitignore",
            "golangci",
            "makefile",
            "pre-commit",
            "sonar",
            "travis",
            "version"
        ]
    );
    let unique: HashSet<_> = identifiers.iter().collect();
    assert_eq!(unique.len(), FileKind::ALL.len());
}

#[test]
fn test_every_identifier_resolves() {
    let registry = Registry::builtin();
    let profile = Profile::default();
    let project = Project::new(&profile, "demo", "/tmp/demo");

    for identifier in registry.identifiers() {
        let constructor = registry.resolve(identifier).unwrap();
        let descriptor = constructor(&project).unwrap();
        assert_eq!(descriptor.identifier(), identifier);
        assert_eq!(registry.kind(identifier).unwrap().identifier(), identifier);
    }
}

#[test]
fn test_unknown_identifier() {
    let registry = Registry::builtin();

    match registry.resolve("cargo") {
        Err(Error::NotRegisteredError { identifier }) => assert_eq!(identifier, "cargo"),
        Err(e) => panic!("Expected NotRegisteredError, got {e:?}"),
        Ok(_) => panic!("Expected NotRegisteredError, got a constructor"),
    }
    // Identifiers are matched exactly.
    assert!(registry.kind("README").is_err());
}

#[test]
fn test_registry_with_selected_kinds() {
    let registry = Registry::with_kinds(&[FileKind::GitIgnore, FileKind::Readme]);

    assert_eq!(registry.identifiers(), vec!["gitignore", "readme"]);
    assert!(registry.resolve("doc").is_err());
}

#[test]
fn test_kind_targets() {
    assert_eq!(FileKind::GitIgnore.spec().target(), ".gitignore");
    assert_eq!(FileKind::Version.spec().target(), "internal/version/version.go");
    assert_eq!(FileKind::Sonar.spec().target(), "sonar-project.properties");
}
