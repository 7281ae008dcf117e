//! Integration tests for the resolve phase: default filling, root buckets,
//! and structural validation.

use orgtree::error::OrgError;
use orgtree::parse;
use orgtree::resolve::{self, ReportsTo};

fn resolve_fixture(yaml: &str) -> Result<resolve::ResolvedOrg, OrgError> {
    let file = parse::parse(yaml).expect("fixture should parse");
    resolve::resolve(&file.org)
}

#[test]
fn example_org_resolves() {
    let resolved = resolve_fixture(include_str!("fixtures/example_org.yaml")).unwrap();
    assert_eq!(resolved.roles.len(), 5);
    assert_eq!(resolved.roots, vec!["ceo"]);
    assert_eq!(resolved.children["ceo"], vec!["coo"]);
    assert_eq!(resolved.children["vp-eng"], vec!["backend-lead", "frontend-lead"]);
}

#[test]
fn group_default_fills_missing_reports_to() {
    let resolved = resolve_fixture(include_str!("fixtures/example_org.yaml")).unwrap();
    // vp-eng has no explicit parent; the eng group default routes it to coo.
    assert_eq!(
        resolved.role("vp-eng").unwrap().reports_to,
        ReportsTo::Role("coo".into())
    );
}

#[test]
fn role_without_default_or_explicit_parent_is_root() {
    let resolved = resolve_fixture(
        "org:\n  name: A\n  groups:\n    - id: g\n      name: G\n      roles:\n        - id: solo\n",
    )
    .unwrap();
    assert_eq!(resolved.roots, vec!["solo"]);
    assert!(resolved.role("solo").unwrap().reports_to.is_root());
}

#[test]
fn root_buckets_concatenate_in_legacy_order() {
    let resolved = resolve_fixture(include_str!("fixtures/root_buckets.yaml")).unwrap();
    // Absent bucket first, then "", then the string "null" -- not input order.
    assert_eq!(
        resolved.roots,
        vec!["plain-root", "second-plain-root", "empty-root", "word-root"]
    );
}

#[test]
fn explicit_null_overrides_group_default() {
    let resolved = resolve_fixture(include_str!("fixtures/explicit_null.yaml")).unwrap();
    // Absent key takes the default; an explicit null stays a root.
    assert_eq!(
        resolved.role("assistant").unwrap().reports_to,
        ReportsTo::Role("ceo".into())
    );
    assert_eq!(resolved.role("floater").unwrap().reports_to, ReportsTo::Absent);
    assert_eq!(resolved.roots, vec!["ceo", "floater"]);
}

#[test]
fn duplicate_role_id_is_fatal() {
    let err = resolve_fixture(include_str!("fixtures/duplicate_role.yaml")).unwrap_err();
    match err {
        OrgError::DuplicateRoleId(id) => assert_eq!(id, "ceo"),
        other => panic!("expected DuplicateRoleId, got: {other:?}"),
    }
}

#[test]
fn dangling_parent_names_role_and_parent() {
    let err = resolve_fixture(include_str!("fixtures/dangling_parent.yaml")).unwrap_err();
    match err {
        OrgError::DanglingParent { role, parent } => {
            assert_eq!(role, "role_x");
            assert_eq!(parent, "ghost");
        }
        other => panic!("expected DanglingParent, got: {other:?}"),
    }
}

#[test]
fn reporting_cycle_is_detected() {
    let err = resolve_fixture(include_str!("fixtures/cycle.yaml")).unwrap_err();
    match err {
        OrgError::CyclicOrUnreachable(id) => assert_eq!(id, "alpha"),
        other => panic!("expected CyclicOrUnreachable, got: {other:?}"),
    }
}

#[test]
fn self_reporting_role_is_detected() {
    let err = resolve_fixture(
        "org:\n  name: A\n  groups:\n    - id: g\n      name: G\n      roles:\n        - id: boss\n        - id: ouroboros\n          reports_to: ouroboros\n",
    )
    .unwrap_err();
    assert!(
        matches!(err, OrgError::CyclicOrUnreachable(ref id) if id == "ouroboros"),
        "got: {err:?}"
    );
}
