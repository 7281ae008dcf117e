//! Integration tests for tree assembly and presentation enrichment.

use std::collections::HashSet;

use orgtree::parse;
use orgtree::resolve;
use orgtree::tree::{self, TreeNode};

fn forest_for(yaml: &str) -> (parse::OrgFile, Vec<TreeNode>) {
    let file = parse::parse(yaml).expect("fixture should parse");
    let resolved = resolve::resolve(&file.org).expect("fixture should resolve");
    let forest = tree::build_forest(&file.org, &resolved).expect("fixture should build");
    (file, forest)
}

fn collect_ids(node: &TreeNode, ids: &mut Vec<String>) {
    ids.push(node.id.clone());
    for child in &node.children {
        collect_ids(child, ids);
    }
}

#[test]
fn every_role_appears_exactly_once() {
    let (file, forest) = forest_for(include_str!("fixtures/example_org.yaml"));
    let mut ids = Vec::new();
    for root in &forest {
        collect_ids(root, &mut ids);
    }

    let expected: usize = file.org.groups.iter().map(|g| g.roles.len()).sum();
    assert_eq!(ids.len(), expected);
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), expected);
}

#[test]
fn tree_shape_follows_reporting_chain() {
    let (_, forest) = forest_for(include_str!("fixtures/example_org.yaml"));
    assert_eq!(forest.len(), 1);

    let ceo = &forest[0];
    assert_eq!(ceo.id, "ceo");
    assert_eq!(ceo.children.len(), 1);

    let coo = &ceo.children[0];
    assert_eq!(coo.id, "coo");
    assert_eq!(coo.children[0].id, "vp-eng");
    let leads: Vec<&str> = coo.children[0]
        .children
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(leads, vec!["backend-lead", "frontend-lead"]);
}

#[test]
fn title_is_trimmed_and_defaults_to_id() {
    let (_, forest) = forest_for(include_str!("fixtures/example_org.yaml"));
    let vp = &forest[0].children[0].children[0];
    assert_eq!(vp.children[0].name, "Backend Lead");
    // frontend-lead has no title at all.
    assert_eq!(vp.children[1].name, "frontend-lead");
}

#[test]
fn group_metadata_is_attached_to_nodes() {
    let (_, forest) = forest_for(include_str!("fixtures/example_org.yaml"));
    let ceo = &forest[0];
    assert_eq!(ceo.group_name, "Executive");
    assert_eq!(ceo.color, "#4f7fd9");
    assert_eq!(ceo.children[0].children[0].group_name, "Engineering");
    assert_eq!(ceo.children[0].children[0].color, "#3aa675");
}

#[test]
fn leaves_serialize_without_children_key() {
    let (_, forest) = forest_for(include_str!("fixtures/example_org.yaml"));
    let leaf = &forest[0].children[0].children[0].children[0];
    assert!(leaf.children.is_empty());

    let json = serde_json::to_string(leaf).unwrap();
    assert!(!json.contains("\"children\""));
    assert!(json.contains("\"groupName\":\"Engineering\""));
}

#[test]
fn colorless_group_inherits_nearest_styled_ancestor() {
    let yaml = "org:
  name: A
  groups:
    - id: exec
      name: Executive
      color: \"#4f7fd9\"
      roles:
        - id: ceo
    - id: interns
      name: \"\"
      default_reports_to: ceo
      roles:
        - id: intern
";
    let (_, mut forest) = forest_for(yaml);
    tree::enrich(&mut forest);

    let intern = &forest[0].children[0];
    assert_eq!(intern.group_name, "Executive");
    assert_eq!(intern.color, "#4f7fd9");
}

#[test]
fn fully_unstyled_org_gets_neutral_default_color() {
    let yaml = "org:
  name: A
  groups:
    - id: g
      name: \"\"
      roles:
        - id: solo
";
    let (_, mut forest) = forest_for(yaml);
    tree::enrich(&mut forest);
    assert_eq!(forest[0].color, tree::DEFAULT_COLOR);
}
