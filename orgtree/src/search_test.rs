use super::*;
use crate::node::EmployeeNode;
use crate::tree::OrgTree;

fn person(id: &str, name: &str, title: &str) -> EmployeeNode {
    EmployeeNode { title: title.into(), ..EmployeeNode::new(id, name) }
}

fn staff() -> Vec<FlatEmployee> {
    let engineers: Vec<EmployeeNode> =
        (1..=12).map(|n| person(&format!("eng{n}"), &format!("Engineer {n}"), "Software Engineer")).collect();
    let root = person("ceo", "Rowan Hale", "Chief Executive").with_children(vec![
        person("cto", "Mina Okafor", "Chief Technology Officer").with_children(engineers),
        person("ops", "Lars Engel", "Operations Lead"),
    ]);
    OrgTree::new(root).unwrap().flatten()
}

fn ids(results: &[&FlatEmployee]) -> Vec<String> {
    results.iter().map(|e| e.id.clone()).collect()
}

// --- search ---

#[test]
fn short_queries_return_nothing() {
    let flat = staff();
    assert!(search(&flat, "").is_empty());
    assert!(search(&flat, "e").is_empty());
    assert!(!search(&flat, "en").is_empty());
}

#[test]
fn case_insensitive_on_name_and_title() {
    let flat = staff();
    assert_eq!(ids(&search(&flat, "ROWAN")), vec!["ceo"]);
    assert_eq!(ids(&search(&flat, "operations")), vec!["ops"]);
    assert_eq!(ids(&search(&flat, "cHiEf")), vec!["ceo", "cto"]);
}

#[test]
fn results_capped_in_tree_order() {
    let flat = staff();
    let found = search(&flat, "engineer");
    assert_eq!(found.len(), SEARCH_LIMIT);
    assert_eq!(found[0].id, "eng1");
    assert_eq!(found[9].id, "eng10");
}

#[test]
fn multibyte_queries_count_characters() {
    let flat = vec![FlatEmployee::from_node(&person("z", "Zoë Åberg", "Designer"), None)];
    assert!(search(&flat, "ë").is_empty());
    assert_eq!(ids(&search(&flat, "ÅB")), vec!["z"]);
}

// --- search_candidates ---

#[test]
fn candidates_start_at_one_character() {
    let flat = staff();
    assert!(search_candidates::<&str>(&flat, "", &[], false).is_empty());
    assert_eq!(search_candidates::<&str>(&flat, "r", &[], false).len(), CANDIDATE_LIMIT);
}

#[test]
fn candidates_skip_excluded_before_limiting() {
    let flat = staff();
    let excluded = ["eng1", "eng2"];
    let found = search_candidates(&flat, "engineer", &excluded, false);
    assert_eq!(found.len(), CANDIDATE_LIMIT);
    assert_eq!(found[0].id, "eng3");
}

#[test]
fn candidates_can_hide_the_root() {
    let flat = staff();
    assert_eq!(ids(&search_candidates::<String>(&flat, "chief", &[], false)), vec!["ceo", "cto"]);
    assert_eq!(ids(&search_candidates::<String>(&flat, "chief", &[], true)), vec!["cto"]);
}
