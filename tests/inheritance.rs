// Access-bounded traversal across reflected base chains.

pub mod common;

use typelens::prelude::*;

fn method_names(registry: &Registry, qualified: &str, min: AccessLevel) -> Vec<String> {
    let mut names = Vec::new();
    registry.for_each_method_inherited(qualified, min, |m| names.push(m.name.clone()));
    names
}

fn field_names(registry: &Registry, qualified: &str, min: AccessLevel) -> Vec<String> {
    let mut names = Vec::new();
    registry.for_each_field_inherited(qualified, min, |f| names.push(f.name.clone()));
    names
}

#[test]
fn public_bound_visits_public_bases_only() {
    let registry = common::fixture_registry();
    let names = method_names(&registry, "tel::Station", AccessLevel::Public);
    assert_eq!(
        names,
        vec!["send", "report", "reset", "send", "recv", "flush"],
        "own methods first, then the Public base's"
    );
    assert_eq!(names.len(), 6);
}

#[test]
fn private_bound_visits_every_base() {
    let registry = common::fixture_registry();
    let names = method_names(&registry, "tel::Station", AccessLevel::Private);
    assert_eq!(names.len(), 7, "three own, one Private-base, three Public-base");
    assert!(names.contains(&"calibrate".to_string()));
}

#[test]
fn protected_bound_excludes_private_relations() {
    let registry = common::fixture_registry();
    let names = method_names(&registry, "tel::Station", AccessLevel::Protected);
    assert_eq!(names.len(), 6);
    assert!(!names.contains(&"calibrate".to_string()));
    assert!(names.contains(&"flush".to_string()));
}

#[test]
fn overriding_methods_appear_once_per_declaring_type() {
    let registry = common::fixture_registry();
    let names = method_names(&registry, "tel::Station", AccessLevel::Public);
    let sends = names.iter().filter(|n| n.as_str() == "send").count();
    let reports = names.iter().filter(|n| n.as_str() == "report").count();
    assert_eq!(sends, 2, "override and base declaration both visited");
    assert_eq!(reports, 1);
}

#[test]
fn virtual_flags_survive_into_descriptors() {
    let registry = common::fixture_registry();
    let mut virtuals = Vec::new();
    registry.for_each_method_inherited("tel::Station", AccessLevel::Private, |m| {
        if m.is_virtual {
            virtuals.push(m.qualified_name.clone());
        }
    });
    assert_eq!(
        virtuals,
        vec!["tel::Station::send", "tel::WireBase::send"],
        "both declarations of the override pair, nothing else"
    );

    let station = registry.descriptor("tel::Station").unwrap();
    assert!(!station.method("report()").unwrap().is_virtual);
}

#[test]
fn unreflected_bases_contribute_nothing_but_keep_their_edge() {
    let registry = common::fixture_registry();
    let station = registry.descriptor("tel::Station").unwrap();
    let edges: Vec<_> = station.bases().iter().map(|b| b.base.as_str()).collect();
    assert!(edges.contains(&"tel::GhostBase"), "relation survives extraction");
    assert!(!registry.is_reflected("tel::GhostBase"));

    let fields = field_names(&registry, "tel::Station", AccessLevel::Private);
    assert!(
        !fields.contains(&"ghostly".to_string()),
        "nothing from the unreflected base"
    );
}

#[test]
fn inherited_field_walk_respects_the_same_bound() {
    let registry = common::fixture_registry();
    let public = field_names(&registry, "tel::Station", AccessLevel::Public);
    assert_eq!(public, vec!["site", "port"]);
    let private = field_names(&registry, "tel::Station", AccessLevel::Private);
    assert_eq!(private, vec!["site", "base_id", "link", "port"]);
}

#[test]
fn the_bound_is_kept_through_deeper_levels() {
    let registry = common::fixture_registry();

    // Public bound stops at the Private relation below Mid.
    let public = method_names(&registry, "tel::Top", AccessLevel::Public);
    assert_eq!(public, vec!["top_op", "mid_op"]);

    // The loosest bound reaches the bottom of the chain.
    let private = method_names(&registry, "tel::Top", AccessLevel::Private);
    assert_eq!(private, vec!["top_op", "mid_op", "deep_op"]);
}

#[test]
fn base_relations_carry_their_declared_access() {
    let registry = common::fixture_registry();
    let mut relations = Vec::new();
    registry.for_each_base("tel::Station", |b| {
        relations.push((b.base.clone(), b.access));
    });
    assert_eq!(
        relations,
        vec![
            ("tel::ProbeBase".to_string(), AccessLevel::Private),
            ("tel::LinkBase".to_string(), AccessLevel::Protected),
            ("tel::WireBase".to_string(), AccessLevel::Public),
            ("tel::GhostBase".to_string(), AccessLevel::Public),
        ]
    );
}

#[test]
fn traversal_over_an_unknown_type_visits_nothing() {
    let registry = common::fixture_registry();
    let names = method_names(&registry, "tel::Nowhere", AccessLevel::Private);
    assert!(names.is_empty());
}

#[test]
fn constructors_never_traverse_into_bases() {
    let registry = common::fixture_registry();
    let mut count = 0;
    registry.for_each_constructor("tel::Station", |_| count += 1);
    assert_eq!(count, 1, "only Station's own constructor");
}
