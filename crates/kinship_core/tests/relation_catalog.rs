use kinship_core::{
    build_builtin_catalog, get_all_relations, get_relation_info, get_relations_by_generation,
    get_relations_by_type, simplify_chain, AtomValidationError, CatalogError, LineageBranch,
    RelationAtom, RelationCatalog, RelationCategory, RelationKind, SELF_ATOM_ID,
};
use std::collections::BTreeSet;

#[test]
fn every_builtin_atom_is_consistent_with_its_kind() {
    let catalog = build_builtin_catalog().expect("builtin catalog builds");
    for atom in catalog.atoms() {
        assert_eq!(atom.generation, atom.kind.generation(), "{}", atom.id);
        assert_eq!(atom.gender, atom.kind.gender(), "{}", atom.id);
        for target in atom.reverse_atoms.iter().chain(atom.spouse_atom.iter()) {
            assert!(catalog.get_atom(target).is_some(), "{} -> {target}", atom.id);
        }
    }
}

#[test]
fn aliases_map_to_exactly_one_atom() {
    let catalog = build_builtin_catalog().expect("builtin catalog builds");
    let mut seen = BTreeSet::new();
    for atom in catalog.atoms() {
        assert!(seen.insert(atom.id.clone()), "duplicate id {}", atom.id);
        for synonym in &atom.synonyms {
            assert!(seen.insert(synonym.clone()), "shared alias {synonym}");
        }
    }
}

#[test]
fn exactly_one_self_atom_exists() {
    let catalog = build_builtin_catalog().expect("builtin catalog builds");
    let anchors: Vec<_> = catalog
        .atoms()
        .filter(|atom| atom.kind == RelationKind::Myself)
        .collect();
    assert_eq!(anchors.len(), 1);
    assert_eq!(anchors[0].id, SELF_ATOM_ID);
    assert_eq!(anchors[0].generation, 0);
}

#[test]
fn spouse_links_are_symmetric_where_both_sides_record_them() {
    let catalog = build_builtin_catalog().expect("builtin catalog builds");
    for atom in catalog.atoms() {
        let Some(spouse_id) = atom.spouse_atom.as_deref() else {
            continue;
        };
        let spouse = catalog.get_atom(spouse_id).expect("spouse is registered");
        if let Some(back) = spouse.spouse_atom.as_deref() {
            assert_eq!(back, atom.id, "{} <-> {}", atom.id, spouse.id);
        }
        assert_ne!(atom.gender, spouse.gender, "{} <-> {}", atom.id, spouse.id);
    }
}

#[test]
fn relation_info_serializes_with_ui_field_names() {
    let atom = get_relation_info("姥爷").expect("maternal grandfather");
    let json = serde_json::to_value(atom).expect("atom serializes");

    assert_eq!(json["id"], "外公");
    assert_eq!(json["gender"], "male");
    assert_eq!(json["relation"], "grandfather");
    assert_eq!(json["generation"], 2);
    assert_eq!(json["branch"], "maternal");
    assert_eq!(json["type"], "direct");
    assert_eq!(json["reverse"], serde_json::json!(["外孙", "外孙女"]));
    assert_eq!(json["spouse"], "外婆");

    let decoded: RelationAtom = serde_json::from_value(json).expect("atom deserializes");
    assert_eq!(&decoded, atom);
}

#[test]
fn self_atom_serializes_self_markers() {
    let atom = get_relation_info("我").expect("self atom");
    let json = serde_json::to_value(atom).expect("atom serializes");
    assert_eq!(json["relation"], "self");
    assert_eq!(json["branch"], "self");
    assert_eq!(json["gender"], "unknown");
    assert!(json["spouse"].is_null());
}

#[test]
fn listing_apis_use_canonical_ids() {
    let all = get_all_relations();
    let kinds: BTreeSet<_> = all
        .iter()
        .filter_map(|id| get_relation_info(id))
        .map(|atom| atom.kind)
        .collect();
    assert_eq!(kinds.len(), all.len());

    let children = get_relations_by_generation(-1);
    assert!(children.iter().any(|id| id == "儿子"));
    assert!(children.iter().all(|id| get_relation_info(id).is_some()));

    let collateral = get_relations_by_type("collateral");
    assert!(collateral.iter().any(|id| id == "舅舅"));
    assert!(!collateral.iter().any(|id| id == "爸爸"));
    assert!(get_relations_by_type("unknown").is_empty());
}

#[test]
fn simplify_collapses_trailing_compounds() {
    assert_eq!(simplify_chain(&["爸爸", "妈妈"]), vec!["奶奶"]);
    assert_eq!(simplify_chain(&["妈", "妈", "爸", "爸"]), vec!["外公"]);
    assert_eq!(
        simplify_chain(&["姐姐", "的", "妈妈", "妈妈"]),
        vec!["姐姐", "外婆"]
    );
    assert_eq!(
        simplify_chain(&["舅父", "儿子"]),
        vec!["舅舅", "儿子"]
    );
}

#[test]
fn custom_catalog_rejects_inconsistent_atoms() {
    let mut catalog = RelationCatalog::new();
    let mut atom = RelationAtom::new(
        "爸爸",
        RelationKind::Father,
        LineageBranch::Paternal,
        RelationCategory::Direct,
    );
    atom.generation = 2;
    let err = catalog.register_atom(atom).expect_err("generation mismatch");
    assert!(matches!(
        err,
        CatalogError::InvalidAtom(AtomValidationError::GenerationMismatch { .. })
    ));
    assert!(catalog.is_empty());
}
