use kinship_core::{
    build_builtin_catalog, builtin_fast_paths, clean, get_relationship, normalize, resolve,
    ChainEvaluator, FastPathTable, Resolution, ResolveError, UNKNOWN_RELATION,
};

fn resolved(id: &str) -> Resolution {
    Resolution::Resolved(id.to_string())
}

#[test]
fn empty_chain_is_self() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(get_relationship(&empty), "自己");
    assert_eq!(resolve(&empty), Ok(resolved("自己")));
}

#[test]
fn parents_of_parents_resolve_to_grandparents() {
    assert_eq!(get_relationship(&["爸爸", "爸爸"]), "爷爷");
    assert_eq!(get_relationship(&["爸爸", "妈妈"]), "奶奶");
    assert_eq!(get_relationship(&["妈妈", "爸爸"]), "外公");
    assert_eq!(get_relationship(&["妈妈", "妈妈"]), "外婆");
    assert_eq!(get_relationship(&["妈", "的", "妈"]), "外婆");
}

#[test]
fn paternal_aunts_son_is_deterministic() {
    let first = get_relationship(&["爸爸", "姐姐", "儿子"]);
    assert_eq!(first, "表哥");
    for _ in 0..10 {
        assert_eq!(get_relationship(&["爸爸", "姐姐", "儿子"]), first);
    }
    let resolution = resolve(&["爸爸", "姐姐", "儿子"]).expect("cousin chain resolves");
    assert!(resolution.is_ambiguous());
    assert_eq!(resolution.candidates(), ["表哥", "表弟"]);
}

#[test]
fn unknown_word_yields_unknown_relation() {
    assert_eq!(get_relationship(&["不存在的词"]), UNKNOWN_RELATION);
    assert_eq!(
        resolve(&["爸爸", "不存在的词"]),
        Err(ResolveError::UnknownToken("不存在的词".to_string()))
    );
}

#[test]
fn chains_without_rules_yield_unknown_relation() {
    assert_eq!(get_relationship(&["堂哥", "妻子"]), UNKNOWN_RELATION);
    assert_eq!(get_relationship(&["岳父", "哥哥"]), UNKNOWN_RELATION);
}

#[test]
fn connectors_never_change_the_result() {
    assert_eq!(
        get_relationship(&["爸爸", "的", "姐姐", "的", "儿子"]),
        get_relationship(&["爸爸", "姐姐", "儿子"])
    );
    assert_eq!(get_relationship(&["的", "与", "和"]), "自己");
}

#[test]
fn clean_drops_only_connectors_in_order() {
    assert_eq!(
        clean(&["爸爸", "的", "妈妈", "或", "舅舅"]),
        vec!["爸爸", "妈妈", "舅舅"]
    );
    let cleaned = clean(&["爸爸", "的", "妈妈"]);
    assert_eq!(clean(&cleaned), cleaned);
}

#[test]
fn normalize_is_identity_on_ids_and_maps_synonyms() {
    let catalog = build_builtin_catalog().expect("builtin catalog builds");
    for atom in catalog.atoms() {
        assert_eq!(normalize(&catalog, atom.id.as_str()), atom.id);
        for synonym in &atom.synonyms {
            assert_eq!(normalize(&catalog, synonym.as_str()), atom.id);
        }
    }
}

#[test]
fn synonym_chains_match_canonical_chains() {
    assert_eq!(
        get_relationship(&["父亲", "姊", "儿子"]),
        get_relationship(&["爸爸", "姐姐", "儿子"])
    );
    assert_eq!(get_relationship(&["老婆", "爸"]), "岳父");
    assert_eq!(get_relationship(&["老公", "妈妈"]), "婆婆");
}

#[test]
fn single_known_title_resolves_to_itself() {
    let catalog = build_builtin_catalog().expect("builtin catalog builds");
    let evaluator = ChainEvaluator::new(&catalog, builtin_fast_paths());
    for atom in catalog.atoms() {
        assert_eq!(
            evaluator.evaluate(&[atom.id.as_str()]),
            Ok(resolved(atom.id.as_str())),
            "single-token chain {}",
            atom.id
        );
    }
}

#[test]
fn extended_rules_cover_descendants_and_in_laws() {
    assert_eq!(get_relationship(&["儿子", "儿子"]), "孙子");
    assert_eq!(get_relationship(&["儿子", "儿子", "女儿"]), "曾孙女");
    assert_eq!(get_relationship(&["女儿", "女儿", "儿子"]), "曾外孙");
    assert_eq!(get_relationship(&["儿子", "女儿", "女儿"]), "曾外孙女");
    assert_eq!(get_relationship(&["女儿", "丈夫"]), "女婿");
    assert_eq!(get_relationship(&["丈夫", "弟弟"]), "小叔子");
    assert_eq!(get_relationship(&["爸爸", "爸爸", "爸爸"]), "曾祖父");
    assert_eq!(get_relationship(&["妈妈", "哥哥", "妻子"]), "舅妈");
    assert_eq!(get_relationship(&["妻子", "姐姐", "丈夫"]), "连襟");
}

#[test]
fn collective_sibling_tokens_only_match_fast_paths() {
    let both = resolve(&["爸爸", "兄弟"]).expect("fast path");
    assert_eq!(both.candidates(), ["伯伯", "叔叔"]);
    assert_eq!(get_relationship(&["妈妈", "姐妹"]), "姨妈");
    assert_eq!(get_relationship(&["兄弟"]), UNKNOWN_RELATION);
}

#[test]
fn fast_path_results_agree_with_step_rules() {
    let catalog = build_builtin_catalog().expect("builtin catalog builds");
    let with_fast = ChainEvaluator::new(&catalog, builtin_fast_paths());
    let empty = FastPathTable::new();
    let fold_only = ChainEvaluator::new(&catalog, &empty);

    for chain in [
        ["爸爸", "哥哥"],
        ["爸爸", "弟弟"],
        ["伯伯", "儿子"],
        ["姑姑", "女儿"],
        ["舅舅", "儿子"],
        ["哥哥", "女儿"],
        ["妹妹", "儿子"],
    ] {
        assert_eq!(
            with_fast.evaluate(&chain),
            fold_only.evaluate(&chain),
            "chain {chain:?}"
        );
    }
}
