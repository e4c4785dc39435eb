mod common;

use common::seeded;
use std::str::FromStr;
use weapon_core::{Proficiency, WeaponCategory, WeaponFilter, WeaponGenerator, DEFAULT_LANGUAGE};

// clear; cargo fmt; cargo test -p weapon-core -- --nocapture

#[test]
fn test_load_bundled_tables() {
    let generator = WeaponGenerator::new();
    let data = generator.data();

    assert_eq!(data.weapons().unwrap().len(), 38, "應有 38 把基礎武器");

    let properties = data.properties().unwrap();
    assert_eq!(properties.len(), 11, "應有 11 個武器屬性");
    for id in ["ammunition", "finesse", "versatile"] {
        assert!(properties.contains_key(id), "屬性表應包含 {id}");
    }

    let damage_types = data.damage_types().unwrap();
    assert_eq!(damage_types.len(), 13, "應有 13 種傷害類型");
    for id in ["bludgeoning", "piercing", "slashing"] {
        assert!(damage_types.contains_key(id), "傷害類型表應包含 {id}");
    }
}

#[test]
fn test_repeated_access_returns_same_tables() {
    let generator = WeaponGenerator::new();
    let data = generator.data();

    let first = data.weapons().unwrap();
    let second = data.weapons().unwrap();
    assert_eq!(first, second);
    assert!(std::ptr::eq(first, second), "第二次存取不應重新載入");

    assert_eq!(
        data.damage_types().unwrap().len(),
        data.damage_types().unwrap().len()
    );
}

#[test]
fn test_generate_without_filter_returns_known_weapon() {
    let generator = WeaponGenerator::new();
    let mut rng = seeded(1);

    for _ in 0..20 {
        let weapon = generator
            .generate_with(&WeaponFilter::new(), DEFAULT_LANGUAGE, &mut rng)
            .unwrap();
        assert!(
            generator.data().weapons().unwrap().iter().any(|w| w.id == weapon.id),
            "{} 應存在於武器表",
            weapon.id
        );
    }
}

#[test]
fn test_generate_by_category() {
    let generator = WeaponGenerator::new();
    let mut rng = seeded(2);

    for category in ["simple_melee", "martial_melee", "simple_ranged", "martial_ranged"] {
        let filter = WeaponFilter::from_args(Some(category), None, None);
        for _ in 0..10 {
            let weapon = generator.generate_with(&filter, "zh", &mut rng).unwrap();
            assert_eq!(weapon.category.to_string(), category);
        }
    }
}

#[test]
fn test_generate_by_proficiency() {
    let generator = WeaponGenerator::new();
    let mut rng = seeded(3);

    for _ in 0..20 {
        let weapon = generator
            .generate_with(
                &WeaponFilter::new().proficiency(Proficiency::Simple),
                "zh",
                &mut rng,
            )
            .unwrap();
        assert!(weapon.category.to_string().starts_with("simple_"));

        let weapon = generator
            .generate_with(
                &WeaponFilter::new().proficiency(Proficiency::Martial),
                "zh",
                &mut rng,
            )
            .unwrap();
        assert!(weapon.category.to_string().starts_with("martial_"));
    }
}

#[test]
fn test_generate_by_damage_type() {
    let generator = WeaponGenerator::new();
    let mut rng = seeded(4);

    for damage_type in ["bludgeoning", "piercing", "slashing"] {
        let filter = WeaponFilter::new().damage_type(damage_type);
        for _ in 0..10 {
            let weapon = generator.generate_with(&filter, "en", &mut rng).unwrap();
            assert_eq!(weapon.damage.damage_type, damage_type);
        }
    }
}

#[test]
fn test_combined_filters() {
    let generator = WeaponGenerator::new();
    let mut rng = seeded(5);
    let filter = WeaponFilter::new()
        .category(WeaponCategory::MartialMelee)
        .damage_type("piercing");

    for _ in 0..20 {
        let weapon = generator.generate_with(&filter, "zh", &mut rng).unwrap();
        assert_eq!(weapon.category, WeaponCategory::MartialMelee);
        assert_eq!(weapon.damage.damage_type, "piercing");
    }
}

#[test]
fn test_impossible_filters_are_no_match() {
    let generator = WeaponGenerator::new();

    let err = generator
        .generate(&WeaponFilter::new().damage_type("psychic"), "zh")
        .unwrap_err();
    assert!(err.is_no_match(), "不存在的傷害類型應回報 NoMatch：{err}");
    assert!(err.to_string().contains("damage_type=psychic"));

    let contradictory = WeaponFilter::new()
        .category(WeaponCategory::SimpleRanged)
        .proficiency(Proficiency::Martial);
    assert!(generator.generate(&contradictory, "zh").unwrap_err().is_no_match());

    let unknown_category = WeaponFilter::from_args(Some("exotic_melee"), None, None);
    assert!(generator.generate(&unknown_category, "zh").unwrap_err().is_no_match());
}

#[test]
fn test_unknown_proficiency_is_ignored() {
    let generator = WeaponGenerator::new();
    let filter = WeaponFilter::from_args(None, Some("exotic"), Some("slashing"));

    let weapon = generator.generate(&filter, "zh").unwrap();
    assert_eq!(weapon.damage.damage_type, "slashing");
}

#[test]
fn test_get_weapon_by_id() {
    let generator = WeaponGenerator::new();

    let longsword = generator.get_weapon_by_id("longsword", "zh").unwrap().unwrap();
    assert_eq!(longsword.id, "longsword");
    assert_eq!(longsword.damage.versatile.as_deref(), Some("1d10"));

    let shortbow = generator.get_weapon_by_id("shortbow", "zh").unwrap().unwrap();
    assert!(shortbow.range.is_some(), "短弓應有射程");

    let dagger = generator.get_weapon_by_id("dagger", "zh").unwrap().unwrap();
    assert!(dagger.thrown_range.is_some(), "匕首應有投擲射程");

    assert!(generator.get_weapon_by_id("nonexistent-id", "zh").unwrap().is_none());
}

#[test]
fn test_every_id_round_trips() {
    let generator = WeaponGenerator::new();

    for record in generator.data().weapons().unwrap() {
        let weapon = generator.get_weapon_by_id(&record.id, "en").unwrap().unwrap();
        assert_eq!(weapon.id, record.id);
    }
}

#[test]
fn test_localized_fields_match_source() {
    let generator = WeaponGenerator::new();
    let record = generator
        .data()
        .weapons()
        .unwrap()
        .iter()
        .find(|w| w.id == "rapier")
        .unwrap()
        .clone();

    for language in ["zh", "en"] {
        let weapon = generator.get_weapon_by_id("rapier", language).unwrap().unwrap();
        assert_eq!(Some(weapon.name.as_str()), record.name.get(language));
        assert_eq!(
            Some(weapon.description.as_str()),
            record.description.get(language)
        );
    }

    let zh = generator.get_weapon_by_id("rapier", "zh").unwrap().unwrap();
    let en = generator.get_weapon_by_id("rapier", "en").unwrap().unwrap();
    assert_eq!(zh.damage.type_name, "穿刺");
    assert_eq!(en.damage.type_name, "Piercing");
    assert_eq!(en.properties[0].name, "Finesse");
}

#[test]
fn test_property_count_matches_listing() {
    let generator = WeaponGenerator::new();
    let data = generator.data();
    let properties = data.properties().unwrap();

    for record in data.weapons().unwrap() {
        let weapon = generator.get_weapon_by_id(&record.id, "zh").unwrap().unwrap();
        assert!(weapon.properties.len() <= record.properties.len());
        if record.properties.iter().all(|id| properties.contains_key(id)) {
            assert_eq!(weapon.properties.len(), record.properties.len());
        }
        let ids: Vec<_> = weapon.properties.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, record.properties, "{} 的屬性順序應保持不變", record.id);
    }
}

#[test]
fn test_unsupported_language_is_error() {
    let generator = WeaponGenerator::new();
    let err = generator.get_weapon_by_id("club", "fr").unwrap_err();
    assert!(!err.is_no_match());
    assert!(err.to_string().contains("fr"));
}

#[test]
fn test_list_categories() {
    let generator = WeaponGenerator::new();
    let categories = generator.list_categories().unwrap();

    assert_eq!(
        categories,
        vec!["martial_melee", "martial_ranged", "simple_melee", "simple_ranged"]
    );
    for category in &categories {
        assert!(WeaponCategory::from_str(category).is_ok());
    }
}

#[test]
fn test_list_damage_types_only_lists_used_types() {
    let generator = WeaponGenerator::new();
    let damage_types = generator.list_damage_types().unwrap();

    assert_eq!(damage_types, vec!["bludgeoning", "piercing", "slashing"]);
}

#[test]
fn test_same_seed_same_weapon() {
    let generator = WeaponGenerator::new();
    let pick = |seed| {
        generator
            .generate_with(&WeaponFilter::new(), "zh", &mut seeded(seed))
            .unwrap()
            .id
    };
    assert_eq!(pick(99), pick(99));
}

#[test]
fn test_output_json_shape() {
    let generator = WeaponGenerator::new();

    let longsword = generator.get_weapon_by_id("longsword", "en").unwrap().unwrap();
    let json = serde_json::to_value(&longsword).unwrap();
    assert_eq!(json["id"], "longsword");
    assert_eq!(json["name"], "Longsword");
    assert_eq!(json["category"], "martial_melee");
    assert_eq!(json["damage"]["dice"], "1d8");
    assert_eq!(json["damage"]["type"], "slashing");
    assert_eq!(json["damage"]["type_name"], "Slashing");
    assert_eq!(json["damage"]["versatile"], "1d10");
    assert_eq!(json["cost"], "15 gp");
    assert_eq!(json["weight"], serde_json::json!(3));

    let dart = generator.get_weapon_by_id("dart", "en").unwrap().unwrap();
    let json = serde_json::to_value(&dart).unwrap();
    assert_eq!(json["weight"], serde_json::json!(0.25));
    assert!(json.get("range").is_none());
    assert!(json["properties"].is_array());

    let dagger = generator.get_weapon_by_id("dagger", "en").unwrap().unwrap();
    let json = serde_json::to_value(&dagger).unwrap();
    assert_eq!(json["thrown_range"]["normal"], 20);
    assert_eq!(json["thrown_range"]["long"], 60);
    assert!(json["damage"].get("versatile").is_none());
}

#[test]
fn test_bundled_data_fully_translated() {
    let generator = WeaponGenerator::new();
    for language in weapon_core::i18n::BUNDLED_LANGUAGES {
        for id in generator.list_legendary_ids().unwrap() {
            assert!(
                generator.get_legendary_by_id(&id, language).is_ok(),
                "{id} 缺少 {language}"
            );
        }
        for weapon in generator.data().weapons().unwrap() {
            let out = generator
                .get_weapon_by_id(&weapon.id, language)
                .unwrap()
                .unwrap();
            assert_ne!(
                out.damage.type_name, out.damage.damage_type,
                "{} 的傷害類型未翻譯",
                weapon.id
            );
        }
    }
}
