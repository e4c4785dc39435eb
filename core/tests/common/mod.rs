//! 測試共用的資料與輔助函式

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use weapon_core::{MemorySource, WeaponGenerator};

pub const WEAPONS_YAML: &str = r#"
weapons:
  - id: club
    name: { zh: 木棒, en: Club }
    category: simple_melee
    damage: { dice: "1d4", type: bludgeoning }
    cost: 1 sp
    weight: 2
    properties: [light]
    description: { zh: 木棍。, en: A stick. }
  - id: rapier
    name: { zh: 刺剑, en: Rapier }
    category: martial_melee
    damage: { dice: "1d8", type: piercing }
    cost: 25 gp
    weight: 2
    properties: [finesse, serrated]
    description: { zh: 细剑。, en: A thin sword. }
  - id: thunder_maul
    name: { zh: 雷鸣锤, en: Thunder Maul }
    category: martial_melee
    damage: { dice: "2d6", type: sonic }
    cost: 40 gp
    weight: 10
    properties: []
    description: { zh: 轰鸣的巨锤。, en: A booming maul. }
"#;

pub const PROPERTIES_YAML: &str = r#"
properties:
  light:
    name: { zh: 轻型, en: Light }
    description: { zh: 轻便。, en: Easy to handle. }
  finesse:
    name: { zh: 灵巧, en: Finesse }
    description: { zh: 可用敏捷。, en: Use Dexterity. }
"#;

pub const DAMAGE_TYPES_YAML: &str = r#"
damage_types:
  bludgeoning:
    name: { zh: 钝击, en: Bludgeoning }
  piercing:
    name: { zh: 穿刺, en: Piercing }
"#;

pub const LEGENDARY_YAML: &str = r#"
weapons:
  - id: relic_blade
    name: { zh: 遗物之刃, en: Relic Blade }
    category: martial_melee
    rarity: mythic
    damage: { dice: "1d8", type: necrotic }
    cost: 9000 gp
    weight: 3
    properties: [finesse, cursed]
    charges: 3
    description: { zh: 古老的剑。, en: An old sword. }
  - id: plain_spear
    name: { zh: 朴素之矛, en: Plain Spear }
    category: simple_melee
    rarity: uncommon
    damage: { dice: "1d6", type: piercing }
    cost: 500 gp
    weight: 3
    thrown_range: { normal: 20, long: 60 }
    properties: []
    magical_bonus: 1
    special_abilities: []
    description: { zh: 一支矛。, en: A spear. }
"#;

/// 小型測試資料：包含未知屬性、未知傷害類型、未知稀有度
pub fn fixture_source() -> MemorySource {
    MemorySource::new()
        .with("base-weapons.yaml", WEAPONS_YAML)
        .with("weapon-properties.yaml", PROPERTIES_YAML)
        .with("damage-types.yaml", DAMAGE_TYPES_YAML)
        .with("legendary-weapons.yaml", LEGENDARY_YAML)
}

pub fn fixture_generator() -> WeaponGenerator {
    WeaponGenerator::with_source(fixture_source())
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
