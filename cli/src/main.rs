//! 武器生成器命令列工具
//!
//! 所有武器以 JSON 輸出；`RUST_LOG=debug` 可顯示篩選與載入過程。

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use weapon_core::{GeneratorConfig, WeaponFilter, WeaponGenerator};

#[derive(Parser)]
#[command(name = "weapon-gen")]
#[command(about = "D&D 5E 隨機武器生成器", long_about = None)]
struct Cli {
    /// 設定檔路徑 (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 資料目錄，未指定時使用內建資料
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// 輸出語言 (zh / en)
    #[arg(long, global = true)]
    lang: Option<String>,

    /// 亂數種子，指定後結果可重現
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 隨機生成一把武器
    Generate {
        /// 武器類別，例如 martial_melee
        #[arg(long)]
        category: Option<String>,

        /// 熟練度 (simple / martial)
        #[arg(long)]
        proficiency: Option<String>,

        /// 傷害類型，例如 slashing
        #[arg(long)]
        damage_type: Option<String>,
    },

    /// 依 ID 取得武器
    Get { id: String },

    /// 隨機生成傳奇武器，或依 ID 取得
    Legendary {
        #[arg(long)]
        id: Option<String>,
    },

    /// 列出可用的值
    List { what: ListTarget },

    /// 示範輸出
    Demo,
}

#[derive(Clone, Copy, ValueEnum)]
enum ListTarget {
    Categories,
    DamageTypes,
    Legendary,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("無法讀取設定檔 {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(lang) = cli.lang {
        config.language = lang;
    }

    log::debug!("設定: {config:?}");
    let generator = WeaponGenerator::from_config(&config);
    let language = generator.language().to_string();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match cli.command {
        Commands::Generate {
            category,
            proficiency,
            damage_type,
        } => {
            let filter = WeaponFilter::from_args(
                category.as_deref(),
                proficiency.as_deref(),
                damage_type.as_deref(),
            );
            let weapon = generator.generate_with(&filter, &language, &mut rng)?;
            print_json(&weapon)?;
        }

        Commands::Get { id } => match generator.get_weapon_by_id(&id, &language)? {
            Some(weapon) => print_json(&weapon)?,
            None => bail!("找不到武器: {id}"),
        },

        Commands::Legendary { id: Some(id) } => {
            match generator.get_legendary_by_id(&id, &language)? {
                Some(weapon) => print_json(&weapon)?,
                None => bail!("找不到傳奇武器: {id}"),
            }
        }

        Commands::Legendary { id: None } => {
            let weapon = generator.generate_legendary_with(&language, &mut rng)?;
            print_json(&weapon)?;
        }

        Commands::List { what } => {
            let values = match what {
                ListTarget::Categories => generator.list_categories()?,
                ListTarget::DamageTypes => generator.list_damage_types()?,
                ListTarget::Legendary => generator.list_legendary_ids()?,
            };
            for value in values {
                println!("{value}");
            }
        }

        Commands::Demo => run_demo(&generator, &language, &mut rng)?,
    }

    Ok(())
}

fn run_demo(generator: &WeaponGenerator, language: &str, rng: &mut StdRng) -> Result<()> {
    let cases = [
        ("隨機武器", WeaponFilter::new()),
        (
            "軍用近戰武器",
            WeaponFilter::from_args(Some("martial_melee"), None, None),
        ),
        (
            "穿刺傷害武器",
            WeaponFilter::from_args(None, None, Some("piercing")),
        ),
        (
            "簡易武器",
            WeaponFilter::from_args(None, Some("simple"), None),
        ),
    ];

    for (title, filter) in &cases {
        println!("=== {title} ===");
        match generator.generate_with(filter, language, rng) {
            Ok(weapon) => print_json(&weapon)?,
            Err(err) if err.is_no_match() => println!("{err}"),
            Err(err) => return Err(err.into()),
        }
    }

    println!("=== 傳奇武器 ===");
    match generator.generate_legendary_with(language, rng) {
        Ok(weapon) => print_json(&weapon)?,
        Err(err) if err.is_no_match() => println!("{err}"),
        Err(err) => return Err(err.into()),
    }

    println!("=== 武器類別 ===");
    println!("{}", generator.list_categories()?.join(", "));
    println!("=== 傷害類型 ===");
    println!("{}", generator.list_damage_types()?.join(", "));
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
