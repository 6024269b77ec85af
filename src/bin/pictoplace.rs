use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use pictoplace::{
    Color, EngineSettings, OverrideValue, PictographKey, PlacementEngine, PropType,
    SpecialPlacementStore, TurnsKeyGenerator,
};

#[derive(Parser, Debug)]
#[command(name = "pictoplace", version)]
struct Cli {
    /// Log verbosity on stderr (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute arrow and prop placements for a pictograph.
    Place(PlaceArgs),
    /// Print the override lookup keys of a pictograph.
    Key(KeyArgs),
    /// Write an override entry and save it to the data folder.
    Set(SetArgs),
}

#[derive(Parser, Debug)]
struct PlaceArgs {
    /// Input pictograph JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override data root (`<root>/<grid_mode>/<orientation_key>/*.json`).
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Engine settings JSON.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Prop type; takes precedence over the settings file.
    #[arg(long, value_enum)]
    prop_type: Option<PropType>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct KeyArgs {
    /// Input pictograph JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SetArgs {
    /// Override data root.
    #[arg(long)]
    overrides: PathBuf,

    /// Input pictograph JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Glyph color the entry belongs to.
    #[arg(long, value_enum, default_value_t = Color::Blue)]
    color: Color,

    /// Field name (e.g. `blue`, `pro`, `static_rot_angle_override`).
    #[arg(long)]
    field: String,

    /// Position adjustment `DX,DY`.
    #[arg(long, value_parser = parse_offset, allow_hyphen_values = true)]
    offset: Option<[f64; 2]>,

    /// Rotation angle in degrees.
    #[arg(long, conflicts_with = "offset", allow_hyphen_values = true)]
    rotation: Option<f64>,

    /// Also write the mirrored, color-swapped counterpart.
    #[arg(long)]
    mirror: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Place(args) => cmd_place(args),
        Command::Key(args) => cmd_key(args),
        Command::Set(args) => cmd_set(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_offset(s: &str) -> Result<[f64; 2], String> {
    let (dx, dy) = s
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid offset component '{v}': {e}"))
    };
    Ok([parse(dx)?, parse(dy)?])
}

fn load_pictograph(path: &Path) -> anyhow::Result<PictographKey> {
    PictographKey::from_path(path).with_context(|| format!("load pictograph '{}'", path.display()))
}

fn cmd_place(args: PlaceArgs) -> anyhow::Result<()> {
    let pictograph = load_pictograph(&args.in_path)?;

    let mut settings = match &args.settings {
        Some(path) => EngineSettings::from_path(path)?,
        None => EngineSettings::default(),
    };
    if let Some(prop_type) = args.prop_type {
        settings.prop_type = prop_type;
    }

    let store = match &args.overrides {
        Some(root) => {
            let store = SpecialPlacementStore::new(root);
            store.load(pictograph.grid_mode);
            store
        }
        None => SpecialPlacementStore::new("."),
    };

    let mut engine = PlacementEngine::new(Arc::new(store), settings);
    let placement = engine.compute(&pictograph);
    let json = serde_json::to_string_pretty(&placement)?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_key(args: KeyArgs) -> anyhow::Result<()> {
    let pictograph = load_pictograph(&args.in_path)?;
    let turns_key = TurnsKeyGenerator::generate(&pictograph);
    let report = serde_json::json!({
        "letter": pictograph.letter,
        "letter_type": pictograph.letter_type(),
        "turns_key": turns_key,
        "lead_state": TurnsKeyGenerator::lead_state(&pictograph),
        "orientation_key": {
            "blue": SpecialPlacementStore::ori_key_for(&pictograph, Color::Blue),
            "red": SpecialPlacementStore::ori_key_for(&pictograph, Color::Red),
        },
        "attr_field": {
            "blue": PlacementEngine::attr_field_key(&pictograph, Color::Blue),
            "red": PlacementEngine::attr_field_key(&pictograph, Color::Red),
        },
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_set(args: SetArgs) -> anyhow::Result<()> {
    let pictograph = load_pictograph(&args.in_path)?;
    let value = match (args.offset, args.rotation) {
        (Some(offset), None) => OverrideValue::Offset(offset),
        (None, Some(deg)) => OverrideValue::Rotation(deg),
        _ => anyhow::bail!("exactly one of --offset or --rotation is required"),
    };
    let color = args.color;

    let store = SpecialPlacementStore::new(&args.overrides);
    store.reload();

    let written = if args.mirror {
        store.set_entry_with_mirror(&pictograph, color, &args.field, value)
    } else {
        store.set_entry(&pictograph, color, &args.field, value)
    };
    let turns_key = written.with_context(|| {
        format!(
            "letter {} has no turns key for this motion combination",
            pictograph.letter
        )
    })?;

    let mut targets = vec![(pictograph, color)];
    if args.mirror {
        targets.push((pictograph.mirrored_counterpart(), color.other()));
    }
    for (p, c) in targets {
        let ori_key = SpecialPlacementStore::ori_key_for(&p, c);
        let path = store.save(p.grid_mode, ori_key, p.letter)?;
        eprintln!("wrote {}", path.display());
    }
    eprintln!("{} {} = {:?}", turns_key, args.field, value);
    Ok(())
}
