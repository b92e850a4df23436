use std::io::Write;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use texmap_core::export::{self, cpp::CppOptions};
use texmap_core::{manifest, AtlasParams, Ordering, TextureMap, DEFAULT_NAME, VERSION};

#[derive(Parser, Debug)]
#[command(name = "texmap", version = VERSION, about = "Blend-tile texture map generator")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Emit a single texture map (the default when no command is given)
    Generate {
        #[arg(long, default_value = DEFAULT_NAME)]
        name: String,
        #[arg(long, default_value_t = AtlasParams::STONE.width)]
        width: i64,
        #[arg(long, default_value_t = AtlasParams::STONE.height)]
        height: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset_x: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset_y: i64,
        #[arg(long, value_enum, default_value_t = OrderingArg::Standard)]
        ordering: OrderingArg,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Emit every texture map listed in a YAML manifest
    Batch {
        path: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Validate a YAML manifest without emitting anything
    Check { path: String },
}

#[derive(Args, Debug, Default)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = Format::Cpp)]
    format: Format,
    /// Append a `// 0bXXXX` code comment to each row
    #[arg(long)]
    annotate: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
enum Format {
    #[default]
    Cpp,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OrderingArg {
    Standard,
    Hilbert,
}

impl From<OrderingArg> for Ordering {
    fn from(o: OrderingArg) -> Self {
        match o {
            OrderingArg::Standard => Ordering::Standard,
            OrderingArg::Hilbert => Ordering::Hilbert,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

// Everything is rendered before anything reaches stdout.
fn render(maps: &[TextureMap], output: &OutputArgs) -> Result<String> {
    match output.format {
        Format::Cpp => {
            let opts = CppOptions { annotate: output.annotate };
            let tables: Vec<String> = maps.iter().map(|m| export::cpp::render(m, opts)).collect();
            Ok(tables.join("\n"))
        }
        Format::Json if maps.len() == 1 => Ok(format!("{}\n", export::to_json(&maps[0])?)),
        Format::Json => Ok(format!("{}\n", export::to_json_all(maps)?)),
    }
}

fn emit(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let cmd = cli.cmd.unwrap_or(Command::Generate {
        name: DEFAULT_NAME.to_string(),
        width: AtlasParams::STONE.width,
        height: AtlasParams::STONE.height,
        offset_x: AtlasParams::STONE.offset_x,
        offset_y: AtlasParams::STONE.offset_y,
        ordering: OrderingArg::Standard,
        output: OutputArgs::default(),
    });
    match cmd {
        Command::Generate { name, width, height, offset_x, offset_y, ordering, output } => {
            let params = AtlasParams::new(width, height, offset_x, offset_y);
            let map = texmap_core::generate(&name, &params, ordering.into())?;
            emit(&render(std::slice::from_ref(&map), &output)?)?;
        }
        Command::Batch { path, output } => {
            let manifest = manifest::load_from_path(&path)?;
            let maps = manifest.generate_all()?;
            log::info!("generated {} maps from {}", maps.len(), path);
            emit(&render(&maps, &output)?)?;
        }
        Command::Check { path } => {
            for o in Ordering::ALL {
                texmap_core::atlas::ordering::validate_permutation(o.table())?;
            }
            let manifest = manifest::load_from_path(&path)?;
            manifest.validate()?;
            println!("Loaded manifest: {} ({} maps)", path, manifest.maps.len());
            for spec in &manifest.maps {
                let a = &spec.atlas;
                println!(
                    "  {}: {}x{} px, offset ({}, {}), {} ordering",
                    spec.name, a.width, a.height, a.offset_x, a.offset_y, spec.ordering
                );
            }
        }
    }
    Ok(())
}
