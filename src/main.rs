use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use glyphgen::{generator, icons, GeneratorConfig};

#[derive(Parser)]
#[command(name = "glyphgen", about = "Generate the arrow-up and refresh icon PNGs")]
struct Cli {
    /// Directory to write the icons into
    #[arg(long, default_value = "assets")]
    out_dir: PathBuf,

    /// Generate a single icon by name (arrow-up, refresh)
    #[arg(long)]
    only: Option<String>,

    /// Print the built-in icon definitions as JSON and exit
    #[arg(long)]
    list: bool,
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        println!("{}", serde_json::to_string_pretty(&icons::builtin())?);
        return Ok(());
    }

    let config = GeneratorConfig {
        output_dir: cli.out_dir,
        ..Default::default()
    };

    let defs = match cli.only.as_deref() {
        Some(name) => match icons::find(name) {
            Some(def) => vec![def],
            None => bail!("unknown icon '{}'", name),
        },
        None => icons::builtin(),
    };

    for def in &defs {
        let path = generator::output_path(def, &config);
        generator::generate(def, &config)
            .with_context(|| format!("failed to generate '{}' at {}", def.name, path.display()))?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("glyphgen: {:#}", e);
        std::process::exit(1);
    }
}
