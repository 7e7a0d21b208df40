mod schema;

use anyhow::{Context, Result};
use clap::Parser;
use polygen::{Artifact, Config, Generator};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "blogging")]
#[command(about = "Generates data-access entities for the blogging schema")]
struct Cli {
    /// Directory the compiled images are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Print the synthesized source
    #[arg(long)]
    print: bool,

    /// Name of the generated crate
    #[arg(long, default_value = "polygen_generated")]
    crate_name: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let schema = schema::blogging().context("failed to build the blogging schema")?;

    let generator = Generator::builder()
        .config(Config::new().crate_name(&cli.crate_name))
        .build();

    let artifact = generator.generate(&schema);

    for diagnostic in artifact.diagnostics() {
        eprintln!("{diagnostic}");
    }

    if artifact.success() {
        write_images(&artifact, &cli.out_dir, &cli.crate_name)?;
    } else {
        eprintln!("compilation failed, no images written");
    }

    if cli.print {
        println!("{}", generator.generate_as_string(&schema));
    }

    if !artifact.success() {
        std::process::exit(1);
    }

    Ok(())
}

fn write_images(artifact: &Artifact, out_dir: &Path, crate_name: &str) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    for image in artifact.images() {
        let path = out_dir.join(format!("{crate_name}.{}", image.extension));
        fs::write(&path, image.bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;

        info!(
            path = %path.display(),
            bytes = image.bytes.len(),
            "wrote {} image",
            image.name
        );
    }

    Ok(())
}
