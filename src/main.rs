use anyhow::Result;
use clap::Parser;

use image_tag::config;
use image_tag::exec::SystemRunner;
use image_tag::tagger::{GitCommitTagger, TagOptions, Tagger};
use image_tag::ui;

#[derive(clap::Parser)]
#[command(
    name = "image-tag",
    about = "Derive a container image tag from the state of the git working tree"
)]
struct Args {
    #[arg(help = "Base image name to qualify (e.g. registry.io/team/myapp)")]
    image: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("image-tag {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Resolve the image base name: CLI argument wins over configuration
    let image_name = match args.image.or(config.default_image) {
        Some(name) if !name.is_empty() => name,
        _ => {
            ui::display_error(
                "No image name given; pass one as an argument or set default_image in imagetag.toml",
            );
            std::process::exit(1);
        }
    };

    let tagger = GitCommitTagger::with_program(SystemRunner::new(), config.git.binary);

    match tagger.generate_tag(&TagOptions::new(image_name)) {
        Ok(tag) => {
            println!("{}", tag);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&format!("Failed to generate tag: {}", e));
            std::process::exit(1);
        }
    }
}
