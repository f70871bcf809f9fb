use clap::{Parser, Subcommand};
use pictor::draw::GeometricObject;
use pictor::scene::storage;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pictor")]
#[command(version, about = "2D vector drawing editor core and scene file tools")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a scene file and report per-kind object counts
    Info {
        /// Scene file in the line-based text encoding
        file: PathBuf,
    },
    /// Re-save a scene file in the canonical encoding, dropping unreadable lines
    Normalize {
        /// Scene file to rewrite
        file: PathBuf,

        /// Write the result here instead of rewriting the input in place
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Info { file }) => {
            let scene = storage::load_scene(&file)?;

            let mut segments = 0;
            let mut rects = 0;
            let mut circles = 0;
            let mut polylines = 0;
            for obj in scene.objects() {
                match obj {
                    GeometricObject::Segment { .. } => segments += 1,
                    GeometricObject::Rect { .. } => rects += 1,
                    GeometricObject::Circle { .. } => circles += 1,
                    GeometricObject::Polyline { .. } => polylines += 1,
                }
            }

            println!("{}: {} objects", file.display(), scene.len());
            println!("  segments:  {}", segments);
            println!("  rects:     {}", rects);
            println!("  circles:   {}", circles);
            println!("  polylines: {}", polylines);
        }
        Some(Command::Normalize { file, output }) => {
            let scene = storage::load_scene(&file)?;
            let target = output.unwrap_or_else(|| file.clone());
            storage::save_scene(&scene, &target)?;
            println!(
                "Wrote {} objects to {}",
                scene.len(),
                target.display()
            );
        }
        None => {
            // No subcommand: show usage
            println!("pictor: 2D vector drawing editor core and scene file tools");
            println!();
            println!("Usage:");
            println!("  pictor info <FILE>         Report object counts in a scene file");
            println!("  pictor normalize <FILE>    Rewrite a scene file in canonical form");
            println!("  pictor --help              Show help");
            println!();
            println!("Scene files hold one object per line:");
            println!("  RECT/SEG/CIRC/POLY <border rgba> <filled> <fill rgba> <thickness> <geometry>");
        }
    }

    Ok(())
}
