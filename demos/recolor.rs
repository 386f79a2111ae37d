//! Recoloring demo for palette_swap
//!
//! Clusters an image, then recolors its dominant clusters with a fixed
//! replacement palette and writes the result next to the input as
//! `palette_<name>`.

use palette_swap::{
    image_loader, ClusterConfig, EditKind, ImageProcessor, Pixel, ProcessorConfig,
};
use std::{env, path::Path, process};

/// Replacement colors applied to the ranked clusters, in order
const REPLACEMENTS: [Pixel; 5] = [
    Pixel::new(42, 42, 42),
    Pixel::new(127, 42, 42),
    Pixel::new(212, 212, 127),
    Pixel::new(212, 127, 127),
    Pixel::new(212, 212, 212),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut kind = EditKind::HueShift;
    let mut image_path_arg = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--substitute" => kind = EditKind::Substitute,
            "--hue-shift" => kind = EditKind::HueShift,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };
    let image_path = Path::new(&image_path_str);

    if let Err(error) = run(image_path, kind) {
        eprintln!("Recoloring failed: {}", error);
        process::exit(1);
    }
}

fn run(image_path: &Path, kind: EditKind) -> palette_swap::Result<()> {
    let image = image_loader::load_image(image_path)?;
    let mut image = image_loader::resize_to_display(&image)?;

    let mut processor = ImageProcessor::new(ProcessorConfig {
        clustering: ClusterConfig::hue_grid(),
        palette_size: REPLACEMENTS.len(),
    });
    processor.process_image(&image)?;

    let palette = processor.extract_palette()?;
    println!("Recoloring {} clusters:", palette.len());
    for (entry, replacement) in palette.iter().zip(&REPLACEMENTS) {
        println!(
            "  cluster {:3} ({} px): {:?} -> {:?}",
            entry.cluster_id, entry.count, entry.color, replacement
        );
    }

    processor.apply_palette(&mut image, &REPLACEMENTS, kind)?;

    let file_name = image_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.png".to_string());
    let output_path = image_path.with_file_name(format!("palette_{}", file_name));
    image_loader::save_image(&image, &output_path)?;
    println!("Saved {}", output_path.display());
    Ok(())
}

fn print_help(program: &str) {
    println!("Usage: {} [--substitute|--hue-shift] <image>", program);
    println!();
    println!("Recolors the dominant clusters of <image> with a fixed palette");
    println!("and writes the result as palette_<name> next to the input.");
    println!("  --hue-shift   Overwrite cluster hues (default)");
    println!("  --substitute  Shift cluster channels additively");
}
