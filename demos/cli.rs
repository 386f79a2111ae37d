//! Command-line interface for palette_swap
//!
//! Prints the ranked dominant palette of an image and optionally saves
//! a preview with the palette strip appended below the image.

use palette_swap::{
    image_loader, render_palette_strip, ClusterConfig, ColorTable, ImageProcessor,
    KmeansFeatureSpace, ProcessorConfig,
};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut strategy = "grid".to_string();
    let mut palette_size = 5usize;
    let mut preview_path = None;
    let mut config_path = None;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--strategy" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --strategy requires a value (grid|hue|kmeans)");
                    process::exit(1);
                }
                strategy = args[i + 1].clone();
                i += 1;
            }
            "--palette-size" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --palette-size requires a number");
                    process::exit(1);
                }
                palette_size = match args[i + 1].parse() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("Error: invalid palette size '{}'", args[i + 1]);
                        process::exit(1);
                    }
                };
                i += 1;
            }
            "--preview" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --preview requires an output path");
                    process::exit(1);
                }
                preview_path = Some(args[i + 1].clone());
                i += 1;
            }
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a JSON file path");
                    process::exit(1);
                }
                config_path = Some(args[i + 1].clone());
                i += 1;
            }
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
                eprintln!("Use --help for usage information");
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

    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    let config = match config_path {
        Some(path) => match ProcessorConfig::from_json_file(Path::new(&path)) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Error: could not read config '{}': {}", path, error);
                process::exit(1);
            }
        },
        None => ProcessorConfig {
            clustering: match strategy.as_str() {
                "grid" => ClusterConfig::grid(),
                "hue" => ClusterConfig::hue_grid(),
                "kmeans" => ClusterConfig::kmeans(),
                "kmeans-hue" => ClusterConfig::KMeans {
                    clusters: 5,
                    feature_space: KmeansFeatureSpace::Hue,
                    seed: 0,
                },
                other => {
                    eprintln!("Unknown strategy: {}", other);
                    process::exit(1);
                }
            },
            palette_size,
        },
    };

    let image = match image_loader::load_image(image_path) {
        Ok(image) => image,
        Err(error) => {
            eprintln!("Failed to load image: {}", error);
            process::exit(1);
        }
    };
    let image = match image_loader::resize_to_display(&image) {
        Ok(image) => image,
        Err(error) => {
            eprintln!("Failed to resize image: {}", error);
            process::exit(1);
        }
    };

    let mut processor = ImageProcessor::new(config);
    if let Err(error) = processor.process_image(&image) {
        eprintln!("Clustering failed: {}", error);
        process::exit(1);
    }

    let palette = match processor.extract_palette() {
        Ok(palette) => palette,
        Err(error) => {
            eprintln!("Palette extraction failed: {}", error);
            process::exit(1);
        }
    };

    println!(
        "Dominant palette of {} ({}x{}):",
        image_path.display(),
        image.width(),
        image.height()
    );
    for (rank, entry) in palette.iter().enumerate() {
        let [b, g, r] = entry.color.channels();
        println!(
            "  #{}: cluster {:3}  {}  bgr({:3},{:3},{:3})  {} px",
            rank + 1,
            entry.cluster_id,
            ColorTable::hex_name(entry.color),
            b,
            g,
            r,
            entry.count
        );
    }

    if let Some(path) = preview_path {
        match render_palette_strip(&image, &palette) {
            Ok(canvas) => {
                if let Err(error) = image_loader::save_image(&canvas, Path::new(&path)) {
                    eprintln!("Failed to save preview: {}", error);
                    process::exit(1);
                }
                println!("Preview saved to {}", path);
            }
            Err(error) => {
                eprintln!("Failed to render preview: {}", error);
                process::exit(1);
            }
        }
    }
}

fn print_help(program: &str) {
    println!("Usage: {} [OPTIONS] <image>", program);
    println!();
    println!("Options:");
    println!("  --strategy <grid|hue|kmeans|kmeans-hue>  Clustering strategy (default: grid)");
    println!("  --palette-size <n>                       Number of palette entries (default: 5)");
    println!("  --preview <path>                         Save an image + palette strip preview");
    println!("  --config <path>                          Load a JSON ProcessorConfig instead");
    println!("  --help, -h                               Show this help");
}
