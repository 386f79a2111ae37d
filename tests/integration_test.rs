//! Integration tests for the clustering and recoloring pipeline
//!
//! These tests validate the end-to-end workflow including:
//! - Clustering with each strategy through the processor
//! - Palette extraction and ranking guarantees
//! - Cluster-targeted recoloring (additive shift and hue overwrite)
//! - Palette strip rendering
//! - Image file round-trips
//! - Error handling for edge cases

use palette_swap::{
    extract_palette_from_path, image_loader, render_palette_strip, ClusterConfig, EditKind,
    ImageBuffer, ImageProcessor, KmeansFeatureSpace, PaletteError, Pixel, ProcessorConfig,
};
use std::path::Path;

/// 10x10 test image: 60 red pixels, 30 green, 10 blue
fn three_region_image() -> ImageBuffer {
    let mut pixels = vec![Pixel::new(0, 0, 255); 60];
    pixels.extend(vec![Pixel::new(0, 255, 0); 30]);
    pixels.extend(vec![Pixel::new(255, 0, 0); 10]);
    ImageBuffer::new(10, 10, pixels).unwrap()
}

fn processor_with(clustering: ClusterConfig, palette_size: usize) -> ImageProcessor {
    ImageProcessor::new(ProcessorConfig {
        clustering,
        palette_size,
    })
}

// ============================================================================
// Clustering and Palette Tests
// ============================================================================

#[test]
fn test_grid_pipeline_ranks_by_frequency() {
    let mut processor = processor_with(ClusterConfig::Grid { grid_size: 3 }, 5);
    processor.process_image(&three_region_image()).unwrap();

    let palette = processor.extract_palette().unwrap();
    assert_eq!(palette.len(), 5);
    assert_eq!(palette[0].count, 60);
    assert_eq!(palette[1].count, 30);
    assert_eq!(palette[2].count, 10);

    // Red, green, blue grid-bin midpoints in that order; the remaining
    // slots are unoccupied bins with zero counts
    assert_eq!(palette[0].color, Pixel::new(42, 42, 212));
    assert_eq!(palette[1].color, Pixel::new(42, 212, 42));
    assert_eq!(palette[2].color, Pixel::new(212, 42, 42));
    assert_eq!(palette[3].count, 0);
    assert_eq!(palette[4].count, 0);
}

#[test]
fn test_histogram_accounts_for_every_pixel() {
    for clustering in [
        ClusterConfig::Grid { grid_size: 3 },
        ClusterConfig::HueGrid { bins: 8 },
        ClusterConfig::KMeans {
            clusters: 3,
            feature_space: KmeansFeatureSpace::Bgr,
            seed: 0,
        },
    ] {
        let mut processor = processor_with(clustering, 5);
        processor.process_image(&three_region_image()).unwrap();
        let histogram = processor.histogram().unwrap();
        assert_eq!(histogram.iter().sum::<usize>(), 100);
    }
}

#[test]
fn test_single_color_image_occupies_one_cluster() {
    let image = ImageBuffer::filled(10, 10, Pixel::new(70, 70, 70));
    let mut processor = processor_with(ClusterConfig::Grid { grid_size: 3 }, 5);
    processor.process_image(&image).unwrap();

    let palette = processor.extract_palette().unwrap();
    assert_eq!(palette[0].count, 100);
    assert!(palette[1..].iter().all(|entry| entry.count == 0));
}

#[test]
fn test_palette_extraction_is_repeatable() {
    let mut processor = processor_with(ClusterConfig::HueGrid { bins: 8 }, 5);
    processor.process_image(&three_region_image()).unwrap();

    let first = processor.extract_palette().unwrap();
    let second = processor.extract_palette().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_kmeans_is_seed_deterministic_end_to_end() {
    let image = three_region_image();
    let clustering = ClusterConfig::KMeans {
        clusters: 3,
        feature_space: KmeansFeatureSpace::Bgr,
        seed: 11,
    };

    let mut a = processor_with(clustering.clone(), 3);
    let mut b = processor_with(clustering, 3);
    a.process_image(&image).unwrap();
    b.process_image(&image).unwrap();

    assert_eq!(a.extract_palette().unwrap(), b.extract_palette().unwrap());
    assert_eq!(a.labels(), b.labels());
}

// ============================================================================
// Recoloring Tests
// ============================================================================

#[test]
fn test_substitute_color_shifts_one_region() {
    // Bright and slightly darker red share a grid bin
    let mut pixels = vec![Pixel::new(0, 0, 255); 8];
    pixels.extend(vec![Pixel::new(0, 0, 220); 8]);
    let mut image = ImageBuffer::new(4, 4, pixels).unwrap();

    let mut processor = processor_with(ClusterConfig::Grid { grid_size: 3 }, 5);
    processor.process_image(&image).unwrap();

    // Delta (0,0,255) -> (0,0,235) is -20 red, additive per pixel
    processor
        .substitute_color(&mut image, Pixel::new(0, 0, 255), Pixel::new(0, 0, 235))
        .unwrap();

    assert_eq!(image.get(0, 0), Pixel::new(0, 0, 235));
    assert_eq!(image.get(2, 0), Pixel::new(0, 0, 200));
}

#[test]
fn test_substitute_color_clamps_at_channel_bounds() {
    let mut image = ImageBuffer::new(
        2,
        1,
        vec![Pixel::new(0, 0, 0), Pixel::new(10, 5, 0)],
    )
    .unwrap();
    let mut processor = processor_with(ClusterConfig::Grid { grid_size: 3 }, 5);
    processor.process_image(&image).unwrap();

    processor
        .substitute_color(
            &mut image,
            Pixel::new(0, 0, 0),
            Pixel::new(255, 255, 255),
        )
        .unwrap();

    // Both pixels saturate at full white
    assert_eq!(image.get(0, 0), Pixel::new(255, 255, 255));
    assert_eq!(image.get(0, 1), Pixel::new(255, 255, 255));
}

#[test]
fn test_hue_shift_preserves_shading() {
    // Bright and dark red in the same hue bin
    let mut pixels = vec![Pixel::new(0, 0, 255); 8];
    pixels.extend(vec![Pixel::new(0, 0, 128); 8]);
    let mut image = ImageBuffer::new(4, 4, pixels).unwrap();

    let mut processor = processor_with(ClusterConfig::HueGrid { bins: 8 }, 5);
    processor.process_image(&image).unwrap();

    processor
        .hue_shift(&mut image, Pixel::new(0, 0, 255), Pixel::new(255, 0, 0))
        .unwrap();

    // Both take the blue hue; value is preserved
    assert_eq!(image.get(0, 0), Pixel::new(255, 0, 0));
    assert_eq!(image.get(2, 0), Pixel::new(128, 0, 0));
}

#[test]
fn test_apply_palette_recolors_ranked_clusters() {
    let mut processor = processor_with(ClusterConfig::Grid { grid_size: 3 }, 5);
    let mut image = three_region_image();
    processor.process_image(&image).unwrap();

    // One replacement per ranked slot: red, green, blue clusters
    let replacements = [
        Pixel::new(42, 42, 222), // +10 red on the red cluster
        Pixel::new(52, 212, 42), // +10 blue on the green cluster
        Pixel::new(212, 52, 42), // +10 green on the blue cluster
    ];
    processor
        .apply_palette(&mut image, &replacements, EditKind::Substitute)
        .unwrap();

    assert_eq!(image.get(0, 0), Pixel::new(0, 0, 255)); // 255 + 10 clamps
    assert_eq!(image.get(6, 5), Pixel::new(10, 255, 0));
    assert_eq!(image.get(9, 9), Pixel::new(255, 10, 0));
}

#[test]
fn test_edits_do_not_rewrite_labels() {
    let mut processor = processor_with(ClusterConfig::Grid { grid_size: 3 }, 5);
    let mut image = three_region_image();
    processor.process_image(&image).unwrap();

    let labels_before = processor.labels().unwrap().clone();
    processor
        .hue_shift(&mut image, Pixel::new(0, 0, 255), Pixel::new(255, 0, 0))
        .unwrap();
    assert_eq!(processor.labels().unwrap(), &labels_before);
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn test_render_strip_below_image() {
    let mut processor = processor_with(ClusterConfig::Grid { grid_size: 3 }, 5);
    let image = three_region_image();
    processor.process_image(&image).unwrap();

    let palette = processor.extract_palette().unwrap();
    let canvas = render_palette_strip(&image, &palette).unwrap();

    // 5 swatches of width round(10/5) = 2
    assert_eq!(canvas.dimensions(), (10, 12));
    assert_eq!(canvas.get(0, 0), image.get(0, 0));
    assert_eq!(canvas.get(11, 0), Pixel::new(42, 42, 212));
}

// ============================================================================
// File I/O Tests
// ============================================================================

#[test]
fn test_extract_palette_from_file() {
    let path = std::env::temp_dir().join("palette_swap_integration.png");
    image_loader::save_image(&three_region_image(), &path).unwrap();

    let palette = extract_palette_from_path(&path, &ProcessorConfig::default()).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(palette.len(), 5);
    assert_eq!(palette[0].count, 60);
    assert_eq!(palette[0].color, Pixel::new(42, 42, 212));
}

#[test]
fn test_extract_palette_file_not_found() {
    let result = extract_palette_from_path(
        Path::new("nonexistent_file.jpg"),
        &ProcessorConfig::default(),
    );
    assert!(matches!(result, Err(PaletteError::ImageLoad { .. })));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_empty_image_rejected_by_every_strategy() {
    let empty = ImageBuffer::new(0, 0, vec![]).unwrap();
    for clustering in [
        ClusterConfig::Grid { grid_size: 3 },
        ClusterConfig::HueGrid { bins: 8 },
        ClusterConfig::KMeans {
            clusters: 2,
            feature_space: KmeansFeatureSpace::Bgr,
            seed: 0,
        },
    ] {
        let mut processor = processor_with(clustering, 5);
        let err = processor.process_image(&empty).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidArgument { .. }));
    }
}

#[test]
fn test_kmeans_degenerate_input_surfaces() {
    let flat = ImageBuffer::filled(8, 8, Pixel::new(33, 33, 33));
    let mut processor = processor_with(
        ClusterConfig::KMeans {
            clusters: 4,
            feature_space: KmeansFeatureSpace::Bgr,
            seed: 0,
        },
        5,
    );

    let err = processor.process_image(&flat).unwrap_err();
    assert!(matches!(
        err,
        PaletteError::DegenerateClustering {
            distinct: 1,
            requested: 4,
        }
    ));
}

#[test]
fn test_zero_parameters_rejected() {
    let image = three_region_image();
    for clustering in [
        ClusterConfig::Grid { grid_size: 0 },
        ClusterConfig::HueGrid { bins: 0 },
        ClusterConfig::KMeans {
            clusters: 0,
            feature_space: KmeansFeatureSpace::Bgr,
            seed: 0,
        },
    ] {
        let mut processor = processor_with(clustering, 5);
        assert!(processor.process_image(&image).is_err());
    }
}
