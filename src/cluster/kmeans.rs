//! Iterative k-means clustering
//!
//! Unlike the grid strategies, centers here are empirical: true
//! centroids of the assigned pixels. Initialization uses k-means++
//! seeded from a configurable value, so the same seed and image always
//! produce the same clustering. Each restart runs Lloyd iterations
//! until no centroid moves farther than the convergence threshold or
//! the iteration cap is reached; the lowest-distortion converged
//! restart wins.
//!
//! The feature space is either the full BGR triple or the hue scalar
//! alone. Hue-only centroids are back-converted to BGR with saturation
//! and value at maximum, matching the hue-grid centers contract.

use super::{check_image, Clusterer};
use crate::color::ColorConverter;
use crate::config::KmeansFeatureSpace;
use crate::constants::{channel, hue, kmeans};
use crate::error::{PaletteError, Result};
use crate::types::{ImageBuffer, LabelMap, Pixel};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro128PlusPlus;
use std::collections::HashSet;

/// K-means clusterer with k-means++ initialization and restarts
#[derive(Debug, Clone)]
pub struct KMeansClusterer {
    clusters: u32,
    feature_space: KmeansFeatureSpace,
    seed: u64,
    converter: ColorConverter,
}

/// Outcome of a single restart
struct Trial {
    assignments: Vec<usize>,
    centroids: Vec<[f32; 3]>,
    distortion: f64,
    converged: bool,
}

impl KMeansClusterer {
    /// Create a k-means clusterer.
    ///
    /// # Arguments
    ///
    /// * `clusters` - Number of clusters (k)
    /// * `feature_space` - Hue-only or full BGR features
    /// * `seed` - RNG seed for centroid initialization
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `clusters` is zero.
    pub fn new(clusters: u32, feature_space: KmeansFeatureSpace, seed: u64) -> Result<Self> {
        if clusters == 0 {
            return Err(PaletteError::invalid_argument("clusters", clusters));
        }
        Ok(Self {
            clusters,
            feature_space,
            seed,
            converter: ColorConverter::new(),
        })
    }

    /// Per-pixel feature vectors; hue mode leaves the trailing
    /// components at zero so distances reduce to the hue axis
    fn features(&self, image: &ImageBuffer) -> Vec<[f32; 3]> {
        match self.feature_space {
            KmeansFeatureSpace::Bgr => image
                .pixels()
                .iter()
                .map(|p| {
                    let [b, g, r] = p.channels();
                    [f32::from(b), f32::from(g), f32::from(r)]
                })
                .collect(),
            KmeansFeatureSpace::Hue => image
                .pixels()
                .iter()
                .map(|p| [f32::from(self.converter.hue_of(*p)), 0.0, 0.0])
                .collect(),
        }
    }

    /// K-means++ seeding: subsequent centroids are drawn with
    /// probability proportional to squared distance from the chosen set
    fn seed_centroids(points: &[[f32; 3]], k: usize, rng: &mut Xoroshiro128PlusPlus) -> Vec<[f32; 3]> {
        let mut centroids = Vec::with_capacity(k);
        centroids.push(points[rng.random_range(0..points.len())]);

        let mut dist2: Vec<f64> = points
            .iter()
            .map(|p| squared_distance(*p, centroids[0]))
            .collect();

        while centroids.len() < k {
            let total: f64 = dist2.iter().sum();
            let threshold = rng.random::<f64>() * total;

            // Zero-weight points are already centroids; never pick them
            let mut cumulative = 0.0;
            let mut chosen = None;
            let mut fallback = 0;
            for (i, &d) in dist2.iter().enumerate() {
                if d == 0.0 {
                    continue;
                }
                fallback = i;
                cumulative += d;
                if cumulative >= threshold {
                    chosen = Some(i);
                    break;
                }
            }

            let centroid = points[chosen.unwrap_or(fallback)];
            centroids.push(centroid);
            for (d, p) in dist2.iter_mut().zip(points) {
                *d = d.min(squared_distance(*p, centroid));
            }
        }

        centroids
    }

    /// One restart: seed, iterate, report distortion and convergence
    fn run_trial(&self, points: &[[f32; 3]], rng: &mut Xoroshiro128PlusPlus) -> Trial {
        let k = self.clusters as usize;
        let mut centroids = Self::seed_centroids(points, k, rng);
        let mut assignments = vec![0usize; points.len()];
        let mut converged = false;

        for _ in 0..kmeans::MAX_ITERATIONS {
            for (assignment, point) in assignments.iter_mut().zip(points) {
                *assignment = nearest_centroid(*point, &centroids);
            }

            // Recompute means; a cluster left empty keeps its centroid
            let mut sums = vec![[0.0f64; 3]; k];
            let mut counts = vec![0usize; k];
            for (&assignment, point) in assignments.iter().zip(points) {
                counts[assignment] += 1;
                for c in 0..3 {
                    sums[assignment][c] += f64::from(point[c]);
                }
            }

            let mut movement = 0.0f64;
            for i in 0..k {
                if counts[i] == 0 {
                    continue;
                }
                let mean = [
                    (sums[i][0] / counts[i] as f64) as f32,
                    (sums[i][1] / counts[i] as f64) as f32,
                    (sums[i][2] / counts[i] as f64) as f32,
                ];
                movement = movement.max(squared_distance(mean, centroids[i]).sqrt());
                centroids[i] = mean;
            }

            if movement < f64::from(kmeans::CONVERGENCE_THRESHOLD) {
                converged = true;
                break;
            }
        }

        let distortion = assignments
            .iter()
            .zip(points)
            .map(|(&a, p)| squared_distance(*p, centroids[a]))
            .sum();

        Trial {
            assignments,
            centroids,
            distortion,
            converged,
        }
    }

    /// Round a centroid back to a representative BGR pixel
    fn centroid_to_pixel(&self, centroid: [f32; 3]) -> Pixel {
        match self.feature_space {
            KmeansFeatureSpace::Bgr => Pixel::new(
                centroid[0].round().clamp(0.0, 255.0) as u8,
                centroid[1].round().clamp(0.0, 255.0) as u8,
                centroid[2].round().clamp(0.0, 255.0) as u8,
            ),
            KmeansFeatureSpace::Hue => {
                let h = centroid[0].round().clamp(0.0, f32::from(hue::MAX)) as u8;
                self.converter
                    .hsv_to_bgr(Pixel::new(h, channel::MAX, channel::MAX))
            }
        }
    }
}

impl Clusterer for KMeansClusterer {
    fn compute_clusters(&self, image: &ImageBuffer) -> Result<(LabelMap, Vec<Pixel>)> {
        check_image(image)?;

        let k = self.clusters as usize;
        let points = self.features(image);

        let distinct = distinct_count(&points);
        if distinct < k {
            return Err(PaletteError::DegenerateClustering {
                distinct,
                requested: k,
            });
        }

        let mut best: Option<Trial> = None;
        for restart in 0..kmeans::RESTARTS {
            let mut rng =
                Xoroshiro128PlusPlus::seed_from_u64(self.seed.wrapping_add(restart as u64));
            let trial = self.run_trial(&points, &mut rng);
            if !trial.converged {
                continue;
            }
            match &best {
                Some(current) if current.distortion <= trial.distortion => {}
                _ => best = Some(trial),
            }
        }

        let trial = best.ok_or_else(|| {
            PaletteError::processing(format!(
                "k-means failed to converge within {} iterations after {} restarts",
                kmeans::MAX_ITERATIONS,
                kmeans::RESTARTS
            ))
        })?;

        let (width, height) = image.dimensions();
        let labels = LabelMap::new(width, height, trial.assignments)?;
        let centers = trial
            .centroids
            .iter()
            .map(|&c| self.centroid_to_pixel(c))
            .collect();

        Ok((labels, centers))
    }

    fn num_clusters(&self) -> usize {
        self.clusters as usize
    }
}

/// Squared Euclidean distance between feature vectors
fn squared_distance(a: [f32; 3], b: [f32; 3]) -> f64 {
    let mut sum = 0.0;
    for c in 0..3 {
        let d = f64::from(a[c]) - f64::from(b[c]);
        sum += d * d;
    }
    sum
}

/// Index of the nearest centroid; ties resolve to the lowest index
fn nearest_centroid(point: [f32; 3], centroids: &[[f32; 3]]) -> usize {
    let mut best = 0;
    let mut best_dist = squared_distance(point, centroids[0]);
    for (i, &centroid) in centroids.iter().enumerate().skip(1) {
        let dist = squared_distance(point, centroid);
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// Number of distinct feature vectors
fn distinct_count(points: &[[f32; 3]]) -> usize {
    points
        .iter()
        .map(|p| [p[0].to_bits(), p[1].to_bits(), p[2].to_bits()])
        .collect::<HashSet<_>>()
        .len()
}
