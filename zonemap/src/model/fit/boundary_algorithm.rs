use super::{alpha_shape, FitError};
use crate::model::zone::{Coord, Ring};
use geo::{ConvexHull, MultiPoint, Point};
use serde::{Deserialize, Serialize};

/// boundary fitting strategy for a zone's point cloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "type")]
pub enum BoundaryAlgorithm {
    /// concave hull via a shrinking-concavity alpha shape. runs at
    /// `initial_alpha` and retries at decreasing values until the shape is a
    /// single connected polygon or the next step would drop below
    /// `min_alpha`; alpha is never evaluated below the floor. a multi-part
    /// shape at the floor is accepted as-is; an empty shape at the floor
    /// falls back to the convex hull.
    AlphaShape {
        initial_alpha: f64,
        min_alpha: f64,
        step: f64,
    },
    /// plain convex hull; over-generalizes irregular zones but never
    /// produces a multi-part result
    ConvexHull,
}

impl Default for BoundaryAlgorithm {
    fn default() -> Self {
        BoundaryAlgorithm::AlphaShape {
            initial_alpha: 55.0,
            min_alpha: 10.0,
            step: 2.0,
        }
    }
}

/// the outcome of one boundary fit
#[derive(Debug, Clone)]
pub struct FitResult {
    pub rings: Vec<Ring>,
    pub attempts: u32,
    /// the final alpha evaluated; None for the convex hull
    pub alpha: Option<f64>,
}

impl BoundaryAlgorithm {
    pub fn run(&self, points: &[Coord]) -> Result<FitResult, FitError> {
        match self {
            BoundaryAlgorithm::ConvexHull => Ok(FitResult {
                rings: vec![convex_hull_ring(points)?],
                attempts: 1,
                alpha: None,
            }),
            BoundaryAlgorithm::AlphaShape {
                initial_alpha,
                min_alpha,
                step,
            } => {
                if *step <= 0.0 || *min_alpha <= 0.0 || initial_alpha < min_alpha {
                    return Err(FitError::InvalidConfiguration(format!(
                        "alpha shape requires initial_alpha >= min_alpha > 0 and step > 0, \
                         got initial {initial_alpha}, min {min_alpha}, step {step}"
                    )));
                }
                let mut alpha = *initial_alpha;
                let mut attempts = 0;
                loop {
                    attempts += 1;
                    let rings = alpha_shape(points, alpha)?;
                    if rings.len() == 1 {
                        return Ok(FitResult {
                            rings,
                            attempts,
                            alpha: Some(alpha),
                        });
                    }
                    let next = alpha - step;
                    if next < *min_alpha {
                        if rings.is_empty() {
                            log::warn!(
                                "alpha shape empty at alpha {alpha}; falling back to convex hull"
                            );
                            return Ok(FitResult {
                                rings: vec![convex_hull_ring(points)?],
                                attempts,
                                alpha: Some(alpha),
                            });
                        }
                        log::warn!(
                            "alpha shape still has {} parts at alpha {alpha}; accepting multi-part boundary",
                            rings.len()
                        );
                        return Ok(FitResult {
                            rings,
                            attempts,
                            alpha: Some(alpha),
                        });
                    }
                    alpha = next;
                }
            }
        }
    }
}

fn convex_hull_ring(points: &[Coord]) -> Result<Ring, FitError> {
    if points.len() < 3 {
        return Err(FitError::NotEnoughPoints(points.len()));
    }
    let cloud = MultiPoint::new(
        points
            .iter()
            .map(|(lon, lat)| Point::new(*lon, *lat))
            .collect(),
    );
    let hull = cloud.convex_hull();
    let mut ring: Ring = hull.exterior().points().map(|p| (p.x(), p.y())).collect();
    // geo closes the exterior ring; the stored representation leaves it open
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    if ring.len() < 3 {
        return Err(FitError::DegenerateBoundary(points.len()));
    }
    Ok(ring)
}
