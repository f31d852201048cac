use crate::config::AppConfiguration;
use crate::model::{
    cache::ZoneCache,
    classify::classify_points,
    fit::{fit_zone, BoundaryAlgorithm},
    output::write_feature_collection,
    source::PointSource,
    zone::{Boundary, PointCloud, Zone, ZoneList},
    ZoneCliError,
};
use kdam::{Bar, BarExt};
use rayon::prelude::*;
use std::path::Path;
use std::sync::mpsc;
use zonemap_osm::model::PbfPointSource;

/// drives the full pipeline over the configured .pbf extract
pub fn run(config: &AppConfiguration) -> Result<(), ZoneCliError> {
    let source = PbfPointSource::new(&config.pbf_file);
    run_with_source(config, &source)
}

/// drives the full pipeline: boundary cache partition, point cache
/// partition, streaming classification of the zones with neither cache hit,
/// parallel boundary fitting with incremental persistence, and the final
/// feature collection. the point source is only streamed when at least one
/// zone lacks both a cached boundary and a cached point cloud.
pub fn run_with_source<S: PointSource>(
    config: &AppConfiguration,
    source: &S,
) -> Result<(), ZoneCliError> {
    let list = ZoneList::read(Path::new(&config.zones_file))?;
    if list.zones.is_empty() {
        return Err(ZoneCliError::NoZonesFound(format!(
            "zone list {} is empty",
            config.zones_file
        )));
    }

    let mut boundary_cache: ZoneCache<Boundary> = ZoneCache::open(&config.boundary_cache_file)?;
    let mut point_cache: ZoneCache<PointCloud> = ZoneCache::open(&config.point_cache_file)?;

    let (finished, todo) = boundary_cache.partition(list.zones);
    log::info!(
        "{} zones have a cached boundary, {} to compute",
        finished.len(),
        todo.len()
    );

    let (mut pending, mut need_points) = point_cache.partition(todo);
    if !need_points.is_empty() {
        log::info!(
            "classifying points for {} zones from {}",
            need_points.len(),
            config.pbf_file
        );
        classify_points(source, &config.postal_code_tag, &mut need_points)?;
        point_cache.upsert_all(&need_points)?;
        pending.extend(need_points);
    }

    // too few points for a ring; such zones are skipped, not failed
    let (fittable, skipped): (Vec<Zone>, Vec<Zone>) = pending
        .into_iter()
        .partition(|z| z.points.as_ref().is_some_and(|p| p.0.len() >= 3));
    for zone in &skipped {
        let count = zone.points.as_ref().map(|p| p.0.len()).unwrap_or(0);
        log::warn!(
            "zone {} has {count} points in the extract, need at least 3; skipped",
            zone.cache_key()
        );
    }

    let fitted = fit_all(fittable, &mut boundary_cache, &config.algorithm)?;

    let mut zones = finished;
    zones.extend(fitted);
    zones.sort_by_key(|z| (z.start, z.end));
    write_feature_collection(&zones, Path::new(&config.output_file))?;
    eprintln!(
        "wrote {} zone boundaries to {}",
        zones.len(),
        config.output_file
    );
    Ok(())
}

/// fans boundary fitting out across the rayon pool, one independent task per
/// zone. each task is pure over its own zone; results return to this thread
/// over a channel and are upserted into the boundary cache as they arrive,
/// so an interrupted run only loses the zones still in flight. records are
/// collected in submission order.
fn fit_all(
    zones: Vec<Zone>,
    cache: &mut ZoneCache<Boundary>,
    algorithm: &BoundaryAlgorithm,
) -> Result<Vec<Zone>, ZoneCliError> {
    if zones.is_empty() {
        return Ok(Vec::new());
    }
    let total = zones.len();
    let mut bar = Bar::builder()
        .desc("fit boundaries")
        .total(total)
        .build()
        .map_err(ZoneCliError::InternalError)?;

    let (sender, receiver) = mpsc::channel();
    let algorithm = algorithm.clone();
    let worker = std::thread::spawn(move || {
        zones
            .into_par_iter()
            .enumerate()
            .for_each_with(sender, |s, (index, zone)| {
                let result = fit_zone(zone, &algorithm);
                // a hangup means the orchestrator already failed
                let _ = s.send((index, result));
            });
    });

    let mut fitted: Vec<Option<Zone>> = (0..total).map(|_| None).collect();
    let mut failure: Option<ZoneCliError> = None;
    for (index, result) in receiver {
        match result {
            Err(e) => {
                if failure.is_none() {
                    failure = Some(e.into());
                }
            }
            Ok(zone) => {
                let _ = bar.update(1);
                if failure.is_none() {
                    if let Err(e) = cache.upsert(&zone) {
                        failure = Some(e.into());
                    }
                }
                fitted[index] = Some(zone);
            }
        }
    }
    worker.join().map_err(|_| {
        ZoneCliError::InternalError(String::from("boundary fitting worker panicked"))
    })?;
    eprintln!();
    if let Some(e) = failure {
        return Err(e);
    }
    Ok(fitted.into_iter().flatten().collect())
}
