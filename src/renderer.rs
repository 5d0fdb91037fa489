use crate::configuration::RenderSettings;
use crate::error::RenderError;
use crate::objects::Hittable;
use crate::pixel::Pixel;
use crate::rtweekend::{random_in_unit_interval, seed_rng};
use crate::vec3::to_byte;
use crate::scene::Background;
use crate::{Color, Ray, Scene};
use log::{debug, info};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One axis-aligned chunk of the image, clipped to the image bounds. `x1`/`y1` are exclusive.
#[derive(Debug, Clone, Copy)]
struct Tile {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

/// Partitions the image into `bucket_size`-wide tiles, reversing the x order on odd tile-rows
/// (boustrophedon) so the pixel stream sweeps back and forth across the image rather than
/// always snapping back to the left edge.
fn generate_tiles(width: u32, height: u32, bucket_size: u32) -> Vec<Tile> {
    let mut tiles = Vec::new();
    let mut tile_row = 0u32;
    let mut y0 = 0u32;

    while y0 < height {
        let y1 = (y0 + bucket_size).min(height);
        let mut row_tiles = Vec::new();
        let mut x0 = 0u32;

        while x0 < width {
            let x1 = (x0 + bucket_size).min(width);
            row_tiles.push(Tile { x0, y0, x1, y1 });
            x0 += bucket_size;
        }

        if tile_row % 2 == 1 {
            row_tiles.reverse();
        }
        tiles.extend(row_tiles);

        y0 += bucket_size;
        tile_row += 1;
    }

    tiles
}

/// Render a scene, streaming resolved pixels to `pixel_sink` as they complete. Returns once
/// every pixel in the `width x height` image has been produced and the sink has been closed.
///
/// `workers` must be at least 1; `bucket_size` and `samples` must be at least 1.
pub fn render(
    settings: &RenderSettings,
    scene: Scene,
    pixel_sink: SyncSender<Pixel>,
) -> Result<(), RenderError> {
    if settings.workers == 0 {
        return Err(RenderError::InvalidWorkerCount(settings.workers));
    }

    let Scene {
        world,
        camera,
        background,
    } = scene;
    let world: Arc<dyn Hittable> = Arc::new(world);

    let width = settings.width;
    let height = settings.height;
    let samples = settings.samples;
    let bucket_size = settings.bucket_size.max(1);

    let tiles = generate_tiles(width, height, bucket_size);
    let tile_count = tiles.len();
    debug!(
        "partitioned {}x{} image into {} tiles of side {}",
        width, height, tile_count, bucket_size
    );

    let (tile_tx, tile_rx) = sync_channel::<Tile>(tile_count.max(1));
    for tile in tiles {
        tile_tx
            .send(tile)
            .expect("tile queue receiver dropped before all tiles were enqueued");
    }
    drop(tile_tx);
    let tile_rx = Arc::new(Mutex::new(tile_rx));

    let total_ops = width as u64 * height as u64 * samples as u64;
    let ops_done = Arc::new(AtomicU64::new(0));

    let progress_done = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let progress_handle = {
        let ops_done = ops_done.clone();
        let progress_done = progress_done.clone();
        std::thread::spawn(move || {
            while !progress_done.load(Ordering::Relaxed) {
                std::thread::sleep(Duration::from_secs(1));
                let done = ops_done.load(Ordering::Relaxed);
                info!(
                    "progress: {:.1}%",
                    100.0 * done as f64 / total_ops.max(1) as f64
                );
            }
        })
    };

    let worker_handles: Vec<_> = (0..settings.workers)
        .map(|worker_index| {
            let tile_rx: Arc<Mutex<Receiver<Tile>>> = tile_rx.clone();
            let world = world.clone();
            let ops_done = ops_done.clone();
            let pixel_sink = pixel_sink.clone();
            let camera = camera.clone();

            std::thread::spawn(move || {
                render_worker(
                    worker_index,
                    tile_rx,
                    world,
                    &camera,
                    background,
                    width,
                    height,
                    samples,
                    &ops_done,
                    &pixel_sink,
                );
            })
        })
        .collect();

    for handle in worker_handles {
        handle
            .join()
            .expect("render worker thread panicked");
    }

    progress_done.store(true, Ordering::Relaxed);
    progress_handle
        .join()
        .expect("progress reporter thread panicked");
    info!("render complete: {} pixels, {} samples/pixel", width as u64 * height as u64, samples);

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn render_worker(
    worker_index: usize,
    tile_rx: Arc<Mutex<Receiver<Tile>>>,
    world: Arc<dyn Hittable>,
    camera: &crate::Camera,
    background: Background,
    width: u32,
    height: u32,
    samples: u32,
    ops_done: &AtomicU64,
    pixel_sink: &SyncSender<Pixel>,
) {
    // Each worker thread owns a deterministic, reseeded RNG stream keyed by its index: no
    // contention with other workers, and reproducible independent of scheduling.
    seed_rng(worker_index as u64);

    loop {
        let tile = {
            let rx = tile_rx.lock().expect("tile queue mutex poisoned");
            rx.recv()
        };
        let tile = match tile {
            Ok(tile) => tile,
            Err(_) => break,
        };

        for y in tile.y0..tile.y1 {
            for x in tile.x0..tile.x1 {
                let mut pixel_color = Color::new(0.0, 0.0, 0.0);
                for _ in 0..samples {
                    let u = (x as f64 + random_in_unit_interval()) / (width - 1).max(1) as f64;
                    let v = (height as f64 - 1.0 - y as f64 + random_in_unit_interval())
                        / (height - 1).max(1) as f64;
                    let r = camera.get_ray(u, v);
                    pixel_color += ray_color(&r, &background, &world, 0);
                }

                let scale = 1.0 / samples as f64;
                let pixel = Pixel::new(
                    x,
                    y,
                    to_byte(pixel_color.x() * scale),
                    to_byte(pixel_color.y() * scale),
                    to_byte(pixel_color.z() * scale),
                );

                ops_done.fetch_add(samples as u64, Ordering::Relaxed);
                if pixel_sink.send(pixel).is_err() {
                    // Consumer hung up; keep computing so ops_done stays accurate, but there's
                    // no one left to deliver pixels to.
                }
            }
        }
    }
}

const MAX_DEPTH: u32 = 50;

/// Recursive backward path tracer: at each bounce, add the surface's emission to the
/// attenuated color gathered from the scattered ray, stopping at `MAX_DEPTH` bounces or when
/// the ray escapes to the background.
fn ray_color(r: &Ray, background: &Background, world: &Arc<dyn Hittable>, depth: u32) -> Color {
    if depth >= MAX_DEPTH {
        return Color::new(0.0, 0.0, 0.0);
    }

    match world.hit(r, 0.001, crate::utils::INFINITY) {
        Some(hit_rec) => {
            let emitted = hit_rec.mat.emitted(hit_rec.u, hit_rec.v, &hit_rec.p);
            match hit_rec.mat.scatter(r, &hit_rec) {
                Some((scattered, attenuation)) => {
                    emitted + attenuation * ray_color(&scattered, background, world, depth + 1)
                }
                None => emitted,
            }
        }
        None => background.sample(r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiling_covers_every_pixel_exactly_once() {
        let tiles = generate_tiles(100, 64, 32);
        let mut covered = vec![0u32; (100 * 64) as usize];
        for tile in &tiles {
            for y in tile.y0..tile.y1 {
                for x in tile.x0..tile.x1 {
                    covered[(y * 100 + x) as usize] += 1;
                }
            }
        }
        assert!(covered.iter().all(|&c| c == 1));
    }

    #[test]
    fn odd_tile_rows_are_reversed() {
        let tiles = generate_tiles(96, 64, 32);
        // Row 0: 3 tiles left-to-right. Row 1: reversed.
        let row1: Vec<_> = tiles[3..6].iter().map(|t| t.x0).collect();
        assert_eq!(row1, vec![64, 32, 0]);
    }
}
