//! Shared glue for the demo binaries: load configuration, override the scene name, drive a
//! render to completion and save the result. None of this is part of the library - the core
//! only promises a scene, a `RenderSettings`, and a stream of `Pixel` records; encoding the
//! result to a file on disk is exactly the kind of external-collaborator concern the spec keeps
//! out of scope for the engine itself.
use image::RgbImage;
use indicatif::{ProgressBar, ProgressStyle};
use raytracer::{build_scene, load_configuration, render, Pixel};
use std::sync::mpsc::sync_channel;
use std::thread;
use timeit::timeit_loops;

/// Loads configuration, forces `scene_name`, renders it, and saves the accumulated image to
/// `output_path`. Prints elapsed wall-clock time to stderr, matching the book's habit of timing
/// each demo scene.
pub fn render_scene(scene_name: &str, output_path: &str) {
    env_logger::init();

    let time = timeit_loops!(1, {
        let mut settings = load_configuration().expect("could not read configuration");
        settings.scene = scene_name.to_string();
        settings.output_path = output_path.to_string();

        let scene = build_scene(&settings).expect("scene failed to build");

        let pb = ProgressBar::new(100);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {msg}",
            )
            .unwrap()
            .progress_chars("#>-"),
        );

        let width = settings.width;
        let height = settings.height;
        let (tx, rx) = sync_channel::<Pixel>(1024);

        let render_settings = settings.clone();
        let render_thread = thread::spawn(move || render(&render_settings, scene, tx));

        let mut image = RgbImage::new(width, height);
        let total_pixels = (width as u64 * height as u64).max(1);
        let mut received = 0u64;

        for pixel in rx {
            write_pixel(&mut image, &pixel);
            received += 1;
            if received % (total_pixels / 100).max(1) == 0 {
                pb.set_position(100 * received / total_pixels);
                pb.set_message(format!("{:.2}%", 100.0 * received as f64 / total_pixels as f64));
            }
        }

        render_thread
            .join()
            .expect("render thread panicked")
            .expect("render failed");

        pb.finish_with_message("done");

        image
            .save(output_path)
            .expect("unable to save rendered image");
    });
    eprintln!("{time} seconds to render {scene_name}");
}

fn write_pixel(image: &mut RgbImage, pixel: &Pixel) {
    if pixel.x < image.width() && pixel.y < image.height() {
        image.put_pixel(pixel.x, pixel.y, image::Rgb([pixel.r, pixel.g, pixel.b]));
    }
}
