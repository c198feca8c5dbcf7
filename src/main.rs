use std::path::PathBuf;
use waterline::config::WaveConfig;
use waterline::render;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let frames: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(60);
    let width: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1024);
    let height: usize = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(1024);
    let fps: f32 = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(30.0);
    let extent: f32 = args.get(5).and_then(|s| s.parse().ok()).unwrap_or(4.0);
    let seed: u32 = args.get(6).and_then(|s| s.parse().ok()).unwrap_or(0);
    let out_dir: PathBuf = args
        .get(7)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("frames"));

    std::fs::create_dir_all(&out_dir).expect("failed to create output directory");

    let cfg = WaveConfig {
        seed,
        ..WaveConfig::default()
    };
    let dt = 1.0 / fps;

    eprintln!(
        "Rendering {} frames at {}x{}, {} fps, extent={}, seed={}",
        frames, width, height, fps, extent, seed
    );

    let save = |name: &str, rgba: &[u8]| {
        let path = out_dir.join(name);
        image::save_buffer(&path, rgba, width as u32, height as u32, image::ColorType::Rgba8)
            .expect("failed to save image");
    };

    let mut total_ms = 0.0;
    for i in 0..frames {
        let t = i as f32 * dt;
        let (frame, timings) = waterline::render_frame(t, width, height, extent, &cfg);

        save(&format!("frame_{:04}.png", i), &frame.rgba);

        let ms = timings
            .iter()
            .find(|e| e.name == "TOTAL")
            .map(|e| e.ms)
            .unwrap_or(0.0);
        total_ms += ms;
        eprintln!("  frame {:4}  t={:7.3}s  {:8.1} ms", i, t, ms);
    }

    // Heightmap diagnostic for the final frame
    let t = frames.saturating_sub(1) as f32 * dt;
    let (frame, _) = waterline::render_frame(t, width, height, extent, &cfg);
    save("heightmap.png", &render::render_heightmap(&frame.elevation));

    eprintln!(
        "\nDone: {} frames in {:.1} ms ({:.1} ms/frame) -> {}",
        frames,
        total_ms,
        total_ms / frames.max(1) as f64,
        out_dir.display()
    );
}
