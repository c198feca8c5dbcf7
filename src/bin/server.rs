use std::net::SocketAddr;

use axum::{Json, Router, routing::post};
use base64::Engine;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use waterline::config::WaveConfig;
use waterline::render;

#[derive(Deserialize)]
struct FrameRequest {
    time: Option<f32>,
    width: Option<usize>,
    height: Option<usize>,
    extent: Option<f32>,
    seed: Option<u32>,
    // Primary swell
    big_wave_elevation: Option<f32>,
    big_wave_frequency_x: Option<f32>,
    big_wave_frequency_y: Option<f32>,
    big_wave_speed: Option<f32>,
    // Ripples
    small_wave_elevation: Option<f32>,
    small_wave_speed: Option<f32>,
    // Depth gradient
    elevation_multiplier: Option<f32>,
    depth_color: Option<[f32; 3]>,
    surface_color: Option<[f32; 3]>,
    color_offset: Option<f32>,
    color_multiplier: Option<f32>,
}

impl FrameRequest {
    /// Fill unset fields from the defaults. Dimensions are clamped to at
    /// least 1x1 so a zero-size request still renders instead of panicking
    /// in the row-parallel passes.
    fn resolve(self) -> (f32, usize, usize, f32, WaveConfig) {
        let time = self.time.unwrap_or(0.0);
        let width = self.width.unwrap_or(512).max(1);
        let height = self.height.unwrap_or(512).max(1);
        let extent = self.extent.unwrap_or(4.0);

        let defaults = WaveConfig::default();
        let cfg = WaveConfig {
            big_wave_elevation: self
                .big_wave_elevation
                .unwrap_or(defaults.big_wave_elevation),
            big_wave_frequency: (
                self.big_wave_frequency_x
                    .unwrap_or(defaults.big_wave_frequency.0),
                self.big_wave_frequency_y
                    .unwrap_or(defaults.big_wave_frequency.1),
            ),
            big_wave_speed: self.big_wave_speed.unwrap_or(defaults.big_wave_speed),
            small_wave_elevation: self
                .small_wave_elevation
                .unwrap_or(defaults.small_wave_elevation),
            small_wave_speed: self.small_wave_speed.unwrap_or(defaults.small_wave_speed),
            elevation_multiplier: self
                .elevation_multiplier
                .unwrap_or(defaults.elevation_multiplier),
            depth_color: self.depth_color.unwrap_or(defaults.depth_color),
            surface_color: self.surface_color.unwrap_or(defaults.surface_color),
            color_offset: self.color_offset.unwrap_or(defaults.color_offset),
            color_multiplier: self.color_multiplier.unwrap_or(defaults.color_multiplier),
            seed: self.seed.unwrap_or(defaults.seed),
        };

        (time, width, height, extent, cfg)
    }
}

#[derive(Serialize)]
struct FrameResponse {
    layers: Vec<Layer>,
    timings: Vec<TimingEntry>,
    width: usize,
    height: usize,
    time: f32,
}

#[derive(Serialize)]
struct Layer {
    name: String,
    data_url: String,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

fn encode_png(rgba: &[u8], w: usize, h: usize) -> String {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    encoder
        .write_image(rgba, w as u32, h as u32, image::ExtendedColorType::Rgba8)
        .expect("PNG encode failed");
    let b64 = base64::engine::general_purpose::STANDARD.encode(&buf);
    format!("data:image/png;base64,{}", b64)
}

async fn frame_handler(Json(req): Json<FrameRequest>) -> Json<FrameResponse> {
    let (time, width, height, extent, cfg) = req.resolve();

    let response = tokio::task::spawn_blocking(move || {
        let (frame, timings) = waterline::render_frame(time, width, height, extent, &cfg);

        let layers = vec![
            Layer {
                name: "surface".into(),
                data_url: encode_png(&frame.rgba, width, height),
            },
            Layer {
                name: "heightmap".into(),
                data_url: encode_png(
                    &render::render_heightmap(&frame.elevation),
                    width,
                    height,
                ),
            },
        ];

        let timing_entries = timings
            .iter()
            .map(|t| TimingEntry {
                name: t.name.to_string(),
                ms: t.ms,
            })
            .collect();

        FrameResponse {
            layers,
            timings: timing_entries,
            width,
            height,
            time,
        }
    })
    .await
    .unwrap();

    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_request_is_clamped() {
        let req: FrameRequest =
            serde_json::from_str(r#"{"width": 0, "height": 0, "time": 1.0}"#).unwrap();
        let (time, width, height, _, _) = req.resolve();
        assert_eq!(time, 1.0);
        assert_eq!(width, 1);
        assert_eq!(height, 1);
    }

    #[test]
    fn empty_request_uses_defaults() {
        let req: FrameRequest = serde_json::from_str("{}").unwrap();
        let (time, width, height, extent, cfg) = req.resolve();
        assert_eq!(time, 0.0);
        assert_eq!((width, height), (512, 512));
        assert_eq!(extent, 4.0);
        assert_eq!(cfg.big_wave_elevation, WaveConfig::default().big_wave_elevation);
    }
}

#[tokio::main]
async fn main() {
    let frontend = ServeDir::new("frontend");

    let app = Router::new()
        .route("/api/frame", post(frame_handler))
        .fallback_service(frontend);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    eprintln!("waterline server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
