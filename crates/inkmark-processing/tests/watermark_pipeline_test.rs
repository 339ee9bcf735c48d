//! End-to-end watermarking pipeline tests: PNG bytes in, encoded preview out.

use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};
use inkmark_core::{WatermarkConfig, WatermarkPosition};
use inkmark_processing::{OutputFormat, WatermarkPreview};
use std::io::Cursor;

fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color)));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .unwrap();
    buffer
}

#[test]
fn watermarked_preview_keeps_base_dimensions() {
    let base = png_bytes(200, 160, [240, 240, 240, 255]);
    let logo = png_bytes(50, 25, [0, 0, 0, 255]);
    let config = WatermarkConfig {
        enabled: true,
        logo_url: Some("logos/mark.png".to_string()),
        opacity: 0.8,
        position: WatermarkPosition::BottomRight,
        size_percent: 25.0,
    };

    let (out, content_type) =
        WatermarkPreview::render(&base, Some(&logo), &config, OutputFormat::Jpeg).unwrap();
    assert_eq!(content_type, "image/jpeg");

    let decoded = image::load_from_memory(&out).unwrap();
    assert_eq!(decoded.dimensions(), (200, 160));
}

#[test]
fn watermark_darkens_the_anchored_corner_only() {
    let base = png_bytes(200, 200, [250, 250, 250, 255]);
    let logo = png_bytes(40, 40, [0, 0, 0, 255]);
    let config = WatermarkConfig {
        enabled: true,
        logo_url: Some("logos/mark.png".to_string()),
        opacity: 1.0,
        position: WatermarkPosition::TopLeft,
        size_percent: 20.0,
    };

    // 20% of 200 = 40px logo drawn at (20, 20) with a 20px margin.
    let (out, _) =
        WatermarkPreview::render(&base, Some(&logo), &config, OutputFormat::Png).unwrap();
    let decoded = image::load_from_memory(&out).unwrap().to_rgba8();

    let inside = decoded.get_pixel(40, 40);
    let outside = decoded.get_pixel(150, 150);
    assert!(inside[0] < 50, "logo area should be dark, got {:?}", inside);
    assert!(
        outside[0] > 200,
        "area outside the logo should stay light, got {:?}",
        outside
    );
}

#[test]
fn disabled_config_round_trips_bytes_unchanged() {
    let base = png_bytes(64, 64, [10, 120, 230, 255]);
    let logo = png_bytes(16, 16, [0, 0, 0, 255]);
    let config = WatermarkConfig {
        enabled: false,
        ..WatermarkConfig::default()
    };

    let (out, content_type) =
        WatermarkPreview::render(&base, Some(&logo), &config, OutputFormat::Jpeg).unwrap();
    assert_eq!(out.as_ref(), base.as_slice());
    assert_eq!(content_type, "image/png");
}

#[test]
fn oversized_watermark_still_renders() {
    let base = png_bytes(64, 64, [255, 255, 255, 255]);
    let logo = png_bytes(32, 32, [0, 0, 0, 255]);
    let config = WatermarkConfig {
        enabled: true,
        logo_url: Some("logos/mark.png".to_string()),
        opacity: 0.5,
        position: WatermarkPosition::BottomRight,
        size_percent: 150.0,
    };

    // Pathological size pushes the logo off-canvas; the draw clips and the
    // call still succeeds at the base dimensions.
    let (out, _) =
        WatermarkPreview::render(&base, Some(&logo), &config, OutputFormat::Png).unwrap();
    let decoded = image::load_from_memory(&out).unwrap();
    assert_eq!(decoded.dimensions(), (64, 64));
}
