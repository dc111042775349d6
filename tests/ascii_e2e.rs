//! End-to-end tests for image to glyph conversion.
//!
//! These run the full pipeline (plan, Lanczos resample, map, assemble) and
//! the file-based driver on synthetic images.

use glyphcast::ascii::{
    convert, decode, load, Cell, ConvertOptions, PixelColor, VerticalCompression, DENSEST_GLYPH,
    GLYPH_RAMP, LIGHTEST_GLYPH,
};
use glyphcast::cli::{convert_file, Settings};
use glyphcast::error::ConvertError;
use glyphcast::render::OutputFormat;
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

/// Helper to create a test image with the given pattern.
fn make_test_image(pattern: &str, width: u32, height: u32) -> RgbaImage {
    match pattern {
        "gradient_h" => RgbaImage::from_fn(width, height, |x, _| {
            let v = ((x as f32 / (width - 1) as f32) * 255.0) as u8;
            Rgba([v, v, v, 255])
        }),
        "checkerboard" => RgbaImage::from_fn(width, height, |x, y| {
            let v = if (x / 8 + y / 8) % 2 == 0 { 0 } else { 255 };
            Rgba([v, v, v, 255])
        }),
        "colorful" => RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x + y) * 3 % 256) as u8, 255])
        }),
        "black" => RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255])),
        "white" => RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])),
        _ => panic!("Unknown pattern: {}", pattern),
    }
}

fn options(columns: i64, brightness: f64) -> ConvertOptions {
    ConvertOptions {
        columns,
        brightness,
        compression: VerticalCompression::Standard,
    }
}

fn glyph_index(glyph: char) -> usize {
    GLYPH_RAMP.iter().position(|&g| g == glyph).unwrap()
}

// ==================== Scenario Tests ====================

#[test]
fn test_black_2x2_source() {
    let img = make_test_image("black", 2, 2);
    let result = convert(&img, &options(2, 1.0)).unwrap();

    // 2 / 1.5 = 1.33 -> one row of two cells
    assert_eq!(result.len(), 2 + 1);
    assert_eq!(result.row_count(), 1);
    for unit in result.cells().iter().filter_map(Cell::as_pixel) {
        assert_eq!(unit.glyph, LIGHTEST_GLYPH);
        assert_eq!(unit.color, PixelColor::WHITE);
    }
}

#[test]
fn test_white_2x2_source() {
    let img = make_test_image("white", 2, 2);
    let result = convert(&img, &options(2, 1.0)).unwrap();
    for unit in result.cells().iter().filter_map(Cell::as_pixel) {
        assert_eq!(unit.glyph, DENSEST_GLYPH);
        assert!(unit.color.r >= 254 && unit.color.g >= 254 && unit.color.b >= 254);
    }
}

#[test]
fn test_zero_brightness_blanks_everything() {
    let img = make_test_image("colorful", 120, 90);
    let result = convert(&img, &options(30, 0.0)).unwrap();
    for unit in result.cells().iter().filter_map(Cell::as_pixel) {
        assert_eq!(unit.glyph, LIGHTEST_GLYPH);
        assert_eq!(unit.color, PixelColor::WHITE);
    }
}

// ==================== Invariant Tests ====================

#[test]
fn test_output_length_and_row_boundaries() {
    let img = make_test_image("colorful", 320, 200);
    for columns in [3, 7, 40, 333] {
        let result = convert(&img, &options(columns, 1.0)).unwrap();
        let width = columns as usize;
        let height = result.row_count();
        assert!(height > 0);
        assert_eq!(result.len(), width * height + height);

        let mut run = 0;
        for cell in result.cells() {
            if cell.is_row_end() {
                assert_eq!(run, width);
                run = 0;
            } else {
                run += 1;
            }
        }
        assert_eq!(run, 0);
    }
}

#[test]
fn test_terminal_compression_halves_rows() {
    let img = make_test_image("colorful", 300, 300);
    let standard = convert(&img, &options(60, 1.0)).unwrap();
    let terminal = convert(
        &img,
        &ConvertOptions {
            compression: VerticalCompression::Terminal,
            ..options(60, 1.0)
        },
    )
    .unwrap();
    assert_eq!(standard.row_count(), 40);
    assert_eq!(terminal.row_count(), 20);
}

#[test]
fn test_columns_are_clamped() {
    let wide = make_test_image("colorful", 1200, 600);
    let result = convert(&wide, &options(5000, 1.0)).unwrap();
    let first_row = result.rows().next().unwrap();
    assert_eq!(first_row.len(), 1000);

    let tall = make_test_image("colorful", 100, 1000);
    let result = convert(&tall, &options(-4, 1.0)).unwrap();
    let first_row = result.rows().next().unwrap();
    assert_eq!(first_row.len(), 1);
}

#[test]
fn test_white_override_invariant() {
    for pattern in ["checkerboard", "colorful", "gradient_h"] {
        let img = make_test_image(pattern, 160, 120);
        for brightness in [0.2, 1.0, 3.0] {
            let result = convert(&img, &options(50, brightness)).unwrap();
            for unit in result.cells().iter().filter_map(Cell::as_pixel) {
                if unit.glyph == LIGHTEST_GLYPH {
                    assert_eq!(unit.color, PixelColor::WHITE);
                }
            }
        }
    }
}

#[test]
fn test_sentinels_are_black() {
    let img = make_test_image("white", 30, 30);
    let result = convert(&img, &options(10, 1.0)).unwrap();
    for cell in result.cells().iter().filter(|c| c.is_row_end()) {
        assert_eq!(cell.color(), PixelColor::BLACK);
    }
}

#[test]
fn test_gradient_gets_denser_to_the_right() {
    let img = make_test_image("gradient_h", 400, 100);
    let result = convert(&img, &options(40, 1.0)).unwrap();
    for row in result.rows() {
        let left = glyph_index(row[0].glyph);
        let right = glyph_index(row[row.len() - 1].glyph);
        assert!(left < 5, "left edge index {}", left);
        assert!(right > 60, "right edge index {}", right);
    }
}

#[test]
fn test_determinism() {
    let img = make_test_image("checkerboard", 257, 131);
    let a = convert(&img, &options(77, 1.3)).unwrap();
    let b = convert(&img, &options(77, 1.3)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_concurrent_conversions_match() {
    let img = Arc::new(make_test_image("colorful", 200, 150));
    let expected = convert(&img, &options(50, 1.1)).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let img = Arc::clone(&img);
            thread::spawn(move || convert(&img, &options(50, 1.1)).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// ==================== Error Tests ====================

#[test]
fn test_too_wide_source_fails_without_output() {
    let img = make_test_image("white", 900, 2);
    let err = convert(&img, &options(10, 1.0)).unwrap_err();
    assert!(matches!(err, ConvertError::Resample { height: 0, .. }));
}

#[test]
fn test_decode_garbage_fails() {
    assert!(matches!(decode(&[0u8; 16]), Err(ConvertError::Decode(_))));
}

#[test]
fn test_load_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = load(&temp_dir.path().join("nope.png"));
    assert!(result.is_err());
}

// ==================== File Driver Tests ====================

#[test]
fn test_decode_png_from_memory() {
    let img = make_test_image("gradient_h", 64, 32);
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();

    let bitmap = decode(&bytes).unwrap();
    assert_eq!(bitmap, img);
}

#[test]
fn test_convert_png_file_to_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("input.png");
    make_test_image("checkerboard", 90, 60).save(&path).unwrap();

    let settings = Settings {
        options: options(30, 1.0),
        format: OutputFormat::Json,
    };
    let json = convert_file(&path, &settings).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();

    // 30 / 1.5 * 60 / 90 = 13.33 -> 13 rows
    assert_eq!(records.len(), 30 * 13 + 13);
    let sentinels = records.iter().filter(|r| r["glyph"] == "enter").count();
    assert_eq!(sentinels, 13);
    assert_eq!(records[30]["glyph"], "enter");
    for record in &records {
        assert!(record["glyph"].is_string());
        for channel in ["r", "g", "b"] {
            let v = record["color"][channel].as_u64().unwrap();
            assert!(v <= 255);
        }
    }
}

#[test]
fn test_convert_jpeg_file_to_text() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("input.jpg");
    RgbImage::from_pixel(48, 48, Rgb([128, 128, 128]))
        .save(&path)
        .unwrap();

    let settings = Settings {
        options: options(12, 1.0),
        format: OutputFormat::Text,
    };
    let text = convert_file(&path, &settings).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    // 12 / 1.5 = 8 rows
    assert_eq!(lines.len(), 8);
    assert!(lines.iter().all(|l| l.chars().count() == 12));
}

#[test]
fn test_convert_file_to_ansi() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("input.png");
    make_test_image("white", 30, 30).save(&path).unwrap();

    let settings = Settings {
        options: options(6, 1.0),
        format: OutputFormat::Ansi,
    };
    let ansi = convert_file(&path, &settings).unwrap();
    assert_eq!(ansi.matches("\x1b[0m\n").count(), 4);
    assert!(ansi.contains(DENSEST_GLYPH));
}
