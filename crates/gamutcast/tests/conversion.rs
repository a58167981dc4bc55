#![allow(clippy::missing_assert_message)]

use gamutcast::error::ColorFormatError;
use gamutcast::opt::Options;
use gamutcast::{
    map_to_gamut, sniff_notation, Color, ColorModel, ConversionResult, Converter, Float, Gamut,
    GamutDetector, OutputNotation,
};

fn texts(results: &[ConversionResult]) -> Vec<&str> {
    results.iter().map(ConversionResult::rendered_text).collect()
}

#[test]
fn oklch_orange() -> Result<(), ColorFormatError> {
    let converter = Converter::new();
    let conversion = converter.convert("oklch(74.32% 0.2194 51.36)")?;
    assert_eq!(conversion.input_notation(), OutputNotation::Oklch);

    assert_eq!(
        texts(conversion.results()),
        vec![
            "rgb(255, 126, 0)",
            "#FF7E00",
            "#FF7E00FF",
            "hsl(29.54 100% 50%)",
            "color(display-p3 1.0000 0.5020 0.0004)",
            "oklch(74.32% 0.2194 51.36)",
            "oklab(74.32% 0.14 0.2)",
            "vec(1.17626, 0.18291, -0.03657, 1.00000)",
            "Figma P3 #FF8000FF",
        ]
    );

    for result in conversion.results() {
        assert_eq!(result.gamut(), Gamut::P3);
        assert_eq!(result.fallback_space(), Gamut::Srgb);
        assert_eq!(result.preview_hex(), "#FF7E00");
        assert!(!result.warnings().used_fallback);
        assert!(!result.warnings().out_of_gamut);
    }
    Ok(())
}

#[test]
fn figma_orange() -> Result<(), ColorFormatError> {
    let converter = Converter::new();

    for text in ["Figma P3 #FF8000FF", "FF8000FF", "  figma p3 #ff8000ff  "] {
        let conversion = converter.convert(text)?;
        assert_eq!(conversion.input_notation(), OutputNotation::FigmaP3);
        assert_eq!(conversion.color().model(), ColorModel::P3);

        let rendered = texts(conversion.results());
        assert_eq!(rendered[0], "rgb(255, 126, 0)");
        assert_eq!(rendered[1], "#FF7E00");
        assert_eq!(rendered[3], "hsl(29.54 100% 50%)");
        assert_eq!(rendered[4], "color(display-p3 1.0000 0.5020 0.0000)");
        assert_eq!(rendered[5], "oklch(74.32% 0.2194 51.36)");
        assert_eq!(rendered[7], "vec(1.17638, 0.18288, -0.03661, 1.00000)");
        assert_eq!(rendered[8], "Figma P3 #FF8000FF");
    }

    // All three spellings are the same color and share one cache entry.
    assert_eq!(converter.detector().cache_len(), 1);
    assert_eq!(converter.detector().cache_hits(), 2);
    Ok(())
}

#[test]
fn hashed_eight_digits_stay_srgb() -> Result<(), ColorFormatError> {
    let converter = Converter::new();
    let conversion = converter.convert("#FF800080")?;
    assert_eq!(conversion.input_notation(), OutputNotation::HexAlpha);
    assert_eq!(conversion.color().model(), ColorModel::Rgb);

    let rendered = texts(conversion.results());
    assert_eq!(rendered[0], "rgb(255, 128, 0 / 0.502)");
    assert_eq!(rendered[2], "#FF800080");
    assert_eq!(conversion.results()[0].preview_hex(), "#FF800080");
    Ok(())
}

#[test]
fn white() {
    let converter = Converter::new();
    let results = converter.convert_all("oklch(100% 0 0)");

    assert_eq!(results.len(), 9);
    for result in &results {
        assert_eq!(result.gamut(), Gamut::Srgb);
        assert_eq!(result.preview_hex(), "#FFFFFF");
    }
    assert_eq!(results[1].rendered_text(), "#FFFFFF");
    assert_eq!(results[5].rendered_text(), "oklch(100% 0 0)");
    assert_eq!(results[8].rendered_text(), "Figma P3 #FFFFFFFF");
}

#[test]
fn not_a_color() {
    let converter = Converter::with_options(Options::with_log());
    for text in ["not-a-color", "", "#12", "rgb(1, 2)", "oklch(1 2 3", "vec(x, 0, 0)"] {
        assert!(converter.convert_all(text).is_empty(), "{:?}", text);
        assert!(converter.convert(text).is_err());
    }
    assert_eq!(converter.take_log().len(), 12);
}

#[test]
fn far_out_of_p3() {
    let converter = Converter::new();
    for text in ["oklch(70% 0.8 150)", "color(xyz 2 0.2 0)", "oklab(50% -0.4 -0.4)"] {
        let results = converter.convert_all(text);
        assert_eq!(results.len(), 9);

        for result in &results {
            assert_eq!(result.gamut(), Gamut::Out, "{} {}", text, result.notation());
            assert!(result.warnings().out_of_gamut);
            assert_eq!(
                result.warnings().used_fallback,
                result.notation().is_srgb_native()
            );
            assert!(!result.is_degraded());
        }
    }
}

#[test]
fn rgb_round_trip() {
    let converter = Converter::with_options(
        Options::builder()
            .notations([OutputNotation::Rgb])
            .build(),
    );

    for [r, g, b] in [[0, 0, 0], [255, 255, 255], [0, 128, 128], [215, 40, 39], [1, 2, 254]] {
        let text = format!("rgb({}, {}, {})", r, g, b);
        let results = converter.convert_all(&text);
        assert_eq!(texts(&results), vec![text.as_str()]);
        assert_eq!(results[0].gamut(), Gamut::Srgb);
    }
}

#[test]
fn srgb_reports_stay_in_range() -> Result<(), ColorFormatError> {
    let detector = GamutDetector::new();
    for text in ["#000", "#fff", "hsl(200 50% 50%)", "oklch(0.5 0.1 250)", "rgb(100% 0% 0%)"] {
        let color: Color = text.parse()?;
        let report = detector.detect(&color);
        assert_eq!(report.original_space(), Gamut::Srgb, "{}", text);

        let rgb = report.rgb_projection();
        assert!(rgb.is_some(), "{}", text);
        for c in rgb.map(|c| c.coordinates()).unwrap_or_default() {
            assert!((-1e-6..=1.0 + 1e-6).contains(&c), "{} {}", text, c);
        }
    }
    Ok(())
}

#[test]
fn achromatic_hsl() -> Result<(), ColorFormatError> {
    let converter = Converter::with_options(
        Options::builder()
            .notations([OutputNotation::Hsl])
            .build(),
    );

    for text in [
        "#ffffff",
        "#FFF",
        "rgb(255, 255, 255)",
        "hsl(0 0% 100%)",
        "color(display-p3 1 1 1)",
        "Figma P3 #FFFFFFFF",
        "oklch(100% 0 0)",
    ] {
        let conversion = converter.convert(text)?;
        assert_eq!(texts(conversion.results()), vec!["hsl(0 0% 100%)"], "{}", text);
    }

    for text in ["#808080", "oklch(50% 0 0)", "oklab(50% 0 0)", "color(display-p3 0.5 0.5 0.5)"] {
        let conversion = converter.convert(text)?;
        let rendered = texts(conversion.results());
        assert!(rendered[0].starts_with("hsl(0 0% "), "{} {}", text, rendered[0]);
    }
    Ok(())
}

#[test]
fn unbounded_lightness_survives() -> Result<(), ColorFormatError> {
    let converter = Converter::new();

    let conversion = converter.convert("oklch(150% 0 0)")?;
    let rendered = texts(conversion.results());
    assert_eq!(rendered[5], "oklch(150% 0 0)");
    assert_eq!(rendered[1], "#FFFFFF");
    for result in conversion.results() {
        assert_eq!(result.gamut(), Gamut::Out);
        assert!(result.warnings().out_of_gamut);
    }

    let conversion = converter.convert("oklab(120% 0 0)")?;
    assert_eq!(texts(conversion.results())[6], "oklab(120% 0 0)");

    // Out-of-range lightness keeps colors apart.
    assert_ne!(
        "oklch(150% 0 0)".parse::<Color>()?,
        "oklch(100% 0 0)".parse::<Color>()?
    );
    assert_eq!(converter.detector().cache_len(), 2);
    Ok(())
}

fn hue_distance(h1: Float, h2: Float) -> Float {
    let d = (h1 - h2).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[test]
fn mapping_preserves_lightness_and_hue() {
    for color in [
        Color::oklch(0.7, 0.4, 30.0),
        Color::oklch(0.6, 0.35, 260.0),
        Color::oklch(0.8, 0.3, 140.0),
        Color::oklch(0.7, 0.8, 150.0),
        Color::p3(0.0, 1.0, 0.0),
    ] {
        let original = color.to(ColorModel::Oklch);
        let mapped = map_to_gamut(&color);
        assert_eq!(mapped.model(), ColorModel::Rgb);
        assert!(mapped.in_gamut());

        let [l1, c1, h1] = original.coordinates();
        let [l2, c2, h2] = mapped.to(ColorModel::Oklch).coordinates();
        assert!(c2 <= c1 + 1e-6, "{} {}", c1, c2);
        assert!((l1 - l2).abs() < 0.02, "{} {}", l1, l2);
        if c2 > 0.1 {
            assert!(hue_distance(h1, h2) < 12.0, "{} {}", h1, h2);
        }
    }
}

#[test]
fn alpha_carries_through() {
    let converter = Converter::new();
    let results = converter.convert_all("oklch(74.32% 0.2194 51.36 / 50%)");
    let rendered = texts(&results);

    assert_eq!(rendered[0], "rgb(255, 126, 0 / 0.500)");
    assert_eq!(rendered[1], "#FF7E00");
    assert_eq!(rendered[2], "#FF7E0080");
    assert_eq!(rendered[5], "oklch(74.32% 0.2194 51.36 / 0.500)");
    assert_eq!(rendered[7], "vec(1.17626, 0.18291, -0.03657, 0.50000)");
    assert_eq!(rendered[8], "Figma P3 #FF800080");
    assert!(results.iter().all(|r| r.preview_hex() == "#FF7E0080"));
}

#[test]
fn sniffing_is_advisory() {
    assert_eq!(sniff_notation("rgb(nope)"), OutputNotation::Rgb);
    assert_eq!(sniff_notation("\tVEC(1, 0, 0)"), OutputNotation::LinearRgb);
    assert_eq!(sniff_notation("hsla(0, 0%, 0%, 0.5)"), OutputNotation::Hsl);
}

#[test]
fn shared_converter() {
    let converter = std::sync::Arc::new(Converter::new());
    let handles: Vec<_> = ["#f00", "#0f0", "#00f", "#f00"]
        .into_iter()
        .map(|text| {
            let converter = std::sync::Arc::clone(&converter);
            std::thread::spawn(move || converter.convert_all(text).len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().ok(), Some(9));
    }
    assert_eq!(converter.detector().cache_len(), 3);
}
