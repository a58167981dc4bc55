use crate::core::{from_24bit, linear_rgb_to_rgb, ColorModel};
use crate::error::ColorFormatError;
use crate::Float;

/// A parsed color: its model, coordinates, and optional alpha.
pub(crate) type ParsedColor = (ColorModel, [Float; 3], Option<Float>);

/// Parse three, four, six, or eight hexadecimal digits. If successful, this
/// function returns the three coordinates as unsigned bytes plus an optional
/// alpha byte. It transparently handles single-digit coordinates.
fn parse_hex_digits(s: &str) -> Result<([u8; 3], Option<u8>), ColorFormatError> {
    let factor = match s.len() {
        3 | 4 => 1,
        6 | 8 => 2,
        _ => return Err(ColorFormatError::UnexpectedCharacters),
    };

    if !s.is_ascii() {
        return Err(ColorFormatError::UnexpectedCharacters);
    } else if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    let parse_coordinate = |index: usize| -> Result<u8, ColorFormatError> {
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    };

    let c1 = parse_coordinate(0)?;
    let c2 = parse_coordinate(1)?;
    let c3 = parse_coordinate(2)?;
    let alpha = if s.len() == 4 || s.len() == 8 {
        Some(parse_coordinate(3)?)
    } else {
        None
    };

    Ok(([c1, c2, c3], alpha))
}

/// Parse a color in hashed hexadecimal format.
fn parse_hashed(s: &str) -> Result<ParsedColor, ColorFormatError> {
    let digits = s.strip_prefix('#').ok_or(ColorFormatError::UnknownFormat)?;
    let ([r, g, b], alpha) = parse_hex_digits(digits)?;

    Ok((
        ColorModel::Rgb,
        from_24bit(r, g, b),
        alpha.map(|a| a as Float / 255.0),
    ))
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the trimmed, lowercase string is Figma's shorthand for
/// Display P3 colors, i.e., eight hexadecimal digits without leading hash.
pub(crate) fn is_figma_shorthand(s: &str) -> bool {
    s.len() == 8 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a color in Figma's Display P3 format, either `figma p3 #rrggbbaa` or
/// the bare `rrggbbaa` shorthand. The prefixed form also accepts six digits.
fn parse_figma(s: &str) -> Result<ParsedColor, ColorFormatError> {
    let digits = match s.strip_prefix("figma p3") {
        Some(rest) => {
            let digits = rest
                .trim_start()
                .strip_prefix('#')
                .ok_or(ColorFormatError::UnknownFormat)?;
            if digits.len() != 6 && digits.len() != 8 {
                return Err(ColorFormatError::UnexpectedCharacters);
            }
            digits
        }
        None => s,
    };

    let ([r, g, b], alpha) = parse_hex_digits(digits)?;
    Ok((
        ColorModel::P3,
        from_24bit(r, g, b),
        alpha.map(|a| a as Float / 255.0),
    ))
}

// --------------------------------------------------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Function {
    Rgb,
    Hsl,
    Oklch,
    Oklab,
    Color,
    Vec,
}

impl Function {
    /// Determine whether the function accepts alpha as fourth comma-separated
    /// argument.
    const fn is_legacy(&self) -> bool {
        matches!(*self, Self::Rgb | Self::Hsl | Self::Vec)
    }
}

const FUNCTIONS: [(&str, Function); 8] = [
    ("rgba", Function::Rgb),
    ("rgb", Function::Rgb),
    ("hsla", Function::Hsl),
    ("hsl", Function::Hsl),
    ("oklch", Function::Oklch),
    ("oklab", Function::Oklab),
    ("color", Function::Color),
    ("vec", Function::Vec),
];

const COLOR_SPACES: [(&str, ColorModel); 4] = [
    ("srgb", ColorModel::Rgb),
    ("display-p3", ColorModel::P3),
    ("xyz", ColorModel::Xyz),
    ("xyz-d65", ColorModel::Xyz),
];

/// Parse a coordinate. Plain numbers are divided by the first divisor,
/// percentages by the second. The keyword `none` denotes a missing component.
#[inline]
fn parse_coordinate(
    s: Option<&str>,
    number_divisor: Float,
    percent_divisor: Float,
) -> Result<Float, ColorFormatError> {
    let t = s.ok_or(ColorFormatError::MissingCoordinate)?;
    if t == "none" {
        return Ok(Float::NAN);
    }

    let (t, divisor) = match t.strip_suffix('%') {
        Some(t) => (t, percent_divisor),
        None => (t, number_divisor),
    };

    let n: Float = t.parse().map_err(|_| ColorFormatError::MalformedFloat)?;
    Ok(n / divisor)
}

/// Parse a hue in degrees, with or without the `deg` unit.
#[inline]
fn parse_hue(s: Option<&str>) -> Result<Float, ColorFormatError> {
    let t = s.ok_or(ColorFormatError::MissingCoordinate)?;
    if t == "none" {
        return Ok(Float::NAN);
    }

    t.strip_suffix("deg")
        .unwrap_or(t)
        .parse()
        .map_err(|_| ColorFormatError::MalformedFloat)
}

/// Parse an alpha value, which may be a number or percentage. The result is
/// clamped to unit range.
fn parse_alpha(s: &str) -> Result<Float, ColorFormatError> {
    let t = s.trim();
    let (t, divisor) = match t.strip_suffix('%') {
        Some(t) => (t, 100.0),
        None => (t, 1.0),
    };

    let n: Float = t.parse().map_err(|_| ColorFormatError::MalformedAlpha)?;
    if n.is_nan() {
        return Err(ColorFormatError::MalformedAlpha);
    }

    Ok((n / divisor).clamp(0.0, 1.0))
}

/// Parse a color in functional notation. This function recognizes `rgb()`,
/// `rgba()`, `hsl()`, `hsla()`, `oklch()`, `oklab()`, `color()`, and `vec()`.
/// Arguments may be separated by white space or commas. An optional alpha
/// follows after a slash or, for the legacy functions, as fourth argument.
fn parse_function(s: &str) -> Result<ParsedColor, ColorFormatError> {
    // Munge function name
    let (function, rest) = FUNCTIONS
        .iter()
        .find_map(|(p, f)| s.strip_prefix(p).map(|r| (*f, r)))
        .ok_or(ColorFormatError::UnknownFormat)?;

    // Munge parentheses after trimming leading whitespace
    let rest = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    let (body, slashed_alpha) = match rest.split_once('/') {
        Some((body, alpha)) => (body, Some(alpha)),
        None => (rest, None),
    };

    let mut iter = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    // Munge color space for color()
    let color_space = if function == Function::Color {
        let name = iter.next().ok_or(ColorFormatError::UnknownColorSpace)?;
        let model = COLOR_SPACES
            .iter()
            .find_map(|(n, m)| (*n == name).then_some(*m))
            .ok_or(ColorFormatError::UnknownColorSpace)?;
        Some(model)
    } else {
        None
    };

    let (model, coordinates) = match function {
        Function::Rgb => {
            let r = parse_coordinate(iter.next(), 255.0, 100.0)?;
            let g = parse_coordinate(iter.next(), 255.0, 100.0)?;
            let b = parse_coordinate(iter.next(), 255.0, 100.0)?;
            (ColorModel::Rgb, [r, g, b])
        }
        Function::Hsl => {
            let h = parse_hue(iter.next())?;
            let s = parse_coordinate(iter.next(), 100.0, 100.0)?;
            let l = parse_coordinate(iter.next(), 100.0, 100.0)?;
            (ColorModel::Hsl, [h, s, l])
        }
        Function::Oklch => {
            let l = parse_coordinate(iter.next(), 1.0, 100.0)?;
            let c = parse_coordinate(iter.next(), 1.0, 250.0)?;
            let h = parse_hue(iter.next())?;
            (ColorModel::Oklch, [l, c, h])
        }
        Function::Oklab => {
            let l = parse_coordinate(iter.next(), 1.0, 100.0)?;
            let a = parse_coordinate(iter.next(), 1.0, 250.0)?;
            let b = parse_coordinate(iter.next(), 1.0, 250.0)?;
            (ColorModel::Oklab, [l, a, b])
        }
        Function::Color => {
            let c1 = parse_coordinate(iter.next(), 1.0, 100.0)?;
            let c2 = parse_coordinate(iter.next(), 1.0, 100.0)?;
            let c3 = parse_coordinate(iter.next(), 1.0, 100.0)?;
            (color_space.unwrap_or(ColorModel::Rgb), [c1, c2, c3])
        }
        Function::Vec => {
            let r = parse_coordinate(iter.next(), 1.0, 100.0)?;
            let g = parse_coordinate(iter.next(), 1.0, 100.0)?;
            let b = parse_coordinate(iter.next(), 1.0, 100.0)?;
            (ColorModel::Rgb, linear_rgb_to_rgb(&[r, g, b]))
        }
    };

    let fourth = iter.next();
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    let alpha = match (slashed_alpha, fourth) {
        (Some(_), Some(_)) => return Err(ColorFormatError::TooManyCoordinates),
        (Some(a), None) => Some(parse_alpha(a)?),
        (None, Some(a)) if function.is_legacy() => Some(parse_alpha(a)?),
        (None, Some(_)) => return Err(ColorFormatError::TooManyCoordinates),
        (None, None) => None,
    };

    Ok((model, coordinates, alpha))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// This function recognizes hashed hexadecimal colors with three, four, six,
/// or eight digits, Figma's Display P3 format with and without the `Figma P3`
/// prefix, and the `rgb()`, `rgba()`, `hsl()`, `hsla()`, `oklch()`, `oklab()`,
/// `color()`, and `vec()` functions. Before trying to parse either of these
/// formats, this function trims leading and trailing white space and converts
/// ASCII letters to lowercase.
pub(crate) fn parse(s: &str) -> Result<ParsedColor, ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.is_empty() {
        Err(ColorFormatError::UnknownFormat)
    } else if s.starts_with("figma p3") || is_figma_shorthand(s) {
        parse_figma(s)
    } else if s.starts_with('#') {
        parse_hashed(s)
    } else {
        parse_function(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn css_prefix(model: ColorModel) -> &'static str {
    use ColorModel::*;
    match model {
        Rgb => "color(srgb ",
        Hsl => "hsl(",
        Oklch => "oklch(",
        Oklab => "oklab(",
        P3 => "color(display-p3 ",
        Xyz => "color(xyz ",
    }
}

fn write_number(f: &mut core::fmt::Formatter<'_>, value: Float, factor: Float) -> core::fmt::Result {
    if value.is_nan() {
        return f.write_str("none");
    }

    // Rounding avoids trailing zeros for the most part. If the fractional
    // part is zero, an explicit precision of zero avoids the decimal point.
    let mut c = (value * factor).round() / factor;
    if c == 0.0 {
        c = 0.0;
    }

    if c == c.trunc() {
        f.write_fmt(format_args!("{:.0}", c))
    } else {
        f.write_fmt(format_args!("{}", c))
    }
}

/// Format the color as a string.
///
/// This function formats the given coordinates for the given color model as a
/// CSS color with the `color()`, `hsl()`, `oklab()`, or `oklch()` function and
/// space-separated arguments. It respects the formatter's precision,
/// defaulting to 5 digits past the decimal. Since degrees and percentages are
/// up to two orders of magnitude larger than other coordinates, this function
/// uses a precision smaller by 2 for them. A present alpha below one follows
/// after a slash.
pub(crate) fn format(
    model: ColorModel,
    coordinates: &[Float; 3],
    alpha: Option<Float>,
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    f.write_str(css_prefix(model))?;

    let precision = f.precision().unwrap_or(5) as i32;
    let factor = (10.0 as Float).powi(precision);
    let hue = model.hue_index();

    for (index, coordinate) in coordinates.iter().enumerate() {
        let is_percent = model == ColorModel::Hsl && index > 0;

        if hue == Some(index) {
            write_number(f, *coordinate, factor / 100.0)?;
        } else if is_percent {
            write_number(f, coordinate * 100.0, factor / 100.0)?;
            f.write_str("%")?;
        } else {
            write_number(f, *coordinate, factor)?;
        }

        if index < 2 {
            f.write_str(" ")?;
        }
    }

    if let Some(alpha) = alpha {
        if alpha < 1.0 {
            f.write_str(" / ")?;
            write_number(f, alpha, factor)?;
        }
    }

    f.write_str(")")
}

// ====================================================================================================================
