mod conversion;
mod equality;
mod gamut;
mod math;
mod model;
mod string;

// conversion
pub(crate) use conversion::{
    convert, from_24bit, linear_rgb_to_rgb, rgb_to_hsl, to_24bit, to_byte, to_linear_srgb,
};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::to_eq_bits;
pub(crate) use equality::{normalize, to_eq_coordinates};

// gamut
pub(crate) use gamut::{clip, in_gamut, to_gamut, EPSILON, P3_LIMIT};

// math
pub(crate) use math::{round_to, FloatExt};

// model
pub use model::ColorModel;

// string
pub(crate) use string::{format, is_figma_shorthand, parse};
