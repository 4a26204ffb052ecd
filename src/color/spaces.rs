use super::Color;
use crate::foundation::math::lerp;

// D65 reference white and CIE L*a*b* constants.
const XN: f64 = 0.950_470;
const YN: f64 = 1.0;
const ZN: f64 = 1.088_830;
const T0: f64 = 4.0 / 29.0;
const T1: f64 = 6.0 / 29.0;
const T2: f64 = 3.0 * T1 * T1;
const T3: f64 = T1 * T1 * T1;

/// Color in CIE L*a*b* space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabColor {
    /// Lightness.
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
    /// Straight alpha.
    pub alpha: f64,
}

/// Color in polar L*a*b* (hue, chroma, lightness).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HclColor {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Chroma.
    pub c: f64,
    /// Lightness.
    pub l: f64,
    /// Straight alpha.
    pub alpha: f64,
}

/// Color space a color-valued function interpolates in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorSpace {
    /// Blend premultiplied channels directly.
    #[default]
    Rgb,
    /// Blend in CIE L*a*b*.
    Lab,
    /// Blend in hue/chroma/lightness, taking the short way around the hue circle.
    Hcl,
}

impl ColorSpace {
    /// Resolve a `colorSpace` name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rgb" => Some(Self::Rgb),
            "lab" => Some(Self::Lab),
            "hcl" => Some(Self::Hcl),
            _ => None,
        }
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Lab => "lab",
            Self::Hcl => "hcl",
        }
    }

    /// Convert both endpoints into this space, blend there and convert back.
    pub fn interpolate(self, from: &Color, to: &Color, t: f64) -> Color {
        match self {
            Self::Rgb => Color::new(
                lerp(from.r, to.r, t),
                lerp(from.g, to.g, t),
                lerp(from.b, to.b, t),
                lerp(from.a, to.a, t),
            ),
            Self::Lab => Lab::reverse(&Lab::interpolate(
                &Lab::forward(from),
                &Lab::forward(to),
                t,
            )),
            Self::Hcl => Hcl::reverse(&Hcl::interpolate(
                &Hcl::forward(from),
                &Hcl::forward(to),
                t,
            )),
        }
    }
}

/// Conversion contract for an alternate color space.
pub trait SpaceConversion {
    /// Representation of a color inside the space.
    type Repr;

    /// Convert out of premultiplied RGB.
    fn forward(color: &Color) -> Self::Repr;
    /// Convert back into premultiplied RGB, clamping out-of-gamut channels.
    fn reverse(repr: &Self::Repr) -> Color;
    /// Blend two colors inside the space.
    fn interpolate(a: &Self::Repr, b: &Self::Repr, t: f64) -> Self::Repr;
}

/// CIE L*a*b* conversions.
pub struct Lab;
/// Hue/chroma/lightness conversions.
pub struct Hcl;

impl SpaceConversion for Lab {
    type Repr = LabColor;

    fn forward(color: &Color) -> LabColor {
        let [r, g, b, alpha] = color.to_straight();
        let r = rgb_to_xyz(r);
        let g = rgb_to_xyz(g);
        let b = rgb_to_xyz(b);
        let x = xyz_to_lab((0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b) / XN);
        let y = xyz_to_lab((0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b) / YN);
        let z = xyz_to_lab((0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b) / ZN);

        LabColor {
            l: 116.0 * y - 16.0,
            a: 500.0 * (x - y),
            b: 200.0 * (y - z),
            alpha: if color.a == 0.0 { 0.0 } else { alpha },
        }
    }

    fn reverse(lab: &LabColor) -> Color {
        let y = (lab.l + 16.0) / 116.0;
        let x = y + lab.a / 500.0;
        let z = y - lab.b / 200.0;

        let y = YN * lab_to_xyz(y);
        let x = XN * lab_to_xyz(x);
        let z = ZN * lab_to_xyz(z);

        Color::from_straight(
            xyz_to_rgb(3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z),
            xyz_to_rgb(-0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z),
            xyz_to_rgb(0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z),
            lab.alpha,
        )
    }

    fn interpolate(a: &LabColor, b: &LabColor, t: f64) -> LabColor {
        LabColor {
            l: lerp(a.l, b.l, t),
            a: lerp(a.a, b.a, t),
            b: lerp(a.b, b.b, t),
            alpha: lerp(a.alpha, b.alpha, t),
        }
    }
}

impl SpaceConversion for Hcl {
    type Repr = HclColor;

    fn forward(color: &Color) -> HclColor {
        let lab = Lab::forward(color);
        let h = lab.b.atan2(lab.a).to_degrees();
        HclColor {
            h: if h < 0.0 { h + 360.0 } else { h },
            c: (lab.a * lab.a + lab.b * lab.b).sqrt(),
            l: lab.l,
            alpha: lab.alpha,
        }
    }

    fn reverse(hcl: &HclColor) -> Color {
        let h = hcl.h.to_radians();
        Lab::reverse(&LabColor {
            l: hcl.l,
            a: h.cos() * hcl.c,
            b: h.sin() * hcl.c,
            alpha: hcl.alpha,
        })
    }

    fn interpolate(a: &HclColor, b: &HclColor, t: f64) -> HclColor {
        HclColor {
            h: interpolate_hue(a.h, b.h, t),
            c: lerp(a.c, b.c, t),
            l: lerp(a.l, b.l, t),
            alpha: lerp(a.alpha, b.alpha, t),
        }
    }
}

fn interpolate_hue(a: f64, b: f64, t: f64) -> f64 {
    let d = b - a;
    let d = if !(-180.0..=180.0).contains(&d) {
        d - 360.0 * (d / 360.0).round()
    } else {
        d
    };
    a + t * d
}

fn xyz_to_lab(t: f64) -> f64 {
    if t > T3 { t.cbrt() } else { t / T2 + T0 }
}

fn lab_to_xyz(t: f64) -> f64 {
    if t > T1 { t * t * t } else { T2 * (t - T0) }
}

fn xyz_to_rgb(x: f64) -> f64 {
    if x <= 0.003_130_8 {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

fn rgb_to_xyz(x: f64) -> f64 {
    if x <= 0.040_45 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/spaces.rs"]
mod tests;
