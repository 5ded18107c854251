use crate::foundation::math::lerp;

/// Fractional RGB color used while blending, before quantization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorSample {
    /// Red, nominally in [0,1].
    pub r: f64,
    /// Green, nominally in [0,1].
    pub g: f64,
    /// Blue, nominally in [0,1].
    pub b: f64,
}

impl ColorSample {
    /// Build a color from components.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Componentwise `self*(1-m) + other*m`. `m` is not clamped, so it may overshoot.
    pub fn lerp(self, other: Self, m: f64) -> Self {
        Self {
            r: lerp(self.r, other.r, m),
            g: lerp(self.g, other.g, m),
            b: lerp(self.b, other.b, m),
        }
    }
}

/// Frequencies, phase rates and blend gains that define the cloud's look.
///
/// Changing any value changes every rendered pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// `n1 = sin(uv_x*n1_freq_x + time) * cos(uv_y*n1_freq_y - time*n1_rate_y)`.
    pub n1_freq_x: f64,
    /// Vertical frequency of `n1`.
    pub n1_freq_y: f64,
    /// Phase rate of `n1`'s vertical factor.
    pub n1_rate_y: f64,
    /// `n2 = cos(uv_x*n2_freq_x - time*n2_rate_x) * sin(uv_y*n2_freq_y + time)`.
    pub n2_freq_x: f64,
    /// Phase rate of `n2`'s horizontal factor.
    pub n2_rate_x: f64,
    /// Vertical frequency of `n2`.
    pub n2_freq_y: f64,
    /// `n3 = sin((uv_x+uv_y)*n3_freq + time*n3_rate)`.
    pub n3_freq: f64,
    /// Phase rate of `n3`.
    pub n3_rate: f64,

    /// `(gain, bias)` mapping `n1` to the first blend factor, `mix = n*gain + bias`.
    pub mix1: (f64, f64),
    /// `(gain, bias)` for `n2`.
    pub mix2: (f64, f64),
    /// `(gain, bias)` for `n3`.
    pub mix3: (f64, f64),

    /// Pink.
    pub c1: ColorSample,
    /// Blue.
    pub c2: ColorSample,
    /// Cyan-green.
    pub c3: ColorSample,
    /// Yellow.
    pub c4: ColorSample,
}

impl Palette {
    /// The color-cloud look.
    pub const CLOUD: Palette = Palette {
        n1_freq_x: 3.0,
        n1_freq_y: 2.0,
        n1_rate_y: 0.7,
        n2_freq_x: 2.5,
        n2_rate_x: 0.5,
        n2_freq_y: 3.5,
        n3_freq: 2.0,
        n3_rate: 0.8,

        mix1: (0.5, 0.5),
        mix2: (0.5, 0.5),
        mix3: (0.3, 0.3),

        c1: ColorSample::new(1.0, 0.3, 0.5),
        c2: ColorSample::new(0.3, 0.5, 1.0),
        c3: ColorSample::new(0.2, 0.9, 0.6),
        c4: ColorSample::new(1.0, 0.8, 0.2),
    };

    /// Every coefficient `time` is multiplied by inside the noise fields.
    pub fn phase_rates(&self) -> [f64; 4] {
        [1.0, self.n1_rate_y, self.n2_rate_x, self.n3_rate]
    }
}
