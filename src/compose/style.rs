/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub(crate) fn to_paint(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

/// Where the caption block sits vertically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum VerticalAnchor {
    #[default]
    Bottom,
    Middle,
    Top,
}

/// Colors and shadow geometry used when baking text into an image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptionStyle {
    pub caption: Rgba8,
    pub shadow: Rgba8,
    /// Shadow displacement as a fraction of the caption font size, applied to both axes.
    pub shadow_offset: f64,
    pub attribution: Rgba8,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            caption: Rgba8::new(255, 255, 255, 255),
            shadow: Rgba8::new(0, 0, 0, 192),
            shadow_offset: 0.05,
            attribution: Rgba8::new(255, 255, 255, 128),
        }
    }
}

impl CaptionStyle {
    /// Every layer fully transparent. Compositing with this style leaves the source untouched.
    pub fn invisible() -> Self {
        let d = Self::default();
        Self {
            caption: d.caption.with_alpha(0),
            shadow: d.shadow.with_alpha(0),
            attribution: d.attribution.with_alpha(0),
            ..d
        }
    }
}

/// Per-request layout knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositionConfig {
    /// Characters per caption line.
    pub wrap_width: usize,
    pub anchor: VerticalAnchor,
    pub style: CaptionStyle,
}
