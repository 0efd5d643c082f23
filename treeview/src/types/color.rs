#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Mix `self` toward `other`. `amount` of 0.0 gives `self`, 1.0 gives `other`.
    pub fn mix(self, other: Rgb, amount: f32) -> Self {
        use palette::{LinSrgb, Mix, Srgb};

        let a: LinSrgb = Srgb::new(self.r, self.g, self.b)
            .into_format::<f32>()
            .into_linear();
        let b: LinSrgb = Srgb::new(other.r, other.g, other.b)
            .into_format::<f32>()
            .into_linear();
        let mixed: Srgb = Srgb::from_linear(a.mix(b, amount.clamp(0.0, 1.0)));
        let (r, g, b) = mixed.into_format::<u8>().into_components();

        Rgb::new(r, g, b)
    }
}
