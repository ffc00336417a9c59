/// Shaping curve applied to a `[0, 1]` progress value.
///
/// The `*Out` family is `1 - (1 - t)^n`: the larger `n`, the earlier the change happens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    #[default]
    Linear,
    OutQuad,
    OutCubic,
    /// Symmetric quadratic: slow start, slow finish. Used for pointer sweeps.
    InOutQuad,
    /// `n = 20`: almost all of the change happens in the first few percent. Chain colour default.
    HugeOut,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => out_pow(t, 2),
            Self::OutCubic => out_pow(t, 3),
            Self::HugeOut => out_pow(t, 20),
            Self::InOutQuad if t < 0.5 => 2.0 * t * t,
            Self::InOutQuad => 1.0 - 2.0 * (1.0 - t) * (1.0 - t),
        }
    }
}

fn out_pow(t: f64, n: i32) -> f64 {
    1.0 - (1.0 - t).powi(n)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
