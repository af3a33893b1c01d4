use std::ops::Mul;

use crate::quantity::days::Days;

quantity!(
    /// An amount of money, in whole yen for display purposes.
    Cost, via: f64, suffix: "¥", precision: 0
);

impl Cost {
    #[must_use]
    pub fn max(self, rhs: Self) -> Self {
        if rhs > self { rhs } else { self }
    }
}

/// Bill a per-block rate for a number of blocks.
impl Mul<u32> for Cost {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * f64::from(rhs))
    }
}

/// Bill a daily rate for a number of days.
impl Mul<Days> for Cost {
    type Output = Self;

    fn mul(self, rhs: Days) -> Self::Output {
        self * rhs.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn display_rounds_to_whole_yen() {
        assert_eq!(Cost(302400.4).to_string(), "302400 ¥");
    }

    #[test]
    fn ordering_is_total() {
        assert!(Cost(1000.0) < Cost(1500.0));
        assert_eq!(Cost(0.0).max(Cost(-1.0)), Cost(0.0));
    }

    #[test]
    fn billing_arithmetic() {
        assert_abs_diff_eq!((Cost(6000.0) * 2_u32).0, 12000.0);
        assert_abs_diff_eq!((Cost(1000.0) * Days(3)).0, 3000.0);
    }
}
