//! Perfect-gas equation of state.
//!
//! Thermally and calorically perfect gas with configurable ratio of specific
//! heats and specific gas constant. All relations are algebraic:
//!
//! - pressure `p = (γ - 1) ρ e`
//! - density `ρ = p / (R T)`
//! - internal energy of quiescent gas `e(T) = R T / (γ - 1)`
//! - sound speed `c = sqrt(γ (γ - 1) e)`
//!
//! Units are SI throughout (Pa, K, kg/m³, J/kg, m/s).

/// Perfect-gas parameters `(γ, R)`.
///
/// The default is air: `γ = 1.4`, `R = 287.058 J/(kg·K)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerfectGas {
    /// Ratio of specific heats γ.
    pub gamma: f64,
    /// Specific gas constant R (J/(kg·K)).
    pub r_gas: f64,
}

impl Default for PerfectGas {
    fn default() -> Self {
        Self {
            gamma: 1.4,
            r_gas: 287.058,
        }
    }
}

impl PerfectGas {
    /// Create a gas model with the given specific-heat ratio and gas constant.
    pub fn new(gamma: f64, r_gas: f64) -> Self {
        Self { gamma, r_gas }
    }

    /// Internal energy per unit mass of quiescent gas at temperature `t`.
    #[inline]
    pub fn energy(&self, t: f64) -> f64 {
        self.r_gas * t / (self.gamma - 1.0)
    }

    /// Density at pressure `p` and temperature `t`.
    #[inline]
    pub fn density(&self, p: f64, t: f64) -> f64 {
        p / (self.r_gas * t)
    }

    /// Pressure at internal energy `e` and density `rho`.
    #[inline]
    pub fn pressure(&self, e: f64, rho: f64) -> f64 {
        (self.gamma - 1.0) * rho * e
    }

    /// Speed of sound at internal energy `e`.
    #[inline]
    pub fn sound_speed(&self, e: f64) -> f64 {
        (self.gamma * (self.gamma - 1.0) * e).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_air_defaults() {
        let gas = PerfectGas::default();
        assert_eq!(gas.gamma, 1.4);
        assert_eq!(gas.r_gas, 287.058);
    }

    #[test]
    fn test_state_relations_are_consistent() {
        let gas = PerfectGas::default();
        let (p, t) = (101_325.0, 288.15);
        let rho = gas.density(p, t);
        let e = gas.energy(t);
        // Recover the pressure from (e, rho).
        assert_relative_eq!(gas.pressure(e, rho), p, max_relative = 1e-14);
    }

    #[test]
    fn test_sound_speed_sea_level() {
        // Standard air at 288.15 K: c = sqrt(gamma R T) ~ 340.3 m/s.
        let gas = PerfectGas::default();
        let c = gas.sound_speed(gas.energy(288.15));
        assert_relative_eq!(c, (1.4 * 287.058 * 288.15_f64).sqrt(), max_relative = 1e-14);
        assert!((c - 340.3).abs() < 0.1);
    }

    #[test]
    fn test_custom_gas() {
        // Monatomic gas, gamma = 5/3.
        let gas = PerfectGas::new(5.0 / 3.0, 2077.0);
        assert_relative_eq!(gas.energy(300.0), 2077.0 * 300.0 * 1.5, max_relative = 1e-14);
    }
}
