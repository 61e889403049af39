//! Free pion kinematics in a cubic periodic box
//!
//! Every formula comes in two flavors: a scalar one evaluated at a single box
//! size L, and a lazy "curve" one which maps a sequence of box sizes to the
//! corresponding sequence of values.

use crate::{
    config::Configuration,
    numeric::{
        floats::consts::PI,
        functions::{sqr, to_float},
        Float,
    },
    quanta::{squared_norm, Quanta},
};

use prefix_num_ops::real::*;

/// Physical constants needed to compute pion energies
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kinematics {
    /// Pion mass (MeV)
    pion_mass: Float,

    /// Conversion factor from inverse fermi to MeV
    fm_to_mev: Float,
}
//
impl Kinematics {
    /// Set up kinematics from explicit constants
    pub fn new(pion_mass: Float, fm_to_mev: Float) -> Self {
        Self {
            pion_mass,
            fm_to_mev,
        }
    }

    /// Set up kinematics using the constants from the configuration
    pub fn from_config(cfg: &Configuration) -> Self {
        Self::new(cfg.pion_mass, cfg.fm_to_mev)
    }

    // ### SCALAR FORMULAS ###

    /// Squared momentum of a single pion with momentum quanta n in a box of
    /// side L (MeV²)
    ///
    /// L must be positive, otherwise the result is meaningless.
    pub fn squared_momentum(&self, n: &Quanta, box_size: Float) -> Float {
        sqr(2. * PI / box_size) * to_float(squared_norm(n)) * sqr(self.fm_to_mev)
    }

    /// Lab frame energy of a single pion with momentum quanta n (MeV)
    pub fn single_particle_energy(&self, n: &Quanta, box_size: Float) -> Float {
        sqrt(sqr(self.pion_mass) + self.squared_momentum(n, box_size))
    }

    /// Center-of-mass energy of two pions with total momentum quanta d, the
    /// first of which has momentum quanta n (MeV)
    ///
    /// The second pion carries the remaining momentum d - n. If there is no
    /// real solution, NaN is returned (see `invariant_mass`).
    pub fn two_particle_cm_energy(&self, n: &Quanta, d: &Quanta, box_size: Float) -> Float {
        let e1 = self.single_particle_energy(n, box_size);
        let e2 = self.single_particle_energy(&(d - n), box_size);
        invariant_mass(e1 + e2, self.squared_momentum(d, box_size))
    }

    // ### CURVES ###
    //
    // These borrow nothing, so they can be handed over to a plotting backend
    // which outlives the current stack frame.

    /// Squared momentum of a single pion, for each box size in turn
    pub fn squared_momentum_curve(
        self,
        n: Quanta,
        box_sizes: impl Iterator<Item = Float>,
    ) -> impl Iterator<Item = Float> {
        box_sizes.map(move |l| self.squared_momentum(&n, l))
    }

    /// Lab frame energy of a single pion, for each box size in turn
    pub fn single_particle_energy_curve(
        self,
        n: Quanta,
        box_sizes: impl Iterator<Item = Float>,
    ) -> impl Iterator<Item = Float> {
        box_sizes.map(move |l| self.single_particle_energy(&n, l))
    }

    /// Two-pion center-of-mass energy, for each box size in turn
    pub fn two_particle_cm_energy_curve(
        self,
        n: Quanta,
        d: Quanta,
        box_sizes: impl Iterator<Item = Float>,
    ) -> impl Iterator<Item = Float> {
        box_sizes.map(move |l| self.two_particle_cm_energy(&n, &d, l))
    }
}

/// Invariant mass of a system with total lab energy `energy` and squared total
/// momentum `squared_momentum`
///
/// A negative radicand means that there is no real solution at this box size.
/// This is reported as NaN, which plots as a gap in the curve.
fn invariant_mass(energy: Float, squared_momentum: Float) -> Float {
    let radicand = sqr(energy) - squared_momentum;
    if radicand >= 0. {
        sqrt(radicand)
    } else {
        Float::NAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{box_sizes::BoxSizes, quanta::quanta};

    fn kinematics() -> Kinematics {
        Kinematics::new(140., 197.)
    }

    fn assert_close(actual: Float, expected: Float) {
        let tolerance = 64. * Float::EPSILON * expected.abs().max(1.);
        assert!(
            (actual - expected).abs() <= tolerance,
            "{actual} is not close to {expected}"
        );
    }

    fn sample_box_sizes() -> impl Iterator<Item = Float> {
        BoxSizes::new(0.5, 100., 0.5).iter()
    }

    #[test]
    fn pions_at_rest() {
        let kin = kinematics();
        let zero = quanta(0, 0, 0);
        for l in sample_box_sizes() {
            assert_eq!(kin.squared_momentum(&zero, l), 0.);
            assert_eq!(kin.single_particle_energy(&zero, l), 140.);
            assert_eq!(kin.two_particle_cm_energy(&zero, &zero, l), 280.);
        }
    }

    #[test]
    fn threshold_at_reference_size() {
        let zero = quanta(0, 0, 0);
        assert_eq!(kinematics().two_particle_cm_energy(&zero, &zero, 6.), 280.);
    }

    #[test]
    fn unit_momentum() {
        let kin = kinematics();
        let l = 6.;
        let p2 = sqr(2. * PI / l * 197.);
        assert_close(kin.squared_momentum(&quanta(1, 0, 0), l), p2);
        assert_close(kin.squared_momentum(&quanta(0, -1, 0), l), p2);
        assert_close(kin.squared_momentum(&quanta(1, 1, 1), l), 3. * p2);
        assert_close(
            kin.single_particle_energy(&quanta(0, 0, 1), l),
            sqrt(140. * 140. + p2),
        );
    }

    #[test]
    fn back_to_back_pair_at_rest_frame() {
        // With zero total momentum, both pions carry |n|, and the pair's
        // center-of-mass energy is twice the single pion energy.
        let kin = kinematics();
        let n = quanta(1, 2, 0);
        let zero = quanta(0, 0, 0);
        for l in sample_box_sizes() {
            assert_close(
                kin.two_particle_cm_energy(&n, &zero, l),
                2. * kin.single_particle_energy(&n, l),
            );
        }
    }

    #[test]
    fn boosted_pair_with_one_pion_at_rest() {
        let kin = kinematics();
        let d = quanta(1, 0, 0);
        let l = 10.;
        let e1 = kin.single_particle_energy(&d, l);
        let expected = sqrt(sqr(e1 + 140.) - kin.squared_momentum(&d, l));
        assert_close(kin.two_particle_cm_energy(&d, &d, l), expected);
        assert_close(kin.two_particle_cm_energy(&quanta(0, 0, 0), &d, l), expected);
    }

    #[test]
    fn energy_grows_with_momentum() {
        let kin = kinematics();
        let zero = quanta(0, 0, 0);
        let by_norm = [
            quanta(0, 0, 0),
            quanta(1, 0, 0),
            quanta(1, 1, 0),
            quanta(1, 1, 1),
            quanta(2, 0, 0),
            quanta(2, 1, 0),
            quanta(2, 1, 1),
            quanta(2, 2, 0),
        ];
        for l in sample_box_sizes() {
            let energies = by_norm
                .iter()
                .map(|n| kin.two_particle_cm_energy(n, &zero, l))
                .collect::<Vec<_>>();
            assert!(energies.windows(2).all(|w| w[1] > w[0]), "at L = {l}");
        }
    }

    #[test]
    fn energy_decreases_with_box_size() {
        let kin = kinematics();
        let n = quanta(1, 0, 0);
        let zero = quanta(0, 0, 0);
        let curve = kin
            .two_particle_cm_energy_curve(n, zero, sample_box_sizes())
            .collect::<Vec<_>>();
        assert!(curve.windows(2).all(|w| w[1] < w[0]));
        assert!(curve.iter().all(|&e| e > 280.));
    }

    #[test]
    fn curves_match_scalar_formulas() {
        let kin = kinematics();
        let sizes = BoxSizes::new(6., 30., 0.2);
        let n = quanta(2, 1, 0);
        let d = quanta(1, 1, 0);

        let p2 = kin.squared_momentum_curve(n, sizes.iter()).collect::<Vec<_>>();
        let e = kin
            .single_particle_energy_curve(n, sizes.iter())
            .collect::<Vec<_>>();
        let ecm = kin
            .two_particle_cm_energy_curve(n, d, sizes.iter())
            .collect::<Vec<_>>();
        assert_eq!(p2.len(), sizes.len());
        assert_eq!(e.len(), sizes.len());
        assert_eq!(ecm.len(), sizes.len());

        for (i, l) in sizes.iter().enumerate() {
            assert_eq!(p2[i], kin.squared_momentum(&n, l));
            assert_eq!(e[i], kin.single_particle_energy(&n, l));
            assert_eq!(ecm[i].to_bits(), kin.two_particle_cm_energy(&n, &d, l).to_bits());
        }
    }

    #[test]
    fn tolerances_follow_precision() {
        // Single precision results only agree to a few ulps
        let kin = kinematics();
        let l = 6.;
        let p2 = kin.squared_momentum(&quanta(1, 0, 0), l);
        assert_close(p2 * (1. + 4. * Float::EPSILON), p2);
        assert_close(kin.squared_momentum(&quanta(2, 1, 0), l), 5. * p2);
    }

    #[test]
    fn invariant_mass_domain() {
        assert_eq!(invariant_mass(5., 16.), 3.);
        assert_eq!(invariant_mass(4., 16.), 0.);
        assert!(invariant_mass(3., 16.).is_nan());
    }

    #[test]
    fn massless_collinear_pair_is_at_the_edge() {
        // Two massless quanta moving in the same direction have (almost) zero
        // invariant mass, and must not produce a spurious failure.
        let kin = Kinematics::new(0., 197.);
        let ecm = kin.two_particle_cm_energy(&quanta(1, 0, 0), &quanta(2, 0, 0), 6.);
        let pair_energy = 2. * kin.single_particle_energy(&quanta(1, 0, 0), 6.);
        assert!(ecm.is_nan() || ecm <= pair_energy * sqrt(16. * Float::EPSILON));
    }
}
