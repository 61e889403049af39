//! Enumeration of the distinct two-pion energy levels of a boost class

use crate::{
    config::Configuration,
    input::BoostClass,
    numeric::Float,
    physics::Kinematics,
    quanta::{squared_norm, Quanta, QuantaRanges},
};

/// One two-pion energy level, i.e. one curve of the spectrum
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyLevel {
    /// Momentum quanta of the first pion
    pub momentum: Quanta,

    /// Total momentum quanta of the pion pair
    pub boost: Quanta,

    /// Center-of-mass energy at the reference box size (MeV)
    pub reference_energy: Float,
}
//
impl EnergyLevel {
    /// Label used to identify this level on the plot
    pub fn label(&self) -> String {
        format!("|n|^2={}", squared_norm(&self.momentum))
    }
}

/// Center-of-mass energies which were already seen at the reference box size
///
/// Two levels with exactly the same reference energy are assumed to be the same
/// level, even though nothing guarantees that their curves agree at other
/// box sizes. Since NaN never compares equal to anything, levels without a
/// real energy at the reference box size are never considered as duplicates.
#[derive(Clone, Debug, Default)]
pub struct SeenEnergies(Vec<Float>);
//
impl SeenEnergies {
    /// Start with no known energy
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an energy, telling whether it was new
    pub fn insert(&mut self, energy: Float) -> bool {
        if self.0.contains(&energy) {
            false
        } else {
            self.0.push(energy);
            true
        }
    }

    /// Energies seen so far, in insertion order
    #[cfg(test)]
    fn as_slice(&self) -> &[Float] {
        &self.0
    }
}

/// Distinct energy levels of one boost class, in enumeration order
#[derive(Clone, Debug)]
pub struct Spectrum {
    /// Boost class which was enumerated
    pub boost_class: BoostClass,

    /// Boosts that belong to the class
    pub boosts: Vec<Quanta>,

    /// Number of (momentum, boost) combinations that were examined
    pub num_candidates: usize,

    /// Levels that survived deduplication
    pub levels: Vec<EnergyLevel>,
}
//
impl Spectrum {
    /// Enumerate the levels of a boost class using the configured ranges
    pub fn enumerate(
        cfg: &Configuration,
        kinematics: &Kinematics,
        boost_class: BoostClass,
    ) -> Self {
        Self::enumerate_in(
            kinematics,
            boost_class,
            &cfg.boost_ranges,
            &cfg.momentum_ranges,
            cfg.reference_box_size,
        )
    }

    /// Enumerate the levels of a boost class, exploring the given boost and
    /// momentum ranges, and deduplicating levels at a reference box size
    pub fn enumerate_in(
        kinematics: &Kinematics,
        boost_class: BoostClass,
        boost_ranges: &QuantaRanges,
        momentum_ranges: &QuantaRanges,
        reference_box_size: Float,
    ) -> Self {
        let boosts = boost_ranges
            .iter()
            .filter(|d| boost_class.contains(squared_norm(d)))
            .collect::<Vec<_>>();

        let mut seen = SeenEnergies::new();
        let mut num_candidates = 0;
        let mut levels = Vec::new();
        for boost in boosts.iter().copied() {
            for momentum in momentum_ranges.iter() {
                num_candidates += 1;
                let reference_energy = kinematics.two_particle_cm_energy(
                    &momentum,
                    &boost,
                    reference_box_size,
                );
                if seen.insert(reference_energy) {
                    levels.push(EnergyLevel {
                        momentum,
                        boost,
                        reference_energy,
                    });
                } else {
                    log::trace!("Skipping duplicate level n = {momentum:?}, d = {boost:?}");
                }
            }
        }

        Self {
            boost_class,
            boosts,
            num_candidates,
            levels,
        }
    }

    /// Truth that no boost matched the requested class
    pub fn is_empty(&self) -> bool {
        self.boosts.is_empty()
    }
}
