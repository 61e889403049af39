//! Physical constants and plotting parameters, set up once at startup

use crate::{
    box_sizes::BoxSizes, input::BoostClass, numeric::Float, quanta::QuantaRanges, Result,
};

use eyre::ensure;

use std::path::PathBuf;

/// Program configuration
#[derive(Clone, Debug)]
pub struct Configuration {
    /// Pion mass (MeV)
    pub pion_mass: Float,

    /// Conversion factor from inverse fermi to MeV (ħc in MeV·fm)
    pub fm_to_mev: Float,

    /// Box sizes over which energy curves are drawn (fm)
    pub box_sizes: BoxSizes,

    /// Box size at which curves are compared for deduplication (fm)
    pub reference_box_size: Float,

    /// Momentum quanta of the first pion that are explored
    pub momentum_ranges: QuantaRanges,

    /// Total momentum quanta (boosts) that are explored
    pub boost_ranges: QuantaRanges,

    /// Directory where energy spectrum figures are written
    pub output_dir: PathBuf,

    /// Figure size in pixels (width, height)
    pub figure_size: (u32, u32),

    /// Whether the figure should display a legend
    pub show_legend: bool,

    /// Whether the figure is opened in the system's viewer once rendered
    pub open_viewer: bool,
}
//
impl Default for Configuration {
    fn default() -> Self {
        Self {
            pion_mass: 140.,
            fm_to_mev: 197.,
            box_sizes: BoxSizes::new(6., 30., 0.2),
            reference_box_size: 6.,
            momentum_ranges: QuantaRanges::new(1..4, 0..3, 0..3),
            boost_ranges: QuantaRanges::new(0..3, 0..3, 0..3),
            output_dir: PathBuf::from("."),
            figure_size: (1024, 768),
            show_legend: false,
            open_viewer: true,
        }
    }
}
//
impl Configuration {
    /// Path of the figure for some boost class
    ///
    /// The boost class is part of the file name, which viewers display.
    pub fn figure_path(&self, boost_class: &BoostClass) -> PathBuf {
        self.output_dir.join(format!("energy_spectrum_d{boost_class}.svg"))
    }

    /// Validate the configuration, then log it
    ///
    /// Invalid configurations are never logged as if they were in effect.
    pub fn checked(self) -> Result<Self> {
        self.validate()?;
        self.log();
        Ok(self)
    }

    /// Check that the configuration makes physical sense
    pub fn validate(&self) -> Result<()> {
        ensure!(self.pion_mass > 0., "The pion mass must be positive");
        ensure!(
            self.fm_to_mev > 0.,
            "The fermi to MeV conversion factor must be positive"
        );
        let sizes = &self.box_sizes;
        ensure!(sizes.start > 0., "Box sizes must be positive");
        ensure!(sizes.step > 0., "Box sizes must be spaced by a positive step");
        ensure!(
            sizes.start < sizes.end,
            "The box size range [{}, {}) is empty",
            sizes.start,
            sizes.end
        );
        ensure!(
            self.reference_box_size > 0.,
            "The deduplication reference box size must be positive"
        );
        ensure!(
            !self.momentum_ranges.is_empty(),
            "At least one momentum state must be explored"
        );
        ensure!(
            !self.boost_ranges.is_empty(),
            "At least one boost must be explored"
        );
        ensure!(
            self.figure_size.0 > 0 && self.figure_size.1 > 0,
            "The figure must have a nonzero size"
        );
        Ok(())
    }

    /// Log the configuration in a key/value layout that's easy to eyeball
    pub fn log(&self) {
        let sizes = &self.box_sizes;
        log::debug!("MPI            : {}", self.pion_mass);
        log::debug!("FMTOMEV        : {}", self.fm_to_mev);
        log::debug!("L_START        : {}", sizes.start);
        log::debug!("L_END          : {}", sizes.end);
        log::debug!("L_STEP         : {}", sizes.step);
        log::debug!("L_REF          : {}", self.reference_box_size);
        log::debug!("N_RANGES       : {:?}", self.momentum_ranges.axes);
        log::debug!("D_RANGES       : {:?}", self.boost_ranges.axes);
        log::debug!("OUTPUT_DIR     : {}", self.output_dir.display());
        log::debug!("FIGURE_SIZE    : {:?}", self.figure_size);
        log::debug!("LEGEND         : {}", self.show_legend);
        log::debug!("OPEN_VIEWER    : {}", self.open_viewer);
    }
}
