//! Pion spectrum: plot the free two-pion energy levels of one total momentum
//! class as a function of the box size

use pion_spectrum::{
    config::Configuration,
    input,
    physics::Kinematics,
    plot::{self, SpectrumPlot},
    spectrum::Spectrum,
    Result,
};

use eyre::WrapErr;

use std::io;

/// This will act as our main function, with suitable error handling
fn main() -> Result<()> {
    // Log records go to stderr, so that stdout only carries the prompt
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // ### CONFIGURATION ###

    let cfg = Configuration::default()
        .checked()
        .wrap_err("Invalid configuration")?;
    let kinematics = Kinematics::from_config(&cfg);

    // ### INPUT ###

    let boost_class = input::prompt_boost_class(io::stdin().lock(), io::stdout())
        .wrap_err("Failed to obtain the boost class")?;

    // ### ENUMERATION ###

    let spectrum = Spectrum::enumerate(&cfg, &kinematics, boost_class);
    if spectrum.is_empty() {
        log::warn!("No boost d has |d|^2 = {boost_class}, only the threshold will be drawn");
    } else {
        log::info!(
            "Found {} distinct energy levels among {} configurations of {} boosts",
            spectrum.levels.len(),
            spectrum.num_candidates,
            spectrum.boosts.len()
        );
    }
    for level in &spectrum.levels {
        log::debug!(
            "n = {:?}, d = {:?}: {} MeV at L = {} fm",
            level.momentum.as_slice(),
            level.boost.as_slice(),
            level.reference_energy,
            cfg.reference_box_size
        );
    }

    // ### RENDERING ###

    let plot = SpectrumPlot::new(&cfg, &kinematics, &spectrum);
    let figure_path = cfg.figure_path(&boost_class);
    plot.render(&figure_path, cfg.figure_size)
        .wrap_err("Failed to render the energy spectrum")?;
    log::info!("Energy spectrum written to {}", figure_path.display());

    // ### DISPLAY ###

    // The figure is already on disk at this point, so a missing viewer (e.g.
    // on a headless machine) is reported without failing the run
    if cfg.open_viewer {
        if let Err(e) = plot::display(&figure_path) {
            log::warn!("{e:#}");
        }
    }

    // ...and we're done
    Ok(())
}
