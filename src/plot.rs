//! Rendering of two-pion energy spectra as a function of the box size

use crate::{
    config::Configuration,
    numeric::Float,
    physics::Kinematics,
    quanta::{quanta, Quanta},
    spectrum::Spectrum,
    Result,
};

use eyre::WrapErr;
use plotters::{coord::Shift, prelude::*};

use std::{fs, ops::Range, path::Path};

/// Role of a curve on the plot, which determines its styling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveKind {
    /// Two pions at rest, the lowest possible energy
    Threshold,

    /// One energy level of the spectrum (index into the level list)
    Level(usize),
}

/// A labelled energy curve, sampled at each box size
#[derive(Clone, Debug)]
pub struct Curve {
    /// How the curve should be drawn
    pub kind: CurveKind,

    /// Legend label
    pub label: String,

    /// (box size in fm, center-of-mass energy in MeV) samples
    pub points: Vec<(Float, Float)>,
}
//
impl Curve {
    /// Sample the center-of-mass energy of (n, d) at every configured box size
    fn sample(
        cfg: &Configuration,
        kinematics: &Kinematics,
        kind: CurveKind,
        label: String,
        n: Quanta,
        d: Quanta,
    ) -> Self {
        let box_sizes = cfg.box_sizes.iter();
        let energies = kinematics.two_particle_cm_energy_curve(n, d, box_sizes.clone());
        Self {
            kind,
            label,
            points: box_sizes.zip(energies).collect(),
        }
    }

    /// Split the curve into runs of consecutive points with a real energy
    ///
    /// Points without a real center-of-mass energy (NaN) become gaps.
    pub fn segments(&self) -> Vec<Vec<(Float, Float)>> {
        self.points
            .split(|(_, energy)| !energy.is_finite())
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.to_vec())
            .collect()
    }
}

/// Everything that goes on an energy spectrum figure
#[derive(Clone, Debug)]
pub struct SpectrumPlot {
    /// Figure title
    pub title: String,

    /// Curves, in drawing order. The threshold always comes first.
    pub curves: Vec<Curve>,

    /// Whether a legend should be drawn
    pub show_legend: bool,
}
//
impl SpectrumPlot {
    /// Lay out the threshold and the level curves of a spectrum
    pub fn new(cfg: &Configuration, kinematics: &Kinematics, spectrum: &Spectrum) -> Self {
        let at_rest = quanta(0, 0, 0);
        let threshold = Curve::sample(
            cfg,
            kinematics,
            CurveKind::Threshold,
            "threshold".to_owned(),
            at_rest,
            at_rest,
        );
        let levels = spectrum.levels.iter().enumerate().map(|(idx, level)| {
            Curve::sample(
                cfg,
                kinematics,
                CurveKind::Level(idx),
                level.label(),
                level.momentum,
                level.boost,
            )
        });
        Self {
            title: format!("Energy Spectrum |d|^2={}", spectrum.boost_class),
            curves: std::iter::once(threshold).chain(levels).collect(),
            show_legend: cfg.show_legend,
        }
    }

    /// Range of box sizes spanned by the curves
    pub fn box_size_range(&self) -> Range<Float> {
        finite_range(self.curves.iter().flat_map(|c| c.points.iter().map(|p| p.0)))
    }

    /// Range of energies spanned by the curves, ignoring gaps
    pub fn energy_range(&self) -> Range<Float> {
        finite_range(self.curves.iter().flat_map(|c| c.points.iter().map(|p| p.1)))
    }

    /// Draw the figure into an SVG file
    pub fn render(&self, path: &Path, size: (u32, u32)) -> Result<()> {
        let svg = self.render_svg(size)?;
        fs::write(path, svg).wrap_err_with(|| format!("Failed to write {}", path.display()))
    }

    /// Draw the figure as an SVG document, titled like the figure itself
    pub fn render_svg(&self, size: (u32, u32)) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            self.draw(&root)?;
            root.present()?;
        }
        Ok(with_svg_title(&svg, &self.title))
    }

    /// Draw the figure on some drawing area
    fn draw(&self, root: &DrawingArea<SVGBackend<'_>, Shift>) -> Result<()> {
        root.fill(&WHITE)?;

        let energies = pad(self.energy_range(), 0.05);
        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(42)
            .y_label_area_size(64)
            .build_cartesian_2d(self.box_size_range(), energies)?;

        chart
            .configure_mesh()
            .x_desc("L (fm)")
            .y_desc("Energy (MeV)")
            .draw()?;

        for curve in &self.curves {
            let style = match curve.kind {
                CurveKind::Threshold => RED.stroke_width(2),
                CurveKind::Level(idx) => Palette99::pick(idx).stroke_width(2),
            };
            for (idx, segment) in curve.segments().into_iter().enumerate() {
                let series = match curve.kind {
                    CurveKind::Threshold => {
                        chart.draw_series(DashedLineSeries::new(segment, 10, 6, style))?
                    }
                    CurveKind::Level(_) => chart.draw_series(LineSeries::new(segment, style))?,
                };
                // Only label the first segment, or gaps would yield duplicate
                // legend entries
                if idx == 0 {
                    series
                        .label(curve.label.as_str())
                        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
                }
            }
        }

        if self.show_legend {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.85))
                .border_style(BLACK.mix(0.25))
                .draw()?;
        }
        Ok(())
    }
}

/// Open a rendered figure in the system's default viewer
pub fn display(path: &Path) -> Result<()> {
    opener::open(path).wrap_err_with(|| format!("Failed to open {} in a viewer", path.display()))
}

/// Give an SVG document a `<title>`, which viewers show in their title bar
fn with_svg_title(svg: &str, title: &str) -> String {
    let title = title
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    let insert_at = svg
        .find("<svg")
        .and_then(|start| svg[start..].find('>').map(|end| start + end + 1));
    match insert_at {
        Some(idx) => format!("{}\n<title>{}</title>{}", &svg[..idx], title, &svg[idx..]),
        None => svg.to_owned(),
    }
}

/// Smallest range containing every finite value, or [0, 1) if there is none
fn finite_range(values: impl Iterator<Item = Float>) -> Range<Float> {
    let (min, max) = values
        .filter(|x| x.is_finite())
        .fold((Float::INFINITY, Float::NEG_INFINITY), |(min, max), x| {
            (min.min(x), max.max(x))
        });
    if min <= max {
        min..max
    } else {
        0. ..1.
    }
}

/// Widen a range by some fraction of its width on each side
///
/// Degenerate ranges are widened by the same fraction of their magnitude, so
/// that flat curves don't sit on the frame of the plot.
fn pad(range: Range<Float>, fraction: Float) -> Range<Float> {
    let width = range.end - range.start;
    let margin = if width > 0. {
        width * fraction
    } else {
        range.start.abs().max(1.) * fraction
    };
    (range.start - margin)..(range.end + margin)
}
