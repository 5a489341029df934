//! Comparison chart rendering.
//!
//! The chart is drawn with `plotters` into an SVG document. PDF output converts that document
//! with `svg2pdf`, so both formats share one layout. PDF text is set in a bundled DejaVu Sans,
//! which covers the Cyrillic labels regardless of the fonts installed on the host.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use svg2pdf::usvg;
use tracing::info;

use crate::config::ChartStyle;
use crate::error::PlotError;
use crate::results::ScaledSeries;

/// File format of the written chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Pdf,
}

impl OutputFormat {
    /// `.svg` (any case) selects SVG; everything else is PDF.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => OutputFormat::Svg,
            _ => OutputFormat::Pdf,
        }
    }
}

/// Font every chart label is set in when converting to PDF.
const CHART_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
const CHART_FONT_FAMILY: &str = "DejaVu Sans";

fn render_err(e: impl std::fmt::Display) -> PlotError {
    PlotError::Render(e.to_string())
}

/// Axis ranges covering every point, with the y axis anchored at zero.
///
/// An empty series gets `0..1` on both axes.
fn axis_ranges(series: &ScaledSeries) -> (Range<f64>, Range<f64>) {
    if series.is_empty() {
        return (0.0..1.0, 0.0..1.0);
    }

    let xs = series.size.iter().map(|&x| x as f64);
    let x_min = xs.clone().fold(f64::INFINITY, f64::min);
    let x_max = xs.fold(f64::NEG_INFINITY, f64::max);
    let x_range = if x_max > x_min {
        x_min..x_max
    } else {
        x_min - 1.0..x_max + 1.0
    };

    let ys = series.indexed_ms.iter().chain(&series.no_index_ms).copied();
    let y_min = ys.clone().fold(0.0, f64::min);
    let y_max = ys.fold(0.0, f64::max);
    let y_range = if y_max > y_min {
        y_min..y_max * 1.1
    } else {
        y_min..y_min + 1.0
    };

    (x_range, y_range)
}

/// Renders the two timing series as an SVG document. Empty series give a chart with axes,
/// labels and legend but no points.
pub fn render_svg(series: &ScaledSeries, style: &ChartStyle) -> Result<String, PlotError> {
    let (x_range, y_range) = axis_ranges(series);
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (style.width, style.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, y_range)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc(style.x_label.as_str())
            .y_desc(style.y_label.as_str())
            .draw()
            .map_err(render_err)?;

        for (label, color, points) in [
            (&style.indexed_label, GREEN, series.indexed_points()),
            (&style.no_index_label, BLUE, series.no_index_points()),
        ] {
            chart
                .draw_series(LineSeries::new(points.iter().copied(), color))
                .map_err(render_err)?
                .label(label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

            // Star marker: diagonal cross plus horizontal and vertical bars
            chart
                .draw_series(points.iter().map(|&point| {
                    EmptyElement::at(point)
                        + Cross::new((0, 0), 4, color)
                        + PathElement::new(vec![(0, -5), (0, 5)], color)
                        + PathElement::new(vec![(-5, 0), (5, 0)], color)
                }))
                .map_err(render_err)?;
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
    }

    Ok(svg)
}

/// Parses a chart SVG with the bundled font standing in for the generic families.
///
/// usvg silently drops text it has no font for, so losing every `<text>` element is an error.
fn parse_chart_svg(svg: &str) -> Result<usvg::Tree, PlotError> {
    let mut options = usvg::Options {
        font_family: CHART_FONT_FAMILY.to_string(),
        ..Default::default()
    };
    let fontdb = options.fontdb_mut();
    fontdb.load_font_data(CHART_FONT.to_vec());
    fontdb.set_sans_serif_family(CHART_FONT_FAMILY);
    // usvg falls back to serif when a named family is missing
    fontdb.set_serif_family(CHART_FONT_FAMILY);

    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| PlotError::Pdf(e.to_string()))?;
    if svg.contains("<text") && !tree.has_text_nodes() {
        return Err(PlotError::Pdf("no font available for chart text".to_string()));
    }

    Ok(tree)
}

/// Converts an SVG document into a single-page PDF with embedded text.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>, PlotError> {
    let tree = parse_chart_svg(svg)?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| PlotError::Pdf(format!("{e:?}")))
}

/// Renders the chart and writes it to `path`, truncating any existing file.
///
/// Nothing is written unless rendering succeeds.
pub fn write_chart(
    path: impl AsRef<Path>,
    series: &ScaledSeries,
    style: &ChartStyle,
) -> Result<OutputFormat, PlotError> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path);

    let svg = render_svg(series, style)?;
    let bytes = match format {
        OutputFormat::Svg => svg.into_bytes(),
        OutputFormat::Pdf => svg_to_pdf(&svg)?,
    };

    let write = || -> std::io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        out.write_all(&bytes)?;
        out.flush()
    };
    write().map_err(|e| PlotError::from(e).at(path))?;

    info!(
        "Wrote {:?} chart with {} points per series to {}",
        format,
        series.len(),
        path.display()
    );
    Ok(format)
}
