use crate::plot::spec::{LineStyle, PlotColor, PlotSpec, SeriesKind};
use crate::plot::PlotError;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use std::f64::consts::PI;
use std::path::Path;

const FONT: &str = "sans-serif";
const STAR_RADIUS: f64 = 10.0;

fn drawing_err<E: std::error::Error>(e: E) -> PlotError {
    PlotError::Drawing(e.to_string())
}

fn rgb(color: PlotColor) -> RGBColor {
    let (r, g, b) = color.rgb();
    RGBColor(r, g, b)
}

/// Five-pointed star outline around the origin, in pixels.
fn star_outline(radius: f64) -> Vec<(i32, i32)> {
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { radius } else { radius * 0.4 };
            let angle = -PI / 2.0 + i as f64 * PI / 5.0;
            ((r * angle.cos()).round() as i32, (r * angle.sin()).round() as i32)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Labels {
    /// Caption, axes, legend and point labels.
    Shown,
    /// Shapes only, no font lookups.
    Hidden,
}

/// Writes `spec` as a bitmap image, overwriting `path`.
pub fn render(spec: &PlotSpec, path: &Path, size: (u32, u32)) -> Result<(), PlotError> {
    draw(spec, path, size, Labels::Shown)
}

fn draw(spec: &PlotSpec, path: &Path, size: (u32, u32), labels: Labels) -> Result<(), PlotError> {
    let ((x0, x1), (y0, y1)) = spec.bounds().ok_or(PlotError::Empty)?;

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_err)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if labels == Labels::Shown {
        builder.caption(&spec.title, (FONT, 24)).x_label_area_size(50).y_label_area_size(80);
    }
    let mut ctx = builder.build_cartesian_2d(x0..x1, y0..y1).map_err(drawing_err)?;

    if labels == Labels::Shown {
        ctx.configure_mesh()
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .bold_line_style(BLACK.mix(0.1))
            .light_line_style(BLACK.mix(0.03))
            .draw()
            .map_err(drawing_err)?;
    }

    for series in &spec.series {
        let col = rgb(series.color);
        let points = series.points.iter().copied();
        let anno = match series.kind {
            SeriesKind::Line(LineStyle::Solid) => {
                ctx.draw_series(LineSeries::new(points, col.stroke_width(2)))
            },
            SeriesKind::Line(LineStyle::Dashed) => {
                ctx.draw_series(DashedLineSeries::new(points, 12, 6, col.stroke_width(2)))
            },
            SeriesKind::Line(LineStyle::Dotted) => {
                ctx.draw_series(DashedLineSeries::new(points, 2, 5, col.stroke_width(2)))
            },
            SeriesKind::Scatter => {
                ctx.draw_series(points.map(|point| Circle::new(point, 5, col.filled())))
            },
            SeriesKind::Star => ctx.draw_series(points.map(|point| {
                EmptyElement::at(point) + Polygon::new(star_outline(STAR_RADIUS), col.filled())
            })),
        }
        .map_err(drawing_err)?;

        let kind = series.kind;
        anno.label(series.label.as_str()).legend(move |(x, y)| match kind {
            SeriesKind::Line(_) => PathElement::new(vec![(x, y), (x + 20, y)], col.stroke_width(2)),
            // short thick stroke stands in for a marker
            SeriesKind::Scatter | SeriesKind::Star => {
                PathElement::new(vec![(x + 7, y), (x + 13, y)], col.stroke_width(6))
            },
        });
    }

    if labels == Labels::Shown {
        ctx.draw_series(spec.annotations.iter().map(|a| {
            Text::new(a.text.clone(), a.position, (FONT, 15).into_font().color(&rgb(a.color)))
        }))
        .map_err(drawing_err)?;

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .draw()
            .map_err(drawing_err)?;
    }

    root.present().map_err(drawing_err)?;
    tracing::info!(path = %path.display(), "saved plot");
    Ok(())
}
