use egui::{Align2, Color32, RichText};
use egui_plot::{
    Corner, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text,
};
use salaryrs_core::plot::{self, PlotColor, PlotSpec, SeriesKind};

pub struct ForecastViewer {
    spec: PlotSpec,
}

impl ForecastViewer {
    pub fn new(spec: PlotSpec) -> Self {
        Self { spec }
    }
}

fn color32(color: PlotColor) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgb(r, g, b)
}

fn line_style(style: plot::LineStyle) -> LineStyle {
    match style {
        plot::LineStyle::Solid => LineStyle::Solid,
        plot::LineStyle::Dotted => LineStyle::Dotted { spacing: 6.0 },
        plot::LineStyle::Dashed => LineStyle::Dashed { length: 12.0 },
    }
}

impl eframe::App for ForecastViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&self.spec.title);
            });

            Plot::new("forecast_plot")
                .legend(Legend::default().position(Corner::LeftTop))
                .x_axis_label(self.spec.x_label.as_str())
                .y_axis_label(self.spec.y_label.as_str())
                .show(ui, |plot_ui| {
                    for series in &self.spec.series {
                        let color = color32(series.color);
                        let points: Vec<[f64; 2]> =
                            series.points.iter().map(|&(x, y)| [x, y]).collect();
                        let label = series.label.as_str();

                        match series.kind {
                            SeriesKind::Line(style) => plot_ui.line(
                                Line::new(label, PlotPoints::from(points))
                                    .color(color)
                                    .style(line_style(style)),
                            ),
                            SeriesKind::Scatter => plot_ui.points(
                                Points::new(label, PlotPoints::from(points))
                                    .shape(MarkerShape::Circle)
                                    .filled(true)
                                    .color(color)
                                    .radius(4.0),
                            ),
                            SeriesKind::Star => plot_ui.points(
                                Points::new(label, PlotPoints::from(points))
                                    .shape(MarkerShape::Asterisk)
                                    .color(color)
                                    .radius(8.0),
                            ),
                        }
                    }

                    for a in &self.spec.annotations {
                        plot_ui.text(
                            Text::new(
                                a.text.as_str(),
                                PlotPoint::new(a.position.0, a.position.1),
                                RichText::new(a.text.as_str()).color(color32(a.color)),
                            )
                            .anchor(Align2::LEFT_CENTER),
                        );
                    }
                });
        });
    }
}
