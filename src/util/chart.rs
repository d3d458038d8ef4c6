use crate::consts::{
    CHART_BAR_GAP, CHART_BAR_WIDTH, CHART_LABEL_SPACE, CHART_MARGIN, CHART_PLOT_HEIGHT,
};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::Serialize;
use svg::Document;
use svg::node::element::{Group, Line, Rectangle, Text};

/// One labeled bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Number of horizontal grid lines above the axis
const N_GRID_LINES: usize = 5;

const BAR_FILL: &str = "#4C72B0";

/// Renders a vertical bar chart: one bar per entry, value printed on top, labels slanted beneath.
pub fn bar_chart(title: &str, y_label: &str, bars: &[Bar]) -> Document {
    let plot_width = bars.len() as f32 * (CHART_BAR_WIDTH + CHART_BAR_GAP) + CHART_BAR_GAP;
    let width = plot_width + 2.0 * CHART_MARGIN;
    let height = CHART_PLOT_HEIGHT + CHART_LABEL_SPACE + 2.0 * CHART_MARGIN;

    let x0 = CHART_MARGIN;
    let y_axis = CHART_MARGIN + CHART_PLOT_HEIGHT;

    let max_value = bars
        .iter()
        .map(|b| OrderedFloat(b.value))
        .max()
        .map_or(0.0, |v| v.0);
    //avoid a zero scale when every bar is empty
    let scale = match max_value > 0.0 {
        true => CHART_PLOT_HEIGHT as f64 / max_value,
        false => 0.0,
    };

    let grid = (1..=N_GRID_LINES)
        .map(|i| {
            let y = y_axis - CHART_PLOT_HEIGHT * i as f32 / N_GRID_LINES as f32;
            let tick = max_value * i as f64 / N_GRID_LINES as f64;
            Group::new()
                .add(
                    Line::new()
                        .set("x1", x0)
                        .set("x2", x0 + plot_width)
                        .set("y1", y)
                        .set("y2", y)
                        .set("stroke", "#999")
                        .set("stroke-dasharray", "4 4")
                        .set("stroke-opacity", 0.6),
                )
                .add(
                    Text::new(format!("{tick:.1}"))
                        .set("x", x0 - 6.0)
                        .set("y", y + 4.0)
                        .set("text-anchor", "end")
                        .set("font-size", 11),
                )
        })
        .collect_vec();

    let bar_groups = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let x = x0 + CHART_BAR_GAP + i as f32 * (CHART_BAR_WIDTH + CHART_BAR_GAP);
            let h = (bar.value * scale) as f32;
            let center = x + CHART_BAR_WIDTH / 2.0;
            Group::new()
                .add(
                    Rectangle::new()
                        .set("x", x)
                        .set("y", y_axis - h)
                        .set("width", CHART_BAR_WIDTH)
                        .set("height", h)
                        .set("fill", BAR_FILL)
                        .set("stroke", "black"),
                )
                .add(
                    Text::new(format!("{:.1}", bar.value))
                        .set("x", center)
                        .set("y", y_axis - h - 4.0)
                        .set("text-anchor", "middle")
                        .set("font-size", 11),
                )
                .add(
                    Text::new(bar.label.clone())
                        .set("x", center)
                        .set("y", y_axis + 14.0)
                        .set("text-anchor", "end")
                        .set("font-size", 12)
                        .set("transform", format!("rotate(-45 {center} {})", y_axis + 14.0)),
                )
        })
        .collect_vec();

    let axes = Group::new()
        .add(
            Line::new()
                .set("x1", x0)
                .set("x2", x0 + plot_width)
                .set("y1", y_axis)
                .set("y2", y_axis)
                .set("stroke", "black"),
        )
        .add(
            Line::new()
                .set("x1", x0)
                .set("x2", x0)
                .set("y1", CHART_MARGIN)
                .set("y2", y_axis)
                .set("stroke", "black"),
        );

    let title_text = Text::new(title)
        .set("x", width / 2.0)
        .set("y", CHART_MARGIN / 2.0)
        .set("text-anchor", "middle")
        .set("font-size", 16);

    let y_label_text = Text::new(y_label)
        .set("x", CHART_MARGIN / 4.0)
        .set("y", CHART_MARGIN + CHART_PLOT_HEIGHT / 2.0)
        .set("text-anchor", "middle")
        .set("font-size", 12)
        .set(
            "transform",
            format!(
                "rotate(-90 {} {})",
                CHART_MARGIN / 4.0,
                CHART_MARGIN + CHART_PLOT_HEIGHT / 2.0
            ),
        );

    let mut document = Document::new()
        .set("viewBox", (0.0f32, 0.0f32, width, height))
        .set("font-family", "sans-serif")
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", "white"),
        )
        .add(title_text)
        .add(y_label_text);

    for g in grid.into_iter().chain(bar_groups) {
        document = document.add(g);
    }
    document.add(axes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_rect_per_bar_plus_background() {
        let bars = vec![
            Bar {
                label: "a (lazy)".into(),
                value: 2.0,
            },
            Bar {
                label: "a (batch)".into(),
                value: 1.0,
            },
        ];
        let rendered = bar_chart("t", "us", &bars).to_string();
        assert_eq!(rendered.matches("<rect").count(), bars.len() + 1);
        assert!(rendered.contains("a (batch)"));
        assert!(rendered.contains("2.0"));
    }

    #[test]
    fn empty_chart_renders() {
        let rendered = bar_chart("empty", "us", &[]).to_string();
        assert!(rendered.contains("empty"));
    }
}
