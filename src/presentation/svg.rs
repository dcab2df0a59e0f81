// SVG draw step - Serializes the chart model into markup
use crate::application::interaction::escape_html;
use crate::domain::chart::{Axis, AxisLabel, AxisOrientation, Chart, Legend, Mark};
use crate::domain::color::Color;
use std::fmt::Write;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

/// Anything that can append itself to an SVG document.
pub trait Draw {
    fn draw(&self, out: &mut SvgWriter);
}

/// Append-only SVG text buffer with attribute escaping.
#[derive(Debug, Default)]
pub struct SvgWriter {
    buf: String,
}

impl SvgWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    /// Open `<name attr="value" ...>`.
    pub fn open(&mut self, name: &str, attrs: &[(&str, String)]) {
        self.start_tag(name, attrs);
        self.buf.push('>');
    }

    pub fn close(&mut self, name: &str) {
        let _ = write!(self.buf, "</{}>", name);
    }

    /// Self-closing `<name ... />`.
    pub fn leaf(&mut self, name: &str, attrs: &[(&str, String)]) {
        self.start_tag(name, attrs);
        self.buf.push_str("/>");
    }

    /// Element whose only child is escaped text.
    pub fn text(&mut self, name: &str, attrs: &[(&str, String)], content: &str) {
        self.open(name, attrs);
        self.buf.push_str(&escape_html(content));
        self.close(name);
    }

    fn start_tag(&mut self, name: &str, attrs: &[(&str, String)]) {
        let _ = write!(self.buf, "<{}", name);
        for (key, value) in attrs {
            let _ = write!(self.buf, " {}=\"{}\"", key, escape_html(value));
        }
    }
}

/// Compact number formatting: two decimals at most, no trailing zeros.
pub fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", num(x), num(y))
}

fn attr(key: &'static str, value: impl ToString) -> (&'static str, String) {
    (key, value.to_string())
}

fn draw_mark(mark: &Mark, extra: Vec<(&'static str, String)>, out: &mut SvgWriter) {
    let mut attrs = vec![
        attr("class", format!("dot {}", mark.category.class_name())),
        attr("cx", num(mark.cx)),
        attr("cy", num(mark.cy)),
        attr("r", num(mark.radius)),
        attr("fill", mark.fill.to_css()),
        attr("stroke", Color::BLACK.to_css()),
        attr("data-xvalue", mark.x_value()),
        attr("data-yvalue", mark.y_value()),
        attr("data-index", mark.index),
    ];
    attrs.extend(extra);
    out.leaf("circle", &attrs);
}

impl Draw for Axis {
    fn draw(&self, out: &mut SvgWriter) {
        let (anchor, domain_path) = match self.orientation {
            AxisOrientation::Bottom => (
                "middle",
                format!("M0,{}V0H{}V{}", num(TICK_SIZE), num(self.length), num(TICK_SIZE)),
            ),
            AxisOrientation::Left => (
                "end",
                format!("M{},{}H0V0H{}", num(-TICK_SIZE), num(self.length), num(-TICK_SIZE)),
            ),
        };

        out.open(
            "g",
            &[
                attr("id", self.id),
                attr("transform", translate(self.offset.0, self.offset.1)),
                attr("font-size", "10"),
                attr("text-anchor", anchor),
            ],
        );
        out.leaf(
            "path",
            &[
                attr("class", "domain"),
                attr("stroke", "currentColor"),
                attr("fill", "none"),
                attr("d", domain_path),
            ],
        );

        for tick in &self.ticks {
            let offset = TICK_SIZE + TICK_PADDING;
            match self.orientation {
                AxisOrientation::Bottom => {
                    out.open(
                        "g",
                        &[attr("class", "tick"), attr("transform", translate(tick.position, 0.0))],
                    );
                    out.leaf("line", &[attr("stroke", "currentColor"), attr("y2", num(TICK_SIZE))]);
                    out.text(
                        "text",
                        &[attr("fill", "currentColor"), attr("y", num(offset)), attr("dy", "0.71em")],
                        &tick.label,
                    );
                }
                AxisOrientation::Left => {
                    out.open(
                        "g",
                        &[attr("class", "tick"), attr("transform", translate(0.0, tick.position))],
                    );
                    out.leaf("line", &[attr("stroke", "currentColor"), attr("x2", num(-TICK_SIZE))]);
                    out.text(
                        "text",
                        &[attr("fill", "currentColor"), attr("x", num(-offset)), attr("dy", "0.32em")],
                        &tick.label,
                    );
                }
            }
            out.close("g");
        }

        out.close("g");
    }
}

impl Draw for AxisLabel {
    fn draw(&self, out: &mut SvgWriter) {
        out.text(
            "text",
            &[
                attr("id", "y-label"),
                attr("transform", format!("rotate({})", num(self.rotation))),
                attr("x", num(self.x)),
                attr("y", num(self.y)),
                attr("text-anchor", "middle"),
                attr("font-size", "16"),
            ],
            &self.text,
        );
    }
}

impl Draw for Legend {
    fn draw(&self, out: &mut SvgWriter) {
        out.open("g", &[attr("id", "legend"), attr("transform", translate(self.x, self.y))]);
        out.leaf(
            "rect",
            &[
                attr("class", "legend-border"),
                attr("width", num(self.width)),
                attr("height", num(self.height)),
                attr("fill", "none"),
                attr("stroke", Color::BLACK.to_css()),
            ],
        );

        let padding = (self.height - self.entries.len() as f64 * self.row_height) / 2.0;
        for (row, entry) in self.entries.iter().enumerate() {
            let top = padding + row as f64 * self.row_height;
            out.open(
                "g",
                &[
                    attr("class", format!("legend-item {}", entry.category.class_name())),
                    attr("transform", translate(padding, top)),
                ],
            );
            out.leaf(
                "rect",
                &[
                    attr("width", num(self.swatch_size)),
                    attr("height", num(self.swatch_size)),
                    attr("fill", entry.color.to_css()),
                ],
            );
            out.text(
                "text",
                &[
                    attr("x", num(self.swatch_size + padding)),
                    attr("y", num(self.swatch_size / 2.0)),
                    attr("dy", "0.32em"),
                    attr("font-size", "12"),
                ],
                &entry.label,
            );
            out.close("g");
        }

        out.close("g");
    }
}

impl Draw for Chart {
    fn draw(&self, out: &mut SvgWriter) {
        draw_chart(self, &|_: &Mark| Vec::new(), out);
    }
}

/// Draw the chart, appending `annotate(mark)` to each mark's attributes.
pub fn draw_chart(
    chart: &Chart,
    annotate: &dyn Fn(&Mark) -> Vec<(&'static str, String)>,
    out: &mut SvgWriter,
) {
    out.open(
        "svg",
        &[
            attr("xmlns", "http://www.w3.org/2000/svg"),
            attr("width", num(chart.width)),
            attr("height", num(chart.height)),
            attr("viewBox", format!("0 0 {} {}", num(chart.width), num(chart.height))),
        ],
    );
    out.text(
        "text",
        &[
            attr("id", "title"),
            attr("x", num(chart.width / 2.0)),
            attr("y", num(chart.margin.top * 0.4)),
            attr("text-anchor", "middle"),
            attr("font-size", "26"),
        ],
        &chart.title,
    );
    out.text(
        "text",
        &[
            attr("id", "subtitle"),
            attr("x", num(chart.width / 2.0)),
            attr("y", num(chart.margin.top * 0.7)),
            attr("text-anchor", "middle"),
            attr("font-size", "18"),
        ],
        &chart.subtitle,
    );

    out.open(
        "g",
        &[attr("class", "plot"), attr("transform", translate(chart.margin.left, chart.margin.top))],
    );
    chart.x_axis.draw(out);
    chart.y_axis.draw(out);
    chart.y_label.draw(out);
    for mark in &chart.marks {
        draw_mark(mark, annotate(mark), out);
    }
    chart.legend.draw(out);
    out.close("g");

    out.close("svg");
}

pub fn render_svg(chart: &Chart) -> String {
    let mut out = SvgWriter::new();
    chart.draw(&mut out);
    out.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::chart_service::build_chart;
    use crate::domain::record::Record;
    use crate::infrastructure::config::ChartConfig;

    fn chart() -> Chart {
        let records: Vec<Record> = serde_json::from_str(
            r#"[
                {"Time": "36:50", "Name": "Marco Pantani", "Year": 1995, "Nationality": "ITA", "Doping": "Alleged drug use"},
                {"Time": "39:12", "Name": "Chris Froome", "Year": 2015, "Nationality": "GBR", "Doping": ""}
            ]"#,
        )
        .unwrap();
        build_chart(&records, &ChartConfig::default()).unwrap()
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(7.0), "7");
        assert_eq!(num(12.346), "12.35");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(-90.0), "-90");
    }

    #[test]
    fn test_marks_carry_data_attributes() {
        let svg = render_svg(&chart());
        assert_eq!(svg.matches("class=\"dot ").count(), 2);
        assert!(svg.contains("data-xvalue=\"1995\""));
        assert!(svg.contains("data-yvalue=\"1970-01-01T00:36:50.000Z\""));
        assert!(svg.contains("r=\"7\""));
    }

    #[test]
    fn test_draw_chart_appends_mark_annotations() {
        let mut out = SvgWriter::new();
        draw_chart(&chart(), &|mark: &Mark| vec![attr("data-name", &mark.record.name)], &mut out);
        let svg = out.into_string();
        assert!(svg.contains("data-index=\"0\" data-name=\"Marco Pantani\""));
        assert_eq!(svg.matches("data-name=").count(), 2);
    }

    #[test]
    fn test_marks_drawn_in_dataset_order() {
        let svg = render_svg(&chart());
        let first = svg.find("data-xvalue=\"1995\"").unwrap();
        let second = svg.find("data-xvalue=\"2015\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_decorations_present() {
        let svg = render_svg(&chart());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        for needle in [
            "id=\"x-axis\"",
            "id=\"y-axis\"",
            "id=\"legend\"",
            "id=\"title\"",
            "rotate(-90)",
            "Time (in minutes)",
            "Doping allegations",
            "No doping allegations",
            ">37:00</text>",
            ">2016</text>",
        ] {
            assert!(svg.contains(needle), "missing {}", needle);
        }
    }

    #[test]
    fn test_text_is_escaped() {
        let mut out = SvgWriter::new();
        out.text("text", &[attr("title", "a\"b")], "Alpe d'Huez <fast>");
        assert_eq!(
            out.into_string(),
            "<text title=\"a&quot;b\">Alpe d&#39;Huez &lt;fast&gt;</text>"
        );
    }
}
