// Page assembly - Host document with the chart container, tooltip and event wiring
use crate::application::interaction::{PointerEvent, Tooltip, escape_html, on_pointer_enter};
use crate::domain::chart::{Chart, Mark};
use crate::infrastructure::config::ChartConfig;
use crate::presentation::svg::{SvgWriter, draw_chart, num};

const CONTAINER_ID: &str = "chart";

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; display: flex; justify-content: center; }
#chart { margin-top: 20px; }
#tooltip {
  position: absolute; pointer-events: none; padding: 8px; border-radius: 4px;
  font-size: 12px; line-height: 1.4; max-width: 260px; opacity: 0;
}
.dot:hover { stroke-width: 2; }
"#;

// Applies the per-mark tooltip states precomputed on each `.dot`.
const SCRIPT: &str = r#"
(() => {
  const tooltip = document.getElementById('tooltip');
  const offsetX = Number(tooltip.dataset.offsetX);
  const fadeMs = Number(tooltip.dataset.fadeMs);
  tooltip.style.transition = `opacity ${fadeMs}ms`;
  document.querySelectorAll('.dot').forEach((dot) => {
    dot.addEventListener('mouseover', (event) => {
      tooltip.style.opacity = 1;
      tooltip.style.left = `${event.pageX + offsetX}px`;
      tooltip.style.top = `${Number(dot.dataset.tooltipTop) + dot.ownerSVGElement.getBoundingClientRect().top + window.scrollY}px`;
      tooltip.style.background = dot.dataset.tooltipColor;
      tooltip.setAttribute('data-year', dot.dataset.xvalue);
      tooltip.innerHTML = dot.dataset.tooltipHtml;
    });
    dot.addEventListener('mouseout', () => {
      tooltip.style.opacity = 0;
    });
  });
})();
"#;

/// Full HTML document. `None` yields the empty shell left behind by a failed load.
pub fn render_page(chart: Option<&Chart>, config: &ChartConfig) -> String {
    let body = chart.map(|c| render_chart(c, config)).unwrap_or_default();
    let tooltip = Tooltip::hidden();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n<div id=\"{container}\">{body}</div>\n<div id=\"tooltip\" data-offset-x=\"{offset}\" data-fade-ms=\"{fade}\" style=\"opacity: {opacity}\"></div>\n{script}</body>\n</html>\n",
        title = escape_html(&config.title),
        style = STYLE,
        container = CONTAINER_ID,
        body = body,
        offset = num(config.tooltip_offset_x),
        fade = num(config.fade_ms),
        opacity = num(tooltip.visibility),
        script = if chart.is_some() {
            format!("<script>{}</script>\n", SCRIPT)
        } else {
            String::new()
        },
    )
}

/// SVG with each mark annotated with the tooltip it shows on hover.
fn render_chart(chart: &Chart, config: &ChartConfig) -> String {
    let hidden = Tooltip::hidden();
    let origin = PointerEvent::new(0.0, 0.0);
    let annotate = |mark: &Mark| {
        let shown = on_pointer_enter(&hidden, mark, &origin, config);
        vec![
            ("data-tooltip-top", num(shown.top)),
            ("data-tooltip-color", shown.background.to_css()),
            ("data-tooltip-html", shown.html),
        ]
    };

    let mut out = SvgWriter::new();
    draw_chart(chart, &annotate, &mut out);

    tracing::debug!("Rendered chart with {} marks", chart.marks.len());
    out.into_string()
}
