// Interaction layer - Hover state machine driving the singleton tooltip
use crate::domain::chart::Mark;
use crate::domain::color::Color;
use crate::infrastructure::config::ChartConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    Hovered,
}

/// Horizontal pointer position in page coordinates, stamped with milliseconds since page load.
///
/// The tooltip's vertical position follows the mark, not the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub page_x: f64,
    pub at_ms: f64,
}

impl PointerEvent {
    pub fn new(page_x: f64, at_ms: f64) -> Self {
        Self { page_x, at_ms }
    }
}

/// Linear opacity interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub from: f64,
    pub to: f64,
    pub started_ms: f64,
    pub duration_ms: f64,
}

impl Fade {
    pub fn settled(opacity: f64) -> Self {
        Self {
            from: opacity,
            to: opacity,
            started_ms: 0.0,
            duration_ms: 0.0,
        }
    }

    pub fn opacity_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let progress = ((now_ms - self.started_ms) / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * progress
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms - self.started_ms >= self.duration_ms
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Target opacity: 1 while a mark is hovered, 0 otherwise.
    pub visibility: f64,
    pub fade: Fade,
    pub left: f64,
    pub top: f64,
    pub background: Color,
    /// Exposed as `data-year`.
    pub year: Option<i32>,
    pub html: String,
}

impl Tooltip {
    pub fn hidden() -> Self {
        Self {
            visibility: 0.0,
            fade: Fade::settled(0.0),
            left: 0.0,
            top: 0.0,
            background: Color::WHITE,
            year: None,
            html: String::new(),
        }
    }

    pub fn opacity_at(&self, now_ms: f64) -> f64 {
        self.fade.opacity_at(now_ms)
    }
}

/// `idle -> hovered`: show the tooltip for `mark` next to the pointer.
pub fn on_pointer_enter(
    tooltip: &Tooltip,
    mark: &Mark,
    event: &PointerEvent,
    config: &ChartConfig,
) -> Tooltip {
    Tooltip {
        visibility: 1.0,
        fade: restart_fade(tooltip, 1.0, event.at_ms, config.fade_ms),
        left: event.page_x + config.tooltip_offset_x,
        top: tooltip_top(mark, config),
        background: mark.fill.with_alpha(config.tooltip_alpha),
        year: Some(mark.record.year),
        html: tooltip_html(mark),
    }
}

/// `hovered -> idle`: fade out, keeping the last content in place.
pub fn on_pointer_exit(tooltip: &Tooltip, event: &PointerEvent, config: &ChartConfig) -> Tooltip {
    Tooltip {
        visibility: 0.0,
        fade: restart_fade(tooltip, 0.0, event.at_ms, config.fade_ms),
        ..tooltip.clone()
    }
}

fn restart_fade(tooltip: &Tooltip, to: f64, now_ms: f64, duration_ms: f64) -> Fade {
    Fade {
        from: tooltip.opacity_at(now_ms),
        to,
        started_ms: now_ms,
        duration_ms,
    }
}

/// Page-space top edge: level with the mark, shifted by the configured offset.
pub fn tooltip_top(mark: &Mark, config: &ChartConfig) -> f64 {
    mark.cy + config.margin.top + config.tooltip_offset_y
}

pub fn tooltip_html(mark: &Mark) -> String {
    let record = &mark.record;
    let mut html = format!(
        "{}: {}<br/>Year: {}, Time: {}",
        escape_html(&record.name),
        escape_html(&record.nationality),
        record.year,
        record.time
    );
    if !record.doping.is_empty() {
        html.push_str("<br/><br/>");
        html.push_str(&escape_html(&record.doping));
    }
    html
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Owns the tooltip and the per-mark hover states for one render.
#[derive(Debug, Clone)]
pub struct InteractionLayer {
    config: ChartConfig,
    tooltip: Tooltip,
    states: Vec<HoverState>,
}

impl InteractionLayer {
    pub fn new(mark_count: usize, config: ChartConfig) -> Self {
        Self {
            config,
            tooltip: Tooltip::hidden(),
            states: vec![HoverState::Idle; mark_count],
        }
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn state(&self, index: usize) -> Option<HoverState> {
        self.states.get(index).copied()
    }

    /// Hover `mark`. Only one mark is hovered at a time, so any other goes back to idle.
    pub fn pointer_enter(&mut self, mark: &Mark, event: PointerEvent) {
        if mark.index >= self.states.len() {
            tracing::warn!("Pointer entered unknown mark {}", mark.index);
            return;
        }
        for (index, state) in self.states.iter_mut().enumerate() {
            *state = if index == mark.index {
                HoverState::Hovered
            } else {
                HoverState::Idle
            };
        }
        self.tooltip = on_pointer_enter(&self.tooltip, mark, &event, &self.config);
        tracing::debug!("Hovered mark {} ({})", mark.index, mark.record.name);
    }

    pub fn pointer_exit(&mut self, mark: &Mark, event: PointerEvent) {
        let Some(state) = self.states.get_mut(mark.index) else {
            tracing::warn!("Pointer left unknown mark {}", mark.index);
            return;
        };
        if *state == HoverState::Idle {
            return;
        }
        *state = HoverState::Idle;
        self.tooltip = on_pointer_exit(&self.tooltip, &event, &self.config);
    }
}
