// Scale builder - Continuous domain-to-pixel mappings derived from the dataset
use crate::domain::chart::ChartError;
use crate::domain::race_time::RaceTime;
use crate::domain::record::Record;
use crate::infrastructure::config::ChartConfig;

/// Years added before the earliest and after the latest record.
const YEAR_PADDING: f64 = 1.0;

/// Tick intervals for time axes, in seconds.
const TIME_INTERVALS: [i64; 12] = [1, 5, 15, 30, 60, 300, 900, 1800, 3600, 10800, 21600, 43200];

/// Linear map from a numeric domain onto a pixel range.
///
/// A zero-width domain sends every input to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Roughly `count` round values (1, 2 or 5 times a power of ten) inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = ordered(self.domain);
        if count == 0 || !lo.is_finite() || !hi.is_finite() {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }

        let raw_step = (hi - lo) / count as f64;
        let power = raw_step.log10().floor();
        let error = raw_step / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };

        // Negative powers divide by an integer increment to avoid accumulating float error.
        if power < 0.0 {
            let inverse = 10f64.powf(-power) / factor;
            let first = (lo * inverse).ceil() as i64;
            let last = (hi * inverse).floor() as i64;
            (first..=last).map(|i| i as f64 / inverse).collect()
        } else {
            let step = factor * 10f64.powf(power);
            let first = (lo / step).ceil() as i64;
            let last = (hi / step).floor() as i64;
            (first..=last).map(|i| i as f64 * step).collect()
        }
    }
}

/// Linear map from race times onto a pixel range, backed by millisecond offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    linear: LinearScale,
    domain: (RaceTime, RaceTime),
}

impl TimeScale {
    pub fn new(domain: (RaceTime, RaceTime), range: (f64, f64)) -> Self {
        let linear = LinearScale::new(
            (
                domain.0.timestamp_millis() as f64,
                domain.1.timestamp_millis() as f64,
            ),
            range,
        );
        Self { linear, domain }
    }

    pub fn domain(&self) -> (RaceTime, RaceTime) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn apply(&self, time: &RaceTime) -> f64 {
        self.linear.apply(time.timestamp_millis() as f64)
    }

    /// Times aligned to the interval closest to `span / count`.
    pub fn ticks(&self, count: usize) -> Vec<RaceTime> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            (self.domain.0.total_seconds(), self.domain.1.total_seconds())
        } else {
            (self.domain.1.total_seconds(), self.domain.0.total_seconds())
        };
        if count == 0 {
            return Vec::new();
        }
        if lo == hi {
            return vec![RaceTime::from_seconds(lo)];
        }

        let interval = time_interval((hi - lo) as f64 / count as f64);
        let first = lo.div_euclid(interval) + i64::from(lo.rem_euclid(interval) != 0);
        let last = hi.div_euclid(interval);
        (first..=last)
            .map(|i| RaceTime::from_seconds(i * interval))
            .collect()
    }
}

/// Pick the standard interval nearest (by ratio) to the target step.
fn time_interval(target: f64) -> i64 {
    let index = TIME_INTERVALS.partition_point(|&s| (s as f64) < target);
    if index == 0 {
        return TIME_INTERVALS[0];
    }
    if index == TIME_INTERVALS.len() {
        // Beyond half a day, fall back to whole hours.
        return ((target / 3600.0).ceil() as i64).max(1) * 3600;
    }

    let below = TIME_INTERVALS[index - 1] as f64;
    let above = TIME_INTERVALS[index] as f64;
    if target / below < above / target {
        TIME_INTERVALS[index - 1]
    } else {
        TIME_INTERVALS[index]
    }
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// The two scales of one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    /// Year (padded by one on each side) to horizontal pixel.
    pub x: LinearScale,
    /// Race time to vertical pixel over the inverted range `[plot_height, 0]`.
    pub y: TimeScale,
    pub plot_width: f64,
    pub plot_height: f64,
}

impl ChartScales {
    pub fn from_records(records: &[Record], config: &ChartConfig) -> Result<Self, ChartError> {
        let plot_width = config.plot_width();
        let plot_height = config.plot_height();
        if !(plot_width > 0.0 && plot_height > 0.0) {
            return Err(ChartError::InvalidDimensions {
                width: plot_width,
                height: plot_height,
            });
        }

        let min_year = records.iter().map(|r| r.year).min().ok_or(ChartError::EmptyDataset)?;
        let max_year = records.iter().map(|r| r.year).max().ok_or(ChartError::EmptyDataset)?;
        let min_time = records.iter().map(|r| r.time).min().ok_or(ChartError::EmptyDataset)?;
        let max_time = records.iter().map(|r| r.time).max().ok_or(ChartError::EmptyDataset)?;

        let x = LinearScale::new(
            (
                f64::from(min_year) - YEAR_PADDING,
                f64::from(max_year) + YEAR_PADDING,
            ),
            (0.0, plot_width),
        );
        let y = TimeScale::new((min_time, max_time), (plot_height, 0.0));

        tracing::debug!(
            "Scales built: years {}..={}, times {}..={}",
            min_year,
            max_year,
            min_time,
            max_time
        );

        Ok(Self {
            x,
            y,
            plot_width,
            plot_height,
        })
    }

    pub fn x_for_year(&self, year: i32) -> f64 {
        self.x.apply(f64::from(year))
    }

    pub fn y_for_time(&self, time: &RaceTime) -> f64 {
        self.y.apply(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, time: &str) -> Record {
        Record {
            year,
            time: RaceTime::parse(time).unwrap(),
            name: format!("Rider {}", year),
            nationality: "FRA".to_string(),
            doping: String::new(),
            place: None,
            seconds: None,
            url: None,
        }
    }

    #[test]
    fn test_linear_scale_maps_endpoints() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(scale.apply(0.0), 0.0);
        assert_eq!(scale.apply(5.0), 50.0);
        assert_eq!(scale.apply(10.0), 100.0);

        let inverted = LinearScale::new((0.0, 10.0), (100.0, 0.0));
        assert_eq!(inverted.apply(2.0), 80.0);
    }

    #[test]
    fn test_degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new((3.0, 3.0), (500.0, 0.0));
        assert_eq!(scale.apply(3.0), 250.0);
        assert_eq!(scale.apply(42.0), 250.0);
    }

    #[test]
    fn test_linear_ticks() {
        let scale = LinearScale::new((1993.0, 2016.0), (0.0, 840.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first(), Some(&1994.0));
        assert_eq!(ticks.last(), Some(&2016.0));
        assert!(ticks.windows(2).all(|w| w[1] - w[0] == 2.0));

        let small = LinearScale::new((0.0, 1.0), (0.0, 1.0));
        assert_eq!(small.ticks(5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_time_ticks_use_round_intervals() {
        let scale = TimeScale::new(
            (RaceTime::parse("36:50").unwrap(), RaceTime::parse("39:50").unwrap()),
            (500.0, 0.0),
        );
        let labels: Vec<String> = scale.ticks(10).iter().map(|t| t.to_string()).collect();
        assert_eq!(labels.first().map(String::as_str), Some("37:00"));
        assert_eq!(labels.last().map(String::as_str), Some("39:45"));
        assert_eq!(labels.len(), 12);
    }

    #[test]
    fn test_time_interval_selection() {
        assert_eq!(time_interval(0.2), 1);
        assert_eq!(time_interval(18.0), 15);
        assert_eq!(time_interval(25.0), 30);
        assert_eq!(time_interval(200.0), 300);
        assert_eq!(time_interval(100_000.0), 28 * 3600);
    }

    #[test]
    fn test_scales_are_monotonic() {
        let records = vec![
            record(1995, "37:15"),
            record(2001, "38:01"),
            record(1995, "36:50"),
            record(2015, "39:50"),
        ];
        let scales = ChartScales::from_records(&records, &ChartConfig::default()).unwrap();

        for a in &records {
            for b in &records {
                if a.year < b.year {
                    assert!(scales.x_for_year(a.year) <= scales.x_for_year(b.year));
                }
                if a.time < b.time {
                    assert!(scales.y_for_time(&a.time) >= scales.y_for_time(&b.time));
                }
            }
        }
    }

    #[test]
    fn test_year_padding_keeps_marks_off_edges() {
        let records = vec![record(1994, "37:00"), record(2015, "39:00")];
        let config = ChartConfig::default();
        let scales = ChartScales::from_records(&records, &config).unwrap();

        assert!(scales.x_for_year(1994) > 0.0);
        assert!(scales.x_for_year(2015) < config.plot_width());
        assert_eq!(scales.x.domain(), (1993.0, 2016.0));
    }

    #[test]
    fn test_single_record_is_finite_and_in_range() {
        let records = vec![record(2004, "37:36")];
        let config = ChartConfig::default();
        let scales = ChartScales::from_records(&records, &config).unwrap();

        let x = scales.x_for_year(2004);
        let y = scales.y_for_time(&records[0].time);
        assert!(x.is_finite() && x > 0.0 && x < config.plot_width());
        assert!(y.is_finite() && (0.0..=config.plot_height()).contains(&y));
        assert_eq!(scales.y.ticks(10).len(), 1);
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let result = ChartScales::from_records(&[], &ChartConfig::default());
        assert_eq!(result, Err(ChartError::EmptyDataset));
    }

    #[test]
    fn test_alternate_dimensions() {
        let config = ChartConfig {
            width: 400.0,
            height: 300.0,
            ..ChartConfig::default()
        };
        let records = vec![record(2000, "36:00"), record(2002, "38:00")];
        let scales = ChartScales::from_records(&records, &config).unwrap();
        assert_eq!(scales.x.range(), (0.0, 320.0));
        assert_eq!(scales.y.range(), (170.0, 0.0));
        assert_eq!(scales.y_for_time(&records[0].time), 170.0);
        assert_eq!(scales.y_for_time(&records[1].time), 0.0);

        let cramped = ChartConfig {
            width: 50.0,
            ..ChartConfig::default()
        };
        assert!(matches!(
            ChartScales::from_records(&records, &cramped),
            Err(ChartError::InvalidDimensions { .. })
        ));
    }
}
