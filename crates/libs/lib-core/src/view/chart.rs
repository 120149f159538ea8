//! # Chart Panel View Model
//!
//! Turns the OHLCV history of a coin into a close-price line scaled into a
//! fixed SVG viewbox, plus the labels drawn around it.

use chrono::DateTime;
use shared::dto::HistoricalPrice;
use shared::utils::{format_percentage, format_price};

use super::detail::LOADING_TEXT;
use super::price::Trend;
use crate::query::QueryState;

pub const CHART_WIDTH: f64 = 480.0;
pub const CHART_HEIGHT: f64 = 200.0;
pub const CHART_PADDING: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    /// Unix seconds of the candle close
    pub time: i64,
    pub close: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
    pub min: f64,
    pub max: f64,
}

impl ChartSeries {
    /// `None` when there is no usable (finite) close price.
    pub fn from_history(rows: &[HistoricalPrice]) -> Option<Self> {
        let mut points: Vec<ChartPoint> = rows
            .iter()
            .filter(|row| row.close.is_finite())
            .map(|row| ChartPoint { time: row.time_close, close: row.close })
            .collect();
        if points.is_empty() {
            return None;
        }
        points.sort_by_key(|p| p.time);

        let (min, max) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.close), hi.max(p.close)));

        Some(Self { points, min, max })
    }

    pub fn first(&self) -> Option<ChartPoint> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<ChartPoint> {
        self.points.last().copied()
    }

    /// Percentage change from the first to the last close; zero without data.
    pub fn change_pct(&self) -> f64 {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) if first.close != 0.0 => (last.close - first.close) / first.close * 100.0,
            _ => 0.0,
        }
    }

    /// `points` attribute of an SVG `<polyline>` in a `width` x `height` box.
    ///
    /// A single point sits in the horizontal middle; a flat series sits in the
    /// vertical middle.
    pub fn polyline(&self, width: f64, height: f64, padding: f64) -> String {
        let inner_w = (width - 2.0 * padding).max(0.0);
        let inner_h = (height - 2.0 * padding).max(0.0);
        let span = self.max - self.min;
        let steps = self.points.len().saturating_sub(1);

        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let x = if steps == 0 {
                    width / 2.0
                } else {
                    padding + inner_w * i as f64 / steps as f64
                };
                let y = if span == 0.0 {
                    height / 2.0
                } else {
                    padding + inner_h * (self.max - p.close) / span
                };
                format!("{:.2},{:.2}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub series: ChartSeries,
    pub polyline: String,
    pub high_label: String,
    pub low_label: String,
    pub range_label: String,
    pub change_label: String,
    pub trend: Trend,
}

impl ChartView {
    pub fn new(series: ChartSeries) -> Self {
        let change = series.change_pct();
        Self {
            polyline: series.polyline(CHART_WIDTH, CHART_HEIGHT, CHART_PADDING),
            high_label: format_price(series.max),
            low_label: format_price(series.min),
            range_label: range_label(&series),
            change_label: format_percentage(change),
            trend: Trend::from_change(change),
            series,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartBody {
    Loading,
    Failed { message: String },
    Empty,
    Ready(Box<ChartView>),
}

impl ChartBody {
    pub fn from_state(state: QueryState<Vec<HistoricalPrice>>) -> Self {
        match state {
            QueryState::Pending => ChartBody::Loading,
            QueryState::Failed(err) => ChartBody::Failed { message: err.user_message() },
            QueryState::Ready(rows) => match ChartSeries::from_history(&rows) {
                Some(series) => ChartBody::Ready(Box::new(ChartView::new(series))),
                None => ChartBody::Empty,
            },
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            ChartBody::Loading => Some(LOADING_TEXT),
            ChartBody::Failed { message } => Some(message.as_str()),
            ChartBody::Empty => Some("No price history available."),
            ChartBody::Ready(_) => None,
        }
    }
}

fn range_label(series: &ChartSeries) -> String {
    match (series.first(), series.last()) {
        (Some(first), Some(last)) => format!("{} – {}", date_label(first.time), date_label(last.time)),
        _ => String::new(),
    }
}

fn date_label(unix_secs: i64) -> String {
    DateTime::from_timestamp(unix_secs, 0)
        .map(|dt| dt.format("%b %d").to_string())
        .unwrap_or_default()
}
