//! Chart Binding Model
//!
//! Synthetic weekly series plus the mapping from the three axis slots
//! (left, right1, right2) to metrics in the fixed catalog. The series is
//! generated once on mount and never mutated.

use chrono::{Duration, NaiveDate};

/// Number of weekly points generated on mount
pub const SERIES_LEN: usize = 105;

/// The seven chartable metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Metric {
    SharePrice,
    NtmPe,
    NtmEps,
    ShortInterest,
    Rsi,
    SellSideBuys,
    AvgTarget,
}

impl Metric {
    /// The full catalog, in display order
    pub const ALL: [Metric; 7] = [
        Metric::SharePrice,
        Metric::NtmPe,
        Metric::NtmEps,
        Metric::ShortInterest,
        Metric::Rsi,
        Metric::SellSideBuys,
        Metric::AvgTarget,
    ];

    /// Stable key used as the select option value
    pub fn key(self) -> &'static str {
        match self {
            Metric::SharePrice => "share_price",
            Metric::NtmPe => "ntm_pe",
            Metric::NtmEps => "ntm_eps",
            Metric::ShortInterest => "short_interest",
            Metric::Rsi => "rsi",
            Metric::SellSideBuys => "sell_side_buys",
            Metric::AvgTarget => "avg_target",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::SharePrice => "Share Price",
            Metric::NtmPe => "NTM P/E",
            Metric::NtmEps => "NTM EPS",
            Metric::ShortInterest => "Short Interest as % of Free Float",
            Metric::Rsi => "RSI",
            Metric::SellSideBuys => "% of Sell-side buys",
            Metric::AvgTarget => "Average sell-side price target",
        }
    }

    /// Line color for this metric
    pub fn color(self) -> &'static str {
        match self {
            Metric::SharePrice => "#0071e3",
            Metric::NtmPe => "#1db954",
            Metric::NtmEps => "#ff9800",
            Metric::ShortInterest => "#e53935",
            Metric::Rsi => "#8e24aa",
            Metric::SellSideBuys => "#3949ab",
            Metric::AvgTarget => "#00bcd4",
        }
    }

    /// The slot this metric is bound to in the initial view
    pub fn default_slot(self) -> AxisSlot {
        match self {
            Metric::SharePrice => AxisSlot::Left,
            Metric::NtmPe => AxisSlot::Right1,
            _ => AxisSlot::Right2,
        }
    }

    /// Catalog lookup by key; anything outside the catalog is `None`
    pub fn from_key(key: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.key() == key)
    }
}

/// The three axis roles a metric can be bound to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSlot {
    Left,
    Right1,
    Right2,
}

impl AxisSlot {
    /// Slot order used for legend tie-breaking: first match wins
    pub const ALL: [AxisSlot; 3] = [AxisSlot::Left, AxisSlot::Right1, AxisSlot::Right2];

    /// Legend suffix for a metric bound to this slot
    pub fn suffix(self) -> &'static str {
        match self {
            AxisSlot::Left => " (LHS)",
            AxisSlot::Right1 => " (RHS1)",
            AxisSlot::Right2 => " (RHS2)",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AxisSlot::Left => "Y-Axis (LHS)",
            AxisSlot::Right1 => "Y-Axis (RHS1)",
            AxisSlot::Right2 => "Y-Axis (RHS2)",
        }
    }
}

/// One weekly point of the synthetic series
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SeriesPoint {
    pub date: String,
    pub share_price: f64,
    pub ntm_pe: f64,
    pub ntm_eps: f64,
    pub short_interest: f64,
    pub rsi: f64,
    pub sell_side_buys: f64,
    pub avg_target: f64,
}

impl SeriesPoint {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::SharePrice => self.share_price,
            Metric::NtmPe => self.ntm_pe,
            Metric::NtmEps => self.ntm_eps,
            Metric::ShortInterest => self.short_interest,
            Metric::Rsi => self.rsi,
            Metric::SellSideBuys => self.sell_side_buys,
            Metric::AvgTarget => self.avg_target,
        }
    }
}

/// Generate the deterministic weekly series: sinusoidal oscillation plus
/// linear drift per metric, dated from 2023-07-01 in 7-day steps.
pub fn generate_series(len: usize) -> Vec<SeriesPoint> {
    let epoch = NaiveDate::from_ymd_opt(2023, 7, 1).expect("valid epoch date");

    (0..len)
        .map(|week| {
            let i = week as f64;
            let date = epoch + Duration::days(7 * week as i64);
            SeriesPoint {
                date: date.format("%Y-%m-%d").to_string(),
                share_price: 140.0 + (i / 8.0).sin() * 10.0 + i * 0.5,
                ntm_pe: 22.0 + (i / 10.0).cos() * 2.0 + i * 0.02,
                ntm_eps: 6.0 + (i / 12.0).sin() * 0.5 + i * 0.01,
                short_interest: 0.5 + (i / 15.0).sin().abs() * 2.0,
                rsi: 40.0 + (i / 7.0).sin().abs() * 30.0,
                sell_side_buys: 60.0 + (i / 20.0).sin() * 10.0,
                avg_target: 180.0 + (i / 16.0).sin() * 8.0 + i * 0.2,
            }
        })
        .collect()
}

/// Axis value range for a metric over the full series, padded by 10% of the
/// observed range and snapped to whole numbers.
pub fn domain(series: &[SeriesPoint], metric: Metric) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in series {
        let v = point.value(metric);
        min = min.min(v);
        max = max.max(v);
    }

    let padding = (max - min) * 0.1;
    ((min - padding).floor(), (max + padding).ceil())
}

/// The live slot-to-metric mapping
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisBindings {
    pub left: Metric,
    pub right1: Metric,
    pub right2: Metric,
}

impl Default for AxisBindings {
    /// Each slot starts on the first catalog metric that defaults to it
    fn default() -> Self {
        let initial = |slot| {
            Metric::ALL
                .into_iter()
                .find(|m| m.default_slot() == slot)
                .expect("every slot has a default metric")
        };

        Self {
            left: initial(AxisSlot::Left),
            right1: initial(AxisSlot::Right1),
            right2: initial(AxisSlot::Right2),
        }
    }
}

impl AxisBindings {
    pub fn get(&self, slot: AxisSlot) -> Metric {
        match slot {
            AxisSlot::Left => self.left,
            AxisSlot::Right1 => self.right1,
            AxisSlot::Right2 => self.right2,
        }
    }

    /// Bind `slot` to the metric named by `key`. A key outside the catalog
    /// leaves the binding unchanged.
    pub fn set(&mut self, slot: AxisSlot, key: &str) -> bool {
        let Some(metric) = Metric::from_key(key) else {
            return false;
        };

        match slot {
            AxisSlot::Left => self.left = metric,
            AxisSlot::Right1 => self.right1 = metric,
            AxisSlot::Right2 => self.right2 = metric,
        }
        true
    }

    /// Legend suffix for a metric, from the first slot that binds it in
    /// LHS -> RHS1 -> RHS2 order. Unbound metrics have no suffix.
    pub fn legend_suffix(&self, metric: Metric) -> &'static str {
        AxisSlot::ALL
            .into_iter()
            .find(|slot| self.get(*slot) == metric)
            .map(AxisSlot::suffix)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_length_and_dates() {
        let series = generate_series(SERIES_LEN);
        assert_eq!(series.len(), 105);
        assert_eq!(series[0].date, "2023-07-01");
        assert_eq!(series[1].date, "2023-07-08");
        assert_eq!(series[104].date, "2025-06-28");
    }

    #[test]
    fn test_series_is_deterministic() {
        assert_eq!(generate_series(SERIES_LEN), generate_series(SERIES_LEN));
    }

    #[test]
    fn test_series_first_point_values() {
        let series = generate_series(SERIES_LEN);
        let first = &series[0];
        assert_eq!(first.share_price, 140.0);
        assert_eq!(first.ntm_pe, 24.0);
        assert_eq!(first.ntm_eps, 6.0);
        assert_eq!(first.rsi, 40.0);
    }

    #[test]
    fn test_domain_is_idempotent() {
        let series = generate_series(SERIES_LEN);
        for metric in Metric::ALL {
            assert_eq!(domain(&series, metric), domain(&series, metric));
        }
    }

    #[test]
    fn test_domain_bounds_rsi() {
        let series = generate_series(SERIES_LEN);
        let (low, high) = domain(&series, Metric::Rsi);

        for point in &series {
            assert!(point.rsi > low && point.rsi < high);
        }
        // rsi = 40 + |sin(i/7)| * 30 stays within [40, 70]
        assert!(low >= 35.0 && high <= 75.0);
    }

    #[test]
    fn test_default_slot_per_metric() {
        assert_eq!(Metric::SharePrice.default_slot(), AxisSlot::Left);
        assert_eq!(Metric::NtmPe.default_slot(), AxisSlot::Right1);
        for metric in [
            Metric::NtmEps,
            Metric::ShortInterest,
            Metric::Rsi,
            Metric::SellSideBuys,
            Metric::AvgTarget,
        ] {
            assert_eq!(metric.default_slot(), AxisSlot::Right2);
        }
    }

    #[test]
    fn test_default_bindings_follow_catalog_slots() {
        let bindings = AxisBindings::default();
        assert_eq!(bindings.left, Metric::SharePrice);
        assert_eq!(bindings.right1, Metric::NtmPe);
        assert_eq!(bindings.right2, Metric::NtmEps);

        for slot in AxisSlot::ALL {
            assert_eq!(bindings.get(slot).default_slot(), slot);
        }
    }

    #[test]
    fn test_set_binding_updates_slot() {
        let mut bindings = AxisBindings::default();
        assert!(bindings.set(AxisSlot::Left, "rsi"));
        assert_eq!(bindings.left, Metric::Rsi);
        assert_eq!(bindings.right1, Metric::NtmPe);
    }

    #[test]
    fn test_set_binding_unknown_key_is_noop() {
        let mut bindings = AxisBindings::default();
        let before = bindings;

        assert!(!bindings.set(AxisSlot::Right2, "ebitda"));
        assert_eq!(bindings, before);
    }

    #[test]
    fn test_legend_suffix_per_slot() {
        let bindings = AxisBindings::default();
        assert_eq!(bindings.legend_suffix(Metric::SharePrice), " (LHS)");
        assert_eq!(bindings.legend_suffix(Metric::NtmPe), " (RHS1)");
        assert_eq!(bindings.legend_suffix(Metric::NtmEps), " (RHS2)");
        assert_eq!(bindings.legend_suffix(Metric::Rsi), "");
    }

    #[test]
    fn test_legend_suffix_tie_break_first_slot_wins() {
        let mut bindings = AxisBindings::default();
        bindings.set(AxisSlot::Right1, "share_price");
        assert_eq!(bindings.legend_suffix(Metric::SharePrice), " (LHS)");

        bindings.set(AxisSlot::Left, "rsi");
        assert_eq!(bindings.legend_suffix(Metric::SharePrice), " (RHS1)");
    }

    #[test]
    fn test_saved_defaults_independent_of_live_bindings() {
        let mut live = AxisBindings::default();
        let saved = live;

        live.set(AxisSlot::Left, "avg_target");
        assert_eq!(saved.left, Metric::SharePrice);
        assert_eq!(live.left, Metric::AvgTarget);
    }

    #[test]
    fn test_metric_keys_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_key(metric.key()), Some(metric));
        }
        assert_eq!(Metric::from_key("volume"), None);
    }
}
