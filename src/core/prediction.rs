//! Sample prediction panel: the crop/market picker and the mock price chart.
//!
//! Nothing is forecast here. The chart always shows the same twelve-month
//! series; the panel only decides whether the chart or the placeholder is
//! visible.

use serde::Serialize;

/// Confidence shown under the chart, in percent
pub const CONFIDENCE_LEVEL: u8 = 87;

/// Seconds between consecutive bar animations
pub const BAR_STAGGER_SECONDS: f32 = 0.1;

/// One bar of the price chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub month: &'static str,
    /// Price in dollars per ton
    pub price: u32,
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const PRICES: [u32; 12] = [120, 132, 125, 140, 155, 170, 165, 180, 190, 185, 195, 210];

/// The fixed twelve-month mock series
pub fn price_series() -> Vec<PricePoint> {
    MONTHS
        .iter()
        .zip(PRICES)
        .map(|(&month, price)| PricePoint { month, price })
        .collect()
}

/// Highest price in the series, 0 when empty
pub fn peak_price(series: &[PricePoint]) -> u32 {
    series.iter().map(|p| p.price).max().unwrap_or(0)
}

/// Bar height relative to the peak, in percent
pub fn bar_height_percent(price: u32, max: u32) -> f32 {
    if max == 0 {
        return 0.0;
    }
    price as f32 / max as f32 * 100.0
}

/// Animation delay for the bar at `index`
pub fn bar_delay(index: usize) -> f32 {
    index as f32 * BAR_STAGGER_SECONDS
}

/// `$210/ton`
pub fn format_price_per_ton(price: u32) -> String {
    format!("${price}/ton")
}

/// Picker selections and the number of charts generated so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionPanel {
    pub crop: Option<String>,
    pub market: Option<String>,
    /// Free text; shown in the form but not used by the chart
    pub keywords: String,
    generation: u32,
}

impl PredictionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a crop; an empty id clears the selection
    pub fn select_crop(&mut self, id: &str) {
        self.crop = (!id.is_empty()).then(|| id.to_string());
    }

    /// Select a market; an empty id clears the selection
    pub fn select_market(&mut self, id: &str) {
        self.market = (!id.is_empty()).then(|| id.to_string());
    }

    pub fn can_generate(&self) -> bool {
        self.crop.is_some() && self.market.is_some()
    }

    /// Handle a click on "Generate Prediction". Returns whether a chart was
    /// generated; nothing changes unless both a crop and a market are chosen.
    pub fn generate(&mut self) -> bool {
        if !self.can_generate() {
            return false;
        }
        self.generation += 1;
        true
    }

    /// Number of successful generations. Each new value replays the bars.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Whether the chart view replaces the placeholder
    pub fn shows_chart(&self) -> bool {
        self.generation > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_shape() {
        let series = price_series();
        assert_eq!(series.len(), 12);
        assert_eq!(series[0], PricePoint { month: "Jan", price: 120 });
        assert_eq!(series[11], PricePoint { month: "Dec", price: 210 });
    }

    #[test]
    fn test_peak_and_heights() {
        let series = price_series();
        let max = peak_price(&series);
        assert_eq!(max, 210);
        assert_eq!(format_price_per_ton(max), "$210/ton");
        assert!((bar_height_percent(210, max) - 100.0).abs() < f32::EPSILON);
        assert!((bar_height_percent(105, max) - 50.0).abs() < 1e-4);
        assert_eq!(bar_height_percent(10, 0), 0.0);
        assert_eq!(peak_price(&[]), 0);
    }

    #[test]
    fn test_bar_delays_stagger() {
        assert_eq!(bar_delay(0), 0.0);
        assert!((bar_delay(3) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_generate_needs_both_selections() {
        let mut panel = PredictionPanel::new();
        assert!(!panel.generate());

        panel.select_crop("1");
        assert!(!panel.generate());
        assert!(!panel.shows_chart());

        panel.select_market("3");
        assert!(panel.generate());
        assert!(panel.shows_chart());
        assert_eq!(panel.generation(), 1);
    }

    #[test]
    fn test_each_click_is_one_generation() {
        let mut panel = PredictionPanel::new();
        panel.select_crop("2");
        panel.select_market("2");
        panel.generate();
        panel.generate();
        assert_eq!(panel.generation(), 2);
    }

    #[test]
    fn test_clearing_selection_blocks_generation() {
        let mut panel = PredictionPanel::new();
        panel.select_crop("2");
        panel.select_market("5");
        panel.generate();

        panel.select_market("");
        assert!(!panel.generate());
        assert_eq!(panel.generation(), 1);
        // The last chart stays on screen
        assert!(panel.shows_chart());
    }
}
