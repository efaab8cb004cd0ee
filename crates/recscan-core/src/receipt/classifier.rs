//! Line classification and accumulation.

use serde::Serialize;
use tracing::{debug, trace};

use super::rules::{
    is_noise, match_date, match_item_only, match_item_with_price, match_standalone_price,
    DetectedItem,
};

/// What a single trimmed line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Noise,
    Date(&'a str),
    StandalonePrice(String),
    ItemWithPrice(DetectedItem),
    ItemOnly(DetectedItem),
    Unrecognized,
}

impl LineKind<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            LineKind::Noise => "noise",
            LineKind::Date(_) => "date",
            LineKind::StandalonePrice(_) => "price",
            LineKind::ItemWithPrice(_) => "item with price",
            LineKind::ItemOnly(_) => "item",
            LineKind::Unrecognized => "unrecognized",
        }
    }
}

type LineRule = for<'a> fn(&'a str) -> Option<LineKind<'a>>;

/// Rules in evaluation order. The first one that matches decides the line.
const RULES: [LineRule; 5] = [
    |line| is_noise(line).then_some(LineKind::Noise),
    |line| match_date(line).map(LineKind::Date),
    |line| match_standalone_price(line).map(LineKind::StandalonePrice),
    |line| {
        match_item_with_price(line)
            .map(|item| item.map_or(LineKind::Unrecognized, LineKind::ItemWithPrice))
    },
    |line| match_item_only(line).map(LineKind::ItemOnly),
];

/// Classify a trimmed line.
pub fn classify_line(line: &str) -> LineKind<'_> {
    RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or(LineKind::Unrecognized)
}

/// Number of lines per classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub total: usize,
    pub noise: usize,
    pub date: usize,
    pub price: usize,
    pub item_with_price: usize,
    pub item_only: usize,
    pub unrecognized: usize,
}

impl LineStats {
    fn record(&mut self, kind: &LineKind<'_>) {
        self.total += 1;
        let counter = match kind {
            LineKind::Noise => &mut self.noise,
            LineKind::Date(_) => &mut self.date,
            LineKind::StandalonePrice(_) => &mut self.price,
            LineKind::ItemWithPrice(_) => &mut self.item_with_price,
            LineKind::ItemOnly(_) => &mut self.item_only,
            LineKind::Unrecognized => &mut self.unrecognized,
        };
        *counter += 1;
    }
}

/// State gathered over one classification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulators {
    /// First date found.
    pub date: Option<String>,
    /// Standalone prices in encounter order.
    pub prices: Vec<String>,
    /// Items in encounter order.
    pub items: Vec<DetectedItem>,
    pub stats: LineStats,
}

impl Accumulators {
    fn push(mut self, kind: LineKind<'_>) -> Self {
        self.stats.record(&kind);

        match kind {
            LineKind::Noise | LineKind::Unrecognized => {}
            LineKind::Date(date) => {
                if self.date.is_none() {
                    self.date = Some(date.to_string());
                }
            }
            LineKind::StandalonePrice(price) => self.prices.push(price),
            LineKind::ItemWithPrice(item) | LineKind::ItemOnly(item) => self.items.push(item),
        }

        self
    }
}

/// Strip surrounding whitespace and byte order marks.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Classify every line of `text` and collect dates, prices and items.
pub fn accumulate(text: &str) -> Accumulators {
    text.split('\n')
        .map(trim_line)
        .fold(Accumulators::default(), |acc, line| {
            let kind = classify_line(line);
            match kind {
                LineKind::Unrecognized => trace!("Unrecognized line: {}", line),
                _ => debug!("Line classified as {}: {}", kind.label(), line),
            }
            acc.push(kind)
        })
}
