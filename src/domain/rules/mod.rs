// Domain rules - Business logic and policies

use crate::domain::model::*;

/// Largest value [`PartLabeler::spoken_ordinal`] renders as words.
///
/// Anything above falls back to the decimal numeral, so part 101 is labeled
/// `Part 101`.
pub const MAX_SPOKEN_ORDINAL: u32 = 100;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Rules for naming output parts
pub struct PartLabeler;

impl PartLabeler {
    /// Word form of `n` for `1..=MAX_SPOKEN_ORDINAL`, decimal numeral otherwise
    pub fn spoken_ordinal(n: u32) -> String {
        match n {
            0 => n.to_string(),
            1..=19 => ONES[n as usize].to_string(),
            20..=99 => {
                let tens = TENS[(n / 10) as usize];
                match n % 10 {
                    0 => tens.to_string(),
                    ones => format!("{} {}", tens, ONES[ones as usize]),
                }
            }
            MAX_SPOKEN_ORDINAL => "One Hundred".to_string(),
            _ => n.to_string(),
        }
    }

    /// `Part One`, `Part Two`, ...
    pub fn label(index: u32) -> String {
        format!("Part {}", Self::spoken_ordinal(index))
    }

    /// Overlay title: `<title base> - <label>`
    pub fn title(title_base: &str, label: &str) -> String {
        format!("{} - {}", title_base, label)
    }
}

/// How a window relates to the cut-out range after adjustment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowAdjustment {
    /// Window kept, possibly with moved bounds
    Kept { start: f64, end: f64 },
    /// Window collapsed to zero or negative length
    Dropped,
}

/// Business rules for excluding a cut-out range from fixed-length windows
pub struct CutOutAdjuster;

impl CutOutAdjuster {
    /// Move window bounds out of the cut-out range.
    ///
    /// A start inside `[cut_start, cut_end)` advances to `cut_end`; an end inside
    /// `(cut_start, cut_end]` retracts to `cut_start`. Both checks look at the
    /// original bounds of the same window. The result may have `end <= start`.
    pub fn adjust(start: f64, end: f64, cut_out: Option<&CutOutRange>) -> (f64, f64) {
        let Some(cut) = cut_out else {
            return (start, end);
        };

        let adjusted_start = if cut.captures_start(start) {
            cut.end()
        } else {
            start
        };
        let adjusted_end = if cut.captures_end(end) {
            cut.start()
        } else {
            end
        };

        (adjusted_start, adjusted_end)
    }

    /// Adjust a window and classify the outcome
    pub fn classify(start: f64, end: f64, cut_out: Option<&CutOutRange>) -> WindowAdjustment {
        let (start, end) = Self::adjust(start, end, cut_out);
        if end - start <= 0.0 {
            WindowAdjustment::Dropped
        } else {
            WindowAdjustment::Kept { start, end }
        }
    }

    /// A window that starts before and ends after the cut-out keeps the excluded
    /// footage; callers may want to warn about it.
    pub fn straddles(start: f64, end: f64, cut_out: Option<&CutOutRange>) -> bool {
        cut_out.is_some_and(|cut| start < cut.start() && end > cut.end())
    }
}
