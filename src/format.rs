use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// 12,34,567 (lakh/crore)
    #[default]
    Indian,
    /// 1,234,567
    International,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping: Grouping,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
            grouping: Grouping::Indian,
        }
    }
}

impl CurrencyFormat {
    /// Rounds to the nearest whole unit and prefixes the symbol.
    pub fn money(&self, value: f64) -> String {
        format!("{}{}", self.symbol, group_whole(value, self.grouping))
    }
}

pub fn group_whole(value: f64, grouping: Grouping) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let grouped = match grouping {
        Grouping::International => group_from_right(&digits, 3, 3),
        Grouping::Indian => group_from_right(&digits, 3, 2),
    };

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

// First group (from the right) has `first` digits, every later group `rest`.
fn group_from_right(digits: &str, first: usize, rest: usize) -> String {
    if digits.len() <= first {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - first);
    let mut groups = vec![tail];
    let mut remaining = head;
    while remaining.len() > rest {
        let (h, t) = remaining.split_at(remaining.len() - rest);
        groups.push(t);
        remaining = h;
    }
    groups.push(remaining);
    groups.reverse();
    groups.join(",")
}
