use crate::estimator::{estimate, Estimate, EstimateError};
use crate::format::CurrencyFormat;

pub const PRINCIPAL_MIN: u32 = 1_000;
pub const PRINCIPAL_MAX: u32 = 500_000;
pub const PRINCIPAL_STEP: u32 = 500;

pub const TERM_MIN: u32 = 1;
pub const TERM_MAX: u32 = 5;
pub const TERM_STEP: u32 = 1;

// Rate is held in tenths of a percent: 10 => 1.0%, 240 => 24.0%.
pub const RATE_TENTHS_MIN: u32 = 10;
pub const RATE_TENTHS_MAX: u32 = 240;
pub const RATE_TENTHS_STEP: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    Amount,
    Term,
    Rate,
}

impl Slider {
    pub const ALL: [Slider; 3] = [Slider::Amount, Slider::Term, Slider::Rate];

    pub fn label(self) -> &'static str {
        match self {
            Slider::Amount => "Loan amount",
            Slider::Term => "Term (years)",
            Slider::Rate => "Annual rate (%)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Slider::Amount => Slider::Term,
            Slider::Term => Slider::Rate,
            Slider::Rate => Slider::Amount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Slider::Amount => Slider::Rate,
            Slider::Term => Slider::Amount,
            Slider::Rate => Slider::Term,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteParameters {
    principal: u32,
    term_years: u32,
    rate_tenths: u32,
}

impl Default for QuoteParameters {
    fn default() -> Self {
        Self {
            principal: 50_000,
            term_years: 3,
            rate_tenths: 125,
        }
    }
}

impl QuoteParameters {
    /// Builds parameters snapped onto the slider grid and clamped to its bounds.
    pub fn new(principal: f64, term_years: u32, annual_rate_percent: f64) -> Self {
        let mut quote = Self::default();
        quote.set_principal(principal);
        quote.set_term_years(term_years);
        quote.set_rate_percent(annual_rate_percent);
        quote
    }

    pub fn principal(&self) -> u32 {
        self.principal
    }

    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.rate_tenths as f64 / 10.0
    }

    pub fn set_principal(&mut self, principal: f64) {
        let steps = ((principal - PRINCIPAL_MIN as f64) / PRINCIPAL_STEP as f64).round();
        let snapped = PRINCIPAL_MIN as f64 + steps.max(0.0) * PRINCIPAL_STEP as f64;
        self.principal = (snapped as u32).clamp(PRINCIPAL_MIN, PRINCIPAL_MAX);
    }

    pub fn set_term_years(&mut self, term_years: u32) {
        self.term_years = term_years.clamp(TERM_MIN, TERM_MAX);
    }

    pub fn set_rate_percent(&mut self, annual_rate_percent: f64) {
        let tenths = (annual_rate_percent * 10.0).round().max(0.0) as u32;
        self.rate_tenths = tenths.clamp(RATE_TENTHS_MIN, RATE_TENTHS_MAX);
    }

    /// Moves a slider by `steps` notches (negative moves down), stopping at its bounds.
    pub fn step(&mut self, slider: Slider, steps: i32) {
        fn nudge(value: u32, step: u32, steps: i32, min: u32, max: u32) -> u32 {
            let moved = value as i64 + step as i64 * steps as i64;
            moved.clamp(min as i64, max as i64) as u32
        }
        match slider {
            Slider::Amount => {
                self.principal = nudge(self.principal, PRINCIPAL_STEP, steps, PRINCIPAL_MIN, PRINCIPAL_MAX)
            }
            Slider::Term => {
                self.term_years = nudge(self.term_years, TERM_STEP, steps, TERM_MIN, TERM_MAX)
            }
            Slider::Rate => {
                self.rate_tenths =
                    nudge(self.rate_tenths, RATE_TENTHS_STEP, steps, RATE_TENTHS_MIN, RATE_TENTHS_MAX)
            }
        }
    }

    pub fn estimate(&self) -> Result<Estimate, EstimateError> {
        estimate(
            self.principal as f64,
            self.annual_rate_percent(),
            self.term_years,
        )
    }

    pub fn display_value(&self, slider: Slider, currency: &CurrencyFormat) -> String {
        match slider {
            Slider::Amount => currency.money(self.principal as f64),
            Slider::Term => format!("{} years", self.term_years),
            Slider::Rate => format!("{}%", self.rate_label()),
        }
    }

    /// Position of the slider within its range, 0.0..=1.0.
    pub fn ratio(&self, slider: Slider) -> f64 {
        let (value, min, max) = match slider {
            Slider::Amount => (self.principal, PRINCIPAL_MIN, PRINCIPAL_MAX),
            Slider::Term => (self.term_years, TERM_MIN, TERM_MAX),
            Slider::Rate => (self.rate_tenths, RATE_TENTHS_MIN, RATE_TENTHS_MAX),
        };
        (value - min) as f64 / (max - min) as f64
    }

    /// "If you borrow ₹50,000 for 3 years at 12.5% APR, ..."
    pub fn repayment_example(&self, currency: &CurrencyFormat) -> Result<String, EstimateError> {
        let est = self.estimate()?;
        Ok(format!(
            "If you borrow {} for {} years at {}% APR, your estimated monthly payment is {} (total {}).",
            currency.money(self.principal as f64),
            self.term_years,
            self.rate_label(),
            currency.money(est.monthly_payment),
            currency.money(est.total_payable),
        ))
    }

    // 12.5 stays "12.5", 12.0 prints as "12"
    fn rate_label(&self) -> String {
        if self.rate_tenths % 10 == 0 {
            format!("{}", self.rate_tenths / 10)
        } else {
            format!("{}.{}", self.rate_tenths / 10, self.rate_tenths % 10)
        }
    }
}
