use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub principal: f64,
    pub monthly_payment: f64,
    pub total_payable: f64,
    pub num_payments: u32,
}

impl Estimate {
    pub fn total_interest(&self) -> f64 {
        self.total_payable - self.principal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EstimateError {
    #[error("loan term must be at least one year")]
    InvalidTerm,
    #[error("loan amount must be a non-negative number")]
    InvalidPrincipal,
    #[error("interest rate must be a non-negative number")]
    InvalidRate,
}

/// Fixed monthly payment that amortizes `principal` over `term_years`.
///
/// A zero rate falls back to flat division, since the compound formula
/// divides by zero there.
pub fn estimate(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> Result<Estimate, EstimateError> {
    if term_years == 0 {
        return Err(EstimateError::InvalidTerm);
    }
    if !principal.is_finite() || principal < 0.0 {
        return Err(EstimateError::InvalidPrincipal);
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(EstimateError::InvalidRate);
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let num_payments = term_years * 12;
    let n = num_payments as f64;

    let monthly_payment = if monthly_rate == 0.0 {
        principal / n
    } else {
        let growth = (1.0 + monthly_rate).powf(n);
        principal * (monthly_rate * growth) / (growth - 1.0)
    };

    Ok(Estimate {
        principal,
        monthly_payment,
        total_payable: monthly_payment * n,
        num_payments,
    })
}
