//! Default credit product catalog

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{CreditId, ValidationError};
use domain_credit::{Credit, CreditAmount, InterestRate};

fn date(field: &'static str, year: i32, month: u32, day: u32) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ValidationError::new(field, format!("{}-{}-{} is not a date", year, month, day)))
}

fn product(
    id: &str,
    name: &str,
    amount: Decimal,
    rate: Decimal,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
) -> Result<Credit, ValidationError> {
    Ok(Credit::new(
        CreditId::new(id)?,
        name,
        CreditAmount::new(amount)?,
        InterestRate::new(rate)?,
        date("start_date", start.0, start.1, start.2)?,
        date("end_date", end.0, end.1, end.2)?,
    ))
}

/// The two products offered out of the box
pub fn default_credits() -> Result<Vec<Credit>, ValidationError> {
    Ok(vec![
        product(
            "personal-loan",
            "Personal Loan",
            dec!(1000.0),
            dec!(10.0),
            (2024, 1, 1),
            (2024, 12, 31),
        )?,
        product(
            "business-loan",
            "Business Loan",
            dec!(5000.0),
            dec!(12.5),
            (2024, 1, 1),
            (2025, 12, 31),
        )?,
    ])
}
