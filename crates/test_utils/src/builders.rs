//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else. Defaults describe a client who passes every
//! standard rule outside the random-rejection and surcharge regions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClientId, CreditId};
use domain_client::{Client, ClientPin, CreditScore, Email, Income, Phone, Region};
use domain_credit::{Credit, CreditAmount, InterestRate};

/// Builder for constructing test clients
pub struct TestClientBuilder {
    id: ClientId,
    name: String,
    age: u32,
    region: String,
    income: i64,
    score: i64,
    pin: String,
    email: String,
    phone: String,
}

impl Default for TestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClientBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: ClientId::new(),
            name: "Jana Dvorakova".to_string(),
            age: 30,
            region: "BR".to_string(),
            income: 1500,
            score: 600,
            pin: "905512/3344".to_string(),
            email: "jana.dvorakova@example.com".to_string(),
            phone: "+420 731 000 111".to_string(),
        }
    }

    pub fn with_id(mut self, id: ClientId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_income(mut self, income: i64) -> Self {
        self.income = income;
        self
    }

    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    pub fn with_pin(mut self, pin: impl Into<String>) -> Self {
        self.pin = pin.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds the client
    ///
    /// # Panics
    ///
    /// Panics if any configured value violates its value-object invariant
    pub fn build(self) -> Client {
        Client::new(
            self.id,
            self.name,
            self.age,
            Region::new(self.region).expect("valid region"),
            Income::new(self.income).expect("valid income"),
            CreditScore::new(self.score).expect("valid score"),
            ClientPin::new(self.pin).expect("valid pin"),
            Email::new(self.email).expect("valid email"),
            Phone::new(self.phone).expect("valid phone"),
        )
    }
}

/// Builder for constructing test credit offers
pub struct TestCreditBuilder {
    id: String,
    name: String,
    amount: Decimal,
    rate: Decimal,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl Default for TestCreditBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCreditBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: "personal-loan".to_string(),
            name: "Personal Loan".to_string(),
            amount: dec!(1000.0),
            rate: dec!(10.0),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date"),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Builds the credit offer
    ///
    /// # Panics
    ///
    /// Panics if any configured value violates its value-object invariant
    pub fn build(self) -> Credit {
        Credit::new(
            CreditId::new(self.id).expect("valid credit id"),
            self.name,
            CreditAmount::new(self.amount).expect("valid amount"),
            InterestRate::new(self.rate).expect("valid rate"),
            self.start_date,
            self.end_date,
        )
    }
}
