//! Annual sales lookup table.
//!
//! The builtin table is the pre-bundled dataset the dashboard ships with:
//! three fixed years, twelve months each. Lookups for any other year
//! degrade to an empty series rather than an error.

use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::month::Month;

/// Every year series holds exactly this many records.
pub const MONTHS_PER_YEAR: usize = 12;

/// One month's sales figure. Immutable once defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub month: Month,
    pub sales: f64,
}

/// Twelve calendar-ordered records for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSeries {
    pub year: i32,
    pub records: Vec<MonthlyRecord>,
}

/// Mapping from year to its monthly series, newest year first.
///
/// Construction always runs validation except for [`AnnualSalesTable::builtin`],
/// whose constants are correct by inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualSalesTable {
    years: Vec<YearSeries>,
}

const SALES_2024: [f64; MONTHS_PER_YEAR] = [
    5000.0, 7500.0, 6200.0, 9000.0, 8100.0, 11000.0, 13000.0, 12500.0, 15000.0, 16000.0, 17500.0,
    20000.0,
];

const SALES_2023: [f64; MONTHS_PER_YEAR] = [
    4500.0, 6800.0, 7000.0, 8500.0, 7800.0, 10500.0, 12000.0, 11800.0, 14000.0, 15500.0, 16000.0,
    19000.0,
];

const SALES_2022: [f64; MONTHS_PER_YEAR] = [
    4000.0, 6000.0, 5500.0, 7500.0, 7000.0, 9000.0, 11000.0, 10500.0, 12500.0, 13500.0, 14000.0,
    16500.0,
];

fn year_series(year: i32, sales: [f64; MONTHS_PER_YEAR]) -> YearSeries {
    let records = Month::ALL
        .iter()
        .zip(sales)
        .map(|(&month, sales)| MonthlyRecord { month, sales })
        .collect();
    YearSeries { year, records }
}

impl AnnualSalesTable {
    /// The pre-bundled dataset: 2022, 2023 and 2024.
    pub fn builtin() -> Self {
        Self {
            years: vec![
                year_series(2024, SALES_2024),
                year_series(2023, SALES_2023),
                year_series(2022, SALES_2022),
            ],
        }
    }

    /// Build a table from arbitrary year series.
    ///
    /// Each series must hold exactly twelve records in calendar order with
    /// finite, non-negative sales; years must be unique. The result is
    /// ordered newest year first regardless of input order.
    pub fn from_records(mut years: Vec<YearSeries>) -> Result<Self, DataError> {
        for series in &years {
            if series.records.len() != MONTHS_PER_YEAR {
                return Err(DataError::WrongMonthCount {
                    year: series.year,
                    got: series.records.len(),
                });
            }
            for (index, record) in series.records.iter().enumerate() {
                if record.month.index() != index {
                    return Err(DataError::OutOfOrder {
                        year: series.year,
                        index,
                        found: record.month,
                    });
                }
                if !record.sales.is_finite() || record.sales < 0.0 {
                    return Err(DataError::InvalidSales {
                        year: series.year,
                        month: record.month,
                        sales: record.sales,
                    });
                }
            }
        }

        years.sort_by_key(|s| core::cmp::Reverse(s.year));
        for pair in years.windows(2) {
            if pair[0].year == pair[1].year {
                return Err(DataError::DuplicateYear { year: pair[0].year });
            }
        }

        Ok(Self { years })
    }

    /// Deserialize a table from a JSON array of year series, then validate.
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let years: Vec<YearSeries> = serde_json::from_str(json)?;
        Self::from_records(years)
    }

    /// The monthly series for `year`, or an empty slice for a year the
    /// table does not carry. Unknown years degrade to "no data".
    pub fn lookup(&self, year: i32) -> &[MonthlyRecord] {
        self.years
            .iter()
            .find(|s| s.year == year)
            .map(|s| s.records.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years.iter().any(|s| s.year == year)
    }

    /// Years carried by the table, newest first.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.iter().map(|s| s.year)
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.years.first().map(|s| s.year)
    }
}
