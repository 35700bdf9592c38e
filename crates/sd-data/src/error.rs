use crate::month::Month;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Year {year} has {got} monthly records, expected 12")]
    WrongMonthCount { year: i32, got: usize },

    #[error("Year {year} record {index} is {found}, expected calendar order")]
    OutOfOrder {
        year: i32,
        index: usize,
        found: Month,
    },

    #[error("Duplicate year {year}")]
    DuplicateYear { year: i32 },

    #[error("Invalid sales figure for {month} {year}: {sales}")]
    InvalidSales {
        year: i32,
        month: Month,
        sales: f64,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
