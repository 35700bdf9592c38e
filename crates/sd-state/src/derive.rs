//! Memoized derived series.
//!
//! Recomputing the series is just a table lookup, so the cache is a
//! performance nicety rather than a correctness requirement; it is keyed on
//! the year alone because the table is immutable.

use sd_data::{AnnualSalesTable, MonthlyRecord};

#[derive(Debug, Default)]
pub struct SeriesCache {
    cached_year: Option<i32>,
    records: Vec<MonthlyRecord>,
}

impl SeriesCache {
    /// The monthly series for `year`, recomputed only when the year changes.
    pub fn series(&mut self, table: &AnnualSalesTable, year: i32) -> &[MonthlyRecord] {
        if self.cached_year != Some(year) {
            self.records = table.lookup(year).to_vec();
            self.cached_year = Some(year);
        }
        &self.records
    }

    pub fn cached_year(&self) -> Option<i32> {
        self.cached_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_matches_table_lookup() {
        let table = AnnualSalesTable::builtin();
        let mut cache = SeriesCache::default();
        assert_eq!(cache.cached_year(), None);

        let series = cache.series(&table, 2023);
        assert_eq!(series, table.lookup(2023));
        assert_eq!(cache.cached_year(), Some(2023));
    }

    #[test]
    fn unknown_year_caches_empty_series() {
        let table = AnnualSalesTable::builtin();
        let mut cache = SeriesCache::default();
        assert!(cache.series(&table, 1990).is_empty());
        assert_eq!(cache.cached_year(), Some(1990));
    }

    #[test]
    fn year_switch_recomputes() {
        let table = AnnualSalesTable::builtin();
        let mut cache = SeriesCache::default();
        cache.series(&table, 2024);
        let series = cache.series(&table, 2023);
        assert_eq!(series, table.lookup(2023));
        assert_eq!(cache.cached_year(), Some(2023));
    }
}
