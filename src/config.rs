//! Settings shared by the dashboard views.

use std::num::NonZeroUsize;

use crate::{Error, bucketing::DEFAULT_TRAILING_MONTHS, timezone::get_local_offset};

/// The longest monthly window the dashboard will build, ten years.
pub const MAX_TRAILING_MONTHS: usize = 120;

/// The config for the dashboard views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// The maximum records to display per table page.
    pub page_size: usize,
    /// The number of months shown in the monthly charts.
    pub trailing_months: usize,
    /// The canonical timezone used to decide which month is current.
    pub timezone: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            trailing_months: DEFAULT_TRAILING_MONTHS,
            timezone: "Etc/UTC".to_owned(),
        }
    }
}

impl DashboardConfig {
    /// Check every setting is usable.
    ///
    /// # Errors
    /// Returns [Error::InvalidConfig] if the page size or month count is zero,
    /// if the month count is above [MAX_TRAILING_MONTHS], or
    /// [Error::InvalidTimezoneError] if the timezone is unknown.
    pub fn validate(&self) -> Result<(), Error> {
        if self.page_size == 0 {
            return Err(Error::InvalidConfig(
                "page size must be at least 1".to_owned(),
            ));
        }

        if self.trailing_months == 0 {
            return Err(Error::InvalidConfig(
                "trailing months must be at least 1".to_owned(),
            ));
        }

        if self.trailing_months > MAX_TRAILING_MONTHS {
            return Err(Error::InvalidConfig(format!(
                "trailing months must be at most {MAX_TRAILING_MONTHS}, got {}",
                self.trailing_months
            )));
        }

        if get_local_offset(&self.timezone).is_none() {
            return Err(Error::InvalidTimezoneError(self.timezone.clone()));
        }

        Ok(())
    }

    /// The page size as required by the pagination functions.
    ///
    /// # Errors
    /// Returns [Error::InvalidConfig] if the page size is zero.
    pub fn page_size(&self) -> Result<NonZeroUsize, Error> {
        NonZeroUsize::new(self.page_size)
            .ok_or_else(|| Error::InvalidConfig("page size must be at least 1".to_owned()))
    }
}
