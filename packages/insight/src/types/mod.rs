//! Domain data types.

pub mod bill;
pub mod rebate;
pub mod weather;

pub use bill::{BillData, MonthlyComparison};
pub use rebate::{Rebate, RebateCatalog, RebateOption};
pub use weather::{DailyForecast, WeatherData};
