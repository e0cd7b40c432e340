//! Column names for raw and normalized outage tables.
//!
//! The DOE-417 annual summaries change their header text between reporting
//! years, so the loader discards the source header row and assigns
//! [`RAW_COLUMNS`] positionally. Everything downstream addresses columns by
//! these constants.

pub const EVENT_MONTH: &str = "Event Month";
pub const DATE_EVENT_BEGAN: &str = "Date Event Began";
pub const TIME_EVENT_BEGAN: &str = "Time Event Began";
pub const DATE_OF_RESTORATION: &str = "Date of Restoration";
pub const TIME_OF_RESTORATION: &str = "Time of Restoration";
pub const AREA_AFFECTED: &str = "Area Affected";
pub const NERC_REGION: &str = "NERC Region";
pub const ALERT_CRITERIA: &str = "Alert Criteria";
pub const EVENT_TYPE: &str = "Event Type";
pub const DEMAND_LOSS: &str = "Demand Loss (MW)";
pub const CUSTOMERS_AFFECTED: &str = "Number of Customers Affected";

pub const EVENT_START: &str = "Event Start";
pub const EVENT_END: &str = "Event End";
pub const STATE: &str = "State";
pub const COUNTY: &str = "County";
pub const NERC_REGION_NORMALIZED: &str = "NERC Region (N)";
pub const ALERT_CRITERIA_NORMALIZED: &str = "Alert Criteria (N)";
pub const EVENT_TYPE_NORMALIZED: &str = "Event Type (N)";

/// Raw report columns in source sheet order.
pub const RAW_COLUMNS: [&str; 11] = [
    EVENT_MONTH,
    DATE_EVENT_BEGAN,
    TIME_EVENT_BEGAN,
    DATE_OF_RESTORATION,
    TIME_OF_RESTORATION,
    AREA_AFFECTED,
    NERC_REGION,
    ALERT_CRITERIA,
    EVENT_TYPE,
    DEMAND_LOSS,
    CUSTOMERS_AFFECTED,
];

/// Output projection of the normalization pass, in output order.
pub const NORMALIZED_COLUMNS: [&str; 10] = [
    EVENT_MONTH,
    EVENT_START,
    EVENT_END,
    STATE,
    COUNTY,
    NERC_REGION_NORMALIZED,
    ALERT_CRITERIA_NORMALIZED,
    EVENT_TYPE_NORMALIZED,
    DEMAND_LOSS,
    CUSTOMERS_AFFECTED,
];

/// Format used for combined timestamps stored in normalized tables.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
