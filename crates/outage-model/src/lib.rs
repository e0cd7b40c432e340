pub mod area;
pub mod columns;
pub mod month;

pub use area::{AreaPair, AreaRecord};
pub use columns::{NORMALIZED_COLUMNS, RAW_COLUMNS};
pub use month::EventMonth;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemas_share_pass_through_columns() {
        for name in [
            columns::EVENT_MONTH,
            columns::DEMAND_LOSS,
            columns::CUSTOMERS_AFFECTED,
        ] {
            assert!(RAW_COLUMNS.contains(&name));
            assert!(NORMALIZED_COLUMNS.contains(&name));
        }
    }

    #[test]
    fn area_record_serializes() {
        let record = AreaRecord::new(3, AreaPair::new(Some("Texas"), None));
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: AreaRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
