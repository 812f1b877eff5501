use crate::model::attendance::AttendanceRecord;
use crate::model::month::MonthKey;

/// Records dated inside `month`, in their original order.
pub fn records_in_month(records: &[AttendanceRecord], month: MonthKey) -> Vec<&AttendanceRecord> {
    records.iter().filter(|r| month.contains(r.date)).collect()
}

/// Same as [`records_in_month`], narrowed to one employee.
pub fn employee_records_in_month<'a>(
    records: &'a [AttendanceRecord],
    employee_id: &str,
    month: MonthKey,
) -> Vec<&'a AttendanceRecord> {
    records
        .iter()
        .filter(|r| r.employee_id == employee_id && month.contains(r.date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::AttendanceStatus::{Absent, Present};
    use chrono::NaiveDate;

    fn record(id: &str, y: i32, m: u32, d: u32) -> AttendanceRecord {
        AttendanceRecord::new(id, NaiveDate::from_ymd_opt(y, m, d).unwrap(), Present)
    }

    #[test]
    fn keeps_only_matching_month_in_order() {
        let records = vec![
            record("E1", 2024, 3, 31),
            record("E1", 2024, 4, 1),
            record("E2", 2024, 3, 1),
            record("E1", 2023, 3, 15),
        ];
        let march: MonthKey = "2024-03".parse().unwrap();

        let found = records_in_month(&records, march);
        assert_eq!(found, vec![&records[0], &records[2]]);
    }

    #[test]
    fn empty_and_unmatched_inputs_give_empty_output() {
        let march: MonthKey = "2024-03".parse().unwrap();
        assert!(records_in_month(&[], march).is_empty());

        let records = vec![record("E1", 2024, 5, 1)];
        assert!(records_in_month(&records, march).is_empty());
    }

    #[test]
    fn narrows_to_one_employee() {
        let mut absent = record("E2", 2024, 3, 2);
        absent.status = Absent;
        let records = vec![record("E1", 2024, 3, 1), absent];
        let march: MonthKey = "2024-03".parse().unwrap();

        let found = employee_records_in_month(&records, "E2", march);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].status, Absent);
    }
}
