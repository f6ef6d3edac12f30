use crate::domain::model::Record;

/// Returns the records ordered by date of birth, oldest first.
///
/// `sort_by_key` is stable, so people sharing a birth date keep their input order.
pub fn sort_by_birth_date(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.date_of_birth);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_sort_keeps_input_order_on_ties() {
        let same_day = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let records = vec![
            Record::new("Carol", NaiveDate::from_ymd_opt(1995, 7, 4).unwrap()),
            Record::new("Dave", same_day),
            Record::new("Erin", same_day),
            Record::new("Frank", NaiveDate::from_ymd_opt(1980, 2, 2).unwrap()),
        ];

        let names: Vec<_> = sort_by_birth_date(&records)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Frank", "Dave", "Erin", "Carol"]);
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let records = vec![
            Record::new("Young", NaiveDate::from_ymd_opt(2001, 1, 1).unwrap()),
            Record::new("Old", NaiveDate::from_ymd_opt(1901, 1, 1).unwrap()),
        ];
        let _ = sort_by_birth_date(&records);
        assert_eq!(records[0].name, "Young");
    }
}
