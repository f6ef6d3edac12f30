use crate::core::age::calculate_age;
use crate::domain::model::{Record, ReportRow, TransformResult};
use crate::utils::error::{ReportError, Result};
use chrono::NaiveDate;

pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";
pub const TABLE_HEADER: &str = "Name\t\tDate of Birth\tAge";

pub fn to_rows(records: &[Record], today: NaiveDate) -> Vec<ReportRow> {
    records
        .iter()
        .map(|r| ReportRow {
            name: r.name.clone(),
            date_of_birth: r.date_of_birth,
            age: calculate_age(r.date_of_birth, today),
        })
        .collect()
}

pub fn render_table(rows: &[ReportRow], date_format: &str) -> String {
    let mut lines = vec![TABLE_HEADER.to_string()];
    for row in rows {
        lines.push(format!(
            "{}\t{}\t{}",
            row.name,
            row.date_of_birth.format(date_format),
            row.age
        ));
    }
    lines.join("\n")
}

pub fn render_average(average_age: f64, precision: usize) -> String {
    format!("Average age: {:.*}", precision, average_age)
}

pub fn render_report(result: &TransformResult, date_format: &str, precision: usize) -> String {
    format!(
        "{}\n{}\n",
        render_table(&result.rows, date_format),
        render_average(result.average_age, precision)
    )
}

pub fn to_csv(rows: &[ReportRow], delimiter: u8, date_format: &str) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["name", "date_of_birth", "age"])?;
    for row in rows {
        writer.write_record([
            row.name.clone(),
            row.date_of_birth.format(date_format).to_string(),
            row.age.to_string(),
        ])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| ReportError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ReportRow> {
        vec![
            ReportRow {
                name: "Bob".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1985, 11, 2).unwrap(),
                age: 38,
            },
            ReportRow {
                name: "Alice".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
                age: 34,
            },
        ]
    }

    #[test]
    fn test_render_table() {
        let table = render_table(&rows(), DISPLAY_DATE_FORMAT);
        assert_eq!(
            table,
            "Name\t\tDate of Birth\tAge\nBob\t02-11-1985\t38\nAlice\t20-05-1990\t34"
        );
    }

    #[test]
    fn test_render_empty_table_is_header_only() {
        assert_eq!(render_table(&[], DISPLAY_DATE_FORMAT), TABLE_HEADER);
    }

    #[test]
    fn test_render_average() {
        assert_eq!(render_average(36.0, 2), "Average age: 36.00");
        assert_eq!(render_average(0.0, 2), "Average age: 0.00");
        assert_eq!(render_average(35.666, 1), "Average age: 35.7");
    }

    #[test]
    fn test_to_csv() {
        let csv = to_csv(&rows(), b',', "%Y-%m-%d").unwrap();
        assert_eq!(
            csv,
            "name,date_of_birth,age\nBob,1985-11-02,38\nAlice,1990-05-20,34\n"
        );
    }
}
