//! Payroll deductions derived from handed-over transactions. Read-only.

use crate::shared::list::{Exportable, ListResource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayrollRow {
    pub transaction_id: i64,
    pub badge: String,
    pub full_name: String,
    #[serde(default)]
    pub project_name: Option<String>,
    pub uniform_name: String,
    pub count: i64,
    pub unit_price: f64,
    pub deduction_amount: f64,
    #[serde(default)]
    pub handover_date: Option<String>,
}

pub struct Payrolls;

impl ListResource for Payrolls {
    type Row = PayrollRow;
    const ENDPOINT: &'static str = "/api/Payroll";
    const ROWS_KEY: &'static str = "Payrolls";
    const TOTAL_KEY: &'static str = "TotalPayrollCount";
    const PAGE_SIZE: usize = 8;
}

impl Exportable for Payrolls {
    const EXPORT_FILE_NAME: &'static str = "payroll.xlsx";
}

/// Sum of the deductions on one page, for the footer line.
pub fn page_deduction_total(rows: &[PayrollRow]) -> f64 {
    rows.iter().map(|r| r.deduction_amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::decode_page;

    #[test]
    fn payroll_page_decodes_and_sums() {
        let body = serde_json::json!([{
            "Payrolls": [
                {"TransactionId": 1, "Badge": "B1", "FullName": "A", "UniformName": "Vest",
                 "Count": 2, "UnitPrice": 5.5, "DeductionAmount": 11.0},
                {"TransactionId": 2, "Badge": "B2", "FullName": "B", "UniformName": "Boots",
                 "Count": 1, "UnitPrice": 40.0, "DeductionAmount": 40.0,
                 "HandoverDate": "2024-02-01T09:30:00"}
            ],
            "TotalPayrollCount": "12"
        }]);
        let page =
            decode_page::<PayrollRow>(body, Payrolls::ROWS_KEY, Payrolls::TOTAL_KEY).unwrap();
        assert_eq!(page.total, 12);
        assert_eq!(page_deduction_total(&page.rows), 51.0);
        assert_eq!(Payrolls::export_path(), "/api/Payroll/Export");
    }
}
