//! Uniform handout transactions and their workflow.
//!
//! A transaction is raised as `Pending`, accepted by the warehouse and finally
//! handed over to the employee. `Handovered` is terminal.

use crate::domain::a001_employee::aggregate::Employee;
use crate::shared::errors::ValidationError;
use crate::shared::form::{self, FormModel};
use crate::shared::list::{Exportable, ListResource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[default]
    Pending,
    Accepted,
    Handovered,
}

impl TransactionStatus {
    pub fn all() -> [TransactionStatus; 3] {
        [
            TransactionStatus::Pending,
            TransactionStatus::Accepted,
            TransactionStatus::Handovered,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Accepted => "Accepted",
            TransactionStatus::Handovered => "Handovered",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Accepted => "Accepted",
            TransactionStatus::Handovered => "Handed over",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.as_str() == code)
    }

    pub fn can_transition_to(&self, next: TransactionStatus) -> bool {
        matches!(
            (self, next),
            (TransactionStatus::Pending, TransactionStatus::Accepted)
                | (TransactionStatus::Accepted, TransactionStatus::Handovered)
        )
    }

    pub fn is_terminal(&self) -> bool {
        *self == TransactionStatus::Handovered
    }

    /// Terminal rows cannot be picked for bulk actions.
    pub fn is_selectable(&self) -> bool {
        !self.is_terminal()
    }

    /// Only transactions not yet accepted can move to another employee.
    pub fn can_reassign(&self) -> bool {
        *self == TransactionStatus::Pending
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    pub id: i64,
    pub employee_id: i64,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub project_name: Option<String>,
    pub uniform_id: i64,
    #[serde(default)]
    pub uniform_name: String,
    pub count: i64,
    pub status: TransactionStatus,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub send_date: Option<String>,
    #[serde(default)]
    pub handover_name: Option<String>,
    #[serde(default)]
    pub handover_date: Option<String>,
}

pub struct Transactions;

impl ListResource for Transactions {
    type Row = Transaction;
    const ENDPOINT: &'static str = "/api/TransactionPage";
    const ROWS_KEY: &'static str = "Transactions";
    const TOTAL_KEY: &'static str = "TotalTransactionCount";
    const PAGE_SIZE: usize = 8;
}

impl Exportable for Transactions {
    const EXPORT_FILE_NAME: &'static str = "transactions.xlsx";
}

/// Bulk workflow step applied to the selected rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionAction {
    Accept,
    Handover,
}

impl TransactionAction {
    pub fn path(&self) -> String {
        let step = match self {
            TransactionAction::Accept => "Accept",
            TransactionAction::Handover => "Handover",
        };
        format!("{}/{}", Transactions::ENDPOINT, step)
    }

    pub fn target(&self) -> TransactionStatus {
        match self {
            TransactionAction::Accept => TransactionStatus::Accepted,
            TransactionAction::Handover => TransactionStatus::Handovered,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionAction::Accept => "Accept",
            TransactionAction::Handover => "Hand over",
        }
    }

    /// Ids among `selected` whose current status allows this step.
    pub fn eligible_ids(&self, rows: &[Transaction], selected: &[i64]) -> Vec<i64> {
        rows.iter()
            .filter(|r| selected.contains(&r.id) && r.status.can_transition_to(self.target()))
            .map(|r| r.id)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionIdsPayload {
    pub ids: Vec<i64>,
}

pub fn reassign_path() -> String {
    format!("{}/Reassign", Transactions::ENDPOINT)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReassignPayload {
    pub transaction_id: i64,
    pub employee_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReassignForm {
    pub transaction_id: i64,
    pub current_employee_id: i64,
    pub employee: Option<Employee>,
}

impl ReassignForm {
    pub fn for_transaction(row: &Transaction) -> Self {
        Self {
            transaction_id: row.id,
            current_employee_id: row.employee_id,
            employee: None,
        }
    }
}

impl FormModel for ReassignForm {
    type Payload = ReassignPayload;

    fn validate(&self) -> Result<(), ValidationError> {
        let employee = self
            .employee
            .as_ref()
            .ok_or(ValidationError::Required("Employee"))?;
        if employee.id == self.current_employee_id {
            return Err(ValidationError::Invalid(
                "Transaction already belongs to this employee".to_string(),
            ));
        }
        Ok(())
    }

    fn to_payload(&self) -> ReassignPayload {
        ReassignPayload {
            transaction_id: self.transaction_id,
            employee_id: self.employee.as_ref().map(|e| e.id).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionPayload {
    pub employee_id: i64,
    pub uniform_id: i64,
    pub count: i64,
}

/// Uniform request raised for one employee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionForm {
    pub employee: Option<Employee>,
    pub uniform_id: Option<i64>,
    pub count: Option<i64>,
    /// Allowance from the matching uniform condition, once known.
    pub max_allowed: Option<i64>,
}

impl TransactionForm {
    pub fn set_employee(&mut self, employee: Option<Employee>) {
        self.employee = employee;
        self.max_allowed = None;
    }

    pub fn set_uniform(&mut self, uniform_id: Option<i64>) {
        self.uniform_id = uniform_id;
        self.max_allowed = None;
    }
}

impl FormModel for TransactionForm {
    type Payload = TransactionPayload;

    fn validate(&self) -> Result<(), ValidationError> {
        if self.employee.is_none() {
            return Err(ValidationError::Required("Employee"));
        }
        form::require_id(self.uniform_id, "Uniform")?;
        let count = form::require_count(self.count, "Count")?;
        if count == 0 {
            return Err(ValidationError::Invalid(
                "Count must be greater than zero".to_string(),
            ));
        }
        match self.max_allowed {
            Some(limit) => form::within_limit(count, limit, "Count"),
            None => Err(ValidationError::Invalid(
                "No uniform condition covers this employee and uniform".to_string(),
            )),
        }
    }

    fn to_payload(&self) -> TransactionPayload {
        TransactionPayload {
            employee_id: self.employee.as_ref().map(|e| e.id).unwrap_or_default(),
            uniform_id: self.uniform_id.unwrap_or_default(),
            count: self.count.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, status: TransactionStatus) -> Transaction {
        Transaction {
            id,
            employee_id: 1,
            badge: "B1".into(),
            full_name: "Test".into(),
            project_name: None,
            uniform_id: 1,
            uniform_name: "Vest".into(),
            count: 1,
            status,
            sender_name: None,
            send_date: None,
            handover_name: None,
            handover_date: None,
        }
    }

    fn employee(id: i64) -> Employee {
        serde_json::from_value(serde_json::json!({
            "Id": id, "Badge": "B9", "FullName": "Nigar", "Gender": "Female"
        }))
        .unwrap()
    }

    #[test]
    fn workflow_only_moves_forward_one_step() {
        use TransactionStatus::*;
        assert!(Pending.can_transition_to(Accepted));
        assert!(Accepted.can_transition_to(Handovered));
        assert!(!Pending.can_transition_to(Handovered));
        assert!(!Handovered.can_transition_to(Pending));
        assert!(!Accepted.can_transition_to(Accepted));
    }

    #[test]
    fn handed_over_rows_are_not_selectable() {
        assert!(TransactionStatus::Pending.is_selectable());
        assert!(TransactionStatus::Accepted.is_selectable());
        assert!(!TransactionStatus::Handovered.is_selectable());
    }

    #[test]
    fn bulk_actions_filter_by_source_status() {
        let rows = vec![
            row(1, TransactionStatus::Pending),
            row(2, TransactionStatus::Accepted),
            row(3, TransactionStatus::Pending),
            row(4, TransactionStatus::Handovered),
        ];
        let selected = vec![1, 2, 4];
        assert_eq!(TransactionAction::Accept.eligible_ids(&rows, &selected), vec![1]);
        assert_eq!(TransactionAction::Handover.eligible_ids(&rows, &selected), vec![2]);
        assert_eq!(TransactionAction::Accept.path(), "/api/TransactionPage/Accept");
    }

    #[test]
    fn status_decodes_from_wire() {
        let t: Transaction = serde_json::from_value(serde_json::json!({
            "Id": 5, "EmployeeId": 2, "UniformId": 3, "Count": 1, "Status": "Handovered"
        }))
        .unwrap();
        assert_eq!(t.status, TransactionStatus::Handovered);
        assert_eq!(TransactionStatus::from_code("Accepted"), Some(TransactionStatus::Accepted));
    }

    #[test]
    fn count_is_capped_by_allowance() {
        let mut f = TransactionForm::default();
        f.set_employee(Some(employee(7)));
        f.set_uniform(Some(3));
        f.count = Some(4);
        f.max_allowed = Some(2);
        assert_eq!(
            f.prepare(),
            Err(ValidationError::ExceedsLimit { field: "Count", limit: 2 })
        );
        f.count = Some(2);
        let body = serde_json::to_value(f.prepare().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"EmployeeId": 7, "UniformId": 3, "Count": 2}));
    }

    #[test]
    fn changing_uniform_forgets_allowance() {
        let mut f = TransactionForm {
            max_allowed: Some(3),
            ..Default::default()
        };
        f.set_uniform(Some(9));
        assert_eq!(f.max_allowed, None);
    }

    #[test]
    fn reassign_to_same_employee_is_rejected() {
        let mut f = ReassignForm::for_transaction(&row(8, TransactionStatus::Pending));
        assert_eq!(f.prepare(), Err(ValidationError::Required("Employee")));
        f.employee = Some(employee(1));
        assert!(matches!(f.prepare(), Err(ValidationError::Invalid(_))));
        f.employee = Some(employee(2));
        assert_eq!(
            f.prepare().unwrap(),
            ReassignPayload { transaction_id: 8, employee_id: 2 }
        );
    }
}
