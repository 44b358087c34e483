use crate::domain::a003_dc_stock::aggregate::AvailableStock;
use crate::shared::errors::ValidationError;
use crate::shared::form::{self, FormModel};
use crate::shared::list::ListResource;
use serde::{Deserialize, Serialize};

/// Who a BGS stock request is raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RequesterType {
    #[default]
    Project,
    Employee,
}

impl RequesterType {
    pub fn all() -> [RequesterType; 2] {
        [RequesterType::Project, RequesterType::Employee]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequesterType::Project => "Project",
            RequesterType::Employee => "Employee",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Project" => Some(RequesterType::Project),
            "Employee" => Some(RequesterType::Employee),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BgsStockRequest {
    pub id: i64,
    pub uniform_id: i64,
    pub uniform_name: String,
    pub request_count: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub requester_type: RequesterType,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
}

pub struct BgsStockRequests;

impl ListResource for BgsStockRequests {
    type Row = BgsStockRequest;
    const ENDPOINT: &'static str = "/api/BGSStockRequest";
    const ROWS_KEY: &'static str = "BGSStockRequests";
    const TOTAL_KEY: &'static str = "TotalBGSStockRequestCount";
    const PAGE_SIZE: usize = 6;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BgsStockRequestPayload {
    pub uniform_id: i64,
    pub request_count: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub requester_type: RequesterType,
    pub project_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BgsStockRequestForm {
    pub id: Option<i64>,
    pub uniform_id: Option<i64>,
    pub requester_type: RequesterType,
    pub project_id: Option<i64>,
    pub badge: String,
    request_count: Option<i64>,
    available: Option<i64>,
    unit_price: Option<f64>,
    warning: Option<String>,
}

impl BgsStockRequestForm {
    pub fn from_existing(row: &BgsStockRequest) -> Self {
        Self {
            id: Some(row.id),
            uniform_id: Some(row.uniform_id),
            requester_type: row.requester_type,
            project_id: row.project_id,
            badge: row.badge.clone().unwrap_or_default(),
            request_count: Some(row.request_count),
            available: None,
            unit_price: Some(row.unit_price),
            warning: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Switching uniform invalidates the stock figures until they are refetched.
    pub fn set_uniform(&mut self, uniform_id: Option<i64>) {
        if self.uniform_id != uniform_id {
            self.uniform_id = uniform_id;
            self.available = None;
            self.unit_price = None;
            self.refresh_warning();
        }
    }

    pub fn set_available(&mut self, stock: AvailableStock) {
        self.available = Some(stock.available_stock);
        self.unit_price = Some(stock.unit_price);
        self.refresh_warning();
    }

    /// Stores the requested count as typed. An excessive count only raises a
    /// warning; it is not adjusted.
    pub fn set_request_count(&mut self, value: Option<i64>) {
        self.request_count = value;
        self.refresh_warning();
    }

    pub fn request_count(&self) -> Option<i64> {
        self.request_count
    }

    pub fn available(&self) -> Option<i64> {
        self.available
    }

    pub fn unit_price(&self) -> Option<f64> {
        self.unit_price
    }

    pub fn total_price(&self) -> Option<f64> {
        form::total_price(self.request_count, self.unit_price)
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    fn refresh_warning(&mut self) {
        self.warning = match (self.request_count, self.available) {
            (Some(r), Some(s)) if r > s => Some(format!(
                "Requested {} but only {} in stock",
                r, s
            )),
            _ => None,
        };
    }
}

impl FormModel for BgsStockRequestForm {
    type Payload = BgsStockRequestPayload;

    fn validate(&self) -> Result<(), ValidationError> {
        form::require_id(self.uniform_id, "Uniform")?;
        form::require_id(self.project_id, "Project")?;
        if self.requester_type == RequesterType::Employee {
            form::require_text(&self.badge, "Badge")?;
        }
        let count = form::require_count(self.request_count, "Request count")?;
        if count == 0 {
            return Err(ValidationError::Invalid(
                "Request count must be greater than zero".to_string(),
            ));
        }
        if let Some(available) = self.available {
            form::within_limit(count, available, "Request count")?;
        }
        form::require_amount(self.unit_price, "Unit price")?;
        Ok(())
    }

    fn to_payload(&self) -> BgsStockRequestPayload {
        BgsStockRequestPayload {
            uniform_id: self.uniform_id.unwrap_or_default(),
            request_count: self.request_count.unwrap_or_default(),
            unit_price: self.unit_price.unwrap_or_default(),
            total_price: self.total_price().unwrap_or_default(),
            requester_type: self.requester_type,
            project_id: self.project_id.unwrap_or_default(),
            badge: match self.requester_type {
                RequesterType::Employee => Some(self.badge.trim().to_string()),
                RequesterType::Project => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_form() -> BgsStockRequestForm {
        let mut f = BgsStockRequestForm {
            uniform_id: Some(4),
            project_id: Some(2),
            ..Default::default()
        };
        f.set_available(AvailableStock {
            available_stock: 5,
            unit_price: 3.0,
        });
        f
    }

    #[test]
    fn excessive_count_warns_but_is_kept() {
        let mut f = ready_form();
        f.set_request_count(Some(8));
        assert_eq!(f.request_count(), Some(8));
        assert_eq!(f.warning(), Some("Requested 8 but only 5 in stock"));
        assert_eq!(
            f.prepare(),
            Err(ValidationError::ExceedsLimit {
                field: "Request count",
                limit: 5
            })
        );
    }

    #[test]
    fn warning_clears_once_corrected() {
        let mut f = ready_form();
        f.set_request_count(Some(8));
        f.set_request_count(Some(5));
        assert_eq!(f.warning(), None);
        assert!(f.prepare().is_ok());
    }

    #[test]
    fn warning_appears_when_stock_arrives_after_count() {
        let mut f = BgsStockRequestForm {
            uniform_id: Some(4),
            project_id: Some(2),
            ..Default::default()
        };
        f.set_request_count(Some(9));
        assert_eq!(f.warning(), None);
        f.set_available(AvailableStock {
            available_stock: 2,
            unit_price: 1.0,
        });
        assert!(f.warning().is_some());
        assert_eq!(f.request_count(), Some(9));
    }

    #[test]
    fn changing_uniform_drops_stock_figures() {
        let mut f = ready_form();
        f.set_request_count(Some(8));
        f.set_uniform(Some(7));
        assert_eq!(f.available(), None);
        assert_eq!(f.warning(), None);
        assert_eq!(f.request_count(), Some(8));
    }

    #[test]
    fn employee_requests_need_a_badge() {
        let mut f = ready_form();
        f.requester_type = RequesterType::Employee;
        f.set_request_count(Some(1));
        assert_eq!(f.prepare(), Err(ValidationError::Required("Badge")));
        f.badge = " B77 ".into();
        let payload = f.prepare().unwrap();
        assert_eq!(payload.badge.as_deref(), Some("B77"));
        assert_eq!(payload.total_price, 3.0);
    }

    #[test]
    fn project_payload_omits_badge() {
        let mut f = ready_form();
        f.badge = "ignored".into();
        f.set_request_count(Some(2));
        let body = serde_json::to_value(f.prepare().unwrap()).unwrap();
        assert!(body.get("Badge").is_none());
        assert_eq!(body["RequesterType"], "Project");
        assert_eq!(body["TotalPrice"], 6.0);
    }

    #[test]
    fn zero_count_is_invalid() {
        let mut f = ready_form();
        f.set_request_count(Some(0));
        assert!(matches!(f.prepare(), Err(ValidationError::Invalid(_))));
    }
}
