#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use rust_decimal::Decimal;

use crate::Result;
use crate::params::if_one_then_all;

/// Parameters for `UpdateLead`.
///
/// `amount`/`add_to_existing` and `status`/`sub_status` are all-or-none
/// pairs: supply both members or neither.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct UpdateLeadRequest {
    /// Lead identifier (a GUID issued by the platform).
    #[builder(into)]
    pub lead_id: String,
    pub buyer_contract_id: Option<i64>,
    #[builder(into)]
    pub status: Option<String>,
    #[builder(into)]
    pub sub_status: Option<String>,
    pub amount: Option<Decimal>,
    pub add_to_existing: Option<bool>,
    #[builder(into)]
    pub field_name: Option<String>,
    #[builder(into)]
    pub field_value: Option<String>,
    pub return_reason_id: Option<i64>,
}

impl UpdateLeadRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if_one_then_all(&[
            ("amount", self.amount.is_some()),
            ("add_to_existing", self.add_to_existing.is_some()),
        ])?;
        if_one_then_all(&[
            ("status", self.status.is_some()),
            ("sub_status", self.sub_status.is_some()),
        ])?;
        Ok(())
    }
}
