use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One shipment-job record as returned by the API. Only the handful of
/// fields the pipeline reads are typed; everything else rides along in
/// `extra` so records survive a serialize/deserialize round trip intact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShipmentJob {
    #[serde(rename = "jobType", default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(rename = "jobTypeInfo", default, skip_serializing_if = "Option::is_none")]
    pub job_type_info: Option<JobTypeInfo>,
    #[serde(
        rename = "referenceNumbers",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_numbers: Option<ReferenceNumbers>,
    #[serde(
        rename = "carrierDetails",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub carrier_details: Option<CarrierDetails>,
    #[serde(
        rename = "AllocationCodes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allocation_codes: Option<AllocationCodes>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShipmentJob {
    pub fn carrier_qid(&self) -> Option<&str> {
        self.job_type_info
            .as_ref()?
            .carrier_organization_qid
            .as_deref()
    }

    pub fn bol_number(&self) -> Option<&str> {
        self.reference_numbers.as_ref()?.bol_number.as_deref()
    }

    pub fn freight_charge_terms(&self) -> Option<&str> {
        self.job_type_info.as_ref()?.freight_charge_terms.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobTypeInfo {
    #[serde(
        rename = "carrierOrganizationQid",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub carrier_organization_qid: Option<String>,
    #[serde(
        rename = "freightChargeTerms",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub freight_charge_terms: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceNumbers {
    #[serde(rename = "bolNumber", default, skip_serializing_if = "Option::is_none")]
    pub bol_number: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Exactly one of the two shapes is ever attached to a job: either the
/// extracted carrier fields or a single `error` string. `Failed` must be
/// tried first so an error payload never matches the all-optional
/// `Resolved` variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CarrierDetails {
    Failed {
        error: String,
    },
    Resolved {
        #[serde(rename = "SCAC", default)]
        scac: Option<String>,
        #[serde(rename = "MCNumber", default)]
        mc_number: Option<String>,
        #[serde(rename = "USDOT", default)]
        usdot: Option<String>,
        #[serde(rename = "legalName", default, skip_serializing_if = "Option::is_none")]
        legal_name: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllocationCodes {
    #[serde(rename = "Freight Charge Terms")]
    pub freight_charge_terms: String,
    #[serde(rename = "Job Type")]
    pub job_type: String,
}

/// Typed view over an organization payload; the raw payload itself is
/// what gets retained when `--collect-orgs` is on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizationRecord {
    #[serde(rename = "legalName", default, skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(
        rename = "truckingCarrierInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub trucking_carrier_info: Option<TruckingCarrierInfo>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TruckingCarrierInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scac: Option<String>,
    #[serde(rename = "mcNumber", default, skip_serializing_if = "Option::is_none")]
    pub mc_number: Option<String>,
    #[serde(rename = "usdotNumber", default, skip_serializing_if = "Option::is_none")]
    pub usdot_number: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobsPage {
    #[serde(default)]
    pub data: Vec<ShipmentJob>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "hasNextPage", default)]
    pub has_next_page: bool,
    #[serde(rename = "endCursor", default)]
    pub end_cursor: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct EnrichSummary {
    pub resolved: usize,
    pub failed: usize,
    pub missing_qid: usize,
}

#[derive(Serialize)]
pub struct PullReport {
    pub jobs_fetched: usize,
    pub resolved: usize,
    pub enrich_failed: usize,
    pub missing_qid: usize,
    pub allocation_applied: bool,
    pub artifacts: Vec<String>,
}

#[derive(Serialize)]
pub struct CodesReport {
    pub freight_charge_terms: String,
    pub job_type: String,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}
