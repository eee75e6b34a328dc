use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::config::{ApiConfig, DisclosureConfig};
use crate::domain::models::{CarrierDetails, EnrichSummary, OrganizationRecord, ShipmentJob};
use crate::services::http::BackoffClient;

pub const MISSING_QID_ERROR: &str = "Carrier QID not found";

/// Looks up the carrier organization for each job and attaches
/// `carrierDetails`: the extracted carrier fields on success, an inline
/// error otherwise. Failure is always per-record; the batch continues.
///
/// With `collect_orgs` the raw organization payloads are retained keyed
/// by carrier QID, for persistence as a second artifact.
pub fn enrich_with_carrier(
    http: &BackoffClient,
    api: &ApiConfig,
    api_key: &str,
    jobs: &mut [ShipmentJob],
    disclosure: &DisclosureConfig,
    collect_orgs: bool,
) -> (EnrichSummary, BTreeMap<String, Value>) {
    let base = format!("{}/organizations", api.base_url.trim_end_matches('/'));
    let mut summary = EnrichSummary::default();
    let mut collected = BTreeMap::new();

    for job in jobs.iter_mut() {
        let Some(qid) = job.carrier_qid().map(str::to_string) else {
            job.carrier_details = Some(CarrierDetails::Failed {
                error: MISSING_QID_ERROR.to_string(),
            });
            summary.missing_qid += 1;
            continue;
        };

        let url = format!("{base}/{qid}");
        let payload: Value = match http.get(&url, api_key, &[]) {
            Ok(response) => match response.json() {
                Ok(payload) => payload,
                Err(err) => {
                    job.carrier_details = Some(CarrierDetails::Failed {
                        error: format!("error decoding organization {qid}: {err}"),
                    });
                    summary.failed += 1;
                    continue;
                }
            },
            Err(err) => {
                job.carrier_details = Some(CarrierDetails::Failed {
                    error: err.to_string(),
                });
                summary.failed += 1;
                continue;
            }
        };

        if collect_orgs {
            collected.insert(qid.clone(), payload.clone());
        }

        let org: OrganizationRecord = match serde_json::from_value(payload) {
            Ok(org) => org,
            Err(err) => {
                job.carrier_details = Some(CarrierDetails::Failed {
                    error: format!("invalid organization payload for {qid}: {err}"),
                });
                summary.failed += 1;
                continue;
            }
        };

        let disclose = disclosure.discloses(job.bol_number());
        let carrier = org.trucking_carrier_info.unwrap_or_default();
        job.carrier_details = Some(CarrierDetails::Resolved {
            scac: carrier.scac,
            mc_number: carrier.mc_number,
            usdot: carrier.usdot_number,
            legal_name: if disclose { org.legal_name } else { None },
        });
        summary.resolved += 1;
    }

    (summary, collected)
}
