use crate::domain::models::{AllocationCodes, ShipmentJob};

const FREIGHT_TERM_CODES: &[(&str, &str)] = &[
    ("3rd party", "123.445"),
    ("collect", "987.434"),
    ("unknown", "756.434"),
];

const JOB_TYPE_CODES: &[(&str, &str)] = &[
    ("ftl", "999.123"),
    ("ltl", "001.456"),
    ("unknown", "000.000"),
];

const CODE_NOT_FOUND: &str = "Not Found";

pub fn freight_term_code(raw: Option<&str>) -> String {
    code_for(FREIGHT_TERM_CODES, raw)
}

pub fn job_type_code(raw: Option<&str>) -> String {
    code_for(JOB_TYPE_CODES, raw)
}

/// Attaches `AllocationCodes` to every job unconditionally. Pure, no
/// I/O; total over any combination of present/absent/mixed-case inputs.
pub fn annotate_allocation_codes(jobs: &mut [ShipmentJob]) {
    for job in jobs.iter_mut() {
        job.allocation_codes = Some(AllocationCodes {
            freight_charge_terms: freight_term_code(job.freight_charge_terms()),
            job_type: job_type_code(job.job_type.as_deref()),
        });
    }
}

// An absent field defaults to the fallback literal and is lower-cased
// like any other input; "not found" matches no table key, so absent
// fields always resolve to the fallback.
fn code_for(table: &[(&str, &str)], raw: Option<&str>) -> String {
    let needle = raw.unwrap_or(CODE_NOT_FOUND).to_lowercase();
    table
        .iter()
        .find(|(term, _)| *term == needle)
        .map(|(_, code)| (*code).to_string())
        .unwrap_or_else(|| CODE_NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_terms_resolve_case_insensitively() {
        assert_eq!(freight_term_code(Some("3rd party")), "123.445");
        assert_eq!(freight_term_code(Some("3RD PARTY")), "123.445");
        assert_eq!(freight_term_code(Some("Collect")), "987.434");
        assert_eq!(freight_term_code(Some("unknown")), "756.434");
        assert_eq!(job_type_code(Some("FTL")), "999.123");
        assert_eq!(job_type_code(Some("ltl")), "001.456");
        assert_eq!(job_type_code(Some("Unknown")), "000.000");
    }

    #[test]
    fn absent_and_unmatched_inputs_fall_back() {
        assert_eq!(freight_term_code(None), "Not Found");
        assert_eq!(freight_term_code(Some("prepaid")), "Not Found");
        assert_eq!(job_type_code(None), "Not Found");
        // The literal fallback itself never matches a table key.
        assert_eq!(freight_term_code(Some("Not Found")), "Not Found");
        assert_eq!(job_type_code(Some("not found")), "Not Found");
    }

    #[test]
    fn every_job_gets_both_codes() {
        let mut jobs: Vec<ShipmentJob> = serde_json::from_value(json!([
            {"jobType": "FTL", "jobTypeInfo": {"freightChargeTerms": "Collect"}},
            {"jobType": "parcel"},
            {}
        ]))
        .unwrap();

        annotate_allocation_codes(&mut jobs);

        let codes: Vec<_> = jobs
            .iter()
            .map(|job| job.allocation_codes.clone().unwrap())
            .collect();
        assert_eq!(codes[0].freight_charge_terms, "987.434");
        assert_eq!(codes[0].job_type, "999.123");
        assert_eq!(codes[1].freight_charge_terms, "Not Found");
        assert_eq!(codes[1].job_type, "Not Found");
        assert_eq!(codes[2].freight_charge_terms, "Not Found");
        assert_eq!(codes[2].job_type, "Not Found");
    }
}
