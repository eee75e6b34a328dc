use crate::domain::config::ApiConfig;
use crate::domain::models::{JobsPage, ShipmentJob};
use crate::services::http::BackoffClient;

/// Pulls every page of shipment jobs inside the configured revision
/// window, following `pageInfo.endCursor` tokens. A failure mid-way is
/// logged and whatever was accumulated so far is returned; partial
/// results are acceptable downstream.
pub fn fetch_shipment_jobs(
    http: &BackoffClient,
    api: &ApiConfig,
    api_key: &str,
) -> Vec<ShipmentJob> {
    let url = format!("{}/shipment-jobs", api.base_url.trim_end_matches('/'));
    let mut params = vec![
        ("revisedAfter".to_string(), api.revised_after.clone()),
        ("revisedBefore".to_string(), api.revised_before.clone()),
    ];

    let mut jobs = Vec::new();
    loop {
        let response = match http.get(&url, api_key, &params) {
            Ok(response) => response,
            Err(err) => {
                eprintln!("error fetching shipment jobs: {err}");
                break;
            }
        };
        let page: JobsPage = match response.json() {
            Ok(page) => page,
            Err(err) => {
                eprintln!("error decoding shipment jobs page: {err}");
                break;
            }
        };

        jobs.extend(page.data);

        if !page.page_info.has_next_page {
            break;
        }
        // The cursor is opaque; it only ever travels back as `after`.
        match page.page_info.end_cursor {
            Some(cursor) => set_after(&mut params, cursor),
            None => break,
        }
    }

    jobs
}

fn set_after(params: &mut Vec<(String, String)>, cursor: String) {
    if let Some(entry) = params.iter_mut().find(|(key, _)| key == "after") {
        entry.1 = cursor;
    } else {
        params.push(("after".to_string(), cursor));
    }
}
