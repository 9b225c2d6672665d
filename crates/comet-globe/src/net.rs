use crossbeam_channel::Sender;
use neo_catalog::{fetch_records, FetchError, Record};
use std::thread;

pub type FetchOutcome = Result<Vec<Record>, FetchError>;

/// Runs the one-shot record fetch on a worker thread and sends the outcome.
///
/// The UI thread polls the receiving end once per frame, so all viewer state is
/// still mutated from a single thread. The fetch is never cancelled.
pub fn spawn_fetch(url: String, tx: Sender<FetchOutcome>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        log::info!("Fetching near-Earth comets from {}", url);

        let outcome = fetch_records(&url);
        match &outcome {
            Ok(records) => log::debug!("Fetch returned {} records", records.len()),
            Err(e) => log::debug!("Fetch failed: {}", e),
        }

        if tx.send(outcome).is_err() {
            log::warn!("Viewer closed before the fetch completed");
        }
    })
}
