mod common;

use anyhow::Result;
use leadsync_client::LeadStatusUpdater;

use common::MockLeadApi;

#[tokio::test]
async fn concurrent_updates_on_one_lead_are_sent_independently() -> Result<()> {
    let server = MockLeadApi::echo().await?;
    let updater = LeadStatusUpdater::new(&server.base_url)?;

    // No client-side ordering between the two: the server decides which lands last
    let (hot, sold) = tokio::join!(
        updater.update_status("42", "HOT", "t"),
        updater.update_status("42", "SOLD", "t"),
    );

    assert_eq!(hot?["status"], "HOT");
    assert_eq!(sold?["status"], "SOLD");

    let mut bodies: Vec<String> = server.requests().into_iter().map(|r| r.body).collect();
    bodies.sort();
    assert_eq!(bodies, vec![r#"{"status":"HOT"}"#, r#"{"status":"SOLD"}"#]);
    Ok(())
}

#[tokio::test]
async fn cloned_updaters_work_from_spawned_tasks() -> Result<()> {
    let server = MockLeadApi::echo().await?;
    let updater = LeadStatusUpdater::new(&server.base_url)?;

    let mut handles = Vec::new();
    for i in 0..5 {
        let updater = updater.clone();
        handles.push(tokio::spawn(async move {
            let lead_id = format!("lead-{i}");
            updater.update_status(&lead_id, "HOT", "t").await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    let mut leads: Vec<String> = server.requests().into_iter().map(|r| r.lead_id).collect();
    leads.sort();
    assert_eq!(leads, vec!["lead-0", "lead-1", "lead-2", "lead-3", "lead-4"]);
    Ok(())
}
