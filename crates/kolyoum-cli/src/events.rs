//! `events` command: prints the Teskerti feed.
//!
//! Ctrl-C cancels the in-flight request through the client's cancellation
//! hook, so an interrupted fetch still reports a failure envelope.

use kolyoum_core::AppConfig;
use kolyoum_teskerti::{TeskertiApiResponse, TeskertiClient};

const TITLE_WIDTH: usize = 50;

/// Fetch the event feed and print it as a table or as JSON.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed, or if the feed
/// reports `success: false` (after printing the envelope in `--json` mode).
pub(crate) async fn run_events(
    config: &AppConfig,
    category: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let client = TeskertiClient::new(config)?;
    tracing::info!(url = %client.endpoint(), "fetching Teskerti events");

    let interrupted = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };
    let envelope = client.get_teskerti_events_until(interrupted).await;
    let envelope = filter_by_category(envelope, category);

    if json {
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else if envelope.success {
        print_table(&envelope, category);
    }

    if !envelope.success {
        anyhow::bail!(
            "event feed unavailable: {}",
            envelope.error.as_deref().unwrap_or("Unknown error")
        );
    }
    Ok(())
}

/// Narrow the envelope to one category, keeping every other field intact.
fn filter_by_category(
    mut envelope: TeskertiApiResponse,
    category: Option<&str>,
) -> TeskertiApiResponse {
    if let Some(category) = category {
        let events = envelope.events_in_category(category).cloned().collect();
        envelope.events = events;
    }
    envelope
}

fn print_table(envelope: &TeskertiApiResponse, category: Option<&str>) {
    if envelope.events.is_empty() {
        println!(
            "no events found{}",
            category
                .map(|c| format!(" in category {c}"))
                .unwrap_or_default()
        );
    } else {
        println!(
            "{:<21}{:<14}{:<12}{:<28}TITLE",
            "DATE", "CATEGORY", "PRICE", "LOCATION"
        );
        for event in &envelope.events {
            println!(
                "{:<21}{:<14}{:<12}{:<28}{}",
                event.date,
                event.category,
                event.price.as_deref().unwrap_or("\u{2014}"),
                truncate(&event.location, 26),
                truncate(&event.title, TITLE_WIDTH)
            );
        }
    }

    if let Some(synced) = envelope.last_sync_at() {
        let source = if envelope.from_cache == Some(true) {
            " (cached)"
        } else {
            ""
        };
        println!("\nlast sync: {}{source}", synced.format("%Y-%m-%d %H:%M UTC"));
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use kolyoum_teskerti::TeskertiEvent;

    use super::*;

    fn envelope_with(categories: &[&str]) -> TeskertiApiResponse {
        let events = categories
            .iter()
            .enumerate()
            .map(|(i, category)| TeskertiEvent {
                id: i.to_string(),
                title: format!("Event {i}"),
                date: "2024-07-01".to_string(),
                location: "Sousse".to_string(),
                category: (*category).to_string(),
                price: None,
                url: format!("https://teskerti.tn/evenement/{i}"),
            })
            .collect();
        TeskertiApiResponse {
            success: true,
            events,
            last_sync: Some(1_718_409_600_000),
            from_cache: Some(false),
            error: None,
        }
    }

    #[test]
    fn filter_keeps_matching_events_and_metadata() {
        let filtered = filter_by_category(
            envelope_with(&["Concert", "Cinema", "concert"]),
            Some("Concert"),
        );
        assert_eq!(filtered.events.len(), 2);
        assert_eq!(filtered.last_sync, Some(1_718_409_600_000));
        assert_eq!(filtered.from_cache, Some(false));
    }

    #[test]
    fn no_filter_leaves_envelope_untouched() {
        let original = envelope_with(&["Concert", "Cinema"]);
        assert_eq!(filter_by_category(original.clone(), None), original);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("Théâtre", 3), "Thé...");
        assert_eq!(truncate("short", 10), "short");
    }
}
