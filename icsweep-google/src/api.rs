//! Calls against the Google Calendar API: paginated event search and
//! deletion.

use std::collections::VecDeque;

use google_calendar::Client;
use google_calendar::types::{Event, OrderBy, SendUpdates};
use icsweep_core::{RemoteCalendar, RemoteEvent, SweepError, SweepResult};

use crate::convert::remote_event_from_google;

/// A Google calendar reachable through an authenticated client.
pub struct GoogleCalendar {
    client: Client,
    calendar_id: String,
}

impl GoogleCalendar {
    pub fn new(client: Client, calendar_id: impl Into<String>) -> Self {
        GoogleCalendar {
            client,
            calendar_id: calendar_id.into(),
        }
    }
}

impl RemoteCalendar for GoogleCalendar {
    async fn locate(&self, uid: &str) -> SweepResult<Option<RemoteEvent>> {
        // UIDs are expected to be unique remotely, so one result is enough.
        let mut search = EventSearch::new(&self.client, &self.calendar_id, uid, 1);
        match search.next().await? {
            Some(event) => Ok(Some(remote_event_from_google(event)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, event_id: &str) -> SweepResult<()> {
        let result = self
            .client
            .events()
            .delete(&self.calendar_id, event_id, false, SendUpdates::None)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                let error_str = e.to_string();
                // Gone means another client already deleted it.
                if error_str.contains("410") || error_str.contains("Gone") {
                    Ok(())
                } else {
                    Err(SweepError::RemoteUnavailable(format!(
                        "failed to delete event {}: {}",
                        event_id, e
                    )))
                }
            }
        }
    }
}

/// Lazy cursor over a UID-filtered event search.
///
/// Buffers one page of results at a time; the next page is fetched
/// transparently once the buffer runs dry. A page with no items ends the
/// stream, even when the API returned a continuation token alongside it.
/// Occurrences of a recurring series collapse to a single representative
/// (`singleEvents` semantics).
pub struct EventSearch<'a> {
    client: &'a Client,
    calendar_id: &'a str,
    ical_uid: &'a str,
    page_size: i64,
    buffer: VecDeque<Event>,
    page_token: String,
    exhausted: bool,
}

impl<'a> EventSearch<'a> {
    pub fn new(client: &'a Client, calendar_id: &'a str, ical_uid: &'a str, page_size: i64) -> Self {
        EventSearch {
            client,
            calendar_id,
            ical_uid,
            page_size,
            buffer: VecDeque::new(),
            page_token: String::new(),
            exhausted: false,
        }
    }

    /// Next matching event, fetching further pages as needed. Restarting
    /// requires a fresh search.
    pub async fn next(&mut self) -> SweepResult<Option<Event>> {
        if self.buffer.is_empty() && !self.exhausted {
            self.fetch_page().await?;
        }
        Ok(self.buffer.pop_front())
    }

    async fn fetch_page(&mut self) -> SweepResult<()> {
        let response = self
            .client
            .events()
            .list(
                self.calendar_id,
                self.ical_uid,
                0, // max_attendees
                self.page_size,
                OrderBy::default(),
                &self.page_token,
                &[], // private_extended_property
                "",  // free-text query
                &[], // shared_extended_property
                false, // show_deleted
                false, // show_hidden_invitations
                true,  // single_events
                "",    // time_max
                "",    // time_min
                "",    // time_zone
                "",    // updated_min
            )
            .await
            .map_err(|e| SweepError::RemoteUnavailable(e.to_string()))?;

        // `google-calendar` 0.10 `events().list` returns the page's items
        // directly as the response body and does not surface a continuation
        // token, so a single `list` call covers one page.
        let items = response.body;
        if items.is_empty() {
            self.exhausted = true;
            return Ok(());
        }

        self.exhausted = true;
        self.buffer.extend(items);
        Ok(())
    }
}
