use super::{Extra, PageParams, Paginated};
use crate::client::{Query, RecotemClient};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionEvent {
    pub id: i64,
    pub ab_test: i64,
    pub slot: i64,
    pub user_id: String,
    #[serde(default)]
    pub item_id: Option<String>,
    pub event_type: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewConversionEvent {
    pub ab_test: i64,
    pub slot: i64,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    pub event_type: String,
}

/// Contents of a batch file: a bare array or an object with `events`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BatchFile {
    Wrapped { events: Vec<NewConversionEvent> },
    Bare(Vec<NewConversionEvent>),
}

#[derive(Debug, Serialize)]
struct BatchBody<'a> {
    events: &'a [NewConversionEvent],
}

/// Parse the events of a batch file.
///
/// # Errors
///
/// Returns [`Error::Json`] if the text is neither form.
pub fn parse_batch_events(text: &str) -> Result<Vec<NewConversionEvent>, Error> {
    let file: BatchFile = serde_json::from_str(text)?;
    Ok(match file {
        BatchFile::Wrapped { events } | BatchFile::Bare(events) => events,
    })
}

impl RecotemClient {
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_conversion_events(
        &self,
        ab_test: Option<i64>,
        page: PageParams,
    ) -> Result<Paginated<ConversionEvent>, Error> {
        let query = page.query().opt("ab_test", ab_test);
        self.get_json("conversion-event/", &query).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn create_conversion_event(
        &self,
        event: &NewConversionEvent,
    ) -> Result<ConversionEvent, Error> {
        self.post_json("conversion-event/", event).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn get_conversion_event(&self, id: i64) -> Result<ConversionEvent, Error> {
        self.get_json(&format!("conversion-event/{id}/"), &Query::new())
            .await
    }

    /// The response shape is server-defined and returned untouched.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn batch_create_conversion_events(
        &self,
        events: &[NewConversionEvent],
    ) -> Result<Value, Error> {
        self.post_json("conversion-event/batch/", &BatchBody { events })
            .await
    }
}
