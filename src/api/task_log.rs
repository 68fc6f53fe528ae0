use super::PageParams;
use crate::client::RecotemClient;
use crate::error::Error;

impl RecotemClient {
    /// Task logs are returned as the raw response body.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_task_logs(&self, task: Option<i64>, page: PageParams) -> Result<String, Error> {
        let query = page.query().opt("task", task);
        self.get_text("task-log/", &query).await
    }
}
