use super::{Extra, PageParams, Paginated};
use crate::client::{Query, RecotemClient};
use crate::error::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Serialize)]
struct ResetPassword<'a> {
    new_password: &'a str,
}

impl RecotemClient {
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_users(&self, page: PageParams) -> Result<Paginated<User>, Error> {
        self.get_json("user/", &page.query()).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn create_user(&self, user: &NewUser) -> Result<User, Error> {
        self.post_json("user/", user).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn get_user(&self, id: i64) -> Result<User, Error> {
        self.get_json(&format!("user/{id}/"), &Query::new()).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn update_user(&self, id: i64, patch: &UserPatch) -> Result<User, Error> {
        self.patch_json(&format!("user/{id}/"), patch).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn delete_user(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("user/{id}/")).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn activate_user(&self, id: i64) -> Result<(), Error> {
        self.post_action::<()>(&format!("user/{id}/activate/"), None)
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn deactivate_user(&self, id: i64) -> Result<(), Error> {
        self.post_action::<()>(&format!("user/{id}/deactivate/"), None)
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn reset_user_password(&self, id: i64, new_password: &str) -> Result<(), Error> {
        self.post_action(
            &format!("user/{id}/reset_password/"),
            Some(&ResetPassword { new_password }),
        )
        .await?;
        Ok(())
    }
}
