use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schedule::ScheduleItem;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("user id is already registered")]
    DuplicateUserId,
    #[error("API request failed: {status} - {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    Man,
    Woman,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(rename = "roadAddress", default)]
    pub road_address: Option<String>,
}

/// Error body the server sends alongside non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// A task as the server sends it; dates are wall-clock datetime strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub status: i32,
}

impl TaskDto {
    /// Convert into the engine's item type, re-validating the interval
    pub fn into_item(self) -> anyhow::Result<ScheduleItem> {
        let start = super::time::parse_datetime(&self.start_date)?;
        let end = super::time::parse_datetime(&self.end_date)?;
        let item = ScheduleItem::new(self.id, self.title, self.description, start, end, self.status)?;
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_dto_parses_into_item() {
        let json = r#"{
            "id": 3,
            "title": "standup",
            "description": "daily sync",
            "startDate": "2024-05-20T09:00:00",
            "endDate": "2024-05-20T09:30:00",
            "status": 1
        }"#;
        let dto: TaskDto = serde_json::from_str(json).unwrap();
        let item = dto.into_item().unwrap();
        assert_eq!(item.id, 3);
        assert_eq!(item.duration_minutes(), 30);
        assert_eq!(item.status, 1);
    }

    #[test]
    fn task_dto_with_inverted_dates_is_rejected() {
        let dto = TaskDto {
            id: 1,
            title: "bad".to_string(),
            description: String::new(),
            start_date: "2024-05-20T10:00:00".to_string(),
            end_date: "2024-05-20T09:00:00".to_string(),
            status: 0,
        };
        assert!(dto.into_item().is_err());
    }

    #[test]
    fn user_roundtrips_with_camel_case_names() {
        let json = r#"{
            "userId": "daybook-user",
            "email": "user@daybook.app",
            "username": "Jordan",
            "sex": "MAN"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_id, "daybook-user");
        assert_eq!(user.sex, Some(Sex::Man));
        assert_eq!(user.nickname, None);

        let back = serde_json::to_string(&user).unwrap();
        assert!(back.contains("\"userId\""));
        assert!(back.contains("\"MAN\""));
    }
}
