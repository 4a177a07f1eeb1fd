//! Alert service; alerts are documents in MongoDB keyed by ObjectId.

use log::{debug, info, warn};
use mongodb::bson::{oid::ObjectId, DateTime};
use std::sync::Arc;

use crate::constants::{
    CODE_ALERT_NOT_FOUND, CODE_INVALID_ALERT_ID, ERR_ALERT_NOT_FOUND, ERR_INVALID_ALERT_ID,
};
use crate::errors::ApiError;
use crate::models::requests::required;
use crate::models::{
    Alert, AlertFilter, AlertResponse, CreateAlertRequest, Pagination, UpdateAlertRequest,
};
use crate::repositories::AlertRepository;

pub struct AlertService {
    repository: Arc<dyn AlertRepository>,
}

fn parse_alert_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| {
        warn!("Rejected malformed alert id: {}", id);
        ApiError::bad_request(CODE_INVALID_ALERT_ID, ERR_INVALID_ALERT_ID)
    })
}

fn alert_not_found(id: &str) -> ApiError {
    warn!("Alert not found with id: {}", id);
    ApiError::not_found(CODE_ALERT_NOT_FOUND, ERR_ALERT_NOT_FOUND)
}

impl AlertService {
    pub fn new(repository: Arc<dyn AlertRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_alert(&self, req: CreateAlertRequest) -> Result<Alert, ApiError> {
        let now = DateTime::now();
        let mut alert = Alert {
            id: None,
            title: required(req.title, "title")?,
            message: required(req.message, "message")?,
            level: req.level.unwrap_or_default(),
            active: req.active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };

        let id = self.repository.insert(&alert).await?;
        info!("Created {} alert: {}", alert.level, id);
        alert.id = Some(id);
        Ok(alert)
    }

    pub async fn list_alerts(
        &self,
        filter: AlertFilter,
        pagination: Pagination,
    ) -> Result<(Vec<AlertResponse>, u64), ApiError> {
        debug!("Listing alerts with filter: {:?}", filter);
        let total = self.repository.count(&filter).await?;
        let alerts = self
            .repository
            .find_page(&filter, pagination.skip(), pagination.limit())
            .await?;

        Ok((alerts.into_iter().map(Into::into).collect(), total))
    }

    pub async fn get_alert(&self, id: &str) -> Result<Option<Alert>, ApiError> {
        let object_id = parse_alert_id(id)?;
        Ok(self.repository.find_by_id(object_id).await?)
    }

    pub async fn update_alert(&self, id: &str, req: UpdateAlertRequest) -> Result<Alert, ApiError> {
        info!("Updating alert with id: {}", id);
        let object_id = parse_alert_id(id)?;

        let mut alert = self
            .repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| alert_not_found(id))?;

        if let Some(title) = req.title {
            alert.title = title;
        }
        if let Some(message) = req.message {
            alert.message = message;
        }
        if let Some(level) = req.level {
            alert.level = level;
        }
        if let Some(active) = req.active {
            alert.active = active;
        }
        alert.updated_at = DateTime::now();

        if !self.repository.replace(&alert).await? {
            return Err(alert_not_found(id));
        }
        Ok(alert)
    }

    pub async fn delete_alert(&self, id: &str) -> Result<(), ApiError> {
        info!("Deleting alert with id: {}", id);
        let object_id = parse_alert_id(id)?;
        if !self.repository.delete(object_id).await? {
            return Err(alert_not_found(id));
        }
        Ok(())
    }
}
