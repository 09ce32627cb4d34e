//! Broadcaster info endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use utoipa::IntoParams;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::STATION_TAG;
use crate::api::dto::BjInfoResponse;
use crate::error::{AppError, AppResult};
use crate::services::QueryOptions;
use crate::state::AppState;

/// Register broadcaster info routes.
pub fn station_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(get_bj_info))
}

/// Query string of `GET /api/bj_info`. Values stay raw so that a malformed
/// one becomes a failure body instead of a rejection.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BjInfoParams {
    /// Broadcaster id
    pub id: Option<String>,
    /// Inclusive window start, `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// Inclusive window end, `YYYY-MM-DD`
    pub end_date: Option<String>,
    /// Maximum number of VODs returned
    pub limit: Option<String>,
    /// `true` to list only replays
    pub review: Option<String>,
}

impl BjInfoParams {
    fn has_id(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.trim().is_empty())
    }

    pub fn options(&self) -> AppResult<QueryOptions> {
        Ok(QueryOptions {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            limit: blank_to_none(&self.limit)
                .map(|raw| {
                    raw.parse::<usize>().map_err(|_| {
                        AppError::invalid_parameter("limit", format!("'{}' is not a number", raw))
                    })
                })
                .transpose()?,
            review: blank_to_none(&self.review).map(parse_flag).transpose()?,
        })
    }
}

fn blank_to_none(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_flag(raw: &str) -> AppResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Ok(true),
        "0" | "false" | "no" | "n" => Ok(false),
        _ => Err(AppError::invalid_parameter("review", format!("'{}' is not a boolean", raw))),
    }
}

/// GET /api/bj_info - Broadcaster profile, live state and VOD archive.
///
/// Always answers 200; failures are reported in the body.
#[utoipa::path(
    get,
    path = "/bj_info",
    tag = STATION_TAG,
    params(BjInfoParams),
    responses(
        (
            status = 200,
            description = "Query result, `success` tells which shape",
            body = BjInfoResponse
        )
    )
)]
async fn get_bj_info(
    State(state): State<AppState>,
    params: Result<Query<BjInfoParams>, QueryRejection>,
) -> Json<BjInfoResponse> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => return Json(BjInfoResponse::failure(rejection.body_text())),
    };

    // a missing id wins over any other bad parameter
    let options = match params.options() {
        Ok(options) => options,
        Err(e) if params.has_id() => return Json(BjInfoResponse::failure(e.to_string())),
        Err(_) => QueryOptions::default(),
    };

    let result = state
        .services
        .station
        .handle(params.id.as_deref(), &options)
        .await;
    Json(result.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(limit: Option<&str>, review: Option<&str>) -> BjInfoParams {
        BjInfoParams {
            id: Some("gamst".to_string()),
            limit: limit.map(String::from),
            review: review.map(String::from),
            ..BjInfoParams::default()
        }
    }

    #[test]
    fn test_options_parsing() {
        let options = params(Some("5"), Some("TRUE")).options().unwrap();
        assert_eq!(options.limit, Some(5));
        assert_eq!(options.review, Some(true));

        let options = params(Some(" "), None).options().unwrap();
        assert_eq!(options, QueryOptions::default());
    }

    #[test]
    fn test_options_rejects_garbage() {
        let err = params(Some("ten"), None).options().unwrap_err();
        assert!(err.to_string().contains("limit"));

        let err = params(None, Some("maybe")).options().unwrap_err();
        assert!(err.to_string().contains("review"));
    }
}
