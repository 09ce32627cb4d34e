use utoipa::OpenApi;

pub const STATION_TAG: &str = "Station";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "bj-info",
        description = "Broadcaster profile, live status and VOD archive lookup",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = STATION_TAG, description = "Broadcaster info endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
