use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Validate, Deserialize)]
pub struct GetNearestStopPayload {
    #[validate(custom(function = "not_blank"))]
    pub place: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Must not be blank".into());
        return Err(error);
    }

    Ok(())
}

#[derive(Serialize, Deserialize)]
pub struct GetNearestStopResponseData {
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    pub station_name: String,
    pub wheelchair_accessible: bool,
}

#[derive(Serialize, Deserialize)]
pub struct GetNearestStopResponse {
    pub data: GetNearestStopResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_nearest_stop(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetNearestStopPayload>,
) -> Result<Response, AppError> {
    let place = payload.place.trim();
    let location = state.stop_finder.locate(place).await?;

    Ok((
        StatusCode::OK,
        Json(GetNearestStopResponse {
            data: GetNearestStopResponseData {
                place: place.to_string(),
                latitude: location.coordinates.latitude,
                longitude: location.coordinates.longitude,
                station_name: location.stop.name,
                wheelchair_accessible: location.stop.wheelchair_accessible,
            },
        }),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{
        app::gen_mock_app,
        services::{
            geocoding_client::types::mapbox_geocoding_response::{
                MapboxFeature, MapboxGeocodingResponse, MapboxGeometry,
            },
            transit_client::types::mbta_get_stops_response::{
                MbtaGetStopsResponse, MbtaStop, MbtaStopAttributes,
            },
        },
        utils::app_error::{ErrorResponseJson, LOCATION_NOT_FOUND_MESSAGE},
    };

    #[tokio::test]
    async fn get_response() {
        let mut mock_app = gen_mock_app().await;

        let mock_geocoding_response = MapboxGeocodingResponse {
            features: vec![serde_json::to_value(MapboxFeature {
                geometry: MapboxGeometry {
                    coordinates: [-71.0657, 42.3551],
                },
            })
            .unwrap()],
        };

        let mock_stops_response = MbtaGetStopsResponse {
            data: vec![serde_json::to_value(MbtaStop {
                attributes: MbtaStopAttributes {
                    name: "Park Street".to_string(),
                    wheelchair_boarding: Some(1),
                },
            })
            .unwrap()],
        };

        let geocoding_mock = mock_app
            .geocoding_server
            .mock("GET", "/geocoding/v5/mapbox.places/Boston%20Common.json")
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_geocoding_response).unwrap())
            .match_query(mockito::Matcher::Regex(".*".to_string()))
            .create_async()
            .await;

        let stops_mock = mock_app
            .transit_server
            .mock("GET", "/stops")
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_stops_response).unwrap())
            .match_query(mockito::Matcher::Regex(".*".to_string()))
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/nearest-stop?place=Boston%20Common")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        geocoding_mock.assert_async().await;
        stops_mock.assert_async().await;

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetNearestStopResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.data.place, "Boston Common");
        assert_eq!(body.data.latitude, 42.3551);
        assert_eq!(body.data.longitude, -71.0657);
        assert_eq!(body.data.station_name, "Park Street");
        assert!(body.data.wheelchair_accessible);
    }

    #[tokio::test]
    async fn unknown_place_is_not_found() {
        let mut mock_app = gen_mock_app().await;

        let _geocoding_mock = mock_app
            .geocoding_server
            .mock("GET", mockito::Matcher::Any)
            .with_body(r#"{"features": []}"#)
            .match_query(mockito::Matcher::Any)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/nearest-stop?place=Atlantis")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponseJson = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.message, LOCATION_NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn empty_place_is_bad_request() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/nearest-stop?place=")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn whitespace_place_is_bad_request() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/nearest-stop?place=%20%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn surrounding_whitespace_is_trimmed() {
        let mut mock_app = gen_mock_app().await;

        let geocoding_mock = mock_app
            .geocoding_server
            .mock("GET", "/geocoding/v5/mapbox.places/Boston%20Common.json")
            .with_body(r#"{"features": [{"geometry": {"coordinates": [-71.0657, 42.3551]}}]}"#)
            .match_query(mockito::Matcher::Any)
            .create_async()
            .await;

        let _stops_mock = mock_app
            .transit_server
            .mock("GET", "/stops")
            .with_body(r#"{"data": [{"attributes": {"name": "Park Street", "wheelchair_boarding": 0}}]}"#)
            .match_query(mockito::Matcher::Any)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/nearest-stop?place=%20Boston%20Common%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        geocoding_mock.assert_async().await;

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetNearestStopResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.data.place, "Boston Common");
        assert!(!body.data.wheelchair_accessible);
    }

    #[tokio::test]
    async fn missing_place_is_bad_request() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/nearest-stop")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
