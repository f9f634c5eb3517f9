/**
 * Recommendations Handler
 *
 * GET /api/recommendations?lat=..&lon=..&type=clinic|hospital|pharmacy
 *
 * A stateless proxy: validates coordinates, asks the places client, and
 * returns `{success, source, places}`. With `DEV_PLACES_FALLBACK` set, an
 * empty lookup yields two mock places so a client under development has
 * something to render; in production an empty list is returned as-is.
 */

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::backend::error::ApiError;
use crate::backend::middleware::CurrentUser;
use crate::backend::recommendations::geo::distance_km_rounded;
use crate::backend::recommendations::places::{FacilityKind, Location, Place};
use crate::backend::server::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(rename = "type")]
    pub facility_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub source: &'static str,
    pub places: Vec<Place>,
}

pub async fn get_recommendations(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Json<RecommendationsResponse>, ApiError> {
    let (Some(lat), Some(lon)) = (query.lat, query.lon) else {
        return Err(ApiError::validation(
            "lat and lon query params are required and must be numbers",
        ));
    };
    if !lat.is_finite() || !lon.is_finite() {
        return Err(ApiError::validation(
            "lat and lon query params are required and must be numbers",
        ));
    }

    let kind = FacilityKind::from_query(query.facility_type.as_deref());
    tracing::debug!(user = %user.id, lat, lon, ?kind, "recommendations lookup");

    let (source, places) = state.places.nearby(lat, lon, kind).await?;

    if places.is_empty() && state.config.dev_places_fallback {
        tracing::debug!("no real places found, serving dev mock set");
        return Ok(Json(RecommendationsResponse {
            success: true,
            source: "mock",
            places: mock_places(lat, lon),
        }));
    }

    Ok(Json(RecommendationsResponse {
        success: true,
        source: source.as_str(),
        places,
    }))
}

/// Small fixed set near the query point, development only.
fn mock_places(lat: f64, lon: f64) -> Vec<Place> {
    let clinic = (lat + 0.002, lon + 0.002);
    let pharmacy = (lat - 0.003, lon - 0.001);
    vec![
        Place {
            id: "mock-1".to_string(),
            name: "CareLink Clinic (Demo)".to_string(),
            address: "123 Example St, Nearby City".to_string(),
            location: Location { lat: clinic.0, lon: clinic.1 },
            rating: None,
            user_ratings_total: None,
            distance_km: distance_km_rounded(lat, lon, clinic.0, clinic.1),
            link: "https://www.openstreetmap.org/".to_string(),
        },
        Place {
            id: "mock-2".to_string(),
            name: "Neighborhood Pharmacy (Demo)".to_string(),
            address: "45 Local Rd, Nearby City".to_string(),
            location: Location { lat: pharmacy.0, lon: pharmacy.1 },
            rating: None,
            user_ratings_total: None,
            distance_km: distance_km_rounded(lat, lon, pharmacy.0, pharmacy.1),
            link: "https://www.openstreetmap.org/".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_places_are_near_the_query_point() {
        let places = mock_places(48.8566, 2.3522);
        assert_eq!(places.len(), 2);
        for place in &places {
            assert!(place.distance_km < 1.0, "mock place unexpectedly far");
        }
    }
}
