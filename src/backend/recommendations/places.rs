/**
 * Nearby Places Client
 *
 * Stateless proxy to third-party place lookups. Google Places Nearby Search
 * is used when an API key is configured; OSM Nominatim is the keyless
 * fallback. Both are mapped to one `Place` shape with a haversine distance
 * from the query point.
 *
 * Base URLs are injectable so tests can point the client at a local mock
 * server; production uses the real endpoints.
 */

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::backend::recommendations::geo::distance_km_rounded;

const GOOGLE_NEARBY_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";
const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Search radius for Google Nearby Search, meters.
const GOOGLE_RADIUS_M: u32 = 5000;

/// Half-width of the Nominatim viewbox, degrees.
const OSM_VIEWBOX_DEG: f64 = 0.05;

/// Identify ourselves to Nominatim per their usage policy.
const OSM_USER_AGENT: &str = "carelink/0.1 (healthcare demo)";

/// Facility category a caller can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilityKind {
    Clinic,
    Hospital,
    Pharmacy,
}

impl FacilityKind {
    /// Parse the query parameter; unknown values fall back to clinic, as
    /// the lookup is advisory rather than strict.
    pub fn from_query(raw: Option<&str>) -> FacilityKind {
        match raw.map(str::to_lowercase).as_deref() {
            Some("hospital") => FacilityKind::Hospital,
            Some("pharmacy") => FacilityKind::Pharmacy,
            _ => FacilityKind::Clinic,
        }
    }

    /// Google Places type. Google has no clinic type; hospitals are the
    /// closest match.
    fn google_type(&self) -> &'static str {
        match self {
            FacilityKind::Clinic | FacilityKind::Hospital => "hospital",
            FacilityKind::Pharmacy => "pharmacy",
        }
    }

    /// OSM amenity keyword.
    fn osm_amenity(&self) -> &'static str {
        match self {
            FacilityKind::Clinic => "clinic",
            FacilityKind::Hospital => "hospital",
            FacilityKind::Pharmacy => "pharmacy",
        }
    }
}

/// A nearby facility in the shape the API returns.
#[derive(Debug, Clone, Serialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<i64>,
    pub distance_km: f64,
    pub link: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone)]
pub struct PlacesClient {
    http: Client,
    google_key: Option<String>,
    google_url: String,
    osm_url: String,
}

/// Which backend produced a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceSource {
    Google,
    Osm,
}

impl PlaceSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceSource::Google => "google",
            PlaceSource::Osm => "osm",
        }
    }
}

impl PlacesClient {
    pub fn new(http: Client, google_key: Option<String>) -> Self {
        PlacesClient {
            http,
            google_key,
            google_url: GOOGLE_NEARBY_URL.to_string(),
            osm_url: NOMINATIM_URL.to_string(),
        }
    }

    /// Test constructor with injectable endpoints.
    #[cfg(test)]
    pub fn with_endpoints(
        http: Client,
        google_key: Option<String>,
        google_url: String,
        osm_url: String,
    ) -> Self {
        PlacesClient {
            http,
            google_key,
            google_url,
            osm_url,
        }
    }

    /// Look up nearby facilities: Google first when configured, falling
    /// back to OSM when Google is unconfigured or returns nothing.
    pub async fn nearby(
        &self,
        lat: f64,
        lon: f64,
        kind: FacilityKind,
    ) -> Result<(PlaceSource, Vec<Place>), reqwest::Error> {
        if self.google_key.is_some() {
            let places = self.google_nearby(lat, lon, kind).await?;
            if !places.is_empty() {
                return Ok((PlaceSource::Google, places));
            }
            tracing::debug!("google returned no places, falling back to osm");
        }

        let places = self.osm_nearby(lat, lon, kind).await?;
        Ok((PlaceSource::Osm, places))
    }

    async fn google_nearby(
        &self,
        lat: f64,
        lon: f64,
        kind: FacilityKind,
    ) -> Result<Vec<Place>, reqwest::Error> {
        #[derive(Deserialize)]
        struct GoogleResponse {
            #[serde(default)]
            results: Vec<GoogleResult>,
        }
        #[derive(Deserialize)]
        struct GoogleResult {
            place_id: String,
            name: String,
            vicinity: Option<String>,
            formatted_address: Option<String>,
            geometry: GoogleGeometry,
            rating: Option<f64>,
            user_ratings_total: Option<i64>,
        }
        #[derive(Deserialize)]
        struct GoogleGeometry {
            location: GoogleLocation,
        }
        #[derive(Deserialize)]
        struct GoogleLocation {
            lat: f64,
            lng: f64,
        }

        let key = self.google_key.as_deref().unwrap_or_default();
        let response: GoogleResponse = self
            .http
            .get(&self.google_url)
            .query(&[
                ("key", key),
                ("location", &format!("{lat},{lon}")),
                ("radius", &GOOGLE_RADIUS_M.to_string()),
                ("type", kind.google_type()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let places = response
            .results
            .into_iter()
            .map(|r| {
                let (r_lat, r_lon) = (r.geometry.location.lat, r.geometry.location.lng);
                Place {
                    link: format!(
                        "https://www.google.com/maps/search/?api=1&query={}&query_place_id={}",
                        urlencode(&r.name),
                        r.place_id
                    ),
                    id: r.place_id,
                    address: r
                        .vicinity
                        .or(r.formatted_address)
                        .unwrap_or_default(),
                    name: r.name,
                    location: Location { lat: r_lat, lon: r_lon },
                    rating: r.rating,
                    user_ratings_total: r.user_ratings_total,
                    distance_km: distance_km_rounded(lat, lon, r_lat, r_lon),
                }
            })
            .collect();
        Ok(places)
    }

    async fn osm_nearby(
        &self,
        lat: f64,
        lon: f64,
        kind: FacilityKind,
    ) -> Result<Vec<Place>, reqwest::Error> {
        #[derive(Deserialize)]
        struct OsmResult {
            place_id: Option<i64>,
            lat: String,
            lon: String,
            display_name: String,
        }

        let viewbox = format!(
            "{},{},{},{}",
            lon - OSM_VIEWBOX_DEG,
            lat + OSM_VIEWBOX_DEG,
            lon + OSM_VIEWBOX_DEG,
            lat - OSM_VIEWBOX_DEG
        );
        let results: Vec<OsmResult> = self
            .http
            .get(&self.osm_url)
            .header(reqwest::header::USER_AGENT, OSM_USER_AGENT)
            .query(&[
                ("format", "json"),
                ("q", kind.osm_amenity()),
                ("limit", "15"),
                ("viewbox", &viewbox),
                ("bounded", "1"),
                ("addressdetails", "1"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut places: Vec<Place> = results
            .into_iter()
            .filter_map(|r| {
                let r_lat: f64 = r.lat.parse().ok()?;
                let r_lon: f64 = r.lon.parse().ok()?;
                let name = r
                    .display_name
                    .split(',')
                    .next()
                    .unwrap_or(&r.display_name)
                    .to_string();
                Some(Place {
                    id: r
                        .place_id
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| format!("{r_lat}_{r_lon}")),
                    name,
                    address: r.display_name,
                    location: Location { lat: r_lat, lon: r_lon },
                    rating: None,
                    user_ratings_total: None,
                    distance_km: distance_km_rounded(lat, lon, r_lat, r_lon),
                    link: format!(
                        "https://www.openstreetmap.org/?mlat={r_lat}&mlon={r_lon}#map=18/{r_lat}/{r_lon}"
                    ),
                })
            })
            .collect();

        places.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(places)
    }
}

/// Minimal percent-encoding for the Google Maps deep link.
fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push_str("%20"),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_facility_kind_parsing() {
        assert_eq!(FacilityKind::from_query(None), FacilityKind::Clinic);
        assert_eq!(FacilityKind::from_query(Some("Hospital")), FacilityKind::Hospital);
        assert_eq!(FacilityKind::from_query(Some("pharmacy")), FacilityKind::Pharmacy);
        assert_eq!(FacilityKind::from_query(Some("spa")), FacilityKind::Clinic);
    }

    #[test]
    fn test_urlencode() {
        assert_eq!(urlencode("City Clinic"), "City%20Clinic");
        assert_eq!(urlencode("a&b"), "a%26b");
    }

    #[tokio::test]
    async fn test_osm_lookup_maps_and_sorts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "clinic"))
            .and(query_param("bounded", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "place_id": 42,
                    "lat": "48.8600",
                    "lon": "2.3600",
                    "display_name": "Far Clinic, Rue X, Paris"
                },
                {
                    "place_id": 7,
                    "lat": "48.8570",
                    "lon": "2.3530",
                    "display_name": "Near Clinic, Rue Y, Paris"
                }
            ])))
            .mount(&server)
            .await;

        let client = PlacesClient::with_endpoints(
            Client::new(),
            None,
            format!("{}/google", server.uri()),
            format!("{}/search", server.uri()),
        );

        let (source, places) = client
            .nearby(48.8566, 2.3522, FacilityKind::Clinic)
            .await
            .unwrap();

        assert_eq!(source, PlaceSource::Osm);
        assert_eq!(places.len(), 2);
        // Sorted by distance: the nearer clinic first.
        assert_eq!(places[0].name, "Near Clinic");
        assert_eq!(places[0].id, "7");
        assert!(places[0].distance_km <= places[1].distance_km);
        assert!(places[0].link.contains("openstreetmap.org"));
    }

    #[tokio::test]
    async fn test_google_lookup_when_key_configured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/google"))
            .and(query_param("type", "pharmacy"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "place_id": "abc123",
                    "name": "Corner Pharmacy",
                    "vicinity": "12 High St",
                    "geometry": {"location": {"lat": 48.858, "lng": 2.353}},
                    "rating": 4.5,
                    "user_ratings_total": 120
                }]
            })))
            .mount(&server)
            .await;

        let client = PlacesClient::with_endpoints(
            Client::new(),
            Some("test-key".to_string()),
            format!("{}/google", server.uri()),
            format!("{}/search", server.uri()),
        );

        let (source, places) = client
            .nearby(48.8566, 2.3522, FacilityKind::Pharmacy)
            .await
            .unwrap();

        assert_eq!(source, PlaceSource::Google);
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].id, "abc123");
        assert_eq!(places[0].address, "12 High St");
        assert_eq!(places[0].rating, Some(4.5));
        assert!(places[0].link.contains("query_place_id=abc123"));
    }

    #[tokio::test]
    async fn test_google_empty_falls_back_to_osm() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/google"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "place_id": 1,
                "lat": "48.86",
                "lon": "2.36",
                "display_name": "Backup Clinic, Paris"
            }])))
            .mount(&server)
            .await;

        let client = PlacesClient::with_endpoints(
            Client::new(),
            Some("test-key".to_string()),
            format!("{}/google", server.uri()),
            format!("{}/search", server.uri()),
        );

        let (source, places) = client
            .nearby(48.8566, 2.3522, FacilityKind::Clinic)
            .await
            .unwrap();

        assert_eq!(source, PlaceSource::Osm);
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Backup Clinic");
    }
}
