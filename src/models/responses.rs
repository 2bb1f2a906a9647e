//! Response DTOs
//!
//! Bodies the service builds itself. Provider payloads pass through as
//! opaque JSON and have no DTO here.

use serde::Serialize;

/// Sub-paths served under the provider prefix, in listing order.
pub const PROVIDER_ROUTES: [&str; 12] = [
    "/:query",
    "/info/:id",
    "/watch/:episodeId",
    "/servers/:episodeId",
    "/genre/:genre",
    "/genre/list",
    "/top-airing",
    "/movies",
    "/popular",
    "/recent-episodes",
    "/anime-list",
    "/download",
];

/// Response body for the provider discovery endpoint (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryResponse {
    pub intro: &'static str,
    pub routes: Vec<&'static str>,
    pub documentation: &'static str,
}

impl DiscoveryResponse {
    pub fn anitaku() -> Self {
        Self {
            intro: "Welcome to the Anitaku provider: check out the provider's website @ https://anitaku.so/",
            routes: PROVIDER_ROUTES.to_vec(),
            documentation: "https://docs.consumet.org/#tag/anitaku",
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Cache backend in use, `none` when uncached
    pub cache: &'static str,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(cache: &'static str) -> Self {
        Self {
            status: "healthy".to_string(),
            cache,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// `{ "message": ... }` body used for provider and internal failures
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_lists_every_route() {
        let resp = DiscoveryResponse::anitaku();
        assert_eq!(resp.routes.len(), 12);
        assert_eq!(resp.routes[0], "/:query");
        assert_eq!(resp.routes[11], "/download");
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy("memory");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("\"cache\":\"memory\""));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_message_response_serialize() {
        let resp = MessageResponse::new("Anime not found");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"message":"Anime not found"}"#);
    }
}
