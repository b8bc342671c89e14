use serde::{Deserialize, Serialize};

use crate::model::StopFeature;

#[derive(Debug, Serialize, Deserialize)]
pub struct OptimizationRequest {
    pub locations: Vec<Location>,
    pub services: Vec<Service>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub coordinates: [f64; 2],
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub location: String,
}

impl OptimizationRequest {
    /// Every stop becomes a location; anchors are kept out of the
    /// services the backend is free to reorder.
    pub fn from_stops(stops: &[StopFeature]) -> Self {
        let mut locations = Vec::with_capacity(stops.len());
        let mut services = Vec::new();

        for stop in stops {
            locations.push(Location {
                name: stop.label.clone(),
                coordinates: stop.coord.pair(),
            });

            if stop.role.is_anchor() {
                continue;
            }

            services.push(Service {
                name: stop.label.clone(),
                location: stop.label.clone(),
            });
        }

        Self {
            locations,
            services,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmissionResponse {
    pub status: String,

    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletedResponse {
    pub routes: Vec<CandidateRoute>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateRoute {
    pub stops: Vec<WireStop>,
}

#[derive(Debug, Deserialize)]
pub struct WireStop {
    pub location: String,
    pub location_metadata: StopMetadata,
}

#[derive(Debug, Deserialize)]
pub struct StopMetadata {
    pub snapped_coordinate: [f64; 2],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coord, StopRole};

    fn stop(label: &str, lon: f64, lat: f64) -> StopFeature {
        StopFeature {
            role: StopRole::from_label(label),
            label: label.to_string(),
            coord: Coord { lon, lat },
        }
    }

    #[test]
    fn anchors_are_locations_but_not_services() {
        let stops = vec![stop("start", 139.766, 35.682), stop("end", 139.768, 35.684)];
        let request = OptimizationRequest::from_stops(&stops);

        assert_eq!(request.locations.len(), 2);
        assert!(request.services.is_empty());
    }

    #[test]
    fn ordinary_stops_are_both_locations_and_services() {
        let stops = vec![
            stop("start", 139.766, 35.682),
            stop("A", 139.767, 35.683),
            stop("end", 139.768, 35.684),
        ];
        let request = OptimizationRequest::from_stops(&stops);

        assert_eq!(request.locations.len(), 3);
        assert_eq!(request.services.len(), 1);
        assert_eq!(request.services[0].name, "A");
        assert_eq!(request.services[0].location, "A");
        assert_eq!(request.locations[1].coordinates, [139.767, 35.683]);
    }
}
