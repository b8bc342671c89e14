use serde::{Deserialize, Serialize};

/// Labels the backend treats as fixed route anchors rather than
/// schedulable stops.
pub const START_LABEL: &str = "start";
pub const END_LABEL: &str = "end";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

impl Coord {
    pub fn from_pair([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }

    pub fn pair(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

/// Role of a stop within a trip. Assigned once when the stop is read from
/// input; submission logic branches on this, never on label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopRole {
    Start,
    End,
    Via,
}

impl StopRole {
    pub fn from_label(label: &str) -> Self {
        match label {
            START_LABEL => StopRole::Start,
            END_LABEL => StopRole::End,
            _ => StopRole::Via,
        }
    }

    /// Start and end anchor the route without being schedulable waypoints.
    pub fn is_anchor(self) -> bool {
        matches!(self, StopRole::Start | StopRole::End)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopFeature {
    pub label: String,
    pub coord: Coord,
    pub role: StopRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Submitted,
    Processing,
    Completed,
    Failed,
}

/// One submitted optimization request. The id is assigned by the backend;
/// completed and failed jobs are never polled again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationJob {
    pub id: String,
    pub status: JobStatus,
    pub stops: Vec<StopFeature>,
}

/// One element of a completed job's result. The coordinate is the
/// backend-snapped location and may differ from the submitted one.
/// Sequence order is the visit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedStop {
    pub label: String,
    pub coord: Coord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelProfile {
    Driving,
    Cycling,
    Walking,
}

impl TravelProfile {
    pub fn as_str(self) -> &'static str {
        match self {
            TravelProfile::Driving => "driving",
            TravelProfile::Cycling => "cycling",
            TravelProfile::Walking => "walking",
        }
    }
}

/// Finalized, ordered input to route calculation. Coordinates and
/// waypoint names are always equal in length and parallel in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub coordinates: Vec<Coord>,
    pub waypoint_names: Vec<String>,
    pub profile: TravelProfile,
    pub alternatives: bool,
    pub steps: bool,
}

impl RouteRequest {
    pub fn ordered(
        coordinates: Vec<Coord>,
        waypoint_names: Vec<String>,
        profile: TravelProfile,
    ) -> Self {
        Self {
            coordinates,
            waypoint_names,
            profile,
            alternatives: true,
            steps: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Properties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Properties {
    pub comment: String,
}

impl FeatureCollection {
    /// Reads stops out of a GeoJSON-shaped collection, assigning each
    /// stop's role from the sentinel labels here and nowhere else.
    pub fn into_stops(self) -> Vec<StopFeature> {
        self.features
            .into_iter()
            .map(|feature| {
                let label = feature.properties.comment;
                StopFeature {
                    role: StopRole::from_label(&label),
                    coord: Coord::from_pair(feature.geometry.coordinates),
                    label,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_labels_become_anchor_roles() {
        assert_eq!(StopRole::from_label("start"), StopRole::Start);
        assert_eq!(StopRole::from_label("end"), StopRole::End);
        assert_eq!(StopRole::from_label("Shinjuku Gyoen"), StopRole::Via);
        assert!(StopRole::Start.is_anchor());
        assert!(!StopRole::Via.is_anchor());
    }

    #[test]
    fn feature_collection_keeps_order_and_assigns_roles() {
        let raw = r#"{
            "features": [
                {"geometry": {"coordinates": [139.766, 35.682]}, "properties": {"comment": "start"}},
                {"geometry": {"coordinates": [139.767, 35.683]}, "properties": {"comment": "A"}},
                {"geometry": {"coordinates": [139.768, 35.684]}, "properties": {"comment": "end"}}
            ]
        }"#;

        let collection: FeatureCollection = serde_json::from_str(raw).unwrap();
        let stops = collection.into_stops();

        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].role, StopRole::Start);
        assert_eq!(stops[1].role, StopRole::Via);
        assert_eq!(stops[1].label, "A");
        assert_eq!(stops[2].role, StopRole::End);
        assert_eq!(stops[1].coord.pair(), [139.767, 35.683]);
    }

    #[test]
    fn feature_without_comment_is_rejected() {
        let raw = r#"{"features": [{"geometry": {"coordinates": [0.0, 0.0]}, "properties": {}}]}"#;
        assert!(serde_json::from_str::<FeatureCollection>(raw).is_err());
    }

    #[test]
    fn travel_profile_names() {
        assert_eq!(TravelProfile::Driving.as_str(), "driving");
        assert_eq!(TravelProfile::Cycling.as_str(), "cycling");
        assert_eq!(TravelProfile::Walking.as_str(), "walking");
    }
}
