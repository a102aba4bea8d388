use serde::Serialize;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A named point of interest shown as a map marker with a description popup.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct Landmark {
    pub title: &'static str,
    pub description: &'static str,
    pub position: LatLng,
}

/// Where the landmark map is centered on load.
pub const MAP_CENTER: LatLng = LatLng {
    lat: 37.8055,
    lng: -122.4400,
};

/// Zoom level the landmark map opens at.
pub const MAP_ZOOM: u32 = 13;

pub const LANDMARKS: [Landmark; 4] = [
    Landmark {
        title: "Golden Gate Bridge",
        description: "The orange suspension bridge I have biked across more times than I can count.",
        position: LatLng {
            lat: 37.8199,
            lng: -122.4783,
        },
    },
    Landmark {
        title: "Alcatraz Island",
        description: "Former federal prison in the middle of the bay. The night tour is worth it.",
        position: LatLng {
            lat: 37.8270,
            lng: -122.4230,
        },
    },
    Landmark {
        title: "Palace of Fine Arts",
        description: "Built for the 1915 exposition. My favorite spot for a lunch break.",
        position: LatLng {
            lat: 37.8029,
            lng: -122.4484,
        },
    },
    Landmark {
        title: "Coit Tower",
        description: "Climb Telegraph Hill for the murals and the best view of the city.",
        position: LatLng {
            lat: 37.8024,
            lng: -122.4058,
        },
    },
];
