use crate::charts::{ChartConfig, GeoCoordinate, ScatterMap};
use crate::data::map_sample::GeoPoint;
use crate::theme::MAP_POINT;

pub struct PickupMapReport;

impl PickupMapReport {
    pub fn title() -> &'static str {
        "Pickup Location Map"
    }

    pub fn subtitle(points: usize) -> String {
        format!("Random sample of {points} pickups")
    }

    pub fn chart(points: &[GeoPoint]) -> ScatterMap {
        let coordinates = points
            .iter()
            .map(|point| GeoCoordinate {
                latitude: point.latitude as f32,
                longitude: point.longitude as f32,
            })
            .collect();

        ScatterMap::new(coordinates, MAP_POINT).with_config(ChartConfig {
            padding: 12.0,
            grid_lines: 0,
        })
    }
}
