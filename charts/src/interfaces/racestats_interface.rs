use crate::core::config::{Color, DataLabels, DataPoint, LabelStyle, Marker, Point};
use racestats::interfaces::chart_interface::{
    EntrantPoint, ModelUsagePoint, PodiumPoint, RaceTimePoint, SweepMarker,
};
use serde::Serialize;
use serde_json::Value;

/// Label style for podium cells with a yellow background.
const DARK_LABEL_STYLE: LabelStyle = LabelStyle {
    color: "#000000",
    font_weight: "700",
    text_outline: "1px rgba(255,255,255,0.6)",
};

/// ToDataPoint converts the chart-ready data of racestats into Highcharts data points.
pub trait ToDataPoint {
    fn to_data_point(&self) -> DataPoint;
}

impl ToDataPoint for EntrantPoint {
    fn to_data_point(&self) -> DataPoint {
        DataPoint::Point(Box::new(Point {
            x: self.x,
            y: Some(self.y as f64),
            custom: to_custom(&self.custom),
            ..Default::default()
        }))
    }
}

impl ToDataPoint for RaceTimePoint {
    fn to_data_point(&self) -> DataPoint {
        if self.y.is_none() {
            return DataPoint::Gap;
        }

        DataPoint::Point(Box::new(Point {
            x: self.x,
            y: self.y,
            custom: to_custom(&self.custom),
            ..Default::default()
        }))
    }
}

impl ToDataPoint for PodiumPoint {
    fn to_data_point(&self) -> DataPoint {
        let light_background = self.custom.make.map_or(false, |m| m.has_light_color());

        DataPoint::Point(Box::new(Point {
            x: self.x,
            y: Some(self.y as f64),
            value: Some(self.value),
            color: Some(Color::solid(self.color)),
            data_labels: if light_background {
                Some(DataLabels {
                    style: Some(DARK_LABEL_STYLE),
                    ..Default::default()
                })
            } else {
                None
            },
            custom: to_custom(&self.custom),
            ..Default::default()
        }))
    }
}

impl ToDataPoint for SweepMarker {
    fn to_data_point(&self) -> DataPoint {
        DataPoint::Point(Box::new(Point {
            x: self.x,
            y: Some(self.y as f64),
            color: Some(Color::solid(self.color)),
            marker: Some(Marker {
                symbol: Some("star"),
                radius: Some(7),
                ..Default::default()
            }),
            custom: to_custom(&self.custom),
            ..Default::default()
        }))
    }
}

impl ToDataPoint for ModelUsagePoint {
    fn to_data_point(&self) -> DataPoint {
        DataPoint::Point(Box::new(Point {
            x: self.x,
            y: Some(self.y as f64),
            value: Some(self.value),
            color: Some(Color::solid(self.color)),
            custom: to_custom(&self.custom),
            ..Default::default()
        }))
    }
}

pub fn to_data_points<T: ToDataPoint>(points: &[T]) -> Vec<DataPoint> {
    points.iter().map(|p| p.to_data_point()).collect()
}

/// to_custom converts point metadata into the JSON object attached to a point (the metadata
/// structs consist of strings, numbers and options only, their conversion cannot fail).
fn to_custom<T: Serialize>(custom: &T) -> Value {
    serde_json::to_value(custom).unwrap_or(Value::Null)
}
