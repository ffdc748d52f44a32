pub mod core {
    pub mod config;
    pub mod entrants_charts;
    pub mod page;
    pub mod result_charts;
}
pub mod interfaces {
    pub mod racestats_interface;
}

#[cfg(test)]
mod test_data {
    use racestats::core::record::RaceYearRecord;
    use racestats::core::reference::ReferenceData;
    use racestats::post::dashboard::{build_dashboard, Dashboard};
    use serde_json::json;

    pub fn sample_dashboard() -> Dashboard {
        let records: Vec<RaceYearRecord> = serde_json::from_value(json!([
            {"Year": 2016, "Finished": 18, "DNF": 8, "Time": "6:12:10.54",
             "1": "H", "2": "F", "3": "N", "VF": 14, "FG X": 6, "L33": 5},
            {"Year": 2017, "Finished": 19, "DNF": 7, "Time": "6:09:47.27",
             "1": "H", "2": "H", "3": "H", "VF": 16, "FG X": 6, "L33": 4},
            {"Year": 2023, "Finished": 22, "DNF": 3, "Time": "6:04:13.49",
             "1": "C", "2": "F", "3": "Q", "ZL1": 16, "S650": 10}
        ]))
        .unwrap();

        build_dashboard(&ReferenceData::bathurst(), Some(records.as_slice())).unwrap()
    }
}

#[cfg(test)]
mod entrants_charts_tests {
    use crate::core::config::{Color, DataPoint};
    use crate::core::entrants_charts::{entrants_ticks, split_chart, totals_chart};
    use crate::test_data::sample_dashboard;
    use serde_json::json;

    #[test]
    fn test_totals_chart_1() {
        let dashboard = sample_dashboard();
        let chart = totals_chart(&dashboard);

        assert_eq!(chart.container, "totals-container");
        assert_eq!(chart.options.series.len(), 1);
        assert_eq!(chart.options.series[0].data.len(), 31);
        assert_eq!(chart.options.series[0].data[0], DataPoint::Value(32));
    }
    #[test]
    fn test_split_chart_1() {
        let dashboard = sample_dashboard();
        let chart = split_chart(&dashboard);
        let names: Vec<&str> = chart.options.series.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names.len(), 11);
        assert_eq!(names[0], "Ford");
        assert_eq!(names[7], "Holden → Chevrolet");
        assert_eq!(chart.options.x_axis.len(), 2);
        assert_eq!(chart.options.x_axis[1].linked_to, Some(0));
    }
    #[test]
    fn test_split_chart_gm_zones() {
        let dashboard = sample_dashboard();
        let chart = split_chart(&dashboard);
        let gm = &chart.options.series[7];
        let zones = gm.zones.as_ref().unwrap();

        assert_eq!(zones[0].value, Some(28));
        assert_eq!(zones[0].color, "#C8102E");
        assert_eq!(zones[1].value, None);
        assert_eq!(zones[1].color, "#FFB612");
        assert!(matches!(gm.color, Some(Color::Gradient(_))));
    }
    #[test]
    fn test_split_chart_json() {
        let dashboard = sample_dashboard();
        let value = serde_json::to_value(&split_chart(&dashboard).options).unwrap();

        assert_eq!(value["chart"]["type"], json!("bar"));
        assert_eq!(value["series"][0]["data"][0]["x"], json!(0));
        assert_eq!(value["series"][0]["data"][0]["y"], json!(-8.0));
        assert_eq!(value["series"][0]["data"][0]["custom"]["entrants"], json!(8));
        assert_eq!(value["series"][7]["data"][28]["custom"]["label"], json!("Chevrolet"));
        assert_eq!(value["plotOptions"]["series"]["stacking"], json!("normal"));
    }
    #[test]
    fn test_entrants_ticks() {
        let dashboard = sample_dashboard();
        let (positions, labels) = entrants_ticks(&dashboard);

        // left side at most 23 entrants (2000), right side at most 37 (1999)
        assert_eq!(positions.first(), Some(&-25.0));
        assert_eq!(positions.last(), Some(&40.0));
        assert_eq!(labels.first().map(|l| l.as_str()), Some("25"));
        assert_eq!(positions.len(), labels.len());
    }
}

#[cfg(test)]
mod result_charts_tests {
    use crate::core::config::DataPoint;
    use crate::core::result_charts::{
        finishes_chart, model_usage_chart, podium_chart, race_time_chart,
    };
    use crate::test_data::sample_dashboard;
    use serde_json::json;

    #[test]
    fn test_finishes_chart_1() {
        let dashboard = sample_dashboard();
        let chart = finishes_chart(&dashboard);

        assert_eq!(chart.options.series.len(), 9);
        assert_eq!(chart.options.series[0].name, "Finished");
        assert_eq!(chart.options.series[8].name, "DNPQ");
        assert_eq!(chart.options.series[0].data[21], DataPoint::Value(18));
        assert_eq!(chart.options.series[0].data[0], DataPoint::Value(0));
    }
    #[test]
    fn test_race_time_chart_1() {
        let dashboard = sample_dashboard();
        let value = serde_json::to_value(&race_time_chart(&dashboard).options).unwrap();
        let data = value["series"][0]["data"].as_array().unwrap();

        assert_eq!(data.len(), 31);
        assert_eq!(data[0], json!(null));
        assert_eq!(data[21]["custom"]["time"], json!("6:12:10.54"));
        assert_eq!(value["yAxis"]["tickPositions"][0], json!(21600.0));
        assert_eq!(value["yAxis"]["labels"]["tickLabels"][0], json!("6:00:00.00"));
    }
    #[test]
    fn test_podium_chart_1() {
        let dashboard = sample_dashboard();
        let value = serde_json::to_value(&podium_chart(&dashboard).options).unwrap();
        let podium = value["series"][0]["data"].as_array().unwrap();
        let sweeps = value["series"][1]["data"].as_array().unwrap();

        assert_eq!(podium.len(), 9);
        assert_eq!(value["yAxis"]["categories"], json!(["1st", "2nd", "3rd"]));
        assert_eq!(sweeps.len(), 1);
        assert_eq!(sweeps[0]["custom"]["make"], json!("Holden"));
        assert_eq!(sweeps[0]["marker"]["symbol"], json!("star"));
        assert_eq!(value["series"][1]["type"], json!("scatter"));
    }
    #[test]
    fn test_podium_chart_label_styles() {
        let dashboard = sample_dashboard();
        let value = serde_json::to_value(&podium_chart(&dashboard).options).unwrap();
        let podium = value["series"][0]["data"].as_array().unwrap();

        // 2016: H, F, N -> only Nissan gets the dark label style
        assert!(podium[0].get("dataLabels").is_none());
        assert_eq!(podium[2]["dataLabels"]["style"]["color"], json!("#000000"));
        // 2023: unmapped code Q
        assert_eq!(podium[8]["color"], json!("#ccc"));
        assert_eq!(podium[8]["custom"]["who"], json!("Q"));
        assert_eq!(podium[8]["custom"]["make"], json!(null));
    }
    #[test]
    fn test_model_usage_chart_1() {
        let dashboard = sample_dashboard();
        let value = serde_json::to_value(&model_usage_chart(&dashboard).options).unwrap();

        assert_eq!(
            value["yAxis"]["categories"],
            json!(["VF (Holden)", "ZL1 (Chevrolet)", "FG X (Ford)", "S650 (Ford)", "L33 (Nissan)"])
        );
        assert_eq!(value["series"][0]["data"].as_array().unwrap().len(), 8);
        assert_eq!(value["series"][0]["data"][0]["value"], json!(14.0));
    }
}

#[cfg(test)]
mod page_tests {
    use crate::core::page::{build_charts, build_document, render_page};
    use crate::test_data::sample_dashboard;

    #[test]
    fn test_build_charts_order() {
        let dashboard = sample_dashboard();
        let containers: Vec<&str> = build_charts(&dashboard).iter().map(|c| c.container).collect();

        assert_eq!(
            containers,
            vec![
                "totals-container",
                "container",
                "finishes-by-year",
                "race-time-total",
                "podium-by-make",
                "makes-over-years"
            ]
        );
    }
    #[test]
    fn test_shared_categories() {
        let dashboard = sample_dashboard();
        let document = build_document(&dashboard);

        for chart in document.charts.iter() {
            assert_eq!(
                chart.options.x_axis[0].categories.as_ref(),
                Some(&document.categories)
            );
        }
    }
    #[test]
    fn test_render_page() {
        let dashboard = sample_dashboard();
        let page = render_page(&build_document(&dashboard)).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<div id=\"podium-by-make\""));
        assert!(page.contains("const DASHBOARD = {\"categories\":[\"1995\""));
        assert!(!page.contains("</b>"));
    }
}
