pub mod core {
    pub mod entrants;
    pub mod finishes;
    pub mod lookup;
    pub mod makes;
    pub mod model_usage;
    pub mod podium;
    pub mod race_time;
    pub mod record;
    pub mod reference;
    pub mod years;
}
pub mod interfaces {
    pub mod chart_interface;
}
pub mod post {
    pub mod dashboard;
}
pub mod pre {
    pub mod check_stats_opts;
    pub mod read_race_rows;
    pub mod stats_opts;
}

#[cfg(test)]
mod test_data {
    use crate::core::record::RaceYearRecord;
    use serde_json::{json, Value};

    pub fn record(value: Value) -> RaceYearRecord {
        serde_json::from_value(value).unwrap()
    }

    pub fn sample_records() -> Vec<RaceYearRecord> {
        vec![
            record(json!({
                "Year": 1995, "Finished": 20, "DNF": 14, "DNS": 1, "Time": "6:18:02.17",
                "1": "H", "2": "H", "3": "H", "VR": 20, "EF": 8
            })),
            record(json!({
                "Year": "1996", "Finished": "18", "DNF": 17, "DSQ": "", "Time": "6:24:37.33",
                "1": "H", "2": "F", "3": "H", "VR": 24, "EF": 12
            })),
            record(json!({
                "Year": 2024, "Finished": 25, "WD": 1, "Time": "3:20:45.67",
                "1": "C", "2": " F ", "3": "X", "ZL1": 16, "S650": 10, "VT": 0
            })),
        ]
    }
}


#[cfg(test)]
mod reference_tests {
    use crate::core::entrants::{
        build_split_series, gm_zone_boundary, total_entrants, total_entrants_series,
    };
    use crate::core::reference::{EntrantClass, ReferenceData, ENTRANT_CLASSES};

    #[test]
    fn test_reference_lengths() {
        let data = ReferenceData::bathurst();
        for &class in ENTRANT_CLASSES.iter() {
            assert_eq!(data.values(class).len(), data.axis.len());
        }
    }
    #[test]
    fn test_reference_sparse_values() {
        let data = ReferenceData::bathurst();
        let idx_1997 = data.axis.index_of(1997).unwrap();
        assert_eq!(data.ford_level_2[idx_1997], -3);
        assert_eq!(data.holden_level_2[idx_1997], 17);
        assert_eq!(data.holden_special_level_1[idx_1997], 6);
        assert!(data.ford_special_level_1.iter().all(|&v| v == 0));
        assert_eq!(data.nissan[data.axis.index_of(2016).unwrap()], -5);
        assert_eq!(data.nissan[data.axis.index_of(2020).unwrap()], 0);
        assert_eq!(data.volvo.iter().sum::<i64>(), -6);
    }
    #[test]
    fn test_reference_signs() {
        let data = ReferenceData::bathurst();
        for &class in ENTRANT_CLASSES.iter() {
            let vals = data.values(class);
            if class.is_ford_side() {
                assert!(vals.iter().all(|&v| v <= 0), "{:?}", class);
            } else {
                assert!(vals.iter().all(|&v| v >= 0), "{:?}", class);
            }
        }
    }

    #[test]
    fn test_total_entrants_1() {
        let data = ReferenceData::bathurst();
        // 1995: 8 Ford + 24 Holden
        assert_eq!(total_entrants(&data, 0), 32);
        // 1997: 6 + 9 + 3 (Ford L2) + 6 + 17 (Holden SL1, L2)
        assert_eq!(total_entrants(&data, 2), 41);
        // 1999: 12 + 16 + 8 + 21 (privateers)
        assert_eq!(total_entrants(&data, 4), 57);
        // 2014: 7 + 11 + 4 + 2 + 2 (Nissan, Mercedes, Volvo)
        assert_eq!(total_entrants(&data, 19), 26);
    }
    #[test]
    fn test_total_entrants_2() {
        let data = ReferenceData::bathurst();
        let totals = total_entrants_series(&data);
        assert_eq!(totals.len(), data.axis.len());
        for (i, &total) in totals.iter().enumerate() {
            assert!(total >= data.ford[i].abs() + data.gm[i]);
        }
    }

    #[test]
    fn test_split_series_1() {
        let data = ReferenceData::bathurst();
        let split_series = build_split_series(&data);
        assert_eq!(split_series.len(), 11);
        assert_eq!(split_series[0].class, EntrantClass::Ford);
        assert_eq!(split_series[7].class, EntrantClass::HoldenChevrolet);
        assert_eq!(split_series[0].points[0].y, -8);
        assert_eq!(split_series[0].points[0].custom.entrants, 8);
        assert_eq!(split_series[0].points[30].x, 30);
    }
    #[test]
    fn test_split_series_2() {
        let data = ReferenceData::bathurst();
        let split_series = build_split_series(&data);
        let gm = &split_series[7];
        assert_eq!(gm.points[27].custom.label, "Holden");
        assert_eq!(gm.points[28].custom.label, "Chevrolet");
        assert_eq!(gm_zone_boundary(&data), Some(28));
    }
}


#[cfg(test)]
mod lookup_tests {
    use crate::core::lookup::YearLookup;
    use crate::core::record::Outcome;
    use crate::test_data::{record, sample_records};
    use serde_json::json;

    #[test]
    fn test_lookup_1() {
        let records = sample_records();
        let lookup = YearLookup::new(&records);
        assert_eq!(lookup.len(), 3);
        assert!(lookup.get("1995").is_some());
        assert!(lookup.get("1996").is_some());
        assert!(lookup.get("2000").is_none());
    }
    #[test]
    fn test_lookup_last_wins() {
        let records = vec![
            record(json!({"Year": 2000, "Finished": 1})),
            record(json!({"Year": "2000", "Finished": 2})),
        ];
        let lookup = YearLookup::new(&records);
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.get("2000").unwrap().outcome_count(Outcome::Finished), 2);
    }
    #[test]
    fn test_lookup_invalid_year() {
        let records = vec![record(json!({"Finished": 1}))];
        let lookup = YearLookup::new(&records);
        assert!(lookup.is_empty());
    }
}


#[cfg(test)]
mod dashboard_tests {
    use crate::core::reference::ReferenceData;
    use crate::post::dashboard::build_dashboard;
    use crate::test_data::sample_records;

    #[test]
    fn test_dashboard_missing_records() {
        let reference = ReferenceData::bathurst();
        assert!(build_dashboard(&reference, None).is_none());
    }
    #[test]
    fn test_dashboard_1() {
        let reference = ReferenceData::bathurst();
        let records = sample_records();
        let dashboard = build_dashboard(&reference, Some(records.as_slice())).unwrap();

        assert_eq!(dashboard.totals.len(), dashboard.axis.len());
        assert_eq!(dashboard.split_series.len(), 11);
        assert_eq!(dashboard.finish_series.len(), 9);
        assert_eq!(dashboard.race_times.len(), dashboard.axis.len());
        assert_eq!(dashboard.gm_zone_boundary, Some(28));
        assert_eq!(dashboard.sweeps.len(), 1);
    }
    #[test]
    fn test_dashboard_empty_records() {
        let reference = ReferenceData::bathurst();
        let dashboard = build_dashboard(&reference, Some(&[][..])).unwrap();

        assert!(dashboard.podium_points.is_empty());
        assert!(dashboard.model_rows.is_empty());
        assert!(dashboard.race_times.iter().all(|p| p.y.is_none()));
        assert_eq!(dashboard.totals[0], 32);
    }
    #[test]
    fn test_summary_table() {
        let reference = ReferenceData::bathurst();
        let records = sample_records();
        let dashboard = build_dashboard(&reference, Some(records.as_slice())).unwrap();
        let table = dashboard.summary_table();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), dashboard.axis.len() + 1);
        assert_eq!(lines[1], "1995,       32,  6:18:02.17, H-H-H");
        assert!(lines[6].ends_with("—, "));
    }
}


#[cfg(test)]
mod check_stats_opts_tests {
    use crate::pre::check_stats_opts::check_stats_opts;
    use crate::pre::stats_opts::{OutputFormat, StatsOpts};
    use clap::Parser;

    #[test]
    fn test_check_stats_opts_1() {
        let stats_opts = StatsOpts::try_parse_from(["bathurst-stats", "-i", "rows.json"]).unwrap();
        assert_eq!(stats_opts.format, OutputFormat::Json);
        assert!(check_stats_opts(&stats_opts).is_ok());
    }
    #[test]
    fn test_check_stats_opts_2() {
        let stats_opts = StatsOpts::try_parse_from([
            "bathurst-stats", "-i", "rows.csv", "-f", "html", "-o", "dashboard.html", "-s",
        ])
        .unwrap();
        assert!(check_stats_opts(&stats_opts).is_ok());
    }
    #[test]
    fn test_check_stats_opts_input_extension() {
        let stats_opts = StatsOpts::try_parse_from(["bathurst-stats", "-i", "rows.js"]).unwrap();
        assert!(check_stats_opts(&stats_opts).is_err());
    }
    #[test]
    fn test_check_stats_opts_html_output() {
        let stats_opts =
            StatsOpts::try_parse_from(["bathurst-stats", "-i", "rows.json", "-f", "html", "-o", "out.json"])
                .unwrap();
        assert!(check_stats_opts(&stats_opts).is_err());
    }
    #[test]
    fn test_check_stats_opts_summary_to_stdout() {
        let stats_opts =
            StatsOpts::try_parse_from(["bathurst-stats", "-i", "rows.json", "-s"]).unwrap();
        assert!(check_stats_opts(&stats_opts).is_err());
    }
}
