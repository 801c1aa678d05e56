use super::*;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::response::Response;

fn fixed_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn record(team: &str, responses: Vec<Response>) -> SurveyRecord {
    SurveyRecord {
        survey_id: "s".to_string(),
        team_name: team.to_string(),
        last_response_number: responses.len() as u32,
        responses,
    }
}

fn response(team: &str, number: u32, ratings: &[(&str, f64)]) -> Response {
    Response {
        id: Uuid::new_v4(),
        survey_id: "s".to_string(),
        team_name: team.to_string(),
        response_number: number,
        ratings: ratings
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<BTreeMap<_, _>>(),
        created_at: fixed_time(),
    }
}

fn full_ratings() -> Vec<(&'static str, f64)> {
    let catalog = Catalog::core4();
    catalog
        .required_keys()
        .into_iter()
        .map(|key| (key, if key == "prThroughput" { 3.5 } else { 4.0 }))
        .collect()
}

#[test]
fn test_header_lists_answer_keys_in_catalog_order() {
    let catalog = Catalog::core4();
    let csv = render_csv(&catalog, &record("team", vec![]));
    let header = csv.lines().next().unwrap();
    assert_eq!(
        header,
        "response_number,team,created_at,prThroughput,changeFailureRate,timeAllocation,\
         documentation,focus,buildTest,confidence,incidents,localDev,planning,\
         dependencies,releases,maintainability"
    );
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn test_rows_in_submission_order_with_sentinels_as_na() {
    let catalog = Catalog::core4();
    let mut ratings = full_ratings();
    ratings[0] = ("prThroughput", 9.0);
    let first = response("team", 1, &ratings);

    let mut ratings = full_ratings();
    ratings[1] = ("changeFailureRate", -1.0);
    ratings[3] = ("documentation", 9.0);
    let second = response("team", 2, &ratings);

    let csv = render_csv(&catalog, &record("team", vec![first, second]));
    let rows: Vec<&str> = csv.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);

    // 9.0 on the throughput question is a real answer, not a sentinel.
    assert_eq!(
        rows[0],
        "1,team,2026-01-02T03:04:05+00:00,9,4,4,4,4,4,4,4,4,4,4,4,4"
    );
    assert_eq!(
        rows[1],
        "2,team,2026-01-02T03:04:05+00:00,3.5,N/A,4,N/A,4,4,4,4,4,4,4,4,4"
    );
}

#[test]
fn test_team_names_with_commas_are_quoted() {
    let catalog = Catalog::core4();
    let resp = response("platform, infra", 1, &full_ratings());
    let csv = render_csv(&catalog, &record("platform, infra", vec![resp]));
    assert!(csv.lines().nth(1).unwrap().starts_with("1,\"platform, infra\","));
}
