mod common;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use civic_lookup_server::core::error::AppError;
use civic_lookup_server::features::cicero::Location;
use civic_lookup_server::features::representatives::{
    AGGREGATION_SOURCE, CiceroDataSource, RepresentativeAggregator,
};

use common::{districts_payload, official, officials_payload};

#[derive(Default)]
struct MockCiceroDataSource {
    legislative_districts: Option<Value>,
    location_officials: Option<Value>,
    nonlegislative_districts: Option<Value>,
    district_officials: HashMap<String, Value>,
    election_events: Option<Value>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockCiceroDataSource {
    async fn record_call(&self, key: String) {
        self.calls.lock().await.push(key);
    }

    async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

fn respond(payload: Option<&Value>, endpoint: &str) -> Result<Value, AppError> {
    payload
        .cloned()
        .ok_or_else(|| AppError::upstream(None, format!("{endpoint} unavailable")))
}

#[async_trait]
impl CiceroDataSource for MockCiceroDataSource {
    async fn fetch_legislative_districts(&self, _location: &Location) -> Result<Value, AppError> {
        self.record_call("legislative_district".to_string()).await;
        respond(self.legislative_districts.as_ref(), "legislative_district")
    }

    async fn fetch_officials_by_location(&self, _location: &Location) -> Result<Value, AppError> {
        self.record_call("official".to_string()).await;
        respond(self.location_officials.as_ref(), "official")
    }

    async fn fetch_nonlegislative_districts(
        &self,
        _location: &Location,
    ) -> Result<Value, AppError> {
        self.record_call("nonlegislative_district".to_string()).await;
        respond(
            self.nonlegislative_districts.as_ref(),
            "nonlegislative_district",
        )
    }

    async fn fetch_officials_by_district(&self, district_id: &str) -> Result<Value, AppError> {
        self.record_call(format!("official:{district_id}")).await;
        respond(self.district_officials.get(district_id), "official")
    }

    async fn fetch_election_events(&self, _location: &Location) -> Result<Value, AppError> {
        self.record_call("election_event".to_string()).await;
        respond(self.election_events.as_ref(), "election_event")
    }
}

fn aggregator_for(mock: Arc<MockCiceroDataSource>) -> RepresentativeAggregator {
    let data_source: Arc<dyn CiceroDataSource> = mock;
    RepresentativeAggregator::new(data_source)
}

fn philadelphia() -> Location {
    Location {
        lat: 39.9,
        lon: -75.1,
        address: Some("1400 John F Kennedy Blvd, Philadelphia, PA".to_string()),
    }
}

#[tokio::test]
async fn every_upstream_failing_still_returns_an_empty_envelope() {
    let mock = Arc::new(MockCiceroDataSource::default());
    let aggregator = aggregator_for(mock.clone());

    let result = aggregator
        .aggregate(philadelphia())
        .await
        .expect("aggregation never fails on upstream errors");

    assert!(result.officials.is_empty());
    assert!(result.districts.is_empty());
    assert_eq!(result.metadata.total_officials, 0);
    assert_eq!(result.metadata.source, AGGREGATION_SOURCE);
    assert_eq!(
        mock.calls().await,
        vec![
            "legislative_district",
            "official",
            "nonlegislative_district",
            "election_event"
        ]
    );
}

#[tokio::test]
async fn merges_all_sources_and_drops_shared_ids() {
    let mut district_officials = HashMap::new();
    district_officials.insert(
        "201".to_string(),
        officials_payload(vec![official(Some(2), "Cherelle", "Parker", "Mayor")]),
    );
    district_officials.insert(
        "202".to_string(),
        officials_payload(vec![official(Some(3), "Josh", "Shapiro", "Governor")]),
    );
    district_officials.insert(
        "203".to_string(),
        officials_payload(vec![official(Some(1), "Duplicate", "Record", "Senator")]),
    );

    let mock = Arc::new(MockCiceroDataSource {
        legislative_districts: Some(districts_payload(vec![
            json!({"id": 11, "name": "PA-3", "district_type": "NATIONAL_LOWER"}),
            json!({"id": 12, "name": "Senate District 1", "district_type": "STATE_UPPER"}),
        ])),
        location_officials: Some(officials_payload(vec![official(
            Some(1),
            "Dwight",
            "Evans",
            "Representative",
        )])),
        nonlegislative_districts: Some(districts_payload(vec![
            json!({"id": 201, "name": "Philadelphia", "district_type": "LOCAL_EXEC"}),
            json!({"id": 202, "name": "Pennsylvania", "district_type": "STATE_EXEC"}),
            json!({"id": 203, "district_type": "NATIONAL_UPPER"}),
        ])),
        district_officials,
        election_events: Some(json!({
            "response": {"results": {"election_events": [{"id": 9, "label": "General"}]}}
        })),
        ..Default::default()
    });
    let aggregator = aggregator_for(mock.clone());

    let result = aggregator.aggregate(philadelphia()).await.expect("aggregate");

    assert_eq!(result.officials.len(), 3);
    assert_eq!(result.metadata.total_officials, 3);
    assert_eq!(result.metadata.source, "cicero_combined");
    assert_eq!(result.districts.len(), 2);

    let last_names = result
        .officials
        .iter()
        .map(|official| official.last_name().unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(last_names, vec!["Evans", "Parker", "Shapiro"]);

    assert!(
        chrono::DateTime::parse_from_rfc3339(&result.metadata.timestamp).is_ok(),
        "timestamp should be RFC 3339"
    );
}

#[tokio::test]
async fn officials_without_ids_collapse_on_name_and_office() {
    let mut district_officials = HashMap::new();
    district_officials.insert(
        "5".to_string(),
        officials_payload(vec![
            official(None, "JANE", "DOE", "CITY COUNCIL"),
            official(None, "Jane", "Doe", "School Board"),
        ]),
    );

    let mock = Arc::new(MockCiceroDataSource {
        location_officials: Some(officials_payload(vec![official(
            None,
            "Jane",
            "Doe",
            "City Council",
        )])),
        nonlegislative_districts: Some(districts_payload(vec![json!({"id": "5"})])),
        district_officials,
        ..Default::default()
    });
    let aggregator = aggregator_for(mock);

    let result = aggregator.aggregate(philadelphia()).await.expect("aggregate");

    let offices = result
        .officials
        .iter()
        .map(|official| official.office_name().unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(offices, vec!["City Council", "School Board"]);
    assert_eq!(result.metadata.total_officials, 2);
}

#[tokio::test]
async fn districts_without_an_id_issue_no_lookup() {
    let mut district_officials = HashMap::new();
    district_officials.insert(
        "7".to_string(),
        officials_payload(vec![official(Some(70), "Ann", "Lee", "Sheriff")]),
    );

    let mock = Arc::new(MockCiceroDataSource {
        nonlegislative_districts: Some(districts_payload(vec![
            json!({"name": "Unnumbered district", "district_type": "WATERSHED"}),
            json!({"id": "", "name": "Blank id"}),
            json!({"id": 7, "name": "County"}),
        ])),
        district_officials,
        ..Default::default()
    });
    let aggregator = aggregator_for(mock.clone());

    let result = aggregator.aggregate(philadelphia()).await.expect("aggregate");

    let district_calls = mock
        .calls()
        .await
        .into_iter()
        .filter(|call| call.starts_with("official:"))
        .collect::<Vec<_>>();
    assert_eq!(district_calls, vec!["official:7"]);
    assert_eq!(result.officials.len(), 1);
}

#[tokio::test]
async fn a_failing_district_lookup_does_not_abort_the_others() {
    let mut district_officials = HashMap::new();
    district_officials.insert(
        "1".to_string(),
        officials_payload(vec![official(Some(10), "Ada", "North", "Mayor")]),
    );
    district_officials.insert(
        "3".to_string(),
        officials_payload(vec![official(Some(30), "Cy", "South", "Governor")]),
    );

    let mock = Arc::new(MockCiceroDataSource {
        location_officials: Some(officials_payload(vec![official(
            Some(99),
            "Main",
            "Source",
            "Senator",
        )])),
        nonlegislative_districts: Some(districts_payload(vec![
            json!({"id": 1}),
            json!({"id": 2}),
            json!({"id": 3}),
        ])),
        district_officials,
        ..Default::default()
    });
    let aggregator = aggregator_for(mock.clone());

    let result = aggregator.aggregate(philadelphia()).await.expect("aggregate");

    let last_names = result
        .officials
        .iter()
        .map(|official| official.last_name().unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(last_names, vec!["Source", "North", "South"]);
    assert!(mock.calls().await.contains(&"official:2".to_string()));
}

#[tokio::test]
async fn unexpected_payload_shapes_are_treated_as_empty() {
    let mock = Arc::new(MockCiceroDataSource {
        legislative_districts: Some(json!({"response": {"results": "not-a-list"}})),
        location_officials: Some(json!({"errors": ["quota exceeded"]})),
        nonlegislative_districts: Some(json!({"response": null})),
        election_events: Some(json!({})),
        ..Default::default()
    });
    let aggregator = aggregator_for(mock);

    let result = aggregator.aggregate(philadelphia()).await.expect("aggregate");

    assert!(result.officials.is_empty());
    assert!(result.districts.is_empty());
}

#[tokio::test]
async fn records_with_unusual_field_types_pass_through_unchanged() {
    let odd_official = json!({
        "id": null,
        "first_name": 42,
        "last_name": "Clerk",
        "office": {"name": {"en": "Clerk"}},
    });
    let odd_districts = vec![
        json!({"id": 1, "name": 7}),
        json!({"id": 2, "name": "PA-3", "district_type": ["NATIONAL_LOWER"]}),
    ];
    let mock = Arc::new(MockCiceroDataSource {
        legislative_districts: Some(districts_payload(odd_districts.clone())),
        location_officials: Some(officials_payload(vec![
            odd_official.clone(),
            official(Some(2), "Valid", "Entry", "Mayor"),
        ])),
        ..Default::default()
    });
    let aggregator = aggregator_for(mock);

    let result = aggregator.aggregate(philadelphia()).await.expect("aggregate");

    assert_eq!(result.officials.len(), 2);
    assert_eq!(result.officials[0].record(), &odd_official);
    assert_eq!(
        serde_json::to_value(&result.districts).expect("serialise districts"),
        json!(odd_districts)
    );

    let serialised = serde_json::to_value(&result.officials[0]).expect("serialise official");
    assert_eq!(serialised.get("id"), Some(&Value::Null));
}

#[tokio::test]
async fn passthrough_fields_survive_serialisation() {
    let mock = Arc::new(MockCiceroDataSource {
        location_officials: Some(officials_payload(vec![official(
            Some(1),
            "Dwight",
            "Evans",
            "Representative",
        )])),
        ..Default::default()
    });
    let aggregator = aggregator_for(mock);

    let result = aggregator.aggregate(philadelphia()).await.expect("aggregate");
    let serialised = serde_json::to_value(&result.officials[0]).expect("serialise official");

    assert_eq!(serialised["id"], json!(1));
    assert_eq!(serialised["party"], json!("Independent"));
    assert_eq!(serialised["office"]["title"], json!("Representative"));
}

#[tokio::test]
async fn out_of_range_coordinates_are_rejected_before_any_call() {
    let mock = Arc::new(MockCiceroDataSource::default());
    let aggregator = aggregator_for(mock.clone());

    let error = aggregator
        .aggregate(Location::new(123.0, -75.1))
        .await
        .expect_err("latitude out of range");

    assert!(matches!(error, AppError::BadRequest(_)));
    assert!(mock.calls().await.is_empty());
}
