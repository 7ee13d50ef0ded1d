use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Project {
    pub downloads: Downloads,
}

#[derive(Deserialize, Debug)]
pub struct Downloads {
    pub total: u64,
}

#[test]
fn project_payload_test() {
    let body = r#"{
        "id": 238222,
        "title": "Just Enough Items",
        "downloads": { "monthly": 1234, "total": 400004 }
    }"#;
    let project: Project = serde_json::from_str(body).unwrap();
    assert_eq!(project.downloads.total, 400_004);
}

#[test]
fn missing_total_test() {
    let body = r#"{ "downloads": { "monthly": 1234 } }"#;
    assert!(serde_json::from_str::<Project>(body).is_err());
}
