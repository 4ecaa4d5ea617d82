use portfolio_dashboard::entities::{ProjectsPayload, StatusesPayload};
use serde_json::json;

#[test]
fn status_catalog_accepts_wrapped_documents_and_bare_shapes() {
    let wrapped: StatusesPayload = serde_json::from_value(json!({
        "statuses": [{ "id": "s1", "name": "Beta", "class": "bg-blue-500" }]
    }))
    .unwrap();
    let statuses = wrapped.into_statuses();
    assert_eq!(statuses[0].id, "s1");
    assert_eq!(statuses[0].name, "Beta");
    assert_eq!(statuses[0].class, "bg-blue-500");

    let documents: StatusesPayload = serde_json::from_value(json!({
        "documents": [{ "$id": "s2", "name": "Production" }],
        "total": 1
    }))
    .unwrap();
    assert_eq!(documents.into_statuses()[0].id, "s2");

    let bare: StatusesPayload =
        serde_json::from_value(json!([{ "id": "s3", "name": "Archived" }])).unwrap();
    assert_eq!(bare.into_statuses()[0].id, "s3");
}

#[test]
fn malformed_status_class_passes_through_verbatim() {
    let bare: StatusesPayload = serde_json::from_value(json!([
        { "id": "s1", "name": "Beta", "class": "bg-blue-500;;oops {" }
    ]))
    .unwrap();
    assert_eq!(bare.into_statuses()[0].class, "bg-blue-500;;oops {");
}

#[test]
fn project_list_accepts_document_envelope_and_bare_array() {
    let documents: ProjectsPayload = serde_json::from_value(json!({
        "documents": [{ "$id": "p1", "title": "Doc project" }],
        "total": 1
    }))
    .unwrap();
    assert_eq!(documents.into_projects()[0].id, "p1");

    let bare: ProjectsPayload =
        serde_json::from_value(json!([{ "id": "p2", "title": "Flat project" }])).unwrap();
    assert_eq!(bare.into_projects()[0].id, "p2");
}

#[test]
fn status_description_and_class_default_when_absent() {
    let bare: StatusesPayload =
        serde_json::from_value(serde_json::json!([{ "id": "s1", "name": "Beta" }])).unwrap();
    let status = &bare.into_statuses()[0];
    assert!(status.description.is_empty());
    assert!(status.class.is_empty());
}
