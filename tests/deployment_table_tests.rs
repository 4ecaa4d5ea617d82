mod test_utils;

use portfolio_dashboard::entities::DeploymentBadge;
use portfolio_dashboard::use_cases::deployments::{
    deployment_search_fields, deployment_sort_value, index_by_name, DeploymentAssembler,
    DeploymentColumn,
};
use portfolio_dashboard::use_cases::table::{filter, paginate, sort, SortDirection, SortValue};
use test_utils::*;

#[test]
fn badge_follows_success_flag_not_status_text() {
    let succeeded = sample_deployment("d1", "1.0.0", "rolled back", true);
    assert_eq!(succeeded.badge(), DeploymentBadge::Success);

    let failed = sample_deployment("d2", "1.0.1", "Production", false);
    assert_eq!(failed.badge(), DeploymentBadge::Failed);

    // Status text matching no catalog entry changes nothing.
    let unknown = sample_deployment("d3", "1.0.2", "definitely-not-a-status", true);
    assert_eq!(unknown.badge(), DeploymentBadge::Success);
}

#[test]
fn name_index_keeps_first_duplicate() {
    let catalog = vec![
        sample_status("s1", "Beta", "bg-blue-500"),
        sample_status("s2", "Beta", "bg-red-500"),
    ];

    let by_name = index_by_name(catalog);

    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name["Beta"].id, "s1");
}

#[tokio::test]
async fn unmatched_status_text_is_left_unresolved() {
    let api = StubApi {
        deployments: vec![sample_deployment("d1", "1.0.0", "mystery", true)],
        statuses: vec![sample_status("s1", "Beta", "bg-blue-500")],
        ..StubApi::default()
    };

    let view = DeploymentAssembler::new(api).assemble(None).await;

    // Never substituted with the first catalog entry.
    assert!(view.status_of(&view.deployments[0]).is_none());
}

#[tokio::test]
async fn matched_status_name_resolves() {
    let api = StubApi {
        deployments: vec![sample_deployment("d1", "1.0.0", "Beta", true)],
        statuses: vec![sample_status("s1", "Beta", "bg-blue-500")],
        ..StubApi::default()
    };

    let view = DeploymentAssembler::new(api).assemble(None).await;

    assert_eq!(view.status_of(&view.deployments[0]).unwrap().id, "s1");
}

#[tokio::test]
async fn project_scope_is_passed_to_the_backend() {
    let api = StubApi::default();
    let assembler = DeploymentAssembler::new(api.clone());

    assembler.assemble(Some("p42")).await;
    assert_eq!(
        *api.last_project_id.lock().unwrap(),
        Some(Some("p42".to_string()))
    );

    assembler.assemble(None).await;
    assert_eq!(*api.last_project_id.lock().unwrap(), Some(None));
}

#[tokio::test]
async fn failed_history_fetch_yields_empty_view_not_error() {
    let api = StubApi {
        fail_deployments: true,
        statuses: vec![sample_status("s1", "Beta", "bg-blue-500")],
        ..StubApi::default()
    };

    let view = DeploymentAssembler::new(api).assemble(None).await;

    assert!(!view.complete);
    assert!(view.deployments.is_empty());
    assert_eq!(view.statuses_by_name.len(), 1);
}

#[test]
fn filter_matches_any_field_case_insensitively() {
    let rows = vec![
        sample_deployment("d1", "1.0.0", "Beta", true),
        sample_deployment("d2", "2.0.0", "Production", true),
    ];

    let by_status = filter(&rows, "beta", deployment_search_fields);
    assert_eq!(by_status.len(), 1);
    assert_eq!(by_status[0].id, "d1");

    // "release 2.0.0" commit message matches even though no other field does.
    let by_message = filter(&rows, "RELEASE 2", deployment_search_fields);
    assert_eq!(by_message.len(), 1);
    assert_eq!(by_message[0].id, "d2");

    let all = filter(&rows, "", deployment_search_fields);
    assert_eq!(all.len(), 2);
}

#[test]
fn sort_handles_text_number_and_mixed_columns() {
    let mut a = sample_deployment("d1", "b-version", "Beta", true);
    a.duration_in_seconds = 10.0;
    let mut b = sample_deployment("d2", "A-version", "Beta", true);
    b.duration_in_seconds = 30.0;

    let mut rows = vec![a.clone(), b.clone()];
    sort(
        &mut rows,
        |d| deployment_sort_value(d, DeploymentColumn::Version),
        SortDirection::Ascending,
    );
    assert_eq!(rows[0].id, "d2"); // case-insensitive: A-version before b-version

    sort(
        &mut rows,
        |d| deployment_sort_value(d, DeploymentColumn::Duration),
        SortDirection::Descending,
    );
    assert_eq!(rows[0].id, "d2");
    assert_eq!(rows[0].duration_in_seconds, 30.0);

    // Mixed value kinds compare equal: order is untouched.
    let mut mixed = vec![a.clone(), b.clone()];
    sort(
        &mut mixed,
        |d| {
            if d.id == "d1" {
                SortValue::Text(d.version.clone())
            } else {
                SortValue::Number(d.duration_in_seconds)
            }
        },
        SortDirection::Ascending,
    );
    assert_eq!(mixed[0].id, "d1");
    assert_eq!(mixed[1].id, "d2");
}

#[test]
fn pagination_is_one_based_and_tolerates_overflow() {
    let rows: Vec<i32> = (1..=7).collect();

    let first = paginate(&rows, 1, 3);
    assert_eq!(first.rows, vec![1, 2, 3]);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.total_rows, 7);

    let last = paginate(&rows, 3, 3);
    assert_eq!(last.rows, vec![7]);

    let beyond = paginate(&rows, 9, 3);
    assert!(beyond.rows.is_empty());
    assert_eq!(beyond.total_pages, 3);

    let exact = paginate(&rows, 2, 7);
    assert!(exact.rows.is_empty());
    assert_eq!(exact.total_pages, 1);
}

#[test]
fn filter_sort_paginate_pipeline_is_idempotent() {
    let mut rows = Vec::new();
    for (id, version, success) in [
        ("d1", "3.0.0", true),
        ("d2", "1.0.0", false),
        ("d3", "2.0.0", true),
        ("d4", "1.5.0", true),
    ] {
        rows.push(sample_deployment(id, version, "Beta", success));
    }

    let run = |rows: &[_]| {
        let mut filtered = filter(rows, "beta", deployment_search_fields);
        sort(
            &mut filtered,
            |d| deployment_sort_value(d, DeploymentColumn::Version),
            SortDirection::Ascending,
        );
        paginate(&filtered, 1, 2)
    };

    let first = run(&rows);
    let second = run(&rows);

    let ids = |page: &portfolio_dashboard::use_cases::table::Page<_>| {
        page.rows
            .iter()
            .map(|d: &portfolio_dashboard::entities::Deployment| d.id.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(ids(&first), vec!["d2", "d4"]);
    assert_eq!(first.total_pages, 2);
}
