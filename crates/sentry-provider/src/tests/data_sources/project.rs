use crate::tests::{FakeReader, HangingReader, web_app_project};
use crate::{AttributeValue, LookupError, ProjectDataSource, ProjectKey, ReadContext, ResourceData};

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use sentry_client::{ClientError, Team};
use tokio_util::sync::CancellationToken;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn web_app_inputs() -> ResourceData {
    ResourceData::new()
        .with("organization", "acme")
        .with("slug", "web-app")
}

// =========================================================================
// lookup
// =========================================================================

#[tokio::test]
async fn test_lookup_maps_every_field() {
    let reader = FakeReader::returning(web_app_project());
    let source = ProjectDataSource::new(reader.clone());

    let record = source
        .lookup(&ReadContext::new(), &ProjectKey::new("acme", "web-app"))
        .await
        .unwrap();

    assert_eq!(record.id, "123");
    assert_eq!(record.name, "Web App");
    assert_eq!(record.slug, "web-app");
    assert_eq!(record.organization_slug, "acme");
    assert!(!record.is_public);
    assert_eq!(record.color, "#ff0000");
    assert_eq!(record.features, vec!["releases".to_string()]);
    assert_eq!(record.status, "active");
    assert_eq!(record.team_slugs, set(&["backend", "frontend"]));
    assert_eq!(record.platform, None);
    assert_eq!(record.digests_min_delay, None);
    assert_eq!(record.digests_max_delay, None);
    assert_eq!(record.resolve_age_hours, None);
    assert_eq!(reader.calls(), 1);
}

#[tokio::test]
async fn test_lookup_passes_requested_key_to_reader() {
    let reader = FakeReader::new(|organization, slug| {
        assert_eq!(organization, "acme");
        assert_eq!(slug, "web-app");
        Ok(web_app_project())
    });
    let source = ProjectDataSource::new(reader);

    let result = source
        .lookup(&ReadContext::new(), &ProjectKey::new("acme", "web-app"))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_lookup_uses_remote_slug_and_organization_after_redirect() {
    let reader = FakeReader::new(|_, _| {
        let mut project = web_app_project();
        project.slug = "web-app-renamed".to_string();
        project.organization.slug = "acme-corp".to_string();
        Ok(project)
    });
    let source = ProjectDataSource::new(reader);

    let record = source
        .lookup(&ReadContext::new(), &ProjectKey::new("acme", "web-app"))
        .await
        .unwrap();

    assert_eq!(record.slug, "web-app-renamed");
    assert_eq!(record.organization_slug, "acme-corp");
}

#[tokio::test]
async fn test_lookup_keeps_optional_fields_when_present() {
    let reader = FakeReader::new(|_, _| {
        let mut project = web_app_project();
        project.platform = Some("python".to_string());
        project.digests_min_delay = Some(300);
        project.digests_max_delay = Some(1800);
        project.resolve_age = Some(0);
        Ok(project)
    });
    let source = ProjectDataSource::new(reader);

    let record = source
        .lookup(&ReadContext::new(), &ProjectKey::new("acme", "web-app"))
        .await
        .unwrap();

    assert_eq!(record.platform.as_deref(), Some("python"));
    assert_eq!(record.digests_min_delay, Some(300));
    assert_eq!(record.digests_max_delay, Some(1800));
    assert_eq!(record.resolve_age_hours, Some(0));
}

#[tokio::test]
async fn test_lookup_not_found() {
    let reader = FakeReader::failing_with_status(404);
    let source = ProjectDataSource::new(reader.clone());

    let err = source
        .lookup(&ReadContext::new(), &ProjectKey::new("acme", "ghost"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(
        err,
        LookupError::NotFound { ref organization, ref slug, .. }
            if organization == "acme" && slug == "ghost"
    ));
    assert_eq!(reader.calls(), 1);
}

#[tokio::test]
async fn test_lookup_other_status_is_remote_error() {
    for status in [401, 403, 500, 503] {
        let source = ProjectDataSource::new(FakeReader::failing_with_status(status));

        let err = source
            .lookup(&ReadContext::new(), &ProjectKey::new("acme", "web-app"))
            .await
            .unwrap_err();

        match err {
            LookupError::Remote { source, slug, .. } => {
                assert_eq!(source.status(), Some(status));
                assert_eq!(slug, "web-app");
            }
            other => panic!("expected Remote for {status}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_lookup_decode_failure_is_remote_error() {
    let reader = FakeReader::new(|_, _| {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        Err(ClientError::from_json(err))
    });
    let source = ProjectDataSource::new(reader);

    let err = source
        .lookup(&ReadContext::new(), &ProjectKey::new("acme", "web-app"))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Remote { .. }));
}

#[tokio::test]
async fn test_lookup_team_without_slug_is_mapping_error() {
    let reader = FakeReader::new(|_, _| {
        let mut project = web_app_project();
        project.teams.push(Team {
            id: Some("42".to_string()),
            slug: None,
            name: Some("Ghost Team".to_string()),
        });
        Ok(project)
    });
    let source = ProjectDataSource::new(reader);

    let err = source
        .lookup(&ReadContext::new(), &ProjectKey::new("acme", "web-app"))
        .await
        .unwrap_err();

    match err {
        LookupError::Mapping { message, .. } => {
            assert!(message.contains("team #2"));
            assert!(message.contains("42"));
        }
        other => panic!("expected Mapping, got {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_twice_yields_identical_records() {
    let reader = FakeReader::returning(web_app_project());
    let source = ProjectDataSource::new(reader.clone());
    let ctx = ReadContext::new();
    let key = ProjectKey::new("acme", "web-app");

    let first = source.lookup(&ctx, &key).await.unwrap();
    let second = source.lookup(&ctx, &key).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(reader.calls(), 2);
}

#[tokio::test]
async fn test_lookup_with_cancelled_context_does_not_call_reader() {
    let reader = FakeReader::returning(web_app_project());
    let source = ProjectDataSource::new(reader.clone());
    let token = CancellationToken::new();
    token.cancel();
    let ctx = ReadContext::new().with_cancellation(token);

    let err = source
        .lookup(&ctx, &ProjectKey::new("acme", "web-app"))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Cancelled { .. }));
    assert_eq!(reader.calls(), 0);
}

#[tokio::test]
async fn test_lookup_cancelled_mid_flight() {
    let source = ProjectDataSource::new(Arc::new(HangingReader));
    let token = CancellationToken::new();
    let ctx = ReadContext::new().with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();
    });

    let err = source
        .lookup(&ctx, &ProjectKey::new("acme", "web-app"))
        .await
        .unwrap_err();

    canceller.await.unwrap();
    assert!(matches!(err, LookupError::Cancelled { .. }));
}

#[tokio::test]
async fn test_lookup_deadline_exceeded() {
    let source = ProjectDataSource::new(Arc::new(HangingReader));
    let ctx = ReadContext::new().with_timeout(Duration::from_millis(20));

    let err = source
        .lookup(&ctx, &ProjectKey::new("acme", "web-app"))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::DeadlineExceeded { .. }));
}

// =========================================================================
// read
// =========================================================================

#[tokio::test]
async fn test_read_writes_all_attributes_and_id() {
    let source = ProjectDataSource::new(FakeReader::returning(web_app_project()));
    let mut data = web_app_inputs();

    let diagnostics = source.read(&ReadContext::new(), &mut data).await;

    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    assert_eq!(data.id(), Some("web-app"));
    assert_eq!(data.get_string("organization"), Some("acme"));
    assert_eq!(data.get_string("slug"), Some("web-app"));
    assert_eq!(data.get_string("name"), Some("Web App"));
    assert_eq!(data.get_string("internal_id"), Some("123"));
    assert_eq!(data.get_string("color"), Some("#ff0000"));
    assert_eq!(data.get_string("status"), Some("active"));
    assert_eq!(data.get("is_public"), Some(&AttributeValue::Bool(false)));
    assert_eq!(
        data.get("features"),
        Some(&AttributeValue::List(vec!["releases".to_string()]))
    );
    assert_eq!(
        data.get("teams"),
        Some(&AttributeValue::Set(set(&["backend", "frontend"])))
    );
    assert_eq!(data.get("platform"), Some(&AttributeValue::Null));
    assert_eq!(data.get("digests_min_delay"), Some(&AttributeValue::Null));
    assert_eq!(data.get("digests_max_delay"), Some(&AttributeValue::Null));
    assert_eq!(data.get("resolve_age"), Some(&AttributeValue::Null));

    for attribute in source.schema().iter() {
        assert!(data.get(attribute.name).is_some(), "{} not set", attribute.name);
    }
}

#[tokio::test]
async fn test_read_sets_id_to_resolved_slug() {
    let reader = FakeReader::new(|_, _| {
        let mut project = web_app_project();
        project.slug = "web-app-2".to_string();
        Ok(project)
    });
    let source = ProjectDataSource::new(reader);
    let mut data = web_app_inputs();

    let diagnostics = source.read(&ReadContext::new(), &mut data).await;

    assert!(diagnostics.is_empty());
    assert_eq!(data.id(), Some("web-app-2"));
    assert_eq!(data.get_string("slug"), Some("web-app-2"));
}

#[tokio::test]
async fn test_read_missing_inputs_reports_each_and_skips_remote() {
    let reader = FakeReader::returning(web_app_project());
    let source = ProjectDataSource::new(reader.clone());
    let mut data = ResourceData::new().with("slug", "");

    let diagnostics = source.read(&ReadContext::new(), &mut data).await;

    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.has_errors());
    assert_eq!(diagnostics.for_attribute("organization").count(), 1);
    assert_eq!(diagnostics.for_attribute("slug").count(), 1);
    assert_eq!(reader.calls(), 0);
    assert_eq!(data.id(), None);
}

#[tokio::test]
async fn test_read_not_found_is_error_diagnostic_and_state_untouched() {
    let source = ProjectDataSource::new(FakeReader::failing_with_status(404));
    let mut data = ResourceData::new()
        .with("organization", "acme")
        .with("slug", "ghost");
    let before = data.clone();

    let diagnostics = source.read(&ReadContext::new(), &mut data).await;

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = diagnostics.iter().next().unwrap();
    assert!(diagnostic.is_error());
    assert_eq!(diagnostic.summary, "Sentry project not found");
    assert!(diagnostic.detail.as_deref().unwrap().contains("ghost"));
    assert_eq!(data, before);
}

#[tokio::test]
async fn test_read_mapping_error_is_distinct_diagnostic() {
    let reader = FakeReader::new(|_, _| {
        let mut project = web_app_project();
        project.teams[0].slug = None;
        Ok(project)
    });
    let source = ProjectDataSource::new(reader);
    let mut data = web_app_inputs();

    let diagnostics = source.read(&ReadContext::new(), &mut data).await;

    let diagnostic = diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.summary, "Unexpected Sentry project payload");
    assert_eq!(data.id(), None);
    assert_eq!(data.get("name"), None);
}

#[tokio::test]
async fn test_read_remote_failure_detail_has_no_source_location() {
    let source = ProjectDataSource::new(FakeReader::failing_with_status(403));
    let mut data = web_app_inputs();

    let diagnostics = source.read(&ReadContext::new(), &mut data).await;

    let diagnostic = diagnostics.iter().next().unwrap();
    let detail = diagnostic.detail.as_deref().unwrap();
    assert_eq!(diagnostic.summary, "Failed to read Sentry project");
    assert_eq!(
        detail,
        "Reading project \"web-app\" in organization \"acme\" failed: \
         Sentry API error: remote said no (status: 403)"
    );
    assert!(!detail.contains(".rs:"));
}
