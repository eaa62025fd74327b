//! 快照与资源标签接口测试

mod common;

use cloud_client::{
    CreateTagsOptions, DeleteTagsOptions, ListSnapshotsOptions, ListTagsOptions, ResourceTag,
    ResourceType, SnapshotState, SnapshotType, VolumeType,
};
use common::{command, json_response, setup};
use wiremock::matchers::query_param;

#[tokio::test]
async fn test_list_snapshots() {
    let (server, client) = setup().await;

    command("listSnapshots")
        .and(query_param("volumeid", "4000"))
        .respond_with(json_response(200, include_str!("fixtures/list_snapshots.json")))
        .expect(1)
        .mount(&server)
        .await;

    let snapshots = client
        .snapshot()
        .list_snapshots(ListSnapshotsOptions::default().with_volume_id("4000"))
        .await
        .unwrap();

    assert_eq!(snapshots.len(), 1);
    let s = &snapshots[0];
    assert_eq!(s.id, "3000");
    assert_eq!(s.snapshot_type, SnapshotType::Manual);
    assert_eq!(s.state, SnapshotState::BackedUp);
    assert_eq!(s.volume_type, Some(VolumeType::Root));
    assert_eq!(s.volume_name, "ROOT-1234");
}

#[tokio::test]
async fn test_create_and_delete_snapshot() {
    let (server, client) = setup().await;

    command("createSnapshot")
        .and(query_param("volumeid", "4000"))
        .respond_with(json_response(200, r#"{"createsnapshotresponse":{"id":"3001","jobid":"50060"}}"#))
        .expect(1)
        .mount(&server)
        .await;

    command("deleteSnapshot")
        .and(query_param("id", "3001"))
        .respond_with(json_response(200, r#"{"deletesnapshotresponse":{"jobid":"50061"}}"#))
        .expect(1)
        .mount(&server)
        .await;

    let created = client.snapshot().create_snapshot("4000").await.unwrap();
    assert_eq!(created.id.as_deref(), Some("3001"));
    assert_eq!(created.job_id, "50060");

    let deleted = client.snapshot().delete_snapshot("3001").await.unwrap();
    assert_eq!(deleted.job_id, "50061");
}

#[tokio::test]
async fn test_list_tags_dedup() {
    let (server, client) = setup().await;

    command("listTags")
        .respond_with(json_response(200, include_str!("fixtures/list_tags.json")))
        .expect(1)
        .mount(&server)
        .await;

    let tags = client
        .tag()
        .list_tags(ListTagsOptions::default())
        .await
        .unwrap();

    assert_eq!(tags.len(), 2);

    let mut expected = ResourceTag::new("owner", "ops", ResourceType::Volume, "4001");
    expected.account = Some("adrian".into());
    expected.domain_id = Some("1".into());
    expected.domain = Some("ROOT".into());
    expected.customer = Some("acme".into());
    assert_eq!(tags[1], expected);
}

#[tokio::test]
async fn test_list_tags_by_resource() {
    let (server, client) = setup().await;

    command("listTags")
        .and(query_param("resourcetype", "UserVm"))
        .and(query_param("resourceid", "1234"))
        .respond_with(json_response(200, r#"{"listtagsresponse":{}}"#))
        .expect(1)
        .mount(&server)
        .await;

    let tags = client
        .tag()
        .list_tags(ListTagsOptions::default().with_resource(ResourceType::UserVm, "1234"))
        .await
        .unwrap();
    assert!(tags.is_empty());
}

#[tokio::test]
async fn test_create_tags_and_wait() {
    let (server, client) = setup().await;

    command("createTags")
        .and(query_param("resourcetype", "UserVm"))
        .and(query_param("resourceids", "1234,1235"))
        .and(query_param("tags[0].key", "env"))
        .and(query_param("tags[0].value", "prod"))
        .respond_with(json_response(200, r#"{"createtagsresponse":{"jobid":"50010"}}"#))
        .expect(1)
        .mount(&server)
        .await;

    command("queryAsyncJobResult")
        .and(query_param("jobid", "50010"))
        .respond_with(json_response(200, include_str!("fixtures/query_async_job_success.json")))
        .expect(1)
        .mount(&server)
        .await;

    let job = client
        .tag()
        .create_tags(
            CreateTagsOptions::new(ResourceType::UserVm, vec!["1234".into(), "1235".into()])
                .with_tag("env", "prod"),
        )
        .await
        .unwrap();

    let response = client
        .async_job()
        .wait_for_success(&job.job_id, client.poll_policy())
        .await
        .unwrap();
    assert!(response.success);
    assert_eq!(response.display_text.as_deref(), Some("tags created"));
}

#[tokio::test]
async fn test_delete_tags() {
    let (server, client) = setup().await;

    command("deleteTags")
        .and(query_param("resourcetype", "Volume"))
        .and(query_param("resourceids", "4001"))
        .and(query_param("tags[0].key", "owner"))
        .respond_with(json_response(200, r#"{"deletetagsresponse":{"jobid":"50011"}}"#))
        .expect(1)
        .mount(&server)
        .await;

    let job = client
        .tag()
        .delete_tags(DeleteTagsOptions::new(ResourceType::Volume, vec!["4001".into()]).with_key("owner"))
        .await
        .unwrap();
    assert_eq!(job.job_id, "50011");
}
