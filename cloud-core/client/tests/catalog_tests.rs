//! 模板、方案与区域接口测试

mod common;

use cloud_client::{
    ListDiskOfferingsOptions, ListServiceOfferingsOptions, ListTemplatesOptions, ListZonesOptions,
    NetworkType, StorageType, TemplateFilter,
};
use common::{command, json_response, setup};
use wiremock::matchers::query_param;

#[tokio::test]
async fn test_list_templates_dedup_per_zone() {
    let (server, client) = setup().await;

    command("listTemplates")
        .and(query_param("templatefilter", "featured"))
        .respond_with(json_response(200, include_str!("fixtures/list_templates.json")))
        .expect(1)
        .mount(&server)
        .await;

    let templates = client
        .template()
        .list_templates(ListTemplatesOptions::new(TemplateFilter::Featured))
        .await
        .unwrap();

    // 同一模板在两个区域各一条，重复行被去除
    assert_eq!(templates.len(), 2);
    assert_eq!(templates[0].zone_id.as_deref(), Some("1"));
    assert_eq!(templates[1].zone_id.as_deref(), Some("2"));

    let t = &templates[0];
    assert_eq!(t.id, "2");
    assert!(t.is_public);
    assert!(t.is_ready);
    assert!(t.is_featured);
    assert!(t.cross_zones);
    assert_eq!(t.format.as_deref(), Some("VHD"));
    assert_eq!(t.size, Some(21_474_836_480));
    assert_eq!(t.os_type_name.as_deref(), Some("CentOS 5.3 (64-bit)"));
    assert_eq!(t.display_text, "CentOS 5.3(64-bit) no GUI (XenServer)");
}

#[tokio::test]
async fn test_get_template_in_zone() {
    let (server, client) = setup().await;

    command("listTemplates")
        .and(query_param("templatefilter", "executable"))
        .and(query_param("id", "2"))
        .and(query_param("zoneid", "2"))
        .respond_with(json_response(
            200,
            r#"{"listtemplatesresponse":{"count":1,"template":[{"id":"2","name":"CentOS","zoneid":"2","zonename":"Chicago","isready":"true"}]}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let template = client
        .template()
        .get_template_in_zone("2", "2")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(template.zone_name.as_deref(), Some("Chicago"));
    assert!(template.is_ready);
}

#[tokio::test]
async fn test_list_service_offerings() {
    let (server, client) = setup().await;

    command("listServiceOfferings")
        .respond_with(json_response(200, include_str!("fixtures/list_service_offerings.json")))
        .expect(1)
        .mount(&server)
        .await;

    let offerings = client
        .offering()
        .list_service_offerings(ListServiceOfferingsOptions::default())
        .await
        .unwrap();

    assert_eq!(offerings.len(), 2);
    assert_eq!(offerings[0].name, "Small Instance");
    assert_eq!(offerings[0].memory, 512);
    assert_eq!(offerings[0].storage_type, Some(StorageType::Shared));
    assert_eq!(offerings[0].network_rate, None);

    assert_eq!(offerings[1].cpu_speed, 1000);
    assert_eq!(offerings[1].storage_type, Some(StorageType::Local));
    assert!(offerings[1].offer_ha);
    assert_eq!(offerings[1].network_rate, Some(200));
    assert_eq!(offerings[1].tags.as_deref(), Some("ssd"));
}

#[tokio::test]
async fn test_get_disk_offering() {
    let (server, client) = setup().await;

    command("listDiskOfferings")
        .and(query_param("id", "6"))
        .respond_with(json_response(
            200,
            r#"{"listdiskofferingsresponse":{"count":1,"diskoffering":[{"id":"6","name":"Custom","disksize":0,"iscustomized":true}]}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let offering = client.offering().get_disk_offering("6").await.unwrap().unwrap();
    assert_eq!(offering.name, "Custom");
    assert!(offering.is_customized);
    assert_eq!(offering.disk_size, 0);
}

#[tokio::test]
async fn test_list_disk_offerings() {
    let (server, client) = setup().await;

    command("listDiskOfferings")
        .respond_with(json_response(200, include_str!("fixtures/list_disk_offerings.json")))
        .mount(&server)
        .await;

    let offerings = client
        .offering()
        .list_disk_offerings(ListDiskOfferingsOptions::default())
        .await
        .unwrap();

    assert_eq!(offerings.len(), 2);
    assert_eq!(offerings[0].disk_size, 20);
    assert!(!offerings[0].is_customized);
    assert!(offerings[1].is_customized);
}

#[tokio::test]
async fn test_list_zones_unknown_network_type() {
    let (server, client) = setup().await;

    command("listZones")
        .and(query_param("available", "true"))
        .respond_with(json_response(200, include_str!("fixtures/list_zones.json")))
        .expect(1)
        .mount(&server)
        .await;

    let zones = client
        .zone()
        .list_zones(ListZonesOptions::default().with_available(true))
        .await
        .unwrap();

    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0].network_type, NetworkType::Advanced);
    assert_eq!(zones[0].dns1.as_deref(), Some("8.8.8.8"));
    assert!(zones[0].local_storage_enabled);
    assert!(!zones[0].security_groups_enabled);

    // 未知取值不会导致解码失败
    assert_eq!(zones[1].network_type, NetworkType::Unrecognized);
    assert!(zones[1].security_groups_enabled);
}
