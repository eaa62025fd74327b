//! 虚拟机接口测试

mod common;

use cloud_client::{
    DeployVirtualMachineOptions, GuestIpType, ListVirtualMachinesOptions, ResourceType,
    TrafficType, VirtualMachine, VirtualMachineState,
};
use common::{command, json_response, setup};
use wiremock::matchers::query_param;

#[tokio::test]
async fn test_list_virtual_machines() {
    let (server, client) = setup().await;

    command("listVirtualMachines")
        .and(query_param("state", "Running"))
        .and(query_param("zoneid", "1"))
        .respond_with(json_response(200, include_str!("fixtures/list_virtual_machines.json")))
        .expect(1)
        .mount(&server)
        .await;

    let vms = client
        .virtual_machine()
        .list_virtual_machines(
            ListVirtualMachinesOptions::default()
                .with_state(VirtualMachineState::Running)
                .with_zone_id("1"),
        )
        .await
        .unwrap();

    assert_eq!(vms.len(), 1);
    let vm = &vms[0];
    assert_eq!(vm.id, "54");
    assert_eq!(vm.name, "i-3-54-VM");
    assert_eq!(vm.state, VirtualMachineState::Running);
    assert_eq!(vm.zone_name, "San Jose 1");
    assert_eq!(vm.host_name.as_deref(), Some("cs2-xevsrv.alucloud.local"));
    assert_eq!(vm.cpu_number, 1);
    assert_eq!(vm.cpu_speed, 500);
    assert_eq!(vm.memory, 512);
    assert_eq!(vm.cpu_used.as_deref(), Some("0.01%"));
    assert_eq!(vm.network_kbs_read, Some(0));
    assert_eq!(vm.root_device_id, Some(0));
    assert!(!vm.ha_enabled);
    assert_eq!(
        vm.created.unwrap().to_rfc3339(),
        "2011-02-27T08:39:10-08:00"
    );

    let nic = vm.default_nic().unwrap();
    assert_eq!(nic.id, "72");
    assert_eq!(nic.ip_address.as_deref(), Some("10.1.1.18"));
    assert_eq!(nic.traffic_type, TrafficType::Guest);
    assert_eq!(nic.guest_ip_type, GuestIpType::Virtual);
    assert_eq!(nic.mac_address.as_deref(), Some("06:02:e8:00:00:3a"));

    assert_eq!(vm.tags.len(), 1);
    assert_eq!(vm.tags[0].resource_type, ResourceType::UserVm);
    assert_eq!(vm.tags[0].key, "env");
}

#[tokio::test]
async fn test_deploy_and_wait_for_virtual_machine() {
    let (server, client) = setup().await;

    command("deployVirtualMachine")
        .and(query_param("zoneid", "1"))
        .and(query_param("serviceofferingid", "1"))
        .and(query_param("templateid", "2"))
        .and(query_param("name", "web-1"))
        .respond_with(json_response(200, include_str!("fixtures/deploy_virtual_machine.json")))
        .expect(1)
        .mount(&server)
        .await;

    // 前两次查询仍在执行，之后成功
    command("queryAsyncJobResult")
        .and(query_param("jobid", "50006"))
        .respond_with(json_response(200, include_str!("fixtures/query_async_job_pending.json")))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    command("queryAsyncJobResult")
        .and(query_param("jobid", "50006"))
        .respond_with(json_response(
            200,
            include_str!("fixtures/query_async_job_deploy_succeeded.json"),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let job = client
        .virtual_machine()
        .deploy_virtual_machine(
            "1",
            "1",
            "2",
            DeployVirtualMachineOptions::default().with_name("web-1"),
        )
        .await
        .unwrap();
    assert_eq!(job.id.as_deref(), Some("1234"));
    assert_eq!(job.job_id, "50006");

    let vm: VirtualMachine = client
        .async_job()
        .wait_for_result(&job.job_id, "virtualmachine", client.poll_policy())
        .await
        .unwrap();

    assert_eq!(vm.id, "1234");
    assert_eq!(vm.name, "web-1");
    assert_eq!(vm.state, VirtualMachineState::Running);
    assert!(vm.password_enabled);
    assert_eq!(vm.password.as_deref(), Some("rJ6hbmuq"));
    assert_eq!(vm.nics[0].guest_ip_type, GuestIpType::Isolated);
    assert!(vm.tags.is_empty());
}

#[tokio::test]
async fn test_deploy_virtual_machine_numeric_ids() {
    let (server, client) = setup().await;

    command("deployVirtualMachine")
        .respond_with(json_response(
            200,
            include_str!("fixtures/deploy_virtual_machine_numeric_ids.json"),
        ))
        .expect(1)
        .mount(&server)
        .await;

    command("queryAsyncJobResult")
        .and(query_param("jobid", "50006"))
        .respond_with(json_response(
            200,
            include_str!("fixtures/query_async_job_deploy_succeeded_numeric_ids.json"),
        ))
        .expect(2)
        .mount(&server)
        .await;

    let job = client
        .virtual_machine()
        .deploy_virtual_machine("1", "1", "2", DeployVirtualMachineOptions::default())
        .await
        .unwrap();
    assert_eq!(job.id.as_deref(), Some("1234"));
    assert_eq!(job.job_id, "50006");

    let finished = client
        .async_job()
        .get_async_job(&job.job_id)
        .await
        .unwrap();
    assert_eq!(finished.instance_id.as_deref(), Some("1234"));
    assert_eq!(finished.account_id.as_deref(), Some("3"));

    let vm: VirtualMachine = client
        .async_job()
        .wait_for_result(&job.job_id, "virtualmachine", client.poll_policy())
        .await
        .unwrap();
    assert_eq!(vm.id, "1234");
    assert_eq!(vm.zone_id, "1");
    assert_eq!(vm.template_id, "2");
    assert_eq!(vm.service_offering_id, "1");
    assert_eq!(vm.guest_os_id.as_deref(), Some("11"));
    assert_eq!(vm.nics[0].id, "1300");
    assert_eq!(vm.nics[0].network_id, "204");
}

#[tokio::test]
async fn test_stop_virtual_machine_forced() {
    let (server, client) = setup().await;

    command("stopVirtualMachine")
        .and(query_param("id", "54"))
        .and(query_param("forced", "true"))
        .respond_with(json_response(200, r#"{"stopvirtualmachineresponse":{"jobid":"50020"}}"#))
        .expect(1)
        .mount(&server)
        .await;

    let job = client
        .virtual_machine()
        .stop_virtual_machine_forced("54", true)
        .await
        .unwrap();
    assert_eq!(job.job_id, "50020");
    assert_eq!(job.id, None);
}

#[tokio::test]
async fn test_lifecycle_commands() {
    let (server, client) = setup().await;

    for (cmd, job_id) in [
        ("startVirtualMachine", 50021),
        ("rebootVirtualMachine", 50022),
        ("destroyVirtualMachine", 50023),
    ] {
        command(cmd)
            .and(query_param("id", "54"))
            .respond_with(json_response(
                200,
                &format!(r#"{{"{}response":{{"jobid":{}}}}}"#, cmd.to_lowercase(), job_id),
            ))
            .expect(1)
            .mount(&server)
            .await;
    }

    let api = client.virtual_machine();
    assert_eq!(api.start_virtual_machine("54").await.unwrap().job_id, "50021");
    assert_eq!(api.reboot_virtual_machine("54").await.unwrap().job_id, "50022");
    assert_eq!(api.destroy_virtual_machine("54").await.unwrap().job_id, "50023");
}

#[tokio::test]
async fn test_change_service_for_virtual_machine() {
    let (server, client) = setup().await;

    command("changeServiceForVirtualMachine")
        .and(query_param("id", "54"))
        .and(query_param("serviceofferingid", "2"))
        .respond_with(json_response(200, include_str!("fixtures/change_service.json")))
        .expect(1)
        .mount(&server)
        .await;

    let vm = client
        .virtual_machine()
        .change_service_for_virtual_machine("54", "2")
        .await
        .unwrap();

    assert_eq!(vm.service_offering_id, "2");
    assert_eq!(vm.service_offering_name, "Medium Instance");
    assert_eq!(vm.memory, 1024);
    assert_eq!(vm.state, VirtualMachineState::Stopped);
    assert!(vm.nics.is_empty());
}

#[tokio::test]
async fn test_get_virtual_machine_missing() {
    let (server, client) = setup().await;

    command("listVirtualMachines")
        .and(query_param("id", "999"))
        .respond_with(json_response(200, r#"{"listvirtualmachinesresponse":{}}"#))
        .mount(&server)
        .await;

    assert!(client
        .virtual_machine()
        .get_virtual_machine("999")
        .await
        .unwrap()
        .is_none());
}
