use nimbus_log::config::LogSettings;
use nimbus_log::level::Level;
use nimbus_log::router::{LogRouter, CLOUD_CHANNEL, SSH_CHANNEL};
use std::fs;
use tempfile::TempDir;

fn router_in(temp_dir: &TempDir) -> LogRouter {
    let settings = LogSettings {
        log_dir: Some(temp_dir.path().to_path_buf()),
        ..LogSettings::default()
    };
    LogRouter::with_settings(settings)
}

#[test]
fn test_ssh_records_use_the_thread_stamped_template() {
    let temp_dir = TempDir::new().unwrap();
    let router = router_in(&temp_dir);
    router.configure_ssh_debug_log().unwrap();

    router.log(SSH_CHANNEL, Level::Debug, "opening channel");

    let content = fs::read_to_string(router.paths().ssh_debug_file()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let line = lines[0];
    // PID: <pid> DEB [<timestamp>] thr=<n> ssh: opening channel
    assert!(line.starts_with(&format!("PID: {} DEB [", std::process::id())));
    assert!(line.contains("] thr="));
    assert!(line.ends_with(" ssh: opening channel"));
}

#[test]
fn test_cloud_records_omit_the_thread_field() {
    let temp_dir = TempDir::new().unwrap();
    let router = router_in(&temp_dir);
    router.configure_cloud_debug_log().unwrap();

    router.log(CLOUD_CHANNEL, Level::Info, "DescribeInstances");

    let content = fs::read_to_string(router.paths().cloud_debug_file()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let line = lines[0];
    assert!(line.starts_with(&format!("PID: {} INF [", std::process::id())));
    assert!(!line.contains("thr="));
    assert!(line.ends_with(" cloud: DescribeInstances"));
}

#[test]
fn test_subsystem_channels_are_isolated() {
    let temp_dir = TempDir::new().unwrap();
    let router = router_in(&temp_dir);
    router.configure_ssh_debug_log().unwrap();
    router.configure_cloud_debug_log().unwrap();

    router.log(SSH_CHANNEL, Level::Debug, "ssh only");
    router.log(CLOUD_CHANNEL, Level::Debug, "cloud only");

    let ssh = fs::read_to_string(router.paths().ssh_debug_file()).unwrap();
    let cloud = fs::read_to_string(router.paths().cloud_debug_file()).unwrap();
    assert!(ssh.contains("ssh only"));
    assert!(!ssh.contains("cloud only"));
    assert!(cloud.contains("cloud only"));
    assert!(!cloud.contains("ssh only"));
}

#[test]
fn test_subsystem_floor_admits_debug() {
    let temp_dir = TempDir::new().unwrap();
    let router = router_in(&temp_dir);
    router.configure_ssh_debug_log().unwrap();

    assert_eq!(router.channel(SSH_CHANNEL).floor(), Level::Debug);
}
