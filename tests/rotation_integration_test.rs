use nimbus_log::config::LogSettings;
use nimbus_log::router::LogRouter;
use std::fs;
use tempfile::TempDir;

const MAX_FILE_SIZE: u64 = 512;

fn small_router(temp_dir: &TempDir) -> LogRouter {
    let settings = LogSettings {
        log_dir: Some(temp_dir.path().to_path_buf()),
        max_file_size: MAX_FILE_SIZE,
        backup_count: 2,
        use_syslog: false,
    };
    LogRouter::with_settings(settings)
}

#[test]
fn test_sustained_writes_rotate_the_debug_file() {
    let temp_dir = TempDir::new().unwrap();
    let router = small_router(&temp_dir);
    router.configure_application(false).unwrap();

    for i in 0..300 {
        router.debug(&format!("sustained write {}", i));
    }

    let debug_file = router.paths().debug_file();
    assert!(debug_file.exists());
    assert!(debug_file.with_extension("log.1").exists());
    assert!(debug_file.with_extension("log.2").exists());
    assert!(!debug_file.with_extension("log.3").exists());
}

#[test]
fn test_cumulative_size_stays_bounded() {
    let temp_dir = TempDir::new().unwrap();
    let router = small_router(&temp_dir);
    router.configure_application(false).unwrap();

    for i in 0..300 {
        router.debug(&format!("sustained write {}", i));
    }

    // Current file plus two backups, each within the cap
    let mut total = 0;
    for entry in fs::read_dir(temp_dir.path()).unwrap() {
        let entry = entry.unwrap();
        let len = entry.metadata().unwrap().len();
        assert!(
            len <= MAX_FILE_SIZE,
            "file over cap: {:?} ({} bytes)",
            entry.path(),
            len
        );
        total += len;
    }
    assert!(total <= 3 * MAX_FILE_SIZE);
}

#[test]
fn test_latest_records_survive_rotation() {
    let temp_dir = TempDir::new().unwrap();
    let router = small_router(&temp_dir);
    router.configure_application(false).unwrap();

    for i in 0..300 {
        router.debug(&format!("sustained write {}", i));
    }

    let content = fs::read_to_string(router.paths().debug_file()).unwrap();
    assert!(content.contains("sustained write 299"));
}
