pub mod repositories;

#[cfg(test)]
pub fn create_test_dir() -> (tempfile::TempDir, crate::DataDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let data_dir = crate::open_data_dir(dir.path()).expect("Failed to open test data dir");
    (dir, data_dir)
}
