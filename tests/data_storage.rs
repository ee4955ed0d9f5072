#[cfg(test)]
mod tests {
    use studytrack::libs::data_storage::DataStorage;
    use studytrack::libs::messages::Message;

    #[test]
    fn test_get_path_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = temp_dir.path().join("nested").join("data");
        let storage = DataStorage::at(&base);

        let path = storage.get_path("studytrack.db").unwrap();

        assert!(base.is_dir());
        assert_eq!(path, base.join("studytrack.db"));
        assert_eq!(storage.base_path(), base.as_path());
    }

    #[test]
    fn test_messages_render() {
        assert!(!Message::AllMigrationsCompleted.to_string().is_empty());
        assert!(Message::MigrationsFound(2).to_string().contains('2'));
    }
}
