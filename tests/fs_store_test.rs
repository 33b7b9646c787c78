use notez::model::Note;
use notez::store::fs::FileStore;
use notez::store::NoteStore;
use std::fs;
use tempfile::TempDir;

fn store(temp: &TempDir) -> FileStore {
    FileStore::new(temp.path().to_path_buf())
}

#[test]
fn missing_slot_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    assert!(store(&temp).get_all().unwrap().is_empty());
}

#[test]
fn malformed_slot_errors_but_loads_empty() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.json"), "[{\"id\": 1").unwrap();

    let store = store(&temp);
    assert!(store.get_all().is_err());
    assert!(store.load_or_empty().is_empty());
}

#[test]
fn save_and_reload_keeps_order_and_fields() {
    let temp = TempDir::new().unwrap();
    let notes = vec![
        Note::new("Zebra".into(), "last alphabetically".into()),
        Note::new("apple".into(), "first alphabetically".into()),
    ];

    let mut writer = store(&temp);
    writer.save_all(&notes).unwrap();

    let reloaded = store(&temp).get_all().unwrap();
    assert_eq!(reloaded, notes);
}

#[test]
fn slot_is_an_array_of_camel_case_records() {
    let temp = TempDir::new().unwrap();
    let mut s = store(&temp);
    s.add(Note::new("Title".into(), "Body".into())).unwrap();

    let raw = fs::read_to_string(temp.path().join("notes.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &value.as_array().unwrap()[0];

    for key in ["id", "title", "content", "createdAt", "updatedAt"] {
        assert!(record.get(key).is_some(), "missing {}", key);
    }
    assert!(record.get("created_at").is_none());
}

#[test]
fn storage_key_names_the_file() {
    let temp = TempDir::new().unwrap();
    let mut s = store(&temp).with_key("work");
    s.add(Note::new("Standup".into(), "at ten".into())).unwrap();

    assert!(temp.path().join("work.json").exists());
    assert!(store(&temp).get_all().unwrap().is_empty());
    assert_eq!(store(&temp).with_key("work").get_all().unwrap().len(), 1);
}

#[test]
fn missing_data_dir_is_created_on_write() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("a").join("b");
    let mut s = FileStore::new(nested.clone());
    s.save_all(&[Note::new("T".into(), "C".into())]).unwrap();
    assert!(nested.join("notes.json").exists());
}
