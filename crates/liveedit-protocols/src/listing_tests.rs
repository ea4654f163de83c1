use super::*;

fn entry(name: &str, path: &str, kind: FsEntryKind) -> FsEntry {
    FsEntry {
        name: name.to_string(),
        path: path.to_string(),
        kind,
    }
}

#[test]
fn test_entry_kind_wire_names() {
    let dir = entry("pages", "site/pages", FsEntryKind::Directory);
    let json = serde_json::to_value(&dir).unwrap();
    assert_eq!(json["type"], "directory");

    let file = entry("index.html", "site/index.html", FsEntryKind::File);
    let json = serde_json::to_value(&file).unwrap();
    assert_eq!(json["type"], "file");
}

#[test]
fn test_listing_parent_path_null_at_root() {
    let listing = DirectoryListing {
        current_path: String::new(),
        parent_path: None,
        directories: vec![],
        files: vec![],
        items: vec![],
    };
    let json = serde_json::to_value(&listing).unwrap();
    assert!(json["parentPath"].is_null());
    assert_eq!(json["currentPath"], "");
}

#[test]
fn test_listing_wire_shape() {
    let dir = entry("sub", "sub", FsEntryKind::Directory);
    let file = entry("a.html", "a.html", FsEntryKind::File);
    let listing = DirectoryListing {
        current_path: String::new(),
        parent_path: None,
        directories: vec![dir.clone()],
        files: vec![file.clone()],
        items: vec![dir, file],
    };

    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["directories"].as_array().unwrap().len(), 1);
    assert_eq!(json["files"].as_array().unwrap().len(), 1);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
    assert_eq!(json["items"][0]["type"], "directory");
    assert_eq!(json["items"][1]["name"], "a.html");
}

#[test]
fn test_listing_roundtrip() {
    let json = r#"{
        "currentPath": "site",
        "parentPath": "",
        "directories": [{"name": "css", "path": "site/css", "type": "directory"}],
        "files": [{"name": "index.html", "path": "site/index.html", "type": "file"}],
        "items": []
    }"#;
    let listing: DirectoryListing = serde_json::from_str(json).unwrap();
    assert_eq!(listing.current_path, "site");
    assert_eq!(listing.parent_path.as_deref(), Some(""));
    assert_eq!(listing.directories[0].kind, FsEntryKind::Directory);
}
