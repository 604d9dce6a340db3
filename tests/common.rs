use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use std::process::Output;

pub fn notelit() -> Command {
    cargo_bin_cmd!("notelit")
}

#[allow(dead_code)]
pub fn extract_id(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .find(|line| line.starts_with("nl-"))
        .map(|line| line.trim().to_string())
        .expect("Failed to extract ID from output")
}

/// Write a cache file with a known set of notes:
/// - "Grocery List", created 2025-03-29, labels work+home+errands
/// - "Study Plan", created 2025-04-30, updated 2025-05-01
/// - "Meeting Notes", created 2025-04-01, pinned, label work
#[allow(dead_code)]
pub fn seed_cache(cache: &Path) {
    let json = r##"{
  "notes": [
    {
      "id": "nl-grocery",
      "title": "Grocery List",
      "content": "milk and eggs",
      "labels": [
        { "name": "work", "color": "#3366ff" },
        { "name": "home", "color": "#33cc66" },
        { "name": "errands", "color": "#cc6633" }
      ],
      "created_at": "2025-03-29T00:00:00Z"
    },
    {
      "id": "nl-study",
      "title": "Study Plan",
      "content": "rust ownership chapter",
      "created_at": "2025-04-30T00:00:00Z",
      "updated_at": "2025-05-01T00:00:00Z"
    },
    {
      "id": "nl-meeting",
      "title": "Meeting Notes",
      "content": "standup follow-ups",
      "labels": [{ "name": "work", "color": "#3366ff" }],
      "is_pinned": true,
      "pinned_at": "2025-04-02T00:00:00Z",
      "created_at": "2025-04-01T00:00:00Z"
    }
  ]
}"##;
    fs::write(cache, json).expect("Failed to seed cache");
}
