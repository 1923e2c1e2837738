use onboard_core::{OutboxSender, ProjectRecord};
use tempfile::TempDir;

/// Helper function to create an outbox sender writing into a temp dir
pub fn create_test_outbox() -> (TempDir, OutboxSender) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let sender = OutboxSender::new(temp_dir.path().join("outbox"));
    (temp_dir, sender)
}

/// A record that passes every step, as it would arrive from a JSON file
pub fn complete_record() -> ProjectRecord {
    serde_json::from_str(
        r##"{
            "fullName": "Jane Doe",
            "businessName": "Doe Bakes",
            "email": "jane@x.com",
            "phone": "555-0100",
            "location": "NY",
            "businessType": "Restaurant",
            "websiteStyle": "Modern",
            "primaryColor": "#ff8800",
            "layoutPreference": "Single Page",
            "features": ["Home Page", "Contact Form"],
            "hasWebsite": "No",
            "budget": "Under $1,000",
            "timeline": "Flexible",
            "description": "Online menu and ordering"
        }"##,
    )
    .expect("Failed to parse record")
}
