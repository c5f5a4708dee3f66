//! Fixtures shared by unit tests

use serde_json::json;

use crate::models::{ReviewBundle, ReviewPayload};

pub fn review_json(id: i64, status: &str, reviewed_by: Option<i64>) -> serde_json::Value {
    json!({
        "application": {
            "id": id,
            "first_name": "Amina",
            "middle_name": "N.",
            "last_name": "Okello",
            "date_of_birth": "2006-04-02",
            "gender": "Female",
            "nationality": "Ugandan",
            "email": "amina@example.com",
            "phone": "+256700000000",
            "program": "Sciences",
            "batch": "2025 Intake",
            "status": status,
            "fee_paid": true,
            "created_at": "2024-01-05T10:00:00Z",
            "updated_at": "2024-01-06T10:00:00Z",
            "reviewed_by": reviewed_by,
            "reviewed_at": reviewed_by.map(|_| "2024-01-07T09:30:00Z")
        },
        "olevel_results": [
            {"id": 5, "grade": "A", "subject": 3},
            {"id": 6, "grade": "B", "subject": {"id": 4, "name": "Math"}}
        ],
        "alevel_results": [
            {"id": 9, "grade": "C", "subject": {"id": 8, "name": "Physics"}}
        ],
        "documents": [
            {"id": 1, "name": "Transcript", "type": "transcript",
             "uploaded_at": "2024-01-05T10:00:00Z", "file": "/media/t.pdf"},
            {"id": 2, "name": "Photo", "type": "passport_photo",
             "uploaded_at": "2024-01-05T10:00:00Z", "file": "/media/p.jpg"}
        ]
    })
}

pub fn review_bundle(id: i64) -> ReviewBundle {
    let payload: ReviewPayload =
        serde_json::from_value(review_json(id, "submitted", None)).expect("fixture parses");
    ReviewBundle::from(payload)
}
