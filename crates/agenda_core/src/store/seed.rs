//! Built-in sample dataset.
//!
//! Used only when no structurally valid snapshot exists in the slot. Ids
//! are generated fresh each process start; the seed is never merged with
//! restored data.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::model::{Contact, Event, Location, Recurrence};
use crate::store::State;

fn location(title: &str, address: &str, latitude: f64, longitude: f64) -> Location {
    Location {
        id: Uuid::new_v4(),
        title: title.to_string(),
        address: address.to_string(),
        latitude,
        longitude,
    }
}

fn contact(salutation: &str, full_name: &str, id_number: &str, email: &str, phone: &str) -> Contact {
    Contact {
        id: Uuid::new_v4(),
        salutation: salutation.to_string(),
        full_name: full_name.to_string(),
        id_number: id_number.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        photo: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn event(
    title: &str,
    invited: &[&str],
    date: (i32, u32, u32),
    time: (u32, u32),
    description: &str,
    recurrence: Recurrence,
    reminder_minutes_before: Option<u32>,
    category: &str,
    location_id: Option<Uuid>,
) -> Event {
    Event {
        id: Uuid::new_v4(),
        title: title.to_string(),
        invited: invited.iter().map(|name| name.to_string()).collect(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("seed date is valid"),
        time: NaiveTime::from_hms_opt(time.0, time.1, 0).expect("seed time is valid"),
        timezone: "America/Denver".to_string(),
        description: description.to_string(),
        recurrence,
        reminder_minutes_before,
        category: category.to_string(),
        location_id,
    }
}

/// Returns the fixed startup dataset: six locations, seven contacts and
/// five events referencing the first five locations.
pub fn seed() -> State {
    let locations = vec![
        location("Main Auditorium", "123 Evergreen Ave", -33.4489, -70.6693),
        location("Conference Room A", "456 Elm Street", -33.45, -70.67),
        location("Computer Lab", "789 Technology Ave", -33.451, -70.671),
        location("Central Library", "101 Reading Lane", -33.452, -70.672),
        location("Gymnasium", "202 Wellness Ave", -33.453, -70.673),
        location("Workshop Room", "303 Creative Street", -33.454, -70.674),
    ];

    let contacts = vec![
        contact("Mr.", "John Perez", "10000001", "john.perez@example.com", "+56910000001"),
        contact("Mrs.", "Maria Gonzalez", "10000002", "maria.gonzalez@example.com", "+56910000002"),
        contact("Ms.", "Ana Fernandez", "10000003", "ana.fernandez@example.com", "+56910000003"),
        contact("Dr.", "Robert Martinez", "10000004", "robert.martinez@example.com", "+56910000004"),
        contact("Dr.", "Laura Ramirez", "10000005", "laura.ramirez@example.com", "+56910000005"),
        contact("Eng.", "Carl Soto", "10000006", "carl.soto@example.com", "+56910000006"),
        contact("Prof.", "Elena Torres", "10000007", "elena.torres@example.com", "+56910000007"),
    ];

    let events = vec![
        event(
            "Technology Conference",
            &["john.perez@example.com", "maria.gonzalez@example.com"],
            (2025, 7, 1),
            (10, 0),
            "Talk on current technology trends.",
            Recurrence::None,
            Some(30),
            "Conference",
            Some(locations[0].id),
        ),
        event(
            "Programming Workshop",
            &["ana.fernandez@example.com", "carl.soto@example.com"],
            (2025, 7, 5),
            (14, 0),
            "Hands-on workshop on building web applications.",
            Recurrence::None,
            Some(60),
            "Workshop",
            Some(locations[1].id),
        ),
        event(
            "Mathematics Seminar",
            &["robert.martinez@example.com"],
            (2025, 7, 10),
            (9, 0),
            "Advanced algebra seminar.",
            Recurrence::Weekly,
            Some(15),
            "Seminar",
            Some(locations[2].id),
        ),
        event(
            "Project X Kickoff",
            &["laura.ramirez@example.com", "carl.soto@example.com"],
            (2025, 7, 12),
            (11, 0),
            "Planning session for Project X.",
            Recurrence::None,
            Some(10),
            "Meeting",
            Some(locations[3].id),
        ),
        event(
            "Sports Clinic",
            &["miguel.silva@example.com", "patricia.lopez@example.com"],
            (2025, 7, 15),
            (16, 0),
            "Guided activities at the gymnasium.",
            Recurrence::Monthly,
            Some(120),
            "Clinic",
            Some(locations[4].id),
        ),
    ];

    State {
        events,
        locations,
        contacts,
    }
}
