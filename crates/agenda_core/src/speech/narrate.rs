//! Read-aloud sentence builders.
//!
//! List screens narrate whole rows; these helpers turn records into the
//! sentences they hand to the controller. The event builder resolves the
//! weak location reference and says "none" when it dangles.

use std::fmt::Write;

use crate::model::{Contact, Event, Location};

pub fn contact_sentence(contact: &Contact) -> String {
    format!(
        "Salutation {}. Full name {}. Identification {}. Email {}. Phone {}.",
        contact.salutation, contact.full_name, contact.id_number, contact.email, contact.phone
    )
}

pub fn location_sentence(location: &Location) -> String {
    format!(
        "Title {}. Address {}. Latitude {}. Longitude {}.",
        location.title, location.address, location.latitude, location.longitude
    )
}

pub fn event_sentence(event: &Event, locations: &[Location]) -> String {
    let place = event
        .location_id
        .and_then(|id| locations.iter().find(|location| location.id == id))
        .map_or("none", |location| location.title.as_str());

    let mut sentence = format!(
        "Title {}. Date {}. Time {}. Time zone {}.",
        event.title,
        event.date,
        event.time.format("%H:%M"),
        event.timezone
    );
    if !event.invited.is_empty() {
        let _ = write!(sentence, " Invited {}.", event.invited.join(", "));
    }
    if !event.description.is_empty() {
        let _ = write!(sentence, " Description {}.", event.description);
    }
    let _ = write!(sentence, " Repeats {}.", event.recurrence.label());
    if let Some(minutes) = event.reminder_minutes_before {
        let _ = write!(sentence, " Reminder {minutes} minutes before.");
    }
    if !event.category.is_empty() {
        let _ = write!(sentence, " Category {}.", event.category);
    }
    let _ = write!(sentence, " Location {place}.");
    sentence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn contact_sentence_narrates_every_field() {
        let state = seed();
        let contact = &state.contacts[0];
        let sentence = contact_sentence(contact);
        for field in [
            &contact.salutation,
            &contact.full_name,
            &contact.id_number,
            &contact.email,
            &contact.phone,
        ] {
            assert!(sentence.contains(field.as_str()));
        }
    }

    #[test]
    fn location_sentence_narrates_every_field() {
        let state = seed();
        let location = &state.locations[0];
        let sentence = location_sentence(location);
        assert!(sentence.contains(&location.title));
        assert!(sentence.contains(&location.address));
        assert!(sentence.contains(&location.latitude.to_string()));
        assert!(sentence.contains(&location.longitude.to_string()));
    }

    #[test]
    fn event_sentence_resolves_live_location() {
        let state = seed();
        let sentence = event_sentence(&state.events[0], &state.locations);
        assert!(sentence.contains(&state.locations[0].title));
        assert!(!sentence.contains("Location none"));
    }

    #[test]
    fn event_sentence_says_none_for_dangling_reference() {
        let state = seed();
        // Narrate against an empty location list, as after a delete.
        let sentence = event_sentence(&state.events[0], &[]);
        assert!(sentence.contains("Location none."));
    }
}
