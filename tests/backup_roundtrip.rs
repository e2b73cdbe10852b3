//! Property tests for the backup codec
//!
//! The round-trip law: decoding an encoded store reconstructs the same
//! fairs, records, field values and collection order, for any store.

use chrono::NaiveDate;
use proptest::collection::{btree_map, vec};
use proptest::option;
use proptest::prelude::*;

use fairagenda_cli::storage::{decode, encode};
use fairagenda_cli::{
    AgendaStore, Exhibitor, FairDocument, Meeting, MeetingStatus, RecordId, Task,
};

fn record_id() -> impl Strategy<Value = RecordId> {
    "[a-z][a-z0-9-]{0,11}".prop_map(|s| s.parse().unwrap())
}

fn fair_id() -> impl Strategy<Value = String> {
    "[a-z]{2,8}-[0-9]{2}"
}

fn text() -> impl Strategy<Value = String> {
    "\\PC{0,20}"
}

fn date_time() -> impl Strategy<Value = String> {
    "20[0-9]{2}-[0-1][0-9]-[0-2][0-9]T[0-2][0-9]:[0-5][0-9]"
}

fn status() -> impl Strategy<Value = MeetingStatus> {
    prop_oneof![
        Just(MeetingStatus::Pending),
        Just(MeetingStatus::Completed),
        Just(MeetingStatus::Cancelled),
    ]
}

fn due_date() -> impl Strategy<Value = Option<NaiveDate>> {
    option::of(
        (2020i32..2031, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
    )
}

fn exhibitor() -> impl Strategy<Value = Exhibitor> {
    (
        record_id(),
        fair_id(),
        text(),
        text(),
        text(),
        text(),
        option::of(text()),
        option::of(text()),
    )
        .prop_map(
            |(id, fair_id, name, hall, stand, category, contact_name, email)| Exhibitor {
                id,
                fair_id,
                name,
                hall,
                stand,
                category,
                contact_name,
                email,
            },
        )
}

fn meeting() -> impl Strategy<Value = Meeting> {
    (
        record_id(),
        fair_id(),
        record_id(),
        date_time(),
        text(),
        text(),
        status(),
    )
        .prop_map(
            |(id, fair_id, exhibitor_id, date_time, location, notes, status)| Meeting {
                id,
                fair_id,
                exhibitor_id,
                date_time,
                location,
                notes,
                status,
            },
        )
}

fn task() -> impl Strategy<Value = Task> {
    (record_id(), fair_id(), text(), any::<bool>(), due_date()).prop_map(
        |(id, fair_id, description, completed, due_date)| Task {
            id,
            fair_id,
            description,
            completed,
            due_date,
        },
    )
}

fn document() -> impl Strategy<Value = FairDocument> {
    (vec(exhibitor(), 0..4), vec(meeting(), 0..4), vec(task(), 0..4)).prop_map(
        |(exhibitors, meetings, tasks)| FairDocument {
            exhibitors,
            meetings,
            tasks,
        },
    )
}

fn store() -> impl Strategy<Value = AgendaStore> {
    btree_map(fair_id(), document(), 0..4).prop_map(AgendaStore::from_documents)
}

proptest! {
    #[test]
    fn encode_decode_roundtrips(store in store()) {
        let text = encode(&store).unwrap();
        let decoded = decode(&text).unwrap();
        prop_assert_eq!(decoded, store);
    }

    #[test]
    fn decode_never_panics_on_arbitrary_input(input in "\\PC{0,200}") {
        let _ = decode(&input);
    }
}
