use chrono::{TimeZone, Utc};
use liftbook_domain as domain;

pub static WORKOUT: std::sync::LazyLock<domain::Workout> =
    std::sync::LazyLock::new(|| domain::Workout {
        id: 1.into(),
        name: domain::Name::new("My Workout").unwrap(),
        exercises: vec![
            domain::Exercise {
                id: 2.into(),
                name: domain::Name::new("Squat").unwrap(),
                sets: vec![
                    domain::Set {
                        id: 3.into(),
                        reps: domain::Reps::new("10").unwrap(),
                        weight: domain::Weight::new("100").unwrap(),
                    },
                    domain::Set {
                        id: 4.into(),
                        reps: domain::Reps::new("8").unwrap(),
                        weight: domain::Weight::new("102.5").unwrap(),
                    },
                ],
            },
            domain::Exercise {
                id: 5.into(),
                name: domain::Name::new("Bench Press").unwrap(),
                sets: vec![],
            },
        ],
        date: Utc.with_ymd_and_hms(2024, 5, 17, 18, 30, 0).unwrap(),
    });

pub static WORKOUT_2: std::sync::LazyLock<domain::Workout> =
    std::sync::LazyLock::new(|| domain::Workout {
        id: 6.into(),
        name: domain::Name::new("Pull Day").unwrap(),
        exercises: vec![domain::Exercise {
            id: 7.into(),
            name: domain::Name::new("Deadlift").unwrap(),
            sets: vec![domain::Set {
                id: 8.into(),
                reps: domain::Reps::new("5").unwrap(),
                weight: domain::Weight::new("140").unwrap(),
            }],
        }],
        date: Utc.with_ymd_and_hms(2024, 5, 19, 7, 5, 9).unwrap()
            + chrono::TimeDelta::milliseconds(250),
    });
