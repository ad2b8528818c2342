//! Mergington High School activity set loaded at startup.

use activities_core::Result;

use crate::types::{ActivityName, ActivityRecord, Email};

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Practice and compete in interschool basketball games",
        schedule: "Wednesdays and Fridays, 4:00 PM - 6:00 PM",
        max_participants: 15,
        participants: &["alex@mergington.edu"],
    },
    SeedActivity {
        name: "Swimming Club",
        description: "Improve swimming technique and train for meets",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: &["mia@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore painting, drawing and sculpture",
        schedule: "Mondays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["lily@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act, direct and produce school plays and performances",
        schedule: "Wednesdays, 3:30 PM - 5:30 PM",
        max_participants: 25,
        participants: &["ella@mergington.edu"],
    },
    SeedActivity {
        name: "Math Club",
        description: "Solve challenging problems and prepare for math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 15,
        participants: &["james@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 16,
        participants: &["charlotte@mergington.edu"],
    },
];

/// The standard activity set, in display order.
///
/// An invalid participant address is a defect in the table and fails the
/// whole load.
pub fn mergington_activities() -> Result<Vec<(ActivityName, ActivityRecord)>> {
    SEED.iter()
        .map(|seed| {
            let participants = seed
                .participants
                .iter()
                .map(|raw| Email::parse(raw))
                .collect::<Result<Vec<_>>>()?;
            let record = ActivityRecord::new(seed.description, seed.schedule, seed.max_participants)
                .with_participants(participants);
            Ok((ActivityName::new(seed.name), record))
        })
        .collect()
}
