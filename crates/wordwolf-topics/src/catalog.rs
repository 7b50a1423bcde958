//! Static topic catalog.
//!
//! Topic ids are 1-based and contiguous. Anything that stores a topic id can
//! resolve it back through [`topic_by_id`].

use serde::Serialize;

/// A paired discussion prompt.
///
/// Citizens on a team all receive `citizen_prompt`; the wolf receives
/// `wolf_prompt`. Prompts within a pair deliberately overlap so that answers
/// sound compatible across the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Stable 1-based identifier referenced from session snapshots.
    pub id: u32,
    /// Display grouping shown when browsing the catalog.
    pub category: &'static str,
    /// Prompt handed to every citizen on the team.
    pub citizen_prompt: &'static str,
    /// Prompt handed to the team's wolf.
    pub wolf_prompt: &'static str,
}

const TOPICS: &[Topic] = &[
    Topic {
        id: 1,
        category: "School days",
        citizen_prompt: "The kind of person you looked up to at school",
        wolf_prompt: "The kind of person you had a crush on at school",
    },
    Topic {
        id: 2,
        category: "School days",
        citizen_prompt: "A trait of a teacher you respected",
        wolf_prompt: "A trait of a teacher you could not stand",
    },
    Topic {
        id: 3,
        category: "School days",
        citizen_prompt: "An embarrassing memory with your best friend from school",
        wolf_prompt: "A treasured memory with your first crush from school",
    },
    Topic {
        id: 4,
        category: "School days",
        citizen_prompt: "Something you secretly did during class",
        wolf_prompt: "Something you quietly looked forward to at school",
    },
    Topic {
        id: 5,
        category: "School days",
        citizen_prompt: "The best part of a school trip",
        wolf_prompt: "Something you hoped would happen on a school trip but never did",
    },
    Topic {
        id: 6,
        category: "School days",
        citizen_prompt: "What you spent most of your allowance on as a student",
        wolf_prompt: "A fad from your school days you secretly found ridiculous",
    },
    Topic {
        id: 7,
        category: "School days",
        citizen_prompt: "Something you hid from your parents as a student",
        wolf_prompt: "Something you hid from your teachers as a student",
    },
    Topic {
        id: 8,
        category: "School days",
        citizen_prompt: "A place you often stopped at on the way home from school",
        wolf_prompt: "A place you often visited with your family",
    },
    Topic {
        id: 9,
        category: "School days",
        citizen_prompt: "Your favorite spot in the school building",
        wolf_prompt: "The school spot the ghost stories were about",
    },
    Topic {
        id: 10,
        category: "School days",
        citizen_prompt: "A school lunch dish you loved",
        wolf_prompt: "A packed lunch from home you loved",
    },
    Topic {
        id: 11,
        category: "Lately",
        citizen_prompt: "Something you have been afraid to look at lately",
        wolf_prompt: "Something you look at to cheer yourself up lately",
    },
    Topic {
        id: 12,
        category: "Lately",
        citizen_prompt: "Something you have more of lately",
        wolf_prompt: "Something you are slowly losing lately",
    },
    Topic {
        id: 13,
        category: "Lately",
        citizen_prompt: "Something that made you sad recently",
        wolf_prompt: "Something a friend asked your advice about recently",
    },
    Topic {
        id: 14,
        category: "Lately",
        citizen_prompt: "A small good deed you did recently",
        wolf_prompt: "A time someone let you down recently",
    },
    Topic {
        id: 15,
        category: "Lately",
        citizen_prompt: "A habit you wish people around you would stop",
        wolf_prompt: "Something pointless you cannot stop watching",
    },
    Topic {
        id: 16,
        category: "Personal",
        citizen_prompt: "A part of your personality you like",
        wolf_prompt: "A part of your personality you should really fix",
    },
    Topic {
        id: 17,
        category: "Personal",
        citizen_prompt: "Something about you that people praise unexpectedly",
        wolf_prompt: "Something you would want as a gift from your favorite celebrity",
    },
    Topic {
        id: 18,
        category: "Personal",
        citizen_prompt: "The one thing you refuse to compromise on",
        wolf_prompt: "A thing you love that makes other people back away",
    },
];

/// Returns the full catalog in id order.
#[must_use]
pub fn catalog() -> &'static [Topic] {
    TOPICS
}

/// Looks up a topic by id.
#[must_use]
pub fn topic_by_id(id: u32) -> Option<&'static Topic> {
    TOPICS.iter().find(|topic| topic.id == id)
}

/// Returns every topic id, in catalog order.
///
/// Round setup draws from this list when assigning a topic to each team.
#[must_use]
pub fn topic_ids() -> Vec<u32> {
    TOPICS.iter().map(|topic| topic.id).collect()
}
