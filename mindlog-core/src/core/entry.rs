use crate::MindlogError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Fixed sentiment classification attached to every entry.
///
/// Serialized as a lowercase string (`"rad"` through `"awful"`), matching the
/// persisted wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Rad,
    Good,
    Meh,
    Bad,
    Awful,
}

impl Mood {
    /// All moods, in display order from best to worst.
    pub const ALL: [Mood; 5] = [Mood::Rad, Mood::Good, Mood::Meh, Mood::Bad, Mood::Awful];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Rad => "rad",
            Mood::Good => "good",
            Mood::Meh => "meh",
            Mood::Bad => "bad",
            Mood::Awful => "awful",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = MindlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rad" => Ok(Mood::Rad),
            "good" => Ok(Mood::Good),
            "meh" => Ok(Mood::Meh),
            "bad" => Ok(Mood::Bad),
            "awful" => Ok(Mood::Awful),
            other => Err(MindlogError::ValidationFailed(format!(
                "unknown mood: {other}"
            ))),
        }
    }
}

/// A single journaling record capturing mood and optional context for one
/// moment in time.
///
/// `id`, `date` and `mood` are set at creation and never change; `favorite`
/// is the only field mutable afterwards, via
/// [`Journal::toggle_favorite`](crate::Journal::toggle_favorite).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub text: String,
    pub mood: Mood,
    pub sleep: Option<String>,
    pub social: Option<String>,
    pub date: DateTime<Utc>,
    pub favorite: bool,
}

impl JournalEntry {
    /// Creates a new entry with a fresh UUID, the current time, and
    /// `favorite` unset.
    pub fn new(text: String, mood: Mood, sleep: Option<String>, social: Option<String>) -> Self {
        JournalEntry {
            id: Uuid::new_v4().to_string(),
            text,
            mood,
            sleep,
            social,
            date: Utc::now(),
            favorite: false,
        }
    }
}

/// The shape the presentation layer submits when creating an entry.
///
/// `mood` is optional here so the core can reject a missing selection itself
/// rather than relying on the form to enforce it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryDraft {
    pub text: String,
    pub mood: Option<Mood>,
    pub sleep: Option<String>,
    pub social: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_serializes_lowercase() {
        let json = serde_json::to_string(&Mood::Rad).unwrap();
        assert_eq!(json, r#""rad""#);
        let back: Mood = serde_json::from_str(r#""awful""#).unwrap();
        assert_eq!(back, Mood::Awful);
    }

    #[test]
    fn test_mood_from_str() {
        assert_eq!("meh".parse::<Mood>().unwrap(), Mood::Meh);
        assert!("ecstatic".parse::<Mood>().is_err());
    }

    #[test]
    fn test_mood_all_covers_every_variant() {
        assert_eq!(Mood::ALL.len(), 5);
        for mood in Mood::ALL {
            assert_eq!(mood.as_str().parse::<Mood>().unwrap(), mood);
        }
    }

    #[test]
    fn test_new_entry_defaults() {
        let before = Utc::now();
        let entry = JournalEntry::new("ok".to_string(), Mood::Good, Some("8h".to_string()), None);

        assert!(!entry.id.is_empty());
        assert!(!entry.favorite);
        assert_eq!(entry.mood, Mood::Good);
        assert_eq!(entry.sleep.as_deref(), Some("8h"));
        assert!(entry.social.is_none());
        assert!(entry.date >= before && entry.date <= Utc::now());
    }

    #[test]
    fn test_entry_date_serializes_as_iso_8601() {
        let entry = JournalEntry::new(String::new(), Mood::Meh, None, None);
        let json = serde_json::to_value(&entry).unwrap();

        let date = json["date"].as_str().expect("date should be a string");
        assert!(date.contains('T'), "expected ISO-8601 timestamp, got {date}");

        let back: JournalEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
