//! Journal records and their question/answer pairs

use chrono::NaiveDateTime;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Storage format of record timestamps; sorts lexicographically
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Question/answer pairs in the order the questions were asked.
///
/// Serializes as a map keyed by question text, keeping that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pairs: Vec<(String, String)>,
}

impl Answers {
    pub fn new() -> Self {
        Answers { pairs: Vec::new() }
    }

    /// Record the answer to a question.
    ///
    /// Asking the same question twice replaces the earlier answer in place.
    pub fn insert(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        let question = question.into();
        let answer = answer.into();
        match self.pairs.iter_mut().find(|(q, _)| *q == question) {
            Some(pair) => pair.1 = answer,
            None => self.pairs.push((question, answer)),
        }
    }

    pub fn get(&self, question: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(q, _)| q == question)
            .map(|(_, a)| a.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(q, a)| (q.as_str(), a.as_str()))
    }

    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(q, _)| q.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize to the JSON object stored alongside the record
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl<Q, A> FromIterator<(Q, A)> for Answers
where
    Q: Into<String>,
    A: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (Q, A)>>(iter: I) -> Self {
        let mut answers = Answers::new();
        for (question, answer) in iter {
            answers.insert(question, answer);
        }
        answers
    }
}

impl Serialize for Answers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (question, answer) in &self.pairs {
            map.serialize_entry(question, answer)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Answers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AnswersVisitor;

        impl<'de> Visitor<'de> for AnswersVisitor {
            type Value = Answers;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of question text to answer text")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Answers, M::Error> {
                let mut answers = Answers::new();
                while let Some((question, answer)) = access.next_entry::<String, String>()? {
                    answers.insert(question, answer);
                }
                Ok(answers)
            }
        }

        deserializer.deserialize_map(AnswersVisitor)
    }
}

/// One completed journaling session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub profile: String,
    pub mode: String,
    pub lang: String,
    pub timestamp: NaiveDateTime,
    pub answers: Answers,
}

impl Record {
    /// Timestamp in its stored, sortable form
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Parse a stored timestamp
pub fn parse_timestamp(value: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
}
