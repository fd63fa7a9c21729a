//! Data models for storyboard feeds
//!
//! This module contains the core value types for timeline events and slides,
//! shaped to match the JSON documents the downstream renderers consume.
//! Every record is built once from an input row and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::app::services::csv_pipeline::format::{escape_text, format_content};
use crate::constants::{DAY_RANGE, MONTH_RANGE, TIMELINE_SCALE};

// =============================================================================
// Timeline Records
// =============================================================================

/// Calendar position of a timeline event
///
/// `month` and `day` are always inside their valid ranges; `year` is whatever
/// integer the feed supplied, negative years included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl EventDate {
    /// Build a date, forcing month and day into valid calendar ranges
    pub fn clamped(year: i32, month: i32, day: i32) -> Self {
        Self {
            year,
            month: month.clamp(MONTH_RANGE.0, MONTH_RANGE.1),
            day: day.clamp(DAY_RANGE.0, DAY_RANGE.1),
        }
    }
}

/// Display copy of a timeline event, escaped and ready for the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventText {
    /// Single-line headline, HTML-escaped
    pub headline: String,

    /// Body copy, HTML-escaped with soft line breaks expanded to markup
    pub text: String,
}

/// Media attachment for a timeline event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMedia {
    /// Media URL as authored, trimmed but not escaped
    pub url: String,

    /// Caption, HTML-escaped; may be empty
    pub caption: String,
}

/// A validated timeline entry
///
/// Serializes with the renderer's wire names: the date travels as
/// `start_date`, and `media` is omitted entirely when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    #[serde(rename = "start_date")]
    pub date: EventDate,

    pub text: EventText,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<EventMedia>,
}

/// JSON envelope handed to the timeline renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineDocument {
    pub scale: String,
    pub events: Vec<TimelineEvent>,
}

impl TimelineDocument {
    /// Wrap events in the envelope the renderer expects
    pub fn new(events: Vec<TimelineEvent>) -> Self {
        Self {
            scale: TIMELINE_SCALE.to_string(),
            events,
        }
    }
}

// =============================================================================
// Slide Records
// =============================================================================

/// A slide parsed from a feed row
///
/// `content` is stored as authored (trimmed, unescaped); [`Slide::render`]
/// produces the escaped markup at output time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub content: String,
}

impl Slide {
    /// Produce the escaped copy the deck renderer expects
    pub fn render(&self) -> RenderedSlide {
        RenderedSlide {
            title: escape_text(&self.title),
            content: format_content(&self.content),
        }
    }
}

/// Escaped slide copy, ready for the deck renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSlide {
    pub title: String,
    pub content: String,
}

/// JSON envelope handed to the deck renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideDocument {
    pub slides: Vec<RenderedSlide>,
}

impl SlideDocument {
    /// Render every slide into the envelope the renderer expects
    pub fn new(slides: &[Slide]) -> Self {
        Self {
            slides: slides.iter().map(Slide::render).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_date_clamping() {
        let date = EventDate::clamped(2000, 13, 0);
        assert_eq!(date.year, 2000);
        assert_eq!(date.month, 12);
        assert_eq!(date.day, 1);

        let date = EventDate::clamped(2000, -5, 99);
        assert_eq!(date.month, 1);
        assert_eq!(date.day, 31);

        // In-range values pass through untouched
        let date = EventDate::clamped(1969, 7, 20);
        assert_eq!((date.year, date.month, date.day), (1969, 7, 20));
    }

    #[test]
    fn test_event_serializes_with_wire_names() {
        let event = TimelineEvent {
            date: EventDate::clamped(1969, 7, 20),
            text: EventText {
                headline: "Moon Landing".to_string(),
                text: "Apollo 11 lands".to_string(),
            },
            media: None,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["start_date"]["year"], 1969);
        assert_eq!(value["text"]["headline"], "Moon Landing");
        assert!(value.get("media").is_none());
    }

    #[test]
    fn test_event_serializes_media_when_present() {
        let event = TimelineEvent {
            date: EventDate::clamped(1969, 7, 20),
            text: EventText {
                headline: "Moon Landing".to_string(),
                text: String::new(),
            },
            media: Some(EventMedia {
                url: "https://example.com/moon.jpg".to_string(),
                caption: "The Eagle".to_string(),
            }),
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["media"]["url"], "https://example.com/moon.jpg");
        assert_eq!(value["media"]["caption"], "The Eagle");
    }

    #[test]
    fn test_slide_render_escapes_and_expands_breaks() {
        let slide = Slide {
            title: "Q&A".to_string(),
            content: "first\\nsecond <line>".to_string(),
        };

        let rendered = slide.render();
        assert_eq!(rendered.title, "Q&amp;A");
        assert_eq!(rendered.content, "first<br>second &lt;line&gt;");
    }

    #[test]
    fn test_timeline_document_scale() {
        let document = TimelineDocument::new(Vec::new());
        assert_eq!(document.scale, "gregorian");
    }
}
