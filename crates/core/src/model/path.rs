use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::AssessmentError;

/// Rendered in place of a segment that was not supplied.
pub const UNDEFINED_SEGMENT: &str = "undefined";

const ASSESSMENT_PREFIX: &str = "assessment";
const RELATIVE_BASE: &str = "app://localhost/";

/// The subject/topic/subtopic triple an assessment is generated for.
///
/// Segments are used only for text interpolation and are never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentPath {
    subject: Option<String>,
    topic: Option<String>,
    subtopic: Option<String>,
}

impl AssessmentPath {
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        topic: impl Into<String>,
        subtopic: impl Into<String>,
    ) -> Self {
        Self {
            subject: Some(subject.into()),
            topic: Some(topic.into()),
            subtopic: Some(subtopic.into()),
        }
    }

    /// Builds a path from possibly missing segments; empty strings count as missing.
    #[must_use]
    pub fn from_segments(
        subject: Option<String>,
        topic: Option<String>,
        subtopic: Option<String>,
    ) -> Self {
        let keep = |value: Option<String>| value.filter(|s| !s.is_empty());
        Self {
            subject: keep(subject),
            topic: keep(topic),
            subtopic: keep(subtopic),
        }
    }

    /// Parses `/assessment/<subject>/<topic>/<subtopic>`, absolute or relative.
    ///
    /// Trailing segments may be missing.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::InvalidUrl` when the input cannot be parsed and
    /// `AssessmentError::NotAssessmentPath` when the first segment is not `assessment`.
    pub fn parse(raw: &str) -> Result<Self, AssessmentError> {
        let url = match Url::parse(raw) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE)
                .and_then(|base| base.join(raw))
                .map_err(|_| AssessmentError::InvalidUrl {
                    raw: raw.to_string(),
                })?,
            Err(_) => {
                return Err(AssessmentError::InvalidUrl {
                    raw: raw.to_string(),
                });
            }
        };
        Self::from_url(&url)
    }

    /// Segments are percent-decoded before they are stored.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::NotAssessmentPath` when the url does not point
    /// at an assessment route.
    pub fn from_url(url: &Url) -> Result<Self, AssessmentError> {
        let not_assessment = || AssessmentError::NotAssessmentPath {
            raw: url.to_string(),
        };
        let mut segments = url.path_segments().ok_or_else(not_assessment)?;
        if segments.next() != Some(ASSESSMENT_PREFIX) {
            return Err(not_assessment());
        }
        let mut next = || {
            segments
                .next()
                .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        };
        let (subject, topic, subtopic) = (next(), next(), next());
        Ok(Self::from_segments(subject, topic, subtopic))
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_deref().unwrap_or(UNDEFINED_SEGMENT)
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        self.topic.as_deref().unwrap_or(UNDEFINED_SEGMENT)
    }

    #[must_use]
    pub fn subtopic(&self) -> &str {
        self.subtopic.as_deref().unwrap_or(UNDEFINED_SEGMENT)
    }

    /// Topic with dashes shown as spaces.
    #[must_use]
    pub fn display_topic(&self) -> String {
        humanize(self.topic())
    }

    /// Subtopic with dashes shown as spaces.
    #[must_use]
    pub fn display_subtopic(&self) -> String {
        humanize(self.subtopic())
    }

    /// "subject / topic / subtopic" breadcrumb.
    #[must_use]
    pub fn breadcrumb(&self) -> String {
        format!(
            "{} / {} / {}",
            self.subject(),
            self.display_topic(),
            self.display_subtopic()
        )
    }

    #[must_use]
    pub fn assessment_route(&self) -> String {
        format!(
            "/assessment/{}/{}/{}",
            self.subject(),
            self.topic(),
            self.subtopic()
        )
    }

    #[must_use]
    pub fn classroom_route(&self) -> String {
        format!(
            "/classroom/{}/{}/{}",
            self.subject(),
            self.topic(),
            self.subtopic()
        )
    }
}

fn humanize(segment: &str) -> String {
    segment.replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_become_spaces_for_display() {
        let path = AssessmentPath::new("physics", "classical-mechanics", "newtons-laws");
        assert_eq!(path.display_topic(), "classical mechanics");
        assert_eq!(path.display_subtopic(), "newtons laws");
        assert_eq!(path.subtopic(), "newtons-laws");
        assert_eq!(
            path.breadcrumb(),
            "physics / classical mechanics / newtons laws"
        );
    }

    #[test]
    fn missing_segments_render_as_undefined() {
        let path = AssessmentPath::from_segments(Some("math".into()), None, Some(String::new()));
        assert_eq!(path.topic(), "undefined");
        assert_eq!(path.display_subtopic(), "undefined");
    }

    #[test]
    fn parses_relative_and_absolute_paths() {
        let rel = AssessmentPath::parse("/assessment/physics/optics/refraction").unwrap();
        assert_eq!(rel, AssessmentPath::new("physics", "optics", "refraction"));

        let abs = AssessmentPath::parse("https://school.test/assessment/bio/cells").unwrap();
        assert_eq!(abs.subject(), "bio");
        assert_eq!(abs.topic(), "cells");
        assert_eq!(abs.subtopic(), UNDEFINED_SEGMENT);
    }

    #[test]
    fn parsed_segments_are_percent_decoded() {
        let path = AssessmentPath::parse("/assessment/física/óptica/lentes").unwrap();
        assert_eq!(path.subject(), "física");
        assert_eq!(path.breadcrumb(), "física / óptica / lentes");

        let path = AssessmentPath::parse("/assessment/physics/optics/thin lenses").unwrap();
        assert_eq!(path.subtopic(), "thin lenses");
        assert_eq!(path.display_subtopic(), "thin lenses");

        let path = AssessmentPath::parse("/assessment/physics/optics/thin%2Dlenses").unwrap();
        assert_eq!(path.display_subtopic(), "thin lenses");
    }

    #[test]
    fn rejects_other_routes() {
        let err = AssessmentPath::parse("/classroom/physics/optics/refraction").unwrap_err();
        assert!(matches!(err, AssessmentError::NotAssessmentPath { .. }));
    }

    #[test]
    fn routes_round_trip_raw_segments() {
        let path = AssessmentPath::new("physics", "optics", "thin-lenses");
        assert_eq!(path.assessment_route(), "/assessment/physics/optics/thin-lenses");
        assert_eq!(path.classroom_route(), "/classroom/physics/optics/thin-lenses");
    }
}
