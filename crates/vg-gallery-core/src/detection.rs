use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectionResult {
    Detected,
    NotDetected,
    Unknown,
}

impl DetectionResult {
    /// Only the literals `"true"` and `"false"` are resolved outcomes; the
    /// server writes `"null"`, `"unknown"` or nothing for the rest.
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("true") => Self::Detected,
            Some("false") => Self::NotDetected,
            _ => Self::Unknown,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Detected => "true",
            Self::NotDetected => "false",
            Self::Unknown => "null",
        }
    }

    fn rank(self) -> u8 {
        match self {
            Self::NotDetected => 0,
            Self::Unknown => 1,
            Self::Detected => 2,
        }
    }

    /// No < Unknown < Yes.
    pub fn cmp_status(self, other: Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub id: String,
    pub src: String,
    pub filename: String,
    pub result: DetectionResult,
    pub subject: Option<String>,
}

impl ResultItem {
    pub fn new(id: impl Into<String>, filename: impl Into<String>, result: DetectionResult) -> Self {
        Self {
            id: id.into(),
            src: String::new(),
            filename: filename.into(),
            result,
            subject: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}
