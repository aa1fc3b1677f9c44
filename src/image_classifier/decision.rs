use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Cat,
    Dog,
}

impl Label {
    pub const ALL: [Label; 2] = [Label::Cat, Label::Dog];

    /// Display name, also used as the feedback directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Cat => "Cat",
            Label::Dog => "Dog",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub label: Label,
    pub confidence_percent: u8,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Prediction: {} with {}% confidence.",
            self.label, self.confidence_percent
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid score (cat: {cat}, dog: {dog})")]
pub struct InvalidScore {
    pub cat: f64,
    pub dog: f64,
}

/// Picks the label with the strictly larger score; equal scores go to Dog.
/// The percentage is truncated, not rounded.
pub fn decide(cat: f64, dog: f64) -> Result<Prediction, InvalidScore> {
    if !cat.is_finite() || !dog.is_finite() {
        return Err(InvalidScore { cat, dog });
    }

    let (label, score) = if cat > dog {
        (Label::Cat, cat)
    } else {
        (Label::Dog, dog)
    };

    let confidence_percent = (score * 100.0).trunc().clamp(0.0, 100.0) as u8;

    Ok(Prediction {
        label,
        confidence_percent,
    })
}
