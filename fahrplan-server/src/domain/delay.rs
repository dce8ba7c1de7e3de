//! Delay severity classification.

/// Display severity band for a delay, used for badge styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelaySeverity {
    /// No delay (absent or zero minutes)
    OnTime,
    /// 1 to 5 minutes
    Minor,
    /// More than 5 minutes
    Major,
}

impl DelaySeverity {
    /// Classify an optional delay in minutes.
    ///
    /// An absent delay and a zero-minute delay are equivalent: the generator's
    /// has-delay branch can roll a 0, which must still display as on-time.
    pub fn classify(delay: Option<u32>) -> Self {
        match delay {
            None | Some(0) => DelaySeverity::OnTime,
            Some(1..=5) => DelaySeverity::Minor,
            Some(_) => DelaySeverity::Major,
        }
    }

    /// CSS-class-style label for the badge.
    pub fn as_str(&self) -> &'static str {
        match self {
            DelaySeverity::OnTime => "on-time",
            DelaySeverity::Minor => "minor",
            DelaySeverity::Major => "major",
        }
    }
}
