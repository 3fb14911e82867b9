use chrono::{DateTime, Duration, Months, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    OneDay,
    OneWeek,
    OneMonth,
    ThreeMonths,
    OneYear,
    All,
}

impl Timeframe {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "1d" => Some(Self::OneDay),
            "1w" => Some(Self::OneWeek),
            "1m" => Some(Self::OneMonth),
            "3m" => Some(Self::ThreeMonths),
            "1y" => Some(Self::OneYear),
            "all" => Some(Self::All),
            _ => None,
        }
    }

}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Fixed(Duration),
    Months(u32),
}

/// Sampling layout of a historical series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesShape {
    pub points: usize,
    pub step: Step,
    pub lookback: Duration,
    /// strftime pattern for axis labels.
    pub label_format: &'static str,
    /// Blank out repeated labels so each bucket is named once.
    pub sparse_labels: bool,
}

impl SeriesShape {
    /// Unrecognised labels get the one-month layout with day-level labels.
    pub fn for_label(label: &str) -> Self {
        match Timeframe::parse(label) {
            Some(tf) => Self::for_timeframe(tf),
            None => Self {
                label_format: "%b %d",
                sparse_labels: false,
                ..Self::for_timeframe(Timeframe::OneMonth)
            },
        }
    }

    pub fn for_timeframe(timeframe: Timeframe) -> Self {
        match timeframe {
            // 6.5h trading day in 5-minute bars.
            Timeframe::OneDay => Self {
                points: 78,
                step: Step::Fixed(Duration::minutes(5)),
                lookback: Duration::days(1),
                label_format: "%H:%M",
                sparse_labels: false,
            },
            Timeframe::OneWeek => Self {
                points: 7 * 6,
                step: Step::Fixed(Duration::hours(1)),
                lookback: Duration::weeks(1),
                label_format: "%a",
                sparse_labels: false,
            },
            Timeframe::OneMonth => Self {
                points: 30,
                step: Step::Fixed(Duration::days(1)),
                lookback: Duration::days(30),
                label_format: "Week %U",
                sparse_labels: true,
            },
            Timeframe::ThreeMonths => Self {
                points: 90,
                step: Step::Fixed(Duration::days(1)),
                lookback: Duration::days(90),
                label_format: "%b",
                sparse_labels: false,
            },
            Timeframe::OneYear => Self {
                points: 52,
                step: Step::Fixed(Duration::weeks(1)),
                lookback: Duration::days(365),
                label_format: "%b",
                sparse_labels: false,
            },
            Timeframe::All => Self {
                points: 60,
                step: Step::Months(1),
                lookback: Duration::days(365 * 5),
                label_format: "%Y",
                sparse_labels: false,
            },
        }
    }

    /// `points` instants starting at `now - lookback`.
    pub fn timestamps(&self, now: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        let start = now - self.lookback;
        (0..self.points)
            .map(|i| match self.step {
                Step::Fixed(step) => start + step * i as i32,
                Step::Months(n) => start
                    .checked_add_months(Months::new(n * i as u32))
                    .unwrap_or(start),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const LABELED: [(&str, Timeframe); 6] = [
        ("1d", Timeframe::OneDay),
        ("1w", Timeframe::OneWeek),
        ("1m", Timeframe::OneMonth),
        ("3m", Timeframe::ThreeMonths),
        ("1y", Timeframe::OneYear),
        ("all", Timeframe::All),
    ];

    #[test]
    fn parses_every_supported_label() {
        for (label, tf) in LABELED {
            assert_eq!(Timeframe::parse(label), Some(tf));
        }
        assert_eq!(Timeframe::parse("5y"), None);
        assert_eq!(Timeframe::parse("1M"), None);
    }

    #[test]
    fn unknown_label_uses_month_layout_with_day_labels() {
        let shape = SeriesShape::for_label("weird");
        assert_eq!(shape.points, 30);
        assert_eq!(shape.step, Step::Fixed(Duration::days(1)));
        assert_eq!(shape.label_format, "%b %d");
        assert!(!shape.sparse_labels);
    }

    #[test]
    fn point_counts_match_table() {
        let counts: Vec<usize> = LABELED
            .iter()
            .map(|(_, tf)| SeriesShape::for_timeframe(*tf).points)
            .collect();
        assert_eq!(counts, vec![78, 42, 30, 90, 52, 60]);
    }

    #[test]
    fn daily_timestamps_start_at_lookback() {
        let now = Utc.with_ymd_and_hms(2026, 3, 31, 12, 0, 0).unwrap();
        let ts = SeriesShape::for_timeframe(Timeframe::OneMonth).timestamps(now);
        assert_eq!(ts.len(), 30);
        assert_eq!(ts[0], Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap());
        assert_eq!(ts[29], Utc.with_ymd_and_hms(2026, 3, 30, 12, 0, 0).unwrap());
    }

    #[test]
    fn monthly_timestamps_step_by_calendar_month() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
        let ts = SeriesShape::for_timeframe(Timeframe::All).timestamps(now);
        assert_eq!(ts.len(), 60);
        let start = now - Duration::days(365 * 5);
        assert_eq!(ts[0], start);
        assert_eq!(ts[12], start.checked_add_months(Months::new(12)).unwrap());
    }
}
