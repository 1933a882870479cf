// SPDX-License-Identifier: MPL-2.0
//! School calendar events and the legend over their kinds.

use iced::Color;

/// Category of a calendar event, mapped to a badge color in the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Academic,
    Enrollment,
    Event,
    Deadline,
    Holiday,
    Exam,
}

impl EventKind {
    /// All kinds in legend display order.
    pub const ALL: [EventKind; 6] = [
        EventKind::Academic,
        EventKind::Enrollment,
        EventKind::Event,
        EventKind::Deadline,
        EventKind::Holiday,
        EventKind::Exam,
    ];

    /// Legend label for this kind.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Academic => "Academic",
            EventKind::Enrollment => "Enrollment",
            EventKind::Event => "Event",
            EventKind::Deadline => "Deadline",
            EventKind::Holiday => "Holiday",
            EventKind::Exam => "Exam",
        }
    }

    /// Badge color for this kind.
    pub fn color(self) -> Color {
        use crate::ui::design_tokens::palette;
        match self {
            EventKind::Academic => palette::PRIMARY_500,
            EventKind::Enrollment => palette::SUCCESS_500,
            EventKind::Event => Color::from_rgb(0.66, 0.33, 0.97),
            EventKind::Deadline => palette::ERROR_500,
            EventKind::Holiday => palette::GOLD_500,
            EventKind::Exam => Color::from_rgb(0.98, 0.57, 0.24),
        }
    }
}

/// One dated entry on the school calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Short display date, e.g. `"Jan 20-24"`.
    pub date: &'static str,
    pub label: &'static str,
    pub kind: EventKind,
}

/// All calendar events in chronological order.
pub const CALENDAR: &[CalendarEvent] = &[
    CalendarEvent { date: "Jan 6", label: "Classes Resume", kind: EventKind::Academic },
    CalendarEvent { date: "Jan 15", label: "Enrollment Period Starts", kind: EventKind::Enrollment },
    CalendarEvent { date: "Jan 20-24", label: "University Week", kind: EventKind::Event },
    CalendarEvent { date: "Jan 25", label: "Scholarship Deadline", kind: EventKind::Deadline },
    CalendarEvent { date: "Feb 1", label: "Last Day of Enrollment", kind: EventKind::Enrollment },
    CalendarEvent { date: "Feb 14", label: "Valentine's Day (No Classes)", kind: EventKind::Holiday },
    CalendarEvent { date: "Feb 25", label: "EDSA Anniversary (Holiday)", kind: EventKind::Holiday },
    CalendarEvent { date: "Mar 10-14", label: "Midterm Examinations", kind: EventKind::Exam },
    CalendarEvent { date: "Mar 28", label: "Maundy Thursday (Holiday)", kind: EventKind::Holiday },
    CalendarEvent { date: "Mar 29", label: "Good Friday (Holiday)", kind: EventKind::Holiday },
];
