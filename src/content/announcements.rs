// SPDX-License-Identifier: MPL-2.0
//! Campus announcements shown on the announcements page.

/// One announcement card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Announcement {
    pub title: &'static str,
    pub date: &'static str,
    pub body: &'static str,
    /// Urgent announcements get the gold accent treatment.
    pub urgent: bool,
}

/// All announcements in display order.
pub const ANNOUNCEMENTS: &[Announcement] = &[
    Announcement {
        title: "Enrollment for 2nd Semester Now Open",
        date: "January 15, 2025",
        body: "Online enrollment for the 2nd semester is now open. Please check your \
               enrollment schedule and prepare the necessary documents.",
        urgent: true,
    },
    Announcement {
        title: "University Week Celebration",
        date: "January 20, 2025",
        body: "Join us in celebrating PLV's founding anniversary! Various activities and \
               competitions await all students.",
        urgent: false,
    },
    Announcement {
        title: "Library Extended Hours",
        date: "January 18, 2025",
        body: "The library will have extended hours from 7AM to 9PM during finals week to \
               accommodate students' study needs.",
        urgent: false,
    },
    Announcement {
        title: "Scholarship Application Deadline",
        date: "January 25, 2025",
        body: "Reminder: The deadline for scholarship applications is approaching. Submit \
               your requirements before the deadline.",
        urgent: true,
    },
];
