// SPDX-License-Identifier: MPL-2.0
//! Campus office directory, including the wayfinding slides each office owns.
//!
//! To change the slides for an office, edit its `map_slides` list here and
//! drop the matching SVGs under `assets/maps/`. Offices without slides are
//! listed but get no map button.

/// One campus office shown as a directory card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Office {
    pub name: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    /// Short description shown above the map slideshow.
    pub description: &'static str,
    /// Wayfinding slides in walking order, as embedded asset identifiers.
    pub map_slides: &'static [&'static str],
}

impl Office {
    /// Whether the office has wayfinding slides to show.
    pub fn has_map(&self) -> bool {
        !self.map_slides.is_empty()
    }
}

/// All offices in display order.
pub const DIRECTORY: &[Office] = &[
    Office {
        name: "Registrar's Office",
        location: "Main Building, Ground Floor",
        phone: "(02) 8292-0246",
        email: "registrar@plv.edu.ph",
        description: "Enrollment, grades, transcript of records, and other student records.",
        map_slides: &["maps/registrar-1.svg", "maps/registrar-2.svg", "maps/registrar-3.svg"],
    },
    Office {
        name: "Student Affairs Office",
        location: "Main Building, 2nd Floor",
        phone: "(02) 8292-0247",
        email: "studentaffairs@plv.edu.ph",
        description: "School IDs, student organizations, and campus activities.",
        map_slides: &["maps/student-affairs-1.svg", "maps/student-affairs-2.svg"],
    },
    Office {
        name: "Accounting Office",
        location: "Admin Building, Room 101",
        phone: "(02) 8292-0248",
        email: "accounting@plv.edu.ph",
        description: "Payments, assessments, and fee-related concerns.",
        map_slides: &["maps/accounting-1.svg", "maps/accounting-2.svg"],
    },
    Office {
        name: "Library",
        location: "Library Building, All Floors",
        phone: "(02) 8292-0249",
        email: "library@plv.edu.ph",
        description: "Books, research materials, and quiet study areas.",
        map_slides: &["maps/library-1.svg"],
    },
    Office {
        name: "Guidance Office",
        location: "Student Center, Room 201",
        phone: "(02) 8292-0250",
        email: "guidance@plv.edu.ph",
        description: "Counseling services and student support programs.",
        map_slides: &[],
    },
];
